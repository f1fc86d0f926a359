// Mon Oct 19 2026 - Alex

use super::command::{factory, Command, CommandFactory};
use indexmap::IndexMap;

/// Immutable table from namespace ("generate resources") to command factory.
///
/// Built once through [`RegistryBuilder`]; there is no way to insert or remove
/// entries afterwards.
pub struct Registry<'a> {
    commands: IndexMap<String, CommandFactory<'a>>,
}

impl<'a> Registry<'a> {
    pub fn builder() -> RegistryBuilder<'a> {
        RegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get_key_value(&self, namespace: &str) -> Option<(&str, &CommandFactory<'a>)> {
        self.commands
            .get_key_value(namespace)
            .map(|(key, factory)| (key.as_str(), factory))
    }

    /// Instantiates a fresh command for `namespace`.
    pub fn create(&self, namespace: &str) -> Option<Box<dyn Command + 'a>> {
        self.commands.get(namespace).map(|make| make())
    }

    /// Namespaces in registration order.
    pub fn namespaces(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Single-token namespaces.
    pub fn top_level(&self) -> Vec<&str> {
        self.commands
            .keys()
            .map(String::as_str)
            .filter(|ns| !ns.contains(' '))
            .collect()
    }

    /// Namespaces exactly one token deeper than `parent`.
    pub fn children(&self, parent: &str) -> Vec<&str> {
        let prefix = format!("{} ", parent);
        self.commands
            .keys()
            .map(String::as_str)
            .filter(|ns| {
                ns.strip_prefix(prefix.as_str())
                    .map_or(false, |rest| !rest.contains(' '))
            })
            .collect()
    }
}

pub struct RegistryBuilder<'a> {
    commands: IndexMap<String, CommandFactory<'a>>,
}

impl<'a> RegistryBuilder<'a> {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// Registers `make` under `namespace`.
    ///
    /// # Panics
    ///
    /// The table is a fixed definition, so a malformed or duplicate namespace
    /// is a programming error and panics here rather than surfacing at runtime.
    pub fn register<C, F>(self, namespace: &str, make: F) -> Self
    where
        C: Command + 'a,
        F: Fn() -> C + 'a,
    {
        self.register_factory(namespace, factory(make))
    }

    pub fn register_factory(mut self, namespace: &str, make: CommandFactory<'a>) -> Self {
        assert!(
            is_valid_namespace(namespace),
            "invalid command namespace {:?}: expected non-empty tokens separated by single spaces",
            namespace
        );
        assert!(
            !self.commands.contains_key(namespace),
            "duplicate command namespace {:?}",
            namespace
        );

        self.commands.insert(namespace.to_string(), make);
        self
    }

    pub fn build(self) -> Registry<'a> {
        Registry {
            commands: self.commands,
        }
    }
}

impl Default for RegistryBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_namespace_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

pub fn is_valid_namespace(namespace: &str) -> bool {
    namespace.split(' ').all(is_namespace_token)
}

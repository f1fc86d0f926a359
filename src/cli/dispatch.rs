// Mon Oct 19 2026 - Alex

use super::command::CommandFactory;
use super::registry::{is_namespace_token, Registry};
use crate::error::CommandError;

/// A resolved namespace plus the arguments that belong to the command.
pub struct Match<'r, 'a> {
    pub namespace: &'r str,
    pub factory: &'r CommandFactory<'a>,
    pub remaining: &'r [String],
}

/// What a single dispatch did. Turned into an exit status by `exit::translate`.
#[derive(Debug)]
pub enum Outcome {
    /// No arguments at all; root help was shown.
    Empty,
    Version,
    /// Root help requested explicitly with a help flag.
    Help,
    /// Help flag following a resolved namespace.
    CommandHelp { namespace: String },
    Unrecognized,
    Completed {
        namespace: String,
        result: Result<i32, CommandError>,
    },
}

/// Finds the longest registered namespace that prefixes `args`, token-wise.
///
/// Candidates are tried from the longest run of namespace-shaped leading
/// tokens down to a single token; the first hit wins.
pub fn resolve<'r, 'a>(args: &'r [String], registry: &'r Registry<'a>) -> Option<Match<'r, 'a>> {
    let depth = args
        .iter()
        .take_while(|token| is_namespace_token(token))
        .count();

    (1..=depth).rev().find_map(|len| {
        let candidate = args[..len].join(" ");
        registry
            .get_key_value(&candidate)
            .map(|(namespace, factory)| Match {
                namespace,
                factory,
                remaining: &args[len..],
            })
    })
}

// Mon Oct 19 2026 - Alex

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub name: String,
    pub synopsis: String,
}

impl HelpEntry {
    pub fn new(name: &str, synopsis: &str) -> Self {
        Self {
            name: name.to_string(),
            synopsis: synopsis.to_string(),
        }
    }
}

pub type HelpFunc<'a> = Box<dyn Fn(&[HelpEntry]) -> String + 'a>;

/// Root help in the conventional "Usage / Available commands" layout.
pub fn basic_help_func<'a>(app: &str) -> HelpFunc<'a> {
    let app = app.to_string();
    Box::new(move |entries: &[HelpEntry]| {
        format!(
            "Usage: {} [--version] [--help] <command> [<args>]\n\nAvailable commands are:\n{}\n",
            app,
            format_entries(entries)
        )
    })
}

/// One line per entry, sorted by name, names padded to the longest one.
pub fn format_entries(entries: &[HelpEntry]) -> String {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);

    entries
        .iter()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .map(|e| format!("    {:<width$}    {}", e.name, e.synopsis, width = width))
        .join("\n")
}

pub fn command_help(help: &str, subcommands: &[HelpEntry]) -> String {
    let mut text = help.trim_end().to_string();
    if !subcommands.is_empty() {
        text.push_str("\n\nSubcommands:\n");
        text.push_str(&format_entries(subcommands));
    }
    text.push('\n');
    text
}

// Mon Oct 19 2026 - Alex

use crate::cli::Command;
use crate::config::PROGRAM_NAME;
use crate::error::CommandError;

/// Parent of a command group. Running it only ever shows help; the
/// dispatcher appends the list of subcommands.
pub struct NamespaceCommand {
    name: &'static str,
    summary: &'static str,
    synopsis: &'static str,
}

impl NamespaceCommand {
    pub fn generate() -> Self {
        Self {
            name: "generate",
            summary: "Generate Terraform Plugin Framework code from an intermediate\n    representation (IR) JSON file.",
            synopsis: "Generate Terraform Plugin Framework code",
        }
    }

    pub fn scaffold() -> Self {
        Self {
            name: "scaffold",
            summary: "Create starter Terraform Plugin Framework code for a provider, resource\n    or data source.",
            synopsis: "Create starter Terraform Plugin Framework code",
        }
    }
}

impl Command for NamespaceCommand {
    fn run(&mut self, _args: &[String]) -> Result<i32, CommandError> {
        Err(CommandError::ShowHelp)
    }

    fn help(&self) -> String {
        format!(
            "Usage: {} {} <subcommand> [<args>]\n\n    {}\n",
            PROGRAM_NAME, self.name, self.summary
        )
    }

    fn synopsis(&self) -> String {
        self.synopsis.to_string()
    }
}

// Mon Oct 19 2026 - Alex

use super::args::ScaffoldArgs;
use super::backend::{Backend, ScaffoldKind};
use super::usage_error;
use crate::cli::Command;
use crate::config::PROGRAM_NAME;
use crate::error::CommandError;
use crate::ui::Ui;
use clap::Parser;

/// `scaffold resource|data-source|provider`.
pub struct ScaffoldCommand<'a> {
    ui: &'a dyn Ui,
    backend: &'a dyn Backend,
    kind: ScaffoldKind,
}

impl<'a> ScaffoldCommand<'a> {
    pub fn new(ui: &'a dyn Ui, backend: &'a dyn Backend, kind: ScaffoldKind) -> Self {
        Self { ui, backend, kind }
    }
}

impl Command for ScaffoldCommand<'_> {
    fn run(&mut self, args: &[String]) -> Result<i32, CommandError> {
        let parsed = ScaffoldArgs::try_parse_from(args)
            .map_err(|e| usage_error(self.ui, &self.help(), &e.to_string()))?;
        parsed
            .validate()
            .map_err(|e| usage_error(self.ui, &self.help(), &e))?;

        let request = parsed.into_request(self.kind);
        if request.force {
            log::debug!("Overwriting {:?} if present", request.target_path());
        }

        let path = self.backend.scaffold(&request).map_err(|e| {
            self.ui.error(&format!("Error executing command: {}", e));
            CommandError::from(e)
        })?;

        self.ui.output(&format!(
            "Scaffolded {} {:?} at {}",
            self.kind.label(),
            request.name,
            path.display()
        ));
        Ok(0)
    }

    fn help(&self) -> String {
        format!(
            "Usage: {} scaffold {} [<args>]

    Create starter code for a {}.

Options:

    --name <NAME>          Name in snake_case (required).
    --output-dir <DIR>     Directory for the new file. Defaults to the
                           current directory.
    --output-file <FILE>   File name. Defaults to <name>_{}.go.
    --package <NAME>       Package name. Defaults to provider.
    --force                Overwrite an existing file.
",
            PROGRAM_NAME,
            self.kind.subcommand(),
            self.kind.label(),
            self.kind.file_suffix()
        )
    }

    fn synopsis(&self) -> String {
        format!("Create starter code for a {}", self.kind.label())
    }
}

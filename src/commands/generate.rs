// Mon Oct 19 2026 - Alex

use super::args::GenerateArgs;
use super::backend::{Backend, GenerateTarget};
use super::usage_error;
use crate::cli::Command;
use crate::config::PROGRAM_NAME;
use crate::error::CommandError;
use crate::ui::Ui;
use clap::Parser;

/// `generate all|resources|data-sources|provider`.
pub struct GenerateCommand<'a> {
    ui: &'a dyn Ui,
    backend: &'a dyn Backend,
    target: GenerateTarget,
}

impl<'a> GenerateCommand<'a> {
    pub fn new(ui: &'a dyn Ui, backend: &'a dyn Backend, target: GenerateTarget) -> Self {
        Self { ui, backend, target }
    }
}

impl Command for GenerateCommand<'_> {
    fn run(&mut self, args: &[String]) -> Result<i32, CommandError> {
        let parsed = GenerateArgs::try_parse_from(args)
            .map_err(|e| usage_error(self.ui, &self.help(), &e.to_string()))?;
        parsed
            .validate()
            .map_err(|e| usage_error(self.ui, &self.help(), &e))?;

        let request = parsed.into_request(self.target);
        log::info!(
            "Generating {} from {:?} into {:?}",
            self.target.description(),
            request.input,
            request.output
        );

        match self.backend.generate(&request) {
            Ok(paths) => {
                for path in &paths {
                    self.ui.output(&format!("Generated {}", path.display()));
                }
                Ok(0)
            }
            Err(e) => {
                self.ui.error(&format!("Error executing command: {}", e));
                Err(e.into())
            }
        }
    }

    fn help(&self) -> String {
        format!(
            "Usage: {} generate {} [<args>]

    Generate code for {} from an intermediate representation (IR)
    JSON file.

Options:

    --input <PATH>     Path to the IR JSON file (required).
    --output <DIR>     Directory for generated code. Defaults to ./output.
    --package <NAME>   Package name for generated code.
",
            PROGRAM_NAME,
            self.target.subcommand(),
            self.target.description()
        )
    }

    fn synopsis(&self) -> String {
        format!("Generate code for {}", self.target.description())
    }
}

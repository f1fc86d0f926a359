// Mon Oct 19 2026 - Alex

pub mod args;
pub mod backend;
pub mod generate;
pub mod namespace;
pub mod scaffold;

pub use args::{GenerateArgs, ScaffoldArgs};
pub use backend::{Backend, DryRun, GenerateRequest, GenerateTarget, ScaffoldKind, ScaffoldRequest};
pub use generate::GenerateCommand;
pub use namespace::NamespaceCommand;
pub use scaffold::ScaffoldCommand;

use crate::cli::Registry;
use crate::error::CommandError;
use crate::ui::Ui;

static DRY_RUN: DryRun = DryRun;

/// The command table, backed by the dry-run backend.
pub fn build<'a>(ui: &'a dyn Ui) -> Registry<'a> {
    build_with_backend(ui, &DRY_RUN)
}

pub fn build_with_backend<'a>(ui: &'a dyn Ui, backend: &'a dyn Backend) -> Registry<'a> {
    Registry::builder()
        // Code generation
        .register("generate", NamespaceCommand::generate)
        .register("generate all", move || GenerateCommand::new(ui, backend, GenerateTarget::All))
        .register("generate resources", move || {
            GenerateCommand::new(ui, backend, GenerateTarget::Resources)
        })
        .register("generate data-sources", move || {
            GenerateCommand::new(ui, backend, GenerateTarget::DataSources)
        })
        .register("generate provider", move || {
            GenerateCommand::new(ui, backend, GenerateTarget::Provider)
        })
        // Scaffolding
        .register("scaffold", NamespaceCommand::scaffold)
        .register("scaffold resource", move || ScaffoldCommand::new(ui, backend, ScaffoldKind::Resource))
        .register("scaffold data-source", move || {
            ScaffoldCommand::new(ui, backend, ScaffoldKind::DataSource)
        })
        .register("scaffold provider", move || ScaffoldCommand::new(ui, backend, ScaffoldKind::Provider))
        .build()
}

/// Reports a flag problem the way every leaf command does: message, then help.
fn usage_error(ui: &dyn Ui, help: &str, message: &str) -> CommandError {
    ui.error(&format!("Error parsing command-line flags: {}", message.trim_end()));
    ui.error("");
    ui.error(help.trim_end());
    CommandError::InvalidArguments(message.trim_end().to_string())
}

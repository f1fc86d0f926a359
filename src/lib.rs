// Mon Oct 19 2026 - Alex

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ui;

pub use cli::{run_cli, utf8_args, Cli, Command, Registry, Streams};
pub use config::Config;
pub use error::{BackendError, CommandError, UiError};
pub use ui::{BasicUi, ColoredUi, Ui};

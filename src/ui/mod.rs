// Mon Oct 19 2026 - Alex

pub mod basic;
pub mod color;
pub mod mock;

pub use basic::BasicUi;
pub use color::{ColoredUi, UiColor};
pub use mock::{MockUi, SharedBuffer};

use crate::error::UiError;

/// Terminal interaction shared by every command for the lifetime of the process.
///
/// Calls are synchronous and assume a single caller. Implementations use
/// interior mutability for their sinks, so the trait only needs `&self` and a
/// single reference can be handed to every command.
pub trait Ui {
    /// Writes a line to the ordinary output sink.
    fn output(&self, message: &str);

    /// Informational line, written to the ordinary output sink.
    fn info(&self, message: &str);

    /// Writes a line to the error sink.
    fn error(&self, message: &str);

    /// Warning line, written to the error sink.
    fn warn(&self, message: &str);

    /// Writes `query` and blocks until a line is read or input ends.
    fn ask(&self, query: &str) -> Result<String, UiError>;

    /// Like `ask`, for values that should not be echoed.
    fn ask_secret(&self, query: &str) -> Result<String, UiError>;
}

impl<T: Ui + ?Sized> Ui for &T {
    fn output(&self, message: &str) {
        (**self).output(message)
    }

    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn ask(&self, query: &str) -> Result<String, UiError> {
        (**self).ask(query)
    }

    fn ask_secret(&self, query: &str) -> Result<String, UiError> {
        (**self).ask_secret(query)
    }
}

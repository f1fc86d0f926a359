// Mon Oct 19 2026 - Alex

use super::{BasicUi, Ui};
use crate::error::UiError;
use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

/// Cloneable in-memory writer; every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.borrow()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A `BasicUi` over in-memory buffers, for tests and embedding.
pub struct MockUi {
    ui: BasicUi<'static>,
    output: SharedBuffer,
    error: SharedBuffer,
}

impl MockUi {
    pub fn new() -> Self {
        Self::with_input("")
    }

    pub fn with_input(input: &str) -> Self {
        let output = SharedBuffer::new();
        let error = SharedBuffer::new();
        let ui = BasicUi::new(Cursor::new(input.to_string()), output.clone(), error.clone());
        Self { ui, output, error }
    }

    pub fn output_text(&self) -> String {
        self.output.contents()
    }

    pub fn error_text(&self) -> String {
        self.error.contents()
    }
}

impl Default for MockUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for MockUi {
    fn output(&self, message: &str) {
        self.ui.output(message)
    }

    fn info(&self, message: &str) {
        self.ui.info(message)
    }

    fn error(&self, message: &str) {
        self.ui.error(message)
    }

    fn warn(&self, message: &str) {
        self.ui.warn(message)
    }

    fn ask(&self, query: &str) -> Result<String, UiError> {
        self.ui.ask(query)
    }

    fn ask_secret(&self, query: &str) -> Result<String, UiError> {
        self.ui.ask_secret(query)
    }
}

// Mon Oct 19 2026 - Alex

use super::Ui;
use crate::error::UiError;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// Plain UI over one reader and two writers. No color, no buffering of its own.
///
/// When `tty` is set the reader is the process terminal, and `ask_secret`
/// reads from the terminal with echo turned off instead of from `reader`.
pub struct BasicUi<'a> {
    reader: RefCell<Box<dyn BufRead + 'a>>,
    writer: RefCell<Box<dyn Write + 'a>>,
    error_writer: RefCell<Box<dyn Write + 'a>>,
    tty: bool,
}

impl<'a> BasicUi<'a> {
    pub fn new<R, W, E>(reader: R, writer: W, error_writer: E) -> Self
    where
        R: BufRead + 'a,
        W: Write + 'a,
        E: Write + 'a,
    {
        Self {
            reader: RefCell::new(Box::new(reader)),
            writer: RefCell::new(Box::new(writer)),
            error_writer: RefCell::new(Box::new(error_writer)),
            tty: false,
        }
    }

    pub fn with_tty(mut self, tty: bool) -> Self {
        self.tty = tty;
        self
    }

    fn write_line(sink: &RefCell<Box<dyn Write + 'a>>, message: &str) {
        let mut sink = sink.borrow_mut();
        if let Err(e) = writeln!(sink, "{}", message).and_then(|_| sink.flush()) {
            log::debug!("Failed to write UI message: {}", e);
        }
    }

    fn prompt(&self, query: &str) -> Result<(), UiError> {
        let mut writer = self.writer.borrow_mut();
        write!(writer, "{} ", query)?;
        writer.flush()?;
        Ok(())
    }

    fn read_line(&self) -> Result<String, UiError> {
        let mut line = String::new();
        let read = self.reader.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            return Err(UiError::EndOfInput);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(trimmed.to_string())
    }
}

impl Ui for BasicUi<'_> {
    fn output(&self, message: &str) {
        Self::write_line(&self.writer, message);
    }

    fn info(&self, message: &str) {
        self.output(message);
    }

    fn error(&self, message: &str) {
        Self::write_line(&self.error_writer, message);
    }

    fn warn(&self, message: &str) {
        self.error(message);
    }

    fn ask(&self, query: &str) -> Result<String, UiError> {
        self.prompt(query)?;
        self.read_line()
    }

    fn ask_secret(&self, query: &str) -> Result<String, UiError> {
        self.prompt(query)?;
        if !self.tty {
            return self.read_line();
        }

        rpassword::read_password().map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => UiError::EndOfInput,
            _ => UiError::Io(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SharedBuffer;
    use std::io::Cursor;

    fn basic_ui(input: &str) -> (BasicUi<'static>, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let ui = BasicUi::new(Cursor::new(input.to_string()), out.clone(), err.clone());
        (ui, out, err)
    }

    #[test]
    fn test_output_and_error_use_separate_sinks() {
        let (ui, out, err) = basic_ui("");
        ui.output("hello");
        ui.info("details");
        ui.error("broken");
        ui.warn("careful");

        assert_eq!(out.contents(), "hello\ndetails\n");
        assert_eq!(err.contents(), "broken\ncareful\n");
    }

    #[test]
    fn test_ask_reads_one_line() {
        let (ui, out, _) = basic_ui("yes\r\nno\n");
        assert_eq!(ui.ask("Continue?").unwrap(), "yes");
        assert_eq!(ui.ask("Again?").unwrap(), "no");
        assert_eq!(out.contents(), "Continue? Again? ");
    }

    #[test]
    fn test_ask_without_trailing_newline() {
        let (ui, _, _) = basic_ui("last");
        assert_eq!(ui.ask("Name:").unwrap(), "last");
    }

    #[test]
    fn test_ask_end_of_input() {
        let (ui, _, _) = basic_ui("");
        assert!(matches!(ui.ask("Name:"), Err(UiError::EndOfInput)));
    }

    #[test]
    fn test_ask_secret() {
        let (ui, out, _) = basic_ui("hunter2\n");
        assert_eq!(ui.ask_secret("Token:").unwrap(), "hunter2");
        assert_eq!(out.contents(), "Token: ");
        assert!(matches!(ui.ask_secret("Token:"), Err(UiError::EndOfInput)));
    }

    #[test]
    fn test_ask_secret_without_trailing_newline() {
        let (ui, _, _) = basic_ui("hunter2");
        assert_eq!(ui.ask_secret("Token:").unwrap(), "hunter2");

        let (ui, _, _) = basic_ui("hunter2");
        assert_eq!(ui.ask("Token:").unwrap(), "hunter2");
    }
}

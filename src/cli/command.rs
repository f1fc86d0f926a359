// Mon Oct 19 2026 - Alex

use crate::error::CommandError;

/// A runnable subcommand. One instance serves exactly one `run`.
pub trait Command {
    /// Runs with the arguments left over after namespace resolution.
    ///
    /// `Ok(code)` is passed through as the process exit status. Any `Err`
    /// becomes exit status 1; the command is expected to have written its own
    /// diagnostics to the UI before returning it.
    fn run(&mut self, args: &[String]) -> Result<i32, CommandError>;

    /// Long-form help text.
    fn help(&self) -> String;

    /// One-line summary shown in command listings.
    fn synopsis(&self) -> String;
}

/// Produces a fresh command for every call.
pub type CommandFactory<'a> = Box<dyn Fn() -> Box<dyn Command + 'a> + 'a>;

pub fn factory<'a, C, F>(make: F) -> CommandFactory<'a>
where
    C: Command + 'a,
    F: Fn() -> C + 'a,
{
    Box::new(move || Box::new(make()) as Box<dyn Command + 'a>)
}

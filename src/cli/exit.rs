// Mon Oct 19 2026 - Alex

use super::dispatch::Outcome;

pub const SUCCESS_EXIT_CODE: i32 = 0;
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Exit status when invoked with no arguments at all. Showing root help is
/// not a successful run, so this is a failure status.
pub const EMPTY_ARGS_EXIT_CODE: i32 = 1;

/// Maps a dispatch outcome to the process exit status.
///
/// An error from the command always wins over any code it might otherwise
/// have produced; a plain `Ok(code)` passes through verbatim.
pub fn translate(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Empty => EMPTY_ARGS_EXIT_CODE,
        Outcome::Version | Outcome::Help | Outcome::CommandHelp { .. } => SUCCESS_EXIT_CODE,
        Outcome::Unrecognized => FAILURE_EXIT_CODE,
        Outcome::Completed { result: Err(_), .. } => FAILURE_EXIT_CODE,
        Outcome::Completed { result: Ok(code), .. } => *code,
    }
}

// Mon Oct 19 2026 - Alex

pub mod command;
pub mod dispatch;
pub mod exit;
pub mod help;
pub mod registry;

pub use command::{factory, Command, CommandFactory};
pub use dispatch::{resolve, Match, Outcome};
pub use exit::{translate, EMPTY_ARGS_EXIT_CODE};
pub use help::{basic_help_func, HelpEntry, HelpFunc};
pub use registry::{Registry, RegistryBuilder};

use crate::commands;
use crate::config::Config;
use crate::error::CommandError;
use crate::ui::{BasicUi, ColoredUi, Ui};
use std::cell::RefCell;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};

const VERSION_FLAGS: [&str; 3] = ["-v", "-version", "--version"];
const HELP_FLAGS: [&str; 3] = ["-h", "-help", "--help"];

/// The process streams handed to `run_cli`.
pub struct Streams<'s> {
    pub stdin: Box<dyn BufRead + 's>,
    pub stdout: Box<dyn Write + 's>,
    pub stderr: Box<dyn Write + 's>,
    /// Destination for help text. The process stderr in practice.
    pub help: Box<dyn Write + 's>,
    /// Whether `stdin` is an interactive terminal.
    pub stdin_is_tty: bool,
}

impl Streams<'static> {
    pub fn process() -> Self {
        Self {
            stdin: Box::new(io::stdin().lock()),
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
            help: Box::new(io::stderr()),
            stdin_is_tty: atty::is(atty::Stream::Stdin),
        }
    }
}

/// Resolves an argument vector against a registry and runs the command.
pub struct Cli<'a> {
    version_output: String,
    registry: Registry<'a>,
    ui: &'a dyn Ui,
    help_writer: RefCell<Box<dyn Write + 'a>>,
    help_func: HelpFunc<'a>,
}

impl<'a> Cli<'a> {
    /// `version_output` is printed verbatim for the version flags.
    pub fn new(name: &str, version_output: &str, registry: Registry<'a>, ui: &'a dyn Ui) -> Self {
        Self {
            version_output: version_output.to_string(),
            registry,
            ui,
            help_writer: RefCell::new(Box::new(io::stderr())),
            help_func: basic_help_func(name),
        }
    }

    pub fn with_help_writer<W: Write + 'a>(mut self, writer: W) -> Self {
        self.help_writer = RefCell::new(Box::new(writer));
        self
    }

    pub fn with_help_func(mut self, help_func: HelpFunc<'a>) -> Self {
        self.help_func = help_func;
        self
    }

    /// Dispatches `args` and returns the process exit status.
    pub fn run(&self, args: &[String]) -> i32 {
        let outcome = self.dispatch(args);
        let code = translate(&outcome);
        log::debug!("Dispatch finished with {:?}, exit status {}", outcome, code);
        code
    }

    /// Dispatches `args`, writing help or version text where the outcome calls for it.
    pub fn dispatch(&self, args: &[String]) -> Outcome {
        let Some(first) = args.first() else {
            self.write_help(&self.root_help());
            return Outcome::Empty;
        };

        if VERSION_FLAGS.contains(&first.as_str()) {
            self.ui.output(&self.version_output);
            return Outcome::Version;
        }

        if HELP_FLAGS.contains(&first.as_str()) {
            self.write_help(&self.root_help());
            return Outcome::Help;
        }

        let Some(found) = resolve(args, &self.registry) else {
            log::debug!("No command registered for {:?}", args);
            self.write_help(&self.root_help());
            return Outcome::Unrecognized;
        };

        let namespace = found.namespace.to_string();
        log::debug!(
            "Resolved {:?} with {} remaining argument(s)",
            namespace,
            found.remaining.len()
        );

        let mut command = (found.factory)();

        if wants_help(found.remaining) {
            self.write_help(&self.command_help(&namespace, &*command));
            return Outcome::CommandHelp { namespace };
        }

        log::info!("Running command {:?}", namespace);
        let result = command.run(found.remaining);

        match &result {
            Err(CommandError::ShowHelp) => {
                self.write_help(&self.command_help(&namespace, &*command));
            }
            Err(e) => log::debug!("Command {:?} failed: {}", namespace, e),
            Ok(code) => log::debug!("Command {:?} returned {}", namespace, code),
        }

        Outcome::Completed { namespace, result }
    }

    pub fn root_help(&self) -> String {
        let entries = self.entries(self.registry.top_level(), "");
        (self.help_func)(&entries)
    }

    pub fn command_help(&self, namespace: &str, command: &dyn Command) -> String {
        let children = self.entries(self.registry.children(namespace), namespace);
        help::command_help(&command.help(), &children)
    }

    fn entries(&self, namespaces: Vec<&str>, parent: &str) -> Vec<HelpEntry> {
        namespaces
            .into_iter()
            .filter_map(|ns| {
                let command = self.registry.create(ns)?;
                let name = ns
                    .strip_prefix(parent)
                    .map(str::trim_start)
                    .unwrap_or(ns);
                Some(HelpEntry::new(name, &command.synopsis()))
            })
            .collect()
    }

    fn write_help(&self, text: &str) {
        let mut writer = self.help_writer.borrow_mut();
        if let Err(e) = writeln!(writer, "{}", text.trim_end()).and_then(|_| writer.flush()) {
            log::debug!("Failed to write help: {}", e);
        }
    }
}

fn wants_help(args: &[String]) -> bool {
    args.iter()
        .take_while(|arg| arg.as_str() != "--")
        .any(|arg| HELP_FLAGS.contains(&arg.as_str()))
}

/// Converts raw process arguments, handing back the first one that is not UTF-8.
pub fn utf8_args<I>(args: I) -> Result<Vec<String>, OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter().map(OsString::into_string).collect()
}

/// Builds the UI and command table from `config` and dispatches `args`.
pub fn run_cli(config: &Config, args: &[String], streams: Streams<'_>) -> i32 {
    let Streams {
        stdin,
        stdout,
        stderr,
        help,
        stdin_is_tty,
    } = streams;

    let basic = BasicUi::new(stdin, stdout, stderr).with_tty(stdin_is_tty);
    let ui = ColoredUi::new(basic, config.use_color);
    let registry = commands::build(&ui);
    let cli = Cli::new(&config.name, &config.version_output(), registry, &ui).with_help_writer(help);

    cli.run(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUi, SharedBuffer};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::io::Cursor;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(&'static str, Vec<String>)>>>;

    struct StubCommand {
        name: &'static str,
        result: fn() -> Result<i32, CommandError>,
        calls: Calls,
    }

    impl Command for StubCommand {
        fn run(&mut self, args: &[String]) -> Result<i32, CommandError> {
            self.calls.borrow_mut().push((self.name, args.to_vec()));
            (self.result)()
        }

        fn help(&self) -> String {
            format!("Usage: app {}", self.name)
        }

        fn synopsis(&self) -> String {
            format!("The {} command", self.name)
        }
    }

    fn stub<'a>(
        name: &'static str,
        result: fn() -> Result<i32, CommandError>,
        calls: &Calls,
    ) -> impl Fn() -> StubCommand + 'a {
        let calls = Rc::clone(calls);
        move || StubCommand {
            name,
            result,
            calls: Rc::clone(&calls),
        }
    }

    struct Harness {
        ui: MockUi,
        help: SharedBuffer,
        calls: Calls,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                ui: MockUi::new(),
                help: SharedBuffer::new(),
                calls: Calls::default(),
            }
        }

        fn cli(&self) -> Cli<'_> {
            let registry = Registry::builder()
                .register("a", stub("a", || Ok(0), &self.calls))
                .register("a b", stub("a b", || Ok(5), &self.calls))
                .register("three", stub("three", || Ok(3), &self.calls))
                .register("broken", stub("broken", || Err(CommandError::InvalidArguments("bad".into())), &self.calls))
                .register("parent", stub("parent", || Err(CommandError::ShowHelp), &self.calls))
                .register("parent child", stub("parent child", || Ok(0), &self.calls))
                .build();

            Cli::new("app", "app 1.0.0", registry, &self.ui).with_help_writer(self.help.clone())
        }

        fn calls(&self) -> Vec<(&'static str, Vec<String>)> {
            self.calls.borrow().clone()
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_longest_namespace_runs_with_remaining_args() {
        let h = Harness::new();
        let code = h.cli().run(&args(&["a", "b", "x"]));

        assert_eq!(code, 5);
        assert_eq!(h.calls(), vec![("a b", args(&["x"]))]);
    }

    #[test]
    fn test_shorter_namespace_receives_unmatched_tokens() {
        let h = Harness::new();
        let code = h.cli().run(&args(&["a", "x", "b"]));

        assert_eq!(code, 0);
        assert_eq!(h.calls(), vec![("a", args(&["x", "b"]))]);
    }

    #[test]
    fn test_unrecognized_prints_help_to_error_sink_only() {
        let h = Harness::new();
        let code = h.cli().run(&args(&["nope", "a"]));

        assert_eq!(code, 1);
        assert!(h.calls().is_empty());
        assert!(h.help.contents().starts_with("Usage: app [--version] [--help] <command> [<args>]"));
        assert!(h.ui.output_text().is_empty());
    }

    #[test]
    fn test_root_help_lists_top_level_commands_only() {
        let h = Harness::new();
        h.cli().run(&args(&["nope"]));

        assert_eq!(
            h.help.contents(),
            "Usage: app [--version] [--help] <command> [<args>]\n\n\
             Available commands are:\n    \
             a         The a command\n    \
             broken    The broken command\n    \
             parent    The parent command\n    \
             three     The three command\n"
        );
    }

    #[test]
    fn test_reported_code_passes_through() {
        let h = Harness::new();
        assert_eq!(h.cli().run(&args(&["three"])), 3);
    }

    #[test]
    fn test_error_overrides_exit_code() {
        let h = Harness::new();
        assert_eq!(h.cli().run(&args(&["broken", "--flag"])), 1);
        assert_eq!(h.calls(), vec![("broken", args(&["--flag"]))]);
    }

    #[test]
    fn test_empty_args_show_root_help_with_pinned_code() {
        let h = Harness::new();
        let code = h.cli().run(&[]);

        assert_eq!(code, EMPTY_ARGS_EXIT_CODE);
        assert_eq!(code, 1);
        assert!(h.help.contents().contains("Available commands are:"));
        assert!(h.ui.output_text().is_empty());
        assert!(h.calls().is_empty());
    }

    #[test]
    fn test_version_flag_prints_to_output() {
        for flag in ["-v", "-version", "--version"] {
            let h = Harness::new();
            assert_eq!(h.cli().run(&args(&[flag])), 0);
            assert_eq!(h.ui.output_text(), "app 1.0.0\n");
            assert!(h.help.is_empty());
        }
    }

    #[test]
    fn test_help_flag_shows_root_help() {
        let h = Harness::new();
        assert_eq!(h.cli().run(&args(&["--help"])), 0);
        assert!(h.help.contents().contains("Available commands are:"));
    }

    #[test]
    fn test_command_help_flag_does_not_run_command() {
        let h = Harness::new();
        let code = h.cli().run(&args(&["parent", "-h"]));

        assert_eq!(code, 0);
        assert!(h.calls().is_empty());
        assert_eq!(
            h.help.contents(),
            "Usage: app parent\n\nSubcommands:\n    child    The parent child command\n"
        );
    }

    #[test]
    fn test_help_flag_after_separator_is_an_argument() {
        let h = Harness::new();
        let code = h.cli().run(&args(&["three", "--", "--help"]));

        assert_eq!(code, 3);
        assert_eq!(h.calls(), vec![("three", args(&["--", "--help"]))]);
        assert!(h.help.is_empty());
    }

    #[test]
    fn test_show_help_error_prints_command_help() {
        let h = Harness::new();
        let code = h.cli().run(&args(&["parent", "unknown"]));

        assert_eq!(code, 1);
        assert!(h.help.contents().starts_with("Usage: app parent\n\nSubcommands:"));
    }

    #[test]
    fn test_each_dispatch_gets_a_fresh_command() {
        struct Counter {
            runs: i32,
        }

        impl Command for Counter {
            fn run(&mut self, _args: &[String]) -> Result<i32, CommandError> {
                self.runs += 1;
                Ok(self.runs)
            }

            fn help(&self) -> String {
                String::new()
            }

            fn synopsis(&self) -> String {
                String::new()
            }
        }

        let ui = MockUi::new();
        let built = Cell::new(0);
        let registry = Registry::builder()
            .register("count", || {
                built.set(built.get() + 1);
                Counter { runs: 0 }
            })
            .build();
        let cli = Cli::new("app", "app 1.0.0", registry, &ui).with_help_writer(io::sink());

        assert_eq!(cli.run(&args(&["count"])), 1);
        assert_eq!(cli.run(&args(&["count"])), 1);
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn test_custom_help_func() {
        let ui = MockUi::new();
        let help = SharedBuffer::new();
        let registry = Registry::builder().build();
        let cli = Cli::new("app", "app 1.0.0", registry, &ui)
            .with_help_writer(help.clone())
            .with_help_func(Box::new(|entries: &[HelpEntry]| format!("{} commands", entries.len())));

        assert_eq!(cli.run(&args(&["anything"])), 1);
        assert_eq!(help.contents(), "0 commands\n");
    }

    #[test]
    fn test_run_cli_version() {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let streams = Streams {
            stdin: Box::new(Cursor::new(Vec::new())),
            stdout: Box::new(out.clone()),
            stderr: Box::new(err.clone()),
            help: Box::new(err.clone()),
            stdin_is_tty: false,
        };
        let config = Config::new().with_version("9.9.9");

        assert_eq!(run_cli(&config, &args(&["--version"]), streams), 0);
        assert_eq!(out.contents(), "plugingen 9.9.9\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_cli_parent_namespace_shows_subcommands() {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let streams = Streams {
            stdin: Box::new(Cursor::new(Vec::new())),
            stdout: Box::new(out.clone()),
            stderr: Box::new(err.clone()),
            help: Box::new(err.clone()),
            stdin_is_tty: false,
        };

        assert_eq!(run_cli(&Config::new(), &args(&["scaffold"]), streams), 1);
        let help = err.contents();
        assert!(help.contains("Subcommands:"));
        assert!(help.contains("data-source"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_utf8_args() {
        let parsed = utf8_args(vec![OsString::from("generate"), OsString::from("--input")]);
        assert_eq!(parsed.unwrap(), vec!["generate", "--input"]);
        assert!(utf8_args(Vec::new()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_utf8_args_rejects_invalid_bytes() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(b"ir\xff.json".to_vec());
        let err = utf8_args(vec![OsString::from("--input"), bad.clone()]).unwrap_err();
        assert_eq!(err, bad);
    }
}

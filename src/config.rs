// Mon Oct 19 2026 - Alex

use log::LevelFilter;
use std::str::FromStr;

pub const PROGRAM_NAME: &str = "plugingen";
pub const LOG_ENV: &str = "PLUGINGEN_LOG";
pub const COLOR_ENV: &str = "PLUGINGEN_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    pub version: String,
    pub use_color: bool,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: PROGRAM_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            use_color: false,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads color capability and log level from the process environment.
    pub fn from_env() -> Self {
        let is_tty = atty::is(atty::Stream::Stdout) && atty::is(atty::Stream::Stderr);
        Self::from_lookup(|key| std::env::var(key).ok(), is_tty)
    }

    pub fn from_lookup<F>(lookup: F, is_tty: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let no_color = lookup("NO_COLOR").map_or(false, |v| !v.is_empty());
        let use_color = match lookup(COLOR_ENV).as_deref() {
            Some("always") => true,
            Some("never") => false,
            _ => !no_color && is_tty,
        };

        let log_level = lookup(LOG_ENV)
            .and_then(|v| LevelFilter::from_str(v.trim()).ok())
            .unwrap_or(LevelFilter::Warn);

        Self {
            use_color,
            log_level,
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn version_output(&self) -> String {
        format!("{} {}", self.name, self.version)
    }

    pub fn init_logging(&self) {
        if let Err(e) = env_logger::Builder::new()
            .filter_level(self.log_level)
            .format_timestamp(None)
            .target(env_logger::Target::Stderr)
            .try_init()
        {
            log::debug!("Logger already initialized: {}", e);
        }
    }
}

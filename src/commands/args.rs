// Mon Oct 19 2026 - Alex

use super::backend::{GenerateRequest, GenerateTarget, ScaffoldKind, ScaffoldRequest};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct GenerateArgs {
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    #[arg(long, value_name = "DIR", default_value = "./output")]
    pub output: PathBuf,

    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct ScaffoldArgs {
    #[arg(long, value_name = "NAME")]
    pub name: String,

    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long, value_name = "FILE")]
    pub output_file: Option<String>,

    #[arg(long, value_name = "NAME", default_value = "provider")]
    pub package: String,

    #[arg(long)]
    pub force: bool,
}

impl GenerateArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.input.as_os_str().is_empty() {
            return Err("--input must not be empty".to_string());
        }
        if let Some(package) = &self.package {
            if !NAME_PATTERN.is_match(package) {
                return Err(format!("Invalid package name {:?}", package));
            }
        }
        Ok(())
    }

    pub fn into_request(self, target: GenerateTarget) -> GenerateRequest {
        GenerateRequest {
            target,
            input: self.input,
            output: self.output,
            package: self.package,
        }
    }
}

impl ScaffoldArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !NAME_PATTERN.is_match(&self.name) {
            return Err(format!(
                "Invalid name {:?}: use lowercase letters, digits and underscores, starting with a letter",
                self.name
            ));
        }
        if !NAME_PATTERN.is_match(&self.package) {
            return Err(format!("Invalid package name {:?}", self.package));
        }
        if let Some(file) = &self.output_file {
            if file.is_empty() || file.contains(['/', '\\']) {
                return Err(format!("--output-file must be a plain file name, got {:?}", file));
            }
        }
        Ok(())
    }

    pub fn into_request(self, kind: ScaffoldKind) -> ScaffoldRequest {
        ScaffoldRequest {
            kind,
            name: self.name,
            output_dir: self.output_dir,
            output_file: self.output_file,
            package: self.package,
            force: self.force,
        }
    }
}

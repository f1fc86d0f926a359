// Mon Oct 19 2026 - Alex

//! The seam between the command layer and the code generator.
//!
//! Commands only parse and validate their flags; producing code is the
//! backend's job. `DryRun` checks preconditions and reports where output
//! would land without writing anything.

use crate::error::BackendError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateTarget {
    All,
    Resources,
    DataSources,
    Provider,
}

impl GenerateTarget {
    pub fn subcommand(&self) -> &'static str {
        match self {
            GenerateTarget::All => "all",
            GenerateTarget::Resources => "resources",
            GenerateTarget::DataSources => "data-sources",
            GenerateTarget::Provider => "provider",
        }
    }

    pub fn components(&self) -> &'static [&'static str] {
        match self {
            GenerateTarget::All => &["provider", "resources", "data_sources"],
            GenerateTarget::Resources => &["resources"],
            GenerateTarget::DataSources => &["data_sources"],
            GenerateTarget::Provider => &["provider"],
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GenerateTarget::All => "the provider, resources and data sources",
            GenerateTarget::Resources => "resources",
            GenerateTarget::DataSources => "data sources",
            GenerateTarget::Provider => "the provider",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldKind {
    Resource,
    DataSource,
    Provider,
}

impl ScaffoldKind {
    pub fn subcommand(&self) -> &'static str {
        match self {
            ScaffoldKind::Resource => "resource",
            ScaffoldKind::DataSource => "data-source",
            ScaffoldKind::Provider => "provider",
        }
    }

    pub fn file_suffix(&self) -> &'static str {
        match self {
            ScaffoldKind::Resource => "resource",
            ScaffoldKind::DataSource => "data_source",
            ScaffoldKind::Provider => "provider",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScaffoldKind::Resource => "resource",
            ScaffoldKind::DataSource => "data source",
            ScaffoldKind::Provider => "provider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub target: GenerateTarget,
    pub input: PathBuf,
    pub output: PathBuf,
    pub package: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub kind: ScaffoldKind,
    pub name: String,
    pub output_dir: PathBuf,
    pub output_file: Option<String>,
    pub package: String,
    pub force: bool,
}

impl ScaffoldRequest {
    /// `<output_dir>/<output_file>`, defaulting the file to `<name>_<kind>.go`.
    pub fn target_path(&self) -> PathBuf {
        let file = match &self.output_file {
            Some(file) => file.clone(),
            None => format!("{}_{}.go", self.name, self.kind.file_suffix()),
        };
        self.output_dir.join(file)
    }
}

pub trait Backend {
    /// Returns the locations the generated code is written to.
    fn generate(&self, request: &GenerateRequest) -> Result<Vec<PathBuf>, BackendError>;

    /// Returns the path of the scaffolded file.
    fn scaffold(&self, request: &ScaffoldRequest) -> Result<PathBuf, BackendError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DryRun;

impl Backend for DryRun {
    fn generate(&self, request: &GenerateRequest) -> Result<Vec<PathBuf>, BackendError> {
        ensure_exists(&request.input)?;

        Ok(request
            .target
            .components()
            .iter()
            .map(|component| request.output.join(component))
            .collect())
    }

    fn scaffold(&self, request: &ScaffoldRequest) -> Result<PathBuf, BackendError> {
        let path = request.target_path();
        if path.exists() && !request.force {
            return Err(BackendError::AlreadyExists(path));
        }
        Ok(path)
    }
}

fn ensure_exists(path: &Path) -> Result<(), BackendError> {
    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(BackendError::InputNotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

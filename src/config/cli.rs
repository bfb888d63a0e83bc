use crate::config::{resolve_options, toml_config::TomlConfig};
use crate::domain::model::{MountRoot, Options};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ExpError, Result};
use clap::Parser;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "exp", version)]
#[command(about = "Open a WSL2 path in the Windows file explorer")]
pub struct CliConfig {
    /// Path to open; defaults to the current directory
    pub path: Option<PathBuf>,

    /// Explorer executable to launch
    #[arg(long, env = "EXP_EXPLORER")]
    pub explorer: Option<PathBuf>,

    /// Directory where Windows drives are mounted
    #[arg(long, env = "EXP_MOUNT_ROOT", value_parser = parse_mount_root)]
    pub mount_root: Option<MountRoot>,

    /// TOML configuration file
    #[arg(short, long, env = "EXP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the Windows path instead of opening it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_mount_root(value: &str) -> Result<MountRoot> {
    MountRoot::new(value)
}

impl CliConfig {
    /// The target as an absolute path, symlinks resolved when it exists.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        let raw = match &self.path {
            Some(path) if path.as_os_str().is_empty() => {
                return Err(ExpError::usage("The path argument cannot be empty"));
            }
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        resolve(&raw)
    }

    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }

    pub fn to_options(&self) -> Result<Options> {
        let file_config = self.load_file_config()?;
        let path = self.resolve_path()?;
        let layers: [&dyn ConfigProvider; 2] = [self, &file_config];
        resolve_options(path, self.dry_run, &layers)
    }
}

fn resolve(path: &Path) -> Result<PathBuf> {
    match path.canonicalize() {
        Ok(resolved) => Ok(resolved),
        Err(e) => {
            tracing::debug!("Cannot canonicalize {}: {}", path.display(), e);
            Ok(normalize_lexically(&std::path::absolute(path)?))
        }
    }
}

/// Drops `.` and folds `..` into its parent without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

impl ConfigProvider for CliConfig {
    fn mount_root(&self) -> Option<&MountRoot> {
        self.mount_root.as_ref()
    }

    fn explorer(&self) -> Option<&Path> {
        self.explorer.as_deref()
    }
}

use crate::domain::model::MountRoot;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ExpError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern"));

/// Optional `exp.toml`:
///
/// ```toml
/// [wsl]
/// mount_root = "/mnt"
///
/// [explorer]
/// path = "/mnt/c/Windows/explorer.exe"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub wsl: Option<WslConfig>,
    pub explorer: Option<ExplorerConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WslConfig {
    pub mount_root: Option<MountRoot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplorerConfig {
    pub path: Option<PathBuf>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            ExpError::config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn mount_root(&self) -> Option<&MountRoot> {
        self.wsl.as_ref()?.mount_root.as_ref()
    }

    fn explorer(&self) -> Option<&Path> {
        self.explorer.as_ref()?.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(explorer) = ConfigProvider::explorer(self) {
            validate_path("explorer.path", explorer)?;
        }
        Ok(())
    }
}

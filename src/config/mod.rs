#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Options;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::PathBuf;

/// Builds validated options; earlier layers win over later ones.
pub fn resolve_options(
    path: PathBuf,
    dry_run: bool,
    layers: &[&dyn ConfigProvider],
) -> Result<Options> {
    let mount_root = layers
        .iter()
        .find_map(|layer| layer.mount_root())
        .cloned()
        .unwrap_or_default();

    let explorer = layers
        .iter()
        .find_map(|layer| layer.explorer())
        .map(PathBuf::from)
        .unwrap_or_else(|| mount_root.default_explorer());

    let options = Options {
        path,
        explorer,
        mount_root,
        dry_run,
    };
    options.validate()?;

    tracing::debug!("Resolved options: {:?}", options);
    Ok(options)
}

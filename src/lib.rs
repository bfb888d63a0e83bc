pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::explorer::{ExplorerLauncher, Inspector};
pub use crate::core::translate::{is_wsl2_path, wsl2_path_to_windows, PathTranslator};
pub use domain::model::{MountRoot, Options, WindowsPath};
pub use domain::ports::{ConfigProvider, Launcher};
pub use utils::error::{ExpError, Result};

pub mod explorer;
pub mod translate;

pub use crate::domain::model::{MountRoot, Options, WindowsPath};
pub use crate::domain::ports::{ConfigProvider, Launcher};
pub use crate::utils::error::Result;

use crate::domain::model::{MountRoot, WindowsPath};
use crate::utils::error::Result;
use std::path::Path;

/// Starts a host program on a translated path and waits for it.
pub trait Launcher {
    fn launch(&self, program: &Path, target: &WindowsPath) -> Result<()>;
}

pub trait ConfigProvider {
    fn mount_root(&self) -> Option<&MountRoot>;
    fn explorer(&self) -> Option<&Path>;
}

use crate::utils::error::{ExpError, Result};
use crate::utils::validation::{validate_absolute_path, validate_path, Validate};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_MOUNT_ROOT: &str = "/mnt";

/// Directory under which WSL exposes the host drives, e.g. `/mnt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PathBuf")]
pub struct MountRoot(PathBuf);

impl MountRoot {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        validate_absolute_path("mount_root", &path)?;

        let text = path.to_string_lossy();
        let trimmed = text.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Ok(Self(PathBuf::from(normalized)))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// `<root>/c/Windows/explorer.exe`
    pub fn default_explorer(&self) -> PathBuf {
        self.0.join("c").join("Windows").join("explorer.exe")
    }

    /// Prefix text used when building patterns; empty for `/`.
    pub(crate) fn pattern_prefix(&self) -> String {
        let text = self.0.to_string_lossy();
        if text == "/" {
            String::new()
        } else {
            text.into_owned()
        }
    }
}

impl Default for MountRoot {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_MOUNT_ROOT))
    }
}

impl TryFrom<PathBuf> for MountRoot {
    type Error = ExpError;

    fn try_from(path: PathBuf) -> Result<Self> {
        Self::new(path)
    }
}

/// A path in the Windows file namespace: a drive letter and the segments below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowsPath {
    drive: char,
    segments: Vec<String>,
}

impl WindowsPath {
    pub fn new<I, S>(drive: char, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            drive: drive.to_ascii_uppercase(),
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn drive(&self) -> char {
        self.drive
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_drive_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for WindowsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\\{}", self.drive, self.segments.join("\\"))
    }
}

/// Everything a single invocation needs.
#[derive(Debug, Clone)]
pub struct Options {
    pub path: PathBuf,
    pub explorer: PathBuf,
    pub mount_root: MountRoot,
    pub dry_run: bool,
}

impl Options {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mount_root = MountRoot::default();
        Self {
            path: path.into(),
            explorer: mount_root.default_explorer(),
            mount_root,
            dry_run: false,
        }
    }
}

impl Validate for Options {
    fn validate(&self) -> Result<()> {
        validate_absolute_path("path", &self.path)?;
        validate_path("explorer", &self.explorer)?;
        Ok(())
    }
}

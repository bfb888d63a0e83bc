use crate::domain::model::{MountRoot, WindowsPath};
use crate::utils::error::{ExpError, Result};
use regex::Regex;
use std::path::Path;

/// Compiled patterns for one mount root.
#[derive(Debug, Clone)]
pub struct PathTranslator {
    root: MountRoot,
    inspectable: Regex,
    full_path: Regex,
}

impl PathTranslator {
    pub fn new(root: MountRoot) -> Result<Self> {
        let prefix = regex::escape(&root.pattern_prefix());

        let inspectable = Regex::new(&format!(r"^{prefix}/[a-z]/")).map_err(|e| {
            ExpError::config(format!("Invalid mount root pattern: {}", e))
        })?;
        let full_path = Regex::new(&format!(r"(?s)^{prefix}/([a-z])(?:/(.*))?$")).map_err(|e| {
            ExpError::config(format!("Invalid mount root pattern: {}", e))
        })?;

        Ok(Self {
            root,
            inspectable,
            full_path,
        })
    }

    pub fn mount_root(&self) -> &MountRoot {
        &self.root
    }

    /// True when the path sits on a drive mounted under the root, e.g. `/mnt/c/...`.
    pub fn is_inspectable(&self, path: &Path) -> bool {
        let inspectable = path
            .to_str()
            .is_some_and(|text| self.inspectable.is_match(text));
        tracing::debug!("{} inspectable: {}", path.display(), inspectable);
        inspectable
    }

    /// `/mnt/c/home/user` -> `C:\home\user`
    pub fn to_windows_path(&self, path: &Path) -> Result<WindowsPath> {
        let text = path.to_str().ok_or_else(|| {
            ExpError::usage(format!("The input path {} is not valid UTF-8", path.display()))
        })?;

        let caps = self.full_path.captures(text).ok_or_else(|| {
            ExpError::usage(format!(
                "The input path {} must be a correct WSL2 path under {}",
                text,
                self.root.as_path().display()
            ))
        })?;

        let drive = caps[1].chars().next().ok_or_else(|| {
            ExpError::usage(format!("The input path {} has no drive letter", text))
        })?;
        let segments = caps
            .get(2)
            .map(|rest| {
                rest.as_str()
                    .split('/')
                    .filter(|segment| !segment.is_empty() && *segment != ".")
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let windows_path = WindowsPath::new(drive, segments);
        tracing::debug!("Translated {} to {}", text, windows_path);
        Ok(windows_path)
    }
}

/// Classification against the default `/mnt` root.
pub fn is_wsl2_path(path: &Path) -> bool {
    PathTranslator::default().is_inspectable(path)
}

/// Translation against the default `/mnt` root.
pub fn wsl2_path_to_windows(path: &Path) -> Result<WindowsPath> {
    PathTranslator::default().to_windows_path(path)
}

impl Default for PathTranslator {
    fn default() -> Self {
        Self::new(MountRoot::default()).expect("default mount root builds valid patterns")
    }
}

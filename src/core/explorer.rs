use crate::core::translate::PathTranslator;
use crate::domain::model::{Options, WindowsPath};
use crate::domain::ports::Launcher;
use crate::utils::error::{ExpError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Spawns the real Windows program through WSL interop.
#[derive(Debug, Clone, Default)]
pub struct ExplorerLauncher;

impl Launcher for ExplorerLauncher {
    fn launch(&self, program: &Path, target: &WindowsPath) -> Result<()> {
        tracing::info!("Launching {} {}", program.display(), target);

        let status = Command::new(program)
            .arg(target.to_string())
            .status()
            .map_err(|source| ExpError::Launch {
                program: program.to_path_buf(),
                source,
            })?;

        // explorer.exe exits with 1 even when the window opened fine
        if !status.success() {
            tracing::debug!("{} exited with {}", program.display(), status);
        }
        Ok(())
    }
}

pub struct Inspector<L: Launcher> {
    translator: PathTranslator,
    explorer: PathBuf,
    launcher: L,
}

impl<L: Launcher> Inspector<L> {
    pub fn new(translator: PathTranslator, explorer: impl Into<PathBuf>, launcher: L) -> Self {
        Self {
            translator,
            explorer: explorer.into(),
            launcher,
        }
    }

    pub fn from_options(options: &Options, launcher: L) -> Result<Self> {
        let translator = PathTranslator::new(options.mount_root.clone())?;
        Ok(Self::new(translator, options.explorer.clone(), launcher))
    }

    pub fn explorer(&self) -> &Path {
        &self.explorer
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Classify and translate without starting anything.
    pub fn preview(&self, path: &Path) -> Result<WindowsPath> {
        if !self.translator.is_inspectable(path) {
            return Err(ExpError::NotInspectable {
                path: path.to_path_buf(),
            });
        }
        self.translator.to_windows_path(path)
    }

    /// Open `path` in the Windows file manager.
    pub fn open(&self, path: &Path) -> Result<WindowsPath> {
        let windows_path = self.preview(path)?;
        self.launcher.launch(&self.explorer, &windows_path)?;
        Ok(windows_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingLauncher {
        calls: RefCell<Vec<(PathBuf, String)>>,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, program: &Path, target: &WindowsPath) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((program.to_path_buf(), target.to_string()));
            Ok(())
        }
    }

    fn inspector() -> Inspector<RecordingLauncher> {
        Inspector::from_options(&Options::new("/mnt/c"), RecordingLauncher::default()).unwrap()
    }

    #[test]
    fn test_open_launches_explorer_with_translated_path() {
        let inspector = inspector();
        let result = inspector.open(Path::new("/mnt/c/Users/me")).unwrap();

        assert_eq!(result.to_string(), r"C:\Users\me");
        let calls = inspector.launcher().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from("/mnt/c/Windows/explorer.exe"));
        assert_eq!(calls[0].1, r"C:\Users\me");
    }

    #[test]
    fn test_open_rejects_linux_only_path() {
        let inspector = inspector();
        let err = inspector.open(Path::new("/home/user")).unwrap_err();

        assert!(err.is_not_inspectable());
        assert!(inspector.launcher().calls.borrow().is_empty());
    }

    #[test]
    fn test_preview_does_not_launch() {
        let inspector = inspector();
        let result = inspector.preview(Path::new("/mnt/d/data")).unwrap();

        assert_eq!(result.to_string(), r"D:\data");
        assert!(inspector.launcher().calls.borrow().is_empty());
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let err = ExplorerLauncher
            .launch(
                Path::new("/nonexistent/explorer.exe"),
                &WindowsPath::new('c', ["tmp"]),
            )
            .unwrap_err();
        assert!(matches!(err, ExpError::Launch { .. }));
    }
}

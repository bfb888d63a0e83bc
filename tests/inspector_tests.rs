use std::cell::RefCell;
use std::path::{Path, PathBuf};
use wsl_exp::{
    ExpError, Inspector, Launcher, MountRoot, Options, PathTranslator, Result, WindowsPath,
};

#[derive(Default)]
struct RecordingLauncher {
    launched: RefCell<Vec<(PathBuf, WindowsPath)>>,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, program: &Path, target: &WindowsPath) -> Result<()> {
        self.launched
            .borrow_mut()
            .push((program.to_path_buf(), target.clone()));
        Ok(())
    }
}

struct FailingLauncher;

impl Launcher for FailingLauncher {
    fn launch(&self, program: &Path, _target: &WindowsPath) -> Result<()> {
        Err(ExpError::Launch {
            program: program.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}

#[test]
fn test_every_drive_letter_maps_to_upper_case_drive() {
    let translator = PathTranslator::default();

    for letter in 'a'..='z' {
        let path = PathBuf::from(format!("/mnt/{letter}/Program Files/App"));
        assert!(translator.is_inspectable(&path));

        let windows = translator.to_windows_path(&path).unwrap();
        assert_eq!(windows.drive(), letter.to_ascii_uppercase());
        assert_eq!(
            windows.to_string(),
            format!("{}:\\Program Files\\App", letter.to_ascii_uppercase())
        );
    }
}

#[test]
fn test_open_passes_translated_path_as_sole_argument() {
    let options = Options::new("/mnt/e/music/2024");
    let inspector = Inspector::from_options(&options, RecordingLauncher::default()).unwrap();

    let opened = inspector.open(&options.path).unwrap();

    assert_eq!(opened, WindowsPath::new('e', ["music", "2024"]));
    let launched = inspector.launcher().launched.borrow();
    assert_eq!(
        launched.as_slice(),
        &[(PathBuf::from("/mnt/c/Windows/explorer.exe"), opened.clone())]
    );
}

#[test]
fn test_open_refuses_paths_outside_mount_root() {
    let inspector = Inspector::new(
        PathTranslator::default(),
        "/mnt/c/Windows/explorer.exe",
        RecordingLauncher::default(),
    );

    for path in ["/home/user", "/", "/mnt", "/mnt/c", "/tmp/mnt/c/x"] {
        let err = inspector.open(Path::new(path)).unwrap_err();
        assert!(err.is_not_inspectable(), "{path}: {err:?}");
    }
    assert!(inspector.launcher().launched.borrow().is_empty());
}

#[test]
fn test_launch_failure_is_propagated() {
    let inspector = Inspector::new(PathTranslator::default(), "/missing.exe", FailingLauncher);

    let err = inspector.open(Path::new("/mnt/c/tmp")).unwrap_err();
    assert!(matches!(err, ExpError::Launch { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_custom_mount_root_options() {
    let mut options = Options::new("/drives/d/src");
    options.mount_root = MountRoot::new("/drives").unwrap();
    options.explorer = options.mount_root.default_explorer();

    let inspector = Inspector::from_options(&options, RecordingLauncher::default()).unwrap();
    assert_eq!(inspector.explorer(), Path::new("/drives/c/Windows/explorer.exe"));
    assert_eq!(inspector.preview(&options.path).unwrap().to_string(), r"D:\src");
    assert!(inspector.open(Path::new("/mnt/d/src")).unwrap_err().is_not_inspectable());
}

//! Manifest discovery from the working directory.
//!
//! These tests change the process working directory and must not run in
//! parallel with each other.

use serial_test::serial;
use tempfile::TempDir;

use naming_cli::core::NamingError;
use naming_cli::manifest::{Manifest, find_manifest, find_manifest_from};
use naming_cli::test_utils::{ManifestFixture, init_test_logging};

struct CurrentDirGuard {
    original: std::path::PathBuf,
}

impl CurrentDirGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self {
            original,
        }
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

#[test]
#[serial]
fn test_find_manifest_from_current_directory() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let expected = ManifestFixture::basic().write_to(temp.path()).unwrap();
    let nested = temp.path().join("services").join("api");
    std::fs::create_dir_all(&nested).unwrap();

    let _guard = CurrentDirGuard::enter(&nested);
    let found = find_manifest().unwrap();
    assert_eq!(found.canonicalize().unwrap(), expected.canonicalize().unwrap());

    let manifest = Manifest::load(&found).unwrap();
    assert_eq!(manifest.settings.generated_length, 6);
    assert_eq!(manifest.names(), vec!["service", "storage"]);
}

#[test]
#[serial]
fn test_nearest_manifest_wins() {
    let temp = TempDir::new().unwrap();
    ManifestFixture::basic().write_to(temp.path()).unwrap();
    let inner_dir = temp.path().join("team");
    std::fs::create_dir_all(&inner_dir).unwrap();
    let inner = ManifestFixture::empty().write_to(&inner_dir).unwrap();

    let _guard = CurrentDirGuard::enter(&inner_dir);
    assert_eq!(find_manifest().unwrap().canonicalize().unwrap(), inner.canonicalize().unwrap());
}

#[test]
fn test_find_manifest_from_reports_not_found() {
    let temp = TempDir::new().unwrap();
    // Only meaningful when no naming.toml exists above the temp directory
    if let Err(e) = find_manifest_from(temp.path().to_path_buf()) {
        assert!(matches!(e.downcast_ref::<NamingError>(), Some(NamingError::ManifestNotFound)));
    }
}

#[test]
fn test_manifest_convention_generates() {
    let manifest = Manifest::parse(&ManifestFixture::basic().content, "naming.toml").unwrap();
    let convention = manifest.convention("storage").unwrap();

    let name = manifest
        .generator()
        .generate("logs", &naming_cli::convention::Inputs::new(), &convention)
        .unwrap();
    assert!(name.starts_with("logsdev"));
    assert_eq!(name.len(), "logsdev".len() + 4);
}

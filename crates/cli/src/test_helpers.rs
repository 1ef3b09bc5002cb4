//! Helpers shared by the CLI's unit tests
//!
//! Integration tests have their own in `tests/integration_test_helpers.rs`.

use std::fs;
use std::path::{Path, PathBuf};

/// Switches the working directory for the length of a test.
///
/// Commands read `playground.yaml` and `.playground/config.yaml` relative to
/// the working directory, so tests that create them run in a temp dir and
/// must be `#[serial]`. The previous directory is restored on drop, even when
/// the test panics.
pub struct DirGuard {
    original_dir: PathBuf,
}

impl DirGuard {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        let original_dir = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        Ok(DirGuard { original_dir })
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

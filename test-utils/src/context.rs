use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Test environment owning a temporary fixture directory.
///
/// Holds the temporary directory containing the fixture files written by
/// `TestBuilder`. The directory and everything in it are removed when the
/// context is dropped, keeping tests isolated from each other.
pub struct TestContext {
    /// Temporary directory holding the fixture files for this test.
    dir: TempDir,
}

impl TestContext {
    /// Wraps a populated temporary directory in a test context.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `dir` - Temporary directory already populated with fixture files
    ///
    /// # Returns
    /// - New `TestContext` owning the directory
    pub fn new(dir: TempDir) -> Self {
        Self { dir }
    }

    /// Returns the path of the temporary fixture directory.
    ///
    /// # Returns
    /// - `&Path` - Directory the fixture files were written into
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the path of a single fixture file inside the directory.
    ///
    /// # Arguments
    /// - `name` - File name of the fixture
    ///
    /// # Returns
    /// - `PathBuf` - Full path of the fixture file
    pub fn fixture_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

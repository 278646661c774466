use tempfile::TempDir;

use crate::{context::TestContext, error::TestError, factory};

/// Builder for creating test contexts with customizable fixture directories.
///
/// Provides a fluent interface for configuring test environments backed by a
/// temporary directory of JSON fixture files. Use the builder pattern to add
/// fixture files, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let test = TestBuilder::new()
///     .with_fixture("valid1.json", factory::create_order())
///     .with_fixture("not_valid1.json", factory::create_malformed_order())
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Fixture files to write during setup, as (name, content) pairs.
    ///
    /// Files are written in the order they were added during `build()`.
    files: Vec<(String, Vec<u8>)>,
}

impl TestBuilder {
    /// Creates a new test builder with no fixture files configured.
    ///
    /// Initializes an empty builder ready to have fixture files added via
    /// `with_fixture()`. Chain method calls to configure the test environment
    /// before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with no files configured
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a fixture file to the test directory.
    ///
    /// # Arguments
    /// - `name` - File name the content is written under
    /// - `content` - Raw bytes of the fixture payload
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_fixture(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.push((name.into(), content.into()));
        self
    }

    /// Adds the standard deployed fixture files.
    ///
    /// This convenience method adds the following files:
    /// - `valid1.json` - well-formed order payload
    /// - `valid2.json` - well-formed order payload
    /// - `not_valid1.json` - deliberately malformed payload
    ///
    /// Together these cover every name in the deployed manifest.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_standard_fixtures()
    ///     .build()?;
    /// ```
    pub fn with_standard_fixtures(self) -> Self {
        self.with_fixture("valid1.json", factory::create_order())
            .with_fixture("valid2.json", factory::create_order())
            .with_fixture("not_valid1.json", factory::create_malformed_order())
    }

    /// Builds and initializes the test context with the configured files.
    ///
    /// Creates a temporary directory and writes all fixture files that were
    /// added via `with_fixture()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized context with fixture files on disk
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = TempDir::new()?;

        for (name, content) in self.files {
            std::fs::write(dir.path().join(name), content)?;
        }

        Ok(TestContext::new(dir))
    }
}

use std::path::Path;
use tempfile::TempDir;

use crate::error::TestError;

/// Test context owning a temporary command data directory.
///
/// The directory and everything in it are removed when the context is dropped,
/// so keep the context alive for as long as the test reads from it.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Creates a context with a fresh, empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file directly into the temporary directory.
    ///
    /// # Arguments
    /// - `file_name` - File name relative to the directory
    /// - `contents` - Text written to the file
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(TestError::Io)` - Failed to write the file
    pub fn write_file(&self, file_name: &str, contents: &str) -> Result<(), TestError> {
        std::fs::write(self.dir.path().join(file_name), contents)?;
        Ok(())
    }

    /// Creates a subdirectory inside the temporary directory.
    pub fn create_dir(&self, dir_name: &str) -> Result<(), TestError> {
        std::fs::create_dir(self.dir.path().join(dir_name))?;
        Ok(())
    }
}

use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a populated command data directory.
///
/// Provides a fluent interface for configuring the files of a temporary record
/// directory. Use the builder pattern to add records or raw files, then call
/// `build()` to write them to disk.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::MetadataDirBuilder, fixture};
///
/// let test = MetadataDirBuilder::new()
///     .with_record("ping", fixture::command_record::json())
///     .with_raw_file("README.md", "not a record")
///     .build()?;
/// ```
pub struct MetadataDirBuilder {
    /// Files to write during `build()`, as (file name, contents) pairs.
    ///
    /// Files are written in the order they were added.
    files: Vec<(String, FileContents)>,
}

enum FileContents {
    Json(Value),
    Raw(String),
}

impl MetadataDirBuilder {
    /// Creates a new builder with no files configured.
    ///
    /// # Returns
    /// - New `MetadataDirBuilder` instance that builds an empty directory
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a command record written as `<name>.json`.
    ///
    /// # Arguments
    /// - `name` - Command name, used as the file stem
    /// - `record` - JSON value written as the file's contents
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_record(mut self, name: &str, record: Value) -> Self {
        self.files
            .push((format!("{}.json", name), FileContents::Json(record)));
        self
    }

    /// Adds a file with verbatim contents.
    ///
    /// Use this for malformed records or files with other extensions.
    ///
    /// # Arguments
    /// - `file_name` - File name including extension
    /// - `contents` - Exact text written to the file
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_file(mut self, file_name: &str, contents: &str) -> Self {
        self.files
            .push((file_name.to_string(), FileContents::Raw(contents.to_string())));
        self
    }

    /// Creates the temporary directory and writes every configured file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the populated directory
    /// - `Err(TestError)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (file_name, contents) in self.files {
            match contents {
                FileContents::Json(value) => {
                    context.write_file(&file_name, &serde_json::to_string_pretty(&value)?)?
                }
                FileContents::Raw(text) => context.write_file(&file_name, &text)?,
            }
        }

        Ok(context)
    }
}

impl Default for MetadataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

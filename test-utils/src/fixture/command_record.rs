//! Command record fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating command help records as JSON values.

use serde_json::{json, Value};

/// Default test record title.
pub const DEFAULT_TITLE: &str = "Test Command";

/// Default test record description.
pub const DEFAULT_DESCRIPTION: &str = "A command used in tests";

/// Creates a command record with default values.
///
/// # Default Values
/// - title: `"Test Command"`
/// - description: `"A command used in tests"`
/// - fields: one `Format` field
///
/// # Returns
/// - `Value` - JSON object matching the on-disk record format
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let record = fixture::command_record::json();
/// assert_eq!(record["title"], "Test Command");
/// ```
pub fn json() -> Value {
    json_builder().field("Format", "`/test`").build()
}

/// Creates a command record builder for customization.
///
/// The builder starts with the default title and description and no fields.
///
/// # Returns
/// - `CommandRecordJsonBuilder` - Builder instance with default values
pub fn json_builder() -> CommandRecordJsonBuilder {
    CommandRecordJsonBuilder {
        title: DEFAULT_TITLE.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        fields: Vec::new(),
    }
}

/// Builder for JSON command records.
pub struct CommandRecordJsonBuilder {
    title: String,
    description: String,
    fields: Vec<(String, String)>,
}

impl CommandRecordJsonBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Appends a field; fields keep the order they are added in.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> Value {
        let fields: Vec<Value> = self
            .fields
            .into_iter()
            .map(|(name, value)| json!({ "name": name, "value": value }))
            .collect();

        json!({
            "title": self.title,
            "description": self.description,
            "fields": fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_has_one_field() {
        let record = json();

        assert_eq!(record["title"], DEFAULT_TITLE);
        assert_eq!(record["description"], DEFAULT_DESCRIPTION);
        assert_eq!(record["fields"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn builder_preserves_field_order() {
        let record = json_builder()
            .title("Kick")
            .field("Format", "`/kick`")
            .field("<user>", "Required parameter")
            .build();

        assert_eq!(record["title"], "Kick");
        assert_eq!(record["fields"][0]["name"], "Format");
        assert_eq!(record["fields"][1]["name"], "<user>");
    }
}

//! Record domain types

use serde::{Deserialize, Serialize};

/// A unicorn record as stored by the registry
///
/// The `id` is assigned by the server on creation and never changes
/// afterwards. On the wire it travels as `_id` (the registry is
/// Mongo-backed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub age: u32,
    pub colour: String,
}

/// An unsaved record draft
///
/// Drafts carry no id, so a half-filled form can never masquerade as a
/// stored record. The server assigns the id when the draft is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub age: u32,
    pub colour: String,
}

impl RecordDraft {
    pub fn new(name: impl Into<String>, age: u32, colour: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            colour: colour.into(),
        }
    }

    /// Build a draft pre-filled from an existing record, for editing
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age,
            colour: record.colour.clone(),
        }
    }
}

/// Table columns, in display order
///
/// Each column knows its header label and how to read its cell from a
/// record. Keeping the accessor per-column avoids any stringly-typed
/// field lookup in the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Age,
    Colour,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Name, Column::Age, Column::Colour];

    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Age => "Age",
            Column::Colour => "Colour",
        }
    }

    pub fn cell(self, record: &Record) -> String {
        match self {
            Column::Name => record.name.clone(),
            Column::Age => record.age.to_string(),
            Column::Colour => record.colour.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format_uses_underscore_id() {
        let record = Record {
            id: "9".to_string(),
            name: "Spark".to_string(),
            age: 3,
            colour: "Pink".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["_id"], "9");
        assert_eq!(json["name"], "Spark");
        assert_eq!(json["age"], 3);
        assert_eq!(json["colour"], "Pink");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_draft_carries_no_id() {
        let draft = RecordDraft::new("Spark", 3, "Pink");
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_column_accessors() {
        let record = Record {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            age: 25,
            colour: "Blue".to_string(),
        };

        assert_eq!(Column::Name.cell(&record), "John Doe");
        assert_eq!(Column::Age.cell(&record), "25");
        assert_eq!(Column::Colour.cell(&record), "Blue");
        assert_eq!(Column::Name.label(), "Name");
    }
}

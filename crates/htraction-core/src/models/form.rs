use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Shape of an entry's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValueKind {
    Scalar,
    StringList,
    RecordTable,
}

/// One named cell of a record-table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordField {
    pub name: String,
    pub value: String,
}

/// A flat row of a record-table value (one cap-table holder, one team
/// member). Field order is the order the row was authored in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Record {
    pub fields: Vec<RecordField>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(RecordField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Value of the first field called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The value slot of an [`Entry`], tagged by shape so that every consumer
/// has to handle all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum EntryValue {
    Scalar(String),
    StringList(Vec<String>),
    RecordTable(Vec<Record>),
}

impl EntryValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            EntryValue::Scalar(_) => ValueKind::Scalar,
            EntryValue::StringList(_) => ValueKind::StringList,
            EntryValue::RecordTable(_) => ValueKind::RecordTable,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            EntryValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            EntryValue::StringList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&[Record]> {
        match self {
            EntryValue::RecordTable(rows) => Some(rows),
            _ => None,
        }
    }
}

impl From<&str> for EntryValue {
    fn from(value: &str) -> Self {
        EntryValue::Scalar(value.to_string())
    }
}

impl From<String> for EntryValue {
    fn from(value: String) -> Self {
        EntryValue::Scalar(value)
    }
}

impl From<Vec<String>> for EntryValue {
    fn from(items: Vec<String>) -> Self {
        EntryValue::StringList(items)
    }
}

impl From<Vec<Record>> for EntryValue {
    fn from(rows: Vec<Record>) -> Self {
        EntryValue::RecordTable(rows)
    }
}

/// A single previously collected answer, keyed by `field_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Entry {
    pub field_name: String,
    pub display_label: String,
    pub value: EntryValue,
}

impl Entry {
    pub fn new(
        field_name: impl Into<String>,
        display_label: impl Into<String>,
        value: impl Into<EntryValue>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            display_label: display_label.into(),
            value: value.into(),
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}

/// A named group of entries, one per completed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormGroup {
    pub group_id: String,
    pub group_name: String,
    pub entries: Vec<Entry>,
}

impl FormGroup {
    pub fn new(group_id: impl Into<String>, group_name: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            group_name: group_name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// First entry in this group whose field name matches.
    pub fn find(&self, field_name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.field_name == field_name)
    }
}

/// Field names that occur more than once across all `groups`, reported once
/// each in the order their second occurrence is met.
pub fn duplicate_field_names(groups: &[FormGroup]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for entry in groups.iter().flat_map(|g| &g.entries) {
        if !seen.insert(entry.field_name.as_str()) && !duplicates.contains(&entry.field_name) {
            duplicates.push(entry.field_name.clone());
        }
    }
    duplicates
}

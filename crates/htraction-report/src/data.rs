//! Report input and ingestion of the `formWiseData` payload.
//!
//! Payload shape:
//!
//! ```json
//! {
//!   "formWiseData": [
//!     {
//!       "formKey": "...",
//!       "formName": "Business Profiling",
//!       "formValues": [
//!         { "name": "Startup Name", "value": "Star AI", "label": "Name of your startup",
//!           "valueType": "string", "key": "htraction_startup_name" }
//!       ]
//!     }
//!   ],
//!   "score": "78.13"
//! }
//! ```
//!
//! `valueType` is one of `string`, `url`, `string[]` or `table`. Anything else
//! is classified by the JSON shape of `value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use htraction_core::models::form::{Entry, EntryValue, FormGroup, Record};
use htraction_core::models::score::{CategoryScore, HScore};

use crate::error::ReportError;

/// Everything a report is rendered from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportData {
    pub groups: Vec<FormGroup>,
    pub score: HScore,
    #[serde(default)]
    pub breakdown: Vec<CategoryScore>,
}

impl ReportData {
    pub fn new(groups: Vec<FormGroup>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }

    pub fn with_score(mut self, score: HScore) -> Self {
        self.score = score;
        self
    }

    pub fn with_breakdown(mut self, breakdown: Vec<CategoryScore>) -> Self {
        self.breakdown = breakdown;
        self
    }

    /// Parse the `formWiseData` payload.
    pub fn from_payload_json(json: &str) -> Result<Self, ReportError> {
        let payload: Payload = serde_json::from_str(json)?;
        Ok(payload.into())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Payload {
    form_wise_data: Vec<PayloadForm>,
    #[serde(default)]
    score: Value,
    #[serde(default)]
    score_breakdown: Vec<CategoryScore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayloadForm {
    form_key: String,
    form_name: String,
    #[serde(default)]
    form_values: Vec<PayloadValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayloadValue {
    #[serde(default)]
    value: Value,
    label: String,
    #[serde(default)]
    value_type: String,
    key: String,
}

impl From<Payload> for ReportData {
    fn from(payload: Payload) -> Self {
        let groups = payload
            .form_wise_data
            .into_iter()
            .map(|form| FormGroup {
                group_id: form.form_key,
                group_name: form.form_name,
                entries: form
                    .form_values
                    .into_iter()
                    .map(|v| {
                        let value = entry_value(&v.value_type, v.value);
                        Entry::new(v.key, v.label, value)
                    })
                    .collect(),
            })
            .collect();

        let score = match &payload.score {
            Value::String(s) => HScore::parse_or_default(s),
            Value::Number(n) => HScore(n.as_f64().unwrap_or_default()),
            _ => HScore::default(),
        };

        ReportData {
            groups,
            score,
            breakdown: payload.score_breakdown,
        }
    }
}

fn entry_value(value_type: &str, value: Value) -> EntryValue {
    match value_type {
        "string" | "url" => EntryValue::Scalar(cell_text(&value)),
        "string[]" => EntryValue::StringList(list_items(&value)),
        "table" => EntryValue::RecordTable(records(&value)),
        other => {
            debug!(value_type = %other, "unrecognised valueType, classifying by shape");
            match &value {
                Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                    EntryValue::RecordTable(records(&value))
                }
                Value::Array(_) => EntryValue::StringList(list_items(&value)),
                _ => EntryValue::Scalar(cell_text(&value)),
            }
        }
    }
}

/// Text of a JSON cell. Strings are taken as-is, `null` is empty, anything
/// else is its JSON text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn list_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(cell_text).collect(),
        Value::Null => Vec::new(),
        single => vec![cell_text(single)],
    }
}

fn records(value: &Value) -> Vec<Record> {
    let Value::Array(rows) = value else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(Value::as_object)
        .map(|row| {
            row.iter()
                .fold(Record::new(), |record, (name, cell)| {
                    record.with_field(name.clone(), cell_text(cell))
                })
        })
        .collect()
}

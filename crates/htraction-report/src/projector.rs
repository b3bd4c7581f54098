//! Field lookup across form groups.
//!
//! Groups are scanned in the order supplied and entries in the order they
//! appear; the first entry with a matching field name wins. A name that is
//! nowhere to be found resolves to [`Resolved::Unavailable`], which renders
//! as `"-"`.

use tracing::{debug, warn};

use htraction_core::models::form::{Entry, EntryValue, FormGroup, duplicate_field_names};

use crate::error::ReportError;
use crate::format::{self, CardFormat, Rendered, UNAVAILABLE};

/// Result of looking up one field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Found(&'a Entry),
    Unavailable,
}

impl<'a> Resolved<'a> {
    pub fn value(&self) -> Option<&'a EntryValue> {
        match self {
            Resolved::Found(entry) => Some(&entry.value),
            Resolved::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Resolved::Found(_))
    }

    /// Single-line text: `"-"`, the scalar, the joined list, or `"<N> items"`.
    pub fn single_line(&self) -> String {
        self.value()
            .map(format::single_line)
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    /// Detailed form: links, chips and cards.
    pub fn detailed(&self, cards: &CardFormat) -> Rendered {
        self.value()
            .map(|v| Rendered::detailed(v, cards))
            .unwrap_or_else(Rendered::unavailable)
    }
}

/// Read-only view over a set of form groups.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    groups: &'a [FormGroup],
}

impl<'a> Projector<'a> {
    /// Accepts any groups. Field names that occur more than once are logged;
    /// lookups keep returning the earliest occurrence.
    pub fn new(groups: &'a [FormGroup]) -> Self {
        for field in duplicate_field_names(groups) {
            warn!(field = %field, "field name appears in more than one place; first occurrence wins");
        }
        Self { groups }
    }

    /// Like [`Projector::new`] but refuses groups with duplicated field names.
    pub fn strict(groups: &'a [FormGroup]) -> Result<Self, ReportError> {
        let duplicates = duplicate_field_names(groups);
        if !duplicates.is_empty() {
            return Err(ReportError::DuplicateFields(duplicates));
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &'a [FormGroup] {
        self.groups
    }

    pub fn duplicate_fields(&self) -> Vec<String> {
        duplicate_field_names(self.groups)
    }

    pub fn resolve(&self, field_name: &str) -> Resolved<'a> {
        match self
            .groups
            .iter()
            .find_map(|group| group.find(field_name))
        {
            Some(entry) => Resolved::Found(entry),
            None => {
                debug!(field = %field_name, "field not found in any form group");
                Resolved::Unavailable
            }
        }
    }

    /// `format(resolve(field_name))` in single-line form.
    pub fn single_line(&self, field_name: &str) -> String {
        self.resolve(field_name).single_line()
    }
}

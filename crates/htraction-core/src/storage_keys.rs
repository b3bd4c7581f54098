//! Local storage key and file naming conventions.
//!
//! Pure string functions. These define the canonical names of values kept in
//! the local key-value store and of files written next to it.

use uuid::Uuid;

/// Key under which the list of applied investor ids is stored.
pub const APPLIED_INVESTORS: &str = "appliedInvestors";

/// File name of the JSON document backing the local key-value store.
pub const LOCAL_STORE_FILE: &str = "local_storage.json";

pub fn submission_file(id: Uuid) -> String {
    format!("submission-{id}.json")
}

/// Default DOCX file name for a company's printable report.
pub fn report_docx(company: &str) -> String {
    let slug: String = company
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "report.docx".to_string()
    } else {
        format!("{slug}-report.docx")
    }
}

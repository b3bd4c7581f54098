use serde::{Deserialize, Serialize};

/// Fonts, sizes and colours for the printable report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    pub body_font: String,
    pub heading_font: String,

    /// Body text size in points.
    pub body_size: usize,
    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,

    /// Hex colour (no `#`) for headings and links.
    pub accent_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            heading1_size: 20,
            heading2_size: 15,
            heading3_size: 12,
            accent_color: "F5671A".to_string(),
        }
    }
}

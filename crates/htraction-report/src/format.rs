//! Display formatting for resolved report values.
//!
//! Nothing here fails: values that cannot be formatted the requested way
//! fall back to their raw text or to [`UNAVAILABLE`].

use serde::{Deserialize, Serialize};

use htraction_core::models::form::{EntryValue, Record};

/// Rendered in place of a value that is missing or empty.
pub const UNAVAILABLE: &str = "-";

const URL_SCHEMES: [&str; 2] = ["https://", "http://"];

/// Prefix test only; no URL validation.
pub fn is_url(value: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| value.starts_with(scheme))
}

/// Group an integer's digits in threes with commas (`40000` → `40,000`).
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Parse the leading integer of `raw`, ignoring surrounding whitespace and
/// existing grouping commas. Trailing non-digits are dropped (`"40000.50"`
/// → `40000`); no leading digits means `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let (negative, rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// `"100000"` → `"$100,000"`; `None` when no amount can be read.
pub fn format_usd(raw: &str) -> Option<String> {
    parse_leading_int(raw).map(|amount| format!("${}", group_thousands(amount)))
}

/// Characters the report's Markdown treats as markup.
pub const MARKDOWN_SPECIALS: [char; 4] = ['\\', '*', '[', ']'];

/// Backslash-escape [`MARKDOWN_SPECIALS`] so answer text stays literal.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIALS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Single-line form of a value: scalars as-is, lists joined with `", "`,
/// tables summarised as `"<N> items"`. Empty scalars and lists become
/// [`UNAVAILABLE`].
pub fn single_line(value: &EntryValue) -> String {
    match value {
        EntryValue::Scalar(s) if s.is_empty() => UNAVAILABLE.to_string(),
        EntryValue::Scalar(s) => s.clone(),
        EntryValue::StringList(items) if items.is_empty() => UNAVAILABLE.to_string(),
        EntryValue::StringList(items) => items.join(", "),
        EntryValue::RecordTable(rows) => format!("{} items", rows.len()),
    }
}

/// A value shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rendered {
    Text { text: String },
    Link { url: String },
    /// One visual unit per element, original order.
    Chips { items: Vec<String> },
    /// One card per record.
    Cards { cards: Vec<Card> },
}

impl Rendered {
    pub fn text(text: impl Into<String>) -> Self {
        Rendered::Text { text: text.into() }
    }

    pub fn unavailable() -> Self {
        Rendered::text(UNAVAILABLE)
    }

    /// Plain scalar text, upgraded to a link when it looks like a URL.
    pub fn scalar(text: &str) -> Self {
        if text.is_empty() {
            Rendered::unavailable()
        } else if is_url(text) {
            Rendered::Link {
                url: text.to_string(),
            }
        } else {
            Rendered::text(text)
        }
    }

    /// The detailed form of a value: links for URLs, chips for lists, cards
    /// for tables.
    pub fn detailed(value: &EntryValue, format: &CardFormat) -> Self {
        match value {
            EntryValue::Scalar(s) => Rendered::scalar(s),
            EntryValue::StringList(items) if items.is_empty() => Rendered::unavailable(),
            EntryValue::StringList(items) => Rendered::Chips {
                items: items.clone(),
            },
            EntryValue::RecordTable(rows) => Rendered::Cards {
                cards: rows.iter().map(|r| format.card(r)).collect(),
            },
        }
    }

    /// Whether a chips or cards value has nothing to show.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Rendered::Chips { items } => items.is_empty(),
            Rendered::Cards { cards } => cards.is_empty(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub fields: Vec<CardField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub link: bool,
}

/// How record fields are dressed up when shown as cards. Fields not named
/// here are shown verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFormat {
    /// Shown with a trailing `%`, value itself untouched.
    #[serde(default)]
    pub percent_fields: Vec<String>,
    /// Shown as `$<grouped>` when the value parses, raw otherwise.
    #[serde(default)]
    pub currency_fields: Vec<String>,
    /// Values treated as "not provided" and dropped from the card.
    #[serde(default)]
    pub placeholder_values: Vec<String>,
}

impl CardFormat {
    pub fn card(&self, record: &Record) -> Card {
        let fields = record
            .fields
            .iter()
            .filter(|f| !f.value.is_empty() && !self.placeholder_values.contains(&f.value))
            .map(|f| {
                let value = if self.percent_fields.contains(&f.name) {
                    format!("{}%", f.value)
                } else if self.currency_fields.contains(&f.name) {
                    format_usd(&f.value).unwrap_or_else(|| f.value.clone())
                } else {
                    f.value.clone()
                };
                CardField {
                    link: is_url(&value),
                    name: f.name.clone(),
                    value,
                }
            })
            .collect();
        Card { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(40000), "40,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1234), "-1,234");
    }

    #[test]
    fn leading_int_behaves_like_a_lenient_parse() {
        assert_eq!(parse_leading_int("100000"), Some(100000));
        assert_eq!(parse_leading_int(" 40,000 "), Some(40000));
        assert_eq!(parse_leading_int("40000.75"), Some(40000));
        assert_eq!(parse_leading_int("-12"), Some(-12));
        assert_eq!(parse_leading_int("$250K"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}

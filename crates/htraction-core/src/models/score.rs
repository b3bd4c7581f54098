use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The overall evaluation score (0–100). Computed upstream; this type only
/// carries and classifies it.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct HScore(pub f64);

impl HScore {
    /// Parse a score as it arrives from the data source (`"78.13"`).
    /// Anything that is not a finite number becomes `0.0`.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => HScore(v),
            _ => HScore::default(),
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The score as shown in the gauge: rounded to the nearest integer.
    pub fn rounded(self) -> i64 {
        self.0.round() as i64
    }

    pub fn band(self) -> ScoreBand {
        ScoreBand::from_score(self.0)
    }
}

impl fmt::Display for HScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

/// Qualitative band a score falls into. Drives labels and colours on the
/// dashboard and report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreBand {
    /// 85 and above.
    Excellent,
    /// 75 up to 85.
    Good,
    /// 65 up to 75.
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ScoreBand::Excellent
        } else if score >= 75.0 {
            ScoreBand::Good
        } else if score >= 65.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsWork
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }

    /// Foreground colour. Fair and Needs Work share the neutral gray.
    pub fn color_hex(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "#10B981",
            ScoreBand::Good => "#3B82F6",
            ScoreBand::Fair | ScoreBand::NeedsWork => "#6B7280",
        }
    }
}

/// One line of the score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
    pub explanation: String,
}

impl CategoryScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

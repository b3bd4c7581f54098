//! Resolved, display-ready report. Serializes straight into a template
//! context.

use serde::Serialize;

use htraction_core::models::form::EntryValue;

use crate::data::ReportData;
use crate::format::{self, Rendered, UNAVAILABLE};
use crate::layout::{ReportLayout, Row, RowStyle};
use crate::projector::Projector;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub title: String,
    pub company_name: String,
    pub tags: Vec<String>,
    pub target_raise: String,
    pub funding_round: String,
    pub score: i64,
    pub score_label: String,
    pub score_color: String,
    pub breakdown: Vec<BreakdownRow>,
    pub metrics: Vec<ViewRow>,
    pub sections: Vec<ViewSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub category: String,
    pub score: i64,
    pub label: String,
    pub color: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRow {
    pub label: String,
    pub value: Rendered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSection {
    pub title: String,
    pub rows: Vec<ViewRow>,
}

impl ViewSection {
    pub fn row(&self, label: &str) -> Option<&ViewRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

impl ReportView {
    pub fn section(&self, title: &str) -> Option<&ViewSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Resolve every field the layout names. Chip and card rows with no data
/// are omitted, and so are sections whose rows were all omitted.
pub fn build_view(data: &ReportData, layout: &ReportLayout) -> ReportView {
    let projector = Projector::new(&data.groups);
    let band = data.score.band();

    let sections = layout
        .sections
        .iter()
        .filter_map(|section| {
            let rows: Vec<ViewRow> = section
                .rows
                .iter()
                .filter_map(|row| render_row(&projector, row))
                .collect();
            (!rows.is_empty()).then(|| ViewSection {
                title: section.title.clone(),
                rows,
            })
        })
        .collect();

    ReportView {
        title: layout.title.clone(),
        company_name: projector.single_line(&layout.header.company_name),
        tags: layout
            .header
            .tags
            .iter()
            .map(|field| projector.single_line(field))
            .collect(),
        target_raise: projector.single_line(&layout.header.target_raise),
        funding_round: projector.single_line(&layout.header.funding_round),
        score: data.score.rounded(),
        score_label: band.label().to_string(),
        score_color: band.color_hex().to_string(),
        breakdown: data
            .breakdown
            .iter()
            .map(|item| BreakdownRow {
                category: item.category.clone(),
                score: item.score.round() as i64,
                label: item.band().label().to_string(),
                color: item.band().color_hex().to_string(),
                explanation: item.explanation.clone(),
            })
            .collect(),
        metrics: layout
            .metrics
            .iter()
            .filter_map(|row| render_row(&projector, row))
            .collect(),
        sections,
    }
}

fn render_row(projector: &Projector<'_>, row: &Row) -> Option<ViewRow> {
    let resolved = projector.resolve(&row.field);
    let value = match &row.style {
        RowStyle::Text => match resolved.value() {
            Some(EntryValue::Scalar(s)) => Rendered::scalar(s),
            _ => Rendered::text(resolved.single_line()),
        },
        RowStyle::Currency => {
            let line = resolved.single_line();
            let amount = if line == UNAVAILABLE {
                None
            } else {
                format::format_usd(&line)
            };
            Rendered::text(amount.unwrap_or_else(|| UNAVAILABLE.to_string()))
        }
        RowStyle::Chips => match resolved.value() {
            Some(EntryValue::StringList(items)) if !items.is_empty() => Rendered::Chips {
                items: items.clone(),
            },
            Some(EntryValue::Scalar(s)) if !s.trim().is_empty() => Rendered::scalar(s),
            _ => return None,
        },
        // Free-text answers from the questionnaire arrive as scalars.
        RowStyle::Cards(cards) => match resolved.value() {
            Some(value @ EntryValue::RecordTable(rows)) if !rows.is_empty() => {
                Rendered::detailed(value, cards)
            }
            Some(EntryValue::Scalar(s)) if !s.trim().is_empty() => Rendered::scalar(s),
            _ => return None,
        },
    };
    Some(ViewRow {
        label: row.label.clone(),
        value,
    })
}

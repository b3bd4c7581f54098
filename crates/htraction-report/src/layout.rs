//! The fixed arrangement of the investor report: which field goes in which
//! row, under which heading, rendered in which style.
//!
//! Layouts are plain data and can be loaded from JSON to rearrange the report
//! without touching the projector.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::format::CardFormat;

/// How a row's value is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum RowStyle {
    /// Single-line text; URLs become links.
    Text,
    /// `$<grouped>` when the value starts with an integer, `-` otherwise.
    Currency,
    /// One chip per list element. Omitted when the list is missing or empty.
    Chips,
    /// One card per record. Omitted when the table is missing or empty.
    Cards(CardFormat),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub field: String,
    #[serde(flatten)]
    pub style: RowStyle,
}

impl Row {
    pub fn text(label: &str, field: &str) -> Self {
        Self::styled(label, field, RowStyle::Text)
    }

    pub fn currency(label: &str, field: &str) -> Self {
        Self::styled(label, field, RowStyle::Currency)
    }

    pub fn chips(label: &str, field: &str) -> Self {
        Self::styled(label, field, RowStyle::Chips)
    }

    pub fn cards(label: &str, field: &str, format: CardFormat) -> Self {
        Self::styled(label, field, RowStyle::Cards(format))
    }

    fn styled(label: &str, field: &str, style: RowStyle) -> Self {
        Self {
            label: label.to_string(),
            field: field.to_string(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSection {
    pub title: String,
    pub rows: Vec<Row>,
}

impl LayoutSection {
    pub fn new(title: &str, rows: Vec<Row>) -> Self {
        Self {
            title: title.to_string(),
            rows,
        }
    }
}

/// Field names feeding the report hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderFields {
    pub company_name: String,
    /// Shown as tags under the company name, in order.
    pub tags: Vec<String>,
    pub target_raise: String,
    pub funding_round: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLayout {
    pub title: String,
    pub header: HeaderFields,
    pub metrics: Vec<Row>,
    pub sections: Vec<LayoutSection>,
}

impl ReportLayout {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every field name the layout reads, in layout order, with repeats.
    pub fn fields(&self) -> Vec<&str> {
        let header = [
            self.header.company_name.as_str(),
            self.header.target_raise.as_str(),
            self.header.funding_round.as_str(),
        ];
        header
            .into_iter()
            .chain(self.header.tags.iter().map(String::as_str))
            .chain(self.metrics.iter().map(|r| r.field.as_str()))
            .chain(
                self.sections
                    .iter()
                    .flat_map(|s| s.rows.iter().map(|r| r.field.as_str())),
            )
            .collect()
    }

    pub fn investor_report() -> &'static ReportLayout {
        &INVESTOR_REPORT
    }
}

const PLACEHOLDER_LINKEDIN: &str = "https://www.linkedin.com/in";

static INVESTOR_REPORT: LazyLock<ReportLayout> = LazyLock::new(|| {
    let team_cards = CardFormat {
        placeholder_values: vec!["-".to_string(), PLACEHOLDER_LINKEDIN.to_string()],
        ..CardFormat::default()
    };
    let cap_table_cards = CardFormat {
        percent_fields: vec!["% Ownership".to_string()],
        currency_fields: vec!["Amount Invested (In USD)".to_string()],
        ..CardFormat::default()
    };

    ReportLayout {
        title: "Startup Report".to_string(),
        header: HeaderFields {
            company_name: "htraction_startup_name".to_string(),
            tags: vec![
                "htraction_industry_sector".to_string(),
                "htraction_headquarter_location".to_string(),
                "htraction_startup_stage".to_string(),
            ],
            target_raise: "htraction_target_raise_amount".to_string(),
            funding_round: "htraction_current_funding_round".to_string(),
        },
        metrics: vec![
            Row::text("Annual Revenue", "htraction_annual_revenue_range"),
            Row::text("Revenue Growth", "htraction_revenue_growth_trend"),
            Row::text("TAM", "htraction_total_addressable_market"),
            Row::text("Cash Runway", "htraction_current_cash_runway"),
        ],
        sections: vec![
            LayoutSection::new(
                "Financial Health",
                vec![
                    Row::text("Annual Revenue", "htraction_annual_revenue_range"),
                    Row::text("Revenue Growth (MoM)", "htraction_revenue_growth_trend"),
                    Row::text("Gross Margins", "htraction_gross_margins"),
                    Row::text("LTV:CAC Ratio", "htraction_cac_ltv_ratio"),
                    Row::text("Cash Runway", "htraction_current_cash_runway"),
                ],
            ),
            LayoutSection::new(
                "Market Opportunity",
                vec![
                    Row::text("Total Addressable Market (TAM)", "htraction_total_addressable_market"),
                    Row::text("Market Growth (CAGR)", "htraction_projected_annual_growth_rate"),
                    Row::text("Market Shift Alignment", "htraction_market_shift_monitoring"),
                ],
            ),
            LayoutSection::new(
                "Business Model & Unit Economics",
                vec![
                    Row::text("Revenue Model", "htraction_revenue_model"),
                    Row::text("Recurring Revenue", "htraction_recurring_revenue"),
                    Row::text("Gross Margins", "htraction_gross_margins"),
                    Row::text("LTV:CAC Ratio", "htraction_cac_ltv_ratio"),
                    Row::text("Scalability", "htraction_scalability_factor"),
                ],
            ),
            LayoutSection::new(
                "Growth & Traction",
                vec![
                    Row::text("Customer Growth (MoM)", "htraction_customer_base_grown"),
                    Row::text("Repeat Customers", "htraction_repeat_customers_percent"),
                    Row::text("Operating Region", "htraction_operating_region"),
                    Row::text(
                        "Customer Acquisition Strategy",
                        "htraction_defined_customer_acquisition_strategy",
                    ),
                ],
            ),
            LayoutSection::new(
                "Competitive Advantage",
                vec![
                    Row::text("Unique Value Proposition", "htraction_unique_value_proposition"),
                    Row::text(
                        "Differentiation Validated",
                        "htraction_product_differentiation_validated",
                    ),
                    Row::text("Technology Role", "htraction_technology_role"),
                    Row::text("Defensible IP", "htraction_defensible_ip"),
                ],
            ),
            LayoutSection::new(
                "Founding Team",
                vec![
                    Row::cards(
                        "Team",
                        "htraction_founding_team_composition_table",
                        team_cards,
                    ),
                    Row::chips("Team Functions", "htraction_founding_team_functions"),
                ],
            ),
            LayoutSection::new(
                "Cap Table",
                vec![Row::cards("Shareholders", "htraction_cap_table", cap_table_cards)],
            ),
            LayoutSection::new(
                "Product-Market Fit",
                vec![
                    Row::text("PMF Status", "htraction_pmf_status"),
                    Row::text("Customer Satisfaction", "htraction_net_promoter_score"),
                    Row::chips("Acquisition Channels", "htraction_customer_acquisition_channels"),
                ],
            ),
            LayoutSection::new(
                "Funding History",
                vec![
                    Row::text("Previous Funding", "htraction_raise_funding_before"),
                    Row::text("Last Round Type", "htraction_funding_type"),
                    Row::currency("Last Round Amount", "htraction_funding_amount"),
                    Row::text("Lead Investor", "htraction_funding_source"),
                    Row::text("Target Raise", "htraction_target_raise_amount"),
                    Row::text("Current Round", "htraction_current_funding_round"),
                ],
            ),
        ],
    }
});

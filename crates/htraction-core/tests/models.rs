use htraction_core::models::form::{
    Entry, EntryValue, FormGroup, Record, ValueKind, duplicate_field_names,
};
use htraction_core::models::investor::InvestorId;
use htraction_core::models::score::{HScore, ScoreBand};
use htraction_core::models::thesis::{Condition, Operator, ThesisConfig};
use htraction_core::storage_keys;

#[test]
fn score_bands_follow_thresholds() {
    assert_eq!(ScoreBand::from_score(92.0), ScoreBand::Excellent);
    assert_eq!(ScoreBand::from_score(85.0), ScoreBand::Excellent);
    assert_eq!(ScoreBand::from_score(84.99), ScoreBand::Good);
    assert_eq!(ScoreBand::from_score(75.0), ScoreBand::Good);
    assert_eq!(ScoreBand::from_score(70.0), ScoreBand::Fair);
    assert_eq!(ScoreBand::from_score(12.0), ScoreBand::NeedsWork);
    assert_eq!(ScoreBand::NeedsWork.label(), "Needs Work");
    assert_eq!(ScoreBand::Fair.color_hex(), ScoreBand::NeedsWork.color_hex());
}

#[test]
fn hscore_parses_or_defaults() {
    let score = HScore::parse_or_default("78.13");
    assert_eq!(score.value(), 78.13);
    assert_eq!(score.rounded(), 78);
    assert_eq!(score.to_string(), "78");
    assert_eq!(score.band(), ScoreBand::Good);

    assert_eq!(HScore::parse_or_default("n/a").value(), 0.0);
    assert_eq!(HScore::parse_or_default("NaN").value(), 0.0);
    assert_eq!(HScore::parse_or_default(" 90 ").value(), 90.0);
}

#[test]
fn entry_values_report_their_kind() {
    let scalar = Entry::new("name", "Startup Name", "Star AI");
    assert_eq!(scalar.kind(), ValueKind::Scalar);
    assert_eq!(scalar.value.as_scalar(), Some("Star AI"));

    let list = EntryValue::from(vec!["B2B".to_string(), "B2C".to_string()]);
    assert_eq!(list.kind(), ValueKind::StringList);
    assert_eq!(list.as_list().map(|l| l.len()), Some(2));
    assert!(list.as_scalar().is_none());

    let table = EntryValue::from(vec![Record::new().with_field("Name", "P1")]);
    assert_eq!(table.kind(), ValueKind::RecordTable);
}

#[test]
fn record_keeps_field_order() {
    let row = Record::new()
        .with_field("Name", "P1")
        .with_field("% Ownership", "33")
        .with_field("Amount Invested (In USD)", "40000");

    let names: Vec<_> = row.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Name", "% Ownership", "Amount Invested (In USD)"]);
    assert_eq!(row.get("% Ownership"), Some("33"));
    assert_eq!(row.get("Missing"), None);
}

#[test]
fn entry_value_serializes_with_kind_tag() {
    let value = EntryValue::from(vec!["Tech".to_string()]);
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json["kind"], "string_list");
    assert_eq!(json["value"][0], "Tech");
}

#[test]
fn duplicate_field_names_are_reported_once() {
    let groups = vec![
        FormGroup::new("g1", "Business Profiling")
            .with_entry(Entry::new("name", "Name", "Star AI"))
            .with_entry(Entry::new("stage", "Stage", "MVP")),
        FormGroup::new("g2", "Business Model")
            .with_entry(Entry::new("name", "Name", "Other"))
            .with_entry(Entry::new("name", "Name", "Third")),
    ];
    assert_eq!(duplicate_field_names(&groups), vec!["name".to_string()]);
    assert!(duplicate_field_names(&groups[..1]).is_empty());
}

#[test]
fn thesis_names_fall_back_to_ids() {
    let config = ThesisConfig::default();
    assert_eq!(config.variable_name("var-1"), "HScore");
    assert_eq!(config.variable_name("var-99"), "var-99");
    assert_eq!(config.pillar_name("pillar-2"), "Team Quality");
    assert_eq!(config.pillar_name("ghost"), "ghost");
    assert_eq!(config.theses[0].total_weight(), 100);
    assert!(config.dangling_references().is_empty());
}

#[test]
fn dangling_references_are_listed() {
    let mut config = ThesisConfig::default();
    config.pillars[0].variable_ids.push("var-404".to_string());
    config.theses[0].conditions.push(Condition {
        pillar_id: "pillar-404".to_string(),
        operator: Operator::Or,
        weight: 10,
    });

    let dangling = config.dangling_references();
    assert_eq!(dangling.len(), 2);
    assert_eq!(dangling[0].owner_id, "pillar-1");
    assert_eq!(dangling[0].missing_id, "var-404");
    assert_eq!(dangling[1].owner_id, "thesis-1");
    assert_eq!(config.theses[0].total_weight(), 110);
}

#[test]
fn thesis_config_round_trips_through_json() {
    let json = serde_json::to_string(&ThesisConfig::default()).unwrap();
    let parsed = ThesisConfig::from_json(&json).unwrap();
    assert_eq!(parsed, ThesisConfig::default());
    assert!(ThesisConfig::from_json("{").is_err());
}

#[test]
fn investor_ids_parse() {
    assert_eq!("7".parse::<InvestorId>().unwrap(), InvestorId(7));
    assert!("seven".parse::<InvestorId>().is_err());
    assert!("-1".parse::<InvestorId>().is_err());
}

#[test]
fn report_docx_name_is_slugged() {
    assert_eq!(storage_keys::report_docx("Star AI"), "star-ai-report.docx");
    assert_eq!(storage_keys::report_docx("  "), "report.docx");
}

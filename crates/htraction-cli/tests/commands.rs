use std::io::Cursor;

use htraction_chat::Conversation;
use htraction_cli::commands::{
    SavedSubmission, chat_session, load_report_data, render_report, save_submission,
    thesis_summary,
};
use htraction_cli::prompts::{Navigation, apply_multi_selection, navigation_choices, section_heading};
use htraction_core::models::form::{Entry, FormGroup};
use htraction_core::models::thesis::ThesisConfig;
use htraction_forms::answers::Answer;
use htraction_forms::get_questionnaire;
use htraction_forms::question::{Question, Section};
use htraction_forms::wizard::Wizard;
use htraction_report::ReportData;
use htraction_report::layout::ReportLayout;

const STAR_AI: &str = include_str!("../../htraction-report/tests/fixtures/star_ai.json");

#[test]
fn chat_session_replies_until_empty_line() {
    let mut conversation = Conversation::investor();
    let input = Cursor::new("tell me about star ai\nhello\n\nshow me ai startups\n");
    let mut out = Vec::new();
    chat_session(&mut conversation, input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Hello! I'm htraction AI."));
    assert!(text.contains("Try asking:"));
    assert!(text.contains("Detailed Analysis"));
    assert!(!text.contains("top AI startups"));
    assert_eq!(conversation.messages().len(), 5);
}

#[test]
fn chat_session_stops_on_exit() {
    let mut conversation = Conversation::investor();
    let mut out = Vec::new();
    chat_session(&mut conversation, Cursor::new("EXIT\nwho are the founders\n"), &mut out)
        .unwrap();
    assert_eq!(conversation.messages().len(), 1);
}

#[test]
fn report_from_payload() {
    let data = load_report_data(STAR_AI).unwrap();
    let markdown = render_report(&data, ReportLayout::investor_report(), None, true).unwrap();
    assert!(markdown.contains("## Star AI"));
    assert!(markdown.contains("$100,000"));
}

#[test]
fn report_with_custom_template() {
    let data = load_report_data(STAR_AI).unwrap();
    let markdown = render_report(
        &data,
        ReportLayout::investor_report(),
        Some(("one-liner", "{{ company_name }}: {{ score_label }}")),
        false,
    )
    .unwrap();
    assert_eq!(markdown, "Star AI: Good");
}

#[test]
fn strict_report_refuses_duplicate_fields() {
    let groups = vec![
        FormGroup::new("a", "A").with_entry(Entry::new("htraction_startup_name", "Name", "One")),
        FormGroup::new("b", "B").with_entry(Entry::new("htraction_startup_name", "Name", "Two")),
    ];
    let data = ReportData::new(groups);
    assert!(render_report(&data, ReportLayout::investor_report(), None, true).is_err());

    let lenient = render_report(&data, ReportLayout::investor_report(), None, false).unwrap();
    assert!(lenient.contains("## One"));
}

#[test]
fn saved_submission_feeds_the_report() {
    let questionnaire = get_questionnaire("company_profile").unwrap();
    let mut wizard = Wizard::new(questionnaire.as_ref()).unwrap();
    wizard.set_answer("htraction_startup_name", "Nova Labs");
    wizard.set_answer("htraction_funding_amount", "250000");
    let saved = SavedSubmission::new(wizard.into_submission(), questionnaire.as_ref());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/submission.json");
    save_submission(&path, saved).unwrap();

    let data = load_report_data(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let markdown = render_report(&data, ReportLayout::investor_report(), None, true).unwrap();
    assert!(markdown.contains("## Nova Labs"));
    assert!(markdown.contains("- **Last Round Amount:** $250,000"));
}

#[test]
fn unrecognised_report_input_is_an_error() {
    let err = load_report_data(r#"{ "hello": 1 }"#).unwrap_err();
    assert!(err.to_string().contains("not a report payload"));
}

#[test]
fn default_thesis_summary() {
    let summary = thesis_summary(&ThesisConfig::default());
    assert!(summary.contains("Variables\n"));
    assert!(summary.contains("HScore: 75 - 100"));
    assert!(summary.contains("(total weight 100)"));
    assert!(!summary.contains("warning:"));
}

#[test]
fn thesis_summary_flags_dangling_ids() {
    let mut config = ThesisConfig::default();
    config.pillars[0].variable_ids.push("var-missing".into());
    let summary = thesis_summary(&config);
    assert!(summary.contains("var-missing"));
    assert!(summary.contains("warning: pillar-1 refers to unknown id var-missing"));
}

fn multi_section_wizard() -> Wizard {
    Wizard::from_sections(
        "demo",
        vec![
            Section::new(
                "one",
                "One",
                "",
                vec![Question::new(
                    "tags",
                    "Tags",
                    htraction_forms::question::InputKind::multi_select(&["A", "B", "C"]),
                )],
            ),
            Section::new("two", "Two", "", vec![Question::text("name", "Name")]),
        ],
    )
    .unwrap()
}

#[test]
fn navigation_depends_on_position() {
    let mut wizard = multi_section_wizard();
    assert_eq!(navigation_choices(&wizard), [Navigation::Next, Navigation::Jump]);
    wizard.advance();
    assert_eq!(
        navigation_choices(&wizard),
        [Navigation::Finish, Navigation::Back, Navigation::Jump]
    );
}

#[test]
fn heading_shows_progress() {
    let mut wizard = multi_section_wizard();
    wizard.set_answer("name", "x");
    assert_eq!(section_heading(&wizard), "Section 1/2: One (0/1 answered, 50% overall)");
}

#[test]
fn multi_selection_toggles_only_changes() {
    let mut wizard = multi_section_wizard();
    let question = wizard.current_section().questions[0].clone();

    apply_multi_selection(&mut wizard, &question, &[2, 0]);
    assert_eq!(
        wizard.answer("tags"),
        Some(&Answer::Choices(vec!["A".into(), "C".into()]))
    );

    apply_multi_selection(&mut wizard, &question, &[2]);
    assert_eq!(wizard.answer("tags"), Some(&Answer::Choices(vec!["C".into()])));

    apply_multi_selection(&mut wizard, &question, &[]);
    assert_eq!(wizard.answer("tags"), None);
}

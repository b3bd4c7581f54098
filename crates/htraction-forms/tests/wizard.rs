use htraction_forms::answers::Answer;
use htraction_forms::error::FormError;
use htraction_forms::question::{Question, Section};
use htraction_forms::wizard::{Advance, Wizard};

fn two_sections() -> Vec<Section> {
    vec![
        Section::new(
            "s1",
            "First",
            "",
            vec![Question::text("q1", "One"), Question::text("q2", "Two")],
        ),
        Section::new("s2", "Second", "", vec![Question::text("q3", "Three")]),
    ]
}

fn wizard() -> Wizard {
    Wizard::from_sections("test", two_sections()).unwrap()
}

#[test]
fn starts_on_first_section_with_no_answers() {
    let w = wizard();
    assert_eq!(w.current_index(), 0);
    assert_eq!(w.current_section().id, "s1");
    assert!(w.answers().is_empty());
    assert_eq!(w.progress(), 0.0);
    assert_eq!(w.total_questions(), 3);
}

#[test]
fn progress_counts_answers_across_sections() {
    let mut w = wizard();
    w.set_answer("q1", "x");
    w.set_answer("q3", "y");
    assert_eq!(w.answered_count(), 2);
    assert!((w.progress() - 2.0 / 3.0).abs() < 1e-12);
    assert!((w.progress_percent() - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn progress_is_independent_of_which_sections_are_answered() {
    let mut a = wizard();
    a.set_answer("q1", "x");
    a.set_answer("q2", "x");

    let mut b = wizard();
    b.set_answer("q2", "x");
    b.set_answer("q3", "x");

    assert_eq!(a.progress(), b.progress());
}

#[test]
fn overwriting_an_answer_does_not_double_count() {
    let mut w = wizard();
    w.set_answer("q1", "first");
    w.set_answer("q1", "second");
    assert_eq!(w.answered_count(), 1);
    assert_eq!(w.answer("q1"), Some(&Answer::Text("second".to_string())));
}

#[test]
fn empty_text_still_counts_as_answered() {
    let mut w = wizard();
    w.set_answer("q2", "");
    assert_eq!(w.answered_count(), 1);
}

#[test]
fn unknown_question_ids_are_stored_but_not_counted() {
    let mut w = wizard();
    w.set_answer("not-a-question", "x");
    assert!(w.answers().contains("not-a-question"));
    assert_eq!(w.answered_count(), 0);
    assert_eq!(w.progress(), 0.0);
}

#[test]
fn advance_moves_forward_then_finishes() {
    let mut w = wizard();
    assert_eq!(w.advance(), Advance::Moved(1));
    assert!(w.is_last());

    w.set_answer("q3", "y");
    let before = w.answers().clone();
    assert_eq!(w.advance(), Advance::Finished);
    assert_eq!(w.current_index(), 1);
    assert_eq!(w.answers(), &before);

    assert_eq!(w.advance(), Advance::Finished);
    assert_eq!(w.current_index(), 1);
}

#[test]
fn retreat_on_first_section_is_a_no_op() {
    let mut w = wizard();
    w.set_answer("q1", "x");
    let answers = w.answers().clone();

    assert!(!w.retreat());
    assert_eq!(w.current_index(), 0);
    assert_eq!(w.answers(), &answers);
}

#[test]
fn retreat_moves_back_one_section() {
    let mut w = wizard();
    w.advance();
    assert!(w.retreat());
    assert_eq!(w.current_index(), 0);
}

#[test]
fn jump_to_ignores_completion() {
    let mut w = wizard();
    assert!(w.jump_to(1));
    assert_eq!(w.current_index(), 1);
    assert!(w.jump_to(0));
    assert_eq!(w.current_index(), 0);
    assert!(w.jump_to(0));
    assert_eq!(w.current_index(), 0);
}

#[test]
fn jump_out_of_range_is_ignored() {
    let mut w = wizard();
    w.advance();
    assert!(!w.jump_to(2));
    assert!(!w.jump_to(usize::MAX));
    assert_eq!(w.current_index(), 1);
}

#[test]
fn section_answered_counts_per_section() {
    let mut w = wizard();
    w.set_answer("q1", "x");
    w.set_answer("q2", "x");
    w.set_answer("q3", "x");
    assert_eq!(w.section_answered(0), 2);
    assert_eq!(w.section_answered(1), 1);
    assert_eq!(w.section_answered(7), 0);
}

#[test]
fn revealed_questions_reset_on_section_change() {
    let mut w = wizard();
    w.reveal(0);
    w.reveal(1);
    w.reveal(5);
    assert!(w.is_revealed(0));
    assert!(w.is_revealed(1));
    assert!(!w.is_revealed(5));

    w.jump_to(0);
    assert!(w.is_revealed(0));

    w.advance();
    assert!(!w.is_revealed(0));
    assert!(!w.is_revealed(1));
}

#[test]
fn toggle_choice_adds_and_removes() {
    let mut w = wizard();
    assert!(w.toggle_choice("q1", "SaaS"));
    assert!(w.toggle_choice("q1", "Fintech"));
    assert_eq!(
        w.answer("q1"),
        Some(&Answer::Choices(vec!["SaaS".to_string(), "Fintech".to_string()]))
    );

    assert!(!w.toggle_choice("q1", "SaaS"));
    assert_eq!(w.answer("q1").map(Answer::display), Some("Fintech".to_string()));

    assert!(!w.toggle_choice("q1", "Fintech"));
    assert!(w.answer("q1").is_none());
    assert_eq!(w.answered_count(), 0);
}

#[test]
fn empty_questionnaire_is_rejected() {
    let err = Wizard::from_sections("empty", Vec::new()).unwrap_err();
    assert!(matches!(err, FormError::EmptyQuestionnaire(id) if id == "empty"));
}

#[test]
fn duplicate_question_ids_are_rejected() {
    let sections = vec![
        Section::new("a", "A", "", vec![Question::text("dup", "One")]),
        Section::new("b", "B", "", vec![Question::text("dup", "Again")]),
    ];
    let err = Wizard::from_sections("dups", sections).unwrap_err();
    assert!(matches!(
        err,
        FormError::DuplicateQuestion { question_id, .. } if question_id == "dup"
    ));
}

#[test]
fn sections_without_questions_report_zero_progress() {
    let w = Wizard::from_sections("blank", vec![Section::new("s", "S", "", Vec::new())]).unwrap();
    assert_eq!(w.total_questions(), 0);
    assert_eq!(w.progress(), 0.0);
    assert!(w.is_first() && w.is_last());
}

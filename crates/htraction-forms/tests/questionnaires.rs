use htraction_core::models::form::EntryValue;
use htraction_forms::answers::AnswerMap;
use htraction_forms::error::FormError;
use htraction_forms::questionnaires::company_profile::CompanyProfile;
use htraction_forms::questionnaires::company_setup::CompanySetup;
use htraction_forms::submission::Submission;
use htraction_forms::wizard::{Advance, Wizard};
use htraction_forms::{Questionnaire, all_questionnaires, get_questionnaire, require_questionnaire};

#[test]
fn registry_finds_questionnaires_by_id() {
    assert_eq!(all_questionnaires().len(), 2);
    assert_eq!(get_questionnaire("company_profile").unwrap().name(), "Company Profile");
    assert_eq!(get_questionnaire("company_setup").unwrap().name(), "Company Setup");
    assert!(get_questionnaire("nope").is_none());

    let err = require_questionnaire("nope").err().unwrap();
    assert!(matches!(
        &err,
        FormError::UnknownQuestionnaire { id, available }
            if id == "nope" && available == &["company_setup", "company_profile"]
    ));
    assert_eq!(
        err.to_string(),
        "unknown questionnaire 'nope' (available: company_setup, company_profile)"
    );
}

#[test]
fn company_profile_has_eight_sections_with_unique_ids() {
    let profile = CompanyProfile;
    assert_eq!(profile.sections().len(), 8);
    assert_eq!(profile.total_questions(), 61);
    assert_eq!(profile.sections()[7].title, "Product-Market Fit (PMF)");

    let wizard = Wizard::new(&profile).unwrap();
    assert_eq!(wizard.total_questions(), 61);
}

#[test]
fn every_registered_questionnaire_builds_a_wizard() {
    for questionnaire in all_questionnaires() {
        let wizard = Wizard::new(questionnaire.as_ref()).unwrap();
        assert_eq!(wizard.questionnaire_id(), questionnaire.id());
        assert_eq!(wizard.total_questions(), questionnaire.question_ids().len());
    }
}

#[test]
fn question_lookup_by_id() {
    let profile = CompanyProfile;
    let q = profile.question("htraction_funding_amount").unwrap();
    assert_eq!(q.prompt, "Your last funding amount (in USD)");
    assert!(profile.question("missing").is_none());
}

#[test]
fn validation_flags_bad_select_numeric_and_unknown_answers() {
    let profile = CompanyProfile;
    let mut answers = AnswerMap::new();
    answers.upsert("htraction_is_startup_registered", "Maybe");
    answers.upsert("htraction_funding_amount", "lots");
    answers.upsert("htraction_startup_name", "Star AI");
    answers.upsert("ghost_field", "x");

    let issues = profile.validate_answers(&answers);
    let ids: Vec<_> = issues.iter().map(|i| i.question_id.as_str()).collect();
    assert_eq!(issues.len(), 3);
    assert!(ids.contains(&"htraction_is_startup_registered"));
    assert!(ids.contains(&"htraction_funding_amount"));
    assert!(ids.contains(&"ghost_field"));
}

#[test]
fn validation_accepts_grouped_numbers_and_known_choices() {
    let profile = CompanyProfile;
    let mut answers = AnswerMap::new();
    answers.upsert("htraction_funding_amount", "100,000");
    answers.upsert("htraction_raise_funding_before", "Yes");
    assert!(profile.validate_answers(&answers).is_empty());

    let setup = CompanySetup;
    let mut answers = AnswerMap::new();
    answers.toggle_choice("industry", "AI/ML");
    answers.toggle_choice("industry", "Fintech");
    assert!(setup.validate_answers(&answers).is_empty());

    answers.toggle_choice("industry", "Space");
    let issues = setup.validate_answers(&answers);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("Space"));
}

#[test]
fn structured_summary_lists_answered_questions_by_section() {
    let setup = CompanySetup;
    let mut answers = AnswerMap::new();
    answers.upsert("company_name", "Star AI");
    answers.toggle_choice("industry", "SaaS");
    answers.toggle_choice("industry", "B2B");

    let summary = setup.to_structured_summary(&answers);
    assert!(summary.starts_with("## Company Setup\n"));
    assert!(summary.contains("### Set Up Your Company\n"));
    assert!(summary.contains("- Company Name: Star AI\n"));
    assert!(summary.contains("- Industry: SaaS, B2B\n"));
    assert!(!summary.contains("Headquarters"));
}

#[test]
fn finished_wizard_hands_off_form_groups_keyed_by_question_id() {
    let setup = CompanySetup;
    let mut wizard = Wizard::new(&setup).unwrap();
    wizard.set_answer("company_name", "Star AI");
    wizard.toggle_choice("industry", "AI/ML");
    assert_eq!(wizard.advance(), Advance::Finished);

    let submission = wizard.into_submission();
    assert_eq!(submission.questionnaire_id, "company_setup");

    let groups = submission.to_form_groups(&setup);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group_name, "Set Up Your Company");
    assert_eq!(groups[0].entries.len(), 2);
    assert_eq!(
        groups[0].find("company_name").map(|e| &e.value),
        Some(&EntryValue::Scalar("Star AI".to_string()))
    );
    assert_eq!(
        groups[0].find("industry").map(|e| &e.value),
        Some(&EntryValue::StringList(vec!["AI/ML".to_string()]))
    );
}

#[test]
fn submission_survives_json() {
    let setup = CompanySetup;
    let mut wizard = Wizard::new(&setup).unwrap();
    wizard.set_answer("headquarters", "Hyderabad");
    wizard.toggle_choice("industry", "SaaS");
    let submission = wizard.into_submission();

    let parsed = Submission::from_json(&submission.to_json().unwrap()).unwrap();
    assert_eq!(parsed.id, submission.id);
    assert_eq!(parsed.answers, submission.answers);
}

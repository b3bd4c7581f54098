use crate::Questionnaire;
use crate::question::{InputKind, Question, Section};

pub const INDUSTRIES: [&str; 10] = [
    "SaaS",
    "E-commerce",
    "Fintech",
    "Healthtech",
    "Edtech",
    "AI/ML",
    "Blockchain",
    "Consumer",
    "B2B",
    "Other",
];

/// Company setup: the short onboarding form filled in before the profile.
/// One section, with industries picked as a multi-select.
pub struct CompanySetup;

impl Questionnaire for CompanySetup {
    fn id(&self) -> &str {
        "company_setup"
    }

    fn name(&self) -> &str {
        "Company Setup"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section::new(
                "company-setup",
                "Set Up Your Company",
                "Tell us the basics about your startup",
                vec![
                    Question::text("company_name", "Company Name"),
                    Question::yes_no("is_incorporated", "Is your company incorporated?"),
                    Question::text("incorporation_date", "Date of Incorporation"),
                    Question::text("incorporation_name", "Registered Company Name"),
                    Question::text("headquarters", "Headquarters"),
                    Question::new("industry", "Industry", InputKind::multi_select(&INDUSTRIES)),
                    Question::yes_no("terms_accepted", "I accept the Terms of Service and Privacy Policy"),
                ],
            )]
        });
        &SECTIONS
    }
}

//! htraction-forms
//!
//! Questionnaire definitions and the section-by-section wizard that collects
//! answers for them. Pure data and state, no I/O.

pub mod answers;
pub mod error;
pub mod question;
pub mod questionnaires;
pub mod submission;
pub mod wizard;

use answers::{Answer, AnswerMap};
use error::FormError;
use question::{AnswerIssue, InputKind, Question, Section};

/// Trait implemented by each questionnaire a founder can fill in.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "company_profile").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Company Profile").
    fn name(&self) -> &str;

    /// Ordered sections. Order is the wizard's navigation order.
    fn sections(&self) -> &[Section];

    fn total_questions(&self) -> usize {
        self.sections().iter().map(|s| s.questions.len()).sum()
    }

    fn question(&self, id: &str) -> Option<&Question> {
        self.sections()
            .iter()
            .flat_map(|s| &s.questions)
            .find(|q| q.id == id)
    }

    fn question_ids(&self) -> Vec<&str> {
        self.sections()
            .iter()
            .flat_map(|s| &s.questions)
            .map(|q| q.id.as_str())
            .collect()
    }

    /// Check answers against question kinds and options. The wizard never
    /// calls this; it is for views that want to flag bad input.
    fn validate_answers(&self, answers: &AnswerMap) -> Vec<AnswerIssue> {
        let mut issues = Vec::new();
        for (id, answer) in answers.iter() {
            let Some(question) = self.question(id) else {
                issues.push(AnswerIssue {
                    question_id: id.to_string(),
                    message: format!("{}: '{id}' is not a known question", self.name()),
                });
                continue;
            };
            if let Some(message) = check_answer(question, answer) {
                issues.push(AnswerIssue {
                    question_id: id.to_string(),
                    message: format!("{}: {}", question.prompt, message),
                });
            }
        }
        issues
    }

    /// Answered questions as Markdown, grouped by section.
    fn to_structured_summary(&self, answers: &AnswerMap) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for section in self.sections() {
            output.push_str(&format!("### {}\n", section.title));
            for question in &section.questions {
                if let Some(answer) = answers.get(&question.id) {
                    output.push_str(&format!("- {}: {}\n", question.prompt, answer.display()));
                }
            }
            output.push('\n');
        }
        output
    }
}

fn check_answer(question: &Question, answer: &Answer) -> Option<String> {
    match (&question.input, answer) {
        (InputKind::ShortText | InputKind::LongText, Answer::Choices(_)) => {
            Some("expects text, got a list of choices".to_string())
        }
        (InputKind::Numeric, Answer::Text(text)) => {
            let cleaned = text.trim().replace(',', "");
            if cleaned.is_empty() || cleaned.parse::<f64>().is_ok() {
                None
            } else {
                Some(format!("'{text}' is not a number"))
            }
        }
        (InputKind::Numeric, Answer::Choices(_)) => {
            Some("expects a number, got a list of choices".to_string())
        }
        (InputKind::SingleSelect { options }, Answer::Text(text)) => {
            if options.contains(text) {
                None
            } else {
                Some(format!("'{text}' is not one of {}", options.join(", ")))
            }
        }
        (InputKind::SingleSelect { .. }, Answer::Choices(_)) => {
            Some("expects a single choice".to_string())
        }
        (InputKind::MultiSelect { options }, answer) => {
            let chosen: Vec<&str> = match answer {
                Answer::Text(text) => vec![text.as_str()],
                Answer::Choices(items) => items.iter().map(String::as_str).collect(),
            };
            let unknown: Vec<&str> = chosen
                .into_iter()
                .filter(|c| !options.iter().any(|o| o == c))
                .collect();
            if unknown.is_empty() {
                None
            } else {
                Some(format!("'{}' not among {}", unknown.join(", "), options.join(", ")))
            }
        }
        _ => None,
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::company_setup::CompanySetup),
        Box::new(questionnaires::company_profile::CompanyProfile),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}

/// Like [`get_questionnaire`], but an unknown id is an error naming the
/// registered ones.
pub fn require_questionnaire(id: &str) -> Result<Box<dyn Questionnaire>, FormError> {
    get_questionnaire(id).ok_or_else(|| FormError::UnknownQuestionnaire {
        id: id.to_string(),
        available: all_questionnaires()
            .iter()
            .map(|q| q.id().to_string())
            .collect(),
    })
}

//! Section-by-section wizard over a questionnaire.
//!
//! The wizard owns the current section index and the [`AnswerMap`]. Every
//! operation is total: navigation outside the section range is ignored and
//! answers are stored without validation. Leaving the last section is
//! reported to the caller as [`Advance::Finished`]; what happens next
//! (submission, navigation) is up to the caller.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::Questionnaire;
use crate::answers::{Answer, AnswerMap};
use crate::error::FormError;
use crate::question::Section;
use crate::submission::Submission;

/// Outcome of [`Wizard::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the section at this index.
    Moved(usize),
    /// Already on the last section; the wizard is done and its state is
    /// unchanged.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    questionnaire_id: String,
    sections: Vec<Section>,
    question_ids: HashSet<String>,
    total_questions: usize,
    current: usize,
    answers: AnswerMap,
    /// Per-section view state (which questions have been revealed). Reset on
    /// every section change.
    revealed: BTreeSet<usize>,
}

impl Wizard {
    pub fn new(questionnaire: &dyn Questionnaire) -> Result<Self, FormError> {
        Self::from_sections(questionnaire.id(), questionnaire.sections().to_vec())
    }

    /// Build a wizard over ad-hoc sections. Fails when there are no sections
    /// or a question id is used twice.
    pub fn from_sections(
        questionnaire_id: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self, FormError> {
        let questionnaire_id = questionnaire_id.into();
        if sections.is_empty() {
            return Err(FormError::EmptyQuestionnaire(questionnaire_id));
        }

        let mut question_ids = HashSet::new();
        for question in sections.iter().flat_map(|s| &s.questions) {
            if !question_ids.insert(question.id.clone()) {
                return Err(FormError::DuplicateQuestion {
                    questionnaire_id,
                    question_id: question.id.clone(),
                });
            }
        }

        Ok(Self {
            questionnaire_id,
            total_questions: question_ids.len(),
            question_ids,
            sections,
            current: 0,
            answers: AnswerMap::new(),
            revealed: BTreeSet::new(),
        })
    }

    pub fn questionnaire_id(&self) -> &str {
        &self.questionnaire_id
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_section(&self) -> &Section {
        &self.sections[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.sections.len()
    }

    /// Move to the next section, or report [`Advance::Finished`] from the last.
    pub fn advance(&mut self) -> Advance {
        if self.is_last() {
            debug!(questionnaire = %self.questionnaire_id, "wizard finished");
            return Advance::Finished;
        }
        self.change_section(self.current + 1);
        Advance::Moved(self.current)
    }

    /// Move to the previous section. Returns `false` on the first section.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.change_section(self.current - 1);
        true
    }

    /// Go straight to any section, regardless of what has been answered.
    /// Out-of-range indices are ignored and return `false`.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.sections.len() {
            debug!(index, sections = self.sections.len(), "ignoring out-of-range jump");
            return false;
        }
        self.change_section(index);
        true
    }

    fn change_section(&mut self, index: usize) {
        if index != self.current {
            self.revealed.clear();
        }
        debug!(from = self.current, to = index, "section change");
        self.current = index;
    }

    /// Store an answer. No validation against the question's kind or options.
    pub fn set_answer(&mut self, question_id: impl Into<String>, value: impl Into<Answer>) {
        self.answers.upsert(question_id, value);
    }

    /// Toggle one choice of a multi-select answer. Returns whether the choice
    /// is selected afterwards.
    pub fn toggle_choice(&mut self, question_id: &str, choice: &str) -> bool {
        self.answers.toggle_choice(question_id, choice)
    }

    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Number of questions of this questionnaire that have an answer.
    /// Answers stored under unknown ids are not counted.
    pub fn answered_count(&self) -> usize {
        self.answers
            .keys()
            .filter(|id| self.question_ids.contains(*id))
            .count()
    }

    /// Answered fraction in `[0, 1]`; `0.0` for a questionnaire without
    /// questions.
    pub fn progress(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.answered_count() as f64 / self.total_questions as f64
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress() * 100.0
    }

    /// Answered questions in one section; `0` for an out-of-range index.
    pub fn section_answered(&self, index: usize) -> usize {
        self.sections.get(index).map_or(0, |section| {
            section
                .questions
                .iter()
                .filter(|q| self.answers.contains(&q.id))
                .count()
        })
    }

    /// Mark question `index` of the current section as revealed.
    pub fn reveal(&mut self, index: usize) {
        if index < self.current_section().questions.len() {
            self.revealed.insert(index);
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Hand the collected answers off for submission.
    pub fn into_submission(self) -> Submission {
        let submission = Submission {
            id: Uuid::new_v4(),
            questionnaire_id: self.questionnaire_id,
            answers: self.answers,
            submitted_at: jiff::Timestamp::now(),
        };
        tracing::info!(
            submission_id = %submission.id,
            questionnaire = %submission.questionnaire_id,
            answers = submission.answers.len(),
            "wizard answers handed off"
        );
        submission
    }
}

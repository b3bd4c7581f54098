//! Interactive questionnaire prompts.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

use htraction_forms::Questionnaire;
use htraction_forms::answers::Answer;
use htraction_forms::question::{InputKind, Question};
use htraction_forms::submission::Submission;
use htraction_forms::wizard::{Advance, Wizard};

const SKIP: &str = "(skip)";

/// What to do after a section has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Back,
    Jump,
    Finish,
}

impl Navigation {
    fn label(self) -> &'static str {
        match self {
            Navigation::Next => "Next section",
            Navigation::Back => "Previous section",
            Navigation::Jump => "Jump to section",
            Navigation::Finish => "Finish and submit",
        }
    }
}

/// Choices offered at the end of the current section. Back is only offered
/// after the first section, Finish only on the last.
pub fn navigation_choices(wizard: &Wizard) -> Vec<Navigation> {
    let mut choices = Vec::with_capacity(3);
    if wizard.is_last() {
        choices.push(Navigation::Finish);
    } else {
        choices.push(Navigation::Next);
    }
    if !wizard.is_first() {
        choices.push(Navigation::Back);
    }
    choices.push(Navigation::Jump);
    choices
}

/// `Section 2/8: Business Model (3/9 answered, 12% overall)`.
pub fn section_heading(wizard: &Wizard) -> String {
    let index = wizard.current_index();
    let section = wizard.current_section();
    format!(
        "Section {}/{}: {} ({}/{} answered, {:.0}% overall)",
        index + 1,
        wizard.section_count(),
        section.title,
        wizard.section_answered(index),
        section.questions.len(),
        wizard.progress_percent()
    )
}

/// Bring a multi-select answer in line with the options ticked at
/// `selected` by toggling only the choices that changed.
pub fn apply_multi_selection(wizard: &mut Wizard, question: &Question, selected: &[usize]) {
    for (i, option) in question.input.options().iter().enumerate() {
        let wanted = selected.contains(&i);
        if wanted != is_chosen(wizard.answer(&question.id), option) {
            wizard.toggle_choice(&question.id, option);
        }
    }
}

fn is_chosen(answer: Option<&Answer>, option: &str) -> bool {
    match answer {
        Some(Answer::Choices(items)) => items.iter().any(|c| c == option),
        Some(Answer::Text(text)) => text == option,
        None => false,
    }
}

/// Walk the user through `questionnaire` until they finish.
pub fn run_wizard(questionnaire: &dyn Questionnaire) -> eyre::Result<Submission> {
    let theme = ColorfulTheme::default();
    let mut wizard = Wizard::new(questionnaire)?;

    loop {
        eprintln!("\n{}", section_heading(&wizard));
        if !wizard.current_section().description.is_empty() {
            eprintln!("{}", wizard.current_section().description);
        }

        let questions = wizard.current_section().questions.clone();
        for (i, question) in questions.iter().enumerate() {
            wizard.reveal(i);
            ask(&theme, &mut wizard, question)?;
        }

        let choices = navigation_choices(&wizard);
        let labels: Vec<&str> = choices.iter().map(|c| c.label()).collect();
        let picked = Select::with_theme(&theme)
            .with_prompt("Continue")
            .items(&labels)
            .default(0)
            .interact()?;

        match choices[picked] {
            Navigation::Next | Navigation::Finish => {
                if wizard.advance() == Advance::Finished {
                    break;
                }
            }
            Navigation::Back => {
                wizard.retreat();
            }
            Navigation::Jump => {
                let titles: Vec<String> = wizard
                    .sections()
                    .iter()
                    .enumerate()
                    .map(|(i, s)| format!("{} ({} answered)", s.title, wizard.section_answered(i)))
                    .collect();
                let target = Select::with_theme(&theme)
                    .with_prompt("Section")
                    .items(&titles)
                    .default(wizard.current_index())
                    .interact()?;
                wizard.jump_to(target);
            }
        }
    }

    Ok(wizard.into_submission())
}

fn ask(theme: &ColorfulTheme, wizard: &mut Wizard, question: &Question) -> eyre::Result<()> {
    match &question.input {
        InputKind::ShortText | InputKind::LongText | InputKind::Numeric => {
            let numeric = question.input == InputKind::Numeric;
            let current = wizard
                .answer(&question.id)
                .map(Answer::display)
                .unwrap_or_default();
            let input: String = Input::with_theme(theme)
                .with_prompt(&question.prompt)
                .allow_empty(true)
                .with_initial_text(current)
                .validate_with(|value: &String| -> Result<(), &str> {
                    if numeric && !value.trim().is_empty() && value.trim().parse::<f64>().is_err() {
                        Err("enter a number")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?;
            if !input.trim().is_empty() {
                wizard.set_answer(question.id.clone(), input.trim());
            }
        }
        InputKind::SingleSelect { options } => {
            let mut labels: Vec<&str> = options.iter().map(String::as_str).collect();
            labels.push(SKIP);
            let current = wizard
                .answer(&question.id)
                .and_then(Answer::as_text)
                .and_then(|text| options.iter().position(|o| o == text))
                .unwrap_or(options.len());
            let picked = Select::with_theme(theme)
                .with_prompt(&question.prompt)
                .items(&labels)
                .default(current)
                .interact()?;
            if let Some(option) = options.get(picked) {
                wizard.set_answer(question.id.clone(), option.as_str());
            }
        }
        InputKind::MultiSelect { options } => {
            let checked: Vec<bool> = options
                .iter()
                .map(|o| is_chosen(wizard.answer(&question.id), o))
                .collect();
            let selected = MultiSelect::with_theme(theme)
                .with_prompt(&question.prompt)
                .items(options)
                .defaults(&checked)
                .interact()?;
            apply_multi_selection(wizard, question, &selected);
        }
    }
    Ok(())
}

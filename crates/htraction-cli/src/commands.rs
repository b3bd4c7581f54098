use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use htraction_chat::Conversation;
use htraction_chat::assistant::SUGGESTED_PROMPTS;
use htraction_chat::responder::Responder;
use htraction_core::models::form::FormGroup;
use htraction_core::models::investor::InvestorId;
use htraction_core::models::thesis::{ThesisConfig, VariableValue};
use htraction_core::storage_keys;
use htraction_forms::submission::Submission;
use htraction_forms::{Questionnaire, all_questionnaires, require_questionnaire};
use htraction_report::docx::generate_docx;
use htraction_report::layout::ReportLayout;
use htraction_report::projector::Projector;
use htraction_report::render::{render_markdown, render_with_template};
use htraction_report::{ReportData, build_view};
use htraction_storage::{AppliedInvestors, LocalStore};

use crate::cli::{Commands, ConfigCommands};
use crate::config::{self, HtractionConfig};
use crate::prompts;

pub fn run(command: Commands, config: &HtractionConfig, config_path: &Path) -> eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Profile { questionnaire, out: path } => {
            profile(config, &questionnaire, path, &mut out)
        }
        Commands::Report {
            input,
            template,
            layout,
            docx,
            strict,
        } => {
            let options = ReportOptions {
                template,
                layout,
                docx,
                strict,
            };
            report(config, &input, &options, &mut out)
        }
        Commands::Chat => {
            let mut conversation = Conversation::investor();
            if let Some(path) = &config.chat_responses_file {
                let added = conversation.extend_responses(&read(path)?)?;
                info!(path = %path.display(), added, "extra chat replies loaded");
            }
            let stdin = std::io::stdin();
            chat_session(&mut conversation, stdin.lock(), &mut out)
        }
        Commands::Apply { investor } => {
            let id: InvestorId = investor.parse()?;
            let store = local_store(config)?;
            if AppliedInvestors::new(&store).mark_applied(id)? {
                writeln!(out, "Applied to investor {id}.")?;
            } else {
                writeln!(out, "Already applied to investor {id}.")?;
            }
            Ok(())
        }
        Commands::Applied => {
            let store = local_store(config)?;
            let ids = AppliedInvestors::new(&store).list()?;
            if ids.is_empty() {
                writeln!(out, "No applications yet.")?;
            } else {
                writeln!(out, "{} applied", ids.len())?;
                for id in ids {
                    writeln!(out, "- {id}")?;
                }
            }
            Ok(())
        }
        Commands::Thesis { file } => {
            let thesis = load_thesis(file.as_deref().or(config.thesis_file.as_deref()))?;
            write!(out, "{}", thesis_summary(&thesis))?;
            Ok(())
        }
        Commands::Questionnaires => {
            for q in all_questionnaires() {
                writeln!(
                    out,
                    "{}\t{} ({} sections, {} questions)",
                    q.id(),
                    q.name(),
                    q.sections().len(),
                    q.total_questions()
                )?;
            }
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                writeln!(out, "# {}", config_path.display())?;
                writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
                Ok(())
            }
            ConfigCommands::Init { force } => {
                if config_path.exists() && !force {
                    writeln!(out, "Config already exists at {}", config_path.display())?;
                    return Ok(());
                }
                config::save_config(config_path, &HtractionConfig::default())?;
                writeln!(out, "Wrote {}", config_path.display())?;
                Ok(())
            }
        },
    }
}

fn local_store(config: &HtractionConfig) -> eyre::Result<LocalStore> {
    Ok(LocalStore::in_dir(&config.resolved_data_dir()?))
}

// ── Profile ──────────────────────────────────────────────────────────────────

/// A finished questionnaire as written to disk: the raw answers plus the
/// form groups the report consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSubmission {
    pub submission: Submission,
    pub form_groups: Vec<FormGroup>,
}

impl SavedSubmission {
    pub fn new(submission: Submission, questionnaire: &dyn Questionnaire) -> Self {
        let form_groups = submission.to_form_groups(questionnaire);
        Self {
            submission,
            form_groups,
        }
    }
}

fn profile(
    config: &HtractionConfig,
    questionnaire_id: &str,
    path: Option<PathBuf>,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let questionnaire = require_questionnaire(questionnaire_id)?;

    let submission = prompts::run_wizard(questionnaire.as_ref())?;

    for issue in questionnaire.validate_answers(&submission.answers) {
        warn!(question = %issue.question_id, "{}", issue.message);
    }
    write!(out, "{}", questionnaire.to_structured_summary(&submission.answers))?;

    let path = match path {
        Some(path) => path,
        None => config
            .resolved_data_dir()?
            .join(storage_keys::submission_file(submission.id)),
    };
    save_submission(&path, SavedSubmission::new(submission, questionnaire.as_ref()))?;
    writeln!(out, "\nSaved to {}", path.display())?;
    Ok(())
}

pub fn save_submission(path: &Path, saved: SavedSubmission) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(&saved)?)?;
    info!(path = %path.display(), submission_id = %saved.submission.id, "submission saved");
    Ok(())
}

// ── Report ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub template: Option<PathBuf>,
    pub layout: Option<PathBuf>,
    pub docx: Option<PathBuf>,
    pub strict: bool,
}

/// Report input: either the `formWiseData` payload or a submission saved by
/// `profile`.
pub fn load_report_data(json: &str) -> eyre::Result<ReportData> {
    match ReportData::from_payload_json(json) {
        Ok(data) => Ok(data),
        Err(payload_err) => match serde_json::from_str::<SavedSubmission>(json) {
            Ok(saved) => Ok(ReportData::new(saved.form_groups)),
            Err(_) => Err(eyre::eyre!("not a report payload: {payload_err}")),
        },
    }
}

/// Render Markdown for `data`. `template` is `(name, content)`.
pub fn render_report(
    data: &ReportData,
    layout: &ReportLayout,
    template: Option<(&str, &str)>,
    strict: bool,
) -> eyre::Result<String> {
    if strict {
        Projector::strict(&data.groups)?;
    }
    let view = build_view(data, layout);
    let markdown = match template {
        Some((name, content)) => render_with_template(name, content, &view)?,
        None => render_markdown(&view)?,
    };
    Ok(markdown)
}

fn report(
    config: &HtractionConfig,
    input: &Path,
    options: &ReportOptions,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let data = load_report_data(&read(input)?)?;

    let layout = match &options.layout {
        Some(path) => ReportLayout::from_json(&read(path)?)?,
        None => ReportLayout::investor_report().clone(),
    };

    let template = match &options.template {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string());
            Some((name, read(path)?))
        }
        None => None,
    };

    let markdown = render_report(
        &data,
        &layout,
        template.as_ref().map(|(n, c)| (n.as_str(), c.as_str())),
        options.strict,
    )?;
    write!(out, "{markdown}")?;

    if let Some(path) = &options.docx {
        let path = if path.is_dir() {
            let company = Projector::new(&data.groups).single_line(&layout.header.company_name);
            path.join(storage_keys::report_docx(&company))
        } else {
            path.clone()
        };
        let bytes = generate_docx(&markdown, &config.report_styles)?;
        std::fs::write(&path, bytes)?;
        info!(path = %path.display(), "DOCX written");
    }
    Ok(())
}

fn read(path: &Path) -> eyre::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))
}

// ── Chat ─────────────────────────────────────────────────────────────────────

/// Read lines from `input` until an empty line, `exit` or end of input,
/// printing each reply.
pub fn chat_session<R: Responder>(
    conversation: &mut Conversation<R>,
    input: impl BufRead,
    out: &mut impl Write,
) -> eyre::Result<()> {
    if let Some(greeting) = conversation.messages().first() {
        writeln!(out, "{}\n", greeting.content)?;
    }
    writeln!(out, "Try asking:")?;
    for prompt in SUGGESTED_PROMPTS {
        writeln!(out, "  - {prompt}")?;
    }

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }
        if let Some(reply) = conversation.send(&line) {
            writeln!(out, "\n{}\n", reply.content)?;
        }
    }
    Ok(())
}

// ── Thesis ───────────────────────────────────────────────────────────────────

fn load_thesis(path: Option<&Path>) -> eyre::Result<ThesisConfig> {
    match path {
        Some(path) => Ok(ThesisConfig::from_json(&read(path)?)?),
        None => Ok(ThesisConfig::default()),
    }
}

fn describe_value(value: &VariableValue) -> String {
    match value {
        VariableValue::Number(n) => n.to_string(),
        VariableValue::Text(t) => t.clone(),
        VariableValue::Boolean(b) => if *b { "Yes" } else { "No" }.to_string(),
        VariableValue::Range { min, max } => format!("{min} - {max}"),
    }
}

pub fn thesis_summary(config: &ThesisConfig) -> String {
    let mut s = String::new();

    s.push_str("Variables\n");
    for v in &config.variables {
        s.push_str(&format!("  {}: {}\n", v.name, describe_value(&v.value)));
    }

    s.push_str("Pillars\n");
    for p in &config.pillars {
        let names: Vec<&str> = p
            .variable_ids
            .iter()
            .map(|id| config.variable_name(id))
            .collect();
        s.push_str(&format!("  {}: {}\n", p.name, names.join(", ")));
    }

    s.push_str("Theses\n");
    for t in &config.theses {
        s.push_str(&format!("  {} (total weight {})\n", t.name, t.total_weight()));
        for c in &t.conditions {
            s.push_str(&format!(
                "    {:?} {} ({})\n",
                c.operator,
                config.pillar_name(&c.pillar_id),
                c.weight
            ));
        }
    }

    for d in config.dangling_references() {
        s.push_str(&format!("warning: {} refers to unknown id {}\n", d.owner_id, d.missing_id));
    }
    s
}

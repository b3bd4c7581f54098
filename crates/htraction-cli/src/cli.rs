use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "htraction", version, about = "Startup profiling, reports and investor tools")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, env = "HTRACTION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in a questionnaire section by section.
    Profile {
        #[arg(long, default_value = "company_profile")]
        questionnaire: String,
        /// Where to write the submission; defaults to the data directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render a report payload as Markdown.
    Report {
        input: PathBuf,
        /// Tera template used instead of the built-in one.
        #[arg(long)]
        template: Option<PathBuf>,
        /// Report layout JSON used instead of the investor layout.
        #[arg(long)]
        layout: Option<PathBuf>,
        /// Also export the report as DOCX.
        #[arg(long)]
        docx: Option<PathBuf>,
        /// Refuse payloads that repeat a field name.
        #[arg(long)]
        strict: bool,
    },
    /// Talk to the investor assistant.
    Chat,
    /// Record an application to an investor.
    Apply { investor: String },
    /// List investors applied to.
    Applied,
    /// Summarise the investment thesis configuration.
    Thesis { file: Option<PathBuf> },
    /// List the available questionnaires.
    Questionnaires,
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Write a default config file if none exists.
    Init {
        #[arg(long)]
        force: bool,
    },
}

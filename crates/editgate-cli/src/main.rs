mod cmd;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use editgate_core::config::GateConfig;
use editgate_core::engine::Gate;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "editgate",
    about = "Pre-write pattern gate — blocks edits that break project conventions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Rule table override (YAML). Embedded defaults are used when omitted.
    #[arg(long, global = true, env = "EDITGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Output the decision as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a Claude Code PreToolUse payload read from stdin
    Hook,

    /// Evaluate proposed content for a target path
    Check {
        /// Path the content would be written to
        path: String,

        /// Read the proposed content from this file (default: stdin)
        #[arg(long)]
        content_file: Option<PathBuf>,
    },

    /// Print the active rule table and protected paths
    Rules,
}

// Exit codes. Two distinct non-zero codes so the calling pipeline can tell
// "the edit is bad" (fix content, resubmit) from "the gate is broken"
// (fix the gate) without parsing text.
const EXIT_BLOCKED: u8 = 2;
const EXIT_CONFIG: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout is the report channel the agent reads; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_BLOCKED),
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = match &cli.config {
        Some(path) => GateConfig::load(path)
            .with_context(|| format!("failed to load gate config {}", path.display()))?,
        None => GateConfig::default(),
    };
    let gate = Gate::new(config).context("failed to compile rule table")?;

    match cli.command {
        Commands::Hook => cmd::hook::run(&gate, cli.json),
        Commands::Check { path, content_file } => {
            cmd::check::run(&gate, &path, content_file.as_deref(), cli.json)
        }
        Commands::Rules => cmd::rules::run(&gate, cli.json),
    }
}

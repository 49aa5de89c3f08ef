use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use crate::agents::Collaborators;
use crate::config::Config;
use crate::report::render_report;
use crate::workflow::{Workflow, WorkflowState};

#[derive(Parser, Debug)]
#[command(
    name = "hiring-copilot",
    about = "Rank resumes against a job description, draft emails, book interviews, and notify the team",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the pipeline once from the terminal and print the results
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// File containing the job description. Prompted for when omitted.
    #[arg(long)]
    pub jd_file: Option<PathBuf>,
    /// Resume file path. Repeat the flag or separate paths with commas.
    #[arg(long = "resume", value_delimiter = ',')]
    pub resumes: Vec<String>,
    /// Print the final state as JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// `hiring-copilot run`: one pipeline run over local files.
pub async fn run_pipeline(config: Config, args: RunArgs) -> Result<()> {
    let job_text = match &args.jd_file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job description from {}", path.display()))?,
        None => prompt("Paste job description text: ").await?,
    };

    let mut resumes = normalize_sources(args.resumes);
    if resumes.is_empty() {
        let answer = prompt("Enter resume path(s) (comma-separated for multiple): ").await?;
        resumes = normalize_sources(answer.split(',').map(String::from).collect());
    }

    if job_text.trim().is_empty() {
        bail!("A job description is required");
    }
    if resumes.is_empty() {
        bail!("At least one resume path is required");
    }

    let collaborators = Collaborators::from_config(&config)?;
    let workflow = Workflow::new(collaborators);
    info!("Starting hiring pipeline for {} resume(s)", resumes.len());

    match workflow.run(WorkflowState::new(job_text, resumes)).await {
        Ok(state) => {
            print_state(&state, args.json)?;
            Ok(())
        }
        Err(abort) => {
            eprintln!("Pipeline aborted at {}: {}", abort.step, abort.error);
            eprintln!("Partial results follow.\n");
            print_state(&abort.state, args.json)?;
            Err(abort.into())
        }
    }
}

fn print_state(state: &WorkflowState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        println!("{}", render_report(state));
    }
    Ok(())
}

/// Trims each path and drops blanks, keeping the given order.
fn normalize_sources(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

async fn prompt(question: &str) -> Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(question.as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

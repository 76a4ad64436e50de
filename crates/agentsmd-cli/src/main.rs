//! agentsmd - Parse, validate, and generate AGENTS.md files
//!
//! Usage:
//!   agentsmd [OPTIONS] <COMMAND>
//!
//! Commands:
//!   validate  Check that every required section is present
//!   parse     Print the document as JSON or YAML
//!   init      Write a starter AGENTS.md
//!   generate  Re-emit a document as canonical markdown
//!
//! Logging goes to stderr and is filtered by `AGENTSMD_LOG`
//! (e.g. `AGENTSMD_LOG=agentsmd_core=trace`).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use agentsmd_core::{
    generate, parse_file, template, to_json, to_yaml, validate, Document, ValidationIssue,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "AGENTSMD_LOG";

#[derive(Debug, Parser)]
#[command(name = "agentsmd", version, about = "Parse, validate, and generate AGENTS.md files")]
struct Cli {
    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that every required section is present; exits 1 on errors
    Validate {
        /// AGENTS.md file to check
        file: PathBuf,

        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Parse a file and print its sections as JSON or YAML
    Parse {
        /// AGENTS.md file to parse
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },

    /// Write a starter AGENTS.md for a new project
    Init {
        /// Name placed in the title heading
        #[arg(long, default_value = "MyProject")]
        project_name: String,

        /// Destination file
        #[arg(short, long, default_value = "AGENTS.md")]
        output: PathBuf,

        /// Overwrite the destination if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Re-emit a file as canonical AGENTS.md markdown
    Generate {
        /// AGENTS.md file to normalise
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Validate { file, json } => cmd_validate(&file, json),
        Command::Parse { file, output } => cmd_parse(&file, output),
        Command::Init {
            project_name,
            output,
            force,
        } => cmd_init(&project_name, &output, force),
        Command::Generate { file, output } => cmd_generate(&file, output.as_deref()),
    }
}

fn load(path: &Path) -> Result<Document> {
    debug!(path = %path.display(), "loading");
    parse_file(path).with_context(|| format!("failed to read '{}'", path.display()))
}

// =============================================================================
// Validate Command
// =============================================================================

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    issues: &'a [ValidationIssue],
}

fn cmd_validate(path: &Path, json: bool) -> Result<ExitCode> {
    let doc = load(path)?;
    let result = validate(&doc);
    let code = if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    if json {
        let report = JsonReport {
            valid: result.is_valid(),
            issues: result.issues(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(code);
    }

    if result.issues().is_empty() {
        println!("AGENTS.md is valid: {}", path.display());
        return Ok(code);
    }

    for issue in result.issues() {
        println!(
            "[{}] {}",
            issue.severity().as_str().to_uppercase(),
            issue
        );
    }

    if result.is_valid() {
        println!("Validation passed with warnings.");
    } else {
        println!("Validation failed.");
    }

    Ok(code)
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(path: &Path, format: OutputFormat) -> Result<ExitCode> {
    let doc = load(path)?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&doc)?),
        OutputFormat::Yaml => print!("{}", to_yaml(&doc)?),
    }

    Ok(ExitCode::SUCCESS)
}

// =============================================================================
// Init Command
// =============================================================================

fn cmd_init(project_name: &str, output: &Path, force: bool) -> Result<ExitCode> {
    if output.exists() && !force {
        bail!(
            "file already exists: {}. Use --force to overwrite.",
            output.display()
        );
    }

    let content = template(project_name)?;
    fs::write(output, content)
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    println!(
        "Created {} for project '{}'.",
        output.display(),
        project_name.trim()
    );
    Ok(ExitCode::SUCCESS)
}

// =============================================================================
// Generate Command
// =============================================================================

fn cmd_generate(path: &Path, output: Option<&Path>) -> Result<ExitCode> {
    let doc = load(path)?;
    let rendered = generate(&doc);

    match output {
        Some(dest) => {
            fs::write(dest, rendered)
                .with_context(|| format!("failed to write '{}'", dest.display()))?;
            println!("Written to {}", dest.display());
        }
        None => print!("{}", rendered),
    }

    Ok(ExitCode::SUCCESS)
}

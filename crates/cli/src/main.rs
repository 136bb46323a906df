//! GPA engine CLI
//!
//! Command-line interface for validating student records, calculating
//! GPA/CGPA and classifying the result.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_engine_application::ApplicationError;
use gpa_engine_cli::commands::{classify, course, report, validate, CommandContext};
use gpa_engine_cli::output::OutputFormat;
use gpa_engine_common::{init_tracing, EngineConfig};

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gpa")]
#[command(author, version, about = "GPA and CGPA calculator")]
#[command(long_about = "Validate a semester's courses, calculate GPA and CGPA, and classify the result.\n\n\
    Student records are JSON files with a studentData section and a courses list.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    format: CliOutputFormat,

    /// Configuration file (overrides config/ and GPA_ environment variables)
    #[arg(short, long, global = true, env = "GPA_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for message selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate, calculate and classify a student record
    #[command(alias = "r")]
    Report {
        /// Student record file
        file: PathBuf,
    },

    /// Check a student record and list every problem
    #[command(alias = "v")]
    Validate {
        /// Student record file
        file: PathBuf,
    },

    /// Show the class, pass status and a message for a CGPA
    #[command(alias = "c")]
    Classify {
        /// CGPA on the five-point scale
        #[arg(allow_hyphen_values = true)]
        cgpa: f64,
    },

    /// Add a course to a student record
    AddCourse {
        /// Student record file
        file: PathBuf,

        /// Course name
        #[arg(short, long)]
        name: String,

        /// Unit weight (1-6)
        #[arg(short, long, allow_hyphen_values = true)]
        units: i64,

        /// Letter grade (A-F)
        #[arg(short, long)]
        grade: String,

        /// Save the updated record
        #[arg(short, long)]
        write: bool,
    },

    /// Remove a course from a student record
    RemoveCourse {
        /// Student record file
        file: PathBuf,

        /// Course name (case-insensitive)
        #[arg(short, long)]
        name: String,

        /// Save the updated record
        #[arg(short, long)]
        write: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "gpa", &mut std::io::stdout());
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    match &cli.config {
        Some(path) => EngineConfig::from_file(path),
        None => EngineConfig::load(),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Handle completions command early (doesn't need config)
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    // Load configuration
    let config = load_config(&cli)?;

    // Initialize tracing
    let log_level = if cli.verbose {
        "debug"
    } else {
        config.telemetry.log_level.as_str()
    };
    init_tracing(cli.json_logs || config.telemetry.json_logging, log_level)?;
    tracing::debug!(policy = ?config.policy, "Configuration loaded");

    let ctx = CommandContext::new(config, cli.format.into(), cli.seed);

    // Execute command
    let result = match cli.command {
        Commands::Report { file } => report::report(&ctx, &file),
        Commands::Validate { file } => validate::validate(&ctx, &file),
        Commands::Classify { cgpa } => classify::classify(&ctx, cgpa),
        Commands::AddCourse {
            file,
            name,
            units,
            grade,
            write,
        } => course::add(
            &ctx,
            &file,
            course::CourseInput { name, units, grade },
            write,
        ),
        Commands::RemoveCourse { file, name, write } => course::remove(&ctx, &file, &name, write),
        Commands::Completions { .. } => {
            // Already handled above
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), e);
        if cli.verbose {
            eprintln!("\n{}", "Details:".dimmed());
            eprintln!("{:?}", e);
        }
        let code = e
            .downcast_ref::<ApplicationError>()
            .map(ApplicationError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }

    Ok(())
}

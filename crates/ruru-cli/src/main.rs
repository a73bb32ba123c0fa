// Rust guideline compliant 2026-10-16

//! Ruru CLI Application
//!
//! Command-line front end for partial argument matching.

use anyhow::Context;
use clap::Parser;
use ruru_cli::commands::{self, match_arg::ChoiceSource};
use ruru_cli::logging::init_tracing;
use ruru_cli::terminal::print_error;
use ruru_cli::{create_formatter, should_use_color, ErrorEnvelope, OutputFormatter};
use ruru_core::{Config, OutputFormat};
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "ruru",
    version,
    about = "Ruru: partial argument matching",
    long_about = "Resolves abbreviated arguments against a list of choices. Exact matches win, a unique prefix resolves, and ambiguity is an error unless several results are allowed.",
    after_help = "Examples:\n  ruru match ban --choices apple,banana,cherry\n  ruru match ap --choices apple,apricot,banana --several-ok\n  ruru match ban ch --choices apple,banana,cherry --several-ok\n  ruru match dar --set themes\n  ruru pmatch med --choices mean,median,mode\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve arguments against a list of choices
    Match {
        /// Arguments to resolve
        #[arg(required = true)]
        args: Vec<String>,

        /// Comma-separated choices
        #[arg(long, value_delimiter = ',', conflicts_with = "set", required_unless_present = "set")]
        choices: Vec<String>,

        /// Named choice set from the configuration (abbreviations allowed)
        #[arg(long)]
        set: Option<String>,

        /// Accept several results and batch input
        #[arg(long)]
        several_ok: bool,

        /// Treat a single argument as a one-element batch
        #[arg(long)]
        batch: bool,
    },

    /// Run the raw prefix matcher on one query
    Pmatch {
        /// Query to match
        query: String,

        /// Comma-separated candidate table (duplicates are kept)
        #[arg(long, value_delimiter = ',', required = true)]
        choices: Vec<String>,
    },

    /// List configured choice sets
    Sets,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();
    let formatter = create_formatter(if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    });

    // A bad flag is a usage error, not a match failure, even though the
    // level name is resolved by the matcher.
    if let Err(err) = init_tracing(&cli.log_level, cli.log_json) {
        print_failure(&anyhow::Error::from(err), formatter.as_ref(), use_color);
        return ExitCode::FAILURE;
    }

    // The raw matcher works on its inline table only.
    let config = if matches!(cli.command, Commands::Pmatch { .. }) {
        Config::default()
    } else {
        match load_config(cli.config.as_deref()) {
            Ok(config) => config,
            Err(err) => return report(&err, formatter.as_ref(), use_color),
        }
    };

    let formatter = if cli.json {
        formatter
    } else {
        create_formatter(config.output_format)
    };

    match run(cli.command, &config, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, formatter.as_ref(), use_color),
    }
}

fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_file(Path::new(path))
            .with_context(|| format!("failed to load config file {}", path)),
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            Config::load(&cwd).context("failed to load configuration")
        }
    }
}

fn run(command: Commands, config: &Config, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    match command {
        Commands::Match {
            args,
            choices,
            set,
            several_ok,
            batch,
        } => {
            let source = match set {
                Some(name) => ChoiceSource::Set(name),
                None => ChoiceSource::Inline(choices),
            };
            commands::match_arg::execute(
                args,
                &source,
                several_ok || config.several_ok,
                batch,
                config,
                formatter,
            )
        }
        Commands::Pmatch { query, choices } => {
            commands::pmatch::execute(&query, &choices, formatter)
        }
        Commands::Sets => commands::sets::execute(config, formatter),
    }
}

/// Prints an error and returns the exit code: 2 for match failures, 1 otherwise.
fn report(err: &anyhow::Error, formatter: &dyn OutputFormatter, use_color: bool) -> ExitCode {
    print_failure(err, formatter, use_color);

    let match_failure = err
        .downcast_ref::<ruru_core::Error>()
        .is_some_and(ruru_core::Error::is_match_failure);
    if match_failure {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

fn print_failure(err: &anyhow::Error, formatter: &dyn OutputFormatter, use_color: bool) {
    let envelope = ErrorEnvelope::from_error(err);
    tracing::debug!(code = ?envelope.code, error = %envelope.message, "command failed");
    let output = formatter.format_error(&envelope);
    if formatter.errors_to_stdout() {
        println!("{}", output);
    } else {
        print_error(&output, use_color);
    }
}

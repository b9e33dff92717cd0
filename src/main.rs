//! rupee-convert CLI
//!
//! Convert an amount in Rupees into a fixed set of currencies,
//! interactively or in one shot.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use rupee_convert::config::{default_log_path, resolve_table};
use rupee_convert::convert::convert;
use rupee_convert::currency::{find, CurrencyDefinition};
use rupee_convert::error::AppError;
use rupee_convert::logging::{self, LogTarget};
use rupee_convert::report::{format_conversions, format_table, OutputFormat};
use rupee_convert::tui;

#[derive(Parser)]
#[command(name = "rupee-convert")]
#[command(about = "Convert Rupees into other currencies")]
#[command(version)]
struct Cli {
    /// Rates file (JSON) replacing the built-in table
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// Log file for the interactive screen
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive converter (default)
    Tui,

    /// Convert an amount and print the results
    Convert {
        /// Amount in Rupees
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Only convert into these currencies (repeatable)
        #[arg(long = "to")]
        to: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// List the currency table
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let command = cli.command.unwrap_or(Commands::Tui);

    let target = match command {
        Commands::Tui => LogTarget::File(cli.log_file.unwrap_or_else(default_log_path)),
        _ => LogTarget::Stderr,
    };
    let _guard = logging::init(&target, cli.verbose)?;

    let loaded = resolve_table(cli.rates.as_deref())?;
    info!(source = %loaded.source, "using currency table");

    match command {
        Commands::Tui => cmd_tui(loaded.currencies),
        Commands::Convert { amount, to, format } => {
            cmd_convert(&loaded.currencies, &amount, &to, format.into())
        }
        Commands::List { format } => cmd_list(&loaded.currencies, format.into()),
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(table: Vec<CurrencyDefinition>) -> Result<(), AppError> {
    tui::run(table)?;
    Ok(())
}

fn cmd_convert(
    table: &[CurrencyDefinition],
    amount: &str,
    to: &[String],
    format: OutputFormat,
) -> Result<(), AppError> {
    let targets = select_targets(table, to)?;

    let conversions = targets
        .into_iter()
        .map(|currency| convert(amount, currency))
        .collect::<Result<Vec<_>, _>>()?;

    print!("{}", format_conversions(&conversions, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn cmd_list(table: &[CurrencyDefinition], format: OutputFormat) -> Result<(), AppError> {
    print!("{}", format_table(table, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Resolve `--to` names against the table; all of it when none are given.
fn select_targets<'a>(
    table: &'a [CurrencyDefinition],
    names: &[String],
) -> Result<Vec<&'a CurrencyDefinition>, AppError> {
    if names.is_empty() {
        return Ok(table.iter().collect());
    }
    names
        .iter()
        .map(|name| find(table, name).ok_or_else(|| AppError::UnknownCurrency(name.clone())))
        .collect()
}

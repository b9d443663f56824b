// Command-line front end for national identity number validation

use clap::{Parser, Subcommand};
use natid::{
    processing::{normalize, read_batch},
    IdentifierError, IdentifierFormatter, IdentifierRules, IdentityValidator, TrackedValidator,
    UsageStats, ValidationResult,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "natid", version, about = "Validate 13-digit national identity numbers")]
struct Cli {
    /// JSON file overriding the default identifier rules
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Log every validation stage
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate identifiers and report derived attributes
    Validate {
        identifiers: Vec<String>,

        /// Read additional identifiers from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print one JSON result per line
        #[arg(long)]
        json: bool,

        /// Print usage statistics after the run
        #[arg(long)]
        stats: bool,
    },
    /// Print an identifier in its grouped display form
    Format { identifier: String },
}

// Function to print a detailed validation report
fn print_detailed_report(identifier: &str, result: &ValidationResult) {
    println!("\n===============================================");
    println!("  {}", IdentifierFormatter::format(identifier));
    println!("===============================================");

    println!(
        "  Result: {}",
        if result.is_valid() { "VALID" } else { "INVALID" }
    );

    if let Some(date) = result.birth_date() {
        println!("  Date of Birth: {}", date);
    }
    if let Some(gender) = result.gender() {
        println!("  Gender: {}", gender);
    }
    if let Some(status) = result.citizenship_status() {
        println!("  Citizenship: {}", status);
    }

    if !result.errors().is_empty() {
        println!("\nISSUES FOUND:");
        for issue in result.errors() {
            println!("  - {}", issue);
        }
    }
}

fn run_validate(
    validator: IdentityValidator,
    mut identifiers: Vec<String>,
    file: Option<PathBuf>,
    json: bool,
    stats: bool,
) -> Result<bool, IdentifierError> {
    identifiers.iter_mut().for_each(|id| *id = normalize(id));
    if let Some(path) = file {
        identifiers.extend(read_batch(&path)?);
    }

    let tracked = TrackedValidator::new(validator, UsageStats::new());
    let mut all_valid = true;

    for identifier in &identifiers {
        let result = tracked.validate(identifier);
        all_valid &= result.is_valid();
        if json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            print_detailed_report(identifier, &result);
        }
    }

    if stats {
        let snapshot = tracked.recorder().snapshot();
        if json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            println!("\nUSAGE:");
            println!("  Validated: {}", snapshot.total);
            println!("  Valid: {}", snapshot.valid);
            println!("  Invalid: {}", snapshot.invalid);
            for (issue, count) in &snapshot.issues {
                println!("  {}: {}", issue, count);
            }
            println!("  Mean latency: {}us", snapshot.mean_latency_micros);
        }
    }

    Ok(all_valid)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let rules = match cli.rules.as_deref().map(IdentifierRules::from_path).transpose() {
        Ok(rules) => rules.unwrap_or_default(),
        Err(err) => {
            eprintln!("Error loading rules: {}", err);
            return ExitCode::from(2);
        }
    };
    let validator = IdentityValidator::with_rules(rules);

    match cli.command {
        Command::Format { identifier } => {
            println!("{}", IdentifierFormatter::format(&identifier));
            ExitCode::SUCCESS
        }
        Command::Validate {
            identifiers,
            file,
            json,
            stats,
        } => match run_validate(validator, identifiers, file, json, stats) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::from(1),
            Err(err) => {
                eprintln!("Error validating identifiers: {}", err);
                ExitCode::from(2)
            }
        },
    }
}

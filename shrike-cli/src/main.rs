//! Shrike CLI
//!
//! Scam-message triage from the command line: single-message analysis, batch
//! scoring, and keyword-table inspection.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use shrike_core::{analyze, ScamReport, ScoreComponents, MAX_MESSAGE_CHARS, SCAM_CATEGORIES};
use shrike_service::{parse_batch, run_batch};

#[derive(Parser)]
#[command(name = "shrike")]
#[command(author, version, about = "Shrike: heuristic scam-message triage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single message
    Analyze {
        /// The message text
        #[arg(short, long, conflicts_with = "file")]
        message: Option<String>,

        /// Read the message from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a JSON batch of messages
    Batch {
        /// Input file: a JSON array of strings or {message, message_id, source} objects
        #[arg(short, long)]
        input: PathBuf,

        /// Write the full outcome as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the scam categories the engine recognizes
    Categories {
        /// Emit the keyword table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match cli.command {
        Commands::Analyze { message, file, json } => run_analyze(message, file, json),
        Commands::Batch { input, output } => run_batch_file(&input, output),
        Commands::Categories { json } => list_categories(json),
    }
}

fn run_analyze(message: Option<String>, file: Option<PathBuf>, json: bool) -> Result<()> {
    let raw = match (message, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("provide a message with --message or --file"),
    };

    let text = raw.trim();
    if text.is_empty() {
        bail!("message is empty");
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        bail!("message exceeds the maximum length of {} characters", MAX_MESSAGE_CHARS);
    }

    let started = Instant::now();
    let report = analyze(text);
    let elapsed_ms = started.elapsed().as_millis();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    println!("⏱️  Completed in {} ms", elapsed_ms);
    Ok(())
}

fn print_report(report: &ScamReport) {
    let verdict = if report.is_scam() { "🚨 likely scam" } else { "✅ not flagged" };
    println!("🔍 Shrike analysis\n");
    println!(
        "   Score: {:.3} ({}) - {}",
        report.scam_score,
        report.severity,
        report.severity.description()
    );
    println!("   Verdict: {}", verdict);

    if !report.categories.is_empty() {
        println!("\n📂 Categories:");
        for matched in &report.categories {
            println!("   {} ({})", matched.category, matched.keywords.join(", "));
        }
    }

    let personal = report.indicators.personal_info_requests;
    let urgency = report.indicators.urgency_indicators;
    let active: Vec<&str> = personal
        .flags()
        .into_iter()
        .chain(urgency.flags())
        .filter(|(_, set)| *set)
        .map(|(name, _)| name)
        .collect();
    if !active.is_empty() {
        println!("\n🚩 Indicators: {}", active.join(", "));
    }

    let extracted = &report.extracted;
    if !extracted.emails.is_empty() {
        println!("📧 Emails: {}", extracted.emails.join(", "));
    }
    if !extracted.phone_numbers.is_empty() {
        println!("📞 Phones: {}", extracted.phone_numbers.join(", "));
    }
    if !extracted.urls.is_empty() {
        println!("🔗 URLs: {}", extracted.urls.join(", "));
    }
    if !extracted.crypto.is_empty() {
        println!(
            "₿  Crypto: {}",
            extracted
                .crypto
                .bitcoin
                .iter()
                .chain(&extracted.crypto.ethereum)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    if !extracted.account_numbers.is_empty() {
        println!("💳 Accounts: {}", extracted.account_numbers.join(", "));
    }

    let components = ScoreComponents::from_parts(
        &report.categories,
        &personal,
        &urgency,
        extracted,
    );
    println!("\n📊 Score components:");
    println!("   categories:       {:.4}", components.categories);
    println!("   personal info:    {:.4}", components.personal_info);
    println!("   urgency:          {:.4}", components.urgency);
    println!("   suspicious links: {:.4}", components.suspicious_links);
    println!("   contact info:     {:.4}", components.contact_info);
    println!();
}

fn run_batch_file(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let payload = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let entries = parse_batch(&payload)?;

    let started = Instant::now();
    let outcome = run_batch(&entries);
    let elapsed_ms = started.elapsed().as_millis();

    println!("🔍 Shrike batch scoring\n");
    for result in &outcome.results {
        let marker = if result.is_scam { "🚨" } else { "✅" };
        println!(
            "   {} {:.3} {:<6} {} ({})",
            marker, result.scam_score, result.severity, result.message_id, result.source
        );
    }
    println!(
        "\n📊 Processed {}/{} messages in {} ms",
        outcome.processed_messages, outcome.total_messages, elapsed_ms
    );

    if let Some(path) = output {
        fs::write(&path, serde_json::to_string_pretty(&outcome)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("📄 Outcome saved to: {}", path.display());
    }

    Ok(())
}

fn list_categories(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&SCAM_CATEGORIES)?);
        return Ok(());
    }

    println!("📂 Scam categories ({}):\n", SCAM_CATEGORIES.len());
    for category in SCAM_CATEGORIES {
        println!("   {} - {}", category.name, category.keywords.join(", "));
    }
    Ok(())
}

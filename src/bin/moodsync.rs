//! CLI binary for moodsync.

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use moodsync::arbiter::CommandArbiter;
use moodsync::engine::{self, ClassificationResult, catalog};
use moodsync::stats::{self, DISTRIBUTION_LIMIT, MONTH_DAYS};
use moodsync::{
    JournalEntry, JournalStore, MoodArbiter, MoodsyncConfig, analyze_mood, build_mood_prompt, compose_reply,
    parse_arbiter_reply,
};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tracing::warn;

/// moodsync: rule-based mood tracking for journal entries.
#[derive(Parser)]
#[command(name = "moodsync", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the journal file (defaults to the data directory).
    #[arg(long, global = true)]
    journal: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Classify an entry and print the result as JSON.
    Classify {
        /// Entry text.
        text: Option<String>,
        /// Read the entry from stdin.
        #[arg(long, conflicts_with = "text")]
        stdin: bool,
        /// Include the per-analyzer signal breakdown.
        #[arg(long)]
        explain: bool,
        /// Include a composed journal reply.
        #[arg(long)]
        reply: bool,
    },

    /// List every mood in the catalog.
    Moods,

    /// Print the prompt an external arbiter would receive.
    Prompt {
        /// Entry text.
        text: String,
    },

    /// Apply a raw arbiter reply to an entry.
    Arbitrate {
        /// Raw model output containing a JSON verdict.
        #[arg(long)]
        candidate: String,
        /// Entry text.
        text: String,
    },

    /// Classify an entry and add it to the journal.
    Log {
        /// Entry text.
        text: String,
    },

    /// Show streak and mood summaries for the journal.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = MoodsyncConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let _log_guard = moodsync::logging::init(&config.logging)?;

    let journal = cli
        .journal
        .map(JournalStore::open)
        .unwrap_or_else(JournalStore::default_location);

    match cli.command {
        Command::Classify {
            text,
            stdin,
            explain,
            reply,
        } => run_classify(&config, text, stdin, explain, reply).await,
        Command::Moods => list_moods(),
        Command::Prompt { text } => {
            print!("{}", build_mood_prompt(&text));
            Ok(())
        }
        Command::Arbitrate { candidate, text } => run_arbitrate(&config, &candidate, &text),
        Command::Log { text } => run_log(&config, &journal, &text).await,
        Command::Stats => show_stats(&journal),
    }
}

async fn classify_entry(config: &MoodsyncConfig, text: &str) -> ClassificationResult {
    let arbiter = CommandArbiter::from_command(&config.arbiter.command);
    analyze_mood(text, arbiter.as_ref().map(|a| a as &dyn MoodArbiter), config).await
}

async fn run_classify(
    config: &MoodsyncConfig,
    text: Option<String>,
    from_stdin: bool,
    explain: bool,
    reply: bool,
) -> anyhow::Result<()> {
    let text = match (text, from_stdin) {
        (Some(text), false) => text,
        (None, true) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading entry from stdin")?;
            buffer
        }
        _ => anyhow::bail!("provide the entry text or --stdin"),
    };

    let result = classify_entry(config, &text).await;
    let mut output = serde_json::to_value(&result)?;
    if explain {
        output["signals"] = serde_json::to_value(engine::analyze(&text, &config.scoring))?;
    }
    if reply {
        output["reply"] = json!(compose_reply(&text, &result));
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn list_moods() -> anyhow::Result<()> {
    for definition in catalog::all() {
        println!("{:<14} {}  {}", definition.id.as_str(), definition.emoji, definition.label);
    }
    Ok(())
}

fn run_arbitrate(config: &MoodsyncConfig, raw: &str, text: &str) -> anyhow::Result<()> {
    let candidate = parse_arbiter_reply(raw);
    if candidate.is_none() {
        warn!("candidate contains no JSON verdict, using keyword analysis");
    }
    let result = engine::classify_with_arbiter_config(text, candidate.as_ref(), &config.scoring);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn run_log(config: &MoodsyncConfig, journal: &JournalStore, text: &str) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("journal entry is empty");
    }
    let result = classify_entry(config, text).await;
    let reply = compose_reply(text, &result);
    let entry = JournalEntry::from_classification(text, &result, Utc::now()).with_reply(reply.clone());
    let count = journal
        .append(entry)
        .with_context(|| format!("writing {}", journal.path().display()))?;

    let definition = catalog::lookup(result.mood);
    println!(
        "{} {} ({:.0}% confidence)",
        definition.emoji,
        definition.label,
        result.confidence * 100.0
    );
    println!("{reply}");
    println!("{count} entries in journal");
    Ok(())
}

fn show_stats(journal: &JournalStore) -> anyhow::Result<()> {
    let entries = journal
        .load()
        .with_context(|| format!("reading {}", journal.path().display()))?;
    let now = Utc::now();
    let today = now.date_naive();

    let output = json!({
        "total_entries": entries.len(),
        "streak_days": stats::current_streak(&entries, today),
        "week": stats::weekly_summary(&entries, now),
        "entries_per_day": stats::entries_per_day(&entries, today, 7),
        "month": stats::mood_distribution(&entries, now - chrono::Duration::days(MONTH_DAYS), DISTRIBUTION_LIMIT),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

//! CLI administration tool for simple-twitter.
//!
//! Provides commands for inspecting and populating the tweet store
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Insert 1000 random tweets spread over two years
//! cargo run --bin admin -- seed --count 1000 --tags rust,go --from 2024-01-01 --to 2025-12-31
//!
//! # Delete every tweet
//! cargo run --bin admin -- reset
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use rand::Rng;
use rand::seq::IndexedRandom;
use sqlx::PgPool;

const WORDS: &[&str] = &[
    "shipping", "today", "finally", "coffee", "release", "bug", "fixed", "weekend", "deploy",
    "meeting", "lunch", "reading", "learning", "async", "benchmarks", "rain", "music", "train",
];

/// CLI tool for managing simple-twitter.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show tweet statistics
    Stats,

    /// Insert random tweets
    Seed {
        /// Number of tweets to insert
        #[arg(short, long, default_value_t = 100)]
        count: usize,

        /// Comma-separated tags to pick from
        #[arg(short, long, value_delimiter = ',', default_value = "general")]
        tags: Vec<String>,

        /// First day of the creation range (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last day of the creation range (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete all tweets and restart ids at 1
    Reset,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Seed {
            count,
            tags,
            from,
            to,
            yes,
        } => seed(&pool, count, tags, from, to, yes).await?,
        Commands::Reset => reset(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays the total tweet count and the count per tag.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tweets")
        .fetch_one(pool)
        .await?;

    let per_tag: Vec<(String, i64)> = sqlx::query_as(
        "SELECT tag, COUNT(*) FROM tweets GROUP BY tag ORDER BY COUNT(*) DESC, tag ASC",
    )
    .fetch_all(pool)
    .await?;

    println!("  Tweets: {}", total.to_string().bright_green().bold());
    println!();

    if per_tag.is_empty() {
        println!("{}", "  No tweets yet".yellow());
        println!();
        return Ok(());
    }

    println!("  {:<34} {}", "TAG".bold(), "TWEETS".bold());
    for (tag, count) in &per_tag {
        println!("  {:<34} {}", tag.cyan(), count.to_string().bright_white());
    }
    println!();

    Ok(())
}

/// Inserts `count` random tweets with creation times spread over `from..=to`.
///
/// Tweets are inserted oldest first, so ids follow creation order.
async fn seed(
    pool: &PgPool,
    count: usize,
    tags: Vec<String>,
    from: NaiveDate,
    to: NaiveDate,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Seed Tweets".bright_blue().bold());
    println!();

    if from > to {
        anyhow::bail!("--from ({from}) can't be after --to ({to})");
    }

    let tags: Vec<String> = tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if tags.is_empty() {
        anyhow::bail!("at least one non-empty tag is required");
    }
    if let Some(tag) = tags.iter().find(|t| t.len() > 32) {
        anyhow::bail!("tag '{tag}' is longer than 32 bytes");
    }

    println!("  Tweets: {}", count.to_string().cyan());
    println!("  Tags:   {}", tags.join(", ").cyan());
    println!("  Range:  {} .. {}", from.to_string().cyan(), to.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert these tweets?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let tweets = random_tweets(count, &tags, from, to)?;

    let mut tx = pool.begin().await?;
    for (message, tag, created_at) in &tweets {
        sqlx::query("INSERT INTO tweets (message, tag, created_at) VALUES ($1, $2, $3)")
            .bind(message)
            .bind(tag)
            .bind(created_at)
            .execute(&mut *tx)
            .await
            .context("Failed to insert tweet")?;
    }
    tx.commit().await?;

    println!(
        "{}",
        format!("Inserted {} tweets", tweets.len()).green().bold()
    );
    println!();

    Ok(())
}

/// Builds random tweets sorted by creation time.
fn random_tweets(
    count: usize,
    tags: &[String],
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<(String, String, DateTime<Utc>)>> {
    let start = from.and_time(NaiveTime::MIN).and_utc().timestamp();
    let end = to
        .succ_opt()
        .context("--to is out of range")?
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp();

    let mut rng = rand::rng();
    let mut tweets = Vec::with_capacity(count);

    for _ in 0..count {
        let secs = rng.random_range(start..end);
        let created_at =
            DateTime::from_timestamp(secs, 0).context("generated timestamp out of range")?;
        let tag = tags.choose(&mut rng).context("no tags to pick from")?.clone();

        tweets.push((random_message(&mut rng), tag, created_at));
    }

    tweets.sort_by_key(|(_, _, created_at)| *created_at);

    Ok(tweets)
}

fn random_message(rng: &mut impl Rng) -> String {
    let len: usize = rng.random_range(3..12);
    let mut words = Vec::with_capacity(len);

    for _ in 0..len {
        if let Some(word) = WORDS.choose(&mut *rng) {
            words.push(*word);
        }
    }

    words.join(" ")
}

/// Truncates the tweets table after confirmation.
async fn reset(pool: &PgPool) -> Result<()> {
    println!("{}", "Reset Tweets".bright_blue().bold());
    println!();

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tweets")
        .fetch_one(pool)
        .await?;

    println!("  This deletes {} tweets.", total.to_string().red().bold());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete all tweets?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    sqlx::query("TRUNCATE TABLE tweets RESTART IDENTITY")
        .execute(pool)
        .await?;

    println!("{}", "All tweets deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
            .fetch_one(pool)
            .await
            .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

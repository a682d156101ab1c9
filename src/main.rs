use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::sync::Arc;
use tracing::info;

use comment_moderator::config::{Config, FilterBackend};
use comment_moderator::db::CommentStore;
use comment_moderator::moderation::{self, ProfanityFilter};

/// Comment moderator: rewrites shouted comments in sentence case and
/// masks profanity.
///
/// Stands in for the document-store trigger: every write to a comment is
/// moderated and written back to the same record.
#[derive(Parser)]
#[command(name = "comment-moderator", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the comment store
    Init,

    /// Moderate a message and print the result
    Moderate {
        /// The message (read from stdin when omitted)
        text: Option<String>,
    },

    /// Show which checks a message trips, and what it becomes
    Check {
        /// The message to check
        text: String,
    },

    /// Run the write trigger on a JSON comment document read from stdin
    Apply,

    /// Write a comment to the store; it is moderated on write
    Post {
        /// Comment id (creates or updates that record)
        #[arg(long)]
        id: String,

        /// Comment content (omit to store a record without text)
        text: Option<String>,

        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-run moderation over every stored comment
    Sweep {
        /// Number of comments to moderate in parallel (default: MODERATOR_SWEEP_CONCURRENCY or 8)
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// List recently written comments
    List {
        /// Max comments to show (default: 20)
        #[arg(long, default_value = "20")]
        limit: u32,

        /// Print the records as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show store status (comment counts, last sweep)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("comment_moderator=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing comment store...");
            let config = Config::load()?;
            let store = comment_moderator::db::initialize_sqlite(&config.db_path)?;
            let table_count = store.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nNext step: cargo run -- post --id first \"Hello there\"");
        }

        Commands::Moderate { text } => {
            let message = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            // Absent content is never moderated
            if message.is_empty() {
                return Ok(());
            }
            let config = Config::load()?;
            let filter = create_filter(config.filter_backend);
            println!("{}", moderation::moderate_with(filter.as_ref(), &message).text);
        }

        Commands::Check { text } => {
            let config = Config::load()?;
            let filter = create_filter(config.filter_backend);
            let outcome = moderation::moderate_with(filter.as_ref(), &text);
            comment_moderator::output::terminal::display_check(&text, &outcome);
        }

        Commands::Apply => {
            let config = Config::load()?;
            let filter = create_filter(config.filter_backend);
            let raw = read_stdin()?;
            let value: serde_json::Value =
                serde_json::from_str(&raw).context("stdin is not valid JSON")?;
            let serde_json::Value::Object(document) = value else {
                anyhow::bail!("Expected a JSON object with a commentContent field");
            };

            let output = match comment_moderator::trigger::on_write(&document, filter.as_ref()) {
                Some(updated) => updated,
                None => {
                    info!("No commentContent on record, nothing to update");
                    document
                }
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Post { id, text, json } => {
            let config = Config::load()?;
            let store = comment_moderator::db::initialize_sqlite(&config.db_path)?;
            let filter = create_filter(config.filter_backend);

            let comment = comment_moderator::trigger::handle_comment_write(
                store.as_ref(),
                filter.as_ref(),
                &id,
                text.as_deref(),
            )
            .await?;

            if json {
                println!("{}", comment_moderator::output::json::render_comment(&comment)?);
            } else {
                comment_moderator::output::terminal::display_comment_detail(&comment);
            }
        }

        Commands::Sweep { concurrency } => {
            let config = Config::load()?;
            let store = comment_moderator::db::open_sqlite(&config.db_path)?;
            let concurrency = concurrency.unwrap_or(config.sweep_concurrency);

            println!("Sweeping stored comments ({concurrency} concurrent)...");

            let filter = create_filter(config.filter_backend);
            let summary =
                comment_moderator::pipeline::sweep::run(store.as_ref(), filter, concurrency)
                    .await?;

            comment_moderator::output::terminal::display_sweep_summary(&summary);
        }

        Commands::List { limit, json } => {
            let config = Config::load()?;
            let store = comment_moderator::db::open_sqlite(&config.db_path)?;
            let comments = store.get_recent_comments(limit).await?;
            if json {
                println!("{}", comment_moderator::output::json::render_comments(&comments)?);
            } else {
                comment_moderator::output::terminal::display_comments(&comments);
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            if !comment_moderator::status::is_initialized(&config.db_path) {
                println!("Database: not initialized");
                println!(
                    "\n{}",
                    "Run `comment-moderator init` to set up the comment store.".dimmed()
                );
                return Ok(());
            }
            let store: Arc<dyn CommentStore> =
                comment_moderator::db::open_sqlite(&config.db_path)?;
            comment_moderator::status::show(&store, &config.db_path).await?;
        }
    }

    Ok(())
}

/// Build the configured profanity filter.
///
/// The word-list filter is a process-wide singleton, so this only bumps a
/// reference count for the default backend.
fn create_filter(backend: FilterBackend) -> Arc<dyn ProfanityFilter> {
    match backend {
        FilterBackend::WordList => moderation::shared_default_filter(),
        FilterBackend::Rustrict => Arc::new(moderation::RustrictFilter::default()),
    }
}

/// Read all of stdin, dropping one trailing newline.
fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

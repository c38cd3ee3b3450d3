use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use studium::flashcards::{group_by_topic, parse_flashcards_csv};
use studium::progress::{overall_progress, recommend_next_lesson, topic_summaries};
use studium::{ContentStore, JsonFileStore, StudyService};

#[derive(Parser)]
#[command(name = "studium-cli", about = "Studium study tracker CLI", version)]
struct Cli {
    /// Data directory (default: the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import flashcards from a CSV file
    Import {
        file: PathBuf,
        /// Parse and report without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List topics in display order with lesson counts and progress
    Topics,

    /// Suggest the next lesson to study
    Recommend,

    /// List flashcards, grouped by topic
    Cards {
        /// Only show one topic
        topic: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => JsonFileStore::default_data_dir()
            .context("could not determine a data directory; pass --data-dir")?,
    };
    let store = JsonFileStore::new(data_dir);
    store.init()?;
    let service = StudyService::new(store);

    match cli.command {
        Command::Import { file, dry_run } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            if dry_run {
                let outcome = parse_flashcards_csv(&raw)?;
                println!(
                    "{} flashcards parsed, {} rejected (dry run, nothing written)",
                    outcome.records.len(),
                    outcome.rejected
                );
            } else {
                let summary = service.import_flashcards_csv(&raw).await?;
                println!("{}", summary);
            }
        }

        Command::Topics => {
            let lessons = service.store().lessons().await?;
            let mastery = service.store().mastery().await?;
            let topics = service.ordered_topics().await?;

            if topics.is_empty() {
                println!("No lessons yet.");
                return Ok(());
            }
            for summary in topic_summaries(&topics, &lessons, &mastery.mastered) {
                println!(
                    "{:<30} {:>3} lessons  {:>3}% done",
                    summary.topic, summary.lesson_count, summary.progress
                );
            }
            println!(
                "\nOverall progress: {}%",
                overall_progress(&lessons, &mastery.mastered)
            );
        }

        Command::Recommend => {
            let lessons = service.store().lessons().await?;
            let mastery = service.store().mastery().await?;
            let topics = service.ordered_topics().await?;

            match recommend_next_lesson(&topics, &lessons, &mastery.mastered) {
                Some(rec) => {
                    let title = lessons
                        .iter()
                        .find(|l| l.id == rec.lesson_id)
                        .map(|l| l.title.as_str())
                        .unwrap_or("(unknown)");
                    println!("Next up: {} — {}", rec.topic, title);
                }
                None => println!("No lessons yet."),
            }
        }

        Command::Cards { topic } => {
            let cards = service.store().flashcards().await?;
            let grouped = group_by_topic(&cards);
            for (name, cards) in grouped {
                if topic.as_deref().is_some_and(|t| t != name) {
                    continue;
                }
                println!("{} ({} cards)", name, cards.len());
                for card in cards {
                    println!("  {} -> {}", card.front, card.back);
                }
            }
        }
    }

    Ok(())
}

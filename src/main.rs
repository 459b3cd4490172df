//! Vestnik main entry point
//!
//! Command-line interface for the Kray Dorogobuzhsky article harvester.

use anyhow::Context;
use clap::Parser;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vestnik::config::{load_config_with_hash, Config};
use vestnik::{
    prepare_environment, ArticleParser, ArticleRecord, ArticleStore, Crawler, FsStore, ParseError,
    RequestClient,
};

/// How many article pages may be in flight at once. Discovery stays
/// sequential; only the per-article stage fans out, after the URL list is
/// final.
const ARTICLE_WORKERS: usize = 4;

/// Vestnik: batch article harvester
///
/// Vestnik validates a crawl configuration, discovers article URLs from
/// the configured seed listing pages, then fetches each article and writes
/// its text and metadata to the output directory.
#[derive(Parser, Debug)]
#[command(name = "vestnik")]
#[command(version = "1.0.0")]
#[command(about = "Batch article harvester for the Kray Dorogobuzhsky news site", long_about = None)]
struct Cli {
    /// Path to JSON configuration file
    #[arg(value_name = "CONFIG", default_value = "scraper_config.json")]
    config: PathBuf,

    /// Directory for harvested article files
    #[arg(short, long, value_name = "DIR", default_value = "tmp/articles")]
    output: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration; nothing is fetched before this
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if config.headless_mode() {
        tracing::warn!("headless_mode requested but not supported; fetching plain HTML");
    }

    if cli.dry_run {
        handle_dry_run(&config, &cli.output);
        return Ok(());
    }

    harvest(&config, &cli.output).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// An explicit RUST_LOG value wins over the verbosity flags.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        let default = match verbose {
            0 => "vestnik=info,warn",
            1 => "vestnik=debug,info",
            2 => "vestnik=trace,debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the harvest plan
fn handle_dry_run(config: &Config, output: &Path) {
    println!("=== Vestnik Dry Run ===\n");

    println!("Seed pages ({}):", config.seed_urls().len());
    for seed in config.seed_urls() {
        println!("  - {seed}");
    }

    println!("\nRequest policy:");
    println!("  Timeout: {}s", config.timeout());
    println!("  Verify certificates: {}", config.verify_certificate());
    println!("  Encoding: {}", config.encoding());
    println!("  Extra headers: {}", config.headers().len());

    println!("\nOutput directory: {}", output.display());

    println!("\n✓ Configuration is valid");
    println!("✓ Would harvest up to {} articles", config.num_articles());
}

/// Runs the full harvest: discovery, article parsing, persistence
async fn harvest(config: &Config, output: &Path) -> anyhow::Result<()> {
    prepare_environment(output)
        .with_context(|| format!("failed to prepare output directory {}", output.display()))?;

    let client = RequestClient::new(config).context("failed to build HTTP client")?;

    let mut crawler = Crawler::new(config).context("site base URL is invalid")?;
    let urls = crawler.discover(&client).await;

    if urls.is_empty() {
        tracing::warn!("no article URLs discovered; nothing to harvest");
        return Ok(());
    }
    tracing::info!("Discovered {} article URLs", urls.len());

    let store = FsStore::new(output);

    // Identifiers follow discovery order starting at 1; fetches overlap
    // but each result stays keyed by its identifier.
    let mut results = stream::iter(urls.into_iter().enumerate())
        .map(|(index, url)| {
            let client = &client;
            async move {
                let article_id = index + 1;
                let parser = ArticleParser::new(url, article_id);
                (article_id, parser.parse(client).await)
            }
        })
        .buffer_unordered(ARTICLE_WORKERS)
        .collect::<Vec<_>>()
        .await;

    // Persist in identifier order so output is deterministic
    results.sort_by_key(|(article_id, _)| *article_id);

    let (saved, failed) = persist_results(results, &store);

    tracing::info!(
        "Harvest finished: {} saved, {} failed, output in {}",
        saved,
        failed,
        output.display()
    );

    Ok(())
}

/// Persists parse results and tallies the outcome
///
/// Errors here are scoped to one article: a failed parse or a failed save
/// is logged and counted under `failed`, and persistence continues with
/// the next record. Returns `(saved, failed)`.
fn persist_results(
    results: Vec<(usize, Result<ArticleRecord, ParseError>)>,
    store: &impl ArticleStore,
) -> (usize, usize) {
    let mut saved = 0usize;
    let mut failed = 0usize;
    for (article_id, result) in results {
        match result {
            Ok(record) => match store.save(&record) {
                Ok(()) => saved += 1,
                Err(e) => {
                    tracing::warn!(article_id, error = %e, "article could not be persisted");
                    failed += 1;
                }
            },
            Err(e) => {
                tracing::warn!(article_id, error = %e, "article skipped");
                failed += 1;
            }
        }
    }
    (saved, failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use vestnik::storage::StorageResult;
    use vestnik::StorageError;

    /// In-memory store that can be told to reject one identifier
    #[derive(Default)]
    struct RecordingStore {
        saved: RefCell<Vec<usize>>,
        fail_id: Option<usize>,
    }

    impl ArticleStore for RecordingStore {
        fn save(&self, record: &ArticleRecord) -> StorageResult<()> {
            if self.fail_id == Some(record.article_id) {
                return Err(StorageError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "output directory is gone",
                )));
            }
            self.saved.borrow_mut().push(record.article_id);
            Ok(())
        }
    }

    fn record(article_id: usize) -> ArticleRecord {
        ArticleRecord {
            article_id,
            url: format!("https://example.com/novosti/{article_id}.html"),
            text: "Текст.".to_string(),
            title: None,
            author: None,
            date: None,
        }
    }

    #[test]
    fn test_failed_save_is_counted_not_fatal() {
        let store = RecordingStore {
            fail_id: Some(1),
            ..Default::default()
        };

        let (saved, failed) = persist_results(vec![(1, Ok(record(1)))], &store);

        assert_eq!((saved, failed), (0, 1));
        assert!(store.saved.borrow().is_empty());
    }

    #[test]
    fn test_persistence_continues_past_a_failed_article() {
        let store = RecordingStore {
            fail_id: Some(1),
            ..Default::default()
        };

        let results = vec![
            (1, Ok(record(1))),
            (2, Ok(record(2))),
            (
                3,
                Err(ParseError::Markup {
                    url: "https://example.com/novosti/3.html".to_string(),
                }),
            ),
        ];

        let (saved, failed) = persist_results(results, &store);

        assert_eq!((saved, failed), (1, 2));
        assert_eq!(*store.saved.borrow(), vec![2]);
    }

    #[test]
    fn test_all_good_results_are_saved_in_order() {
        let store = RecordingStore::default();

        let results = vec![(1, Ok(record(1))), (2, Ok(record(2))), (3, Ok(record(3)))];
        let (saved, failed) = persist_results(results, &store);

        assert_eq!((saved, failed), (3, 0));
        assert_eq!(*store.saved.borrow(), vec![1, 2, 3]);
    }
}

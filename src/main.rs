use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use link_sieve::config::ExtractorConfig;
use link_sieve::extractor::ExtractorPool;
use link_sieve::logger::FacadeLogger;
use link_sieve::page::Page;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration, then apply command-line overrides
    let mut config = match &args.config_file {
        Some(path) => match ExtractorConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path, e);
                return;
            }
        },
        None => ExtractorConfig::default(),
    };
    if let Some(workers) = args.workers {
        config.workers = workers;
    }

    ::log::info!(
        "Starting {} extraction workers over {}",
        config.workers,
        args.pages
    );

    // The bounded queue pair connecting this stage to its neighbours
    let (page_tx, page_rx) = mpsc::channel::<Page>(config.queue_capacity);
    let (url_tx, mut url_rx) = mpsc::channel::<String>(config.queue_capacity);

    let pool = ExtractorPool::spawn(
        config.workers,
        page_rx,
        url_tx,
        Arc::new(FacadeLogger),
        config.clone(),
    );

    // Stand-in for the fetch stage: feed pages from the input file
    let feeder = tokio::spawn(feed_pages(args.pages.clone(), page_tx));

    // Stand-in for the scheduling stage: print discovered URLs
    let printer = tokio::spawn(async move {
        let mut count = 0usize;
        while let Some(url) = url_rx.recv().await {
            println!("{}", url);
            count += 1;
        }
        count
    });

    let fed = feeder.await.unwrap_or(0);
    pool.join().await;
    let discovered = printer.await.unwrap_or(0);

    ::log::info!("Processed {} pages, discovered {} links", fed, discovered);
}

/// Read pages from a JSON-lines file and push them into the page queue.
///
/// Awaiting each send applies the queue's backpressure to the feeder.
/// Dropping the sender on return tells the workers that input is done.
async fn feed_pages(path: String, page_tx: mpsc::Sender<Page>) -> usize {
    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) => {
            ::log::error!("Failed to open pages file {}: {}", path, e);
            return 0;
        }
    };

    let mut lines = BufReader::new(file).lines();
    let mut count = 0usize;
    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }

        let page: Page = match serde_json::from_str(&line) {
            Ok(page) => page,
            Err(e) => {
                ::log::warn!("Skipping malformed page record: {}", e);
                continue;
            }
        };

        if page_tx.send(page).await.is_err() {
            ::log::error!("Page queue closed before the file was drained");
            break;
        }
        count += 1;
    }

    count
}

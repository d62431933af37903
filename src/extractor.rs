use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::SendTimeoutError;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::config::ExtractorConfig;
use crate::logger::Logger;
use crate::page::Page;
use crate::parsers::{html, ExtractError};

/// Shared handle to the page queue, letting a pool of workers drain it
pub type PageQueue = Arc<Mutex<mpsc::Receiver<Page>>>;

/// A worker that drains fetched pages from the input queue, extracts
/// outbound links and forwards them to the URL queue.
///
/// All shared state lives in the two queues and the stop flag, so any
/// number of identical workers can safely share one queue pair. Waits on
/// either queue are bounded, which keeps the worker responsive to `stop`
/// within one pending wait's timeout.
#[derive(Clone)]
pub struct LinkExtractor {
    worker_id: usize,
    pages: PageQueue,
    urls: mpsc::Sender<String>,
    stop: Arc<AtomicBool>,
    logger: Arc<dyn Logger>,
    config: ExtractorConfig,
}

impl LinkExtractor {
    /// Create a worker over the given queues with default timeouts
    pub fn new(
        worker_id: usize,
        pages: PageQueue,
        urls: mpsc::Sender<String>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            worker_id,
            pages,
            urls,
            stop: Arc::new(AtomicBool::new(false)),
            logger,
            config: ExtractorConfig::default(),
        }
    }

    /// Override the worker's timeout configuration
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Extract the absolute outbound links from a page, in document order.
    ///
    /// Duplicates are kept; deduplication belongs to a downstream stage.
    /// Relative and scheme-relative hrefs are dropped rather than resolved
    /// against the page URL, so only values carrying an explicit http(s)
    /// scheme survive. Failure never escapes the worker: the run loop logs
    /// an `Err` and substitutes an empty list.
    pub fn extract_links(page: &Page) -> Result<Vec<String>, ExtractError> {
        let links = html::extract_hrefs(page.content())?
            .into_iter()
            .filter(|href| is_absolute(href))
            .collect();
        Ok(links)
    }

    /// Start the run loop as an independent task on the tokio runtime.
    ///
    /// The worker begins consuming the page queue immediately. Starting the
    /// same worker twice is a caller error.
    pub fn start(&self) -> JoinHandle<()> {
        let worker = self.clone();
        tokio::spawn(async move { worker.run().await })
    }

    /// Request a cooperative stop.
    ///
    /// The flag only ever transitions unset to set. The worker notices it
    /// at the next loop top, so shutdown latency is bounded by the
    /// in-flight wait's timeout rather than being instantaneous.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// The worker's loop: wait for a page, extract, publish, repeat.
    async fn run(self) {
        ::log::debug!("Worker {} starting run loop", self.worker_id);

        loop {
            if self.stop.load(Ordering::SeqCst) {
                self.logger
                    .info(&format!("Worker {} stopped", self.worker_id));
                break;
            }

            // The lock is taken inside the timeout so a worker stuck behind
            // its siblings still returns to the stop check in bounded time.
            let waited = timeout(self.config.input_timeout(), async {
                let mut pages = self.pages.lock().await;
                pages.recv().await
            })
            .await;

            let page = match waited {
                Ok(Some(page)) => page,
                Ok(None) => {
                    self.logger.info(&format!(
                        "Worker {}: page queue closed, shutting down",
                        self.worker_id
                    ));
                    break;
                }
                Err(_) => {
                    self.logger
                        .warn(&format!("Worker {}: page queue empty", self.worker_id));
                    continue;
                }
            };

            let links = match Self::extract_links(&page) {
                Ok(links) => links,
                Err(e) => {
                    self.logger.warn(&format!(
                        "Worker {}: unable to parse {}: {}",
                        self.worker_id, page.url, e
                    ));
                    Vec::new()
                }
            };

            for link in links {
                match self
                    .urls
                    .send_timeout(link, self.config.output_timeout())
                    .await
                {
                    Ok(()) => {}
                    Err(SendTimeoutError::Timeout(link)) => {
                        // Dropped, not retried; the link is re-derivable by
                        // re-fetching the page.
                        self.logger.warn(&format!(
                            "Worker {}: url queue full, dropping {}",
                            self.worker_id, link
                        ));
                    }
                    Err(SendTimeoutError::Closed(_)) => {
                        self.logger.error(&format!(
                            "Worker {}: url queue closed, shutting down",
                            self.worker_id
                        ));
                        return;
                    }
                }
            }
        }
    }
}

/// An href counts as absolute only with an explicit http(s) scheme
fn is_absolute(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// A fixed pool of identical workers sharing one queue pair
pub struct ExtractorPool {
    workers: Vec<LinkExtractor>,
    handles: Vec<JoinHandle<()>>,
}

impl ExtractorPool {
    /// Spawn `count` workers over the given queues and start them all
    pub fn spawn(
        count: usize,
        pages: mpsc::Receiver<Page>,
        urls: mpsc::Sender<String>,
        logger: Arc<dyn Logger>,
        config: ExtractorConfig,
    ) -> Self {
        let pages = Arc::new(Mutex::new(pages));
        let mut workers = Vec::with_capacity(count);
        let mut handles = Vec::with_capacity(count);

        for worker_id in 0..count {
            let worker = LinkExtractor::new(
                worker_id,
                Arc::clone(&pages),
                urls.clone(),
                Arc::clone(&logger),
            )
            .with_config(config.clone());
            handles.push(worker.start());
            workers.push(worker);
        }

        Self { workers, handles }
    }

    /// Signal every worker to stop
    pub fn stop(&self) {
        for worker in &self.workers {
            worker.stop();
        }
    }

    /// Wait for every worker to exit.
    ///
    /// Releases the pool's URL sender clones first, so once the last run
    /// loop returns the downstream consumer observes the channel closing.
    pub async fn join(self) {
        drop(self.workers);
        for handle in self.handles {
            let _ = handle.await;
        }
    }
}

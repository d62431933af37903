use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for the link extraction stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// How long a worker waits for a page before logging starvation, in milliseconds
    #[serde(default = "default_input_timeout_ms")]
    pub input_timeout_ms: u64,

    /// How long a worker waits to publish one URL before dropping it, in milliseconds
    #[serde(default = "default_output_timeout_ms")]
    pub output_timeout_ms: u64,

    /// Number of identical workers sharing the queue pair
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Capacity of the page and URL queues built by the binary
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            input_timeout_ms: default_input_timeout_ms(),
            output_timeout_ms: default_output_timeout_ms(),
            workers: default_workers(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Input dequeue timeout as a Duration
    pub fn input_timeout(&self) -> Duration {
        Duration::from_millis(self.input_timeout_ms)
    }

    /// Per-URL enqueue timeout as a Duration
    pub fn output_timeout(&self) -> Duration {
        Duration::from_millis(self.output_timeout_ms)
    }
}

/// Default wait for a page from the input queue
fn default_input_timeout_ms() -> u64 {
    5000
}

/// Default wait to publish one URL to the output queue
fn default_output_timeout_ms() -> u64 {
    2000
}

/// Default worker pool size
fn default_workers() -> usize {
    4
}

/// Default queue capacity
fn default_queue_capacity() -> usize {
    1024
}

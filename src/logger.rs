use std::sync::Mutex;

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Sink for worker diagnostics.
///
/// Injected into each worker rather than reached through a global, so the
/// embedding process decides where records go and tests can substitute a
/// capturing sink. Implementations must not panic back into the caller;
/// a worker never lets a logging failure affect its control flow.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards records to the `log` facade.
///
/// Timestamping and formatting are left to whichever backend the process
/// installed (the bundled binary uses `env_logger`).
#[derive(Debug, Default)]
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn info(&self, message: &str) {
        ::log::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        ::log::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        ::log::error!("{}", message);
    }
}

/// Buffers records in memory, for inspection after the fact
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records captured so far
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Number of captured records at the given severity
    pub fn count(&self, level: Level) -> usize {
        self.records()
            .iter()
            .filter(|(recorded, _)| *recorded == level)
            .count()
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((level, message.to_string()));
        }
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures_records() {
        let logger = MemoryLogger::new();
        logger.info("starting");
        logger.warn("queue empty");
        logger.warn("queue full");
        logger.error("queue closed");

        let records = logger.records();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0], (Level::Info, "starting".to_string()));
        assert_eq!(logger.count(Level::Warn), 2);
        assert_eq!(logger.count(Level::Error), 1);
    }
}

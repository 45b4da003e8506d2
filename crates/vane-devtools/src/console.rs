//! Console sink
//!
//! Shared logging sink for interactive debugging. Messages are kept in a
//! bounded buffer so a session can inspect them after the fact, and every
//! emission is mirrored to `tracing` at the matching level.

use std::collections::VecDeque;

/// Console log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,
    Info,
    Warn,
    Error,
}

/// Console message
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Console
#[derive(Debug)]
pub struct Console {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console retaining up to 1000 messages
    pub fn new() -> Self {
        Self::with_max_entries(1000)
    }

    /// Create a console with an explicit retention cap
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    fn emit(&mut self, level: LogLevel, message: String) {
        match level {
            LogLevel::Error => tracing::error!("[console] {}", message),
            LogLevel::Warn => tracing::warn!("[console] {}", message),
            LogLevel::Info => tracing::info!("[console] {}", message),
            LogLevel::Log => tracing::debug!("[console] {}", message),
        }

        self.entries.push_back(LogEntry { level, message });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    /// Plain log message
    pub fn log(&mut self, message: &str) {
        self.emit(LogLevel::Log, message.to_string());
    }

    /// Informational message
    pub fn info(&mut self, message: &str) {
        self.emit(LogLevel::Info, message.to_string());
    }

    /// Warning message
    pub fn warn(&mut self, message: &str) {
        self.emit(LogLevel::Warn, message.to_string());
    }

    /// Error message
    pub fn error(&mut self, message: &str) {
        self.emit(LogLevel::Error, message.to_string());
    }

    /// Drop all retained messages
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Retained messages, oldest first
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    /// Number of retained messages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no messages are retained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Log every item of an ordered collection, one warning line per item,
/// as `<index>: <item>` with zero-based positions.
///
/// An empty collection emits nothing.
pub fn log_contents<I>(console: &mut Console, items: I)
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    for (index, item) in items.into_iter().enumerate() {
        console.warn(&format!("{}: {}", index, item));
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured JSON logging of board events, keyed by play session

use crate::BoardEvent;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Identifies one play session across its log lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SessionId {
    /// Unique session ID
    pub session_id: String,
    /// Board number within the session, bumped on every new board
    pub board: u32,
}

impl SessionId {
    pub fn new() -> Self {
        let session_id = format!(
            "{}-{}",
            Uuid::new_v4().simple(),
            SESSION_COUNTER.fetch_add(1, Ordering::SeqCst)
        );
        Self {
            session_id,
            board: 0,
        }
    }

    /// Same session, next board
    pub fn next_board(&self) -> Self {
        Self {
            session_id: self.session_id.clone(),
            board: self.board + 1,
        }
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Structured log entry
#[derive(Debug, Serialize)]
pub struct LogEntry {
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub level: String,
    pub component: String,
    pub message: String,
    pub session: SessionId,
    /// Additional context fields
    #[serde(flatten)]
    pub fields: serde_json::Value,
}

impl LogEntry {
    pub fn new(level: &str, component: &str, message: &str, session: SessionId) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level: level.to_string(),
            component: component.to_string(),
            message: message.to_string(),
            session,
            fields: serde_json::json!({}),
        }
    }

    pub fn with_fields(mut self, fields: serde_json::Value) -> Self {
        self.fields = fields;
        self
    }
}

/// Sink for structured log entries
pub trait StructuredLogger: Send + Sync {
    fn log(&self, entry: LogEntry);
}

/// Writes one JSON object per line
pub struct JsonLogger {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonLogger {
    /// Log to stdout
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl StructuredLogger for JsonLogger {
    fn log(&self, entry: LogEntry) {
        let Ok(json) = serde_json::to_string(&entry) else {
            return;
        };
        match self.out.lock() {
            Ok(mut out) => {
                if let Err(e) = writeln!(out, "{}", json) {
                    tracing::warn!("Failed to write log entry: {}", e);
                }
            }
            Err(_) => tracing::warn!("Log sink lock poisoned, dropping entry"),
        }
    }
}

/// Logger bound to a session and component
#[derive(Clone)]
pub struct ContextLogger {
    inner: Arc<dyn StructuredLogger>,
    session: SessionId,
    component: String,
}

impl ContextLogger {
    pub fn new(inner: Arc<dyn StructuredLogger>, session: SessionId, component: &str) -> Self {
        Self {
            inner,
            session,
            component: component.to_string(),
        }
    }

    /// Same sink and component, next board of the session
    pub fn next_board(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            session: self.session.next_board(),
            component: self.component.clone(),
        }
    }

    pub fn info(&self, message: &str) {
        self.log("INFO", message, None);
    }

    /// Log a board event with its fields flattened into the entry
    pub fn event(&self, event: &BoardEvent) {
        let message = match event {
            BoardEvent::CellSubmitted { .. } => "cell submitted",
            BoardEvent::TrayReset { .. } => "tray reset",
        };
        let fields = serde_json::to_value(event).unwrap_or_else(|_| serde_json::json!({}));
        self.log("INFO", message, Some(fields));
    }

    fn log(&self, level: &str, message: &str, fields: Option<serde_json::Value>) {
        let mut entry = LogEntry::new(level, &self.component, message, self.session.clone());
        if let Some(fields) = fields {
            entry = entry.with_fields(fields);
        }
        self.inner.log(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellId;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let logger = JsonLogger::new(Box::new(BrokenPipe));
        logger.log(LogEntry::new("INFO", "board", "dropped", SessionId::new()));
        logger.log(LogEntry::new("INFO", "board", "dropped again", SessionId::new()));
    }

    #[test]
    fn test_session_ids() {
        let a = SessionId::new();
        let b = SessionId::new();
        assert_ne!(a.session_id, b.session_id);

        let next = a.next_board();
        assert_eq!(next.session_id, a.session_id);
        assert_eq!(next.board, 1);
    }

    #[test]
    fn test_log_entry_serialization() {
        let entry = LogEntry::new("INFO", "board", "Test message", SessionId::new())
            .with_fields(serde_json::json!({"key": "value"}));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"level\":\"INFO\""));
        assert!(json.contains("\"component\":\"board\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(json.contains("\"key\":\"value\""));
    }

    #[test]
    fn test_event_lines() {
        let buf = SharedBuf::default();
        let logger = ContextLogger::new(
            Arc::new(JsonLogger::new(Box::new(buf.clone()))),
            SessionId::new(),
            "board",
        );

        logger.event(&BoardEvent::CellSubmitted {
            cell: CellId(3),
            letter: 'c',
            word: "c".to_string(),
            valid: false,
        });
        logger.event(&BoardEvent::TrayReset {
            returned: vec![CellId(3)],
        });

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "cell_submitted");
        assert_eq!(lines[0]["cell"], 3);
        assert_eq!(lines[0]["letter"], "c");
        assert_eq!(lines[0]["valid"], false);
        assert_eq!(lines[1]["event"], "tray_reset");
        assert_eq!(lines[1]["returned"], serde_json::json!([3]));
        assert_eq!(lines[1]["message"], "tray reset");
    }
}

//! Performance logging for gateway calls.
//!
//! Appends one JSON line per recorded call to a daily file
//! `performance_<YYYY-MM-DD>.log` in the configured directory. Logging is
//! best-effort: failures are logged and swallowed, never surfaced to the
//! conversation.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Outcome of one recorded call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Success,
    Failure,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Success => "success",
            CallStatus::Failure => "failure",
        }
    }
}

/// Writer for the daily performance log
#[derive(Debug, Clone)]
pub struct PerformanceLogger {
    dir: PathBuf,
}

impl PerformanceLogger {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the log file entries are currently appended to
    pub fn current_log_path(&self) -> PathBuf {
        self.log_path_at(Utc::now())
    }

    fn log_path_at(&self, now: DateTime<Utc>) -> PathBuf {
        self.dir.join(format!("performance_{}.log", now.format("%Y-%m-%d")))
    }

    /// Record one call. `details` must be a JSON object; its fields are
    /// merged into the log entry.
    pub fn record(&self, function: &str, duration: Duration, status: CallStatus, details: Value) {
        if let Err(err) = self.record_at(function, duration, status, details, Utc::now()) {
            warn!(error = %err, "Error writing performance log entry");
        }
    }

    fn record_at(
        &self,
        function: &str,
        duration: Duration,
        status: CallStatus,
        details: Value,
        now: DateTime<Utc>,
    ) -> std::io::Result<()> {
        let mut entry = json!({
            "timestamp": now.to_rfc3339(),
            "function": function,
            "duration_seconds": duration.as_secs_f64(),
            "status": status.as_str(),
        });

        if let (Some(fields), Some(extra)) = (entry.as_object_mut(), details.as_object()) {
            for (key, value) in extra {
                fields.insert(key.clone(), value.clone());
            }
        }

        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path_at(now))?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_writes_one_json_line() {
        let dir = tempfile::tempdir().unwrap();
        let logger = PerformanceLogger::new(dir.path());

        logger.record(
            "generate_reply",
            Duration::from_millis(1500),
            CallStatus::Success,
            json!({"history_length": 4}),
        );

        let contents = fs::read_to_string(logger.current_log_path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);

        let entry: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(entry["function"], "generate_reply");
        assert_eq!(entry["status"], "success");
        assert_eq!(entry["history_length"], 4);
        assert!((entry["duration_seconds"].as_f64().unwrap() - 1.5).abs() < 1e-9);
        assert!(entry["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_records_append_to_the_same_daily_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = PerformanceLogger::new(dir.path());

        logger.record("generate_reply", Duration::from_secs(1), CallStatus::Success, json!({}));
        logger.record(
            "generate_reply",
            Duration::from_secs(2),
            CallStatus::Failure,
            json!({"error": "quota"}),
        );

        let contents = fs::read_to_string(logger.current_log_path()).unwrap();
        assert_eq!(contents.lines().count(), 2);

        let second: Value = serde_json::from_str(contents.lines().nth(1).unwrap()).unwrap();
        assert_eq!(second["status"], "failure");
        assert_eq!(second["error"], "quota");
    }

    #[test]
    fn test_log_file_is_named_for_the_day() {
        let dir = tempfile::tempdir().unwrap();
        let logger = PerformanceLogger::new(dir.path());

        let name = logger.current_log_path();
        let name = name.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("performance_"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_record_into_unwritable_dir_is_swallowed() {
        // Points at a path that cannot be created (parent is a file).
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let logger = PerformanceLogger::new(blocker.join("logs"));
        // Must not panic or return an error.
        logger.record("generate_reply", Duration::from_secs(1), CallStatus::Success, json!({}));
    }
}

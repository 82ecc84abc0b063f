//! Structured JSON log sink
//!
//! - Structured logs (JSON), one log line = one event
//! - Deterministic key ordering
//! - Every line carries an RFC 3339 timestamp
//! - Fire-and-forget: write failures are swallowed and never fail a request

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where log lines go.
#[derive(Debug, Clone)]
enum Target {
    Stdout,
    /// Append-only file, opened per write so a vanished file never wedges
    /// the sink.
    File(PathBuf),
}

/// A structured logger that appends JSON lines to its target.
///
/// Cloneable and cheap to share; the server holds one per process.
#[derive(Debug, Clone)]
pub struct LogSink {
    target: Target,
}

impl LogSink {
    /// Sink writing to stdout.
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// Sink appending to the given file.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: Target::File(path.into()),
        }
    }

    /// Log an event with the given severity and fields.
    ///
    /// Fields are output in deterministic order (alphabetical by key).
    /// Failures to write are ignored.
    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = render_line(severity, event, fields);

        match &self.target {
            Target::Stdout => {
                let mut out = io::stdout();
                let _ = out.write_all(line.as_bytes());
                let _ = out.flush();
            }
            Target::File(path) => {
                if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                    let _ = file.write_all(line.as_bytes());
                }
            }
        }
    }

    /// Log at INFO level
    pub fn info(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

/// Build one JSON line: event first, then severity and timestamp, then
/// fields sorted alphabetically for deterministic output.
fn render_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(256);

    output.push('{');

    output.push_str("\"event\":\"");
    escape_json_string(&mut output, event);
    output.push('"');

    output.push_str(",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    output.push_str(",\"ts\":\"");
    output.push_str(&Utc::now().to_rfc3339());
    output.push('"');

    let mut sorted_fields: Vec<_> = fields.iter().collect();
    sorted_fields.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted_fields {
        output.push_str(",\"");
        escape_json_string(&mut output, key);
        output.push_str("\":\"");
        escape_json_string(&mut output, value);
        output.push('"');
    }

    output.push('}');
    output.push('\n');
    output
}

/// Escape special characters for JSON strings
fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Warn.as_str(), "WARN");
        assert_eq!(Severity::Error.as_str(), "ERROR");
        assert!(Severity::Info < Severity::Error);
    }

    #[test]
    fn test_line_is_valid_json_with_timestamp() {
        let line = render_line(Severity::Info, "vehicles.list", &[("count", "10")]);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "vehicles.list");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["count"], "10");
        assert!(parsed["ts"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_fields_sorted_deterministically() {
        let a = render_line(Severity::Info, "e", &[("zebra", "1"), ("apple", "2")]);
        let b = render_line(Severity::Info, "e", &[("apple", "2"), ("zebra", "1")]);

        // Same ordering regardless of input order (timestamps aside).
        let strip_ts = |s: &str| {
            let v: serde_json::Value = serde_json::from_str(s).unwrap();
            (v["apple"].clone(), v["zebra"].clone())
        };
        assert_eq!(strip_ts(&a), strip_ts(&b));
        assert!(a.find("apple").unwrap() < a.find("zebra").unwrap());
    }

    #[test]
    fn test_escapes_special_chars() {
        let line = render_line(Severity::Warn, "e", &[("message", "a \"b\"\nc")]);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["message"], "a \"b\"\nc");
    }

    #[test]
    fn test_one_line_per_event() {
        let line = render_line(Severity::Info, "e", &[("a", "1"), ("b", "2")]);
        assert_eq!(line.chars().filter(|c| *c == '\n').count(), 1);
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("server.log");
        let sink = LogSink::to_file(&path);

        sink.info("vehicles.list", &[]);
        sink.info("vehicles.create", &[("vin", "123ABC")]);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let _: serde_json::Value = serde_json::from_str(line).unwrap();
        }
    }

    #[test]
    fn test_unwritable_target_is_ignored() {
        // Directory path cannot be opened as a file; the write is dropped.
        let dir = tempfile::TempDir::new().unwrap();
        let sink = LogSink::to_file(dir.path());
        sink.error("vehicles.get", &[("vin", "123ABC")]);
    }
}

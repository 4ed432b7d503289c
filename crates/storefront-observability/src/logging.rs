//! Structured logging with page-view context.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use storefront_commerce::SessionId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Upper-case label used in human-readable output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Page-view session for correlation.
    pub session_id: String,
    /// Page name (e.g., "product-page").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the page view opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// One-line JSON. Falls back to the bare message if serialization fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// `[LEVEL] message (123us) | key=value ...`
    pub fn to_human(&self) -> String {
        let mut line = format!("[{}] {}", self.level, self.message);
        if let Some(us) = self.elapsed_us {
            let _ = write!(line, " ({}us)", us);
        }
        for (i, (key, value)) in self.fields.iter().enumerate() {
            let sep = if i == 0 { " | " } else { " " };
            let _ = write!(line, "{}{}={}", sep, key, value);
        }
        line
    }

    /// Look up a field value.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" => Ok(Self::Human),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// Entries kept in memory instead of written to stderr.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl LogCapture {
    /// Snapshot of the captured entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Captured entries at a given level.
    pub fn at_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    fn push(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }
}

/// Structured logger for one page view.
///
/// Every entry carries the view's session ID plus elapsed time since the
/// view opened.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    page: Option<String>,
    route: Option<String>,
    start_time: std::time::Instant,
    min_level: LogLevel,
    format: LogFormat,
    capture: Option<LogCapture>,
}

impl StructuredLogger {
    /// Create a new logger for a page view.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            page: None,
            route: None,
            start_time: std::time::Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            capture: None,
        }
    }

    /// Create a logger that records entries in memory.
    pub fn captured(session_id: SessionId) -> (Self, LogCapture) {
        let capture = LogCapture::default();
        let mut logger = Self::new(session_id);
        logger.capture = Some(capture.clone());
        (logger, capture)
    }

    /// Set the page name.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Entries below `level` are dropped.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Log a message with no fields.
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, BTreeMap::new());
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            page: self.page.clone(),
            route: self.route.clone(),
            fields,
            elapsed_us: Some(self.elapsed_us()),
        };

        if let Some(capture) = &self.capture {
            capture.push(entry);
            return;
        }

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        // stdout carries rendered pages, logs go to stderr
        eprintln!("{}", output);
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    fn with(mut self, key: &str, value: serde_json::Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a string field.
    pub fn field(self, key: &str, value: impl Into<String>) -> Self {
        self.with(key, serde_json::Value::String(value.into()))
    }

    pub fn field_i64(self, key: &str, value: i64) -> Self {
        self.with(key, value.into())
    }

    /// Add a float field. Non-finite values are recorded as `null`.
    pub fn field_f64(self, key: &str, value: f64) -> Self {
        self.with(key, value.into())
    }

    pub fn field_bool(self, key: &str, value: bool) -> Self {
        self.with(key, value.into())
    }

    /// Write the entry through the logger.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_and_order() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_captured_entries_carry_context() {
        let (logger, capture) = StructuredLogger::captured(SessionId::new("view-1"));
        let logger = logger.with_page("product-page").with_route("/product/1");

        logger
            .info_builder("Intent applied")
            .field("intent", "next")
            .field_i64("image", 1)
            .emit();

        let entries = capture.entries();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.session_id, "view-1");
        assert_eq!(entry.page.as_deref(), Some("product-page"));
        assert_eq!(entry.field("intent"), Some(&serde_json::json!("next")));
        assert_eq!(entry.field("image"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn test_non_finite_float_field_is_null() {
        let (logger, capture) = StructuredLogger::captured(SessionId::new("view-4"));
        logger
            .debug_builder("Rating")
            .field_f64("average", f64::NAN)
            .field_bool("empty", true)
            .emit();

        let entry = &capture.entries()[0];
        assert_eq!(entry.field("average"), Some(&serde_json::Value::Null));
        assert_eq!(entry.field("empty"), Some(&serde_json::json!(true)));
    }

    #[test]
    fn test_min_level_filters() {
        let (logger, capture) = StructuredLogger::captured(SessionId::new("view-2"));
        let logger = logger.with_min_level(LogLevel::Warn);

        logger.info("dropped");
        logger.debug("dropped");
        logger.warn("kept");

        assert_eq!(capture.entries().len(), 1);
        assert_eq!(capture.at_level(LogLevel::Warn)[0].message, "kept");
    }

    #[test]
    fn test_entry_formats() {
        let (logger, capture) = StructuredLogger::captured(SessionId::new("view-3"));
        logger.warn_builder("Rejected").field("reason", "Unknown size: 4XL").emit();

        let entry = &capture.entries()[0];
        let json: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(json["level"], "warn");
        assert_eq!(json["reason"], "Unknown size: 4XL");
        assert!(json.get("page").is_none());

        let human = entry.to_human();
        assert!(human.starts_with("[WARN] Rejected"));
        assert!(human.contains("reason=\"Unknown size: 4XL\""));
    }
}

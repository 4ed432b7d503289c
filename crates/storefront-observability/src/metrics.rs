//! Page render metrics.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use storefront_commerce::SessionId;

/// Metrics for one rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Session ID for correlation.
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Time until the shell was written (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Section timings, keyed by section name.
    pub sections: BTreeMap<String, SectionMetrics>,
    /// Total bytes across all sections.
    pub total_bytes: usize,
    /// Total render duration (microseconds).
    pub total_duration_us: u64,
}

/// Metrics for a single section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetrics {
    pub name: String,
    /// Render duration (microseconds).
    pub duration_us: u64,
    /// Bytes of HTML produced.
    pub bytes: usize,
}

/// Collector for page render metrics.
#[derive(Debug)]
pub struct RenderMetrics {
    session_id: SessionId,
    page: Option<String>,
    start: Instant,
    shell_written: Option<Instant>,
    open_sections: BTreeMap<String, Instant>,
    sections: BTreeMap<String, SectionMetrics>,
}

impl RenderMetrics {
    /// Create a new metrics collector.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            page: None,
            start: Instant::now(),
            shell_written: None,
            open_sections: BTreeMap::new(),
            sections: BTreeMap::new(),
        }
    }

    /// Set page name.
    pub fn set_page(&mut self, page: impl Into<String>) {
        self.page = Some(page.into());
    }

    /// Record shell written.
    pub fn record_shell_written(&mut self) {
        self.shell_written = Some(Instant::now());
    }

    /// Record section start.
    pub fn record_section_start(&mut self, name: &str) {
        self.open_sections.insert(name.to_string(), Instant::now());
    }

    /// Record section rendered.
    ///
    /// A section that was never started is recorded with zero duration.
    pub fn record_section_rendered(&mut self, name: &str, bytes: usize) {
        let now = Instant::now();
        let started = self.open_sections.remove(name).unwrap_or(now);
        self.sections.insert(
            name.to_string(),
            SectionMetrics {
                name: name.to_string(),
                duration_us: now.duration_since(started).as_micros() as u64,
                bytes,
            },
        );
    }

    /// Number of sections recorded so far.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get total elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Finalize and return the metrics.
    pub fn finalize(self) -> PageMetrics {
        let start = self.start;
        let total_bytes = self.sections.values().map(|s| s.bytes).sum();

        PageMetrics {
            session_id: self.session_id.to_string(),
            page: self.page,
            time_to_shell_us: self
                .shell_written
                .map(|t| t.duration_since(start).as_micros() as u64),
            sections: self.sections,
            total_bytes,
            total_duration_us: start.elapsed().as_micros() as u64,
        }
    }
}

impl PageMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        match &self.page {
            Some(page) => lines.push(format!("Page: {} ({})", page, self.session_id)),
            None => lines.push(format!("Page: {}", self.session_id)),
        }

        if let Some(tts) = self.time_to_shell_us {
            lines.push(format!("  Time to shell: {}us ({:.2}ms)", tts, tts as f64 / 1000.0));
        }

        lines.push(format!(
            "  Total: {} bytes in {}us ({:.2}ms)",
            self.total_bytes,
            self.total_duration_us,
            self.total_duration_us as f64 / 1000.0
        ));

        if !self.sections.is_empty() {
            lines.push("  Sections:".to_string());
            for (name, section) in &self.sections {
                lines.push(format!(
                    "    {}: {} bytes, {}us",
                    name, section.bytes, section.duration_us
                ));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_and_totals() {
        let mut metrics = RenderMetrics::new(SessionId::new("view-1"));
        metrics.set_page("product-page");
        metrics.record_shell_written();

        metrics.record_section_start("gallery");
        metrics.record_section_rendered("gallery", 120);
        metrics.record_section_rendered("options", 80);
        assert_eq!(metrics.section_count(), 2);

        let page = metrics.finalize();
        assert_eq!(page.total_bytes, 200);
        assert_eq!(page.sections["gallery"].bytes, 120);
        assert_eq!(page.sections["options"].duration_us, 0);
        assert!(page.time_to_shell_us.is_some());
    }

    #[test]
    fn test_summary_and_json() {
        let mut metrics = RenderMetrics::new(SessionId::new("view-2"));
        metrics.record_section_rendered("hero", 42);
        let page = metrics.finalize();

        let summary = page.to_summary();
        assert!(summary.starts_with("Page: view-2"));
        assert!(summary.contains("hero: 42 bytes"));

        let json: serde_json::Value = serde_json::from_str(&page.to_json()).unwrap();
        assert_eq!(json["total_bytes"], 42);
        assert!(json.get("page").is_none());
    }
}

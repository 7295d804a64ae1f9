use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::classifier;

/// Outcome of a single probe against a dispatcher-sensitive path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// No response obtained, the probe hit a transport error.
    Failed,
    /// The dispatcher blocked the path as expected.
    Safe,
    /// The path was reachable.
    Vulnerable,
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStatus::Failed => write!(f, "FAILED"),
            ScanStatus::Safe => write!(f, "SAFE"),
            ScanStatus::Vulnerable => write!(f, "VULNERABLE"),
        }
    }
}

/// One record per probe attempt. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub time: DateTime<Utc>,
    pub host: String,
    pub path: String,
    pub url: String,
    /// `None` when no response was obtained.
    pub status_code: Option<StatusCode>,
    pub headers: HeaderMap,
    pub status: ScanStatus,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn new(
        host: &str,
        path: &str,
        status_code: Option<StatusCode>,
        headers: HeaderMap,
        error: Option<String>,
    ) -> Self {
        let status = classifier::classify(status_code, &headers);

        Self {
            time: Utc::now(),
            host: host.to_string(),
            path: path.to_string(),
            url: format!("{host}{path}"),
            status_code,
            headers,
            status,
            error,
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -1 is the sentinel for "no response"
        let code = self
            .status_code
            .map(|status| i32::from(status.as_u16()))
            .unwrap_or(-1);

        write!(
            f,
            "[{}] {} - {}",
            self.time.format("%Y-%m-%d %H:%M:%S%.6f"),
            code,
            self.url
        )?;

        if let Some(error) = &self.error {
            write!(f, " ({error})")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_is_classified_on_construction() {
        let result = ProbeResult::new(
            "http://localhost:8080",
            "/content.json",
            Some(StatusCode::OK),
            HeaderMap::new(),
            None,
        );

        assert_eq!(result.url, "http://localhost:8080/content.json");
        assert_eq!(result.status, ScanStatus::Vulnerable);
    }

    #[test]
    fn display_uses_sentinel_for_missing_status() {
        let result = ProbeResult::new(
            "http://localhost:8080",
            "/admin",
            None,
            HeaderMap::new(),
            Some("connection refused".to_string()),
        );

        let rendered = result.to_string();
        assert!(rendered.contains(" -1 - http://localhost:8080/admin"));
        assert!(rendered.contains("connection refused"));
    }
}

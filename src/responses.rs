//! Shared Atlas response envelopes.

use serde::Deserialize;

/// A single page of a list endpoint. A body without `results` is an empty page.
#[derive(Deserialize)]
pub struct Page<T> {
    pub results: Option<Vec<T>>,
}

impl<T> Page<T> {
    pub fn into_results(self) -> Vec<T> {
        self.results.unwrap_or_default()
    }
}

/// Error document Atlas returns alongside non-2xx statuses.
#[derive(Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
    pub reason: Option<String>,
}

impl ApiErrorBody {
    /// Human readable summary, preferring the server's `detail` text.
    pub fn summary(&self) -> Option<String> {
        let text = self.detail.clone().or_else(|| self.reason.clone())?;
        Some(match &self.error_code {
            Some(code) => format!("{text} ({code})"),
            None => text,
        })
    }
}

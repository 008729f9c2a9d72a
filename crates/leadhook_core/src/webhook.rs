use thiserror::Error;

use crate::saved::{find_by_name, remove_by_name, SavedWebhook};

pub const NETWORK_FAILURE_MESSAGE: &str = "Failed to send request. This might be due to a network error or a CORS policy on the destination server. If this keeps failing, check that the endpoint is reachable from this machine.";
pub const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred while sending the request.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub status_text: String,
    /// Flattened headers in the order first seen.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl WebhookResponse {
    /// `"200 OK"`, or just the code when there is no status text.
    pub fn status_badge(&self) -> String {
        if self.status_text.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.status_text)
        }
    }

    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Body pretty-printed as JSON when it parses, raw otherwise.
    pub fn pretty_body(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| self.body.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    /// Unreachable host, refused connection, TLS or policy rejection.
    Network,
    Unknown,
}

impl TransportFailure {
    pub fn message(self) -> &'static str {
        match self {
            TransportFailure::Network => NETWORK_FAILURE_MESSAGE,
            TransportFailure::Unknown => UNKNOWN_FAILURE_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Please enter a webhook URL.")]
    Empty,
    #[error("The webhook URL is not valid.")]
    Invalid,
    #[error("Cannot save an empty URL.")]
    EmptySave,
}

/// Trims and parses `raw` as an absolute URL.
pub fn validate_webhook_url(raw: &str) -> Result<url::Url, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }
    url::Url::parse(trimmed).map_err(|_| UrlError::Invalid)
}

/// One test cycle: `Idle -> AwaitingConfirmation -> Sending -> Succeeded | Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TestPhase {
    #[default]
    Idle,
    AwaitingConfirmation,
    Sending,
    Succeeded(WebhookResponse),
    Failed(TransportFailure),
}

impl TestPhase {
    pub fn response(&self) -> Option<&WebhookResponse> {
        match self {
            TestPhase::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<TransportFailure> {
        match self {
            TestPhase::Failed(failure) => Some(*failure),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebhookTester {
    url: String,
    phase: TestPhase,
    url_error: Option<UrlError>,
    selected: Option<String>,
    saved: Vec<SavedWebhook>,
    /// Outcome of the last completed send; survives until the next one starts.
    last_outcome: Option<Result<WebhookResponse, TransportFailure>>,
}

impl WebhookTester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> &TestPhase {
        &self.phase
    }

    pub fn url_error(&self) -> Option<UrlError> {
        self.url_error
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn saved(&self) -> &[SavedWebhook] {
        &self.saved
    }

    pub fn last_response(&self) -> Option<&WebhookResponse> {
        self.last_outcome.as_ref().and_then(|outcome| outcome.as_ref().ok())
    }

    pub fn last_failure(&self) -> Option<TransportFailure> {
        self.last_outcome
            .as_ref()
            .and_then(|outcome| outcome.as_ref().err().copied())
    }

    pub fn is_sending(&self) -> bool {
        self.phase == TestPhase::Sending
    }

    pub fn restore(&mut self, saved: Vec<SavedWebhook>) {
        self.saved = saved;
        self.sync_selection();
    }

    /// Sets the URL and selects the saved webhook with exactly that (trimmed) URL, if any.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.url_error = None;
        self.sync_selection();
    }

    /// Opens the send confirmation if the URL is usable. Returns whether it opened.
    pub fn open_confirmation(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        match validate_webhook_url(&self.url) {
            Ok(_) => {
                self.url_error = None;
                self.phase = TestPhase::AwaitingConfirmation;
                true
            }
            Err(err) => {
                self.url_error = Some(err);
                false
            }
        }
    }

    /// Closes the confirmation and goes back to showing the last outcome, if any.
    pub fn cancel_confirmation(&mut self) -> bool {
        if self.phase != TestPhase::AwaitingConfirmation {
            return false;
        }
        self.phase = match &self.last_outcome {
            Some(Ok(response)) => TestPhase::Succeeded(response.clone()),
            Some(Err(failure)) => TestPhase::Failed(*failure),
            None => TestPhase::Idle,
        };
        true
    }

    /// Moves to `Sending` and returns the trimmed target URL.
    pub fn confirm_send(&mut self) -> Option<String> {
        if self.phase != TestPhase::AwaitingConfirmation {
            return None;
        }
        self.phase = TestPhase::Sending;
        self.last_outcome = None;
        Some(self.url.trim().to_string())
    }

    /// Records the outcome of the outstanding request. Ignored unless sending.
    pub fn complete(&mut self, result: Result<WebhookResponse, TransportFailure>) -> bool {
        if !self.is_sending() {
            return false;
        }
        self.phase = match &result {
            Ok(response) => TestPhase::Succeeded(response.clone()),
            Err(failure) => TestPhase::Failed(*failure),
        };
        self.last_outcome = Some(result);
        true
    }

    /// Name of the saved webhook whose URL matches the current one.
    pub fn suggested_name(&self) -> Option<&str> {
        let trimmed = self.url.trim();
        self.saved
            .iter()
            .find(|saved| saved.url == trimmed)
            .map(|saved| saved.name.as_str())
    }

    /// Saves the current URL under `name`.
    ///
    /// An existing record with that name gets the new URL; otherwise a record
    /// already holding this URL is renamed; otherwise a record is appended.
    /// Returns `Ok(false)` for a blank name.
    pub fn save_current_url(&mut self, name: &str) -> Result<bool, UrlError> {
        let url = self.url.trim().to_string();
        if url.is_empty() {
            self.url_error = Some(UrlError::EmptySave);
            return Err(UrlError::EmptySave);
        }
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }

        if let Some(existing) = self.saved.iter_mut().find(|saved| saved.name == name) {
            existing.url = url;
        } else if let Some(existing) = self.saved.iter_mut().find(|saved| saved.url == url) {
            existing.name = name.to_string();
        } else {
            self.saved.push(SavedWebhook {
                name: name.to_string(),
                url,
            });
        }
        self.url_error = None;
        self.selected = Some(name.to_string());
        Ok(true)
    }

    /// Selects a saved webhook and makes its URL current. Unknown names clear the URL.
    pub fn select(&mut self, name: &str) {
        match find_by_name(&self.saved, name) {
            Some(saved) => {
                self.url = saved.url.clone();
                self.selected = Some(saved.name.clone());
            }
            None => {
                self.url.clear();
                self.selected = None;
            }
        }
        self.url_error = None;
    }

    pub fn delete_selected(&mut self) -> bool {
        let Some(name) = self.selected.take() else {
            return false;
        };
        remove_by_name(&mut self.saved, &name);
        self.url.clear();
        self.url_error = None;
        true
    }

    fn sync_selection(&mut self) {
        self.selected = self.suggested_name().map(ToOwned::to_owned);
    }
}

use std::fmt;

/// What came back from the webhook, whatever the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SendCompleted(Result<HttpResponse, SendError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendError {
    pub kind: SendFailureKind,
    pub message: String,
}

impl SendError {
    pub(crate) fn new(kind: SendFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the request likely never reached a server that answered.
    pub fn is_network(&self) -> bool {
        matches!(self.kind, SendFailureKind::Network | SendFailureKind::Timeout)
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SendError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendFailureKind {
    InvalidUrl,
    Network,
    Timeout,
    /// The response arrived but its body could not be read.
    Body,
    /// Client setup failed before anything was sent.
    Client,
}

impl fmt::Display for SendFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendFailureKind::InvalidUrl => write!(f, "invalid url"),
            SendFailureKind::Network => write!(f, "network error"),
            SendFailureKind::Timeout => write!(f, "timeout"),
            SendFailureKind::Body => write!(f, "body read error"),
            SendFailureKind::Client => write!(f, "client error"),
        }
    }
}

use crate::entries::EntryCollection;
use crate::entry::build_payload;
use crate::route::Route;
use crate::saved::SavedSet;
use crate::view_model::AppViewModel;
use crate::webhook::WebhookTester;

pub const FORM_ERROR_MESSAGE: &str = "Please fill out all required fields marked in red.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient notification, drained by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) route: Route,
    pub(crate) entries: EntryCollection,
    pub(crate) form_error: Option<&'static str>,
    pub(crate) saved_sets: Vec<SavedSet>,
    pub(crate) selected_set: Option<String>,
    pub(crate) tester: WebhookTester,
    notices: Vec<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn entries(&self) -> &EntryCollection {
        &self.entries
    }

    pub fn tester(&self) -> &WebhookTester {
        &self.tester
    }

    pub fn saved_sets(&self) -> &[SavedSet] {
        &self.saved_sets
    }

    pub fn selected_set(&self) -> Option<&str> {
        self.selected_set.as_deref()
    }

    pub fn form_error(&self) -> Option<&'static str> {
        self.form_error
    }

    /// Request body for the current entries.
    pub fn payload(&self) -> String {
        build_payload(self.entries.entries())
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
        self.dirty = true;
    }

    /// Drops the aggregate form error once no field error remains.
    pub(crate) fn refresh_form_error(&mut self) {
        if !self.entries.has_errors() {
            self.form_error = None;
        }
    }
}

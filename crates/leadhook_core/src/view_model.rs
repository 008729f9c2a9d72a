use crate::entries::MAX_ENTRIES;
use crate::saved::names;
use crate::{AppState, Entry, EntryField, Route, SavedWebhook, TestPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRowView {
    /// 1-based position shown to the user.
    pub number: usize,
    pub entry: Entry,
    pub errors: Vec<EntryField>,
    pub can_copy: bool,
    pub can_remove: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseView {
    pub badge: String,
    pub success: bool,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseView {
    #[default]
    Idle,
    Confirming,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebhookView {
    pub url: String,
    pub url_error: Option<String>,
    pub phase: PhaseView,
    pub can_send: bool,
    pub selected: Option<String>,
    pub saved: Vec<SavedWebhook>,
    /// Pre-fill for the save prompt.
    pub suggested_name: Option<String>,
    pub payload: String,
    pub entry_count: usize,
    pub response: Option<ResponseView>,
    pub failure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub route: Route,
    pub entries: Vec<EntryRowView>,
    pub can_add: bool,
    pub max_entries: usize,
    pub form_error: Option<String>,
    pub saved_set_names: Vec<String>,
    pub selected_set: Option<String>,
    pub webhook: WebhookView,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let collection = state.entries();
        let only_entry = collection.len() == 1;
        let entries = collection
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryRowView {
                number: index + 1,
                entry: entry.clone(),
                errors: collection.errors_for(index).to_vec(),
                can_copy: index > 0,
                can_remove: !only_entry,
            })
            .collect();

        Self {
            route: state.route(),
            entries,
            can_add: collection.can_add(),
            max_entries: MAX_ENTRIES,
            form_error: state.form_error().map(ToOwned::to_owned),
            saved_set_names: names(state.saved_sets()),
            selected_set: state.selected_set().map(ToOwned::to_owned),
            webhook: webhook_view(state),
        }
    }
}

fn webhook_view(state: &AppState) -> WebhookView {
    let tester = state.tester();
    let phase = match tester.phase() {
        TestPhase::Idle => PhaseView::Idle,
        TestPhase::AwaitingConfirmation => PhaseView::Confirming,
        TestPhase::Sending => PhaseView::Sending,
        TestPhase::Succeeded(_) => PhaseView::Succeeded,
        TestPhase::Failed(_) => PhaseView::Failed,
    };
    let response = tester.last_response().map(|response| ResponseView {
        badge: response.status_badge(),
        success: response.is_success_status(),
        headers: response.headers.clone(),
        body: response.pretty_body(),
    });

    WebhookView {
        url: tester.url().to_string(),
        url_error: tester.url_error().map(|err| err.to_string()),
        phase,
        can_send: !tester.url().is_empty() && !tester.is_sending(),
        selected: tester.selected().map(ToOwned::to_owned),
        saved: tester.saved().to_vec(),
        suggested_name: tester.suggested_name().map(ToOwned::to_owned),
        payload: state.payload(),
        entry_count: state.entries().len(),
        response,
        failure: tester.last_failure().map(|f| f.message().to_string()),
    }
}

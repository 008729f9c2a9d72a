//! Leadhook core: pure state machine and view-model helpers.
mod effect;
mod entries;
mod entry;
mod msg;
mod route;
mod saved;
mod state;
mod update;
mod view_model;
mod webhook;

pub use effect::Effect;
pub use entries::{EditError, EntryCollection, MAX_ENTRIES};
pub use entry::{build_payload, DateRange, Entry, EntryField, EntryId, ExperienceLevel, FieldError};
pub use msg::Msg;
pub use route::{Route, FORM_HASH, WEBHOOK_HASH};
pub use saved::{find_by_name, names, remove_by_name, upsert_by_name, Named, SavedSet, SavedWebhook, Upsert};
pub use state::{AppState, Notice, NoticeLevel, FORM_ERROR_MESSAGE};
pub use update::update;
pub use view_model::{AppViewModel, EntryRowView, PhaseView, ResponseView, WebhookView};
pub use webhook::{
    validate_webhook_url, TestPhase, TransportFailure, UrlError, WebhookResponse, WebhookTester,
    NETWORK_FAILURE_MESSAGE, UNKNOWN_FAILURE_MESSAGE,
};

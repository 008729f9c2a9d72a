use crate::{EntryField, SavedSet, SavedWebhook, TransportFailure, WebhookResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The location hash changed (startup, `Effect::Navigate`, or the user).
    HashChanged(String),
    /// Restore persisted collections at startup.
    RestoreSaved {
        sets: Vec<SavedSet>,
        webhooks: Vec<SavedWebhook>,
    },
    AddEntryClicked,
    RemoveEntryClicked { index: usize },
    CopyPreviousClicked { index: usize },
    FieldEdited {
        index: usize,
        field: EntryField,
        value: String,
    },
    /// Validate every entry and move on to the webhook screen.
    ProceedClicked,
    /// User picked a saved set; an empty name resets the form.
    SetSelected(String),
    SaveSetConfirmed(String),
    DeleteSetClicked,
    WebhookUrlEdited(String),
    WebhookSelected(String),
    SaveWebhookConfirmed(String),
    DeleteWebhookClicked,
    /// Open the send confirmation.
    SendClicked,
    ConfirmSendClicked,
    CancelConfirmationClicked,
    /// Engine completion for the outstanding request.
    SendCompleted(Result<WebhookResponse, TransportFailure>),
}

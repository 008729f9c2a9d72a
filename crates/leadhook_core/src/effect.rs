use crate::{SavedSet, SavedWebhook};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Change the location hash; the router answers with `Msg::HashChanged`.
    Navigate { hash: String },
    PersistSavedSets(Vec<SavedSet>),
    PersistSavedWebhooks(Vec<SavedWebhook>),
    /// POST `payload` as JSON to `url`; the engine answers with `Msg::SendCompleted`.
    SendWebhook { url: String, payload: String },
}

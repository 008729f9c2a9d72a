use crate::route::WEBHOOK_HASH;
use crate::saved::{find_by_name, remove_by_name, upsert_by_name};
use crate::state::{Notice, FORM_ERROR_MESSAGE};
use crate::{AppState, Effect, Msg, Route, SavedSet, TransportFailure, WebhookResponse};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::HashChanged(hash) => {
            let route = Route::from_hash(&hash);
            if route != state.route {
                state.route = route;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RestoreSaved { sets, webhooks } => {
            state.saved_sets = sets;
            state.tester.restore(webhooks);
            state.mark_dirty();
            Vec::new()
        }
        Msg::AddEntryClicked => {
            if state.entries.add() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RemoveEntryClicked { index } => {
            if state.entries.remove(index) {
                state.refresh_form_error();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CopyPreviousClicked { index } => {
            if state.entries.copy_previous(index) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FieldEdited {
            index,
            field,
            value,
        } => {
            match state.entries.update_field(index, field, &value) {
                Ok(()) => {
                    state.refresh_form_error();
                    state.mark_dirty();
                }
                Err(err) => state.notify(Notice::error(err.to_string())),
            }
            Vec::new()
        }
        Msg::ProceedClicked => {
            let errors = state.entries.validate_all();
            state.mark_dirty();
            if errors.is_empty() {
                state.form_error = None;
                vec![Effect::Navigate {
                    hash: WEBHOOK_HASH.to_string(),
                }]
            } else {
                state.form_error = Some(FORM_ERROR_MESSAGE);
                Vec::new()
            }
        }
        Msg::SetSelected(name) => select_set(&mut state, name.trim()),
        Msg::SaveSetConfirmed(name) => {
            let name = name.trim();
            if name.is_empty() {
                return (state, Vec::new());
            }
            upsert_by_name(
                &mut state.saved_sets,
                SavedSet {
                    name: name.to_string(),
                    entries: state.entries.entries().to_vec(),
                },
            );
            state.selected_set = Some(name.to_string());
            state.notify(Notice::success(format!("Saved set '{name}'.")));
            vec![Effect::PersistSavedSets(state.saved_sets.clone())]
        }
        Msg::DeleteSetClicked => {
            let Some(name) = state.selected_set.take() else {
                return (state, Vec::new());
            };
            remove_by_name(&mut state.saved_sets, &name);
            state.entries.reset();
            state.form_error = None;
            state.mark_dirty();
            vec![Effect::PersistSavedSets(state.saved_sets.clone())]
        }
        Msg::WebhookUrlEdited(url) => {
            state.tester.set_url(url);
            state.mark_dirty();
            Vec::new()
        }
        Msg::WebhookSelected(name) => {
            state.tester.select(name.trim());
            state.mark_dirty();
            Vec::new()
        }
        Msg::SaveWebhookConfirmed(name) => match state.tester.save_current_url(&name) {
            Ok(true) => {
                state.mark_dirty();
                vec![Effect::PersistSavedWebhooks(state.tester.saved().to_vec())]
            }
            Ok(false) => Vec::new(),
            Err(_) => {
                state.mark_dirty();
                Vec::new()
            }
        },
        Msg::DeleteWebhookClicked => {
            if state.tester.delete_selected() {
                state.mark_dirty();
                vec![Effect::PersistSavedWebhooks(state.tester.saved().to_vec())]
            } else {
                Vec::new()
            }
        }
        Msg::SendClicked => {
            state.tester.open_confirmation();
            state.mark_dirty();
            Vec::new()
        }
        Msg::CancelConfirmationClicked => {
            if state.tester.cancel_confirmation() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ConfirmSendClicked => match state.tester.confirm_send() {
            Some(url) => {
                let payload = state.payload();
                state.notify(Notice::info("Sending webhook request..."));
                vec![Effect::SendWebhook { url, payload }]
            }
            None => Vec::new(),
        },
        Msg::SendCompleted(result) => {
            apply_send_result(&mut state, result);
            Vec::new()
        }
    };

    (state, effects)
}

fn select_set(state: &mut AppState, name: &str) -> Vec<Effect> {
    if name.is_empty() {
        state.selected_set = None;
        state.entries.reset();
        state.form_error = None;
        state.mark_dirty();
        return Vec::new();
    }
    match find_by_name(&state.saved_sets, name) {
        Some(set) => {
            let entries = set.entries.clone();
            state.entries.replace_with(&entries);
            state.selected_set = Some(name.to_string());
            state.form_error = None;
            state.mark_dirty();
        }
        None => {
            // Selection is recorded; entries stay as they are.
            state.selected_set = Some(name.to_string());
            state.mark_dirty();
            state.notify(Notice::error(format!("No saved set named '{name}'.")));
        }
    }
    Vec::new()
}

fn apply_send_result(state: &mut AppState, result: Result<WebhookResponse, TransportFailure>) {
    let notice = match &result {
        Ok(response) => Notice::success(format!("Success: {}", response.status_badge())),
        Err(_) => Notice::error("Request Failed. See error below."),
    };
    if state.tester.complete(result) {
        state.notify(notice);
    }
}

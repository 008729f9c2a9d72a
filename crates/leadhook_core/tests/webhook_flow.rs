use std::sync::Once;

use leadhook_core::{
    update, AppState, Effect, Msg, NoticeLevel, PhaseView, SavedWebhook, TestPhase,
    TransportFailure, UrlError, WebhookResponse, NETWORK_FAILURE_MESSAGE, UNKNOWN_FAILURE_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(leadhook_logging::initialize_for_tests);
}

fn with_url(state: AppState, url: &str) -> AppState {
    let (state, _) = update(state, Msg::WebhookUrlEdited(url.to_string()));
    state
}

fn sending(url: &str) -> AppState {
    let state = with_url(AppState::new(), url);
    let (state, _) = update(state, Msg::SendClicked);
    let (state, _) = update(state, Msg::ConfirmSendClicked);
    assert_eq!(state.tester().phase(), &TestPhase::Sending);
    state
}

fn response(status: u16, status_text: &str) -> WebhookResponse {
    WebhookResponse {
        status,
        status_text: status_text.to_string(),
        headers: vec![("content-type".to_string(), "text/plain".to_string())],
        body: "nope".to_string(),
    }
}

fn restored(webhooks: Vec<SavedWebhook>) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::RestoreSaved {
            sets: Vec::new(),
            webhooks,
        },
    );
    state
}

fn hook(name: &str, url: &str) -> SavedWebhook {
    SavedWebhook {
        name: name.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn empty_url_blocks_confirmation() {
    init_logging();
    let state = with_url(AppState::new(), "   ");
    let (state, effects) = update(state, Msg::SendClicked);

    assert!(effects.is_empty());
    assert_eq!(state.tester().phase(), &TestPhase::Idle);
    assert_eq!(state.tester().url_error(), Some(UrlError::Empty));
    assert_eq!(
        state.view().webhook.url_error.as_deref(),
        Some("Please enter a webhook URL.")
    );
}

#[test]
fn relative_url_is_not_valid() {
    init_logging();
    let state = with_url(AppState::new(), "hooks/incoming");
    let (state, _) = update(state, Msg::SendClicked);

    assert_eq!(state.tester().phase(), &TestPhase::Idle);
    assert_eq!(
        state.view().webhook.url_error.as_deref(),
        Some("The webhook URL is not valid.")
    );

    // Editing the URL clears the message.
    let state = with_url(state, "https://hooks.test/in");
    assert_eq!(state.tester().url_error(), None);
}

#[test]
fn confirm_then_send_emits_one_request_to_trimmed_url() {
    init_logging();
    let state = with_url(AppState::new(), "  https://hooks.test/in  ");
    let (state, effects) = update(state, Msg::SendClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().webhook.phase, PhaseView::Confirming);

    let payload = state.payload();
    let (mut state, effects) = update(state, Msg::ConfirmSendClicked);

    assert_eq!(
        effects,
        vec![Effect::SendWebhook {
            url: "https://hooks.test/in".to_string(),
            payload,
        }]
    );
    assert_eq!(state.view().webhook.phase, PhaseView::Sending);
    assert!(!state.view().webhook.can_send);
    let notices = state.take_notices();
    assert_eq!(notices[0].level, NoticeLevel::Info);
    assert_eq!(notices[0].text, "Sending webhook request...");
}

#[test]
fn confirm_without_open_dialog_does_nothing() {
    init_logging();
    let state = with_url(AppState::new(), "https://hooks.test/in");
    let (state, effects) = update(state, Msg::ConfirmSendClicked);

    assert!(effects.is_empty());
    assert_eq!(state.tester().phase(), &TestPhase::Idle);
}

#[test]
fn cancel_returns_to_idle() {
    init_logging();
    let state = with_url(AppState::new(), "https://hooks.test/in");
    let (state, _) = update(state, Msg::SendClicked);
    let (state, _) = update(state, Msg::CancelConfirmationClicked);

    assert_eq!(state.tester().phase(), &TestPhase::Idle);
}

#[test]
fn cancelling_a_resend_keeps_the_last_response() {
    init_logging();
    let state = sending("https://hooks.test/in");
    let (state, _) = update(state, Msg::SendCompleted(Ok(response(200, "OK"))));

    let (state, _) = update(state, Msg::SendClicked);
    assert_eq!(state.view().webhook.phase, PhaseView::Confirming);
    assert_eq!(state.view().webhook.response.unwrap().badge, "200 OK");

    let (state, _) = update(state, Msg::CancelConfirmationClicked);
    let view = state.view().webhook;
    assert_eq!(view.phase, PhaseView::Succeeded);
    assert_eq!(view.response.unwrap().badge, "200 OK");
    assert_eq!(state.tester().last_response().map(|r| r.status), Some(200));
}

#[test]
fn cancelling_a_retry_keeps_the_last_failure() {
    init_logging();
    let state = sending("https://hooks.test/in");
    let (state, _) = update(state, Msg::SendCompleted(Err(TransportFailure::Network)));

    let (state, _) = update(state, Msg::SendClicked);
    let (state, _) = update(state, Msg::CancelConfirmationClicked);

    assert_eq!(
        state.tester().phase(),
        &TestPhase::Failed(TransportFailure::Network)
    );
    assert_eq!(
        state.view().webhook.failure.as_deref(),
        Some(NETWORK_FAILURE_MESSAGE)
    );
}

#[test]
fn no_second_confirmation_while_sending() {
    init_logging();
    let state = sending("https://hooks.test/in");

    let (state, _) = update(state, Msg::SendClicked);
    assert_eq!(state.tester().phase(), &TestPhase::Sending);

    let (state, effects) = update(state, Msg::ConfirmSendClicked);
    assert!(effects.is_empty());
    assert_eq!(state.tester().phase(), &TestPhase::Sending);
}

#[test]
fn http_error_status_is_still_a_success() {
    init_logging();
    let state = sending("https://hooks.test/in");

    let (mut state, _) = update(state, Msg::SendCompleted(Ok(response(404, "Not Found"))));

    match state.tester().phase() {
        TestPhase::Succeeded(captured) => assert_eq!(captured.status, 404),
        other => panic!("expected Succeeded, got {other:?}"),
    }
    let view = state.view().webhook;
    assert_eq!(view.response.as_ref().unwrap().badge, "404 Not Found");
    assert!(!view.response.as_ref().unwrap().success);
    assert_eq!(view.failure, None);
    let notices = state.take_notices();
    assert_eq!(notices.last().unwrap().text, "Success: 404 Not Found");
}

#[test]
fn network_failure_is_failed_with_explanation() {
    init_logging();
    let state = sending("https://hooks.test/in");

    let (mut state, _) = update(state, Msg::SendCompleted(Err(TransportFailure::Network)));

    assert_eq!(
        state.tester().phase(),
        &TestPhase::Failed(TransportFailure::Network)
    );
    let view = state.view().webhook;
    assert!(view.response.is_none());
    assert_eq!(view.failure.as_deref(), Some(NETWORK_FAILURE_MESSAGE));
    let notices = state.take_notices();
    assert_eq!(notices.last().unwrap().level, NoticeLevel::Error);
    assert_eq!(notices.last().unwrap().text, "Request Failed. See error below.");
}

#[test]
fn unknown_failure_has_its_own_message() {
    assert_ne!(NETWORK_FAILURE_MESSAGE, UNKNOWN_FAILURE_MESSAGE);
    assert_eq!(TransportFailure::Unknown.message(), UNKNOWN_FAILURE_MESSAGE);
}

#[test]
fn next_send_clears_previous_outcome() {
    init_logging();
    let state = sending("https://hooks.test/in");
    let (state, _) = update(state, Msg::SendCompleted(Ok(response(500, "Internal Server Error"))));
    assert!(state.tester().phase().response().is_some());

    let (state, _) = update(state, Msg::SendClicked);
    assert!(state.view().webhook.response.is_some());
    let (state, _) = update(state, Msg::ConfirmSendClicked);

    assert_eq!(state.tester().phase(), &TestPhase::Sending);
    assert!(state.view().webhook.response.is_none());
    assert!(state.tester().last_response().is_none());
}

#[test]
fn late_completion_is_ignored() {
    init_logging();
    let (mut state, _) = update(
        AppState::new(),
        Msg::SendCompleted(Ok(response(200, "OK"))),
    );

    assert_eq!(state.tester().phase(), &TestPhase::Idle);
    assert!(state.take_notices().is_empty());
}

#[test]
fn saving_url_appends_then_overwrites_by_name() {
    init_logging();
    let state = with_url(AppState::new(), "https://one.test/");
    let (state, effects) = update(state, Msg::SaveWebhookConfirmed("ci".to_string()));
    assert_eq!(
        effects,
        vec![Effect::PersistSavedWebhooks(vec![hook("ci", "https://one.test/")])]
    );

    let state = with_url(state, "https://two.test/");
    let (state, effects) = update(state, Msg::SaveWebhookConfirmed("staging".to_string()));
    assert_eq!(
        effects,
        vec![Effect::PersistSavedWebhooks(vec![
            hook("ci", "https://one.test/"),
            hook("staging", "https://two.test/"),
        ])]
    );

    let state = with_url(state, "https://three.test/");
    let (state, effects) = update(state, Msg::SaveWebhookConfirmed("ci".to_string()));
    assert_eq!(
        effects,
        vec![Effect::PersistSavedWebhooks(vec![
            hook("ci", "https://three.test/"),
            hook("staging", "https://two.test/"),
        ])]
    );
    assert_eq!(state.tester().selected(), Some("ci"));
}

#[test]
fn saving_a_known_url_under_a_new_name_renames_it() {
    init_logging();
    let state = restored(vec![hook("old", "https://hooks.test/in")]);
    let state = with_url(state, "https://hooks.test/in");
    assert_eq!(state.view().webhook.suggested_name.as_deref(), Some("old"));

    let (state, _) = update(state, Msg::SaveWebhookConfirmed("new".to_string()));

    assert_eq!(state.tester().saved(), &[hook("new", "https://hooks.test/in")]);
    assert_eq!(state.tester().selected(), Some("new"));
}

#[test]
fn saving_empty_url_is_rejected() {
    init_logging();
    let state = with_url(AppState::new(), "  ");
    let (state, effects) = update(state, Msg::SaveWebhookConfirmed("x".to_string()));

    assert!(effects.is_empty());
    assert!(state.tester().saved().is_empty());
    assert_eq!(
        state.view().webhook.url_error.as_deref(),
        Some("Cannot save an empty URL.")
    );
}

#[test]
fn selecting_a_name_sets_the_url_and_editing_reverse_selects() {
    init_logging();
    let state = restored(vec![
        hook("ci", "https://one.test/"),
        hook("prod", "https://two.test/"),
    ]);

    let (state, _) = update(state, Msg::WebhookSelected("prod".to_string()));
    assert_eq!(state.tester().url(), "https://two.test/");
    assert_eq!(state.tester().selected(), Some("prod"));

    let state = with_url(state, " https://one.test/ ");
    assert_eq!(state.tester().selected(), Some("ci"));

    let state = with_url(state, "https://one.test/x");
    assert_eq!(state.tester().selected(), None);

    let (state, _) = update(state, Msg::WebhookSelected("missing".to_string()));
    assert_eq!(state.tester().url(), "");
    assert_eq!(state.tester().selected(), None);
}

#[test]
fn deleting_selected_webhook_clears_url_and_persists() {
    init_logging();
    let state = restored(vec![
        hook("ci", "https://one.test/"),
        hook("prod", "https://two.test/"),
    ]);
    let (state, _) = update(state, Msg::WebhookSelected("ci".to_string()));

    let (state, effects) = update(state, Msg::DeleteWebhookClicked);

    assert_eq!(
        effects,
        vec![Effect::PersistSavedWebhooks(vec![hook("prod", "https://two.test/")])]
    );
    assert_eq!(state.tester().url(), "");
    assert_eq!(state.tester().selected(), None);

    let (_state, effects) = update(state, Msg::DeleteWebhookClicked);
    assert!(effects.is_empty());
}

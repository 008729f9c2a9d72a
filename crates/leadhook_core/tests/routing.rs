use leadhook_core::{update, AppState, Msg, Route, FORM_HASH, WEBHOOK_HASH};

#[test]
fn only_the_webhook_hash_selects_the_webhook_screen() {
    assert_eq!(Route::from_hash(WEBHOOK_HASH), Route::Webhook);
    assert_eq!(Route::from_hash(""), Route::Form);
    assert_eq!(Route::from_hash(FORM_HASH), Route::Form);
    assert_eq!(Route::from_hash("#/webhook/"), Route::Form);
    assert_eq!(Route::from_hash("#/anything"), Route::Form);
}

#[test]
fn hash_changes_switch_screens() {
    let state = AppState::new();
    assert_eq!(state.route(), Route::Form);

    let (mut state, effects) = update(state, Msg::HashChanged(WEBHOOK_HASH.to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.view().route, Route::Webhook);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::HashChanged(WEBHOOK_HASH.to_string()));
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::HashChanged(String::new()));
    assert_eq!(state.route(), Route::Form);
}

#[test]
fn route_hash_round_trips() {
    for route in [Route::Form, Route::Webhook] {
        assert_eq!(Route::from_hash(route.hash()), route);
    }
}

use leadhook_core::{
    update, upsert_by_name, AppState, Effect, Entry, EntryField, Msg, NoticeLevel, SavedSet,
    SavedWebhook, Upsert,
};

fn edit(state: AppState, index: usize, field: EntryField, value: &str) -> AppState {
    let (state, _) = update(
        state,
        Msg::FieldEdited {
            index,
            field,
            value: value.to_string(),
        },
    );
    state
}

fn persisted_sets(effects: &[Effect]) -> Vec<SavedSet> {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::PersistSavedSets(sets) => Some(sets.clone()),
            _ => None,
        })
        .expect("persist effect")
}

#[test]
fn saving_new_name_appends_and_existing_name_overwrites_in_place() {
    let (state, effects) = update(AppState::new(), Msg::SaveSetConfirmed("  alpha ".to_string()));
    assert_eq!(persisted_sets(&effects).len(), 1);
    assert_eq!(state.selected_set(), Some("alpha"));

    let (state, effects) = update(state, Msg::SaveSetConfirmed("beta".to_string()));
    assert_eq!(persisted_sets(&effects).len(), 2);

    let state = edit(state, 0, EntryField::JobRole, "Carpenter");
    let (state, effects) = update(state, Msg::SaveSetConfirmed("alpha".to_string()));
    let sets = persisted_sets(&effects);

    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].name, "alpha");
    assert_eq!(sets[0].entries[0].job_role, "Carpenter");
    assert_eq!(sets[1].name, "beta");
    assert_eq!(sets[1].entries[0].job_role, "Software Engineer");
    assert_eq!(state.saved_sets(), sets.as_slice());
}

#[test]
fn blank_set_name_is_ignored() {
    let (state, effects) = update(AppState::new(), Msg::SaveSetConfirmed("   ".to_string()));

    assert!(effects.is_empty());
    assert!(state.saved_sets().is_empty());
    assert_eq!(state.selected_set(), None);
}

#[test]
fn loading_a_set_replaces_entries_with_fresh_ids() {
    let stored = vec![
        Entry {
            job_role: "Nurse".to_string(),
            location: "Leeds".to_string(),
            linkedin_url: "https://example.com/a".to_string(),
            ..Entry::blank(1)
        },
        Entry {
            job_role: "Chef".to_string(),
            location: "Lyon".to_string(),
            linkedin_url: "https://example.com/b".to_string(),
            ..Entry::blank(1)
        },
    ];
    let (state, _) = update(
        AppState::new(),
        Msg::RestoreSaved {
            sets: vec![SavedSet {
                name: "care".to_string(),
                entries: stored,
            }],
            webhooks: Vec::new(),
        },
    );
    let startup_id = state.entries().entries()[0].id;

    let (state, effects) = update(state, Msg::SetSelected("care".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.selected_set(), Some("care"));
    let entries = state.entries().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].job_role, "Nurse");
    assert_eq!(entries[1].job_role, "Chef");
    assert_ne!(entries[0].id, entries[1].id);
    assert!(entries.iter().all(|e| e.id != startup_id));
}

#[test]
fn empty_selection_resets_to_a_single_blank_entry() {
    let (state, _) = update(AppState::new(), Msg::AddEntryClicked);
    let (state, _) = update(state, Msg::SaveSetConfirmed("two".to_string()));

    let (state, _) = update(state, Msg::SetSelected(String::new()));

    assert_eq!(state.selected_set(), None);
    assert_eq!(state.entries().len(), 1);
    let entry = &state.entries().entries()[0];
    assert_eq!(entry.job_role, "");
    assert_eq!(entry.location, "");
    assert_eq!(entry.linkedin_url, "");
}

#[test]
fn unknown_set_name_leaves_entries_alone() {
    let state = AppState::new();
    let before = state.entries().clone();

    let (mut state, effects) = update(state, Msg::SetSelected("ghost".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.entries(), &before);
    assert_eq!(state.selected_set(), Some("ghost"));
    assert_eq!(state.view().selected_set.as_deref(), Some("ghost"));
    let notices = state.take_notices();
    assert_eq!(notices[0].level, NoticeLevel::Error);
}

#[test]
fn deleting_the_selected_set_persists_and_resets() {
    let (state, _) = update(AppState::new(), Msg::SaveSetConfirmed("keep".to_string()));
    let (state, _) = update(state, Msg::SaveSetConfirmed("drop".to_string()));

    let (state, effects) = update(state, Msg::DeleteSetClicked);

    let sets = persisted_sets(&effects);
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "keep");
    assert_eq!(state.selected_set(), None);
    assert_eq!(state.entries().entries()[0].job_role, "");

    let (_state, effects) = update(state, Msg::DeleteSetClicked);
    assert!(effects.is_empty());
}

#[test]
fn upsert_reports_position() {
    let mut hooks = vec![SavedWebhook {
        name: "a".to_string(),
        url: "https://a.test".to_string(),
    }];

    let outcome = upsert_by_name(
        &mut hooks,
        SavedWebhook {
            name: "b".to_string(),
            url: "https://b.test".to_string(),
        },
    );
    assert_eq!(outcome, Upsert::Appended);

    let outcome = upsert_by_name(
        &mut hooks,
        SavedWebhook {
            name: "a".to_string(),
            url: "https://a2.test".to_string(),
        },
    );
    assert_eq!(outcome, Upsert::Replaced(0));
    assert_eq!(hooks.len(), 2);
    assert_eq!(hooks[0].url, "https://a2.test");
}

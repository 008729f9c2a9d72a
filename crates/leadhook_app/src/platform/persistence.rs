use std::path::Path;

use leadhook_core::{Msg, SavedSet, SavedWebhook};
use leadhook_engine::{FileBackend, KeyValueStore, StorageBackend};
use leadhook_logging::hook_info;

pub const SAVED_SETS_KEY: &str = "savedEntrySets";
pub const SAVED_WEBHOOKS_KEY: &str = "savedWebhooks";

/// Both saved collections, read at startup and rewritten on every change.
pub struct Persistence<B> {
    store: KeyValueStore<B>,
}

impl Persistence<FileBackend> {
    pub fn open(data_dir: &Path) -> Self {
        Self::new(FileBackend::new(data_dir))
    }
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: KeyValueStore::new(backend),
        }
    }

    pub fn restore_msg(&self) -> Msg {
        let sets: Vec<SavedSet> = self.store.read(SAVED_SETS_KEY, Vec::new());
        let webhooks: Vec<SavedWebhook> = self.store.read(SAVED_WEBHOOKS_KEY, Vec::new());
        hook_info!(
            "Restored {} saved set(s) and {} saved webhook(s)",
            sets.len(),
            webhooks.len()
        );
        Msg::RestoreSaved { sets, webhooks }
    }

    pub fn save_sets(&mut self, sets: &[SavedSet]) {
        self.store.write(SAVED_SETS_KEY, sets);
    }

    pub fn save_webhooks(&mut self, webhooks: &[SavedWebhook]) {
        self.store.write(SAVED_WEBHOOKS_KEY, webhooks);
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        self.store.backend()
    }
}

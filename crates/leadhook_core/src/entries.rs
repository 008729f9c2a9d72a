use std::collections::BTreeMap;

use thiserror::Error;

use crate::entry::{Entry, EntryField, EntryId, FieldError};

/// Upper bound on the number of entries a collection holds.
pub const MAX_ENTRIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("there is no entry #{}", .0 + 1)]
    NoSuchEntry(usize),
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Ordered, non-empty list of entries with per-entry validation errors.
///
/// Errors are keyed by [`EntryId`] so removing an entry never shifts
/// another entry's errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCollection {
    entries: Vec<Entry>,
    next_id: EntryId,
    errors: BTreeMap<EntryId, Vec<EntryField>>,
}

impl Default for EntryCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryCollection {
    /// A collection holding the startup sample entry.
    pub fn new() -> Self {
        let mut collection = Self {
            entries: Vec::new(),
            next_id: 1,
            errors: BTreeMap::new(),
        };
        let id = collection.allocate_id();
        collection.entries.push(Entry::sample(id));
        collection
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_ENTRIES
    }

    /// Appends a default entry. Returns `false` once the collection is full.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        let id = self.allocate_id();
        self.entries.push(Entry::new(id));
        true
    }

    /// Removes the entry at `index` unless it is the last one left.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.entries.len() <= 1 || index >= self.entries.len() {
            return false;
        }
        let removed = self.entries.remove(index);
        self.errors.remove(&removed.id);
        true
    }

    /// Replaces the content of `index` with the entry before it, keeping the target's id.
    pub fn copy_previous(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.entries.len() {
            return false;
        }
        let target_id = self.entries[index].id;
        self.entries[index] = self.entries[index - 1].with_id(target_id);
        true
    }

    /// Sets one field and clears the recorded error for exactly that field.
    pub fn update_field(
        &mut self,
        index: usize,
        field: EntryField,
        value: &str,
    ) -> Result<(), EditError> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(EditError::NoSuchEntry(index))?;
        entry.set(field, value)?;
        let id = entry.id;
        if let Some(fields) = self.errors.get_mut(&id) {
            fields.retain(|f| *f != field);
            if fields.is_empty() {
                self.errors.remove(&id);
            }
        }
        Ok(())
    }

    /// Records and returns the failing required fields, keyed by position.
    pub fn validate_all(&mut self) -> BTreeMap<usize, Vec<EntryField>> {
        self.errors = self
            .entries
            .iter()
            .filter_map(|entry| {
                let missing = entry.missing_fields();
                (!missing.is_empty()).then_some((entry.id, missing))
            })
            .collect();
        self.error_map()
    }

    /// Current errors, keyed by position.
    pub fn error_map(&self) -> BTreeMap<usize, Vec<EntryField>> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                self.errors
                    .get(&entry.id)
                    .map(|fields| (index, fields.clone()))
            })
            .collect()
    }

    pub fn errors_for(&self, index: usize) -> &[EntryField] {
        self.entries
            .get(index)
            .and_then(|entry| self.errors.get(&entry.id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Replaces every entry with copies of `entries` under fresh ids.
    ///
    /// An empty input resets to a single blank entry; input beyond
    /// [`MAX_ENTRIES`] is dropped.
    pub fn replace_with(&mut self, entries: &[Entry]) {
        self.errors.clear();
        if entries.is_empty() {
            self.reset();
            return;
        }
        let loaded: Vec<Entry> = entries
            .iter()
            .take(MAX_ENTRIES)
            .map(|entry| {
                let id = self.allocate_id();
                entry.with_id(id)
            })
            .collect();
        self.entries = loaded;
    }

    /// Back to a single blank entry.
    pub fn reset(&mut self) {
        self.errors.clear();
        let id = self.allocate_id();
        self.entries = vec![Entry::blank(id)];
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

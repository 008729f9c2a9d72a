use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// A record in a persisted, name-keyed list.
pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSet {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Named for SavedSet {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWebhook {
    pub name: String,
    pub url: String,
}

impl Named for SavedWebhook {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Replaced(usize),
    Appended,
}

/// Overwrites the record with the same name in place, or appends.
pub fn upsert_by_name<T: Named>(list: &mut Vec<T>, item: T) -> Upsert {
    match list.iter().position(|existing| existing.name() == item.name()) {
        Some(index) => {
            list[index] = item;
            Upsert::Replaced(index)
        }
        None => {
            list.push(item);
            Upsert::Appended
        }
    }
}

pub fn find_by_name<'a, T: Named>(list: &'a [T], name: &str) -> Option<&'a T> {
    list.iter().find(|item| item.name() == name)
}

pub fn remove_by_name<T: Named>(list: &mut Vec<T>, name: &str) -> bool {
    let before = list.len();
    list.retain(|item| item.name() != name);
    list.len() != before
}

pub fn names<T: Named>(list: &[T]) -> Vec<String> {
    list.iter().map(|item| item.name().to_string()).collect()
}

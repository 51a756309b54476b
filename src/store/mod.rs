//! Persisted record lists.
//!
//! A [`Store`] owns the in-memory list for one record type and rewrites the
//! whole JSON document under the record's storage key after every mutation.

pub mod shifts;

use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::models::location::Location;
use crate::models::shift::Shift;
use crate::ui::messages::warning;
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// Key/value document storage, the on-disk counterpart of a browser's local storage.
pub trait Storage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// Volatile storage, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub type LocationStore<'s> = Store<'s, Location>;
pub type ShiftStore<'s> = Store<'s, Shift>;

pub struct Store<'s, T: Record> {
    storage: &'s dyn Storage,
    items: Vec<T>,
}

impl<'s, T: Record> Store<'s, T> {
    /// Load the list stored under `T::STORAGE_KEY`.
    ///
    /// An absent key yields an empty store. A document that is not a JSON
    /// array is reported and treated as empty; single records that fail to
    /// decode are reported and skipped.
    pub fn load(storage: &'s dyn Storage) -> AppResult<Self> {
        let items = match storage.get_item(T::STORAGE_KEY)? {
            Some(raw) => decode_list::<T>(&raw),
            None => Vec::new(),
        };
        Ok(Self { storage, items })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Resolve a full id or a unique id prefix, as printed by the list views.
    pub fn find(&self, id_or_prefix: &str) -> AppResult<&T> {
        if let Some(r) = self.get_by_id(id_or_prefix) {
            return Ok(r);
        }

        let mut matches = self
            .items
            .iter()
            .filter(|r| !id_or_prefix.is_empty() && r.id().starts_with(id_or_prefix));

        match (matches.next(), matches.next()) {
            (Some(r), None) => Ok(r),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(id_or_prefix.to_string())),
            _ => Err(T::not_found(id_or_prefix)),
        }
    }

    /// Append a new record with a fresh id.
    pub fn add(&mut self, draft: T::Draft) -> AppResult<T> {
        let record = T::from_draft(Uuid::new_v4().to_string(), draft);
        self.items.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Merge `patch` into the record with `id`. Returns `false` (and writes
    /// nothing) when no record matches.
    pub fn update(&mut self, id: &str, patch: &T::Patch) -> AppResult<bool> {
        let Some(record) = self.items.iter_mut().find(|r| r.id() == id) else {
            return Ok(false);
        };
        record.apply_patch(patch);
        self.persist()?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> AppResult<bool> {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Overwrite the whole list (import).
    pub fn replace_all(&mut self, items: Vec<T>) -> AppResult<()> {
        self.items = items;
        self.persist()
    }

    /// Write the full list back. An empty list that was never stored stays unstored.
    fn persist(&self) -> AppResult<()> {
        if self.items.is_empty() && self.storage.get_item(T::STORAGE_KEY)?.is_none() {
            return Ok(());
        }
        let json = serde_json::to_string(&self.items)?;
        self.storage.set_item(T::STORAGE_KEY, &json)
    }
}

fn decode_list<T: Record>(raw: &str) -> Vec<T> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warning(format!(
                "Stored {} list is not valid JSON ({}); starting empty.",
                T::LABEL,
                e
            ));
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value::<T>(v) {
            Ok(r) => {
                if let Some(msg) = r.load_warning() {
                    warning(msg);
                }
                Some(r)
            }
            Err(e) => {
                warning(format!("Skipping stored {} #{}: {}", T::LABEL, i + 1, e));
                None
            }
        })
        .collect()
}

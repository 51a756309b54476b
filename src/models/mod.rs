//! Persisted records: locations and shifts, plus the drafts and patches used
//! to create and edit them.

pub mod location;
pub mod shift;

use crate::errors::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record kept in one of the persisted lists.
///
/// `Draft` is everything but the id; `Patch` carries named optional fields
/// that overwrite the stored ones field by field.
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Draft;
    type Patch;

    /// Key under which the whole list is stored.
    const STORAGE_KEY: &'static str;
    /// Human label used in messages.
    const LABEL: &'static str;

    fn id(&self) -> &str;
    fn from_draft(id: String, draft: Self::Draft) -> Self;
    fn apply_patch(&mut self, patch: &Self::Patch);
    fn not_found(id: &str) -> AppError;

    /// A problem worth reporting once when the record is loaded.
    /// The record is kept either way.
    fn load_warning(&self) -> Option<String> {
        None
    }
}

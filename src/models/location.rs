use super::Record;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// A named site where shifts happen (hospital, clinic, ...).
///
/// The aliases accept lists written by the original browser app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "endereco", default)]
    pub address: String,
    #[serde(alias = "cor")]
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewLocation {
    pub name: String,
    pub address: String,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub color: Option<String>,
}

impl LocationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.color.is_none()
    }
}

impl Record for Location {
    type Draft = NewLocation;
    type Patch = LocationPatch;

    const STORAGE_KEY: &'static str = "plantoes-locais";
    const LABEL: &'static str = "location";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewLocation) -> Self {
        Self {
            id,
            name: draft.name,
            address: draft.address,
            color: draft.color,
        }
    }

    fn apply_patch(&mut self, patch: &LocationPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(address) = &patch.address {
            self.address = address.clone();
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
    }

    fn not_found(id: &str) -> AppError {
        AppError::LocationNotFound(id.to_string())
    }
}

/// Display name for a location id; orphaned references degrade to a fallback label.
pub fn location_label<'a>(locations: &'a [Location], id: &str) -> &'a str {
    locations
        .iter()
        .find(|l| l.id == id)
        .map(|l| l.name.as_str())
        .unwrap_or("location not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_legacy_portuguese_fields() {
        let json = r##"{"id":"1","nome":"Hospital Central","endereco":"Av. Principal, 1000","cor":"#4CAF50"}"##;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.name, "Hospital Central");
        assert_eq!(loc.address, "Av. Principal, 1000");
        assert_eq!(loc.color, "#4CAF50");
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut loc = Location::from_draft(
            "a".into(),
            NewLocation {
                name: "Hospital A".into(),
                address: "Rua 1".into(),
                color: "#2196F3".into(),
            },
        );
        loc.apply_patch(&LocationPatch {
            color: Some("#4CAF50".into()),
            ..Default::default()
        });
        assert_eq!(loc.name, "Hospital A");
        assert_eq!(loc.address, "Rua 1");
        assert_eq!(loc.color, "#4CAF50");
    }

    #[test]
    fn orphan_label() {
        assert_eq!(location_label(&[], "gone"), "location not found");
    }
}

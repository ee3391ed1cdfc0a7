//! Character record as returned by the remote character API.
//!
//! # Responsibility
//! - Mirror the GraphQL `Character` selection used by list and detail views.
//!
//! # Invariants
//! - `id` is unique within one fetched list.
//! - Extended fields are display-only; filtering never reads them.

use serde::{Deserialize, Serialize};

/// Remote identifier of a character.
///
/// Kept as a type alias so signatures state which strings are identifiers.
pub type CharacterId = String;

/// Origin location of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub name: String,
}

/// Character as fetched from the remote list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub species: String,
    /// Avatar URL.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
}

impl Character {
    /// Creates a character with only the fields used by list views.
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        species: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            image: String::new(),
            status: None,
            gender: None,
            origin: None,
        }
    }

    /// Origin name for detail display, if the API returned one.
    pub fn origin_name(&self) -> Option<&str> {
        self.origin.as_ref().map(|origin| origin.name.as_str())
    }
}

/// Finds a character by identifier in a fetched list.
pub fn find_character<'a>(items: &'a [Character], id: &str) -> Option<&'a Character> {
    items.iter().find(|character| character.id == id)
}

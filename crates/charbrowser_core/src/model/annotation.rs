//! Local annotation overlay for remote characters.
//!
//! # Responsibility
//! - Define the favorite/deleted/comment record attached to a character id.
//! - Provide the single defaulting accessor shared by store and projection.
//! - Provide partial-merge semantics for annotation updates.
//!
//! # Invariants
//! - Absent entries read as `Annotation::default()`.
//! - `deleted` is a soft-delete marker; items are never removed from lists.
//! - Maps are replaced wholesale on mutation, never edited in place by callers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::character::CharacterId;

/// User-owned overlay data for one character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    pub favorite: bool,
    pub comment: String,
    /// Soft-delete marker; restorable.
    pub deleted: bool,
}

impl Annotation {
    /// Returns whether every field holds its default value.
    pub fn is_default(&self) -> bool {
        !self.favorite && !self.deleted && self.comment.is_empty()
    }

    /// Returns a copy with `patch` merged on top.
    ///
    /// Present patch fields overwrite; absent ones keep the current value.
    pub fn merged(&self, patch: &AnnotationPatch) -> Self {
        Self {
            favorite: patch.favorite.unwrap_or(self.favorite),
            comment: patch
                .comment
                .clone()
                .unwrap_or_else(|| self.comment.clone()),
            deleted: patch.deleted.unwrap_or(self.deleted),
        }
    }
}

/// Partial annotation update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationPatch {
    pub favorite: Option<bool>,
    pub deleted: Option<bool>,
    pub comment: Option<String>,
}

impl AnnotationPatch {
    pub fn favorite(value: bool) -> Self {
        Self {
            favorite: Some(value),
            ..Self::default()
        }
    }

    pub fn deleted(value: bool) -> Self {
        Self {
            deleted: Some(value),
            ..Self::default()
        }
    }

    pub fn comment(value: impl Into<String>) -> Self {
        Self {
            comment: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.favorite.is_none() && self.deleted.is_none() && self.comment.is_none()
    }
}

/// Mapping from character id to its annotation.
///
/// Serialized as a plain JSON object keyed by id. Ordered so the persisted
/// blob is deterministic for the same content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationMap {
    entries: BTreeMap<CharacterId, Annotation>,
}

impl AnnotationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit entry for `id`, if one was ever written.
    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CharacterId, &Annotation)> {
        self.entries.iter()
    }

    /// Returns a new map with `patch` merged onto the effective entry for `id`.
    ///
    /// Every other entry is carried over unchanged.
    pub fn with_patch(&self, id: &str, patch: &AnnotationPatch) -> Self {
        let next = effective_annotation(self, id).merged(patch);
        let mut entries = self.entries.clone();
        entries.insert(id.to_string(), next);
        Self { entries }
    }

    /// Compares two maps treating missing and all-default entries as equal.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        let ids = self.entries.keys().chain(other.entries.keys());
        for id in ids {
            if effective_annotation(self, id) != effective_annotation(other, id) {
                return false;
            }
        }
        true
    }
}

impl FromIterator<(CharacterId, Annotation)> for AnnotationMap {
    fn from_iter<T: IntoIterator<Item = (CharacterId, Annotation)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Returns the annotation for `id` with defaults filled for missing entries.
///
/// Every read of annotation state goes through this accessor.
pub fn effective_annotation(map: &AnnotationMap, id: &str) -> Annotation {
    map.get(id).cloned().unwrap_or_default()
}

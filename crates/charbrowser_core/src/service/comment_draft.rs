//! Staged comment edits for the detail view.
//!
//! # Invariants
//! - Editing a draft never touches the store; only `submit` writes.
//! - Drafts are not reconciled with later store changes; the last submit wins.

use crate::model::annotation::{effective_annotation, AnnotationMap};
use crate::model::character::CharacterId;
use crate::store::annotation_store::{AnnotationStore, StoreResult};
use crate::store::KeyValueStore;
use std::sync::Arc;

/// Uncommitted comment text for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    id: CharacterId,
    text: String,
}

impl CommentDraft {
    /// Starts a draft seeded with the saved comment for `id`.
    pub fn open(id: impl Into<CharacterId>, annotations: &AnnotationMap) -> Self {
        let id = id.into();
        let text = effective_annotation(annotations, &id).comment;
        Self { id, text }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the draft differs from the comment saved in `annotations`.
    pub fn is_dirty(&self, annotations: &AnnotationMap) -> bool {
        effective_annotation(annotations, &self.id).comment != self.text
    }

    /// Discards local edits in favor of the comment saved in `annotations`.
    pub fn reset(&mut self, annotations: &AnnotationMap) {
        self.text = effective_annotation(annotations, &self.id).comment;
    }

    /// Writes the draft text as the character's comment.
    pub fn submit<S: KeyValueStore>(
        &self,
        store: &mut AnnotationStore<S>,
    ) -> StoreResult<Arc<AnnotationMap>> {
        store.set_comment(&self.id, self.text.clone())
    }
}

//! Annotation store: the single owner of the annotation map.
//!
//! # Responsibility
//! - Load the persisted map once at startup, failing open to an empty map.
//! - Route every mutation through `update`, persisting the full map.
//! - Hand out immutable snapshots to readers.
//!
//! # Invariants
//! - Each mutating call performs exactly one storage write.
//! - The in-memory map is replaced only after the write succeeded.
//! - A mutation for one id never changes any other id's entry.

use super::{KeyValueStore, StorageError};
use crate::model::annotation::{effective_annotation, Annotation, AnnotationMap, AnnotationPatch};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Fixed storage key holding the serialized annotation map.
pub const ANNOTATION_STORAGE_KEY: &str = "characterExtras";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by annotation mutations.
#[derive(Debug)]
pub enum StoreError {
    Serialize(serde_json::Error),
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize annotations: {err}"),
            Self::Storage(err) => write!(f, "failed to persist annotations: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Store object owning the current annotation map.
pub struct AnnotationStore<S: KeyValueStore> {
    storage: S,
    current: Arc<AnnotationMap>,
}

impl<S: KeyValueStore> AnnotationStore<S> {
    /// Creates a store and loads persisted annotations from `storage`.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            current: Arc::new(AnnotationMap::new()),
        };
        store.current = Arc::new(store.load());
        store
    }

    /// Reads the persisted map.
    ///
    /// Missing, unreadable or malformed content yields an empty map; the
    /// failure is logged and never returned.
    pub fn load(&self) -> AnnotationMap {
        let raw = match self.storage.get(ANNOTATION_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("event=annotations_load module=store status=ok entries=0 source=empty");
                return AnnotationMap::new();
            }
            Err(err) => {
                warn!(
                    "event=annotations_load module=store status=error error_code=read_failed error={err}"
                );
                return AnnotationMap::new();
            }
        };

        match serde_json::from_str::<AnnotationMap>(&raw) {
            Ok(map) => {
                info!(
                    "event=annotations_load module=store status=ok entries={} source=storage",
                    map.len()
                );
                map
            }
            Err(err) => {
                warn!(
                    "event=annotations_load module=store status=error error_code=malformed_blob line={} column={}",
                    err.line(),
                    err.column()
                );
                AnnotationMap::new()
            }
        }
    }

    /// Current map snapshot. Later mutations never alter a returned snapshot.
    pub fn snapshot(&self) -> Arc<AnnotationMap> {
        Arc::clone(&self.current)
    }

    /// Effective annotation for `id` in the current map.
    pub fn annotation(&self, id: &str) -> Annotation {
        effective_annotation(&self.current, id)
    }

    /// Merges `patch` into `id`'s annotation, persists, and returns the new map.
    ///
    /// # Errors
    /// - Returns `StoreError` when the map cannot be serialized or written;
    ///   the current map is left untouched in that case.
    pub fn update(&mut self, id: &str, patch: AnnotationPatch) -> StoreResult<Arc<AnnotationMap>> {
        let next = self.current.with_patch(id, &patch);
        if let Err(err) = self.save(&next) {
            warn!(
                "event=annotation_update module=store status=error id={} error={}",
                id, err
            );
            return Err(err);
        }

        info!(
            "event=annotation_update module=store status=ok id={} favorite={} deleted={} comment={}",
            id,
            field_state(patch.favorite),
            field_state(patch.deleted),
            if patch.comment.is_some() { "set" } else { "kept" }
        );
        self.current = Arc::new(next);
        Ok(self.snapshot())
    }

    /// Flips `favorite` for `id` (absent counts as `false`).
    pub fn toggle_favorite(&mut self, id: &str) -> StoreResult<Arc<AnnotationMap>> {
        let favorite = self.annotation(id).favorite;
        self.update(id, AnnotationPatch::favorite(!favorite))
    }

    /// Flips the soft-delete marker for `id` (absent counts as `false`).
    pub fn toggle_deleted(&mut self, id: &str) -> StoreResult<Arc<AnnotationMap>> {
        let deleted = self.annotation(id).deleted;
        self.update(id, AnnotationPatch::deleted(!deleted))
    }

    /// Replaces the comment for `id`.
    pub fn set_comment(
        &mut self,
        id: &str,
        comment: impl Into<String>,
    ) -> StoreResult<Arc<AnnotationMap>> {
        self.update(id, AnnotationPatch::comment(comment))
    }

    fn save(&self, map: &AnnotationMap) -> StoreResult<()> {
        let blob = serde_json::to_string(map)?;
        self.storage.set(ANNOTATION_STORAGE_KEY, &blob)?;
        Ok(())
    }
}

fn field_state(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "kept",
    }
}

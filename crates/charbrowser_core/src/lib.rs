//! Core logic for the character browser.
//! Combines the remote character list with locally persisted annotations.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod notify;
pub mod service;
pub mod source;
pub mod store;
pub mod view;

pub use config::BrowserConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::annotation::{effective_annotation, Annotation, AnnotationMap, AnnotationPatch};
pub use model::character::{Character, CharacterId, Origin};
pub use navigation::{resolve_detail, DetailView, Route};
pub use notify::{LogNotifier, Notice, NoticeKind, Notifier, RecordingNotifier};
pub use service::browser_session::{BrowserSession, CardView, ListSection, ListView};
pub use service::comment_draft::CommentDraft;
pub use source::{
    decode_characters_response, CharacterSource, FetchState, JsonFileCharacterSource,
    SourceError, StaticCharacterSource,
};
pub use store::annotation_store::{AnnotationStore, StoreError, ANNOTATION_STORAGE_KEY};
pub use store::memory_kv::MemoryKeyValueStore;
pub use store::sqlite_kv::SqliteKeyValueStore;
pub use store::{KeyValueStore, StorageError};
pub use view::params::{SortOrder, SpeciesFilter, TypeFilter, ViewParamError, ViewParams};
pub use view::projection::{project, Projection};

/// Health-check reply printed by `charbrowser ping`.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

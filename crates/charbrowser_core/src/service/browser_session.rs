//! Browser session: the state behind the list sidebar and detail pane.
//!
//! # Responsibility
//! - Hold the last fetched list, the view parameters and the annotation store.
//! - Expose list, detail, favorite, delete/restore and comment use-cases.
//!
//! # Invariants
//! - Every annotation change goes through the owned `AnnotationStore`.
//! - Delete/restore always emits exactly one notice after a successful write.

use crate::model::annotation::{effective_annotation, AnnotationMap};
use crate::model::character::{find_character, Character};
use crate::navigation::{resolve_detail, DetailView};
use crate::notify::{Notice, Notifier};
use crate::service::comment_draft::CommentDraft;
use crate::source::{CharacterSource, FetchState};
use crate::store::annotation_store::{AnnotationStore, StoreResult};
use crate::store::KeyValueStore;
use crate::view::params::{SortOrder, SpeciesFilter, TypeFilter, ViewParams};
use crate::view::projection::{project, Projection};
use log::info;
use std::sync::Arc;

/// Section title for favorites in the grouped view.
pub const FAVORITES_SECTION_TITLE: &str = "Favorite Characters";
/// Section title for the remaining characters in the grouped view.
pub const OTHERS_SECTION_TITLE: &str = "All Characters";

/// One row of the character list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub character: &'a Character,
    pub favorite: bool,
    /// Card offers "restore" instead of favorite/delete.
    pub restore_mode: bool,
}

/// Titled (or untitled) run of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSection<'a> {
    pub title: Option<&'static str>,
    pub cards: Vec<CardView<'a>>,
}

/// Render-ready list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub loading: bool,
    pub error: Option<String>,
    pub sections: Vec<ListSection<'a>>,
}

/// Session wiring storage, remote source and notifications.
pub struct BrowserSession<S: KeyValueStore, C: CharacterSource, N: Notifier> {
    store: AnnotationStore<S>,
    source: C,
    notifier: N,
    fetch: FetchState,
    params: ViewParams,
}

impl<S: KeyValueStore, C: CharacterSource, N: Notifier> BrowserSession<S, C, N> {
    /// Creates a session; the list stays in loading state until `refresh`.
    pub fn new(store: AnnotationStore<S>, source: C, notifier: N) -> Self {
        Self {
            store,
            source,
            notifier,
            fetch: FetchState::loading(),
            params: ViewParams::default(),
        }
    }

    /// Fetches the list again and replaces the previous result.
    pub fn refresh(&mut self) -> &FetchState {
        self.fetch = self.source.fetch_list();
        info!(
            "event=session_refresh module=service status={} count={}",
            if self.fetch.error.is_some() { "error" } else { "ok" },
            self.fetch.items.len()
        );
        &self.fetch
    }

    pub fn items(&self) -> &[Character] {
        &self.fetch.items
    }

    pub fn store(&self) -> &AnnotationStore<S> {
        &self.store
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn set_params(&mut self, params: ViewParams) {
        self.params = params;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.params.search_term = term.into();
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.params.type_filter = filter;
    }

    pub fn set_species_filter(&mut self, filter: SpeciesFilter) {
        self.params.species_filter = filter;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.params.sort_order = order;
    }

    /// Projects the current list through the current annotations and params.
    pub fn project(&self) -> Projection<'_> {
        let annotations = self.store.snapshot();
        project(&self.fetch.items, &annotations, &self.params)
    }

    /// Builds the sectioned list for rendering.
    ///
    /// The grouped view only includes sections that have cards.
    pub fn list_view(&self) -> ListView<'_> {
        if self.fetch.loading || self.fetch.error.is_some() {
            return ListView {
                loading: self.fetch.loading,
                error: self.fetch.error.clone(),
                sections: Vec::new(),
            };
        }

        let restore_mode = self.params.type_filter == TypeFilter::Deleted;
        let annotations = self.store.snapshot();
        let sections = match project(&self.fetch.items, &annotations, &self.params) {
            Projection::Grouped { favorites, others } => [
                (FAVORITES_SECTION_TITLE, favorites),
                (OTHERS_SECTION_TITLE, others),
            ]
            .into_iter()
            .filter(|(_, group)| !group.is_empty())
            .map(|(title, group)| ListSection {
                title: Some(title),
                cards: cards(group, &annotations, restore_mode),
            })
            .collect(),
            Projection::Flat(items) => vec![ListSection {
                title: None,
                cards: cards(items, &annotations, restore_mode),
            }],
        };

        ListView {
            loading: false,
            error: None,
            sections,
        }
    }

    pub fn toggle_favorite(&mut self, id: &str) -> StoreResult<Arc<AnnotationMap>> {
        self.store.toggle_favorite(id)
    }

    /// Soft-deletes or restores `id` and notifies the user of the outcome.
    pub fn toggle_deleted(&mut self, id: &str) -> StoreResult<Arc<AnnotationMap>> {
        let was_deleted = self.store.annotation(id).deleted;
        let map = self.store.toggle_deleted(id)?;

        let name = find_character(&self.fetch.items, id)
            .map_or(id, |character| character.name.as_str());
        let notice = if was_deleted {
            Notice::restored(name)
        } else {
            Notice::deleted(name)
        };
        self.notifier.notify(notice);
        Ok(map)
    }

    /// Detail view for `id` against the current list.
    pub fn detail(&self, id: &str) -> DetailView<'_> {
        resolve_detail(&self.fetch.items, &self.store.snapshot(), id)
    }

    pub fn open_comment_draft(&self, id: &str) -> CommentDraft {
        CommentDraft::open(id, &self.store.snapshot())
    }

    pub fn submit_comment(&mut self, draft: &CommentDraft) -> StoreResult<Arc<AnnotationMap>> {
        draft.submit(&mut self.store)
    }
}

fn cards<'a>(
    group: Vec<&'a Character>,
    annotations: &AnnotationMap,
    restore_mode: bool,
) -> Vec<CardView<'a>> {
    group
        .into_iter()
        .map(|character| CardView {
            character,
            favorite: effective_annotation(annotations, &character.id).favorite,
            restore_mode,
        })
        .collect()
}

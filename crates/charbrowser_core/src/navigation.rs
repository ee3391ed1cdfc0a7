//! Routes between the list and character detail views.
//!
//! # Responsibility
//! - Map character ids to detail routes and back.
//! - Resolve a detail route against the current list and annotations.
//!
//! # Invariants
//! - A missing character is a `NotFound` view with a way back, not an error.

use crate::model::annotation::{effective_annotation, Annotation, AnnotationMap};
use crate::model::character::{find_character, Character, CharacterId};
use once_cell::sync::Lazy;
use regex::Regex;

static CHARACTER_ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/character/([^/?#]+)/?$").expect("valid character route regex"));

/// Navigable view location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Character(CharacterId),
}

impl Route {
    /// Parses a path such as `/` or `/character/42`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Self::Home);
        }
        CHARACTER_ROUTE_RE
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|id| Self::Character(id.as_str().to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Character(id) => format!("/character/{id}"),
        }
    }
}

/// Detail view state for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView<'a> {
    Found {
        character: &'a Character,
        annotation: Annotation,
    },
    NotFound {
        id: CharacterId,
        /// Recovery target.
        back: Route,
    },
}

/// Looks up `id` in `items` and pairs it with its effective annotation.
pub fn resolve_detail<'a>(
    items: &'a [Character],
    annotations: &AnnotationMap,
    id: &str,
) -> DetailView<'a> {
    match find_character(items, id) {
        Some(character) => DetailView::Found {
            character,
            annotation: effective_annotation(annotations, id),
        },
        None => DetailView::NotFound {
            id: id.to_string(),
            back: Route::Home,
        },
    }
}

//! Remote character list source.
//!
//! # Responsibility
//! - Define the fetch contract consumed by the browser session.
//! - Decode the GraphQL `characters` response envelope.
//!
//! # Invariants
//! - A failed fetch never carries items; consumers see an empty list.
//! - Sources perform no filtering or sorting.

use crate::model::character::Character;
use log::{info, warn};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure while obtaining the character list.
#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode(serde_json::Error),
    /// The API answered with GraphQL `errors`.
    Remote(Vec<String>),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "invalid characters response: {err}"),
            Self::Remote(messages) => write!(f, "remote error: {}", messages.join("; ")),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
            Self::Remote(_) => None,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Result of one list fetch, shaped like a UI query hook result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub items: Vec<Character>,
    pub loading: bool,
    /// User-facing error message when the fetch failed.
    pub error: Option<String>,
}

impl FetchState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn ready(items: Vec<Character>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: Some(message.into()),
        }
    }
}

impl From<SourceResult<Vec<Character>>> for FetchState {
    fn from(value: SourceResult<Vec<Character>>) -> Self {
        match value {
            Ok(items) => Self::ready(items),
            Err(err) => Self::failed(err.to_string()),
        }
    }
}

/// Provider of the full character list.
pub trait CharacterSource {
    fn fetch_list(&self) -> FetchState;
}

/// Source serving a fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticCharacterSource {
    items: Vec<Character>,
}

impl StaticCharacterSource {
    pub fn new(items: Vec<Character>) -> Self {
        Self { items }
    }
}

impl CharacterSource for StaticCharacterSource {
    fn fetch_list(&self) -> FetchState {
        FetchState::ready(self.items.clone())
    }
}

/// Source reading a saved GraphQL response from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileCharacterSource {
    path: PathBuf,
}

impl JsonFileCharacterSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read(&self) -> SourceResult<Vec<Character>> {
        let body = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        decode_characters_response(&body)
    }
}

impl CharacterSource for JsonFileCharacterSource {
    fn fetch_list(&self) -> FetchState {
        let result = self.read();
        match &result {
            Ok(items) => info!(
                "event=characters_fetch module=source status=ok source=file count={}",
                items.len()
            ),
            Err(err) => warn!(
                "event=characters_fetch module=source status=error source=file error={err}"
            ),
        }
        result.into()
    }
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(default)]
    characters: Option<CharactersPage>,
}

#[derive(Deserialize)]
struct CharactersPage {
    #[serde(default)]
    results: Option<Vec<Character>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// Decodes a GraphQL `characters` query response body.
///
/// Missing `data`, `characters` or `results` decode as an empty list.
///
/// # Errors
/// - `SourceError::Remote` when the response carries GraphQL errors.
/// - `SourceError::Decode` when the body is not a valid response.
pub fn decode_characters_response(body: &str) -> SourceResult<Vec<Character>> {
    let envelope: ResponseEnvelope = serde_json::from_str(body)?;
    if !envelope.errors.is_empty() {
        return Err(SourceError::Remote(
            envelope.errors.into_iter().map(|err| err.message).collect(),
        ));
    }

    Ok(envelope
        .data
        .and_then(|data| data.characters)
        .and_then(|page| page.results)
        .unwrap_or_default())
}

//! List view parameters and their string forms.
//!
//! # Invariants
//! - Wire names are stable: `all|starred|others|deleted` and `asc|desc`.
//! - Species filters compare case-insensitively; `all` (any case) disables
//!   the filter.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which annotation partition a list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    /// Every non-deleted item, grouped into favorites and others.
    #[default]
    All,
    /// Non-deleted favorites.
    Starred,
    /// Non-deleted non-favorites.
    Others,
    /// Soft-deleted items only.
    Deleted,
}

impl TypeFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Starred => "starred",
            Self::Others => "others",
            Self::Deleted => "deleted",
        }
    }
}

impl Display for TypeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = ViewParamError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "starred" => Ok(Self::Starred),
            "others" => Ok(Self::Others),
            "deleted" => Ok(Self::Deleted),
            other => Err(ViewParamError::UnknownTypeFilter(other.to_string())),
        }
    }
}

/// Species restriction for list views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SpeciesFilter {
    #[default]
    All,
    /// Exact species name, compared case-insensitively.
    Exact(String),
}

impl SpeciesFilter {
    /// Returns whether `species` passes this filter.
    pub fn matches(&self, species: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(wanted) => species.to_lowercase() == wanted.to_lowercase(),
        }
    }
}

impl Display for SpeciesFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Exact(species) => f.write_str(species),
        }
    }
}

impl FromStr for SpeciesFilter {
    type Err = ViewParamError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ViewParamError::EmptySpecies);
        }
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Ok(Self::Exact(trimmed.to_string()))
    }
}

/// Name ordering direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ViewParamError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(ViewParamError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// Full parameter set for one list projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    /// Case-insensitive substring of the name; empty matches everything.
    pub search_term: String,
    pub type_filter: TypeFilter,
    pub species_filter: SpeciesFilter,
    pub sort_order: SortOrder,
}

/// Invalid textual view parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewParamError {
    UnknownTypeFilter(String),
    UnknownSortOrder(String),
    EmptySpecies,
}

impl Display for ViewParamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTypeFilter(value) => write!(
                f,
                "unsupported type filter `{value}`; expected all|starred|others|deleted"
            ),
            Self::UnknownSortOrder(value) => {
                write!(f, "unsupported sort order `{value}`; expected asc|desc")
            }
            Self::EmptySpecies => write!(f, "species filter cannot be empty"),
        }
    }
}

impl Error for ViewParamError {}

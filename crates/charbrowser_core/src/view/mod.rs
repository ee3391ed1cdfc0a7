//! View projection over the fetched character list.
//!
//! # Responsibility
//! - Parse and hold list view parameters (search, type, species, order).
//! - Combine remote items with the annotation overlay into display groups.
//!
//! # Invariants
//! - Projection is pure: inputs are borrowed, never mutated.
//! - Soft-deleted items only ever appear in the `deleted` view.

pub mod collate;
pub mod params;
pub mod projection;

//! Domain model for remote characters and their local overlay.
//!
//! # Responsibility
//! - Define the read-only character record decoded from the remote API.
//! - Define the per-character annotation overlay owned by this crate.
//!
//! # Invariants
//! - Characters are identified by the remote string `id`, never re-keyed.
//! - An all-default annotation is equivalent to a missing one.

pub mod annotation;
pub mod character;

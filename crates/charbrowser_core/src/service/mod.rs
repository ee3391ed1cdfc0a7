//! Use-case services on top of the store, source and projection.
//!
//! # Responsibility
//! - Orchestrate list/detail/annotation flows for UI front ends.
//! - Keep front ends decoupled from storage and fetch details.

pub mod browser_session;
pub mod comment_draft;

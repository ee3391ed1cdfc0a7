//! Fire-and-forget user notifications.
//!
//! Notices are informational only; no caller branches on their delivery.

use log::{info, warn};
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Notice shown after soft-deleting a character.
    pub fn deleted(name: &str) -> Self {
        Self::error(format!("Deleted {name}"))
    }

    /// Notice shown after restoring a soft-deleted character.
    pub fn restored(name: &str) -> Self {
        Self::success(format!("Restored {name}"))
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Forwards notices to the log facade.
///
/// Only the notice kind and length are logged, since messages carry names.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => info!(
                "event=notice module=notify kind=success message_len={}",
                notice.message.chars().count()
            ),
            NoticeKind::Error => warn!(
                "event=notice module=notify kind=error message_len={}",
                notice.message.chars().count()
            ),
        }
    }
}

/// Keeps every notice in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

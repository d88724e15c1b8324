//! Toast Queue
//!
//! Transient user-facing notifications.

use std::collections::VecDeque;

/// Upper bound on simultaneously visible toasts
pub const MAX_VISIBLE_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Queue a toast, dropping the oldest when full. Returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if self.toasts.len() == MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.iter().cloned().collect()
    }

    /// Id of the most recently pushed toast, 0 before the first push
    pub fn last_id(&self) -> u64 {
        self.next_id
    }

    /// Ids of visible toasts pushed after `id`
    pub fn ids_after(&self, id: u64) -> Vec<u64> {
        self.toasts.iter().map(|t| t.id).filter(|&t| t > id).collect()
    }
}

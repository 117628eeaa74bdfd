//! Ephemeral toast notification queue.
//!
//! DESIGN
//! ======
//! The queue is plain data; `components::toast_host` renders it and schedules
//! each toast's removal after its own duration. Pages only push.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::TOAST_TIMEOUT_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// CSS modifier suffix for `toast--{suffix}`.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

/// Visible toasts in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id. Ids strictly increase.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message: message.into(), kind, duration_ms });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Success, TOAST_TIMEOUT_MS)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Error, TOAST_TIMEOUT_MS)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Warning, TOAST_TIMEOUT_MS)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Info, TOAST_TIMEOUT_MS)
    }

    /// Dismiss a toast. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

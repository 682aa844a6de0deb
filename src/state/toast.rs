//! Transient user-facing notifications.
//!
//! Login outcomes surface here rather than through blocking error UI. The
//! queue itself is plain data; display and auto-dismiss live in the
//! `ToastHost` component.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of active toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Push a success notification, returning its id.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, message.into())
    }

    /// Push an error notification, returning its id.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message.into())
    }

    fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, level, message });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored, so a manual dismiss
    /// racing the auto-dismiss timer is harmless.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Active toasts in arrival order.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

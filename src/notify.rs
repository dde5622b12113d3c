//! Celebration and notification hooks
//!
//! Managers announce completions, level-ups and XP gains through a
//! [`Notifier`]. Every method has a no-op default, so a host only implements
//! the hooks it actually has.

use std::fmt;
use std::sync::Mutex;

/// Toast style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Notifier: Send + Sync {
    fn show_toast(&self, _message: &str, _kind: ToastKind) {}

    fn trigger_confetti(&self) {}
}

/// Host without any UI hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {}

/// Writes notifications to the `tracing` log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        tracing::info!(kind = kind.as_str(), "{}", message);
    }

    fn trigger_confetti(&self) {
        tracing::info!("🎊 confetti");
    }
}

/// A captured notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Toast { message: String, kind: ToastKind },
    Confetti,
}

/// Captures every notification in order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Messages of all captured toasts
    pub fn toasts(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Toast { message, .. } => Some(message.clone()),
                Notification::Confetti => None,
            })
            .collect()
    }

    pub fn confetti_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|n| matches!(n, Notification::Confetti))
            .count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        self.lock().push(Notification::Toast {
            message: message.to_string(),
            kind,
        });
    }

    fn trigger_confetti(&self) {
        self.lock().push(Notification::Confetti);
    }
}

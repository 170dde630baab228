//! Toast notifications
//!
//! Generic `{ title, description, variant }` display events, fire and
//! forget. The host view supplies the actual rendering through the
//! [`Notify`] seam; this crate ships a tracing-backed fallback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual flavor of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Info,
    Success,
    Error,
}

impl fmt::Display for ToastVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastVariant::Info => write!(f, "info"),
            ToastVariant::Success => write!(f, "success"),
            ToastVariant::Error => write!(f, "error"),
        }
    }
}

/// One transient notification event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Info,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Error,
        }
    }
}

/// Notification surface supplied by the host view.
///
/// Implementations must not fail; a toast that cannot be shown is
/// dropped silently.
pub trait Notify {
    fn notify(&mut self, toast: Toast);
}

/// Fallback notifier that writes toasts to the tracing log.
///
/// Used by hosts without a visual notification surface (and as a quiet
/// default in tests).
#[derive(Debug, Default)]
pub struct TracingNotify;

impl Notify for TracingNotify {
    fn notify(&mut self, toast: Toast) {
        match toast.variant {
            ToastVariant::Error => {
                tracing::warn!(title = %toast.title, description = %toast.description, "toast")
            }
            _ => {
                tracing::info!(
                    variant = %toast.variant,
                    title = %toast.title,
                    description = %toast.description,
                    "toast"
                )
            }
        }
    }
}

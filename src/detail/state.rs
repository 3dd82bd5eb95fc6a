//! Phases of a product shown in detail, and the notices left for the user.

use std::fmt::Display;

/// Where a [`DetailSynchronizer`](super::DetailSynchronizer) is in its lifecycle.
///
/// ```text
/// Unloaded -> Loading -> Loaded | LoadError | NotFound
/// Loaded -> Editing -> Saving -> Loaded | SaveError
/// Loaded -> Saving -> Loaded | SaveError          (comment add/remove)
/// ```
///
/// `SaveError` still holds the last confirmed product and accepts the same actions as
/// `Loaded`. A local change is only committed when the server confirms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Unloaded,
    Loading,
    Loaded,
    LoadError,
    NotFound,
    Editing,
    Saving,
    SaveError,
}

impl DetailPhase {
    /// True when a confirmed product is held and actions may start.
    pub fn is_ready(self) -> bool {
        matches!(self, DetailPhase::Loaded | DetailPhase::SaveError)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DetailPhase::Unloaded => "unloaded",
            DetailPhase::Loading => "loading",
            DetailPhase::Loaded => "loaded",
            DetailPhase::LoadError => "load-error",
            DetailPhase::NotFound => "not-found",
            DetailPhase::Editing => "editing",
            DetailPhase::Saving => "saving",
            DetailPhase::SaveError => "save-error",
        }
    }
}

impl Display for DetailPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient message for a toast or snackbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

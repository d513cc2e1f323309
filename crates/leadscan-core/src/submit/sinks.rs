//! Outbound collaborator traits for operator feedback.

/// Severity of an operator notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The attempt created a record.
    Success,
    /// The attempt failed.
    Error,
}

/// A clickable link attached to a notification.
#[derive(Debug, Clone)]
pub struct Link {
    /// Link text.
    pub label: String,
    /// Link target.
    pub url: String,
}

/// End-user feedback collaborator (a toast in the original deployment,
/// styled console output in the CLI).
pub trait Notifier {
    /// Show a short label with the given severity and an optional link.
    fn notify(&self, label: &str, severity: Severity, link: Option<&Link>);
}

/// Navigation collaborator: opens the record creation form when the
/// operator opts out of scanning entirely.
pub trait Navigator {
    /// Signal the open-creation-form intent for a record type.
    fn open_create_form(&self, object_type: &str);
}

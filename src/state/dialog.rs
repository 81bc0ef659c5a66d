/// Confirmation and alert dialog descriptors
///
/// Two independent single-instance dialogs. The confirmation dialog
/// carries its pending mutation as a tagged variant rather than a
/// callback; the application dispatches the matching network task when
/// the user confirms. The alert dialog is generation-counted so a
/// replaced or dismissed alert invalidates any auto-close timer that is
/// still in flight.

use super::product::ProductDraft;

/// The mutation a confirmation dialog is guarding
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    Create(ProductDraft),
    Update(u64, ProductDraft),
    Delete(u64),
}

#[derive(Debug, Default)]
pub enum ConfirmState {
    #[default]
    Closed,
    Open {
        title: String,
        message: String,
        danger: bool,
        action: PendingAction,
    },
}

impl ConfirmState {
    /// Open (or replace) the confirmation dialog
    pub fn open(&mut self, title: &str, message: String, danger: bool, action: PendingAction) {
        *self = ConfirmState::Open {
            title: title.to_string(),
            message,
            danger,
            action,
        };
    }

    /// Close the dialog, discarding any pending action
    pub fn close(&mut self) {
        *self = ConfirmState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmState::Open { .. })
    }

    pub fn action(&self) -> Option<&PendingAction> {
        match self {
            ConfirmState::Open { action, .. } => Some(action),
            ConfirmState::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertContent {
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
}

/// The single alert dialog slot
///
/// `generation` increments on every `show`; an auto-close timer captures
/// the generation it was started for and only closes the alert if it is
/// still the current one.
#[derive(Debug, Default)]
pub struct AlertState {
    content: Option<AlertContent>,
    generation: u64,
}

impl AlertState {
    /// Show an alert, replacing any open one. Returns the generation
    /// token an auto-close timer should report back with.
    pub fn show(&mut self, title: &str, message: String, kind: AlertKind) -> u64 {
        self.generation += 1;
        self.content = Some(AlertContent {
            title: title.to_string(),
            message,
            kind,
        });
        self.generation
    }

    /// Explicit dismissal by the user
    pub fn dismiss(&mut self) {
        self.content = None;
    }

    /// Auto-close timer fired; ignored when the alert was replaced or
    /// already dismissed
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.content = None;
        }
    }

    pub fn current(&self) -> Option<&AlertContent> {
        self.content.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelling_confirm_discards_pending_action() {
        let mut confirm = ConfirmState::default();
        assert!(!confirm.is_open());

        confirm.open(
            "Hapus Produk",
            "Produk #3 akan dihapus. Yakin?".into(),
            true,
            PendingAction::Delete(3),
        );
        assert!(confirm.is_open());
        assert_eq!(confirm.action(), Some(&PendingAction::Delete(3)));

        confirm.close();
        assert!(!confirm.is_open());
        assert_eq!(confirm.action(), None);
    }

    #[test]
    fn opening_confirm_overwrites_previous_descriptor() {
        let mut confirm = ConfirmState::default();
        confirm.open("Hapus Produk", "Yakin?".into(), true, PendingAction::Delete(1));
        confirm.open("Hapus Produk", "Yakin?".into(), true, PendingAction::Delete(2));

        assert_eq!(confirm.action(), Some(&PendingAction::Delete(2)));
    }

    #[test]
    fn alert_timer_token_expires_only_current_alert() {
        let mut alert = AlertState::default();
        let first = alert.show("Sukses", "Data berhasil disimpan".into(), AlertKind::Success);

        // A new alert replaces the content and invalidates the old timer
        let second = alert.show("Sukses", "Data berhasil dihapus".into(), AlertKind::Info);
        alert.expire(first);
        assert!(alert.current().is_some());

        alert.expire(second);
        assert!(alert.current().is_none());
    }

    #[test]
    fn stale_timer_after_dismissal_is_harmless() {
        let mut alert = AlertState::default();
        let gen = alert.show("Informasi", "Pesan".into(), AlertKind::Info);

        alert.dismiss();
        assert!(alert.current().is_none());

        // Timer fires after the user already closed the dialog
        alert.expire(gen);
        assert!(alert.current().is_none());
    }
}

//! New Alias dialog - binds a user-chosen alias to a wallet address.
//!
//! The state machine lives apart from the egui rendering so it can be
//! driven directly in tests: `note_edit`, `save` and `cancel` are the
//! transitions, `render` only wires widgets to them.

use eframe::egui;

use crate::store::AliasStore;
use crate::validation;

use super::DialogAction;

/// Lifecycle of the dialog. `Saving` is only held while the store call is
/// in flight; a rejected save drops back to `Editing` with the dialog
/// still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    Editing,
    Saving,
    ClosedSaved,
    ClosedCancelled,
}

/// Self-contained New Alias dialog state.
///
/// The draft (both fields and the status line) exists only while the
/// dialog is open; the `DialogManager` discards the whole struct once it
/// reaches a closed state.
pub struct NewAliasDialog {
    /// The address being entered
    pub address_input: String,
    /// The alias being entered
    pub alias_input: String,
    /// Status line, written by validation; empty when there is nothing to report
    status: String,
    state: DialogState,
}

impl NewAliasDialog {
    /// Create a new dialog with empty fields.
    pub fn new() -> Self {
        Self {
            address_input: String::new(),
            alias_input: String::new(),
            status: String::new(),
            state: DialogState::Open,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Check if the dialog is open (i.e. not yet saved or cancelled)
    pub fn is_open(&self) -> bool {
        matches!(
            self.state,
            DialogState::Open | DialogState::Editing | DialogState::Saving
        )
    }

    /// Record a keystroke in either field. Never closes the dialog.
    pub fn note_edit(&mut self) {
        if self.state == DialogState::Open {
            self.state = DialogState::Editing;
        }
    }

    /// Attempt to save the current draft.
    ///
    /// Runs the local non-empty pre-checks first; only if they pass is the
    /// store called. Any rejection lands in the status line and the dialog
    /// stays open with the fields untouched.
    pub fn save(&mut self, store: &mut dyn AliasStore) -> Option<DialogAction> {
        if !self.is_open() {
            return None;
        }

        self.state = DialogState::Saving;

        let address = self.address_input.trim().to_string();
        let alias = self.alias_input.trim().to_string();

        let pre_check = validation::validate_address_text(&address)
            .and_then(|_| validation::validate_alias_text(&alias));
        if let Err(reason) = pre_check {
            self.status = reason;
            self.state = DialogState::Editing;
            return None;
        }

        match store.validate_and_store(&address, &alias) {
            Ok(()) => {
                self.state = DialogState::ClosedSaved;
                Some(DialogAction::AliasSaved { address, alias })
            }
            Err(err) => {
                self.status = err.to_string();
                self.state = DialogState::Editing;
                None
            }
        }
    }

    /// Close the dialog without saving. No validation runs.
    pub fn cancel(&mut self) {
        if self.is_open() {
            self.state = DialogState::ClosedCancelled;
        }
    }

    /// Render the dialog.
    /// Returns `Some(DialogAction::AliasSaved)` if the store accepted the pair.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        store: &mut dyn AliasStore,
    ) -> Option<DialogAction> {
        if !self.is_open() {
            return None;
        }

        let mut action: Option<DialogAction> = None;
        let mut still_open = true;

        egui::Window::new("New Alias")
            .open(&mut still_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Address:");
                let address_response = ui.add(
                    egui::TextEdit::singleline(&mut self.address_input).desired_width(240.0),
                );
                if address_response.changed() {
                    self.note_edit();
                }

                ui.add_space(4.0);

                ui.label("Alias:");
                let alias_response =
                    ui.add(egui::TextEdit::singleline(&mut self.alias_input).desired_width(240.0));
                if alias_response.changed() {
                    self.note_edit();
                }

                if !self.status.is_empty() {
                    ui.add_space(4.0);
                    ui.colored_label(egui::Color32::RED, &self.status);
                }

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action = self.save(store);
                    }
                    if ui.button("Cancel").clicked() {
                        self.cancel();
                    }
                });

                // Also submit on Enter key
                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = self.save(store);
                }

                // Close on Escape
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.cancel();
                }
            });

        // The window's close button counts as a cancel
        if !still_open {
            self.cancel();
        }

        action
    }
}

impl Default for NewAliasDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    /// Store double that records every call and returns a fixed result.
    struct MockStore {
        calls: Vec<(String, String)>,
        result: Result<(), StoreError>,
    }

    impl MockStore {
        fn accepting() -> Self {
            Self {
                calls: Vec::new(),
                result: Ok(()),
            }
        }

        fn rejecting(message: &str) -> Self {
            Self {
                calls: Vec::new(),
                result: Err(StoreError::new(message)),
            }
        }
    }

    impl AliasStore for MockStore {
        fn validate_and_store(&mut self, address: &str, alias: &str) -> Result<(), StoreError> {
            self.calls.push((address.to_string(), alias.to_string()));
            self.result.clone()
        }
    }

    fn type_into(dialog: &mut NewAliasDialog, address: &str, alias: &str) {
        dialog.address_input = address.to_string();
        dialog.alias_input = alias.to_string();
        if !address.is_empty() || !alias.is_empty() {
            dialog.note_edit();
        }
    }

    #[test]
    fn test_dialog_opens_empty_and_editable() {
        let dialog = NewAliasDialog::new();
        assert_eq!(dialog.state(), DialogState::Open);
        assert!(dialog.is_open());
        assert!(dialog.address_input.is_empty());
        assert!(dialog.alias_input.is_empty());
        assert!(dialog.status().is_empty());
    }

    #[test]
    fn test_keystrokes_move_to_editing_without_closing() {
        let mut dialog = NewAliasDialog::new();
        type_into(&mut dialog, "1A", "b");
        assert_eq!(dialog.state(), DialogState::Editing);
        assert!(dialog.is_open());
    }

    #[test]
    fn test_cancel_after_typing_never_calls_store() {
        let mut store = MockStore::accepting();
        let mut dialog = NewAliasDialog::new();

        type_into(&mut dialog, "1A2b3C", "bob");
        dialog.cancel();

        assert_eq!(dialog.state(), DialogState::ClosedCancelled);
        assert!(!dialog.is_open());
        assert!(store.calls.is_empty());

        // Save after close is a no-op
        assert!(dialog.save(&mut store).is_none());
        assert!(store.calls.is_empty());
    }

    #[test]
    fn test_save_with_empty_address_stays_open() {
        let mut store = MockStore::accepting();
        let mut dialog = NewAliasDialog::new();

        type_into(&mut dialog, "", "bob");
        let action = dialog.save(&mut store);

        assert!(action.is_none());
        assert!(store.calls.is_empty());
        assert!(dialog.is_open());
        assert_eq!(dialog.state(), DialogState::Editing);
        assert!(!dialog.status().is_empty());
    }

    #[test]
    fn test_save_with_empty_alias_stays_open() {
        let mut store = MockStore::accepting();
        let mut dialog = NewAliasDialog::new();

        type_into(&mut dialog, "1A2b3C", "   ");
        let action = dialog.save(&mut store);

        assert!(action.is_none());
        assert!(store.calls.is_empty());
        assert!(dialog.is_open());
        assert!(!dialog.status().is_empty());
    }

    #[test]
    fn test_successful_save_closes_exactly_once() {
        let mut store = MockStore::accepting();
        let mut dialog = NewAliasDialog::new();

        type_into(&mut dialog, "1A2b3C", "bob");
        let action = dialog.save(&mut store);

        assert_eq!(
            action,
            Some(DialogAction::AliasSaved {
                address: "1A2b3C".to_string(),
                alias: "bob".to_string(),
            })
        );
        assert_eq!(dialog.state(), DialogState::ClosedSaved);
        assert!(!dialog.is_open());
        assert_eq!(store.calls, vec![("1A2b3C".to_string(), "bob".to_string())]);

        // A second activation must not reach the store again
        assert!(dialog.save(&mut store).is_none());
        assert_eq!(store.calls.len(), 1);
    }

    #[test]
    fn test_store_rejection_keeps_fields_and_shows_message() {
        let mut store = MockStore::rejecting("alias already exists");
        let mut dialog = NewAliasDialog::new();

        type_into(&mut dialog, "1A2b3C", "bob");
        let action = dialog.save(&mut store);

        assert!(action.is_none());
        assert!(dialog.is_open());
        assert_eq!(dialog.state(), DialogState::Editing);
        assert_eq!(dialog.status(), "alias already exists");
        assert_eq!(dialog.address_input, "1A2b3C");
        assert_eq!(dialog.alias_input, "bob");
        assert_eq!(store.calls.len(), 1);
    }

    #[test]
    fn test_recovery_after_rejection() {
        let mut rejecting = MockStore::rejecting("alias already exists");
        let mut dialog = NewAliasDialog::new();

        type_into(&mut dialog, "1A2b3C", "bob");
        assert!(dialog.save(&mut rejecting).is_none());

        // User edits the alias and tries again against an accepting store
        let mut accepting = MockStore::accepting();
        dialog.alias_input = "bob2".to_string();
        dialog.note_edit();

        let action = dialog.save(&mut accepting);
        assert!(action.is_some());
        assert_eq!(dialog.state(), DialogState::ClosedSaved);
    }
}

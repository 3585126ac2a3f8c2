//! Dialog management for centralized dialog state and rendering.
//!
//! Consolidates dialog state into a single DialogManager, keeping the
//! ShellApp struct small and enforcing the one-modal-at-a-time rule.

use eframe::egui::Context;

use crate::store::AliasStore;
use crate::ui::dialogs::{DialogAction, NewAliasDialog};

/// Manages the shell's dialogs in one place.
///
/// Uses the Option<Dialog> pattern where None = closed, Some = open.
#[derive(Default)]
pub struct DialogManager {
    pub new_alias_dialog: Option<NewAliasDialog>,
}

impl DialogManager {
    /// Create a new DialogManager with all dialogs closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the New Alias dialog. A no-op if one is already open: there is
    /// exactly one instance at a time and re-selecting the menu entry must
    /// not reset its draft.
    pub fn open_new_alias(&mut self) {
        if self.new_alias_dialog.is_none() {
            self.new_alias_dialog = Some(NewAliasDialog::new());
        }
    }

    /// Whether a modal dialog currently owns input.
    pub fn has_modal(&self) -> bool {
        self.new_alias_dialog.as_ref().is_some_and(|d| d.is_open())
    }

    /// Drop dialogs that reached a closed state; their drafts go with them.
    pub fn prune_closed(&mut self) {
        if let Some(ref dialog) = self.new_alias_dialog {
            if !dialog.is_open() {
                self.new_alias_dialog = None;
            }
        }
    }

    /// Render all dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context, store: &mut dyn AliasStore) -> Vec<DialogAction> {
        let mut actions: Vec<DialogAction> = Vec::new();

        if let Some(ref mut dialog) = self.new_alias_dialog {
            if let Some(action) = dialog.render(ctx, store) {
                actions.push(action);
            }
        }
        self.prune_closed();

        actions
    }
}

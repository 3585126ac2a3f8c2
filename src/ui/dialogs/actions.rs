//! Dialog action types - dialogs return actions instead of mutating state
//! directly. The app processes these in its update loop.

/// Actions that dialogs can return to the main application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// An (address, alias) pair was accepted by the store.
    AliasSaved { address: String, alias: String },
}

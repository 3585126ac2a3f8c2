//! Modal dialogs - self-contained dialog components.
//!
//! Each dialog owns its editing state and returns `DialogAction`s instead
//! of mutating external state directly. Dialogs are stored as
//! `Option<Dialog>` in the `DialogManager`:
//! - `None` = dialog is closed
//! - `Some(dialog)` = dialog is open with its state

mod actions;
mod new_alias;

pub use actions::DialogAction;
pub use new_alias::{DialogState, NewAliasDialog};

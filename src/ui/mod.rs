//! UI rendering modules for the WalletDesk shell.
//!
//! This module contains all egui-based UI rendering code, organized by
//! component:
//! - `menu`: Menu bar (tree data plus rendering)
//! - `dialogs`: Modal dialogs (new alias)

pub mod dialogs;
pub mod menu;

//! WalletDesk shell library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod config;
pub mod dialog_manager;
pub mod logging;
pub mod store;
pub mod ui;
pub mod validation;

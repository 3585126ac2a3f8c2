//! Alias storage boundary.
//!
//! The shell never decides what a valid address is or whether an alias is
//! taken - that policy lives behind the `AliasStore` trait. The dialog calls
//! the store synchronously on Save and shows any rejection in its status
//! line.

use std::collections::HashMap;

use thiserror::Error;

/// Rejection returned by an alias store. The message is display-ready and
/// is shown verbatim in the dialog's status line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Collaborator that validates an (address, alias) pair and stores it.
///
/// Must respond quickly: it is called on the UI thread from the Save
/// handler. An asynchronous backend should adapt behind this trait.
pub trait AliasStore {
    fn validate_and_store(&mut self, address: &str, alias: &str) -> Result<(), StoreError>;
}

// Base58 alphabet (no 0, O, I, l)
const B58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// In-memory alias store: aliases keyed by address.
///
/// Addresses must be base58 text; aliases must be unique. Re-aliasing an
/// address overwrites the previous alias for it.
#[derive(Default)]
pub struct MemoryAliasStore {
    aliases: HashMap<String, String>,
}

impl MemoryAliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the alias bound to an address, if any.
    pub fn alias_for(&self, address: &str) -> Option<&str> {
        self.aliases.get(address).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl AliasStore for MemoryAliasStore {
    fn validate_and_store(&mut self, address: &str, alias: &str) -> Result<(), StoreError> {
        if !address.chars().all(|c| B58_ALPHABET.contains(c)) {
            return Err(StoreError::new("Invalid address"));
        }

        let taken = self
            .aliases
            .iter()
            .any(|(addr, existing)| existing == alias && addr != address);
        if taken {
            return Err(StoreError::new("alias already exists"));
        }

        self.aliases.insert(address.to_string(), alias.to_string());
        Ok(())
    }
}

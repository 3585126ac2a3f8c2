//! Local input pre-checks for the New Alias dialog.
//!
//! Only the checks the dialog can do on its own live here: non-empty
//! fields. Address format and alias uniqueness are the store's policy.

/// Validates the address field before it is handed to the store.
pub fn validate_address_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Address cannot be empty".to_string());
    }
    Ok(())
}

/// Validates the alias field before it is handed to the store.
pub fn validate_alias_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Alias cannot be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_address_text() {
        assert!(validate_address_text("1A2b3C").is_ok());

        assert!(validate_address_text("").is_err());
        assert!(validate_address_text("   ").is_err()); // Whitespace only
    }

    #[test]
    fn test_validate_alias_text() {
        assert!(validate_alias_text("bob").is_ok());
        assert!(validate_alias_text("bob the builder").is_ok());

        assert!(validate_alias_text("").is_err());
        assert!(validate_alias_text("\t\n").is_err());
    }
}

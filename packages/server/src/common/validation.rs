//! Boundary input validation, run before any domain logic executes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::common::error::DomainError;

lazy_static! {
    // HTML5 email address pattern.
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .unwrap();
}

/// Rejects syntactically invalid email addresses.
pub fn validate_address(address: &str) -> Result<(), DomainError> {
    if EMAIL_RE.is_match(address) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "Invalid email address: {address}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_address("a@x.com").is_ok());
        assert!(validate_address("first.last+tag@sub.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(validate_address("").is_err());
        assert!(validate_address("not-an-email").is_err());
        assert!(validate_address("missing@tld@twice.com").is_err());
        assert!(validate_address("spaces in@address.com").is_err());
        assert!(validate_address("user@").is_err());
    }

    #[test]
    fn validation_error_carries_bad_user_input_code() {
        let err = validate_address("nope").unwrap_err();
        assert_eq!(err.code(), "BAD_USER_INPUT");
    }
}

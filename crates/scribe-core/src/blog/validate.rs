//! Field and payload well-formedness checks.

use crate::error::DomainError;

pub use crate::ids::is_identifier_format;

/// A request payload whose emptiness matters to the caller.
pub trait Payload {
    /// True when the payload carried no keys at all.
    fn is_empty(&self) -> bool;
}

/// Fails for a missing value or a blank string.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

pub fn is_non_empty_payload<P: Payload + ?Sized>(payload: &P) -> bool {
    !payload.is_empty()
}

/// Return the trimmed value, or a validation error carrying `message`.
pub fn require<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, DomainError> {
    match value {
        Some(v) if is_present(Some(v)) => Ok(v.trim()),
        _ => Err(DomainError::validation(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Keys(usize);

    impl Payload for Keys {
        fn is_empty(&self) -> bool {
            self.0 == 0
        }
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(Some("x")));
        assert!(is_present(Some("  x ")));
        assert!(!is_present(Some("")));
        assert!(!is_present(Some(" \t\n")));
        assert!(!is_present(None));
    }

    #[test]
    fn test_is_non_empty_payload() {
        assert!(is_non_empty_payload(&Keys(1)));
        assert!(!is_non_empty_payload(&Keys(0)));
    }

    #[test]
    fn test_require_trims() {
        assert_eq!(require(Some("  hello "), "missing").unwrap(), "hello");

        let err = require(Some("   "), "Blog title is required").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "Blog title is required"));
    }
}

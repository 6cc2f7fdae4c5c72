//! Ownership checks. Every mutation passes through here first.

use crate::error::DomainError;
use crate::ids::AuthorId;

/// The authenticated caller, passed explicitly into every operation that
/// needs authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    author_id: AuthorId,
}

impl Caller {
    pub fn new(author_id: AuthorId) -> Self {
        Self { author_id }
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }
}

/// Allow only when the caller owns the resource.
pub fn authorize(caller: &Caller, owner: &AuthorId) -> Result<(), DomainError> {
    if caller.author_id == *owner {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}

/// Check an author id claimed in a request (e.g. a query parameter) against
/// the caller. A missing or malformed claim is denied like a foreign one.
pub fn authorize_claim(caller: &Caller, claimed: Option<&str>) -> Result<AuthorId, DomainError> {
    let claimed = claimed
        .map(str::trim)
        .and_then(|raw| AuthorId::parse(raw).ok())
        .ok_or(DomainError::Unauthorized)?;
    authorize(caller, &claimed)?;
    Ok(claimed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_allowed() {
        let id = AuthorId::new();
        assert!(authorize(&Caller::new(id), &id).is_ok());
    }

    #[test]
    fn test_other_author_is_denied() {
        let result = authorize(&Caller::new(AuthorId::new()), &AuthorId::new());
        assert!(matches!(result, Err(DomainError::Unauthorized)));
    }

    #[test]
    fn test_claim_compares_canonical_form() {
        let id = AuthorId::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let caller = Caller::new(id);

        let upper = authorize_claim(&caller, Some("67E55044-10B1-426F-9247-BB680E5FE0C8"));
        assert_eq!(upper.unwrap(), id);

        let simple = authorize_claim(&caller, Some("67e5504410b1426f9247bb680e5fe0c8"));
        assert!(simple.is_ok());
    }

    #[test]
    fn test_missing_or_malformed_claim_is_denied() {
        let caller = Caller::new(AuthorId::new());
        assert!(matches!(
            authorize_claim(&caller, None),
            Err(DomainError::Unauthorized)
        ));
        assert!(matches!(
            authorize_claim(&caller, Some("nope")),
            Err(DomainError::Unauthorized)
        ));
        assert!(matches!(
            authorize_claim(&caller, Some(&AuthorId::new().to_string())),
            Err(DomainError::Unauthorized)
        ));
    }
}

//! Authenticator port
//!
//! The generation endpoints only run for authenticated callers. How a bearer
//! token is checked is an adapter concern; the application only needs a yes
//! or no and, on yes, who the caller is.

use thiserror::Error;

/// The authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
}

impl Principal {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    /// Caller admitted without credentials (open mode)
    pub fn anonymous() -> Self {
        Self::new("anonymous")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not authorized, no token")]
    MissingToken,

    #[error("Not authorized, token failed")]
    InvalidToken,
}

pub trait Authenticator: Send + Sync {
    /// Check the bearer token taken from the request, if any.
    fn authenticate(&self, bearer: Option<&str>) -> Result<Principal, AuthError>;
}

/// Admits every request. For local development and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllAuthenticator;

impl Authenticator for AllowAllAuthenticator {
    fn authenticate(&self, _bearer: Option<&str>) -> Result<Principal, AuthError> {
        Ok(Principal::anonymous())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_all() {
        let auth = AllowAllAuthenticator;
        assert_eq!(auth.authenticate(None), Ok(Principal::anonymous()));
        assert_eq!(auth.authenticate(Some("x")), Ok(Principal::anonymous()));
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(AuthError::MissingToken.to_string(), "Not authorized, no token");
        assert_eq!(AuthError::InvalidToken.to_string(), "Not authorized, token failed");
    }
}

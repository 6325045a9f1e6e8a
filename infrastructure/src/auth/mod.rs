//! Bearer-token authenticator backed by the `[auth]` config section.

use interview_application::{AuthError, Authenticator, Principal};
use sha2::{Digest, Sha256};

/// Accepts requests whose bearer token is one of a fixed set.
///
/// With no tokens configured every request is admitted as
/// [`Principal::anonymous`].
#[derive(Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: Vec<String>,
}

impl StaticTokenAuthenticator {
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens
                .into_iter()
                .filter(|t| !t.trim().is_empty())
                .collect(),
        }
    }

    /// Whether requests are admitted without credentials.
    pub fn is_open(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Debug for StaticTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenAuthenticator")
            .field("tokens", &self.tokens.len())
            .finish()
    }
}

/// Compares SHA-256 digests so neither the token contents nor its length
/// shape the comparison time.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let (a, b) = (Sha256::digest(a), Sha256::digest(b));
    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | std::hint::black_box(x ^ y));
    std::hint::black_box(diff) == 0
}

impl Authenticator for StaticTokenAuthenticator {
    fn authenticate(&self, bearer: Option<&str>) -> Result<Principal, AuthError> {
        if self.is_open() {
            return Ok(Principal::anonymous());
        }
        let bearer = bearer.ok_or(AuthError::MissingToken)?;

        // Check every token so timing does not reveal which one matched
        let mut matched = None;
        for (index, token) in self.tokens.iter().enumerate() {
            if constant_time_eq(token.as_bytes(), bearer.as_bytes()) && matched.is_none() {
                matched = Some(index);
            }
        }

        matched
            .map(|index| Principal::new(format!("token-{}", index + 1)))
            .ok_or(AuthError::InvalidToken)
    }
}

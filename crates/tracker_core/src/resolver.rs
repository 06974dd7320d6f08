use std::fmt;

use url::Url;

/// Base of the public Steam community site.
pub const DEFAULT_BASE_URL: &str = "https://steamcommunity.com";

/// Canonical fetchable address for a tracked profile.
///
/// Two user inputs that normalize to the same address denote the same
/// profile; the address string is the deduplication key everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileReference(String);

impl ProfileReference {
    /// Wraps an already-canonical address, e.g. a line from the profiles file.
    pub fn from_address(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn address(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("profile input is empty")]
    EmptyInput,
    #[error("profile input {0:?} does not form a valid address")]
    InvalidInput(String),
}

/// Turns raw user input into a [`ProfileReference`].
///
/// All-digit input is treated as a numeric account ID, anything else as a
/// vanity name. Existence is not checked here; a nonexistent profile only
/// shows up as a fetch failure later.
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    base: Url,
}

impl ProfileResolver {
    /// Resolver rooted at a custom base, used by tests to point at a local
    /// mock server.
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn resolve(&self, input: &str) -> Result<ProfileReference, ResolveError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        let path = if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            format!("profiles/{trimmed}")
        } else {
            format!("id/{trimmed}")
        };

        let address = self
            .base
            .join(&path)
            .map_err(|_| ResolveError::InvalidInput(trimmed.to_string()))?;
        Ok(ProfileReference(address.into()))
    }
}

impl Default for ProfileResolver {
    fn default() -> Self {
        // The literal is known-good; parsing it cannot fail.
        let base = Url::parse(DEFAULT_BASE_URL).expect("default base url");
        Self { base }
    }
}

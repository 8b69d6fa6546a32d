//! Errors surfaced to the session
//!
//! Transport failures of any kind collapse into one of two kinds, keyed by
//! which fetch failed. The message is shown verbatim in the error banner.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Listing the user's open pull requests failed
    #[error("{0}")]
    List(String),
    /// Fetching one pull request's checks failed
    #[error("{0}")]
    Data(String),
}

impl FetchError {
    pub fn list(err: impl std::fmt::Display) -> Self {
        Self::List(err.to_string())
    }

    pub fn data(err: impl std::fmt::Display) -> Self {
        Self::Data(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let err = FetchError::data(anyhow::anyhow!("gh CLI error: not found"));
        assert_eq!(err.to_string(), "gh CLI error: not found");
        assert_eq!(err, FetchError::Data("gh CLI error: not found".to_string()));
    }
}

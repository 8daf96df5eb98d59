//! Service layer error types
//!
//! Both kinds end a request cycle. Neither is retried; the viewer turns
//! them into a displayable `RequestState::Failed`.

use std::fmt;

use thiserror::Error;

use crate::ports::outbound::TransportError;

/// Errors that can occur while looking up a Pokemon
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Request failed to send or the catalog answered with a non-2xx status
    #[error("Request failed with error: {0}")]
    Transport(#[from] TransportError),
    /// Response body did not match the expected partial schema
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// One field of the response that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Key in the response object. Empty for the response body itself.
    pub path: String,
    pub expected: &'static str,
    /// Short description of the offending JSON value
    pub found: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected,
            found: found.into(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "response body: expected {}, found {}", self.expected, self.found)
        } else {
            write!(
                f,
                "field `{}`: expected {}, found {}",
                self.path, self.expected, self.found
            )
        }
    }
}

/// Response shape mismatch. Lists every offending field, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to decode catalog response:{}", render_issues(.issues))]
pub struct DecodeError {
    issues: Vec<FieldIssue>,
}

impl DecodeError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub fn root(expected: &'static str, found: impl Into<String>) -> Self {
        Self::new(vec![FieldIssue::new("", expected, found)])
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Paths of the offending fields, in record field order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.path.as_str())
    }
}

/// One `\n  - <issue>` line per issue
fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("\n  - {issue}"))
        .collect()
}

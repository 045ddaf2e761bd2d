//! Launch configuration and the credential validation gate.
use std::fmt;
use std::path::PathBuf;

use crate::lib::errors::LaunchError;

/// Environment variable names inherited by the server process.
pub const JIRA_URL_ENV: &str = "JIRA_URL";
pub const JIRA_EMAIL_ENV: &str = "JIRA_EMAIL";
pub const JIRA_API_TOKEN_ENV: &str = "JIRA_API_TOKEN";

/// API token wrapper that keeps the secret out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Raw value, reachable only for building the child environment.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_empty() {
            "Credential(<empty>)"
        } else {
            "Credential(<redacted>)"
        })
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_empty() { "<empty>" } else { "<redacted>" })
    }
}

/// Fully resolved launcher inputs, consulted once per process.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub base_url: String,
    pub identity: String,
    pub credential: Credential,
    /// Priority-ordered locations for the uv binary; first match wins.
    pub candidate_paths: Vec<PathBuf>,
    pub working_directory: PathBuf,
    pub script: String,
}

impl LaunchConfig {
    /// Gate: base URL, identity, and credential must all be non-empty.
    pub fn ensure_complete(&self) -> Result<(), LaunchError> {
        let mut fields = Vec::new();
        if self.base_url.trim().is_empty() {
            fields.push(JIRA_URL_ENV);
        }
        if self.identity.trim().is_empty() {
            fields.push(JIRA_EMAIL_ENV);
        }
        if self.credential.is_empty() {
            fields.push(JIRA_API_TOKEN_ENV);
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(LaunchError::MissingConfiguration { fields })
        }
    }

    /// Environment entries handed to the server process.
    pub fn child_env(&self) -> Vec<(String, String)> {
        vec![
            (JIRA_URL_ENV.to_string(), self.base_url.clone()),
            (JIRA_EMAIL_ENV.to_string(), self.identity.clone()),
            (
                JIRA_API_TOKEN_ENV.to_string(),
                self.credential.expose().to_string(),
            ),
        ]
    }
}

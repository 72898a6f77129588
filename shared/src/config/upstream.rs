//! Upstream employee API configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an upstream "not found" answer is recognised on the read-by-id,
/// update and create paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundDetection {
    /// Reason phrase equal to exactly `Not Found`, whatever the status code
    #[default]
    ReasonPhrase,
    /// Numeric status code 404
    StatusCode,
}

/// Location of and credentials for the remote REST API
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL; resource paths such as `users` are appended verbatim,
    /// so it is expected to end with `/`
    #[serde(default)]
    pub base_url: String,

    /// Bearer token sent in the `Authorization` header
    #[serde(default)]
    pub api_token: String,

    /// Outbound request timeout in seconds (client default when unset)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub not_found_detection: NotFoundDetection,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            ..Default::default()
        }
    }

    pub fn with_not_found_detection(mut self, detection: NotFoundDetection) -> Self {
        self.not_found_detection = detection;
        self
    }

    /// URL of the `users` collection
    pub fn users_url(&self) -> String {
        format!("{}users", self.base_url)
    }

    /// URL of a single user resource
    pub fn user_url(&self, id: i64) -> String {
        format!("{}users/{}", self.base_url, id)
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("not_found_detection", &self.not_found_detection)
            .finish()
    }
}

use serde::{Deserialize, Serialize};

/// Environment variable read by [`ClientConfig::from_env`].
pub const API_URL_ENV: &str = "TODO_API_URL";

/// Where the todo API lives.
///
/// In the browser this is read from a JSON script tag in the host page; any
/// missing field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, ending in `/`.
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "/api/".to_owned(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Defaults, with `api_url` taken from `TODO_API_URL` when set.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// The todo collection endpoint.
    pub fn todo_url(&self) -> String {
        if self.api_url.ends_with('/') {
            format!("{}todos", self.api_url)
        } else {
            format!("{}/todos", self.api_url)
        }
    }
}

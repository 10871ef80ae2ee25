//! Server-side list criteria and their query-string form.

use serde::Serialize;

/// Criteria sent to the server with a list request.
///
/// Every field is optional. A `None` field is left out of the query entirely,
/// so the server applies no constraint for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl ServerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: bool) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && self.category.is_none() && self.status.is_none()
    }

    /// Form-urlencoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        // Strings and bools always encode.
        serde_urlencoded::to_string(self).unwrap_or_default()
    }

    /// The full list URL for the given collection endpoint.
    pub fn list_url(&self, todo_url: &str) -> String {
        if self.is_empty() {
            todo_url.to_string()
        } else {
            format!("{}?{}", todo_url, self.to_query_string())
        }
    }
}

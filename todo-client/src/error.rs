use thiserror::Error;

/// A list or create request did not succeed.
///
/// Transport failures, non-2xx responses and undecodable bodies all end up
/// here. The reason is kept for logs; callers are not expected to branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Request failed: {reason}")]
pub struct ApiError {
    reason: String,
}

impl ApiError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Non-2xx response from the server.
    pub fn status(status: u16) -> Self {
        Self::new(format!("server responded with status {status}"))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ApiError::status(status.as_u16()),
            None => ApiError::new(e.to_string()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::new(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = ApiError::status(500);
        assert_eq!(err.to_string(), "Request failed: server responded with status 500");
        assert_eq!(err.reason(), "server responded with status 500");
    }
}

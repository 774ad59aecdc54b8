//! The seam between prepared requests and the network.
//!
//! This crate never opens a connection itself. Callers plug in a
//! [`Transport`] that handles mutual TLS, payload encryption for requests
//! flagged [`PreparedRequest::is_encrypted`], and the HTTP exchange.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::request::PreparedRequest;

/// Sends a [`PreparedRequest`] and returns the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &PreparedRequest) -> Result<ApiResponse, ApiError>;
}

/// Status code and body text of an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub text: String,
}

impl ApiResponse {
    pub fn new(status_code: u16, text: impl Into<String>) -> Self {
        Self {
            status_code,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Returns the response unchanged on a 2xx status, or an
    /// [`ApiError::Status`] carrying the status and body otherwise.
    pub fn ensure_success(self) -> Result<Self, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status {
                status: self.status_code,
                body: self.text,
            });
        }
        Ok(self)
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.text)?)
    }
}

//! HTTP request assembly and preview rendering.
//!
//! [`RequestBuilder`] collects the endpoint, headers, query parameters and
//! JSON body of a call. [`PreparedRequest`] is the immutable result handed to
//! a [`Transport`](crate::transport::Transport), and renders the plain-text
//! preview shown before a request is sent.

use std::fmt;

use serde_json::Value;
use ssg_core::to_pretty_json;

use crate::error::ApiError;

pub const API_VERSION_HEADER: &str = "x-api-version";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for a single API call.
///
/// Headers and parameters keep insertion order; setting an existing key
/// replaces its value in place.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: HttpMethod,
    endpoint: Option<String>,
    headers: Vec<(String, String)>,
    params: Vec<(String, String)>,
    body: Option<Value>,
    encrypted: bool,
}

impl RequestBuilder {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            endpoint: None,
            headers: vec![("accept".into(), "application/json".into())],
            params: Vec::new(),
            body: None,
            encrypted: false,
        }
    }

    pub fn get() -> Self {
        Self::new(HttpMethod::Get)
    }

    pub fn post() -> Self {
        Self::new(HttpMethod::Post)
    }

    /// Set the URL from a base and a path appended to it.
    ///
    /// The base must use `http://` or `https://`. Slashes between the two
    /// parts are normalised and trailing slashes are removed.
    pub fn endpoint(mut self, base: &str, path: &str) -> Result<Self, ApiError> {
        if base.is_empty() {
            return Err(ApiError::InvalidRequest("Endpoint cannot be empty!".into()));
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ApiError::InvalidRequest(
                "Endpoint URL must start with http:// or https://!".into(),
            ));
        }

        let path = path.trim_start_matches('/');
        let mut url = if path.is_empty() {
            base.to_string()
        } else if base.ends_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        while url.ends_with('/') {
            url.pop();
        }

        self.endpoint = Some(url);
        Ok(self)
    }

    pub fn header(mut self, key: &str, value: impl Into<String>) -> Result<Self, ApiError> {
        if key.is_empty() {
            return Err(ApiError::InvalidRequest("Header key cannot be empty!".into()));
        }
        upsert(&mut self.headers, key, value.into());
        Ok(self)
    }

    /// Mark the body as JSON.
    pub fn json_content(mut self) -> Self {
        upsert(&mut self.headers, "Content-Type", "application/json".into());
        self
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Result<Self, ApiError> {
        if key.is_empty() {
            return Err(ApiError::InvalidRequest(
                "Parameter Key cannot be empty!".into(),
            ));
        }
        upsert(&mut self.params, key, value.to_string());
        Ok(self)
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Pin the API version through the `x-api-version` header.
    ///
    /// Leaving it unset always targets the latest version, which is usually
    /// what callers want.
    pub fn api_version(self, version: &str) -> Result<Self, ApiError> {
        if version.trim().is_empty() {
            return Err(ApiError::InvalidRequest("API version cannot be empty!".into()));
        }
        self.header(API_VERSION_HEADER, version)
    }

    /// Ask the transport to encrypt the body before sending it.
    pub fn encrypted(mut self) -> Self {
        self.encrypted = true;
        self
    }

    pub fn build(self) -> Result<PreparedRequest, ApiError> {
        let url = self
            .endpoint
            .ok_or_else(|| ApiError::InvalidRequest("No endpoint specified!".into()))?;

        Ok(PreparedRequest {
            method: self.method,
            url,
            headers: self.headers,
            params: self.params,
            body: self.body,
            encrypted: self.encrypted,
        })
    }
}

/// A fully assembled request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
    params: Vec<(String, String)>,
    body: Option<Value>,
    encrypted: bool,
}

impl PreparedRequest {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// URL without query parameters.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        lookup(&self.headers, key)
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        lookup(&self.params, key)
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// URL with its query string, parameters joined as `k=v`.
    pub fn full_url(&self) -> String {
        if self.params.is_empty() {
            return self.url.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.url)
    }

    /// The body as pretty JSON; a request without a body renders `{}`.
    pub fn body_json(&self) -> Result<String, ApiError> {
        let empty = Value::Object(Default::default());
        Ok(to_pretty_json(self.body.as_ref().unwrap_or(&empty))?)
    }

    /// Plain-text preview of the request line, headers and body.
    pub fn render(&self) -> Result<String, ApiError> {
        let mut out = format!("{} {}\n\nHeaders\n-------\n", self.method, self.full_url());
        for (key, value) in &self.headers {
            out.push_str(&format!("{key}: {value}\n"));
        }
        out.push_str("\nBody\n-------\n");
        out.push_str(&self.body_json()?);
        out.push('\n');
        Ok(out)
    }
}

// ---- private helpers ----

fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some((_, existing)) => *existing = value,
        None => pairs.push((key.to_string(), value)),
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

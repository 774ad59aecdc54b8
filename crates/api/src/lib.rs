//! Request wrappers for the SSG training-registry API.
//!
//! Turns the request models of `ssg-core` into ready-to-send HTTP calls:
//!
//! - [`Environment`]: UAT, production and mock hosts.
//! - [`RequestBuilder`] / [`PreparedRequest`]: endpoint, headers, query and
//!   body of one call, plus its plain-text preview.
//! - [`operations`]: one `prepare`/`execute` wrapper per API operation.
//! - [`Transport`]: caller-supplied sender (TLS and payload encryption live
//!   behind it).
//! - [`ClientConfig`]: environment, provider UEN and API version from env
//!   vars.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod operations;
pub mod request;
pub mod transport;

pub use config::ClientConfig;
pub use endpoint::{Environment, Host};
pub use error::ApiError;
pub use request::{HttpMethod, PreparedRequest, RequestBuilder};
pub use transport::{ApiResponse, Transport};

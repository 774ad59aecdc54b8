//! One wrapper per SSG API operation.
//!
//! `prepare(...)` turns a request model into a [`PreparedRequest`], refusing
//! models that still have validation errors. `execute(&transport)` sends it
//! and fails on a non-2xx response.

/// Declare an operation wrapper holding one [`PreparedRequest`].
macro_rules! define_operation {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            request: $crate::request::PreparedRequest,
        }

        impl $name {
            /// Operation name used in logs.
            pub const NAME: &'static str = stringify!($name);

            pub fn request(&self) -> &$crate::request::PreparedRequest {
                &self.request
            }

            /// Plain-text preview of the request.
            pub fn render(&self) -> Result<String, $crate::error::ApiError> {
                self.request.render()
            }

            pub async fn execute<T>(
                &self,
                transport: &T,
            ) -> Result<$crate::transport::ApiResponse, $crate::error::ApiError>
            where
                T: $crate::transport::Transport + ?Sized,
            {
                $crate::operations::execute(Self::NAME, &self.request, transport).await
            }
        }
    };
}

pub mod assessments;
pub mod attendance;
pub mod courses;
pub mod credit;
pub mod enrolment;

use serde_json::Value;
use ssg_core::RequestModel;

use crate::config::ClientConfig;
use crate::endpoint::Host;
use crate::error::ApiError;
use crate::request::{HttpMethod, PreparedRequest, RequestBuilder};
use crate::transport::{ApiResponse, Transport};

/// Start a JSON request against `path` on the configured environment.
pub(crate) fn builder(
    config: &ClientConfig,
    method: HttpMethod,
    host: Host,
    path: &str,
) -> Result<RequestBuilder, ApiError> {
    let mut builder = RequestBuilder::new(method)
        .endpoint(config.environment.url(host), path)?
        .json_content();
    if let Some(version) = &config.api_version {
        builder = builder.api_version(version)?;
    }
    Ok(builder)
}

/// Verified payload of `model` for the configured training provider.
pub(crate) fn body<M>(config: &ClientConfig, model: &M) -> Result<Value, ApiError>
where
    M: RequestModel + ?Sized,
{
    Ok(model.payload(&config.payload_context(), true)?)
}

/// Reject a blank identifier destined for the request path or query.
pub(crate) fn required<'a>(value: &'a str, label: &str) -> Result<&'a str, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::InvalidRequest(format!("No {label} specified!")));
    }
    Ok(value)
}

/// The configured training-provider UEN, for operations that send it as a
/// query parameter.
pub(crate) fn required_uen(config: &ClientConfig) -> Result<&str, ApiError> {
    required(config.uen.as_deref().unwrap_or_default(), "UEN")
}

/// Add `includeExpiredCourses` when the caller chose a value.
pub(crate) fn include_expired(
    builder: RequestBuilder,
    include_expired: Option<bool>,
) -> Result<RequestBuilder, ApiError> {
    match include_expired {
        Some(flag) => builder.param("includeExpiredCourses", flag),
        None => Ok(builder),
    }
}

pub(crate) fn finish(
    operation: &'static str,
    builder: RequestBuilder,
) -> Result<PreparedRequest, ApiError> {
    let request = builder.build()?;
    tracing::debug!(
        operation,
        method = %request.method(),
        url = %request.full_url(),
        encrypted = request.is_encrypted(),
        "Prepared request"
    );
    Ok(request)
}

pub(crate) async fn execute<T>(
    operation: &'static str,
    request: &PreparedRequest,
    transport: &T,
) -> Result<ApiResponse, ApiError>
where
    T: Transport + ?Sized,
{
    tracing::debug!(
        operation,
        method = %request.method(),
        url = %request.url(),
        "Executing request"
    );
    let response = transport.send(request).await?;
    tracing::debug!(operation, status = response.status_code, "Received response");
    response.ensure_success()
}

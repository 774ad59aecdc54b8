//! The contract shared by every request model.

use serde_json::Value;

use crate::error::CoreError;
use crate::json::prune_nulls;
use crate::validation::ValidationReport;

/// Indent width used for pretty-printed payloads.
pub const JSON_INDENT: &[u8] = b"    ";

/// Caller-supplied values that payloads need but models do not own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadContext {
    /// UEN of the training provider the request is sent on behalf of.
    pub uen: Option<String>,
}

impl PayloadContext {
    pub fn with_uen(uen: impl Into<String>) -> Self {
        Self {
            uen: Some(uen.into()),
        }
    }
}

/// A request body under construction for one API operation.
pub trait RequestModel {
    /// Evaluate every business rule against the current field state.
    fn validate(&self) -> ValidationReport;

    /// Assemble the raw payload tree. Unset fields are emitted as nulls and
    /// removed by [`RequestModel::payload`].
    fn build_payload(&self, ctx: &PayloadContext) -> Value;

    /// Keys that survive pruning even when null.
    fn retained_keys(&self) -> &'static [&'static str] {
        &[]
    }

    /// Build the pruned payload, refusing when `verify` is set and the
    /// model still has validation errors.
    fn payload(&self, ctx: &PayloadContext, verify: bool) -> Result<Value, CoreError> {
        if verify {
            let report = self.validate();
            if !report.is_valid() {
                tracing::warn!(
                    error_count = report.errors.len(),
                    "Refusing to build payload with validation errors"
                );
                return Err(CoreError::NotReady {
                    errors: report.errors,
                });
            }
        }
        Ok(prune_nulls(self.build_payload(ctx), self.retained_keys()))
    }

    /// [`RequestModel::payload`] rendered as pretty JSON.
    fn payload_json(&self, ctx: &PayloadContext, verify: bool) -> Result<String, CoreError> {
        let payload = self.payload(ctx, verify)?;
        to_pretty_json(&payload)
    }
}

/// Pretty-print a JSON value with four-space indentation.
pub fn to_pretty_json(value: &Value) -> Result<String, CoreError> {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| CoreError::Unsupported(e.to_string()))
}

// ---------------------------------------------------------------------------
// Setter helpers
// ---------------------------------------------------------------------------

/// Accept `value` if it is at most `max` characters long.
pub(crate) fn bounded(
    field: &'static str,
    value: impl Into<String>,
    max: usize,
) -> Result<String, CoreError> {
    let value = value.into();
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::InvalidField {
            field,
            reason: format!("must be at most {max} characters, got {len}"),
        });
    }
    Ok(value)
}

/// Accept `value` if it is finite and not negative.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::InvalidField {
            field,
            reason: format!("must be a non-negative number, got {value}"),
        });
    }
    Ok(value)
}

/// Serialize a date as `YYYY-MM-DD`.
pub(crate) fn iso_date(date: Option<chrono::NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Serialize a date as `YYYYMMDD`.
pub(crate) fn compact_date(date: Option<chrono::NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y%m%d").to_string())
}

/// Serialize a time as `HH:MM`.
pub(crate) fn short_time(time: Option<chrono::NaiveTime>) -> Option<String> {
    time.map(|t| t.format("%H:%M").to_string())
}

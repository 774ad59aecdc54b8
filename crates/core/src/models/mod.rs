//! Request models, one struct per API operation.
//!
//! Each model exposes only the fields its operation accepts. Fields start
//! unset; a field set to an empty string counts as "specified but empty",
//! which `validate()` treats differently from "unset".

/// Getter and setter for an optional text field.
///
/// With a length limit the setter returns `Result` and rejects longer
/// values; without one it always succeeds.
macro_rules! text_field {
    ($(#[$meta:meta])* $field:ident, $setter:ident, $label:literal, $max:expr) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        pub fn $setter(
            &mut self,
            value: impl Into<String>,
        ) -> Result<&mut Self, crate::error::CoreError> {
            self.$field = Some(crate::model::bounded($label, value, $max)?);
            Ok(self)
        }
    };
    ($(#[$meta:meta])* $field:ident, $setter:ident) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
            self.$field = Some(value.into());
            self
        }
    };
}

/// Getter and setter for an optional `Copy` field (enums, dates, numbers).
macro_rules! value_field {
    ($(#[$meta:meta])* $field:ident, $setter:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        pub fn $setter(&mut self, value: $ty) -> &mut Self {
            self.$field = Some(value);
            self
        }
    };
}

/// Longest accepted training-partner code, e.g. `199900650G-01` for a
/// 10-character UEN plus its branch suffix.
pub const MAX_TRAINING_PARTNER_CODE_LEN: usize = 15;

pub mod assessments;
pub mod attendance;
pub mod course_runs;
pub mod credit;
pub mod enrolment;

use crate::model::PayloadContext;
use crate::validation::{is_specified_empty, non_empty, ValidationReport};
use crate::verify::is_numeric;

/// Warn when a contact-number part is set but empty or not numeric.
///
/// `label` names the part in messages, e.g. "Employer Area Code".
pub(crate) fn check_numeric_part(
    report: &mut ValidationReport,
    value: &Option<String>,
    label: &str,
    empty_message: &str,
) {
    match value.as_deref() {
        Some("") => report.warn(empty_message),
        Some(v) if !is_numeric(v) => report.warn(format!("{label} is not a number!")),
        _ => {}
    }
}

/// Warn when an optional field was marked as specified but left empty.
pub(crate) fn warn_if_specified_empty(
    report: &mut ValidationReport,
    value: &Option<String>,
    message: &str,
) {
    if is_specified_empty(value) {
        report.warn(message);
    }
}

/// Raise an error when an optional field was marked as specified but left
/// empty.
pub(crate) fn error_if_specified_empty(
    report: &mut ValidationReport,
    value: &Option<String>,
    message: &str,
) {
    if is_specified_empty(value) {
        report.error(message);
    }
}

/// An overriding training-partner UEN wins over the caller's own UEN.
pub(crate) fn resolve_uen(overridden: &Option<String>, ctx: &PayloadContext) -> Option<String> {
    non_empty(overridden)
        .map(str::to_string)
        .or_else(|| ctx.uen.clone())
}

/// Base64-encode inline file content.
pub(crate) fn encode_content(content: &Option<Vec<u8>>) -> Option<String> {
    use base64::{engine::general_purpose, Engine as _};

    content
        .as_deref()
        .map(|bytes| general_purpose::STANDARD.encode(bytes))
}

//! Request models for the SSG training-registry API.
//!
//! This crate builds and checks request bodies; it performs no I/O:
//!
//! - [`RequestModel`]: the validate-then-payload contract every model
//!   implements.
//! - [`ValidationReport`]: blocking errors and informational warnings.
//! - [`models`]: one struct per API operation (enrolment, course runs,
//!   SkillsFuture Credit, assessments, attendance).
//! - [`constants`]: closed code/description enums used on the wire.
//! - [`verify`]: UEN, NRIC and email format checks.

pub mod constants;
pub mod error;
pub mod json;
pub mod model;
pub mod models;
pub mod validation;
pub mod verify;

pub use error::CoreError;
pub use model::{to_pretty_json, PayloadContext, RequestModel};
pub use validation::ValidationReport;

//! Assessment operations under `/tpg/assessments`.

use ssg_core::models::assessments::{
    CreateAssessmentInfo, SearchAssessmentInfo, UpdateVoidAssessmentInfo,
};

use super::{body, builder, finish, required};
use crate::config::ClientConfig;
use crate::endpoint::Host;
use crate::error::ApiError;
use crate::request::HttpMethod;

fn details_path(reference_number: &str) -> Result<String, ApiError> {
    Ok(format!(
        "/tpg/assessments/details/{}",
        required(reference_number, "Assessment Reference Number")?
    ))
}

define_operation!(
    /// `POST /tpg/assessments`: record a trainee's assessment result.
    CreateAssessment
);

impl CreateAssessment {
    pub fn prepare(config: &ClientConfig, info: &CreateAssessmentInfo) -> Result<Self, ApiError> {
        let builder = builder(config, HttpMethod::Post, Host::Public, "/tpg/assessments")?
            .body(body(config, info)?)
            .encrypted();
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /tpg/assessments/details/{reference}`: correct or void a record.
    UpdateVoidAssessment
);

impl UpdateVoidAssessment {
    pub fn prepare(
        config: &ClientConfig,
        reference_number: &str,
        info: &UpdateVoidAssessmentInfo,
    ) -> Result<Self, ApiError> {
        let path = details_path(reference_number)?;
        let builder = builder(config, HttpMethod::Post, Host::Public, &path)?
            .body(body(config, info)?)
            .encrypted();
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /tpg/assessments/search`.
    SearchAssessment
);

impl SearchAssessment {
    pub fn prepare(config: &ClientConfig, info: &SearchAssessmentInfo) -> Result<Self, ApiError> {
        let builder = builder(config, HttpMethod::Post, Host::Public, "/tpg/assessments/search")?
            .body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `GET /tpg/assessments/details/{reference}`.
    ViewAssessment
);

impl ViewAssessment {
    pub fn prepare(config: &ClientConfig, reference_number: &str) -> Result<Self, ApiError> {
        let path = details_path(reference_number)?;
        let builder = builder(config, HttpMethod::Get, Host::Public, &path)?;
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

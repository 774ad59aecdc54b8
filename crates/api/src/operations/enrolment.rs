//! Enrolment operations under `/tpg/enrolments`.

use ssg_core::models::enrolment::{
    CancelEnrolmentInfo, CreateEnrolmentInfo, SearchEnrolmentInfo,
    UpdateEnrolmentFeeCollectionInfo, UpdateEnrolmentInfo,
};

use super::{body, builder, finish, required};
use crate::config::ClientConfig;
use crate::endpoint::Host;
use crate::error::ApiError;
use crate::request::HttpMethod;

const REFERENCE_NUMBER: &str = "Enrolment Reference Number";

fn details_path(reference_number: &str) -> Result<String, ApiError> {
    Ok(format!(
        "/tpg/enrolments/details/{}",
        required(reference_number, REFERENCE_NUMBER)?
    ))
}

define_operation!(
    /// `POST /tpg/enrolments`: enrol a trainee into a course run.
    CreateEnrolment
);

impl CreateEnrolment {
    pub fn prepare(config: &ClientConfig, info: &CreateEnrolmentInfo) -> Result<Self, ApiError> {
        let builder = builder(config, HttpMethod::Post, Host::Public, "/tpg/enrolments")?
            .body(body(config, info)?)
            .encrypted();
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /tpg/enrolments/details/{reference}`: update an enrolment.
    UpdateEnrolment
);

impl UpdateEnrolment {
    pub fn prepare(
        config: &ClientConfig,
        reference_number: &str,
        info: &UpdateEnrolmentInfo,
    ) -> Result<Self, ApiError> {
        let path = details_path(reference_number)?;
        let builder = builder(config, HttpMethod::Post, Host::Public, &path)?
            .body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /tpg/enrolments/details/{reference}` with a cancel action.
    CancelEnrolment
);

impl CancelEnrolment {
    pub fn prepare(
        config: &ClientConfig,
        reference_number: &str,
        info: &CancelEnrolmentInfo,
    ) -> Result<Self, ApiError> {
        let path = details_path(reference_number)?;
        let builder = builder(config, HttpMethod::Post, Host::Public, &path)?
            .body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `GET /tpg/enrolments/details/{reference}`.
    ViewEnrolment
);

impl ViewEnrolment {
    pub fn prepare(config: &ClientConfig, reference_number: &str) -> Result<Self, ApiError> {
        let path = details_path(reference_number)?;
        let builder = builder(config, HttpMethod::Get, Host::Public, &path)?;
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /tpg/enrolments/search`.
    SearchEnrolment
);

impl SearchEnrolment {
    pub fn prepare(config: &ClientConfig, info: &SearchEnrolmentInfo) -> Result<Self, ApiError> {
        let builder = builder(config, HttpMethod::Post, Host::Public, "/tpg/enrolments/search")?
            .body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /tpg/enrolments/feeCollections/{reference}`.
    UpdateEnrolmentFeeCollection
);

impl UpdateEnrolmentFeeCollection {
    pub fn prepare(
        config: &ClientConfig,
        reference_number: &str,
        info: &UpdateEnrolmentFeeCollectionInfo,
    ) -> Result<Self, ApiError> {
        let path = format!(
            "/tpg/enrolments/feeCollections/{}",
            required(reference_number, REFERENCE_NUMBER)?
        );
        let builder = builder(config, HttpMethod::Post, Host::Public, &path)?
            .body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

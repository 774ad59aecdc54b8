//! Course run operations.
//!
//! Publishing, editing and deleting runs go to the alternate production
//! host; lookups use the public one.

use chrono::NaiveDate;
use ssg_core::models::course_runs::{AddRunInfo, DeleteRunInfo, EditRunInfo};

use super::{body, builder, finish, include_expired, required, required_uen};
use crate::config::ClientConfig;
use crate::endpoint::Host;
use crate::error::ApiError;
use crate::request::HttpMethod;

const RUN_ID: &str = "Course Run ID";

define_operation!(
    /// `POST /courses/courseRuns/publish`: publish one or more runs.
    AddCourseRun
);

impl AddCourseRun {
    pub fn prepare(
        config: &ClientConfig,
        info: &AddRunInfo,
        include_expired_courses: Option<bool>,
    ) -> Result<Self, ApiError> {
        let builder = builder(
            config,
            HttpMethod::Post,
            Host::Alternate,
            "/courses/courseRuns/publish",
        )?;
        let builder = include_expired(builder, include_expired_courses)?.body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /courses/courseRuns/edit/{runId}` with an update action.
    EditCourseRun
);

impl EditCourseRun {
    pub fn prepare(
        config: &ClientConfig,
        run_id: &str,
        info: &EditRunInfo,
        include_expired_courses: Option<bool>,
    ) -> Result<Self, ApiError> {
        let path = format!("/courses/courseRuns/edit/{}", required(run_id, RUN_ID)?);
        let builder = builder(config, HttpMethod::Post, Host::Alternate, &path)?;
        let builder = include_expired(builder, include_expired_courses)?.body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /courses/courseRuns/edit/{runId}` with a delete action.
    DeleteCourseRun
);

impl DeleteCourseRun {
    pub fn prepare(
        config: &ClientConfig,
        run_id: &str,
        info: &DeleteRunInfo,
        include_expired_courses: Option<bool>,
    ) -> Result<Self, ApiError> {
        let path = format!("/courses/courseRuns/edit/{}", required(run_id, RUN_ID)?);
        let builder = builder(config, HttpMethod::Post, Host::Alternate, &path)?;
        let builder = include_expired(builder, include_expired_courses)?.body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `GET /courses/courseRuns/id/{runId}`.
    ViewCourseRun
);

impl ViewCourseRun {
    pub fn prepare(
        config: &ClientConfig,
        run_id: &str,
        include_expired_courses: Option<bool>,
    ) -> Result<Self, ApiError> {
        let path = format!("/courses/courseRuns/id/{}", required(run_id, RUN_ID)?);
        let builder = builder(config, HttpMethod::Get, Host::Public, &path)?;
        let builder = include_expired(builder, include_expired_courses)?;
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `GET /courses/runs/{runId}/sessions` for the configured provider.
    ViewCourseSessions
);

impl ViewCourseSessions {
    /// Only the month and year of `session_month` are sent, as `MMYYYY`.
    pub fn prepare(
        config: &ClientConfig,
        run_id: &str,
        course_reference_number: &str,
        session_month: Option<NaiveDate>,
        include_expired_courses: Option<bool>,
    ) -> Result<Self, ApiError> {
        let path = format!("/courses/runs/{}/sessions", required(run_id, RUN_ID)?);
        let mut builder = builder(config, HttpMethod::Get, Host::Public, &path)?
            .param("uen", required_uen(config)?)?
            .param(
                "courseReferenceNumber",
                required(course_reference_number, "Course Reference Number")?,
            )?;
        if let Some(month) = session_month {
            builder = builder.param("sessionMonth", month.format("%m%Y"))?;
        }
        let builder = include_expired(builder, include_expired_courses)?;
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

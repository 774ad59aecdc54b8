//! Course session attendance under `/courses/runs/{runId}/sessions/attendance`.

use ssg_core::models::attendance::UploadAttendanceInfo;

use super::{body, builder, finish, required, required_uen};
use crate::config::ClientConfig;
use crate::endpoint::Host;
use crate::error::ApiError;
use crate::request::HttpMethod;

fn attendance_path(run_id: &str) -> Result<String, ApiError> {
    Ok(format!(
        "/courses/runs/{}/sessions/attendance",
        required(run_id, "Course Run ID")?
    ))
}

define_operation!(
    /// Upload one trainee's attendance for a session.
    UploadCourseSessionAttendance
);

impl UploadCourseSessionAttendance {
    pub fn prepare(
        config: &ClientConfig,
        run_id: &str,
        info: &UploadAttendanceInfo,
    ) -> Result<Self, ApiError> {
        let path = attendance_path(run_id)?;
        let builder = builder(config, HttpMethod::Post, Host::Alternate, &path)?
            .body(body(config, info)?)
            .encrypted();
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// Attendance already recorded for a session.
    ViewCourseSessionAttendance
);

impl ViewCourseSessionAttendance {
    pub fn prepare(
        config: &ClientConfig,
        run_id: &str,
        course_reference_number: &str,
        session_id: &str,
    ) -> Result<Self, ApiError> {
        let path = attendance_path(run_id)?;
        let builder = builder(config, HttpMethod::Get, Host::Public, &path)?
            .param("uen", required_uen(config)?)?
            .param(
                "courseReferenceNumber",
                required(course_reference_number, "Course Reference Number")?,
            )?
            .param("sessionId", required(session_id, "Session ID")?)?;
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

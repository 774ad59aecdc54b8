//! Course session attendance upload.

use serde_json::{json, Value};

use crate::constants::{AttendanceStatus, IdType, SurveyLanguage};
use crate::error::CoreError;
use crate::model::{non_negative, PayloadContext, RequestModel};
use crate::validation::{is_blank, is_specified_empty, ValidationReport};

/// One trainee's attendance for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadAttendanceInfo {
    session_id: Option<String>,
    status: Option<AttendanceStatus>,
    trainee_id: Option<String>,
    trainee_name: Option<String>,
    trainee_email: Option<String>,
    trainee_id_type: Option<IdType>,
    mobile: Option<String>,
    area_code: Option<u32>,
    country_code: Option<u32>,
    number_of_hours: Option<f64>,
    survey_language: Option<SurveyLanguage>,
    reference_number: Option<String>,
    corppass_id: Option<String>,
}

impl UploadAttendanceInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(session_id, set_session_id, "session ID", 300);
    value_field!(status, set_status, AttendanceStatus);
    text_field!(trainee_id, set_trainee_id, "trainee ID", 20);
    text_field!(trainee_name, set_trainee_name, "trainee name", 66);
    text_field!(trainee_email, set_trainee_email, "trainee email", 320);
    value_field!(trainee_id_type, set_trainee_id_type, IdType);
    text_field!(mobile, set_mobile, "mobile number", 15);
    value_field!(area_code, set_area_code, u32);
    value_field!(country_code, set_country_code, u32);

    pub fn number_of_hours(&self) -> Option<f64> {
        self.number_of_hours
    }

    pub fn set_number_of_hours(&mut self, hours: f64) -> Result<&mut Self, CoreError> {
        self.number_of_hours = Some(non_negative("number of hours", hours)?);
        Ok(self)
    }

    value_field!(survey_language, set_survey_language, SurveyLanguage);
    text_field!(reference_number, set_reference_number, "reference number", 100);
    text_field!(corppass_id, set_corppass_id, "CorpPass ID", 100);
}

impl RequestModel for UploadAttendanceInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if is_blank(&self.session_id) {
            report.error("No Session ID specified!");
        }
        if is_blank(&self.trainee_id) {
            report.error("No Trainee ID specified!");
        }
        if is_blank(&self.trainee_name) {
            report.error("No Trainee Name specified!");
        }
        if self.trainee_id_type.is_none() {
            report.error("Unknown Trainee ID type!");
        }
        if self.country_code.is_none() {
            report.error("No Country Code specified!");
        }
        if self.survey_language.is_none() {
            report.error("Unknown Survey Language code specified!");
        }
        if is_blank(&self.reference_number) {
            report.error("No Attendance Reference Number specified!");
        }
        if is_blank(&self.corppass_id) {
            report.error("No CorpPass ID specified!");
        }
        if self.trainee_email.is_none() && is_blank(&self.mobile) {
            report.error("You need to specify either the trainee's mobile number or email address!");
        }

        if is_specified_empty(&self.trainee_email) {
            report.warn("No Trainee Email specified!");
        }

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        json!({
            "uen": ctx.uen,
            "course": {
                "sessionID": self.session_id,
                "attendance": {
                    "status": {
                        "code": self.status.map(AttendanceStatus::code),
                    },
                    "trainee": {
                        "id": self.trainee_id,
                        "name": self.trainee_name,
                        "email": self.trainee_email,
                        "idType": {
                            "code": self.trainee_id_type.map(IdType::code),
                        },
                        "contactNumber": {
                            "mobile": self.mobile,
                            "areaCode": self.area_code,
                            "countryCode": self.country_code,
                        },
                        "numberOfHours": self.number_of_hours.map(|h| (h * 100.0).round() / 100.0),
                        "surveyLanguage": {
                            "code": self.survey_language.map(SurveyLanguage::code),
                        },
                    },
                },
                "referenceNumber": self.reference_number,
            },
            "corppassId": self.corppass_id,
        })
    }

    /// The API documents `areaCode` as nullable; it is always sent.
    fn retained_keys(&self) -> &'static [&'static str] {
        &["areaCode"]
    }
}

//! Assessment record models: create, update/void and search.

use chrono::NaiveDate;
use serde_json::{json, Value};

use super::enrolment::MAX_PAGE_SIZE;
use super::{resolve_uen, warn_if_specified_empty, MAX_TRAINING_PARTNER_CODE_LEN};
use crate::constants::{
    AssessmentIdType, AssessmentResult, AssessmentSortField, AssessmentUpdateVoidAction, Grade,
    SortOrder,
};
use crate::error::CoreError;
use crate::model::{iso_date, PayloadContext, RequestModel};
use crate::validation::{is_blank, non_empty, ValidationReport};
use crate::verify::verify_uen;

// ---------------------------------------------------------------------------
// CreateAssessmentInfo
// ---------------------------------------------------------------------------

/// A trainee's assessment outcome for one course run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAssessmentInfo {
    grade: Option<Grade>,
    score: Option<u32>,
    course_run_id: Option<String>,
    course_reference_number: Option<String>,
    result: Option<AssessmentResult>,
    trainee_id: Option<String>,
    trainee_id_type: Option<AssessmentIdType>,
    trainee_full_name: Option<String>,
    skill_code: Option<String>,
    assessment_date: Option<NaiveDate>,
    training_partner_code: Option<String>,
    training_partner_uen: Option<String>,
    conferring_institute_code: Option<String>,
}

impl CreateAssessmentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(grade, set_grade, Grade);
    value_field!(score, set_score, u32);
    text_field!(course_run_id, set_course_run_id, "course run ID", 20);
    text_field!(
        course_reference_number,
        set_course_reference_number,
        "course reference number",
        100
    );
    value_field!(result, set_result, AssessmentResult);
    text_field!(trainee_id, set_trainee_id, "trainee ID", 20);
    value_field!(trainee_id_type, set_trainee_id_type, AssessmentIdType);
    text_field!(trainee_full_name, set_trainee_full_name, "trainee full name", 200);
    text_field!(skill_code, set_skill_code, "skill code", 30);
    value_field!(assessment_date, set_assessment_date, NaiveDate);
    text_field!(
        training_partner_code,
        set_training_partner_code,
        "training partner code",
        MAX_TRAINING_PARTNER_CODE_LEN
    );
    text_field!(
        training_partner_uen,
        set_training_partner_uen,
        "training partner UEN",
        15
    );
    text_field!(
        conferring_institute_code,
        set_conferring_institute_code,
        "conferring institute code",
        12
    );
}

impl RequestModel for CreateAssessmentInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if is_blank(&self.course_run_id) {
            report.error("No Course Run ID is provided!");
        }
        if is_blank(&self.course_reference_number) {
            report.error("No Course Reference Number is provided!");
        }
        if is_blank(&self.trainee_id) {
            report.error("No Trainee ID is provided!");
        }
        if is_blank(&self.trainee_full_name) {
            report.error("No Trainee Full Name is provided!");
        }
        if self.assessment_date.is_none() {
            report.error("No Assessment Date is provided!");
        }
        if is_blank(&self.training_partner_code) {
            report.error("No Training Partner Code is provided!");
        }
        if let Some(uen) = &self.training_partner_uen {
            if !verify_uen(uen) {
                report.error("Specified Training Partner UEN is invalid!");
            }
        }

        warn_if_specified_empty(
            &mut report,
            &self.skill_code,
            "Skill Code is empty even though Skill Code is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &self.conferring_institute_code,
            "Conferring Institute Code is empty even though Conferring Institute Code is marked as specified!",
        );

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        json!({
            "assessment": {
                "grade": self.grade.map(Grade::code),
                "score": self.score,
                "course": {
                    "run": {
                        "id": self.course_run_id,
                    },
                    "referenceNumber": self.course_reference_number,
                },
                "result": self.result.map(AssessmentResult::code),
                "trainee": {
                    "id": self.trainee_id,
                    "idType": self.trainee_id_type.map(AssessmentIdType::code),
                    "fullName": self.trainee_full_name,
                },
                "skillCode": self.skill_code,
                "assessmentDate": iso_date(self.assessment_date),
                "trainingPartner": {
                    "uen": resolve_uen(&self.training_partner_uen, ctx),
                    "code": self.training_partner_code,
                },
                "conferringInstitute": {
                    "code": self.conferring_institute_code,
                },
            }
        })
    }
}

// ---------------------------------------------------------------------------
// UpdateVoidAssessmentInfo
// ---------------------------------------------------------------------------

/// Correction or withdrawal of an existing assessment record. The record's
/// reference number travels in the request path, not the body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateVoidAssessmentInfo {
    grade: Option<Grade>,
    score: Option<u32>,
    action: Option<AssessmentUpdateVoidAction>,
    result: Option<AssessmentResult>,
    trainee_full_name: Option<String>,
    skill_code: Option<String>,
    assessment_date: Option<NaiveDate>,
}

impl UpdateVoidAssessmentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(grade, set_grade, Grade);
    value_field!(score, set_score, u32);
    value_field!(action, set_action, AssessmentUpdateVoidAction);
    value_field!(result, set_result, AssessmentResult);
    text_field!(trainee_full_name, set_trainee_full_name, "trainee full name", 200);
    text_field!(skill_code, set_skill_code, "skill code", 30);
    value_field!(assessment_date, set_assessment_date, NaiveDate);

    pub fn is_update(&self) -> bool {
        self.action == Some(AssessmentUpdateVoidAction::Update)
    }
}

impl RequestModel for UpdateVoidAssessmentInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.action.is_none() {
            report.error("No Action provided!");
        }
        warn_if_specified_empty(
            &mut report,
            &self.trainee_full_name,
            "Trainee Full Name is empty even though Trainee Full Name is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &self.skill_code,
            "Skill Code is empty even though Skill Code is marked as specified!",
        );

        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        json!({
            "assessment": {
                "grade": self.grade.map(Grade::code),
                "score": self.score,
                "action": self.action.map(AssessmentUpdateVoidAction::code),
                "result": self.result.map(AssessmentResult::code),
                "trainee": {
                    "fullName": self.trainee_full_name,
                },
                "skillCode": self.skill_code,
                "assessmentDate": iso_date(self.assessment_date),
            }
        })
    }
}

// ---------------------------------------------------------------------------
// SearchAssessmentInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchAssessmentInfo {
    last_update_date_to: Option<NaiveDate>,
    last_update_date_from: Option<NaiveDate>,
    sort_by_field: Option<AssessmentSortField>,
    sort_by_order: Option<SortOrder>,
    page: Option<u32>,
    page_size: Option<u32>,
    course_run_id: Option<String>,
    course_reference_number: Option<String>,
    trainee_id: Option<String>,
    enrolment_reference_number: Option<String>,
    skill_code: Option<String>,
    training_partner_uen: Option<String>,
    training_partner_code: Option<String>,
}

impl SearchAssessmentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(last_update_date_to, set_last_update_date_to, NaiveDate);
    value_field!(last_update_date_from, set_last_update_date_from, NaiveDate);
    value_field!(sort_by_field, set_sort_by_field, AssessmentSortField);
    value_field!(sort_by_order, set_sort_by_order, SortOrder);
    value_field!(page, set_page, u32);

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn set_page_size(&mut self, size: u32) -> Result<&mut Self, CoreError> {
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(CoreError::InvalidField {
                field: "page size",
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}, got {size}"),
            });
        }
        self.page_size = Some(size);
        Ok(self)
    }

    text_field!(course_run_id, set_course_run_id, "course run ID", 20);
    text_field!(
        course_reference_number,
        set_course_reference_number,
        "course reference number",
        100
    );
    text_field!(trainee_id, set_trainee_id, "trainee ID", 20);
    text_field!(
        enrolment_reference_number,
        set_enrolment_reference_number,
        "enrolment reference number",
        100
    );
    text_field!(skill_code, set_skill_code, "skill code", 30);
    text_field!(
        training_partner_uen,
        set_training_partner_uen,
        "training partner UEN",
        15
    );
    text_field!(
        training_partner_code,
        set_training_partner_code,
        "training partner code",
        MAX_TRAINING_PARTNER_CODE_LEN
    );
}

impl RequestModel for SearchAssessmentInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let (Some(from), Some(to)) = (self.last_update_date_from, self.last_update_date_to) {
            if from > to {
                report.error("Last Update Date From cannot be greater than Last Update Date To!");
            }
        }
        if self.page.is_none() {
            report.error("Page number is not specified!");
        }
        if self.page_size.is_none() {
            report.error("Page size is not specified!");
        }
        if let Some(uen) = non_empty(&self.training_partner_uen) {
            if !verify_uen(uen) {
                report.error("Invalid Training Partner UEN specified!");
            }
        }

        let optionals = [
            (&self.course_run_id, "Course Run ID"),
            (&self.course_reference_number, "Reference Number"),
            (&self.trainee_id, "Trainee ID"),
            (&self.enrolment_reference_number, "Enrolment Reference Number"),
            (&self.skill_code, "Skill Code"),
            (&self.training_partner_uen, "Training Partner UEN"),
            (&self.training_partner_code, "Training Partner Code"),
        ];
        for (value, label) in optionals {
            warn_if_specified_empty(
                &mut report,
                value,
                &format!("{label} is empty even though {label} is marked as specified!"),
            );
        }

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        json!({
            "meta": {
                "lastUpdateDateTo": iso_date(self.last_update_date_to),
                "lastUpdateDateFrom": iso_date(self.last_update_date_from),
            },
            "sortBy": {
                "field": self.sort_by_field.map(AssessmentSortField::code),
                "order": self.sort_by_order.map(SortOrder::code),
            },
            "parameters": {
                "page": self.page,
                "pageSize": self.page_size,
            },
            "assessment": {
                "course": {
                    "run": {
                        "id": self.course_run_id,
                    },
                    "referenceNumber": self.course_reference_number,
                },
            },
            "trainee": {
                "id": self.trainee_id,
            },
            "enrolment": {
                "referenceNumber": self.enrolment_reference_number,
            },
            "skillCode": self.skill_code,
            "trainingPartner": {
                "uen": resolve_uen(&self.training_partner_uen, ctx),
                "code": self.training_partner_code,
            },
        })
    }
}

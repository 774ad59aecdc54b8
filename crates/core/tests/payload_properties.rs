//! Integration tests for properties every request model shares.
//!
//! Covers the verify gate, null pruning, idempotence and the required-field
//! behaviour of freshly constructed Create/Add models.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::{json, Value};
use ssg_core::constants::{
    CollectionStatus, IdType, ModeOfTraining, Role, SponsorshipType, TrainerType,
};
use ssg_core::models::assessments::{
    CreateAssessmentInfo, SearchAssessmentInfo, UpdateVoidAssessmentInfo,
};
use ssg_core::models::attendance::UploadAttendanceInfo;
use ssg_core::models::course_runs::{
    AddRunIndividualInfo, AddRunInfo, DeleteRunInfo, EditRunInfo, LinkedSsecEqa,
    RunSessionAddInfo, RunSessionEditInfo, RunTrainerAddInfo, RunTrainerEditInfo,
};
use ssg_core::models::credit::{
    CancelClaimsInfo, DecryptPayloadInfo, DocumentInfo, EncryptPayloadInfo, UploadDocumentInfo,
};
use ssg_core::models::enrolment::{
    CancelEnrolmentInfo, CreateEnrolmentInfo, SearchEnrolmentInfo,
    UpdateEnrolmentFeeCollectionInfo, UpdateEnrolmentInfo,
};
use ssg_core::{CoreError, PayloadContext, RequestModel};

fn ctx() -> PayloadContext {
    PayloadContext::with_uen("199900650G")
}

/// `true` when no object or array in the tree holds a null, `{}` or `[]`.
fn is_pruned(value: &Value) -> bool {
    let vacant = |v: &Value| match v {
        Value::Null => true,
        Value::Object(m) => m.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    };
    match value {
        Value::Object(map) => map.values().all(|v| !vacant(v) && is_pruned(v)),
        Value::Array(items) => items.iter().all(|v| !vacant(v) && is_pruned(v)),
        _ => true,
    }
}

/// Models in a partially filled state, including empty-but-specified fields.
/// Every one of them prunes vacant values completely.
fn sample_models() -> Vec<Box<dyn RequestModel>> {
    let mut create = CreateEnrolmentInfo::new();
    create
        .set_trainee_sponsorship_type(SponsorshipType::Employer)
        .set_trainee_fees_collection_status(CollectionStatus::PendingPayment);
    create.set_employer_uen("").unwrap();

    let mut update = UpdateEnrolmentInfo::new();
    update.set_trainee_email_address("x@y.sg").unwrap();

    let mut edit_run = EditRunInfo::new();
    edit_run.set_crid("TGS-2020002096").unwrap();
    edit_run.add_session(RunSessionEditInfo::new());
    edit_run.add_trainer(RunTrainerEditInfo::new());

    let mut add_run = AddRunInfo::new();
    let mut run = AddRunIndividualInfo::new();
    run.details_mut()
        .set_mode_of_training(ModeOfTraining::Classroom)
        .set_course_start(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    run.add_session(RunSessionAddInfo::new());
    let mut trainer = RunTrainerAddInfo::new();
    trainer
        .details_mut()
        .set_trainer_type(TrainerType::New)
        .set_id_type(IdType::Others)
        .set_roles([Role::Assessor]);
    run.add_trainer(trainer);
    add_run.add_run(run);

    let mut upload = UploadDocumentInfo::new();
    upload.add_document(DocumentInfo::new());

    vec![
        Box::new(create),
        Box::new(update),
        Box::new(CancelEnrolmentInfo::new()),
        Box::new(UpdateEnrolmentFeeCollectionInfo::new()),
        Box::new(SearchEnrolmentInfo::new()),
        Box::new(LinkedSsecEqa::new()),
        Box::new(edit_run),
        Box::new(DeleteRunInfo::new()),
        Box::new(add_run),
        Box::new(EncryptPayloadInfo::new()),
        Box::new(DecryptPayloadInfo::new()),
        Box::new(upload),
        Box::new(CancelClaimsInfo::new()),
        Box::new(CreateAssessmentInfo::new()),
        Box::new(UpdateVoidAssessmentInfo::new()),
        Box::new(SearchAssessmentInfo::new()),
    ]
}

/// Attendance keeps a nullable `areaCode`, so it stays out of
/// [`sample_models`] and the pruning check.
fn attendance_sample() -> Box<dyn RequestModel> {
    let mut attendance = UploadAttendanceInfo::new();
    attendance.set_country_code(65);
    Box::new(attendance)
}

fn all_samples() -> impl Iterator<Item = Box<dyn RequestModel>> {
    sample_models().into_iter().chain([attendance_sample()])
}

// ---------------------------------------------------------------------------
// Test: fresh Create/Add models are never ready
// ---------------------------------------------------------------------------

/// Nothing required has been supplied, so validation must fail.
#[test]
fn fresh_create_and_add_models_have_errors() {
    let fresh: Vec<Box<dyn RequestModel>> = vec![
        Box::new(CreateEnrolmentInfo::new()),
        Box::new(RunSessionAddInfo::new()),
        Box::new(RunTrainerAddInfo::new()),
        Box::new(AddRunIndividualInfo::new()),
        Box::new(AddRunInfo::new()),
        Box::new(CreateAssessmentInfo::new()),
        Box::new(UploadAttendanceInfo::new()),
    ];
    for model in fresh {
        assert!(!model.validate().is_valid());
    }
}

// ---------------------------------------------------------------------------
// Test: verify gate
// ---------------------------------------------------------------------------

/// An unverified payload is always produced; a verified one fails exactly
/// when validation reports errors.
#[test]
fn verify_fails_iff_validation_has_errors() {
    for model in all_samples() {
        assert!(model.payload(&ctx(), false).is_ok());

        let report = model.validate();
        match model.payload(&ctx(), true) {
            Ok(_) => assert!(report.is_valid()),
            Err(err) => {
                assert!(!report.is_valid());
                assert_matches!(err, CoreError::NotReady { errors } if errors == report.errors);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Test: pruning and idempotence
// ---------------------------------------------------------------------------

/// No payload carries a null, empty object or empty array. Attendance keeps
/// its documented nullable `areaCode` and is checked separately.
#[test]
fn payloads_contain_no_vacant_values() {
    for model in sample_models() {
        let payload = model.payload(&ctx(), false).unwrap();
        assert!(is_pruned(&payload), "unpruned payload: {payload}");
    }
}

#[test]
fn attendance_keeps_area_code_only() {
    let model = UploadAttendanceInfo::new();
    let payload = model.payload(&PayloadContext::default(), false).unwrap();
    assert_eq!(
        payload,
        json!({"course": {"attendance": {"trainee": {"contactNumber": {"areaCode": null}}}}})
    );
}

/// Building twice without mutation yields the same tree and the same text.
#[test]
fn payload_is_idempotent() {
    for model in all_samples() {
        let first = model.payload(&ctx(), false).unwrap();
        let second = model.payload(&ctx(), false).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            model.payload_json(&ctx(), false).unwrap(),
            model.payload_json(&ctx(), false).unwrap()
        );
    }
}

// ---------------------------------------------------------------------------
// Test: documented examples
// ---------------------------------------------------------------------------

/// Employer sponsorship without an employer UEN is reported.
#[test]
fn employer_sponsorship_without_uen_mentions_employer_uen() {
    let mut model = CreateEnrolmentInfo::new();
    model.set_trainee_sponsorship_type(SponsorshipType::Employer);

    let errors = model.validate().errors;
    assert!(errors.iter().any(|e| e.contains("Employer UEN")), "{errors:?}");
}

/// An untouched session edit carries only its action.
#[test]
fn bare_session_edit_is_action_only() {
    let payload = RunSessionEditInfo::new().payload(&ctx(), true).unwrap();
    assert_eq!(payload, json!({"action": "update"}));
}

/// Raw wire codes parse into enums at the boundary, and unknown codes fail.
#[test]
fn raw_codes_parse_at_the_boundary() {
    assert_eq!("SB".parse::<IdType>().unwrap(), IdType::SingaporeBlue);
    assert_matches!(
        "XX".parse::<IdType>(),
        Err(CoreError::UnknownCode { kind: "ID type", .. })
    );
}

/// Pretty JSON uses a four-space indent.
#[test]
fn payload_json_is_pretty_printed() {
    let mut model = CancelEnrolmentInfo::new();
    model.set_course_run_id("10026").unwrap();

    let text = model.payload_json(&ctx(), true).unwrap();
    assert!(text.starts_with("{\n    \"enrolment\": {\n        \"action\": \"Cancel\""));
}

//! Enrolment request models: create, update, cancel, fee collection, search.

use chrono::NaiveDate;
use serde_json::{json, Value};

use super::{
    check_numeric_part, error_if_specified_empty, resolve_uen, warn_if_specified_empty,
    MAX_TRAINING_PARTNER_CODE_LEN,
};
use crate::constants::{
    CancellableCollectionStatus, CollectionStatus, EnrolmentCourseStatus, EnrolmentSortField,
    IdTypeSummary, SortOrder, SponsorshipType,
};
use crate::error::CoreError;
use crate::model::{iso_date, non_negative, PayloadContext, RequestModel};
use crate::validation::{is_blank, non_empty, ValidationReport};
use crate::verify::{is_numeric, verify_email, verify_uen};

/// Largest page the search endpoint serves.
pub const MAX_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// CreateEnrolmentInfo
// ---------------------------------------------------------------------------

/// Body of a new enrolment record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateEnrolmentInfo {
    course_run_id: Option<String>,
    course_reference_number: Option<String>,
    trainee_id: Option<String>,
    trainee_fees_discount_amount: Option<f64>,
    trainee_fees_collection_status: Option<CollectionStatus>,
    trainee_id_type: Option<IdTypeSummary>,
    employer_uen: Option<String>,
    employer_full_name: Option<String>,
    employer_email_address: Option<String>,
    employer_area_code: Option<String>,
    employer_country_code: Option<String>,
    employer_phone_number: Option<String>,
    trainee_full_name: Option<String>,
    trainee_date_of_birth: Option<NaiveDate>,
    trainee_email_address: Option<String>,
    trainee_area_code: Option<String>,
    trainee_country_code: Option<String>,
    trainee_phone_number: Option<String>,
    trainee_enrolment_date: Option<NaiveDate>,
    trainee_sponsorship_type: Option<SponsorshipType>,
    training_partner_uen: Option<String>,
    training_partner_code: Option<String>,
}

impl CreateEnrolmentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(course_run_id, set_course_run_id, "course run ID", 20);
    text_field!(
        course_reference_number,
        set_course_reference_number,
        "course reference number",
        100
    );
    text_field!(trainee_id, set_trainee_id, "trainee ID", 20);

    pub fn trainee_fees_discount_amount(&self) -> Option<f64> {
        self.trainee_fees_discount_amount
    }

    pub fn set_trainee_fees_discount_amount(&mut self, amount: f64) -> Result<&mut Self, CoreError> {
        self.trainee_fees_discount_amount = Some(non_negative("discount amount", amount)?);
        Ok(self)
    }

    value_field!(
        trainee_fees_collection_status,
        set_trainee_fees_collection_status,
        CollectionStatus
    );
    value_field!(trainee_id_type, set_trainee_id_type, IdTypeSummary);
    text_field!(employer_uen, set_employer_uen, "employer UEN", 50);
    text_field!(employer_full_name, set_employer_full_name, "employer full name", 50);
    text_field!(
        employer_email_address,
        set_employer_email_address,
        "employer email address",
        100
    );
    text_field!(employer_area_code, set_employer_area_code, "employer area code", 10);
    text_field!(employer_country_code, set_employer_country_code, "employer country code", 5);
    text_field!(employer_phone_number, set_employer_phone_number, "employer phone number", 20);
    text_field!(trainee_full_name, set_trainee_full_name, "trainee full name", 200);
    value_field!(trainee_date_of_birth, set_trainee_date_of_birth, NaiveDate);
    text_field!(
        trainee_email_address,
        set_trainee_email_address,
        "trainee email address",
        100
    );
    text_field!(trainee_area_code, set_trainee_area_code, "trainee area code", 10);
    text_field!(trainee_country_code, set_trainee_country_code, "trainee country code", 5);
    text_field!(trainee_phone_number, set_trainee_phone_number, "trainee phone number", 20);
    value_field!(trainee_enrolment_date, set_trainee_enrolment_date, NaiveDate);
    value_field!(trainee_sponsorship_type, set_trainee_sponsorship_type, SponsorshipType);
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

    /// `true` when a training-partner UEN replaces the caller's own.
    pub fn has_overridden_uen(&self) -> bool {
        non_empty(&self.training_partner_uen).is_some()
    }

    fn is_employer_sponsored(&self) -> bool {
        self.trainee_sponsorship_type == Some(SponsorshipType::Employer)
    }

    fn validate_employer(&self, report: &mut ValidationReport) {
        if self.is_employer_sponsored() {
            if is_blank(&self.employer_uen) {
                report.error("No valid Employer UEN specified!");
            }
            if is_blank(&self.employer_full_name) {
                report.error("No valid Employer Full Name specified!");
            }
            if is_blank(&self.employer_email_address) {
                report.error("No valid Employer Email Address specified!");
            }
            if is_blank(&self.employer_country_code) {
                report.error("No valid Employer Contact Number Country Code specified!");
            }
            if is_blank(&self.employer_phone_number) {
                report.error("No valid Employer Contact Number Phone Number specified!");
            }
        } else {
            warn_if_specified_empty(
                report,
                &self.employer_uen,
                "Employer UEN is empty even though it is marked as specified!",
            );
            warn_if_specified_empty(
                report,
                &self.employer_full_name,
                "Employer Full Name is empty even though it is marked as specified!",
            );
            warn_if_specified_empty(
                report,
                &self.employer_email_address,
                "Employer Email Address is empty even though it is marked as specified!",
            );
            check_numeric_part(
                report,
                &self.employer_country_code,
                "Employer Country Code",
                "Employer Country Code is empty even though it is marked as specified!",
            );
            check_numeric_part(
                report,
                &self.employer_phone_number,
                "Employer Phone Number",
                "Employer Phone Number is empty even though it is marked as specified!",
            );
        }

        if let Some(uen) = non_empty(&self.employer_uen) {
            if !verify_uen(uen) {
                report.error("Employer UEN is not valid!");
            }
        }
        if let Some(email) = non_empty(&self.employer_email_address) {
            if !verify_email(email) {
                report.error("Employer Email Address specified is not of the correct format!");
            }
        }
        check_numeric_part(
            report,
            &self.employer_area_code,
            "Employer Area Code",
            "Employer Contact Number Area Code is empty even though it is marked as specified!",
        );
    }

    fn validate_trainee(&self, report: &mut ValidationReport) {
        if is_blank(&self.trainee_id) {
            report.error("No Trainee ID specified!");
        }
        if self.trainee_fees_discount_amount.is_some()
            && self.trainee_fees_collection_status.is_none()
        {
            report.error("No valid Fees Collection Status specified!");
        }
        if self.trainee_date_of_birth.is_none() {
            report.error("No valid Trainee Date Of Birth specified!");
        }
        match non_empty(&self.trainee_email_address) {
            None => report.error("No valid Trainee Email Address specified!"),
            Some(email) if !verify_email(email) => {
                report.error("Trainee Email specified is not of the correct format!")
            }
            Some(_) => {}
        }
        match self.trainee_country_code.as_deref() {
            Some("") => report.error("No valid Trainee Country Code specified!"),
            Some(code) if !is_numeric(code) => report.error("Trainee Country Code is not a number!"),
            _ => {}
        }
        error_if_specified_empty(
            report,
            &self.trainee_phone_number,
            "No valid Trainee Phone Number specified!",
        );
        check_numeric_part(
            report,
            &self.trainee_area_code,
            "Trainee Area Code",
            "Trainee Area Code is empty though it is marked as specified!",
        );
    }
}

impl RequestModel for CreateEnrolmentInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        error_if_specified_empty(
            &mut report,
            &self.course_run_id,
            "Course Run ID is empty even though it is marked as specified!",
        );
        if is_blank(&self.course_reference_number) {
            report.error("No valid Course Reference Number specified!");
        }
        if is_blank(&self.training_partner_code) {
            report.error("No valid Training Partner Code specified!");
        }
        if let Some(uen) = &self.training_partner_uen {
            if !verify_uen(uen) {
                report.error("Overridden Training Partner UEN provided is invalid!");
            }
        }

        self.validate_employer(&mut report);
        self.validate_trainee(&mut report);
        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        json!({
            "enrolment": {
                "course": {
                    "run": {
                        "id": self.course_run_id,
                    },
                    "referenceNumber": self.course_reference_number,
                },
                "trainee": {
                    "id": self.trainee_id,
                    "fees": {
                        "discountAmount": self.trainee_fees_discount_amount,
                        "collectionStatus": self.trainee_fees_collection_status.map(CollectionStatus::code),
                    },
                    "idType": {
                        "type": self.trainee_id_type.map(IdTypeSummary::code),
                    },
                    "employer": {
                        "uen": self.employer_uen,
                        "contact": {
                            "fullName": self.employer_full_name,
                            "emailAddress": self.employer_email_address,
                            "contactNumber": {
                                "areaCode": self.employer_area_code,
                                "countryCode": self.employer_country_code,
                                "phoneNumber": self.employer_phone_number,
                            },
                        },
                    },
                    "fullName": self.trainee_full_name,
                    "dateOfBirth": iso_date(self.trainee_date_of_birth),
                    "emailAddress": self.trainee_email_address,
                    "contactNumber": {
                        "areaCode": self.trainee_area_code,
                        "countryCode": self.trainee_country_code,
                        "phoneNumber": self.trainee_phone_number,
                    },
                    "enrolmentDate": iso_date(self.trainee_enrolment_date),
                    "sponsorshipType": self.trainee_sponsorship_type.map(SponsorshipType::code),
                },
                "trainingPartner": {
                    "uen": resolve_uen(&self.training_partner_uen, ctx),
                    "code": self.training_partner_code,
                },
            }
        })
    }
}

// ---------------------------------------------------------------------------
// UpdateEnrolmentInfo
// ---------------------------------------------------------------------------

/// Changes to an existing enrolment record.
///
/// Only the fields the update endpoint accepts are present; identity fields
/// (trainee ID, course reference, training partner) cannot change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEnrolmentInfo {
    course_run_id: Option<String>,
    trainee_fees_discount_amount: Option<f64>,
    trainee_fees_collection_status: Option<CancellableCollectionStatus>,
    employer_full_name: Option<String>,
    employer_email_address: Option<String>,
    employer_area_code: Option<String>,
    employer_country_code: Option<String>,
    employer_phone_number: Option<String>,
    trainee_email_address: Option<String>,
    trainee_area_code: Option<String>,
    trainee_country_code: Option<String>,
    trainee_phone_number: Option<String>,
}

impl UpdateEnrolmentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(course_run_id, set_course_run_id, "course run ID", 20);

    pub fn trainee_fees_discount_amount(&self) -> Option<f64> {
        self.trainee_fees_discount_amount
    }

    pub fn set_trainee_fees_discount_amount(&mut self, amount: f64) -> Result<&mut Self, CoreError> {
        self.trainee_fees_discount_amount = Some(non_negative("discount amount", amount)?);
        Ok(self)
    }

    value_field!(
        trainee_fees_collection_status,
        set_trainee_fees_collection_status,
        CancellableCollectionStatus
    );
    text_field!(employer_full_name, set_employer_full_name, "employer full name", 50);
    text_field!(
        employer_email_address,
        set_employer_email_address,
        "employer email address",
        100
    );
    text_field!(employer_area_code, set_employer_area_code, "employer area code", 10);
    text_field!(employer_country_code, set_employer_country_code, "employer country code", 5);
    text_field!(employer_phone_number, set_employer_phone_number, "employer phone number", 20);
    text_field!(
        trainee_email_address,
        set_trainee_email_address,
        "trainee email address",
        100
    );
    text_field!(trainee_area_code, set_trainee_area_code, "trainee area code", 10);
    text_field!(trainee_country_code, set_trainee_country_code, "trainee country code", 5);
    text_field!(trainee_phone_number, set_trainee_phone_number, "trainee phone number", 20);
}

impl RequestModel for UpdateEnrolmentInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        error_if_specified_empty(
            &mut report,
            &self.course_run_id,
            "Course Run ID is empty even though it was marked as specified!",
        );
        if let Some(email) = non_empty(&self.employer_email_address) {
            if !verify_email(email) {
                report.error("Employer Email Address specified is not of the correct format!");
            }
        }
        if let Some(email) = non_empty(&self.trainee_email_address) {
            if !verify_email(email) {
                report.error("Trainee Email Address specified is not of the correct format!");
            }
        }

        warn_if_specified_empty(
            &mut report,
            &self.employer_full_name,
            "Employer Full Name is empty even though it was marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &self.employer_email_address,
            "Employer Email Address is empty even though it was marked as specified!",
        );
        check_numeric_part(
            &mut report,
            &self.employer_area_code,
            "Employer Area Code",
            "Employer Area Code is empty even though it was marked as specified!",
        );
        check_numeric_part(
            &mut report,
            &self.employer_country_code,
            "Employer Country Code",
            "Employer Country Code is empty even though it was marked as specified!",
        );
        check_numeric_part(
            &mut report,
            &self.employer_phone_number,
            "Employer Phone Number",
            "Employer Phone Number is empty even though it was marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &self.trainee_email_address,
            "Trainee Email Address is empty even though it was marked as specified!",
        );
        check_numeric_part(
            &mut report,
            &self.trainee_area_code,
            "Trainee Area Code",
            "Trainee Area Code is empty even though it was marked as specified!",
        );
        check_numeric_part(
            &mut report,
            &self.trainee_country_code,
            "Trainee Country Code",
            "Trainee Country Code is empty though it was marked as specified!",
        );
        check_numeric_part(
            &mut report,
            &self.trainee_phone_number,
            "Trainee Phone Number",
            "Trainee Phone Number is empty though it was marked as specified!",
        );

        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        json!({
            "enrolment": {
                "fees": {
                    "discountAmount": self.trainee_fees_discount_amount,
                    "collectionStatus": self
                        .trainee_fees_collection_status
                        .map(CancellableCollectionStatus::code),
                },
                "action": "Update",
                "course": {
                    "run": {
                        "id": self.course_run_id,
                    },
                },
                "trainee": {
                    "email": self.trainee_email_address,
                    "contactNumber": {
                        "areaCode": self.trainee_area_code,
                        "countryCode": self.trainee_country_code,
                        "phoneNumber": self.trainee_phone_number,
                    },
                },
                "employer": {
                    "contact": {
                        "email": self.employer_email_address,
                        "fullName": self.employer_full_name,
                        "contactNumber": {
                            "areaCode": self.employer_area_code,
                            "countryCode": self.employer_country_code,
                            "phoneNumber": self.employer_phone_number,
                        },
                    },
                },
            }
        })
    }
}

// ---------------------------------------------------------------------------
// CancelEnrolmentInfo
// ---------------------------------------------------------------------------

/// Cancellation of an enrolment record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelEnrolmentInfo {
    course_run_id: Option<String>,
}

impl CancelEnrolmentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(course_run_id, set_course_run_id, "course run ID", 20);
}

impl RequestModel for CancelEnrolmentInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        error_if_specified_empty(
            &mut report,
            &self.course_run_id,
            "No valid Course Run ID specified!",
        );
        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        json!({
            "enrolment": {
                "action": "Cancel",
                "course": {
                    "run": {
                        "id": self.course_run_id,
                    },
                },
            }
        })
    }
}

// ---------------------------------------------------------------------------
// UpdateEnrolmentFeeCollectionInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateEnrolmentFeeCollectionInfo {
    trainee_fees_collection_status: Option<CancellableCollectionStatus>,
}

impl UpdateEnrolmentFeeCollectionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(
        trainee_fees_collection_status,
        set_trainee_fees_collection_status,
        CancellableCollectionStatus
    );
}

impl RequestModel for UpdateEnrolmentFeeCollectionInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.trainee_fees_collection_status.is_none() {
            report.error("No Fee Collection Status provided");
        }
        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        json!({
            "enrolment": {
                "fees": {
                    "collectionStatus": self
                        .trainee_fees_collection_status
                        .map(CancellableCollectionStatus::code),
                },
            }
        })
    }
}

// ---------------------------------------------------------------------------
// SearchEnrolmentInfo
// ---------------------------------------------------------------------------

/// Filters, sort order and paging for an enrolment search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEnrolmentInfo {
    last_update_date_to: Option<NaiveDate>,
    last_update_date_from: Option<NaiveDate>,
    sort_by_field: Option<EnrolmentSortField>,
    sort_by_order: Option<SortOrder>,
    course_run_id: Option<String>,
    course_reference_number: Option<String>,
    course_status: Option<EnrolmentCourseStatus>,
    trainee_id: Option<String>,
    trainee_fees_collection_status: Option<CancellableCollectionStatus>,
    trainee_id_type: Option<IdTypeSummary>,
    employer_uen: Option<String>,
    trainee_enrolment_date: Option<NaiveDate>,
    trainee_sponsorship_type: Option<SponsorshipType>,
    training_partner_uen: Option<String>,
    training_partner_code: Option<String>,
    page: Option<u32>,
    page_size: Option<u32>,
}

impl SearchEnrolmentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(last_update_date_to, set_last_update_date_to, NaiveDate);
    value_field!(last_update_date_from, set_last_update_date_from, NaiveDate);
    value_field!(sort_by_field, set_sort_by_field, EnrolmentSortField);
    value_field!(sort_by_order, set_sort_by_order, SortOrder);
    text_field!(course_run_id, set_course_run_id, "course run ID", 20);
    text_field!(
        course_reference_number,
        set_course_reference_number,
        "course reference number",
        100
    );
    value_field!(course_status, set_course_status, EnrolmentCourseStatus);
    text_field!(trainee_id, set_trainee_id, "trainee ID", 20);
    value_field!(
        trainee_fees_collection_status,
        set_trainee_fees_collection_status,
        CancellableCollectionStatus
    );
    value_field!(trainee_id_type, set_trainee_id_type, IdTypeSummary);
    text_field!(employer_uen, set_employer_uen, "employer UEN", 50);
    value_field!(trainee_enrolment_date, set_trainee_enrolment_date, NaiveDate);
    value_field!(trainee_sponsorship_type, set_trainee_sponsorship_type, SponsorshipType);
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
    value_field!(page, set_page, u32);

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Results per page, between 1 and [`MAX_PAGE_SIZE`].
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

    pub fn has_overridden_uen(&self) -> bool {
        non_empty(&self.training_partner_uen).is_some()
    }
}

impl RequestModel for SearchEnrolmentInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let Some(uen) = non_empty(&self.training_partner_uen) {
            if !verify_uen(uen) {
                report.error("Invalid Training Partner UEN provided!");
            }
        }
        if is_blank(&self.training_partner_code) {
            report.error("Invalid Training Partner Code provided!");
        }

        if let (Some(from), Some(to)) = (self.last_update_date_from, self.last_update_date_to) {
            if from > to {
                report.warn("Last Update Date From should not be after Date To!");
            }
        }
        warn_if_specified_empty(
            &mut report,
            &self.course_run_id,
            "Course Run ID is empty even though it is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &self.course_reference_number,
            "Course Reference Number is empty even though it is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &self.trainee_id,
            "Trainee ID is empty even though it is marked as specified!",
        );

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        json!({
            "meta": {
                "lastUpdateDateTo": iso_date(self.last_update_date_to),
                "lastUpdateDateFrom": iso_date(self.last_update_date_from),
            },
            "sortBy": {
                "field": self.sort_by_field.map(EnrolmentSortField::code),
                "order": self.sort_by_order.map(SortOrder::code),
            },
            "enrolment": {
                "course": {
                    "run": {
                        "id": self.course_run_id,
                    },
                    "referenceNumber": self.course_reference_number,
                },
                "status": self.course_status.map(EnrolmentCourseStatus::code),
                "trainee": {
                    "id": self.trainee_id,
                    "fees": {
                        "feeCollectionStatus": self
                            .trainee_fees_collection_status
                            .map(CancellableCollectionStatus::code),
                    },
                    "idType": {
                        "type": self.trainee_id_type.map(IdTypeSummary::code),
                    },
                    "employer": {
                        "uen": self.employer_uen,
                    },
                    "enrolmentDate": iso_date(self.trainee_enrolment_date),
                    "sponsorshipType": self.trainee_sponsorship_type.map(SponsorshipType::code),
                },
                "trainingPartner": {
                    "uen": resolve_uen(&self.training_partner_uen, ctx),
                    "code": self.training_partner_code,
                },
            },
            "parameters": {
                "page": self.page,
                "pageSize": self.page_size,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn complete_individual_enrolment() -> CreateEnrolmentInfo {
        let mut info = CreateEnrolmentInfo::new();
        info.set_course_reference_number("TGS-2020000697").unwrap();
        info.set_course_run_id("835457").unwrap();
        info.set_trainee_id("S0118316H").unwrap();
        info.set_trainee_full_name("Jon Chua").unwrap();
        info.set_trainee_date_of_birth(date(1950, 10, 16));
        info.set_trainee_email_address("abc@abc.com").unwrap();
        info.set_trainee_country_code("65").unwrap();
        info.set_trainee_phone_number("88881234").unwrap();
        info.set_trainee_sponsorship_type(SponsorshipType::Individual);
        info.set_training_partner_code("199900650G-01").unwrap();
        info
    }

    #[test]
    fn fresh_create_has_errors() {
        assert!(!CreateEnrolmentInfo::new().validate().is_valid());
    }

    #[test]
    fn complete_individual_enrolment_is_valid() {
        let report = complete_individual_enrolment().validate();
        assert!(report.is_valid(), "{:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn training_partner_code_accepts_ten_character_uen_branch() {
        let mut create = CreateEnrolmentInfo::new();
        create.set_training_partner_code("199900650G-01").unwrap();
        assert_eq!(create.training_partner_code(), Some("199900650G-01"));

        let mut search = SearchEnrolmentInfo::new();
        search.set_training_partner_code("199900650G-01").unwrap();
        assert_eq!(search.training_partner_code(), Some("199900650G-01"));

        assert_matches!(
            create.set_training_partner_code("199900650G-01234"),
            Err(CoreError::InvalidField { field: "training partner code", .. })
        );
    }

    #[test]
    fn employer_sponsorship_requires_employer_details() {
        let mut info = CreateEnrolmentInfo::new();
        info.set_trainee_sponsorship_type(SponsorshipType::Employer);

        let errors = info.validate().errors;
        assert!(errors.iter().any(|e| e.contains("Employer UEN")));
        assert!(errors.contains(&"No valid Employer Email Address specified!".to_string()));
        assert!(errors
            .contains(&"No valid Employer Contact Number Phone Number specified!".to_string()));
    }

    #[test]
    fn empty_employer_fields_only_warn_for_individuals() {
        let mut info = complete_individual_enrolment();
        info.set_employer_uen("").unwrap();
        info.set_employer_country_code("+65").unwrap();

        let report = info.validate();
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec![
                "Employer UEN is empty even though it is marked as specified!",
                "Employer Country Code is not a number!",
            ]
        );
    }

    #[test]
    fn discount_needs_collection_status() {
        let mut info = complete_individual_enrolment();
        info.set_trainee_fees_discount_amount(50.0).unwrap();
        assert_eq!(info.validate().errors, vec!["No valid Fees Collection Status specified!"]);

        info.set_trainee_fees_collection_status(CollectionStatus::FullPayment);
        assert!(info.validate().is_valid());
    }

    #[test]
    fn negative_discount_is_rejected_at_set_time() {
        let mut info = CreateEnrolmentInfo::new();
        assert_matches!(
            info.set_trainee_fees_discount_amount(-1.0),
            Err(CoreError::InvalidField { field: "discount amount", .. })
        );
        assert_eq!(info.trainee_fees_discount_amount(), None);
    }

    #[test]
    fn over_long_value_is_rejected() {
        let mut info = CreateEnrolmentInfo::new();
        assert!(info.set_course_run_id("x".repeat(21)).is_err());
        assert_eq!(info.course_run_id(), None);
    }

    #[test]
    fn invalid_formats_are_errors() {
        let mut info = complete_individual_enrolment();
        info.set_trainee_email_address("not-an-email").unwrap();
        info.set_trainee_country_code("6S").unwrap();
        info.set_training_partner_uen("BAD").unwrap();

        let errors = info.validate().errors;
        assert_eq!(
            errors,
            vec![
                "Overridden Training Partner UEN provided is invalid!",
                "Trainee Email specified is not of the correct format!",
                "Trainee Country Code is not a number!",
            ]
        );
    }

    #[test]
    fn create_payload_shape() {
        let mut info = complete_individual_enrolment();
        info.set_trainee_id_type(IdTypeSummary::Nric);
        info.set_trainee_enrolment_date(date(2024, 1, 31));

        let payload = info
            .payload(&PayloadContext::with_uen("199900650G"), true)
            .unwrap();
        assert_eq!(
            payload,
            json!({
                "enrolment": {
                    "course": {"run": {"id": "835457"}, "referenceNumber": "TGS-2020000697"},
                    "trainee": {
                        "id": "S0118316H",
                        "idType": {"type": "NRIC"},
                        "fullName": "Jon Chua",
                        "dateOfBirth": "1950-10-16",
                        "emailAddress": "abc@abc.com",
                        "contactNumber": {"countryCode": "65", "phoneNumber": "88881234"},
                        "enrolmentDate": "2024-01-31",
                        "sponsorshipType": "INDIVIDUAL"
                    },
                    "trainingPartner": {"uen": "199900650G", "code": "199900650G-01"}
                }
            })
        );
    }

    #[test]
    fn overridden_uen_wins_over_context() {
        let mut info = complete_individual_enrolment();
        info.set_training_partner_uen("T16GB0003C").unwrap();
        assert!(info.has_overridden_uen());

        let payload = info
            .payload(&PayloadContext::with_uen("199900650G"), true)
            .unwrap();
        assert_eq!(payload["enrolment"]["trainingPartner"]["uen"], "T16GB0003C");
    }

    #[test]
    fn update_payload_shape() {
        let mut info = UpdateEnrolmentInfo::new();
        info.set_course_run_id("10026").unwrap();
        info.set_trainee_fees_collection_status(CancellableCollectionStatus::Cancelled);
        info.set_trainee_email_address("new@mail.com").unwrap();

        let payload = info.payload(&PayloadContext::default(), true).unwrap();
        assert_eq!(
            payload,
            json!({
                "enrolment": {
                    "fees": {"collectionStatus": "Cancelled"},
                    "action": "Update",
                    "course": {"run": {"id": "10026"}},
                    "trainee": {"email": "new@mail.com"}
                }
            })
        );
    }

    #[test]
    fn update_warns_on_non_numeric_contact() {
        let mut info = UpdateEnrolmentInfo::new();
        info.set_trainee_phone_number("9123 4567").unwrap();
        info.set_employer_area_code("").unwrap();

        let report = info.validate();
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec![
                "Employer Area Code is empty even though it was marked as specified!",
                "Trainee Phone Number is not a number!",
            ]
        );
    }

    #[test]
    fn cancel_payload_and_empty_run_id() {
        let mut info = CancelEnrolmentInfo::new();
        assert_eq!(
            info.payload(&PayloadContext::default(), true).unwrap(),
            json!({"enrolment": {"action": "Cancel"}})
        );

        info.set_course_run_id("").unwrap();
        assert_matches!(
            info.payload(&PayloadContext::default(), true),
            Err(CoreError::NotReady { .. })
        );
    }

    #[test]
    fn fee_collection_requires_status() {
        let mut info = UpdateEnrolmentFeeCollectionInfo::new();
        assert_eq!(info.validate().errors, vec!["No Fee Collection Status provided"]);

        info.set_trainee_fees_collection_status(CancellableCollectionStatus::FullPayment);
        assert_eq!(
            info.payload(&PayloadContext::default(), true).unwrap(),
            json!({"enrolment": {"fees": {"collectionStatus": "Full Payment"}}})
        );
    }

    #[test]
    fn search_date_order_only_warns() {
        let mut info = SearchEnrolmentInfo::new();
        info.set_training_partner_code("199900650G-01").unwrap();
        info.set_last_update_date_from(date(2024, 2, 1));
        info.set_last_update_date_to(date(2024, 1, 1));

        let report = info.validate();
        assert!(report.is_valid());
        assert_eq!(report.warnings, vec!["Last Update Date From should not be after Date To!"]);
    }

    #[test]
    fn search_page_size_bounds() {
        let mut info = SearchEnrolmentInfo::new();
        assert!(info.set_page_size(0).is_err());
        assert!(info.set_page_size(101).is_err());
        assert_eq!(info.set_page_size(100).unwrap().page_size(), Some(100));
    }

    #[test]
    fn search_payload_shape() {
        let mut info = SearchEnrolmentInfo::new();
        info.set_training_partner_code("199900650G-01").unwrap();
        info.set_sort_by_field(EnrolmentSortField::UpdatedOn);
        info.set_sort_by_order(SortOrder::Ascending);
        info.set_course_status(EnrolmentCourseStatus::Confirmed);
        info.set_page(0);
        info.set_page_size(20).unwrap();

        let payload = info
            .payload(&PayloadContext::with_uen("199900650G"), true)
            .unwrap();
        assert_eq!(
            payload,
            json!({
                "sortBy": {"field": "updatedOn", "order": "asc"},
                "enrolment": {
                    "status": "Confirmed",
                    "trainingPartner": {"uen": "199900650G", "code": "199900650G-01"}
                },
                "parameters": {"page": 0, "pageSize": 20}
            })
        );
    }
}

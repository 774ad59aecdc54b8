//! SkillsFuture Credit claim models.

use chrono::NaiveDate;
use serde_json::{json, Value};

use super::{encode_content, error_if_specified_empty, warn_if_specified_empty};
use crate::constants::{CancelClaimsCode, PermittedFileUploadType};
use crate::error::CoreError;
use crate::model::{iso_date, non_negative, PayloadContext, RequestModel};
use crate::validation::ValidationReport;
use crate::verify::{verify_email, verify_nric};

const NRIC_LENGTH: usize = 9;

fn is_nric_shaped(nric: &Option<String>) -> bool {
    nric.as_deref()
        .is_some_and(|n| n.chars().count() == NRIC_LENGTH)
}

// ---------------------------------------------------------------------------
// EncryptPayloadInfo
// ---------------------------------------------------------------------------

/// Claim details to be encrypted by the credit service before the trainee
/// submits the claim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncryptPayloadInfo {
    course_id: Option<String>,
    course_fee: Option<f64>,
    course_run_id: Option<String>,
    start_date: Option<NaiveDate>,
    nric: Option<String>,
    email: Option<String>,
    home_number: Option<String>,
    mobile_number: Option<String>,
    additional_information: Option<String>,
}

impl EncryptPayloadInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(course_id, set_course_id);

    pub fn course_fee(&self) -> Option<f64> {
        self.course_fee
    }

    pub fn set_course_fee(&mut self, fee: f64) -> Result<&mut Self, CoreError> {
        self.course_fee = Some(non_negative("course fee", fee)?);
        Ok(self)
    }

    text_field!(course_run_id, set_course_run_id);
    value_field!(start_date, set_start_date, NaiveDate);
    text_field!(nric, set_nric);
    text_field!(email, set_email);
    text_field!(home_number, set_home_number);
    text_field!(mobile_number, set_mobile_number);
    text_field!(additional_information, set_additional_information);
}

impl RequestModel for EncryptPayloadInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if !self.nric.as_deref().is_some_and(verify_nric) {
            report.error("No valid NRIC number is provided!");
        }
        if !self.email.as_deref().is_some_and(verify_email) {
            report.error("No valid email address is provided!");
        }
        error_if_specified_empty(
            &mut report,
            &self.course_id,
            "No valid Course ID is provided!",
        );
        if self.home_number.as_deref() == Some("") && self.mobile_number.as_deref() == Some("") {
            report.error("Either Home Number or Mobile Number must be provided!");
        }

        warn_if_specified_empty(
            &mut report,
            &self.course_run_id,
            "Course Run ID is empty even though it was marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &self.additional_information,
            "Additional Information is empty even though it was marked as specified!",
        );

        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        json!({
            "claimRequest": {
                "course": {
                    "id": self.course_id,
                    "fee": self.course_fee.map(|fee| format!("{fee:.2}")),
                    "runId": self.course_run_id,
                    "startDate": iso_date(self.start_date),
                },
                "individual": {
                    "nric": self.nric,
                    "email": self.email,
                    "homeNumber": self.home_number,
                    "mobileNumber": self.mobile_number,
                },
                "additionalInformation": self.additional_information,
            }
        })
    }
}

// ---------------------------------------------------------------------------
// DecryptPayloadInfo
// ---------------------------------------------------------------------------

/// Encrypted claim status returned to the training provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecryptPayloadInfo {
    encrypted_request: Option<String>,
}

impl DecryptPayloadInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(encrypted_request, set_encrypted_request);
}

impl RequestModel for DecryptPayloadInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        warn_if_specified_empty(
            &mut report,
            &self.encrypted_request,
            "Encrypted Request is empty even though it was marked as specified!",
        );
        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        json!({ "claimRequestStatus": self.encrypted_request })
    }
}

// ---------------------------------------------------------------------------
// DocumentInfo
// ---------------------------------------------------------------------------

/// One supporting document attached to a claim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    file_name: Option<String>,
    file_size: Option<String>,
    file_type: Option<PermittedFileUploadType>,
    attachment_id: Option<String>,
    attachment: Option<Vec<u8>>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document read from a file: name, type, size and content are filled
    /// in together. Fails when the extension is not an accepted upload type.
    pub fn from_file(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Result<Self, CoreError> {
        let name = name.into();
        let file_type = PermittedFileUploadType::from_file_name(&name)?;
        let mut doc = Self {
            file_name: Some(name),
            file_type: Some(file_type),
            attachment: Some(content.into()),
            ..Self::default()
        };
        doc.file_size = Some(doc.formatted_size());
        Ok(doc)
    }

    text_field!(file_name, set_file_name, "file name", 255);
    text_field!(file_size, set_file_size, "file size", 20);
    value_field!(file_type, set_file_type, PermittedFileUploadType);
    text_field!(attachment_id, set_attachment_id, "attachment ID", 50);

    pub fn attachment(&self) -> Option<&[u8]> {
        self.attachment.as_deref()
    }

    pub fn set_attachment(&mut self, content: impl Into<Vec<u8>>) -> &mut Self {
        self.attachment = Some(content.into());
        self
    }

    pub fn has_file(&self) -> bool {
        self.attachment.is_some()
    }

    /// Attachment size in megabytes (10^6 bytes), rounded to three places.
    /// Zero without an attachment.
    pub fn file_size_mb(&self) -> f64 {
        self.attachment
            .as_ref()
            .map(|bytes| (bytes.len() as f64 / 1_000.0).round() / 1_000.0)
            .unwrap_or(0.0)
    }

    /// `"<size> MB"`, or empty without an attachment.
    pub fn formatted_size(&self) -> String {
        if self.has_file() {
            format!("{} MB", self.file_size_mb())
        } else {
            String::new()
        }
    }
}

impl RequestModel for DocumentInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        error_if_specified_empty(&mut report, &self.file_name, "File name cannot be empty!");
        error_if_specified_empty(&mut report, &self.file_size, "File size cannot be empty!");
        match self.attachment.as_deref() {
            None => report.error("No document uploaded!"),
            Some([]) => {
                report.error("Document uploaded is empty even though it was marked as specified!")
            }
            Some(_) => {}
        }

        warn_if_specified_empty(
            &mut report,
            &self.attachment_id,
            "Attachment ID is empty even though it was marked as specified!",
        );

        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        json!({
            "fileName": self.file_name,
            "fileSize": self.file_size,
            "fileType": self.file_type.map(PermittedFileUploadType::code),
            "attachmentId": self.attachment_id,
            "attachmentByte": encode_content(&self.attachment),
        })
    }
}

// ---------------------------------------------------------------------------
// UploadDocumentInfo
// ---------------------------------------------------------------------------

/// Supporting documents for an existing claim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDocumentInfo {
    nric: Option<String>,
    documents: Vec<DocumentInfo>,
}

impl UploadDocumentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(nric, set_nric);

    pub fn documents(&self) -> &[DocumentInfo] {
        &self.documents
    }

    pub fn add_document(&mut self, document: DocumentInfo) -> &mut Self {
        self.documents.push(document);
        self
    }
}

impl RequestModel for UploadDocumentInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.nric.is_some() && !is_nric_shaped(&self.nric) {
            report.error("No valid NRIC number was specified!");
        }
        for (i, doc) in self.documents.iter().enumerate() {
            report.merge_prefixed(&format!("**File {}**: ", i + 1), doc.validate());
        }

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        json!({
            "nric": self.nric,
            "attachments": self
                .documents
                .iter()
                .map(|doc| doc.build_payload(ctx))
                .collect::<Vec<_>>(),
        })
    }
}

// ---------------------------------------------------------------------------
// CancelClaimsInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelClaimsInfo {
    nric: Option<String>,
    claim_cancel_code: Option<CancelClaimsCode>,
}

impl CancelClaimsInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(nric, set_nric);
    value_field!(claim_cancel_code, set_claim_cancel_code, CancelClaimsCode);
}

impl RequestModel for CancelClaimsInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if !is_nric_shaped(&self.nric) {
            report.error("No valid NRIC number is provided!");
        }
        if self.claim_cancel_code.is_none() {
            report.error("No valid Claim Cancel Code is provided!");
        }
        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        json!({
            "nric": self.nric,
            "claimCancelCode": self.claim_cancel_code.map(CancelClaimsCode::code),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn encrypt_requires_nric_and_email() {
        let report = EncryptPayloadInfo::new().validate();
        assert_eq!(
            report.errors,
            vec!["No valid NRIC number is provided!", "No valid email address is provided!"]
        );
    }

    #[test]
    fn encrypt_rejects_bad_check_letter_and_malformed_email() {
        let mut info = EncryptPayloadInfo::new();
        info.set_nric("S1234567X").set_email("not-an-email");
        assert_eq!(
            info.validate().errors,
            vec!["No valid NRIC number is provided!", "No valid email address is provided!"]
        );
        assert_matches!(
            info.payload(&PayloadContext::default(), true),
            Err(CoreError::NotReady { .. })
        );

        info.set_nric("S1234567D").set_email("trainee@mail.com");
        assert!(info.validate().is_valid());
    }

    #[test]
    fn encrypt_needs_one_contact_number() {
        let mut info = EncryptPayloadInfo::new();
        info.set_nric("S1234567D").set_email("trainee@mail.com");
        info.set_home_number("").set_mobile_number("");
        assert_eq!(
            info.validate().errors,
            vec!["Either Home Number or Mobile Number must be provided!"]
        );

        info.set_mobile_number("91234567");
        assert!(info.validate().is_valid());
    }

    #[test]
    fn encrypt_payload_formats_fee_and_date() {
        let mut info = EncryptPayloadInfo::new();
        info.set_nric("S1234567D")
            .set_email("trainee@mail.com")
            .set_course_id("TGS-2020002096")
            .set_start_date(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
        info.set_course_fee(500.0).unwrap();

        let payload = info.payload(&PayloadContext::default(), true).unwrap();
        assert_eq!(
            payload,
            json!({
                "claimRequest": {
                    "course": {"id": "TGS-2020002096", "fee": "500.00", "startDate": "2024-05-06"},
                    "individual": {"nric": "S1234567D", "email": "trainee@mail.com"}
                }
            })
        );
    }

    #[test]
    fn negative_fee_is_rejected() {
        assert_matches!(
            EncryptPayloadInfo::new().set_course_fee(-5.0),
            Err(CoreError::InvalidField { field: "course fee", .. })
        );
    }

    #[test]
    fn decrypt_warns_on_empty_request() {
        let mut info = DecryptPayloadInfo::new();
        info.set_encrypted_request("");
        let report = info.validate();
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);

        info.set_encrypted_request("cipher");
        assert_eq!(
            info.payload(&PayloadContext::default(), true).unwrap(),
            json!({"claimRequestStatus": "cipher"})
        );
    }

    #[test]
    fn document_from_file_fills_metadata() {
        let doc = DocumentInfo::from_file("invoice.pdf", vec![0u8; 1500]).unwrap();
        assert!(doc.has_file());
        assert_eq!(doc.file_type(), Some(PermittedFileUploadType::Pdf));
        assert_eq!(doc.file_size_mb(), 0.002);
        assert_eq!(doc.file_size(), Some("0.002 MB"));
        assert!(doc.validate().is_valid());
    }

    #[test]
    fn document_rejects_unknown_extension() {
        assert_matches!(
            DocumentInfo::from_file("script.exe", b"MZ".to_vec()),
            Err(CoreError::UnknownCode { .. })
        );
    }

    #[test]
    fn document_without_content() {
        let doc = DocumentInfo::new();
        assert_eq!(doc.formatted_size(), "");
        assert_eq!(doc.file_size_mb(), 0.0);
        assert_eq!(doc.validate().errors, vec!["No document uploaded!"]);

        let mut empty = DocumentInfo::new();
        empty.set_attachment(Vec::new());
        assert_eq!(
            empty.validate().errors,
            vec!["Document uploaded is empty even though it was marked as specified!"]
        );
    }

    #[test]
    fn upload_prefixes_file_findings() {
        let mut info = UploadDocumentInfo::new();
        info.set_nric("S123");
        info.add_document(DocumentInfo::new());

        assert_eq!(
            info.validate().errors,
            vec![
                "No valid NRIC number was specified!",
                "**File 1**: No document uploaded!",
            ]
        );
    }

    #[test]
    fn upload_payload_encodes_attachment() {
        let mut info = UploadDocumentInfo::new();
        info.set_nric("S1234567A");
        info.add_document(DocumentInfo::from_file("a.png", b"abc".to_vec()).unwrap());

        let payload = info.payload(&PayloadContext::default(), true).unwrap();
        assert_eq!(
            payload["attachments"][0],
            json!({
                "fileName": "a.png",
                "fileSize": "0 MB",
                "fileType": "png",
                "attachmentByte": "YWJj"
            })
        );
    }

    #[test]
    fn cancel_claims_payload() {
        let mut info = CancelClaimsInfo::new();
        info.set_nric("S1234567A");
        assert_eq!(info.validate().errors, vec!["No valid Claim Cancel Code is provided!"]);

        info.set_claim_cancel_code(CancelClaimsCode::CourseCancelled);
        assert_eq!(
            info.payload(&PayloadContext::default(), true).unwrap(),
            json!({"nric": "S1234567A", "claimCancelCode": "53"})
        );
    }
}

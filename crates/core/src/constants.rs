//! Closed code/description sets used by the registry API.
//!
//! Every enum serializes by its wire code only. Raw codes coming from user
//! input are parsed once through [`std::str::FromStr`]; anything outside the
//! set is rejected with [`CoreError::UnknownCode`].

use crate::error::CoreError;

macro_rules! define_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:literal, $desc:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Value sent on the wire.
            pub fn code(self) -> &'static str {
                match self {
                    $( Self::$variant => $code ),+
                }
            }

            /// Human-readable label.
            pub fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $desc ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok(Self::$variant), )+
                    _ => Err(CoreError::UnknownCode {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Enrolment
// ---------------------------------------------------------------------------

define_code_enum! {
    /// Fee collection state of an enrolment.
    CollectionStatus ("collection status") {
        PendingPayment => ("Pending Payment", "Pending Payment"),
        PartialPayment => ("Partial Payment", "Partial Payment"),
        FullPayment => ("Full Payment", "Full Payment"),
    }
}

define_code_enum! {
    /// Fee collection state on update, which may also cancel the collection.
    CancellableCollectionStatus ("collection status") {
        PendingPayment => ("Pending Payment", "Pending Payment"),
        PartialPayment => ("Partial Payment", "Partial Payment"),
        FullPayment => ("Full Payment", "Full Payment"),
        Cancelled => ("Cancelled", "Cancelled"),
    }
}

impl From<CollectionStatus> for CancellableCollectionStatus {
    fn from(value: CollectionStatus) -> Self {
        match value {
            CollectionStatus::PendingPayment => Self::PendingPayment,
            CollectionStatus::PartialPayment => Self::PartialPayment,
            CollectionStatus::FullPayment => Self::FullPayment,
        }
    }
}

define_code_enum! {
    /// Trainee identification category on enrolment records.
    IdTypeSummary ("ID type") {
        Nric => ("NRIC", "NRIC"),
        Fin => ("FIN", "FIN"),
        Others => ("Others", "Others"),
    }
}

define_code_enum! {
    /// Who pays for the trainee.
    SponsorshipType ("sponsorship type") {
        Employer => ("EMPLOYER", "Employer"),
        Individual => ("INDIVIDUAL", "Individual"),
    }
}

define_code_enum! {
    EnrolmentSortField ("enrolment sort field") {
        UpdatedOn => ("updatedOn", "Updated On"),
        CreatedOn => ("createdOn", "Created On"),
    }
}

define_code_enum! {
    SortOrder ("sort order") {
        Ascending => ("asc", "Ascending"),
        Descending => ("desc", "Descending"),
    }
}

define_code_enum! {
    EnrolmentCourseStatus ("enrolment status") {
        Confirmed => ("Confirmed", "Confirmed"),
        Cancelled => ("Cancelled", "Cancelled"),
    }
}

// ---------------------------------------------------------------------------
// Course runs
// ---------------------------------------------------------------------------

define_code_enum! {
    /// Identification document type of a trainer or trainee.
    IdType ("ID type") {
        SingaporeBlue => ("SB", "Singapore Blue Identification Card"),
        SingaporePink => ("SP", "Singapore Pink Identification Card"),
        FinWorkPermit => ("SO", "Fin/Work Permit"),
        ForeignPassport => ("FP", "Foreign Passport"),
        Others => ("OT", "Others"),
    }
}

define_code_enum! {
    ModeOfTraining ("mode of training") {
        Classroom => ("1", "Classroom"),
        AsynchronousElearning => ("2", "Asynchronous eLearning"),
        InHouse => ("3", "In-house"),
        OnTheJob => ("4", "On-the-Job"),
        Practicum => ("5", "Practical / Practicum"),
        SupervisedField => ("6", "Supervised Field"),
        Traineeship => ("7", "Traineeship"),
        Assessment => ("8", "Assessment"),
        SynchronousLearning => ("9", "Synchronous Learning"),
    }
}

impl ModeOfTraining {
    /// Sessions in these modes have no fixed venue or timetable.
    pub fn is_asynchronous_or_on_the_job(self) -> bool {
        matches!(self, Self::AsynchronousElearning | Self::OnTheJob)
    }
}

define_code_enum! {
    Salutation ("salutation") {
        Mr => ("1", "Mr"),
        Ms => ("2", "Ms"),
        Mdm => ("3", "Mdm"),
        Mrs => ("4", "Mrs"),
        Dr => ("5", "Dr"),
        Prof => ("6", "Prof"),
    }
}

impl Salutation {
    /// Numeric identifier sent as `salutationId`.
    pub fn id(self) -> u8 {
        match self {
            Self::Mr => 1,
            Self::Ms => 2,
            Self::Mdm => 3,
            Self::Mrs => 4,
            Self::Dr => 5,
            Self::Prof => 6,
        }
    }
}

define_code_enum! {
    Vacancy ("vacancy") {
        Available => ("A", "Available"),
        Full => ("F", "Full"),
        LimitedVacancy => ("L", "Limited Vacancy"),
    }
}

define_code_enum! {
    /// Capacity in which a trainer is linked to a run.
    Role ("trainer role") {
        Trainer => ("1", "Trainer"),
        Assessor => ("2", "Assessor"),
    }
}

impl Role {
    pub fn id(self) -> u8 {
        match self {
            Self::Trainer => 1,
            Self::Assessor => 2,
        }
    }

    /// Wire form: `{"role": {"id": 1, "description": "Trainer"}}`.
    pub fn to_payload(self) -> serde_json::Value {
        serde_json::json!({
            "role": {
                "id": self.id(),
                "description": self.description(),
            }
        })
    }
}

define_code_enum! {
    /// Yes/No selector sent as a JSON boolean.
    OptionalSelector ("selector") {
        Yes => ("Yes", "Yes"),
        No => ("No", "No"),
    }
}

impl OptionalSelector {
    pub fn as_bool(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for OptionalSelector {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

define_code_enum! {
    TrainerType ("trainer type") {
        Existing => ("1", "Existing"),
        New => ("2", "New"),
    }
}

/// SSEC EQA codes and their descriptions.
pub const SSEC_EQA_MAPPINGS: &[(&str, &str)] = &[
    ("0", "NO FORMAL QUALIFICATION / PRE-PRIMARY / LOWER PRIMARY"),
    ("01", "Never attended school"),
    ("02", "Pre-Primary (i.e. Nursery, Kindergarten 1, Kindergarten 2)"),
    ("03", "Primary education without Primary School Leaving Examination (PSLE) / Primary School Proficiency Examination (PSPE) certificate or equivalent"),
    ("04", "Certificate in BEST 1-3"),
    ("1", "PRIMARY"),
    ("11", "Primary School Leaving Examination (PSLE) / Primary School Proficiency Examination (PSPE) certificate or equivalent"),
    ("12", "Certificate in BEST 4"),
    ("13", "At least 3 achievements for different Workplace Literacy or Numeracy (WPLN) skills at Level 1 or 2"),
    ("2", "LOWER SECONDARY"),
    ("21", "Secondary education without any subject pass at GCE 'O'/'N' Level or equivalent"),
    ("22", "Certificate in WISE 1-3"),
    ("23", "Basic vocational certificate (including ITE Basic Vocational Training)"),
    ("24", "At least 3 achievements for different Workplace Literacy or Numeracy (WPLN) skills at Level 3 or 4"),
    ("3", "SECONDARY"),
    ("31", "At least 1 subject pass at GCE 'N' Level"),
    ("32", "At least 1 subject pass at GCE 'O' Level"),
    ("33", "National ITE Certificate (Intermediate) or equivalent (including National Technical Certificate (NTC) Grade 3, Certificate of Vocational Training, BCA Builder Certificate)"),
    ("34", "ITE Skills Certificate (ISC) or equivalent (including Certificate of Competency, Certificate in Service Skills)"),
    ("35", "At least 3 achievements for different Workplace Literacy or Numeracy (WPLN) skills at Level 5 and above"),
    ("39", "Other secondary education/certificates or equivalent"),
    ("4", "POST-SECONDARY (NON-TERTIARY): GENERAL AND VOCATIONAL"),
    ("41", "At least 1 subject pass at GCE 'A'/'H2' Level or equivalent (general)"),
    ("42", "National ITE Certificate (Nitec) or equivalent (including Post Nitec Certificate,Specialist Nitec, Certificate in Office Skills,National Technical Certificate (NTC) Grade 2, National Certificate in Nursing,BCA Advanced Builder Certificate)"),
    ("43", "Higher Nitec or equivalent (including Certificate in Business Skills,Industrial Technician Certificate)"),
    ("44", "Master Nitec or equivalent (including NTC Grade 1)"),
    ("45", "WSQ Certificate or equivalent"),
    ("46", "WSQ Higher Certificate or equivalent"),
    ("47", "WSQ Advanced Certificate or equivalent"),
    ("48", "Other post-secondary (non-tertiary; general) qualifications or equivalent (including International Baccalaureate / NUS High School Diploma)"),
    ("49", "Other post-secondary (non-tertiary; vocational) certificates/qualifications or equivalent (including SIM certificate)"),
    ("5", "POLYTECHNIC DIPLOMA"),
    ("51", "Polytechnic diploma"),
    ("52", "Polytechnic post-diploma (including polytechnic advanced/specialist/management/graduate diploma, diploma (conversion))"),
    ("6", "PROFESSIONAL QUALIFICATION AND OTHER DIPLOMA"),
    ("61", "ITE diploma"),
    ("62", "Other locally or externally developed diploma (including NIE diploma, SIM diploma, LASALLE diploma, NAFA diploma)"),
    ("63", "Qualification awarded by professional bodies (including ACCA, CFA)"),
    ("64", "WSQ diploma"),
    ("65", "WSQ specialist diploma"),
    ("69", "Other post-diploma qualifications or equivalent"),
    ("7", "BACHELOR'S OR EQUIVALENT"),
    ("71", "First degree or equivalent"),
    ("72", "Long first degree or equivalent"),
    ("8", "POSTGRADUATE DIPLOMA/CERTIFICATE (EXCLUDING MASTER'S AND DOCTORATE)"),
    ("81", "Postgraduate diploma/certificate (including NIE postgraduate diploma)"),
    ("82", "WSQ graduate certificate"),
    ("83", "WSQ graduate diploma"),
    ("9", "MASTER'S AND DOCTORATE OR EQUIVALENT"),
    ("91", "Master's degree or equivalent"),
    ("92", "Doctoral degree or equivalent"),
    ("N", "MODULAR CERTIFICATION (NON-AWARD COURSES / NON-FULL QUALIFICATIONS)"),
    ("N1", "At least 1 WSQ Statement of Attainment or ITE modular certificate at post-secondary level (non-tertiary) or equivalent"),
    ("N2", "At least 1 WSQ Statement of Attainment or other modular certificate at diploma level or equivalent (including polytechnic post-diploma certificate)"),
    ("N3", "At least 1 WSQ Statement of Attainment or other modular certificate at degree level or equivalent"),
    ("N4", "At least 1 WSQ Statement of Attainment or other modular certificate at postgraduate level or equivalent"),
    ("N9", "Other statements of attainment, modular certificates or equivalent"),
    ("X", "NOT REPORTED"),
    ("XX", "Not reported"),
];

/// Description registered for an SSEC EQA code.
pub fn ssec_eqa_description(code: &str) -> Option<&'static str> {
    SSEC_EQA_MAPPINGS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, d)| *d)
}

/// `true` if `description` belongs to any SSEC EQA code.
pub fn is_ssec_eqa_description(description: &str) -> bool {
    SSEC_EQA_MAPPINGS.iter().any(|(_, d)| *d == description)
}

// ---------------------------------------------------------------------------
// SkillsFuture Credit
// ---------------------------------------------------------------------------

define_code_enum! {
    /// Reason given when cancelling a credit claim.
    CancelClaimsCode ("claim cancel code") {
        CoursePostponed => ("52", "Course postponed"),
        CourseCancelled => ("53", "Course cancelled"),
        NoCreditClaim => ("54", "Trainee not claiming SkillsFuture Credit"),
        NotEnrolled => ("55", "Trainee not enrolled"),
    }
}

define_code_enum! {
    PermittedFileUploadType ("file type") {
        Pdf => ("pdf", "PDF"),
        Doc => ("doc", "Word 97-2003 Document"),
        Docx => ("docx", "Word Document"),
        Xls => ("xls", "Excel 97-2003 Workbook"),
        Xlsx => ("xlsx", "Excel Workbook"),
        Ppt => ("ppt", "PowerPoint 97-2003 Presentation"),
        Pptx => ("pptx", "PowerPoint Presentation"),
        Jpg => ("jpg", "JPG Image"),
        Jpeg => ("jpeg", "JPEG Image"),
        Png => ("png", "PNG Image"),
        Tif => ("tif", "TIF Image"),
        Tiff => ("tiff", "TIFF Image"),
    }
}

impl PermittedFileUploadType {
    /// Infer the type from a file name's extension, case-insensitively.
    pub fn from_file_name(name: &str) -> Result<Self, CoreError> {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        ext.parse()
    }
}

// ---------------------------------------------------------------------------
// Assessments
// ---------------------------------------------------------------------------

define_code_enum! {
    Grade ("grade") {
        A => ("A", "A"),
        B => ("B", "B"),
        C => ("C", "C"),
        D => ("D", "D"),
        E => ("E", "E"),
        F => ("F", "F"),
    }
}

define_code_enum! {
    AssessmentResult ("assessment result") {
        Pass => ("Pass", "Pass"),
        Fail => ("Fail", "Fail"),
        Exempt => ("Exempt", "Exempt"),
    }
}

define_code_enum! {
    /// Trainee identification category on assessment records.
    AssessmentIdType ("ID type") {
        Nric => ("NRIC", "NRIC"),
        Fin => ("FIN", "FIN"),
        Others => ("OTHERS", "Others"),
    }
}

define_code_enum! {
    AssessmentUpdateVoidAction ("assessment action") {
        Update => ("update", "Update"),
        Void => ("void", "Void"),
    }
}

define_code_enum! {
    AssessmentSortField ("assessment sort field") {
        UpdatedOn => ("updatedOn", "Updated On"),
        CreatedOn => ("createdOn", "Created On"),
        AssessmentDate => ("assessmentDate", "Assessment Date"),
    }
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

define_code_enum! {
    AttendanceStatus ("attendance status") {
        Confirmed => ("1", "Confirmed"),
        Unconfirmed => ("2", "Unconfirmed"),
        Rejected => ("3", "Rejected"),
        TpVoided => ("4", "TP Voided"),
    }
}

define_code_enum! {
    SurveyLanguage ("survey language") {
        English => ("EL", "English"),
        Mandarin => ("MN", "Mandarin"),
        Malay => ("MY", "Malay"),
        Tamil => ("TM", "Tamil"),
    }
}

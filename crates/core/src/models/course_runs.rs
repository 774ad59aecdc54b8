//! Course run request models.
//!
//! Edit and Add variants of sessions, trainers and runs carry the same
//! fields but enforce different rules: Edit only checks what was set, Add
//! requires everything a new record needs. The shared fields live in
//! [`SessionDetails`], [`TrainerDetails`] and [`RunDetails`]; each variant
//! wraps one and supplies its own `validate()`.

use chrono::{NaiveDate, NaiveTime};
use serde_json::{json, Map, Value};

use super::{encode_content, error_if_specified_empty, warn_if_specified_empty};
use crate::constants::{
    is_ssec_eqa_description, ssec_eqa_description, IdType, ModeOfTraining, OptionalSelector,
    Role, Salutation, TrainerType, Vacancy,
};
use crate::error::CoreError;
use crate::model::{compact_date, short_time, PayloadContext, RequestModel};
use crate::validation::{is_blank, non_empty, ValidationReport};
use crate::verify::verify_email_strict;

/// Run dates travel as `YYYYMMDD` integers.
fn date_number(date: Option<NaiveDate>) -> Option<u32> {
    compact_date(date).and_then(|d| d.parse().ok())
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

/// Physical location of a run or session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Venue {
    block: Option<String>,
    street: Option<String>,
    floor: Option<String>,
    unit: Option<String>,
    building: Option<String>,
    postal_code: Option<String>,
    room: Option<String>,
    wheel_chair_access: Option<OptionalSelector>,
}

impl Venue {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(block, set_block, "venue block", 10);
    text_field!(street, set_street, "venue street", 32);
    text_field!(floor, set_floor, "venue floor", 3);
    text_field!(unit, set_unit, "venue unit", 5);
    text_field!(building, set_building, "venue building", 66);
    text_field!(postal_code, set_postal_code, "venue postal code", 6);
    text_field!(room, set_room, "venue room", 255);
    value_field!(wheel_chair_access, set_wheel_chair_access, OptionalSelector);

    /// Floor, unit, postal code and room must not be set to empty strings.
    fn check_specified(&self, report: &mut ValidationReport) {
        error_if_specified_empty(report, &self.floor, "No venue floor is specified!");
        error_if_specified_empty(report, &self.unit, "No venue unit is specified!");
        error_if_specified_empty(report, &self.postal_code, "No venue postal code is specified!");
        error_if_specified_empty(report, &self.room, "No venue room is specified!");
    }

    /// Floor, unit, postal code and room must be present and non-empty.
    fn check_required(&self, report: &mut ValidationReport) {
        if is_blank(&self.floor) {
            report.error("No venue floor is specified!");
        }
        if is_blank(&self.unit) {
            report.error("No venue unit is specified!");
        }
        if is_blank(&self.postal_code) {
            report.error("No venue postal code is specified!");
        }
        if is_blank(&self.room) {
            report.error("No venue room is specified!");
        }
    }

    fn check_optional(&self, report: &mut ValidationReport) {
        warn_if_specified_empty(
            report,
            &self.block,
            "Venue Block is empty but Venue Block is marked as specified!",
        );
        warn_if_specified_empty(
            report,
            &self.street,
            "Venue Street is empty but Venue Street is marked as specified!",
        );
        warn_if_specified_empty(
            report,
            &self.building,
            "Venue Building is empty but Venue Building is marked as specified!",
        );
    }

    /// Sessions add `primaryVenue`; runs pass `None`.
    fn to_payload(&self, primary_venue: Option<OptionalSelector>) -> Value {
        json!({
            "block": self.block,
            "street": self.street,
            "floor": self.floor,
            "unit": self.unit,
            "building": self.building,
            "postalCode": self.postal_code,
            "room": self.room,
            "wheelChairAccess": self.wheel_chair_access.map(OptionalSelector::as_bool),
            "primaryVenue": primary_venue.map(OptionalSelector::as_bool),
        })
    }
}

// ---------------------------------------------------------------------------
// LinkedSsecEqa
// ---------------------------------------------------------------------------

/// A trainer's educational qualification, by SSEC EQA code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedSsecEqa {
    description: Option<String>,
    code: Option<String>,
}

impl LinkedSsecEqa {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for a known code with its standard description filled in.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        let description = ssec_eqa_description(code).ok_or_else(|| CoreError::UnknownCode {
            kind: "SSEC EQA",
            value: code.to_string(),
        })?;
        Ok(Self {
            description: Some(description.to_string()),
            code: Some(code.to_string()),
        })
    }

    text_field!(description, set_description);
    text_field!(code, set_code);
}

impl RequestModel for LinkedSsecEqa {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if is_blank(&self.code) {
            report.warn("No SSEC EQA code specified!");
        }
        if is_blank(&self.description) {
            report.warn("No SSEC EQA description specified!");
        }
        if self.code.as_deref().and_then(ssec_eqa_description).is_none() {
            report.error("Invalid SSEC EQA code specified!");
        }
        if !self.description.as_deref().is_some_and(is_ssec_eqa_description) {
            report.warn("Invalid SSEC EQA description specified!");
        }

        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        json!({
            "description": self.description,
            "ssecEQA": {
                "code": self.code,
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// Schedule and location shared by session edits and additions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDetails {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    mode_of_training: Option<ModeOfTraining>,
    venue: Venue,
    primary_venue: Option<OptionalSelector>,
}

impl SessionDetails {
    value_field!(start_date, set_start_date, NaiveDate);
    value_field!(end_date, set_end_date, NaiveDate);
    value_field!(start_time, set_start_time, NaiveTime);
    value_field!(end_time, set_end_time, NaiveTime);
    value_field!(mode_of_training, set_mode_of_training, ModeOfTraining);
    value_field!(primary_venue, set_primary_venue, OptionalSelector);

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn venue_mut(&mut self) -> &mut Venue {
        &mut self.venue
    }

    /// Asynchronous e-learning and on-the-job sessions have no fixed venue.
    pub fn is_asynchronous_or_on_the_job(&self) -> bool {
        self.mode_of_training
            .is_some_and(ModeOfTraining::is_asynchronous_or_on_the_job)
    }

    fn dates_reversed(&self) -> bool {
        matches!((self.start_date, self.end_date), (Some(s), Some(e)) if s > e)
    }

    fn times_reversed(&self) -> bool {
        matches!((self.start_time, self.end_time), (Some(s), Some(e)) if s > e)
    }

    fn payload_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("startDate".into(), json!(compact_date(self.start_date)));
        fields.insert("endDate".into(), json!(compact_date(self.end_date)));
        fields.insert("startTime".into(), json!(short_time(self.start_time)));
        fields.insert("endTime".into(), json!(short_time(self.end_time)));
        fields.insert(
            "modeOfTraining".into(),
            json!(self.mode_of_training.map(ModeOfTraining::code)),
        );
        fields.insert("venue".into(), self.venue.to_payload(self.primary_venue));
        fields
    }
}

/// Update to an existing session of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSessionEditInfo {
    session_id: Option<String>,
    details: SessionDetails,
}

impl RunSessionEditInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(session_id, set_session_id, "session ID", 300);

    pub fn details(&self) -> &SessionDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut SessionDetails {
        &mut self.details
    }
}

impl RequestModel for RunSessionEditInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.details.venue.check_specified(&mut report);
        if self.details.dates_reversed() {
            report.error("Start Date of Session cannot be after the End Date!");
        }
        if self.details.times_reversed() {
            report.error("Start Time of Session cannot be after the End Time!");
        }

        warn_if_specified_empty(
            &mut report,
            &self.session_id,
            "Session ID is empty but Session ID was marked as specified!",
        );
        self.details.venue.check_optional(&mut report);

        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        let mut body = Map::new();
        body.insert("action".into(), json!("update"));
        body.insert("sessionId".into(), json!(self.session_id));
        body.extend(self.details.payload_fields());
        Value::Object(body)
    }
}

/// New session for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSessionAddInfo {
    details: SessionDetails,
}

impl RunSessionAddInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &SessionDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut SessionDetails {
        &mut self.details
    }
}

impl RequestModel for RunSessionAddInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let details = &self.details;

        if details.start_date.is_none() {
            report.error("No start date is specified!");
        }
        if details.end_date.is_none() {
            report.error("No end date is specified!");
        }
        if details.dates_reversed() {
            report.error("Start date must be before end date");
        }
        if details.start_time.is_none() {
            report.error("No start time is specified!");
        }
        if details.end_time.is_none() {
            report.error("No end time is specified!");
        }
        if details.times_reversed() {
            report.error("Starting time must be before ending time");
        }
        if details.mode_of_training.is_none() {
            report.error("No mode of training is specified!");
        }
        details.venue.check_required(&mut report);
        details.venue.check_optional(&mut report);

        report
    }

    fn build_payload(&self, _ctx: &PayloadContext) -> Value {
        Value::Object(self.details.payload_fields())
    }
}

// ---------------------------------------------------------------------------
// Trainers
// ---------------------------------------------------------------------------

/// Trainer profile shared by trainer edits and additions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainerDetails {
    trainer_type: Option<TrainerType>,
    index_number: Option<u32>,
    id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    id_number: Option<String>,
    id_type: Option<IdType>,
    roles: Vec<Role>,
    in_training_provider_profile: Option<OptionalSelector>,
    domain_area_of_practice: Option<String>,
    experience: Option<String>,
    linked_in_url: Option<String>,
    salutation: Option<Salutation>,
    photo_name: Option<String>,
    photo_content: Option<Vec<u8>>,
    linked_ssec_eqas: Vec<LinkedSsecEqa>,
}

impl TrainerDetails {
    value_field!(trainer_type, set_trainer_type, TrainerType);
    value_field!(index_number, set_index_number, u32);
    text_field!(id, set_id, "trainer ID", 50);
    text_field!(name, set_name, "trainer name", 66);
    text_field!(email, set_email, "trainer email", 320);
    text_field!(id_number, set_id_number, "trainer ID number", 50);
    value_field!(id_type, set_id_type, IdType);
    value_field!(
        in_training_provider_profile,
        set_in_training_provider_profile,
        OptionalSelector
    );
    text_field!(
        domain_area_of_practice,
        set_domain_area_of_practice,
        "domain area of practice",
        1000
    );
    text_field!(experience, set_experience, "experience", 1000);
    text_field!(linked_in_url, set_linked_in_url, "LinkedIn URL", 255);
    value_field!(salutation, set_salutation, Salutation);
    text_field!(photo_name, set_photo_name, "photo name", 255);

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Replace the roles; duplicates are dropped, order is kept.
    pub fn set_roles(&mut self, roles: impl IntoIterator<Item = Role>) -> &mut Self {
        self.roles.clear();
        for role in roles {
            if !self.roles.contains(&role) {
                self.roles.push(role);
            }
        }
        self
    }

    pub fn photo_content(&self) -> Option<&[u8]> {
        self.photo_content.as_deref()
    }

    pub fn set_photo_content(&mut self, content: impl Into<Vec<u8>>) -> &mut Self {
        self.photo_content = Some(content.into());
        self
    }

    pub fn linked_ssec_eqas(&self) -> &[LinkedSsecEqa] {
        &self.linked_ssec_eqas
    }

    pub fn add_linked_ssec_eqa(&mut self, eqa: LinkedSsecEqa) -> &mut Self {
        self.linked_ssec_eqas.push(eqa);
        self
    }

    pub fn is_existing_trainer(&self) -> Result<bool, CoreError> {
        Ok(self.require_trainer_type()? == TrainerType::Existing)
    }

    pub fn is_new_trainer(&self) -> Result<bool, CoreError> {
        Ok(self.require_trainer_type()? == TrainerType::New)
    }

    fn require_trainer_type(&self) -> Result<TrainerType, CoreError> {
        self.trainer_type.ok_or_else(|| {
            CoreError::Unsupported(
                "Unable to infer trainer type as no trainer type code was provided!".into(),
            )
        })
    }

    fn check_email_format(&self, report: &mut ValidationReport) {
        if let Some(email) = non_empty(&self.email) {
            if !verify_email_strict(email) {
                report.error("Trainer Email specified is not of the correct format!");
            }
        }
    }

    fn to_payload(&self, ctx: &PayloadContext) -> Value {
        json!({
            "trainer": {
                "trainerType": {
                    "code": self.trainer_type.map(TrainerType::code),
                    "description": self.trainer_type.map(TrainerType::description),
                },
                "indexNumber": self.index_number,
                "id": self.id,
                "name": self.name,
                "email": self.email,
                "idNumber": self.id_number,
                "idType": {
                    "code": self.id_type.map(IdType::code),
                    "description": self.id_type.map(IdType::description),
                },
                "roles": self.roles.iter().map(|r| r.to_payload()).collect::<Vec<_>>(),
                "inTrainingProviderProfile": self
                    .in_training_provider_profile
                    .map(OptionalSelector::as_bool),
                "domainAreaOfPractice": self.domain_area_of_practice,
                "experience": self.experience,
                "linkedInURL": self.linked_in_url,
                "salutationId": self.salutation.map(Salutation::id),
                "photo": {
                    "name": self.photo_name,
                    "content": encode_content(&self.photo_content),
                },
                "linkedSsecEQAs": self
                    .linked_ssec_eqas
                    .iter()
                    .map(|eqa| eqa.build_payload(ctx))
                    .collect::<Vec<_>>(),
            }
        })
    }
}

/// Trainer attached to an existing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTrainerEditInfo {
    details: TrainerDetails,
}

impl RunTrainerEditInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &TrainerDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut TrainerDetails {
        &mut self.details
    }
}

impl RequestModel for RunTrainerEditInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let details = &self.details;

        if details.trainer_type.is_none() {
            report.error("No Trainer Type Code specified!");
        }
        if is_blank(&details.name) {
            report.error("No Trainer Name specified!");
        }
        if is_blank(&details.email) {
            report.error("No Trainer Email specified!");
        }
        details.check_email_format(&mut report);
        if is_blank(&details.id_number) {
            report.error("No Trainer ID number specified!");
        }
        if details.id_type.is_none() {
            report.error("No Trainer ID type specified!");
        }
        if details.roles.is_empty() {
            report.error("No Trainer Roles specified!");
        }

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        self.details.to_payload(ctx)
    }
}

/// Trainer attached to a run being created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTrainerAddInfo {
    details: TrainerDetails,
}

impl RunTrainerAddInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &TrainerDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut TrainerDetails {
        &mut self.details
    }
}

impl RequestModel for RunTrainerAddInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let details = &self.details;

        if details.trainer_type.is_none() {
            report.error("No trainerType code specified!");
        }
        if is_blank(&details.name) {
            report.error("No name specified!");
        }
        if is_blank(&details.email) {
            report.error("No email specified!");
        }
        details.check_email_format(&mut report);
        if is_blank(&details.id_number) {
            report.error("No ID number specified!");
        }
        if details.id_type.is_none() {
            report.error("No ID type code specified!");
        }
        if details.roles.is_empty() {
            report.error("No roles specified!");
        }

        warn_if_specified_empty(
            &mut report,
            &details.id,
            "Index Number is empty even though Index Number is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &details.domain_area_of_practice,
            "Domain Area of Practice is empty even though Domain Area of Practice is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &details.experience,
            "Experience is empty even though Experience is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &details.linked_in_url,
            "LinkedIn URL is empty even though LinkedIn URL is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &details.photo_name,
            "Photo Name is empty but Photo Name is marked as specified!",
        );
        match (&details.photo_name, &details.photo_content) {
            (Some(_), None) => {
                report.warn("Photo Name is specified but there is no photo file uploaded!")
            }
            (None, Some(_)) => {
                report.warn("Photo Content is specified but there is no photo file name!")
            }
            _ => {}
        }

        for (i, eqa) in details.linked_ssec_eqas.iter().enumerate() {
            let n = i + 1;
            warn_if_specified_empty(
                &mut report,
                &eqa.description,
                &format!(
                    "[SSEC EQA {n}]: SSEC EQA Description is empty even though SSEC EQA Description is marked as specified!"
                ),
            );
            warn_if_specified_empty(
                &mut report,
                &eqa.code,
                &format!(
                    "[SSEC EQA {n}]: SSEC EQA Code is empty even though SSEC EQA Code is marked as specified!"
                ),
            );
        }

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        self.details.to_payload(ctx)
    }
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

/// Run attributes shared by edits and additions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunDetails {
    sequence_number: Option<u32>,
    registration_opening: Option<NaiveDate>,
    registration_closing: Option<NaiveDate>,
    course_start: Option<NaiveDate>,
    course_end: Option<NaiveDate>,
    schedule_info_type_code: Option<String>,
    schedule_info_type_description: Option<String>,
    schedule_info: Option<String>,
    venue: Venue,
    intake_size: Option<u32>,
    threshold: Option<u32>,
    registered_user_count: Option<u32>,
    mode_of_training: Option<ModeOfTraining>,
    course_admin_email: Option<String>,
    course_vacancy: Option<Vacancy>,
    file_name: Option<String>,
    file_content: Option<Vec<u8>>,
}

impl RunDetails {
    value_field!(sequence_number, set_sequence_number, u32);
    value_field!(registration_opening, set_registration_opening, NaiveDate);
    value_field!(registration_closing, set_registration_closing, NaiveDate);
    value_field!(course_start, set_course_start, NaiveDate);
    value_field!(course_end, set_course_end, NaiveDate);
    text_field!(
        schedule_info_type_code,
        set_schedule_info_type_code,
        "schedule info type code",
        2
    );
    text_field!(
        schedule_info_type_description,
        set_schedule_info_type_description,
        "schedule info type description",
        32
    );
    text_field!(schedule_info, set_schedule_info, "schedule info", 300);
    value_field!(intake_size, set_intake_size, u32);
    value_field!(threshold, set_threshold, u32);
    value_field!(registered_user_count, set_registered_user_count, u32);
    value_field!(mode_of_training, set_mode_of_training, ModeOfTraining);
    text_field!(course_admin_email, set_course_admin_email, "course admin email", 255);
    value_field!(course_vacancy, set_course_vacancy, Vacancy);
    text_field!(file_name, set_file_name, "file name", 255);

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn venue_mut(&mut self) -> &mut Venue {
        &mut self.venue
    }

    pub fn file_content(&self) -> Option<&[u8]> {
        self.file_content.as_deref()
    }

    pub fn set_file_content(&mut self, content: impl Into<Vec<u8>>) -> &mut Self {
        self.file_content = Some(content.into());
        self
    }

    fn registration_reversed(&self) -> bool {
        matches!(
            (self.registration_opening, self.registration_closing),
            (Some(o), Some(c)) if o > c
        )
    }

    fn course_dates_reversed(&self) -> bool {
        matches!((self.course_start, self.course_end), (Some(s), Some(e)) if s > e)
    }

    fn check_admin_email_format(&self, report: &mut ValidationReport) {
        if let Some(email) = non_empty(&self.course_admin_email) {
            if !verify_email_strict(email) {
                report.error("Course Admin Email specified is not of the correct format!");
            }
        }
    }

    fn check_file(&self, report: &mut ValidationReport) {
        warn_if_specified_empty(
            report,
            &self.file_name,
            "File Name is empty but File Name is marked as specified!",
        );
        match (&self.file_name, &self.file_content) {
            (Some(_), None) => report.warn("File Name is specified but there is no file uploaded!"),
            (None, Some(_)) => report.warn("File Content is specified but there is no file name!"),
            _ => {}
        }
    }

    fn payload_fields(&self) -> Map<String, Value> {
        let body = json!({
            "sequenceNumber": self.sequence_number,
            "registrationDates": {
                "opening": date_number(self.registration_opening),
                "closing": date_number(self.registration_closing),
            },
            "courseDates": {
                "start": date_number(self.course_start),
                "end": date_number(self.course_end),
            },
            "scheduleInfoType": {
                "code": self.schedule_info_type_code,
                "description": self.schedule_info_type_description,
            },
            "scheduleInfo": self.schedule_info,
            "venue": self.venue.to_payload(None),
            "intakeSize": self.intake_size,
            "threshold": self.threshold,
            "registeredUserCount": self.registered_user_count,
            "modeOfTraining": self.mode_of_training.map(ModeOfTraining::code),
            "courseAdminEmail": self.course_admin_email,
            "courseVacancy": {
                "code": self.course_vacancy.map(Vacancy::code),
                "description": self.course_vacancy.map(Vacancy::description),
            },
            "file": {
                "Name": self.file_name,
                "content": encode_content(&self.file_content),
            },
        });
        match body {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

fn collect_payloads<M: RequestModel>(models: &[M], ctx: &PayloadContext) -> Value {
    Value::Array(models.iter().map(|m| m.build_payload(ctx)).collect())
}

/// Edit of an existing course run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRunInfo {
    crid: Option<String>,
    details: RunDetails,
    sessions: Vec<RunSessionEditInfo>,
    trainers: Vec<RunTrainerEditInfo>,
}

impl EditRunInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(crid, set_crid, "course reference number", 100);

    pub fn details(&self) -> &RunDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut RunDetails {
        &mut self.details
    }

    pub fn sessions(&self) -> &[RunSessionEditInfo] {
        &self.sessions
    }

    pub fn add_session(&mut self, session: RunSessionEditInfo) -> &mut Self {
        self.sessions.push(session);
        self
    }

    pub fn trainers(&self) -> &[RunTrainerEditInfo] {
        &self.trainers
    }

    pub fn add_trainer(&mut self, trainer: RunTrainerEditInfo) -> &mut Self {
        self.trainers.push(trainer);
        self
    }
}

impl RequestModel for EditRunInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let run = &self.details;

        if is_blank(&self.crid) {
            report.error("No Course Reference ID specified!");
        }
        match (run.registration_opening, run.registration_closing) {
            (Some(_), None) => report.error(
                "If Opening Registration Date is specified, then the Closing Registration Date must be specified!",
            ),
            (None, Some(_)) => report.error(
                "If Closing Registration Date is specified, then the Opening Registration Date must be specified!",
            ),
            _ => {}
        }
        if run.registration_reversed() {
            report.error("Registration dates opening date must be before closing date!");
        }
        match (run.course_start, run.course_end) {
            (Some(_), None) => report.error(
                "If Course Start Date is specified, then the Course End Date must be specified!",
            ),
            (None, Some(_)) => report.error(
                "If Course End Date is specified, then the Course Start Date must be specified!",
            ),
            _ => {}
        }
        if run.course_dates_reversed() {
            report.error("Course Start Date must be before Course End Date!");
        }
        error_if_specified_empty(
            &mut report,
            &run.schedule_info_type_code,
            "No Course Run Schedule Info Code specified",
        );
        run.venue.check_specified(&mut report);
        run.check_admin_email_format(&mut report);

        warn_if_specified_empty(
            &mut report,
            &run.course_admin_email,
            "Course Admin Email is empty even though Course Admin Email is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &run.schedule_info_type_description,
            "Schedule Info Type Description is empty but Schedule Info Type Description is marked as specified!",
        );
        warn_if_specified_empty(
            &mut report,
            &run.schedule_info,
            "Schedule Info is empty but Schedule Info is marked as specified!",
        );
        run.venue.check_optional(&mut report);
        run.check_file(&mut report);

        for (i, session) in self.sessions.iter().enumerate() {
            report.merge_prefixed(&format!("**Session {}**: ", i + 1), session.validate());
        }
        for (i, trainer) in self.trainers.iter().enumerate() {
            report.merge_prefixed(&format!("**Trainer {}**: ", i + 1), trainer.validate());
        }

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        let mut run = Map::new();
        run.insert("action".into(), json!("update"));
        run.extend(self.details.payload_fields());
        run.insert("sessions".into(), collect_payloads(&self.sessions, ctx));
        run.insert(
            "linkCourseRunTrainer".into(),
            collect_payloads(&self.trainers, ctx),
        );

        json!({
            "course": {
                "courseReferenceNumber": self.crid,
                "trainingProvider": {
                    "uen": ctx.uen,
                },
            },
            "run": run,
        })
    }
}

/// Deletion of a course run. Only the course reference number is sent; the
/// run ID goes in the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRunInfo {
    crid: Option<String>,
}

impl DeleteRunInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(crid, set_crid, "course reference number", 100);
}

impl RequestModel for DeleteRunInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if is_blank(&self.crid) {
            report.error("No valid Course Reference ID number specified!");
        }
        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        json!({
            "course": {
                "courseReferenceNumber": self.crid,
                "trainingProvider": {
                    "uen": ctx.uen,
                },
                "run": {
                    "action": "delete",
                },
            }
        })
    }
}

/// One run inside an [`AddRunInfo`] batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddRunIndividualInfo {
    details: RunDetails,
    sessions: Vec<RunSessionAddInfo>,
    trainers: Vec<RunTrainerAddInfo>,
}

impl AddRunIndividualInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &RunDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut RunDetails {
        &mut self.details
    }

    pub fn sessions(&self) -> &[RunSessionAddInfo] {
        &self.sessions
    }

    pub fn add_session(&mut self, session: RunSessionAddInfo) -> &mut Self {
        self.sessions.push(session);
        self
    }

    pub fn trainers(&self) -> &[RunTrainerAddInfo] {
        &self.trainers
    }

    pub fn add_trainer(&mut self, trainer: RunTrainerAddInfo) -> &mut Self {
        self.trainers.push(trainer);
        self
    }
}

impl RequestModel for AddRunIndividualInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let run = &self.details;

        if run.registration_opening.is_none() {
            report.error("No opening registration dates specified!");
        }
        if run.registration_closing.is_none() {
            report.error("No closing registration dates specified!");
        }
        if run.registration_reversed() {
            report.error("Registration dates opening should not be after closing date");
        }
        if run.course_start.is_none() {
            report.error("No start course dates specified!");
        }
        if run.course_end.is_none() {
            report.error("No end course dates specified!");
        }
        if run.course_dates_reversed() {
            report.error("Start course dates should not be after end course date");
        }
        if is_blank(&run.schedule_info_type_code) {
            report.error("No schedule info type code specified!");
        }
        if is_blank(&run.schedule_info_type_description) {
            report.error("No schedule info type description specified!");
        }
        if is_blank(&run.schedule_info) {
            report.error("No schedule info specified!");
        }
        run.venue.check_required(&mut report);
        if run.mode_of_training.is_none() {
            report.error("No mode of training is specified!");
        }
        if is_blank(&run.course_admin_email) {
            report.error("No course admin email is specified!");
        }
        run.check_admin_email_format(&mut report);
        if run.course_vacancy.is_none() {
            report.error("No course vacancy code is specified!");
        }

        run.venue.check_optional(&mut report);
        run.check_file(&mut report);

        for (i, session) in self.sessions.iter().enumerate() {
            report.merge_prefixed(&format!("*Session {}*: ", i + 1), session.validate());
        }
        for (i, trainer) in self.trainers.iter().enumerate() {
            report.merge_prefixed(&format!("*Trainer {}*: ", i + 1), trainer.validate());
        }

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        let mut run = self.details.payload_fields();
        run.insert("sessions".into(), collect_payloads(&self.sessions, ctx));
        run.insert(
            "linkCourseRunTrainer".into(),
            collect_payloads(&self.trainers, ctx),
        );
        Value::Object(run)
    }
}

/// Batch creation of runs under one course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddRunInfo {
    crid: Option<String>,
    runs: Vec<AddRunIndividualInfo>,
}

impl AddRunInfo {
    pub fn new() -> Self {
        Self::default()
    }

    text_field!(crid, set_crid, "course reference number", 100);

    pub fn runs(&self) -> &[AddRunIndividualInfo] {
        &self.runs
    }

    pub fn add_run(&mut self, run: AddRunIndividualInfo) -> &mut Self {
        self.runs.push(run);
        self
    }
}

impl RequestModel for AddRunInfo {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if is_blank(&self.crid) {
            report.error("No Course Reference ID number specified!");
        }
        for (i, run) in self.runs.iter().enumerate() {
            report.merge_prefixed(&format!("**Run {}**: ", i + 1), run.validate());
        }

        report
    }

    fn build_payload(&self, ctx: &PayloadContext) -> Value {
        json!({
            "course": {
                "courseReferenceNumber": self.crid,
                "trainingProvider": {
                    "uen": ctx.uen,
                },
            },
            "runs": collect_payloads(&self.runs, ctx),
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

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn complete_venue(venue: &mut Venue) {
        venue.set_floor("15").unwrap();
        venue.set_unit("001").unwrap();
        venue.set_postal_code("038988").unwrap();
        venue.set_room("24").unwrap();
    }

    fn complete_session() -> RunSessionAddInfo {
        let mut session = RunSessionAddInfo::new();
        let details = session.details_mut();
        details.set_start_date(date(2024, 3, 1));
        details.set_end_date(date(2024, 3, 1));
        details.set_start_time(time(9, 0));
        details.set_end_time(time(17, 30));
        details.set_mode_of_training(ModeOfTraining::Classroom);
        complete_venue(details.venue_mut());
        session
    }

    fn complete_trainer() -> RunTrainerAddInfo {
        let mut trainer = RunTrainerAddInfo::new();
        let details = trainer.details_mut();
        details.set_trainer_type(TrainerType::Existing);
        details.set_name("Mahmoud Shamsuddin").unwrap();
        details.set_email("trainer@training.sg").unwrap();
        details.set_id_number("S0118316H").unwrap();
        details.set_id_type(IdType::SingaporePink);
        details.set_roles([Role::Trainer]);
        trainer
    }

    fn complete_run() -> AddRunIndividualInfo {
        let mut run = AddRunIndividualInfo::new();
        let details = run.details_mut();
        details.set_registration_opening(date(2024, 1, 1));
        details.set_registration_closing(date(2024, 2, 1));
        details.set_course_start(date(2024, 3, 1));
        details.set_course_end(date(2024, 3, 31));
        details.set_schedule_info_type_code("01").unwrap();
        details.set_schedule_info_type_description("Description").unwrap();
        details.set_schedule_info("Sat / 5 Sats / 9am - 6pm").unwrap();
        details.set_mode_of_training(ModeOfTraining::Classroom);
        details.set_course_admin_email("admin@training.sg").unwrap();
        details.set_course_vacancy(Vacancy::Available);
        complete_venue(details.venue_mut());
        run.add_session(complete_session());
        run.add_trainer(complete_trainer());
        run
    }

    // -- sessions ----------------------------------------------------------

    #[test]
    fn bare_session_edit_payload_is_just_the_action() {
        let payload = RunSessionEditInfo::new()
            .payload(&PayloadContext::default(), true)
            .unwrap();
        assert_eq!(payload, json!({"action": "update"}));
    }

    #[test]
    fn session_edit_rejects_empty_venue_parts_and_reversed_times() {
        let mut session = RunSessionEditInfo::new();
        session.set_session_id("").unwrap();
        let details = session.details_mut();
        details.venue_mut().set_room("").unwrap();
        details.venue_mut().set_block("").unwrap();
        details.set_start_time(time(18, 0));
        details.set_end_time(time(9, 0));

        let report = session.validate();
        assert_eq!(
            report.errors,
            vec![
                "No venue room is specified!",
                "Start Time of Session cannot be after the End Time!",
            ]
        );
        assert_eq!(
            report.warnings,
            vec![
                "Session ID is empty but Session ID was marked as specified!",
                "Venue Block is empty but Venue Block is marked as specified!",
            ]
        );
    }

    #[test]
    fn session_add_requires_schedule_and_venue() {
        let errors = RunSessionAddInfo::new().validate().errors;
        assert_eq!(errors.len(), 9);
        assert!(errors.contains(&"No mode of training is specified!".to_string()));
        assert!(complete_session().validate().is_valid());
    }

    #[test]
    fn session_payload_formats() {
        let mut session = complete_session();
        session
            .details_mut()
            .set_primary_venue(OptionalSelector::Yes)
            .venue_mut()
            .set_wheel_chair_access(OptionalSelector::No);

        let payload = session.payload(&PayloadContext::default(), true).unwrap();
        assert_eq!(
            payload,
            json!({
                "startDate": "20240301",
                "endDate": "20240301",
                "startTime": "09:00",
                "endTime": "17:30",
                "modeOfTraining": "1",
                "venue": {
                    "floor": "15",
                    "unit": "001",
                    "postalCode": "038988",
                    "room": "24",
                    "wheelChairAccess": false,
                    "primaryVenue": true
                }
            })
        );
    }

    #[test]
    fn asynchronous_sessions_are_detected() {
        let mut details = SessionDetails::default();
        assert!(!details.is_asynchronous_or_on_the_job());
        details.set_mode_of_training(ModeOfTraining::OnTheJob);
        assert!(details.is_asynchronous_or_on_the_job());
    }

    // -- trainers ----------------------------------------------------------

    #[test]
    fn trainer_type_queries_need_a_type() {
        let mut details = TrainerDetails::default();
        assert_matches!(details.is_existing_trainer(), Err(CoreError::Unsupported(_)));
        details.set_trainer_type(TrainerType::New);
        assert_matches!(details.is_new_trainer(), Ok(true));
        assert_matches!(details.is_existing_trainer(), Ok(false));
    }

    #[test]
    fn trainer_edit_checks_required_fields_and_email() {
        let mut trainer = RunTrainerEditInfo::new();
        trainer.details_mut().set_email("not-an-email").unwrap();

        let errors = trainer.validate().errors;
        assert_eq!(
            errors,
            vec![
                "No Trainer Type Code specified!",
                "No Trainer Name specified!",
                "Trainer Email specified is not of the correct format!",
                "No Trainer ID number specified!",
                "No Trainer ID type specified!",
                "No Trainer Roles specified!",
            ]
        );
    }

    #[test]
    fn trainer_add_warns_on_photo_mismatch_and_empty_eqa() {
        let mut trainer = complete_trainer();
        let mut eqa = LinkedSsecEqa::new();
        eqa.set_code("");
        trainer
            .details_mut()
            .set_photo_name("me.png")
            .unwrap()
            .add_linked_ssec_eqa(eqa);

        let report = trainer.validate();
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec![
                "Photo Name is specified but there is no photo file uploaded!",
                "[SSEC EQA 1]: SSEC EQA Code is empty even though SSEC EQA Code is marked as specified!",
            ]
        );
    }

    #[test]
    fn trainer_payload_shape() {
        let mut trainer = complete_trainer();
        trainer
            .details_mut()
            .set_salutation(Salutation::Dr)
            .set_photo_content(vec![1u8, 2, 3])
            .add_linked_ssec_eqa(LinkedSsecEqa::from_code("12").unwrap());

        let payload = trainer.payload(&PayloadContext::default(), true).unwrap();
        let body = &payload["trainer"];
        assert_eq!(body["trainerType"], json!({"code": "1", "description": "Existing"}));
        assert_eq!(body["idType"]["code"], "SP");
        assert_eq!(
            body["roles"],
            json!([{"role": {"id": 1, "description": "Trainer"}}])
        );
        assert_eq!(body["salutationId"], 5);
        assert_eq!(body["photo"], json!({"content": "AQID"}));
        assert_eq!(body["linkedSsecEQAs"][0]["ssecEQA"]["code"], "12");
    }

    #[test]
    fn roles_are_deduplicated() {
        let mut details = TrainerDetails::default();
        details.set_roles([Role::Assessor, Role::Trainer, Role::Assessor]);
        assert_eq!(details.roles(), &[Role::Assessor, Role::Trainer]);
    }

    // -- SSEC EQA ----------------------------------------------------------

    #[test]
    fn ssec_eqa_rules() {
        let report = LinkedSsecEqa::new().validate();
        assert_eq!(report.errors, vec!["Invalid SSEC EQA code specified!"]);
        assert_eq!(report.warnings.len(), 3);

        let mut eqa = LinkedSsecEqa::new();
        eqa.set_code("71").set_description("Not the right text");
        let report = eqa.validate();
        assert!(report.is_valid());
        assert_eq!(report.warnings, vec!["Invalid SSEC EQA description specified!"]);

        assert!(LinkedSsecEqa::from_code("71").unwrap().validate().warnings.is_empty());
        assert_matches!(LinkedSsecEqa::from_code("ZZ"), Err(CoreError::UnknownCode { .. }));
    }

    // -- runs --------------------------------------------------------------

    #[test]
    fn edit_run_pairs_dates() {
        let mut edit = EditRunInfo::new();
        edit.set_crid("TGS-2020002096").unwrap();
        edit.details_mut()
            .set_registration_opening(date(2024, 1, 1))
            .set_course_start(date(2024, 3, 2))
            .set_course_end(date(2024, 3, 1));

        assert_eq!(
            edit.validate().errors,
            vec![
                "If Opening Registration Date is specified, then the Closing Registration Date must be specified!",
                "Course Start Date must be before Course End Date!",
            ]
        );
    }

    #[test]
    fn edit_run_prefixes_nested_findings() {
        let mut edit = EditRunInfo::new();
        edit.set_crid("TGS-2020002096").unwrap();
        edit.add_trainer(RunTrainerEditInfo::new());

        let errors = edit.validate().errors;
        assert_eq!(errors[0], "**Trainer 1**: No Trainer Type Code specified!");
    }

    #[test]
    fn edit_run_payload_shape() {
        let mut edit = EditRunInfo::new();
        edit.set_crid("TGS-2020002096").unwrap();
        edit.details_mut()
            .set_sequence_number(0)
            .set_course_start(date(2024, 3, 1))
            .set_course_end(date(2024, 3, 31))
            .set_course_vacancy(Vacancy::LimitedVacancy)
            .set_file_content(b"hello".to_vec());
        edit.add_session(RunSessionEditInfo::new());

        let payload = edit
            .payload(&PayloadContext::with_uen("199900650G"), true)
            .unwrap();
        assert_eq!(
            payload,
            json!({
                "course": {
                    "courseReferenceNumber": "TGS-2020002096",
                    "trainingProvider": {"uen": "199900650G"}
                },
                "run": {
                    "action": "update",
                    "sequenceNumber": 0,
                    "courseDates": {"start": 20240301, "end": 20240331},
                    "courseVacancy": {"code": "L", "description": "Limited Vacancy"},
                    "file": {"content": "aGVsbG8="},
                    "sessions": [{"action": "update"}]
                }
            })
        );
    }

    #[test]
    fn delete_run_payload() {
        let mut delete = DeleteRunInfo::new();
        assert_eq!(
            delete.validate().errors,
            vec!["No valid Course Reference ID number specified!"]
        );

        delete.set_crid("TGS-2020002096").unwrap();
        let payload = delete
            .payload(&PayloadContext::with_uen("199900650G"), true)
            .unwrap();
        assert_eq!(
            payload,
            json!({
                "course": {
                    "courseReferenceNumber": "TGS-2020002096",
                    "trainingProvider": {"uen": "199900650G"},
                    "run": {"action": "delete"}
                }
            })
        );
    }

    #[test]
    fn complete_run_is_valid() {
        let report = complete_run().validate();
        assert!(report.is_valid(), "{:?}", report.errors);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn add_run_uses_strict_admin_email() {
        let mut run = complete_run();
        run.details_mut().set_course_admin_email("admin@").unwrap();
        assert_eq!(
            run.validate().errors,
            vec!["Course Admin Email specified is not of the correct format!"]
        );
    }

    #[test]
    fn add_run_prefixes_runs_sessions_and_trainers() {
        let mut run = complete_run();
        run.add_session(RunSessionAddInfo::new());

        let mut add = AddRunInfo::new();
        add.add_run(run);

        let errors = add.validate().errors;
        assert_eq!(errors[0], "No Course Reference ID number specified!");
        assert_eq!(errors[1], "**Run 1**: *Session 2*: No start date is specified!");
    }

    #[test]
    fn add_run_payload_has_no_action() {
        let mut add = AddRunInfo::new();
        add.set_crid("TGS-2020002096").unwrap();
        add.add_run(complete_run());

        let payload = add
            .payload(&PayloadContext::with_uen("199900650G"), true)
            .unwrap();
        let run = &payload["runs"][0];
        assert!(run.get("action").is_none());
        assert_eq!(run["registrationDates"], json!({"opening": 20240101, "closing": 20240201}));
        assert_eq!(run["modeOfTraining"], "1");
        assert_eq!(run["linkCourseRunTrainer"][0]["trainer"]["name"], "Mahmoud Shamsuddin");
        assert_eq!(run["sessions"][0]["startTime"], "09:00");
    }
}

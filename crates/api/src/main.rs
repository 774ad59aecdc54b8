use anyhow::Context;
use chrono::NaiveDate;
use ssg_api::operations::assessments::CreateAssessment;
use ssg_api::operations::attendance::UploadCourseSessionAttendance;
use ssg_api::operations::courses::{DeleteCourseRun, ViewCourseSessions};
use ssg_api::operations::credit::EncryptPayload;
use ssg_api::operations::enrolment::{CreateEnrolment, SearchEnrolment};
use ssg_api::ClientConfig;
use ssg_core::constants::{
    AttendanceStatus, IdType, SortOrder, SponsorshipType, SurveyLanguage,
};
use ssg_core::models::assessments::CreateAssessmentInfo;
use ssg_core::models::attendance::UploadAttendanceInfo;
use ssg_core::models::course_runs::DeleteRunInfo;
use ssg_core::models::credit::EncryptPayloadInfo;
use ssg_core::models::enrolment::{CreateEnrolmentInfo, SearchEnrolmentInfo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Provider used when `SSG_UEN` is not set.
const SAMPLE_UEN: &str = "199900650G";
const SAMPLE_CRN: &str = "TGS-2020002096";
const SAMPLE_RUN_ID: &str = "10026";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ssg_api=debug,ssg_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ClientConfig::from_env().context("Failed to load client configuration")?;
    if config.uen.is_none() {
        config.uen = Some(SAMPLE_UEN.to_string());
    }
    tracing::info!(environment = %config.environment, "Rendering sample requests");

    for (title, preview) in previews(&config)? {
        println!("=== {title} ===\n{preview}");
    }
    Ok(())
}

fn previews(config: &ClientConfig) -> anyhow::Result<Vec<(&'static str, String)>> {
    Ok(vec![
        (
            CreateEnrolment::NAME,
            CreateEnrolment::prepare(config, &sample_enrolment()?)?.render()?,
        ),
        (
            SearchEnrolment::NAME,
            SearchEnrolment::prepare(config, &sample_enrolment_search()?)?.render()?,
        ),
        (
            DeleteCourseRun::NAME,
            DeleteCourseRun::prepare(config, SAMPLE_RUN_ID, &sample_run_deletion()?, None)?
                .render()?,
        ),
        (
            ViewCourseSessions::NAME,
            ViewCourseSessions::prepare(
                config,
                SAMPLE_RUN_ID,
                SAMPLE_CRN,
                Some(date(2024, 3, 1)?),
                Some(true),
            )?
            .render()?,
        ),
        (
            EncryptPayload::NAME,
            EncryptPayload::prepare(config, &sample_claim()?)?.render()?,
        ),
        (
            CreateAssessment::NAME,
            CreateAssessment::prepare(config, &sample_assessment()?)?.render()?,
        ),
        (
            UploadCourseSessionAttendance::NAME,
            UploadCourseSessionAttendance::prepare(config, SAMPLE_RUN_ID, &sample_attendance()?)?
                .render()?,
        ),
    ])
}

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid sample date {year}-{month}-{day}"))
}

fn sample_enrolment() -> anyhow::Result<CreateEnrolmentInfo> {
    let mut info = CreateEnrolmentInfo::new();
    info.set_course_reference_number(SAMPLE_CRN)?
        .set_course_run_id(SAMPLE_RUN_ID)?
        .set_trainee_id("S0118316H")?
        .set_trainee_full_name("Jon Chua")?
        .set_trainee_email_address("jon.chua@example.sg")?
        .set_trainee_country_code("65")?
        .set_trainee_phone_number("88881234")?
        .set_training_partner_code("199900650G-01")?;
    info.set_trainee_date_of_birth(date(1990, 10, 16)?)
        .set_trainee_sponsorship_type(SponsorshipType::Individual);
    Ok(info)
}

fn sample_enrolment_search() -> anyhow::Result<SearchEnrolmentInfo> {
    let mut info = SearchEnrolmentInfo::new();
    info.set_course_reference_number(SAMPLE_CRN)?
        .set_training_partner_code("199900650G-01")?;
    info.set_sort_by_order(SortOrder::Descending).set_page(0);
    info.set_page_size(20)?;
    Ok(info)
}

fn sample_run_deletion() -> anyhow::Result<DeleteRunInfo> {
    let mut info = DeleteRunInfo::new();
    info.set_crid(SAMPLE_CRN)?;
    Ok(info)
}

fn sample_claim() -> anyhow::Result<EncryptPayloadInfo> {
    let mut info = EncryptPayloadInfo::new();
    info.set_course_id(SAMPLE_CRN)
        .set_course_run_id(SAMPLE_RUN_ID)
        .set_nric("S1234567D")
        .set_email("jon.chua@example.sg")
        .set_mobile_number("91234567");
    info.set_course_fee(500.0)?;
    info.set_start_date(date(2024, 3, 1)?);
    Ok(info)
}

fn sample_assessment() -> anyhow::Result<CreateAssessmentInfo> {
    let mut info = CreateAssessmentInfo::new();
    info.set_course_run_id(SAMPLE_RUN_ID)?
        .set_course_reference_number(SAMPLE_CRN)?
        .set_trainee_id("S1234567A")?
        .set_trainee_full_name("Jon Chua")?
        .set_training_partner_code("199900650G-01")?;
    info.set_assessment_date(date(2024, 5, 6)?);
    Ok(info)
}

fn sample_attendance() -> anyhow::Result<UploadAttendanceInfo> {
    let mut info = UploadAttendanceInfo::new();
    info.set_session_id("TGS-2020002096-10026-S1")?
        .set_trainee_id("S1234567A")?
        .set_trainee_name("Jon Chua")?
        .set_mobile("91234567")?
        .set_reference_number("TGS-0026008-ES")?
        .set_corppass_id("S9876543B")?;
    info.set_status(AttendanceStatus::Confirmed)
        .set_trainee_id_type(IdType::SingaporePink)
        .set_country_code(65)
        .set_survey_language(SurveyLanguage::English);
    info.set_number_of_hours(3.5)?;
    Ok(info)
}

//! Careers page flow: open job listings and applications.
//!
//! Form validation happens entirely client-side; an application with a bad
//! email or phone never reaches the network.

use zenith_core::{Email, JobId, Phone};

use crate::api::ApiClient;
use crate::api::types::{Job, JobApplicationRequest, JobStatus};
use crate::error::{ApiError, Result};

use super::truncate;

const JOB_TEASER_LEN: usize = 200;

/// One card in the jobs grid.
#[derive(Debug, Clone)]
pub struct JobCardView {
    pub job_id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    pub job_type: String,
    pub salary_range: Option<String>,
    pub teaser: String,
}

impl From<&Job> for JobCardView {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.job_id,
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            salary_range: job.salary_range.clone(),
            teaser: truncate(&job.description, JOB_TEASER_LEN),
        }
    }
}

/// Load the currently open positions.
pub async fn open_jobs(api: &ApiClient) -> Result<Vec<JobCardView>> {
    let jobs = api.jobs().await?;
    Ok(jobs
        .iter()
        .filter(|job| job.status == JobStatus::Open)
        .map(JobCardView::from)
        .collect())
}

/// Raw application form input.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume_url: String,
    pub cover_letter: String,
}

/// Validate the form into a request body.
///
/// # Errors
///
/// [`ApiError::Validation`] with the first problem found; nothing has
/// touched the network yet.
pub fn validate_application(job_id: JobId, form: &ApplicationForm) -> Result<JobApplicationRequest> {
    let name = form.name.trim();
    if name.is_empty() || form.email.trim().is_empty() || form.phone.trim().is_empty() {
        return Err(ApiError::Validation(
            "Please fill in all required fields".to_string(),
        ));
    }

    let email = Email::parse(form.email.trim())
        .map_err(|_| ApiError::Validation("Please enter a valid email address".to_string()))?;
    let phone = Phone::parse(form.phone.trim())
        .map_err(|_| ApiError::Validation("Please enter a valid phone number".to_string()))?;

    let optional = |text: &str| {
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    };

    Ok(JobApplicationRequest {
        job_id,
        applicant_name: name.to_string(),
        email: email.into_inner(),
        phone: phone.into_inner(),
        resume_url: optional(&form.resume_url),
        cover_letter: optional(&form.cover_letter),
    })
}

/// Validate and submit an application.
pub async fn submit_application(
    api: &ApiClient,
    job_id: JobId,
    form: &ApplicationForm,
) -> Result<&'static str> {
    let request = validate_application(job_id, form)?;
    api.submit_application(&request).await?;
    Ok("Application submitted! We will be in touch.")
}

//! HTTP client for the backend: content feeds and application submission.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::content::{BannerRecord, ContentSource, CourseRecord, FetchError, JobPosting};
use crate::wizard::{ApplicationGateway, ApplicationPayload, SubmissionError};

pub const BANNERS_PATH: &str = "/api/banners";
pub const JOBS_PATH: &str = "/api/jobs";
pub const COURSES_PATH: &str = "/api/courses";
pub const APPLICATIONS_PATH: &str = "/api/applications";

#[derive(Debug, thiserror::Error)]
#[error("http client could not be built: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// Error body the backend sends on a rejected submission.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: Option<String>,
}

/// Thin wrapper over `reqwest` speaking the backend's REST contract.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientBuildError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        debug!(path, bytes = body.len(), "content fetched");
        serde_json::from_slice(&body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}

fn application_form(payload: ApplicationPayload) -> Result<Form, SubmissionError> {
    let ApplicationPayload {
        job_id,
        full_name,
        email,
        phone,
        resume,
        consent,
    } = payload;

    let mut part = Part::bytes(resume.bytes).file_name(resume.file_name);
    if let Some(content_type) = resume.content_type.as_deref() {
        part = part
            .mime_str(content_type)
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;
    }

    Ok(Form::new()
        .text("jobId", job_id)
        .text("fullName", full_name)
        .text("email", email)
        .text("phone", phone)
        .part("resume", part)
        .text("consent", consent))
}

#[async_trait]
impl ContentSource for ApiClient {
    async fn fetch_banners(&self) -> Result<Vec<BannerRecord>, FetchError> {
        self.get_json(BANNERS_PATH).await
    }

    async fn fetch_jobs(&self) -> Result<Vec<JobPosting>, FetchError> {
        self.get_json(JOBS_PATH).await
    }

    async fn fetch_courses(&self) -> Result<Vec<CourseRecord>, FetchError> {
        self.get_json(COURSES_PATH).await
    }
}

#[async_trait]
impl ApplicationGateway for ApiClient {
    async fn submit(&self, payload: ApplicationPayload) -> Result<(), SubmissionError> {
        let form = application_form(payload)?;
        let response = self
            .http
            .post(self.url(APPLICATIONS_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
            .and_then(|body| body.msg);
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

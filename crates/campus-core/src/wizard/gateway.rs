use async_trait::async_trait;

use super::draft::ResumeAttachment;

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit application. Please try again.";
pub const SUCCESS_MESSAGE: &str = "Application submitted successfully!";

/// Everything `POST /api/applications` carries, captured when submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationPayload {
    pub job_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub resume: ResumeAttachment,
    /// Serialized consent object, sent as a string part.
    pub consent: String,
}

/// Outbound hook for application submissions.
#[async_trait]
pub trait ApplicationGateway: Send + Sync {
    async fn submit(&self, payload: ApplicationPayload) -> Result<(), SubmissionError>;
}

/// Submission failure as seen by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("submission transport failed: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// The server's `msg` when it sent one, otherwise the generic text.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient toast shown to the applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for transient notifications (toast layer, terminal, test recorder).
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

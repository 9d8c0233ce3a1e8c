use crate::api::ClientBuildError;
use crate::config::ConfigError;
use crate::content::FetchError;
use crate::rotation::TimerError;
use crate::telemetry::TelemetryError;
use crate::wizard::SubmissionError;
use std::fmt;

/// Failures a host process can hit while wiring up the core.
///
/// Local validation outcomes never show up here; they stay inside the wizard.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Client(ClientBuildError),
    Fetch(FetchError),
    Submission(SubmissionError),
    Timer(TimerError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Client(err) => write!(f, "client error: {}", err),
            AppError::Fetch(err) => write!(f, "content error: {}", err),
            AppError::Submission(err) => write!(f, "submission error: {}", err),
            AppError::Timer(err) => write!(f, "timer error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Client(err) => Some(err),
            AppError::Fetch(err) => Some(err),
            AppError::Submission(err) => Some(err),
            AppError::Timer(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ClientBuildError> for AppError {
    fn from(value: ClientBuildError) -> Self {
        Self::Client(value)
    }
}

impl From<FetchError> for AppError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

impl From<SubmissionError> for AppError {
    fn from(value: SubmissionError) -> Self {
        Self::Submission(value)
    }
}

impl From<TimerError> for AppError {
    fn from(value: TimerError) -> Self {
        Self::Timer(value)
    }
}

use async_trait::async_trait;
use campus_core::validation::format_file_size;
use campus_core::wizard::{
    ApplicationGateway, ApplicationPayload, ConsentAnswer, Notice, NoticeLevel, Notifier,
    ResumeAttachment, SubmissionError,
};
use std::path::Path;

/// Prints notices where a browser would show a toast.
pub(crate) struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("[ok] {}", notice.message),
            NoticeLevel::Error => println!("[error] {}", notice.message),
        }
    }
}

/// Prints the payload instead of posting it.
pub(crate) struct DryRunGateway;

#[async_trait]
impl ApplicationGateway for DryRunGateway {
    async fn submit(&self, payload: ApplicationPayload) -> Result<(), SubmissionError> {
        println!("POST /api/applications (dry run)");
        println!("  jobId:    {}", payload.job_id);
        println!("  fullName: {}", payload.full_name);
        println!("  email:    {}", payload.email);
        println!("  phone:    {}", payload.phone);
        println!(
            "  resume:   {} ({}, {})",
            payload.resume.file_name,
            payload
                .resume
                .content_type
                .as_deref()
                .unwrap_or("unknown type"),
            format_file_size(payload.resume.size())
        );
        let consent = serde_json::from_str::<serde_json::Value>(&payload.consent)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or(payload.consent);
        println!("  consent:  {consent}");
        Ok(())
    }
}

pub(crate) fn parse_answer(raw: &str) -> Result<ConsentAnswer, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Ok(ConsentAnswer::Yes),
        "no" | "n" => Ok(ConsentAnswer::No),
        "-" | "" => Ok(ConsentAnswer::Unanswered),
        other => Err(format!("expected yes, no, or -; got '{other}'")),
    }
}

/// Reads a resume from disk, guessing its content type from the extension.
pub(crate) fn resume_from_path(path: &Path) -> std::io::Result<ResumeAttachment> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    let content_type = mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string());
    Ok(ResumeAttachment::new(file_name, content_type, bytes))
}

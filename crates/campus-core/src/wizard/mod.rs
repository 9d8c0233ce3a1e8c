//! Job application wizard: draft and consent state, stage gating, and the one-shot submission.

pub mod consent;
mod controller;
pub mod draft;
mod gateway;
mod machine;

#[cfg(test)]
mod tests;

pub use consent::{ConsentAnswer, ConsentQuestion, ConsentRecord};
pub use controller::{SubmitReport, WizardController};
pub use draft::{ApplicationDraft, AttachmentError, DraftField, FieldIssue, ResumeAttachment};
pub use gateway::{
    ApplicationGateway, ApplicationPayload, Notice, NoticeLevel, Notifier, SubmissionError,
    GENERIC_FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use machine::{
    ApplicationWizard, PendingSubmission, SessionToken, SubmissionOutcome, SubmitBlocked,
    TransitionBlocked, WizardStage, WizardView,
};

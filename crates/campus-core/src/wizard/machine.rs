use tracing::debug;

use super::consent::{ConsentAnswer, ConsentQuestion, ConsentRecord};
use super::draft::{ApplicationDraft, AttachmentError, DraftField, FieldIssue, ResumeAttachment};
use super::gateway::{ApplicationPayload, SubmissionError};
use crate::config::WizardConfig;
use crate::content::JobPosting;

/// Step of the application form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStage {
    #[default]
    Details,
    Consent,
}

/// Ties an in-flight submission to the wizard session that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken {
    session: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmissionPhase {
    Idle,
    InFlight(SessionToken),
    /// Accepted by the server; waiting out the success notice before closing.
    Closing(SessionToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionBlocked {
    Closed,
    InvalidDetails(Vec<FieldIssue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    Closed,
    InFlight,
    NotAtConsent,
    InvalidDetails(Vec<FieldIssue>),
    ConsentIncomplete(Vec<ConsentQuestion>),
}

/// Submission captured from the draft, ready for the gateway.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub token: SessionToken,
    pub payload: ApplicationPayload,
}

/// What resolving a gateway response did to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Failed { message: String },
    /// The session that sent the request is gone; nothing changed.
    Discarded,
}

/// Borrowed snapshot for rendering. Absent while the wizard is closed.
#[derive(Debug, Clone, Copy)]
pub struct WizardView<'a> {
    pub job: &'a JobPosting,
    pub stage: WizardStage,
    pub draft: &'a ApplicationDraft,
    pub consent: &'a ConsentRecord,
    pub submitting: bool,
    pub can_advance: bool,
    pub can_submit: bool,
}

/// Two-step job application form: Details, then Consent, then one submission.
#[derive(Debug)]
pub struct ApplicationWizard {
    max_resume_bytes: u64,
    job: Option<JobPosting>,
    stage: WizardStage,
    draft: ApplicationDraft,
    consent: ConsentRecord,
    submission: SubmissionPhase,
    session: u64,
}

impl ApplicationWizard {
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            max_resume_bytes: config.max_resume_bytes,
            job: None,
            stage: WizardStage::Details,
            draft: ApplicationDraft::default(),
            consent: ConsentRecord::default(),
            submission: SubmissionPhase::Idle,
            session: 0,
        }
    }

    /// Starts a fresh session for `job`. Without a job the wizard stays closed.
    pub fn open(&mut self, job: Option<JobPosting>) -> bool {
        let Some(job) = job else {
            debug!("application wizard opened without a job; rendering nothing");
            return false;
        };
        self.reset();
        self.job = Some(job);
        true
    }

    /// Drops the session. A request already sent keeps running; its answer no longer touches state.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.session += 1;
        self.job = None;
        self.stage = WizardStage::Details;
        self.draft = ApplicationDraft::default();
        self.consent = ConsentRecord::default();
        self.submission = SubmissionPhase::Idle;
    }

    pub fn is_open(&self) -> bool {
        self.job.is_some()
    }

    pub fn job(&self) -> Option<&JobPosting> {
        self.job.as_ref()
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn consent(&self) -> &ConsentRecord {
        &self.consent
    }

    /// True from the moment a submission starts until the wizard closes or the call fails.
    pub fn is_submitting(&self) -> bool {
        !matches!(self.submission, SubmissionPhase::Idle)
    }

    pub fn view(&self) -> Option<WizardView<'_>> {
        let job = self.job.as_ref()?;
        Some(WizardView {
            job,
            stage: self.stage,
            draft: &self.draft,
            consent: &self.consent,
            submitting: self.is_submitting(),
            can_advance: self.can_advance(),
            can_submit: self.can_submit(),
        })
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) -> bool {
        if !self.is_open() {
            return false;
        }
        self.draft.set(field, value);
        true
    }

    pub fn attach_file(&mut self, resume: ResumeAttachment) -> Result<(), AttachmentError> {
        if !self.is_open() {
            return Err(AttachmentError::WizardClosed);
        }
        self.draft.attach(resume, self.max_resume_bytes)
    }

    pub fn set_consent(&mut self, question: ConsentQuestion, answer: ConsentAnswer) -> bool {
        if !self.is_open() {
            return false;
        }
        self.consent.set(question, answer);
        true
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) -> bool {
        if !self.is_open() {
            return false;
        }
        self.consent.set_terms_accepted(accepted);
        true
    }

    pub fn details_issues(&self) -> Vec<FieldIssue> {
        self.draft.issues()
    }

    pub fn can_advance(&self) -> bool {
        self.is_open() && self.draft.is_valid()
    }

    pub fn can_submit(&self) -> bool {
        self.is_open()
            && self.stage == WizardStage::Consent
            && matches!(self.submission, SubmissionPhase::Idle)
            && self.draft.is_valid()
            && self.consent.is_complete()
    }

    pub fn advance(&mut self) -> Result<WizardStage, TransitionBlocked> {
        if !self.is_open() {
            return Err(TransitionBlocked::Closed);
        }
        if self.stage == WizardStage::Details {
            let issues = self.draft.issues();
            if !issues.is_empty() {
                return Err(TransitionBlocked::InvalidDetails(issues));
            }
            self.stage = WizardStage::Consent;
        }
        Ok(self.stage)
    }

    pub fn retreat(&mut self) -> Result<WizardStage, TransitionBlocked> {
        if !self.is_open() {
            return Err(TransitionBlocked::Closed);
        }
        self.stage = WizardStage::Details;
        Ok(self.stage)
    }

    /// Captures the payload and raises the in-flight guard.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SubmitBlocked> {
        let Some(job) = self.job.as_ref() else {
            return Err(SubmitBlocked::Closed);
        };
        if !matches!(self.submission, SubmissionPhase::Idle) {
            return Err(SubmitBlocked::InFlight);
        }
        if self.stage != WizardStage::Consent {
            return Err(SubmitBlocked::NotAtConsent);
        }
        let issues = self.draft.issues();
        if !issues.is_empty() {
            return Err(SubmitBlocked::InvalidDetails(issues));
        }
        if !self.consent.is_complete() {
            return Err(SubmitBlocked::ConsentIncomplete(self.consent.pending()));
        }
        let Some(resume) = self.draft.resume.clone() else {
            return Err(SubmitBlocked::InvalidDetails(vec![FieldIssue::MissingResume]));
        };

        let payload = ApplicationPayload {
            job_id: job.id.clone(),
            full_name: self.draft.full_name.trim().to_string(),
            email: self.draft.email.trim().to_string(),
            phone: self.draft.phone.trim().to_string(),
            resume,
            consent: self.consent.to_json(),
        };
        let token = SessionToken {
            session: self.session,
        };
        self.submission = SubmissionPhase::InFlight(token);
        Ok(PendingSubmission { token, payload })
    }

    /// Applies the gateway response. Answers for a closed or replaced session change nothing.
    pub fn resolve_submission(
        &mut self,
        token: SessionToken,
        result: Result<(), SubmissionError>,
    ) -> SubmissionOutcome {
        if self.submission != SubmissionPhase::InFlight(token) {
            debug!(
                session = token.session,
                current = self.session,
                "submission response for a closed session; state left unchanged"
            );
            return SubmissionOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                self.submission = SubmissionPhase::Closing(token);
                SubmissionOutcome::Accepted
            }
            Err(error) => {
                self.submission = SubmissionPhase::Idle;
                SubmissionOutcome::Failed {
                    message: error.user_message(),
                }
            }
        }
    }

    /// Closes after an accepted submission. Returns false if the session already moved on.
    pub fn finish_submission(&mut self, token: SessionToken) -> bool {
        if self.submission != SubmissionPhase::Closing(token) {
            return false;
        }
        self.reset();
        true
    }
}

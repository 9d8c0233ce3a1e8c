use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::WizardConfig;
use crate::content::JobPosting;
use crate::wizard::{
    ApplicationGateway, ApplicationPayload, ApplicationWizard, ConsentAnswer, ConsentQuestion,
    DraftField, Notice, Notifier, ResumeAttachment, SubmissionError, WizardController,
};

pub(super) const MIB: usize = 1024 * 1024;

pub(super) fn wizard_config() -> WizardConfig {
    WizardConfig {
        max_resume_bytes: 5 * MIB as u64,
        success_close_delay: Duration::from_millis(1_500),
    }
}

pub(super) fn engineer_job() -> JobPosting {
    JobPosting::new("job-42", "Engineer")
}

pub(super) fn pdf_resume(bytes: usize) -> ResumeAttachment {
    ResumeAttachment::new(
        "resume.pdf",
        Some("application/pdf".to_string()),
        vec![0u8; bytes],
    )
}

pub(super) fn fill_details(wizard: &mut ApplicationWizard) {
    wizard.update_field(DraftField::FullName, "Asha Raman");
    wizard.update_field(DraftField::Email, "asha@example.com");
    wizard.update_field(DraftField::Phone, "+91 98765 43210");
}

pub(super) fn answer_all(wizard: &mut ApplicationWizard, answer: ConsentAnswer) {
    for question in ConsentQuestion::ALL {
        wizard.set_consent(question, answer);
    }
}

/// Opened wizard sitting on the Consent step with every gate satisfied.
pub(super) fn ready_to_submit(wizard: &mut ApplicationWizard) {
    assert!(wizard.open(Some(engineer_job())));
    fill_details(wizard);
    wizard
        .attach_file(pdf_resume(2 * MIB))
        .expect("2 MB resume accepted");
    wizard.advance().expect("details valid");
    answer_all(wizard, ConsentAnswer::Yes);
    wizard.set_terms_accepted(true);
}

/// Gateway that records payloads and replays scripted responses.
#[derive(Default)]
pub(super) struct ScriptedGateway {
    calls: AtomicUsize,
    payloads: Mutex<Vec<ApplicationPayload>>,
    responses: Mutex<VecDeque<Result<(), SubmissionError>>>,
}

impl ScriptedGateway {
    pub(super) fn with_responses(responses: Vec<Result<(), SubmissionError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn payloads(&self) -> Vec<ApplicationPayload> {
        self.payloads.lock().expect("payload mutex poisoned").clone()
    }
}

#[async_trait]
impl ApplicationGateway for ScriptedGateway {
    async fn submit(&self, payload: ApplicationPayload) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads
            .lock()
            .expect("payload mutex poisoned")
            .push(payload);
        tokio::time::sleep(Duration::from_millis(250)).await;
        self.responses
            .lock()
            .expect("response mutex poisoned")
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

#[derive(Default)]
pub(super) struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub(super) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
    }
}

pub(super) fn build_controller(
    gateway: ScriptedGateway,
) -> (
    WizardController<ScriptedGateway, RecordingNotifier>,
    Arc<ScriptedGateway>,
    Arc<RecordingNotifier>,
) {
    let gateway = Arc::new(gateway);
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = WizardController::new(&wizard_config(), gateway.clone(), notifier.clone());
    (controller, gateway, notifier)
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use campus_core::config::WizardConfig;
use campus_core::content::{find_job, JobPosting};
use campus_core::wizard::{
    ApplicationGateway, ApplicationPayload, ConsentAnswer, ConsentQuestion, DraftField, Notice,
    NoticeLevel, Notifier, ResumeAttachment, SubmissionError, SubmitBlocked, SubmitReport,
    WizardController, WizardStage, SUCCESS_MESSAGE,
};

struct SlowGateway {
    calls: AtomicUsize,
    last: Mutex<Option<ApplicationPayload>>,
}

impl SlowGateway {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ApplicationGateway for SlowGateway {
    async fn submit(&self, payload: ApplicationPayload) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().expect("payload mutex poisoned") = Some(payload);
        tokio::time::sleep(Duration::from_millis(400)).await;
        Ok(())
    }
}

#[derive(Default)]
struct CollectingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
    }
}

fn listed_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting::new("job-7", "Trainer"),
        JobPosting::new("job-42", "Engineer"),
    ]
}

#[tokio::test(start_paused = true)]
async fn engineer_application_submits_exactly_once() {
    let gateway = Arc::new(SlowGateway::new());
    let notifier = Arc::new(CollectingNotifier::default());
    let controller = WizardController::new(
        &WizardConfig::default(),
        gateway.clone(),
        notifier.clone(),
    );

    let jobs = listed_jobs();
    let job = find_job(&jobs, "job-42").cloned();
    controller.with_wizard(|wizard| {
        assert!(wizard.open(job));
        wizard.update_field(DraftField::FullName, "Meera Iyer");
        wizard.update_field(DraftField::Email, "meera@example.com");
        wizard.update_field(DraftField::Phone, "(080) 4123-4567");
        wizard
            .attach_file(ResumeAttachment::new(
                "meera.pdf",
                Some("application/pdf".to_string()),
                vec![7u8; 2 * 1024 * 1024],
            ))
            .expect("2 MB pdf accepted");
        assert_eq!(wizard.advance(), Ok(WizardStage::Consent));

        wizard.set_consent(ConsentQuestion::BackgroundVerification, ConsentAnswer::Yes);
        wizard.set_consent(ConsentQuestion::ReferenceCheck, ConsentAnswer::Yes);
        wizard.set_consent(ConsentQuestion::WorkAuthorization, ConsentAnswer::Yes);
        wizard.set_consent(ConsentQuestion::DataRetention, ConsentAnswer::No);
        wizard.set_terms_accepted(true);
        assert!(!wizard.can_submit());
    });

    assert_eq!(
        controller.submit().await,
        SubmitReport::Blocked(SubmitBlocked::ConsentIncomplete(vec![
            ConsentQuestion::DataRetention
        ]))
    );
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);

    controller.with_wizard(|wizard| {
        wizard.set_consent(ConsentQuestion::DataRetention, ConsentAnswer::Yes);
        assert!(wizard.can_submit());
    });

    let (first, second) = tokio::join!(controller.submit(), controller.submit());
    assert_eq!(first, SubmitReport::Submitted);
    assert_eq!(second, SubmitReport::Blocked(SubmitBlocked::InFlight));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

    let payload = gateway
        .last
        .lock()
        .expect("payload mutex poisoned")
        .clone()
        .expect("payload recorded");
    assert_eq!(payload.job_id, "job-42");
    assert_eq!(payload.resume.size(), 2 * 1024 * 1024);

    let notices = notifier.notices.lock().expect("notice mutex poisoned").clone();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].message, SUCCESS_MESSAGE);

    controller.with_wizard(|wizard| {
        assert!(!wizard.is_open());
        assert!(!wizard.is_submitting());
        assert!(wizard.view().is_none());
    });
}

#[tokio::test(start_paused = true)]
async fn unknown_job_never_opens_the_wizard() {
    let gateway = Arc::new(SlowGateway::new());
    let controller = WizardController::new(
        &WizardConfig::default(),
        gateway.clone(),
        Arc::new(CollectingNotifier::default()),
    );

    let jobs = listed_jobs();
    let job = find_job(&jobs, "job-404").cloned();
    let opened = controller.with_wizard(|wizard| wizard.open(job));
    assert!(!opened);

    assert_eq!(
        controller.submit().await,
        SubmitReport::Blocked(SubmitBlocked::Closed)
    );
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

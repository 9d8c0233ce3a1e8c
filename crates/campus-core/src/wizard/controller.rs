use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::gateway::{ApplicationGateway, Notice, Notifier, SUCCESS_MESSAGE};
use super::machine::{ApplicationWizard, SubmissionOutcome, SubmitBlocked};
use crate::config::WizardConfig;

/// Result of one press of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// Accepted; the wizard has been closed and reset.
    Submitted,
    /// Accepted, but the wizard had already moved to another session before the close.
    SubmittedDetached,
    Failed { message: String },
    /// Response arrived for a wizard that was closed meanwhile. The applicant is still
    /// notified; the wizard state is left alone.
    Discarded,
    Blocked(SubmitBlocked),
}

/// Drives the wizard's single asynchronous submission against a gateway.
///
/// The wizard lock is never held across an await, so a second press while the
/// request is pending sees the in-flight guard and becomes a no-op.
pub struct WizardController<G: ?Sized, N: ?Sized> {
    wizard: Arc<Mutex<ApplicationWizard>>,
    gateway: Arc<G>,
    notifier: Arc<N>,
    close_delay: Duration,
}

impl<G, N> WizardController<G, N>
where
    G: ApplicationGateway + ?Sized,
    N: Notifier + ?Sized,
{
    pub fn new(config: &WizardConfig, gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self {
            wizard: Arc::new(Mutex::new(ApplicationWizard::new(config))),
            gateway,
            notifier,
            close_delay: config.success_close_delay,
        }
    }

    /// Runs `f` against the wizard state under the lock.
    pub fn with_wizard<R>(&self, f: impl FnOnce(&mut ApplicationWizard) -> R) -> R {
        let mut guard = self.wizard.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn is_submitting(&self) -> bool {
        self.with_wizard(|wizard| wizard.is_submitting())
    }

    pub async fn submit(&self) -> SubmitReport {
        let pending = match self.with_wizard(ApplicationWizard::begin_submission) {
            Ok(pending) => pending,
            Err(SubmitBlocked::InFlight) => {
                debug!("submission already in flight; ignoring press");
                return SubmitReport::Blocked(SubmitBlocked::InFlight);
            }
            Err(blocked) => return SubmitReport::Blocked(blocked),
        };

        let token = pending.token;
        let job_id = pending.payload.job_id.clone();
        let result = self.gateway.submit(pending.payload).await;
        let detached_notice = match &result {
            Ok(()) => Notice::success(SUCCESS_MESSAGE),
            Err(error) => Notice::error(error.user_message()),
        };
        let outcome = self.with_wizard(|wizard| wizard.resolve_submission(token, result));

        match outcome {
            SubmissionOutcome::Accepted => {
                info!(job_id = %job_id, "application submitted");
                self.notifier.notify(Notice::success(SUCCESS_MESSAGE));
                tokio::time::sleep(self.close_delay).await;
                if self.with_wizard(|wizard| wizard.finish_submission(token)) {
                    SubmitReport::Submitted
                } else {
                    SubmitReport::SubmittedDetached
                }
            }
            SubmissionOutcome::Failed { message } => {
                warn!(job_id = %job_id, %message, "application submission failed");
                self.notifier.notify(Notice::error(message.clone()));
                SubmitReport::Failed { message }
            }
            SubmissionOutcome::Discarded => {
                info!(
                    job_id = %job_id,
                    level = ?detached_notice.level,
                    "submission answered after the wizard closed"
                );
                self.notifier.notify(detached_notice);
                SubmitReport::Discarded
            }
        }
    }
}

use crate::infra::{parse_answer, resume_from_path, DryRunGateway, StdoutNotifier};
use campus_core::api::ApiClient;
use campus_core::config::AppConfig;
use campus_core::content::{
    defaults, find_job, load_courses, load_jobs, load_role, BannerRole, JobPosting,
};
use campus_core::error::AppError;
use campus_core::rotation::{CarouselSettings, ItemList, RotationDriver};
use campus_core::wizard::{
    ApplicationGateway, ApplicationWizard, ConsentAnswer, ConsentQuestion, DraftField,
    ResumeAttachment, SubmitReport, TransitionBlocked, WizardController,
};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RotationRole {
    Hero,
    Team,
    Courses,
    Contact,
}

#[derive(Args, Debug)]
pub(crate) struct RotationArgs {
    /// Which carousel to mount
    #[arg(long, value_enum, default_value = "hero")]
    pub(crate) role: RotationRole,
    /// Viewport width in CSS pixels
    #[arg(long, default_value_t = 1280)]
    pub(crate) width: u32,
    /// Number of advances to print before unmounting
    #[arg(long, default_value_t = 3)]
    pub(crate) cycles: usize,
    /// Override the configured advance interval
    #[arg(long)]
    pub(crate) interval_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct ApplyArgs {
    /// Identifier of the job to apply for
    #[arg(long)]
    pub(crate) job_id: String,
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) phone: String,
    /// Resume file (PDF or Word, under 5 MB)
    #[arg(long)]
    pub(crate) resume: PathBuf,
    /// Consent answers in question order, e.g. yes,yes,yes,no
    #[arg(long, value_delimiter = ',', value_parser = parse_answer)]
    pub(crate) answers: Vec<ConsentAnswer>,
    #[arg(long)]
    pub(crate) accept_terms: bool,
    /// Print the multipart payload instead of posting it
    #[arg(long)]
    pub(crate) dry_run: bool,
}

pub(crate) async fn run_jobs(config: &AppConfig) -> Result<(), AppError> {
    let client = ApiClient::new(&config.api)?;
    let jobs = load_jobs(&client).await;
    if jobs.is_empty() {
        println!("No open positions.");
        return Ok(());
    }

    println!("Open positions ({})", jobs.len());
    for job in &jobs {
        render_job(job);
    }
    Ok(())
}

fn render_job(job: &JobPosting) {
    let posted = job
        .created_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "  [{}] {} | {} | {} | posted {}",
        job.id,
        job.title,
        job.location.as_deref().unwrap_or("Location TBD"),
        job.employment_type.as_deref().unwrap_or("-"),
        posted
    );
}

async fn load_rotation(
    config: &AppConfig,
    client: &ApiClient,
    role: RotationRole,
) -> (ItemList, Duration) {
    let rotation = &config.rotation;
    match role {
        RotationRole::Hero => (
            load_role(client, BannerRole::Hero, rotation.hero_order).await,
            rotation.hero_interval,
        ),
        RotationRole::Team => (
            load_role(client, BannerRole::Team, rotation.team_order).await,
            rotation.hero_interval,
        ),
        RotationRole::Courses => (load_courses(client).await, rotation.hero_interval),
        RotationRole::Contact => (defaults::contact_items(), rotation.contact_interval),
    }
}

pub(crate) async fn run_rotation(config: &AppConfig, args: RotationArgs) -> Result<(), AppError> {
    let client = ApiClient::new(&config.api)?;
    let (items, configured_interval) = load_rotation(config, &client, args.role).await;
    let interval = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or(configured_interval);

    let mut driver = RotationDriver::mount(
        CarouselSettings::from(&config.rotation),
        interval,
        args.width,
    )?;
    let mut updates = driver.subscribe();
    driver.replace_items(items);
    updates.borrow_and_update();

    print_frame(&driver);
    if !driver.has_active_timer() {
        println!("(static: nothing to rotate)");
        return Ok(());
    }

    for _ in 0..args.cycles {
        if updates.changed().await.is_err() {
            break;
        }
        print_frame(&driver);
    }

    info!(advances = driver.snapshot().advances, "rotation preview finished");
    driver.unmount();
    Ok(())
}

fn print_frame(driver: &RotationDriver) {
    driver.with_carousel(|carousel| match carousel.frame() {
        None => println!("(empty: carousel not rendered)"),
        Some(frame) => {
            let window: Vec<&str> = frame.window.iter().map(|item| item.id.as_str()).collect();
            let outgoing = frame
                .outgoing
                .map(|item| format!(" (fading out {})", item.id))
                .unwrap_or_default();
            let video = if frame.playback.is_some() {
                " [video]"
            } else {
                ""
            };
            println!(
                "#{} {}{}{} window={:?}",
                frame.active_index, frame.active.id, video, outgoing, window
            );
        }
    });
}

/// Attaches the resume and moves to Consent, collecting inline messages for anything that stops it.
fn complete_details(
    wizard: &mut ApplicationWizard,
    attachment: ResumeAttachment,
) -> Result<(), Vec<String>> {
    wizard
        .attach_file(attachment)
        .map_err(|rejected| vec![rejected.to_string()])?;
    wizard.advance().map(|_| ()).map_err(|blocked| match blocked {
        TransitionBlocked::InvalidDetails(issues) => {
            issues.iter().map(|issue| issue.message()).collect::<Vec<String>>()
        }
        TransitionBlocked::Closed => vec!["the application form is not open".to_string()],
    })
}

fn print_review(wizard: &ApplicationWizard) {
    let draft = wizard.draft();
    for (label, field) in [
        ("Name", DraftField::FullName),
        ("Email", DraftField::Email),
        ("Phone", DraftField::Phone),
    ] {
        println!("{label:>6}: {}", draft.get(field));
    }
    let consent = wizard.consent();
    for question in ConsentQuestion::ALL {
        let answer = match consent.answer(question) {
            ConsentAnswer::Yes => "yes",
            ConsentAnswer::No => "no",
            ConsentAnswer::Unanswered => "-",
        };
        println!("  [{answer:>3}] {}", question.prompt());
    }
    println!(
        "  terms accepted: {}",
        if consent.terms_accepted() { "yes" } else { "no" }
    );
}

pub(crate) async fn run_apply(config: &AppConfig, args: ApplyArgs) -> Result<(), AppError> {
    let ApplyArgs {
        job_id,
        name,
        email,
        phone,
        resume,
        answers,
        accept_terms,
        dry_run,
    } = args;

    let client = ApiClient::new(&config.api)?;
    let jobs = load_jobs(&client).await;
    let Some(job) = find_job(&jobs, &job_id).cloned() else {
        println!("Job '{job_id}' is not listed; the application form stays closed.");
        return Ok(());
    };

    let gateway: Arc<dyn ApplicationGateway> = if dry_run {
        Arc::new(DryRunGateway)
    } else {
        Arc::new(client)
    };
    let controller = WizardController::new(&config.wizard, gateway, Arc::new(StdoutNotifier));
    let attachment = resume_from_path(&resume)?;

    let details = controller.with_wizard(|wizard| {
        wizard.open(Some(job));
        wizard.update_field(DraftField::FullName, name);
        wizard.update_field(DraftField::Email, email);
        wizard.update_field(DraftField::Phone, phone);
        complete_details(wizard, attachment)
    });

    if let Err(problems) = details {
        println!("Details are incomplete:");
        for problem in problems {
            println!("  - {problem}");
        }
        return Ok(());
    }

    controller.with_wizard(|wizard| {
        for (question, answer) in ConsentQuestion::ALL.into_iter().zip(answers) {
            wizard.set_consent(question, answer);
        }
        wizard.set_terms_accepted(accept_terms);
        print_review(wizard);
    });

    match controller.submit().await {
        SubmitReport::Submitted | SubmitReport::SubmittedDetached => {
            println!("Application for '{job_id}' submitted.");
        }
        SubmitReport::Failed { message } => println!("Submission failed: {message}"),
        SubmitReport::Discarded => println!("Form closed before the server answered."),
        SubmitReport::Blocked(blocked) => println!("Submit is disabled: {blocked:?}"),
    }
    Ok(())
}

mod gate;
mod upload;

pub use gate::require_registration_open;
pub use upload::RegistrationUpload;

use actix_multipart::form::MultipartForm;
use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::registration::{
    FormStore, Notice, SubmissionState, SubmitError, schedule_completion,
};
use crate::session::{csrf, visit};
use crate::templates_structs::{
    PageContext, RegistrationFormTemplate, SubmittingTemplate, SuccessTemplate,
};

/// Seconds between reloads of the "processing" page.
const SUBMITTING_REFRESH_SECS: u64 = 1;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/daftar")
            .wrap(actix_web::middleware::from_fn(require_registration_open))
            .route(web::get().to(form))
            .route(web::post().to(submit)),
    );
}

/// Render the visitor's form according to its submission state.
pub async fn form(
    session: Session,
    config: web::Data<AppConfig>,
    store: web::Data<FormStore>,
) -> Result<HttpResponse, AppError> {
    let visit_id = visit::get_or_create_visit(&session)?;
    let (form, notice) = store.snapshot(&visit_id);
    let ctx = PageContext::build(&session, &config).with_notice(notice);

    match form.state() {
        SubmissionState::Editing => render(RegistrationFormTemplate::new(ctx, form)),
        SubmissionState::Submitting => render(SubmittingTemplate {
            ctx,
            refresh_secs: SUBMITTING_REFRESH_SECS,
        }),
        SubmissionState::Succeeded => {
            // Terminal: the next visit to /daftar starts a new form.
            store.discard(&visit_id);
            visit::end_visit(&session);
            render(SuccessTemplate::new(ctx))
        }
    }
}

enum Outcome {
    Submitted,
    NotEditing,
    Rejected(Notice),
}

pub async fn submit(
    session: Session,
    config: web::Data<AppConfig>,
    store: web::Data<FormStore>,
    MultipartForm(upload): MultipartForm<RegistrationUpload>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, upload.csrf_token())?;
    let visit_id = visit::get_or_create_visit(&session)?;

    let outcome = store.with_form(&visit_id, |form, _| {
        if form.state() != SubmissionState::Editing {
            return Outcome::NotEditing;
        }

        upload.apply_fields(form);

        if let Some(file) = upload.proof_file() {
            if let Err(e) = form.set_proof_file(file) {
                log::info!("{e}");
                return Outcome::Rejected(e.to_notice());
            }
        }

        match form.submit() {
            Ok(()) => Outcome::Submitted,
            Err(SubmitError::Invalid(errors)) => {
                log::debug!("Registration rejected with {} error(s)", errors.len());
                Outcome::Rejected(errors.to_notice())
            }
            Err(SubmitError::NotEditing(_)) => Outcome::NotEditing,
        }
    });

    match outcome {
        Outcome::Submitted => {
            schedule_completion(store.get_ref().clone(), visit_id, config.submit_delay);
            Ok(super::see_other("/daftar"))
        }
        Outcome::NotEditing => Ok(super::see_other("/daftar")),
        Outcome::Rejected(notice) => {
            let form = store.peek(&visit_id);
            let ctx = PageContext::build(&session, &config).with_notice(Some(notice));
            render(RegistrationFormTemplate::new(ctx, form))
        }
    }
}

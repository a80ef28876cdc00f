use askama::Template;

use crate::models::content;
use crate::registration::form::ADVERTISED_MAX_PROOF_BYTES;
use crate::registration::{RegistrationForm, StudyProgram};
use super::PageContext;

/// `accept` attribute of the proof upload control.
const ACCEPTED_EXTENSIONS: &str = ".jpg,.jpeg,.png,.pdf";

#[derive(Template)]
#[template(path = "registration/form.html")]
pub struct RegistrationFormTemplate {
    pub ctx: PageContext,
    pub form: RegistrationForm,
    pub programs: [StudyProgram; 4],
    pub accepted_extensions: &'static str,
    pub max_proof_label: String,
}

impl RegistrationFormTemplate {
    pub fn new(ctx: PageContext, form: RegistrationForm) -> Self {
        Self {
            ctx,
            form,
            programs: StudyProgram::ALL,
            accepted_extensions: ACCEPTED_EXTENSIONS,
            max_proof_label: format!("{}MB", ADVERTISED_MAX_PROOF_BYTES / (1024 * 1024)),
        }
    }
}

/// Shown while the simulated submission is in flight. Reloads itself.
#[derive(Template)]
#[template(path = "registration/submitting.html")]
pub struct SubmittingTemplate {
    pub ctx: PageContext,
    pub refresh_secs: u64,
}

#[derive(Template)]
#[template(path = "registration/success.html")]
pub struct SuccessTemplate {
    pub ctx: PageContext,
    pub department_group: &'static str,
    pub programs: [StudyProgram; 4],
}

impl SuccessTemplate {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            department_group: content::DEPARTMENT_WHATSAPP_GROUP,
            programs: StudyProgram::ALL,
        }
    }
}

/// Registration page while the window is closed.
#[derive(Template)]
#[template(path = "registration/fallback.html")]
pub struct FallbackTemplate {
    pub ctx: PageContext,
}

use serde::Serialize;

use crate::registration::{ProofFile, RegistrationForm, SubmissionState};

/// JSON view of a visitor's form.
#[derive(Debug, Serialize)]
pub struct ApiRegistrationResponse {
    pub state: SubmissionState,
    pub full_name: String,
    pub has_student_id: bool,
    pub student_id: String,
    pub study_program: String,
    pub email: String,
    pub whatsapp_number: String,
    pub proof_file: Option<ProofFile>,
    /// Rule messages that would fail if the form were submitted now.
    pub pending_errors: Vec<String>,
}

impl From<&RegistrationForm> for ApiRegistrationResponse {
    fn from(form: &RegistrationForm) -> Self {
        let pending_errors = match form.validate() {
            Ok(()) => Vec::new(),
            Err(e) => e.messages(),
        };
        Self {
            state: form.state(),
            full_name: form.full_name().to_string(),
            has_student_id: form.has_student_id(),
            student_id: form.student_id().to_string(),
            study_program: form.study_program().to_string(),
            email: form.email().to_string(),
            whatsapp_number: form.whatsapp_number().to_string(),
            proof_file: form.proof_file().cloned(),
            pending_errors,
        }
    }
}

/// Error response format for API errors
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

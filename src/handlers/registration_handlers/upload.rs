use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::registration::{Field, ProofFile, RegistrationForm, StudyProgram};

/// Multipart body of the registration form. Every field is optional so a
/// partial post still reaches validation instead of failing extraction.
#[derive(MultipartForm)]
pub struct RegistrationUpload {
    pub csrf_token: Option<Text<String>>,
    pub full_name: Option<Text<String>>,
    pub has_student_id: Option<Text<String>>,
    pub student_id: Option<Text<String>>,
    pub study_program: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub whatsapp_number: Option<Text<String>>,
    // Transport cap only; the advertised 5MB is not a validation rule.
    #[multipart(limit = "10MB")]
    pub proof_file: Option<TempFile>,
}

fn text(field: &Option<Text<String>>) -> Option<&str> {
    field.as_ref().map(|t| t.0.as_str())
}

/// The label of a selectable program, or `""` for anything else.
fn known_program(label: &str) -> &'static str {
    match StudyProgram::from_label(label) {
        Some(program) => program.label(),
        None => {
            if !label.is_empty() {
                log::debug!("Ignoring unknown study program {label:?}");
            }
            ""
        }
    }
}

impl RegistrationUpload {
    pub fn csrf_token(&self) -> &str {
        text(&self.csrf_token).unwrap_or("")
    }

    /// Feed the posted values through the form's setters. The identity mode
    /// goes first so the NIM setter knows whether to derive the program. The
    /// NIM setter only runs when the posted NIM differs from the stored one,
    /// so re-posting an unchanged NIM never re-derives over a chosen program.
    /// A posted program only counts while the student has no NIM, and only
    /// one of the known program labels is kept.
    pub fn apply_fields(&self, form: &mut RegistrationForm) {
        match text(&self.has_student_id) {
            Some("true") => form.set_has_student_id(true),
            Some("false") => form.set_has_student_id(false),
            Some(other) => log::debug!("Ignoring has_student_id value {other:?}"),
            None => {}
        }

        if let Some(v) = text(&self.full_name) {
            form.set_field(Field::FullName, v);
        }
        if let Some(v) = text(&self.student_id) {
            if v != form.student_id() {
                form.set_field(Field::StudentId, v);
            }
        }
        if !form.has_student_id() {
            if let Some(v) = text(&self.study_program) {
                form.set_field(Field::StudyProgram, known_program(v));
            }
        }
        if let Some(v) = text(&self.email) {
            form.set_field(Field::Email, v);
        }
        if let Some(v) = text(&self.whatsapp_number) {
            form.set_field(Field::WhatsappNumber, v);
        }
    }

    /// The chosen proof file, or `None` when the file input was left empty.
    pub fn proof_file(&self) -> Option<ProofFile> {
        let file = self.proof_file.as_ref()?;
        let name = file.file_name.clone().unwrap_or_default();
        if name.is_empty() && file.size == 0 {
            return None;
        }
        let mime_type = file
            .content_type
            .as_ref()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();
        Some(ProofFile::new(name, mime_type, file.size))
    }
}

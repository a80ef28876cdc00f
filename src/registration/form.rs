use std::fmt;

use serde::Serialize;

use super::notice::Notice;
use super::program::derive_study_program;
use super::validate::{is_valid_email, is_valid_nim, is_valid_whatsapp};

/// MIME types accepted as proof of admission.
pub const ALLOWED_PROOF_TYPES: [&str; 3] = ["image/jpeg", "image/png", "application/pdf"];

/// Size advertised next to the upload control. Not enforced.
pub const ADVERTISED_MAX_PROOF_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Editing,
    Submitting,
    Succeeded,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionState::Editing => write!(f, "editing"),
            SubmissionState::Submitting => write!(f, "submitting"),
            SubmissionState::Succeeded => write!(f, "succeeded"),
        }
    }
}

/// Text fields addressable through [`RegistrationForm::set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    StudentId,
    StudyProgram,
    Email,
    WhatsappNumber,
}

/// Metadata of the uploaded proof. The bytes themselves are never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofFile {
    pub name: String,
    pub mime_type: String,
    pub size: usize,
}

impl ProofFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: usize) -> Self {
        Self { name: name.into(), mime_type: mime_type.into(), size }
    }

    pub fn has_allowed_type(&self) -> bool {
        ALLOWED_PROOF_TYPES.contains(&self.mime_type.as_str())
    }

    /// Human-readable size, e.g. `"812 KB"`.
    pub fn size_label(&self) -> String {
        const KB: usize = 1024;
        const MB: usize = 1024 * KB;
        if self.size >= MB {
            format!("{:.1} MB", self.size as f64 / MB as f64)
        } else {
            format!("{} KB", self.size.div_ceil(KB))
        }
    }
}

/// One failed submit rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    FullNameRequired,
    StudentIdRequired,
    StudentIdFormat,
    StudyProgramRequired,
    EmailRequired,
    EmailDomain,
    WhatsappRequired,
    WhatsappFormat,
    ProofFileRequired,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::FullNameRequired => "Nama lengkap wajib diisi",
            FieldError::StudentIdRequired => "NIM wajib diisi",
            FieldError::StudentIdFormat => {
                "Format NIM tidak valid - NIM harus terdiri dari 10 digit angka"
            }
            FieldError::StudyProgramRequired => "Program studi wajib dipilih",
            FieldError::EmailRequired => "Email wajib diisi",
            FieldError::EmailDomain => {
                "Format email tidak valid - Email harus menggunakan domain @student.undiksha.ac.id"
            }
            FieldError::WhatsappRequired => "Nomor WhatsApp wajib diisi",
            FieldError::WhatsappFormat => {
                "Format nomor WhatsApp tidak valid - Nomor WhatsApp hanya boleh berisi angka"
            }
            FieldError::ProofFileRequired => "Bukti penerimaan mahasiswa wajib diunggah",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Every rule that failed on submit, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|e| e.message().to_string()).collect()
    }

    pub fn to_notice(&self) -> Notice {
        Notice::from_errors(self.messages())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Proof upload with a MIME type outside [`ALLOWED_PROOF_TYPES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFileType {
    pub mime_type: String,
}

impl UnsupportedFileType {
    pub fn to_notice(&self) -> Notice {
        Notice::error(
            "Format file tidak didukung",
            "Harap unggah file dengan format JPG, PNG, atau PDF.",
        )
    }
}

impl fmt::Display for UnsupportedFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported proof file type: {}", self.mime_type)
    }
}

impl std::error::Error for UnsupportedFileType {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Invalid(ValidationErrors),
    /// `submit` is only legal while editing.
    NotEditing(SubmissionState),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(e) => write!(f, "Validation failed: {e}"),
            SubmitError::NotEditing(state) => write!(f, "Form is {state}, not editing"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// One applicant's re-registration form and its submission state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationForm {
    full_name: String,
    has_student_id: bool,
    student_id: String,
    study_program: String,
    email: String,
    whatsapp_number: String,
    proof_file: Option<ProofFile>,
    state: SubmissionState,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            has_student_id: true,
            student_id: String::new(),
            study_program: String::new(),
            email: String::new(),
            whatsapp_number: String::new(),
            proof_file: None,
            state: SubmissionState::Editing,
        }
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn has_student_id(&self) -> bool {
        self.has_student_id
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn study_program(&self) -> &str {
        &self.study_program
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn whatsapp_number(&self) -> &str {
        &self.whatsapp_number
    }

    pub fn proof_file(&self) -> Option<&ProofFile> {
        self.proof_file.as_ref()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Overwrite a text field. Setting the NIM re-derives the study program
    /// while the NIM is the active identity field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::StudentId => {
                self.student_id = value;
                if self.has_student_id {
                    self.study_program = derive_study_program(&self.student_id)
                        .unwrap_or_default()
                        .to_string();
                }
            }
            Field::StudyProgram => self.study_program = value,
            Field::Email => self.email = value,
            Field::WhatsappNumber => self.whatsapp_number = value,
        }
    }

    /// Switch the active identity field. The inactive one keeps its value.
    pub fn set_has_student_id(&mut self, has_student_id: bool) {
        self.has_student_id = has_student_id;
    }

    pub fn set_proof_file(&mut self, file: ProofFile) -> Result<(), UnsupportedFileType> {
        if !file.has_allowed_type() {
            return Err(UnsupportedFileType { mime_type: file.mime_type });
        }
        self.proof_file = Some(file);
        Ok(())
    }

    /// Run every submit rule without short-circuiting.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.full_name.is_empty() {
            errors.push(FieldError::FullNameRequired);
        }

        if self.has_student_id {
            if self.student_id.is_empty() {
                errors.push(FieldError::StudentIdRequired);
            } else if !is_valid_nim(&self.student_id) {
                errors.push(FieldError::StudentIdFormat);
            }
        } else if self.study_program.is_empty() {
            errors.push(FieldError::StudyProgramRequired);
        }

        if self.email.is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::EmailDomain);
        }

        if self.whatsapp_number.is_empty() {
            errors.push(FieldError::WhatsappRequired);
        } else if !is_valid_whatsapp(&self.whatsapp_number) {
            errors.push(FieldError::WhatsappFormat);
        }

        if self.proof_file.is_none() {
            errors.push(FieldError::ProofFileRequired);
        }

        if errors.is_empty() { Ok(()) } else { Err(ValidationErrors(errors)) }
    }

    /// Editing -> Submitting when every rule passes. Leaves the form untouched
    /// otherwise.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.state != SubmissionState::Editing {
            return Err(SubmitError::NotEditing(self.state));
        }
        self.validate().map_err(SubmitError::Invalid)?;
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    /// Submitting -> Succeeded. Returns the success notice, or `None` when
    /// the form was not submitting.
    pub fn complete_submission(&mut self) -> Option<Notice> {
        if self.state != SubmissionState::Submitting {
            return None;
        }
        self.state = SubmissionState::Succeeded;
        Some(Notice::success(
            "Pendaftaran berhasil!",
            "Data Anda telah berhasil dikirim. Silakan bergabung dengan grup WhatsApp untuk informasi selanjutnya.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_label_switches_units() {
        assert_eq!(ProofFile::new("a.png", "image/png", 512).size_label(), "1 KB");
        assert_eq!(ProofFile::new("a.png", "image/png", 2048).size_label(), "2 KB");
        assert_eq!(
            ProofFile::new("a.pdf", "application/pdf", 3 * 1024 * 1024 / 2).size_label(),
            "1.5 MB"
        );
    }

    #[test]
    fn new_form_defaults_to_nim_mode() {
        let form = RegistrationForm::new();
        assert!(form.has_student_id());
        assert_eq!(form.state(), SubmissionState::Editing);
        assert!(form.proof_file().is_none());
    }

    #[test]
    fn complete_outside_submitting_is_noop() {
        let mut form = RegistrationForm::new();
        assert!(form.complete_submission().is_none());
        assert_eq!(form.state(), SubmissionState::Editing);
    }
}

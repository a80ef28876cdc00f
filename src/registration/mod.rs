//! Re-registration form: field state, study-program derivation, submit
//! rules and the Editing -> Submitting -> Succeeded state machine.

pub mod form;
pub mod notice;
pub mod program;
pub mod store;
pub mod validate;

pub use form::{
    ALLOWED_PROOF_TYPES, Field, FieldError, ProofFile, RegistrationForm, SubmissionState,
    SubmitError, UnsupportedFileType, ValidationErrors,
};
pub use notice::{Notice, NoticeKind};
pub use program::{StudyProgram, derive_study_program};
pub use store::{FormStore, schedule_completion};

use serde::Serialize;

/// Study program shown when the NIM starts with `TI`.
pub const DERIVED_INFORMATICS: &str = "Teknik Informatika";
/// Study program shown when the NIM starts with `DS`.
pub const DERIVED_DATA_SCIENCE: &str = "Sains Data";

/// Minimum NIM length before the prefix lookup kicks in.
const DERIVE_MIN_LEN: usize = 5;

/// The four programs a student without a NIM can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StudyProgram {
    Pti,
    Trpl,
    Si,
    Ilkom,
}

impl StudyProgram {
    pub const ALL: [StudyProgram; 4] = [
        StudyProgram::Pti,
        StudyProgram::Trpl,
        StudyProgram::Si,
        StudyProgram::Ilkom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StudyProgram::Pti => "Pendidikan Teknik Informatika",
            StudyProgram::Trpl => "Teknologi Rekayasa Perangkat Lunak",
            StudyProgram::Si => "Sistem Informasi",
            StudyProgram::Ilkom => "Ilmu Komputer",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StudyProgram::Pti => "PTI",
            StudyProgram::Trpl => "TRPL",
            StudyProgram::Si => "SI",
            StudyProgram::Ilkom => "ILKOM",
        }
    }

    /// Invite link of the program's WhatsApp group.
    pub fn whatsapp_group(&self) -> &'static str {
        match self {
            StudyProgram::Pti => "https://chat.whatsapp.com/CewliiAn2wiKQwBrF5x2ZL",
            StudyProgram::Trpl => "https://chat.whatsapp.com/HhoSdOX6tAa4MnQLdn3o45",
            StudyProgram::Si => "https://chat.whatsapp.com/KHiuIGfooXeI9zjqZJ3Mvv",
            StudyProgram::Ilkom => "https://chat.whatsapp.com/K1wgWvJi24i2Mzi2xOSTnj",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// Map a NIM to the study program it implies.
///
/// Returns `None` when the NIM is shorter than five characters or its
/// two-character prefix is unknown; callers clear the program in that case.
pub fn derive_study_program(student_id: &str) -> Option<&'static str> {
    if student_id.chars().count() < DERIVE_MIN_LEN {
        return None;
    }
    if student_id.starts_with("TI") {
        Some(DERIVED_INFORMATICS)
    } else if student_id.starts_with("DS") {
        Some(DERIVED_DATA_SCIENCE)
    } else {
        None
    }
}

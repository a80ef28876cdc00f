use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-visible toast: a title, an optional description and an optional
/// itemized list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<String>,
}

impl Notice {
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: Some(description.into()),
            items: Vec::new(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: Some(description.into()),
            items: Vec::new(),
        }
    }

    /// Collapse a list of messages into one notice: singular phrasing for a
    /// single message, a counted title plus item list otherwise.
    pub fn from_errors(mut messages: Vec<String>) -> Self {
        if messages.len() == 1 {
            let only = messages.remove(0);
            return Self::error("Kesalahan Input Data", only);
        }
        Self {
            kind: NoticeKind::Error,
            title: format!("Ditemukan {} Kesalahan Input Data", messages.len()),
            description: None,
            items: messages,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

// Template context structures for Askama templates, organized by page group.

use actix_session::Session;
use chrono::Datelike;

use crate::config::AppConfig;
use crate::models::content::{self, Link};
use crate::registration::Notice;
use crate::session::csrf;

/// Common context shared by every page.
/// Templates access these as `ctx.app_name`, `ctx.notice`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub notice: Option<Notice>,
    pub year: i32,
    pub quick_links: &'static [Link],
    pub social_links: &'static [Link],
    pub contact_email: &'static str,
    pub contact_address: &'static str,
    pub organization: &'static str,
    pub credits: &'static str,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
            notice: None,
            year: chrono::Local::now().year(),
            quick_links: content::QUICK_LINKS,
            social_links: content::SOCIAL_LINKS,
            contact_email: content::CONTACT_EMAIL,
            contact_address: content::CONTACT_ADDRESS,
            organization: content::ORGANIZATION,
            credits: content::CREDITS,
        }
    }

    /// Attach a notice to be shown as a toast on this page.
    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }
}

mod api;
mod common;
mod registration;

pub use self::api::{ApiErrorResponse, ApiRegistrationResponse};
pub use self::common::{ClosedTemplate, HomeTemplate, NotFoundTemplate};
pub use self::registration::{
    FallbackTemplate, RegistrationFormTemplate, SubmittingTemplate, SuccessTemplate,
};

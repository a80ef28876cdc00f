use askama::Template;

use crate::models::content::{self, Faq, Goal};
use super::PageContext;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub goals: &'static [Goal],
    pub faqs: &'static [Faq],
}

impl HomeTemplate {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            tagline: content::TAGLINE,
            intro: content::INTRO,
            goals: content::GOALS,
            faqs: content::FAQS,
        }
    }
}

/// Landing page while the registration window is closed.
#[derive(Template)]
#[template(path = "closed.html")]
pub struct ClosedTemplate {
    pub ctx: PageContext,
    pub subtitle: &'static str,
}

impl ClosedTemplate {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx, subtitle: content::SUBTITLE }
    }
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

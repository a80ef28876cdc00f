use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::errors::{AppError, render, render_not_found};
use crate::templates_structs::{ClosedTemplate, HomeTemplate, NotFoundTemplate, PageContext};

/// Landing page, or the "not yet open" page outside the registration window.
pub async fn index(
    session: Session,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config);
    if config.registration_open {
        render(HomeTemplate::new(ctx))
    } else {
        render(ClosedTemplate::new(ctx))
    }
}

pub async fn not_found(
    session: Session,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config);
    render_not_found(NotFoundTemplate { ctx })
}

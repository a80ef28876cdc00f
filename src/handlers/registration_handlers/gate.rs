use actix_session::SessionExt;
use actix_web::{
    Error, web,
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use crate::config::AppConfig;
use crate::errors::render;
use crate::templates_structs::{FallbackTemplate, PageContext};

/// Middleware that answers every registration route with the fallback page
/// while the registration window is closed. The form store is never touched.
pub async fn require_registration_open<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let Some(config) = req.app_data::<web::Data<AppConfig>>().cloned() else {
        log::error!("AppConfig missing from app data, treating registration as closed");
        return closed(req, &AppConfig { registration_open: false, ..AppConfig::default() });
    };

    if !config.registration_open {
        return closed(req, &config);
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

fn closed<B>(
    req: ServiceRequest,
    config: &AppConfig,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let session = req.get_session();
    let ctx = PageContext::build(&session, config);
    let response = render(FallbackTemplate { ctx })?;
    Ok(req.into_response(response).map_into_right_body())
}

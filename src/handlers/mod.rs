pub mod api_v1;
pub mod home_handlers;
pub mod registration_handlers;

use actix_web::web;

/// Register every page and API route. The 404 fallback is attached to the
/// `App` by the caller via `default_service(web::to(home_handlers::not_found))`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home_handlers::index));
    cfg.service(web::scope("/api/v1").configure(api_v1::configure));
    registration_handlers::configure(cfg);
}

pub(crate) fn see_other(location: &str) -> actix_web::HttpResponse {
    actix_web::HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::registration::{FormStore, RegistrationForm};
use crate::session::visit;
use crate::templates_structs::{ApiErrorResponse, ApiRegistrationResponse};

/// GET /api/v1/registration: the caller's form as JSON.
pub async fn read(
    session: Session,
    config: web::Data<AppConfig>,
    store: web::Data<FormStore>,
) -> HttpResponse {
    if !config.registration_open {
        return HttpResponse::NotFound().json(ApiErrorResponse {
            error: "Registration is closed".to_string(),
        });
    }

    // No visit yet: report what a fresh form would look like without creating one.
    let form = match visit::get_visit(&session) {
        Some(visit_id) => store.peek(&visit_id),
        None => RegistrationForm::new(),
    };
    HttpResponse::Ok().json(ApiRegistrationResponse::from(&form))
}

//! Shared test infrastructure.
//!
//! - `valid_form()` - a form that passes every submit rule
//! - `test_config()` - config with a short submission delay
//! - `test_app!` - an initialised service with sessions, config and store
//! - `MultipartBody` - hand-built multipart/form-data bodies
#![allow(dead_code, unused_macros)]

use std::time::Duration;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use regex::Regex;

use sirena::config::AppConfig;
use sirena::registration::{Field, ProofFile, RegistrationForm};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const VALID_NAME: &str = "Ni Luh Putu Ayu";
pub const VALID_NIM: &str = "1305123045";
pub const VALID_EMAIL: &str = "ayu@student.undiksha.ac.id";
pub const VALID_WHATSAPP: &str = "081234567890";
pub const SUBMIT_DELAY_MS: u64 = 50;
pub const SESSION_COOKIE: &str = "id";

// ============================================================================
// FORM SETUP
// ============================================================================

pub fn pdf_proof() -> ProofFile {
    ProofFile::new("bukti.pdf", "application/pdf", 120_000)
}

/// A form in NIM mode that passes every submit rule.
pub fn valid_form() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.set_field(Field::FullName, VALID_NAME);
    form.set_field(Field::StudentId, VALID_NIM);
    form.set_field(Field::Email, VALID_EMAIL);
    form.set_field(Field::WhatsappNumber, VALID_WHATSAPP);
    form.set_proof_file(pdf_proof()).expect("pdf is an allowed type");
    form
}

// ============================================================================
// HTTP SETUP
// ============================================================================

pub fn test_config(registration_open: bool) -> AppConfig {
    AppConfig {
        registration_open,
        submit_delay: Duration::from_millis(SUBMIT_DELAY_MS),
        ..AppConfig::default()
    }
}

/// Build an initialised test service around the real routes.
macro_rules! test_app {
    ($config:expr, $store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(sirena::session::session_middleware(
                    actix_web::cookie::Key::generate(),
                ))
                .app_data(actix_web::web::Data::new($config))
                .app_data(actix_web::web::Data::new($store))
                .configure(sirena::handlers::configure)
                .default_service(actix_web::web::to(
                    sirena::handlers::home_handlers::not_found,
                )),
        )
        .await
    };
}

/// The session cookie set by a response, if any.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

/// Extract the CSRF token from a rendered form.
pub fn extract_csrf(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("CSRF token in page")
}

// ============================================================================
// MULTIPART BODIES
// ============================================================================

pub const BOUNDARY: &str = "sirena-test-boundary";

pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.bytes.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.bytes
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }
}

/// Every field of a valid NIM-mode registration, proof included.
pub fn valid_body(csrf: &str) -> MultipartBody {
    MultipartBody::new()
        .text("csrf_token", csrf)
        .text("full_name", VALID_NAME)
        .text("has_student_id", "true")
        .text("student_id", VALID_NIM)
        .text("study_program", "")
        .text("email", VALID_EMAIL)
        .text("whatsapp_number", VALID_WHATSAPP)
        .file("proof_file", "bukti.pdf", "application/pdf", b"%PDF-1.4 test")
}

// ============================================================================
// REQUESTS
// ============================================================================

pub fn get(path: &str, cookie: Option<&Cookie<'static>>) -> actix_web::test::TestRequest {
    let req = actix_web::test::TestRequest::get().uri(path);
    match cookie {
        Some(c) => req.cookie(c.clone()),
        None => req,
    }
}

pub fn post_multipart(
    path: &str,
    cookie: &Cookie<'static>,
    body: Vec<u8>,
) -> actix_web::test::TestRequest {
    actix_web::test::TestRequest::post()
        .uri(path)
        .cookie(cookie.clone())
        .insert_header(("content-type", MultipartBody::content_type()))
        .set_payload(body)
}

pub async fn body_string<B: actix_web::body::MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

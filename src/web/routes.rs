use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::{header, Method};
use actix_web::{web, HttpRequest, HttpResponse};
use log::warn;

use crate::web::handlers;
use crate::web::models::{ErrorResponse, MESSAGE_REQUIRED};

/// Frontends allowed to call the `/api` scope.
pub const API_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Largest chat body accepted, well above what a completion call can use.
pub const CHAT_BODY_LIMIT: usize = 32 * 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .wrap(api_cors())
            .service(
                web::resource("/chat")
                    .route(web::post().to(handlers::chat))
                    .route(web::method(Method::OPTIONS).to(handlers::chat_preflight)),
            ),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(handlers::health_check))
            .wrap(health_cors()),
    );
}

// Preflight is answered by `handlers::chat_preflight`, so the middleware
// only validates origins and decorates actual responses.
fn api_cors() -> Cors {
    API_ORIGINS
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .disable_preflight()
}

fn health_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET"])
}

// Every body that does not yield a `ChatRequest` gets the same 400
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(CHAT_BODY_LIMIT)
        .error_handler(reject_chat_body)
}

fn reject_chat_body(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected chat body: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(MESSAGE_REQUIRED));
    InternalError::from_response(err, response).into()
}

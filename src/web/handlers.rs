use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;

use crate::config;
use crate::web::models::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse, MESSAGE_REQUIRED};
use crate::AppState;

/// Origin echoed on chat responses and preflight acknowledgements.
pub const DEV_ORIGIN: &str = "http://localhost:3000";

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        message: "Flask server is running".to_string(),
        port: config::PORT,
    })
}

// Browser preflight for the chat endpoint
pub async fn chat_preflight() -> impl Responder {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, DEV_ORIGIN))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST"))
        .json(json!({ "status": "ok" }))
}

// Chat API endpoint
pub async fn chat(data: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    if req.message.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(MESSAGE_REQUIRED));
    }

    info!("Chat request: {} characters", req.message.len());

    match data.model.generate_response(&req.message).await {
        Ok(response) => HttpResponse::Ok()
            .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, DEV_ORIGIN))
            .json(ChatResponse { response }),
        Err(e) => {
            error!("Error: {}", e);
            HttpResponse::InternalServerError()
                .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, DEV_ORIGIN))
                .json(ErrorResponse::new(e.to_string()))
        }
    }
}

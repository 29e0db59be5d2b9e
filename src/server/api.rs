use crate::agent::PartyAgent;
use crate::cli::Args;
use crate::error::{ ChatError, InvitationError };
use crate::models::chat::ChatMessage;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    extract::{ rejection::JsonRejection, State },
    response::{ IntoResponse, Response },
    http::StatusCode,
    Json,
};
use serde::{ Deserialize, Serialize };
use serde_json::json;
use thiserror::Error as ThisError;
use tower_http::cors::{ Any, CorsLayer };
use log::{ debug, info, error };

#[derive(Deserialize)]
pub struct MessagesRequest {
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("No messages provided")]
    MissingMessages,
    #[error(transparent)] Chat(#[from] ChatError),
    #[error(transparent)] Invitation(#[from] InvitationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingMessages =>
                (StatusCode::BAD_REQUEST, json!({ "error": "No messages provided" })),
            ApiError::Chat(e) => {
                error!("[/api/chat] Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to get chat response",
                        "message": "There was an error processing your request. Please try again later."
                    }),
                )
            }
            ApiError::Invitation(e) => {
                error!("[/api/generate-invitation] Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to generate invitation",
                        "message": "There was an error processing your invitation. Please try again later."
                    }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Clone)]
struct AppState {
    agent: Arc<PartyAgent>,
}

/// A body that is not JSON counts as an empty request, so it gets the same
/// 400 as a request without `messages`.
fn require_messages(
    req: Result<Json<MessagesRequest>, JsonRejection>
) -> Result<Vec<ChatMessage>, ApiError> {
    let req = req.map_err(|rejection| {
        debug!("Rejected request body: {}", rejection);
        ApiError::MissingMessages
    })?;
    match req.0.messages {
        Some(messages) if !messages.is_empty() => Ok(messages),
        _ => Err(ApiError::MissingMessages),
    }
}

pub fn router(agent: Arc<PartyAgent>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/generate-invitation", post(invitation_handler))
        .layer(cors)
        .with_state(AppState { agent })
}

pub async fn start_http_server(
    addr: &str,
    agent: Arc<PartyAgent>,
    args: &Args
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    let app = router(agent);

    if args.enable_tls {
        let (cert_path, key_path) = match (&args.tls_cert_path, &args.tls_key_path) {
            (Some(cert), Some(key)) => (cert, key),
            _ => {
                error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
                return Err("TLS enabled without cert/key".into());
            }
        };
        // Another provider may already be installed; either way one is available.
        let _ = rustls::crypto::ring::default_provider().install_default();
        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        info!("Starting HTTPS API server on: https://{}", addr);
        axum_server::bind_rustls(addr, tls_config).serve(app.into_make_service()).await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e);
            e
        })?;
        info!("Starting HTTP API server on: http://{}", addr);
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "online" })
}

async fn chat_handler(
    State(state): State<AppState>,
    req: Result<Json<MessagesRequest>, JsonRejection>
) -> Result<Response, ApiError> {
    let messages = require_messages(req)?;
    let result = state.agent.chat(&messages).await?;
    Ok(Json(result).into_response())
}

async fn invitation_handler(
    State(state): State<AppState>,
    req: Result<Json<MessagesRequest>, JsonRejection>
) -> Result<Response, ApiError> {
    let messages = require_messages(req)?;
    let invitation = state.agent.generate_invitation(&messages).await?;
    Ok(Json(invitation).into_response())
}

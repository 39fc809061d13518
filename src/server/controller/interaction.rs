use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::server::{
    error::AppError, middleware::signature::SignatureGuard,
    service::interaction::InteractionService, state::AppState,
};

/// Interaction webhook Discord posts every interaction to.
///
/// The body is taken as raw bytes so the signature is checked over exactly
/// what Discord sent.
pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    SignatureGuard::new(&state.config.discord_public_key).require(&headers, &body)?;

    let interaction_service = InteractionService::new(&state);

    let response = interaction_service.dispatch(&body).await?;

    Ok((StatusCode::OK, Json(response)))
}

use crate::api::AppState;
use crate::api::schemas::outbound::SendEmailRequest;
use crate::error::{ErrorKind, SendError};
use axum::{Json, body::Bytes, extract::State, response::IntoResponse};

/// The SendEmail operation.
///
/// Decodes the wire payload, defers the outcome to the active handler, and
/// encodes whatever comes back. Undecodable payloads fail closed before the
/// handler runs.
///
/// # Errors
/// Returns the `BadRequest` kind if the payload does not deserialize;
/// otherwise exactly the typed error the handler signalled.
pub async fn send_email(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, SendError> {
    let request: SendEmailRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting undecodable send request");
        SendError::with_message(ErrorKind::BadRequest, format!("invalid request payload: {e}"))
    })?;

    let response = state.handler.handle(request).await?;
    Ok(Json(response))
}

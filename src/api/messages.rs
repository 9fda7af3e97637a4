use crate::api::AppState;
use crate::api::schemas::messages::{
    GetMessageResponse, InspectionError, ListMessagesResponse, MessageSummary,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Lists a summary of every stored message, oldest first.
pub async fn list_messages(State(state): State<AppState>) -> impl IntoResponse {
    let messages = state.store.list_all().await;
    let summaries = messages.iter().map(MessageSummary::from).collect();
    Json(ListMessagesResponse { messages: summaries })
}

/// Full view of a single stored message.
pub async fn get_message(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get(&id).await {
        Some(message) => Json(GetMessageResponse::from(&message)).into_response(),
        None => {
            let message = format!("message not found (id = {id})");
            tracing::debug!("{message}");
            (StatusCode::NOT_FOUND, Json(InspectionError { message })).into_response()
        }
    }
}

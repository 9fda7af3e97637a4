use crate::api::schemas::outbound::{SendEmailRequest, SendEmailResponse};
use crate::domain::Message;
use crate::error::SendError;
use crate::storage::MessageStore;
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

/// Decides the outcome of a send request.
///
/// Exactly one handler is active per server instance, injected before
/// serving starts. The gateway passes the decoded request through untouched
/// and trusts the returned classification. A handler that signals an error
/// must leave the store untouched.
#[async_trait]
pub trait SendEmailHandler: Send + Sync {
    async fn handle(&self, request: SendEmailRequest) -> Result<SendEmailResponse, SendError>;
}

/// Lets hosting tests inject outcome logic as a plain closure.
#[async_trait]
impl<F> SendEmailHandler for F
where
    F: Fn(SendEmailRequest) -> Result<SendEmailResponse, SendError> + Send + Sync,
{
    async fn handle(&self, request: SendEmailRequest) -> Result<SendEmailResponse, SendError> {
        self(request)
    }
}

/// Default handler: accepts every request and records it in the store.
#[derive(Debug, Clone)]
pub struct StoreBackedHandler {
    store: MessageStore,
}

impl StoreBackedHandler {
    #[must_use]
    pub const fn new(store: MessageStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SendEmailHandler for StoreBackedHandler {
    async fn handle(&self, request: SendEmailRequest) -> Result<SendEmailResponse, SendError> {
        let message_id = Uuid::new_v4().to_string();
        let message = Message::from_request(&message_id, &request, OffsetDateTime::now_utc());
        self.store.insert(&message_id, message).await;
        tracing::debug!(%message_id, from = %request.from_email_address, "message accepted");
        Ok(SendEmailResponse { message_id })
    }
}

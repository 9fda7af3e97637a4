use crate::domain::Message;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store of accepted sends, keyed by message id.
///
/// Reads run concurrently; writes take the lock exclusively. Listing is a
/// single consistent snapshot taken under the read guard. Nothing is ever
/// evicted and nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Arc<RwLock<HashMap<String, Message>>>,
}

impl MessageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a message, replacing any previous entry under the same id.
    pub async fn insert(&self, id: impl Into<String>, message: Message) {
        self.messages.write().await.insert(id.into(), message);
    }

    /// Point lookup by message id.
    pub async fn get(&self, id: &str) -> Option<Message> {
        self.messages.read().await.get(id).cloned()
    }

    /// All stored messages, ascending by received time.
    pub async fn list_all(&self) -> Vec<Message> {
        let mut messages: Vec<Message> = self.messages.read().await.values().cloned().collect();
        messages.sort_by_key(|message| message.received_at);
        messages
    }

    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }
}

//! Response types for the message inspection endpoints.

use crate::domain::Message;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    pub messages: Vec<MessageSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSummary {
    pub message_id: String,
    pub from: String,
    pub subject: String,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

impl From<&Message> for MessageSummary {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.id.clone(),
            from: message.from.clone(),
            subject: message.subject.clone(),
            received_at: message.received_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMessageResponse {
    pub message_id: String,
    pub from: String,
    pub reply_to: Vec<String>,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

impl From<&Message> for GetMessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.id.clone(),
            from: message.from.clone(),
            reply_to: message.reply_to.clone(),
            to: message.to.clone(),
            cc: message.cc.clone(),
            bcc: message.bcc.clone(),
            subject: message.subject.clone(),
            body: message.body().to_owned(),
            received_at: message.received_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionError {
    pub message: String,
}

use crate::api::schemas::outbound::SendEmailRequest;
use time::OffsetDateTime;

/// The record of an accepted send.
///
/// Created once by the handler that accepted the request and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub from: String,
    pub reply_to: Vec<String>,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub body_html: String,
    pub body_text: String,
    pub received_at: OffsetDateTime,
}

impl Message {
    /// Projects the simple-content fields of a wire request into a message.
    #[must_use]
    pub fn from_request(id: impl Into<String>, request: &SendEmailRequest, received_at: OffsetDateTime) -> Self {
        Self {
            id: id.into(),
            from: request.from_email_address.clone(),
            reply_to: request.reply_to_addresses.clone(),
            to: request.destination.to_addresses.clone(),
            cc: request.destination.cc_addresses.clone(),
            bcc: request.destination.bcc_addresses.clone(),
            subject: request.content.simple.subject.data.clone(),
            body_html: request.content.simple.body.html.data.clone(),
            body_text: request.content.simple.body.text.data.clone(),
            received_at,
        }
    }

    /// The single body value exposed to readers: HTML when present,
    /// otherwise the text variant.
    #[must_use]
    pub fn body(&self) -> &str {
        if self.body_html.is_empty() { &self.body_text } else { &self.body_html }
    }
}

//! Wire types for the SendEmail operation.
//!
//! Field names and nesting mirror the real service's JSON contract. Every
//! field is defaultable so that any subset of fields deserializes; absent
//! and empty values are treated alike, as the real service does.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendEmailRequest {
    pub configuration_set_name: String,
    pub content: EmailContent,
    pub destination: Destination,
    pub email_tags: Vec<MessageTag>,
    pub feedback_forwarding_email_address: String,
    pub feedback_forwarding_email_address_identity_arn: String,
    pub from_email_address: String,
    pub from_email_address_identity_arn: String,
    pub list_management_options: ListManagementOptions,
    pub reply_to_addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmailContent {
    pub raw: RawMessage,
    pub simple: SimpleMessage,
    pub template: Template,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RawMessage {
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SimpleMessage {
    pub body: EmailBody,
    pub subject: Content,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmailBody {
    pub html: Content,
    pub text: Content,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Content {
    pub charset: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Template {
    pub template_arn: String,
    pub template_data: String,
    pub template_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Destination {
    pub to_addresses: Vec<String>,
    pub cc_addresses: Vec<String>,
    pub bcc_addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MessageTag {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListManagementOptions {
    pub contact_list_name: String,
    pub topic_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendEmailResponse {
    pub message_id: String,
}

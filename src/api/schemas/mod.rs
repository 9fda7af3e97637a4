pub mod messages;
pub mod outbound;

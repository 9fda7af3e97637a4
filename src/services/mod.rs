pub mod outbound;

pub use outbound::{SendEmailHandler, StoreBackedHandler};

//! Inbound Event Endpoint
//!
//! Receives signed platform event deliveries on `POST /events`.

mod handlers;
mod types;

pub use handlers::receive_event;
pub use types::EventError;

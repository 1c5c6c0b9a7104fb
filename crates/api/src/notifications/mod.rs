//! Outbound notifications.
//!
//! The only channel today is SMTP email, used to tell a leader their
//! project was created. The delivery service is an opaque
//! "send to address / subject / body" capability; message content is
//! composed next to the operation that triggers it.

pub mod email;

pub use email::{EmailConfig, EmailDelivery, EmailError};

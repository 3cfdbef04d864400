//! Custom Yew hooks for the frontend application.
//!
//! These hooks encapsulate reusable state logic to keep components clean and focused.

mod use_session;
mod use_session_gate;

pub use use_session::{use_session, use_session_context};
pub use use_session_gate::use_session_gate;

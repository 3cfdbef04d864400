//! Session-gated view logic shared by the frontend and its tests.
//!
//! Nothing in here touches the browser: the frontend plugs its HTTP poller
//! and router into the [`SessionProvider`] and [`Router`] traits.

// Session data model
pub mod session;
pub use session::{AuthStatus, PersonalInfo, Session, SessionSnapshot, SessionUser};

// Default-filled projection for display
pub mod display;
pub use display::DisplayModel;

// Provider/router capabilities and the in-process store
pub mod provider;
pub use provider::{Router, SessionProvider, SessionStore, Subscription};

// The gate state machine
pub mod gate;
pub use gate::{decide, GateEffect, GateState, MountedGate, RenderDecision, SessionGate};

// Session endpoint parsing and errors
pub mod api;
pub use api::{parse_session_response, ApiError};

pub mod config;
pub use config::SessionConfig;

pub mod sequence;
pub use sequence::{Sequencer, Ticket};

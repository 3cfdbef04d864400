mod session_root;

pub use session_root::{SessionContext, SessionRoot};

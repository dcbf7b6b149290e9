//! Session coordination.
//!
//! The session manager owns the observable authentication state consumed
//! by navigation, and is the single place that translates auth-expired
//! failures into cleared local state.

mod manager;

pub use manager::{SessionError, SessionManager, SessionPolicy};

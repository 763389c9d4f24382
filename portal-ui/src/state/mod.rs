//! State Management
//!
//! Session context and the backend entity types.

pub mod models;
pub mod session;

pub use session::{provide_session_state, SessionState};

//! State Management
//!
//! Session and notification contexts shared across the app.

pub mod auth;
pub mod toast;

pub use auth::{provide_auth_state, use_auth, AuthState, User, UserPatch};
pub use toast::{provide_toast_state, use_toast, ToastState};

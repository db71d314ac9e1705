//! Client-side session for the TalentGenius recruitment prototype.
//!
//! Decides who is signed in, which role they hold (HR or candidate), keeps that
//! identity in a key-value store, and tells a router and a toast sink what happened.

pub mod config;
pub mod errors;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod store;

pub use errors::{Result, SessionError};
pub use models::{Identity, Role};
pub use navigation::{GuardDecision, Navigator, Route};
pub use notify::{Notification, NotificationSink, Severity};
pub use session::{SessionModel, SessionState};
pub use store::SessionStore;

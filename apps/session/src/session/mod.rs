// Session core: role heuristic, validation, placeholder tokens, the identity
// provider seam, and the owning `SessionModel`.

pub mod classify;
pub mod model;
pub mod provider;
pub mod token;
pub mod validation;

pub use classify::{classify_role, PERSONAL_DOMAINS};
pub use model::{SessionBuilder, SessionModel, SessionState, Signup, DEFAULT_STORAGE_KEY};
pub use provider::{IdentityProvider, Registration, SimulatedIdentityProvider};
pub use validation::{
    validate_email, validate_login_form, validate_signup_form, EmailCheck, FieldError, LoginForm,
    SignupForm,
};

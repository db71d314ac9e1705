use serde::{Deserialize, Serialize};

use crate::models::Role;
use crate::session::classify::classify_role;

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const HR_REQUIRES_COMPANY_EMAIL: &str = "HR professionals must use a company email";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailCheck {
    pub valid: bool,
    pub message: Option<String>,
}

impl EmailCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: Some(message.to_string()),
        }
    }
}

/// Structural email check.
///
/// PASS conditions:
/// - Contains `@`
/// - When `for_role` is `Hr`, the domain is not a personal webmail domain
pub fn validate_email(email: &str, for_role: Option<Role>) -> EmailCheck {
    if !email.contains('@') {
        return EmailCheck::fail(INVALID_EMAIL);
    }
    if for_role == Some(Role::Hr) && classify_role(email) != Role::Hr {
        return EmailCheck::fail(HR_REQUIRES_COMPANY_EMAIL);
    }
    EmailCheck::ok()
}

/// The fields of the log-in form, as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// The fields of the sign-up form, as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn field_error(field: &str, message: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Form-level rules for log-in, collecting every failure.
///
/// The session ignores the password on login; only the form insists on a length.
pub fn validate_login_form(form: &LoginForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !form.email.contains('@') {
        errors.push(field_error("email", INVALID_EMAIL));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(field_error("password", PASSWORD_TOO_SHORT));
    }

    errors
}

/// Form-level rules for sign-up, collecting every failure.
///
/// These are stricter than the session itself: the session only insists on
/// an `@`, the HR domain rule and matching confirmation.
pub fn validate_signup_form(form: &SignupForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !form.email.contains('@') {
        errors.push(field_error("email", INVALID_EMAIL));
    }
    if form.name.trim().chars().count() < MIN_NAME_LEN {
        errors.push(field_error("name", "Name must be at least 2 characters"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(field_error("password", PASSWORD_TOO_SHORT));
    }
    if form.password != form.confirm_password {
        errors.push(field_error("confirm_password", PASSWORDS_DO_NOT_MATCH));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, name: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_not_an_email_is_invalid() {
        let r = validate_email("not-an-email", None);
        assert!(!r.valid);
        assert_eq!(r.message.as_deref(), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_personal_email_valid_without_role() {
        assert!(validate_email("jane@gmail.com", None).valid);
    }

    #[test]
    fn test_personal_email_valid_for_candidate() {
        assert!(validate_email("jane@gmail.com", Some(Role::Candidate)).valid);
    }

    #[test]
    fn test_personal_email_invalid_for_hr() {
        let r = validate_email("jane@yahoo.com", Some(Role::Hr));
        assert!(!r.valid);
        assert_eq!(r.message.as_deref(), Some(HR_REQUIRES_COMPANY_EMAIL));
    }

    #[test]
    fn test_company_email_valid_for_hr() {
        let r = validate_email("jane@acme.com", Some(Role::Hr));
        assert!(r.valid);
        assert!(r.message.is_none());
    }

    #[test]
    fn test_missing_at_reported_before_role_rule() {
        let r = validate_email("acme.com", Some(Role::Hr));
        assert_eq!(r.message.as_deref(), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_login_form_all_good() {
        let form = LoginForm {
            email: "jane@gmail.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(validate_login_form(&form).is_empty());
    }

    #[test]
    fn test_login_form_short_password() {
        let form = LoginForm {
            email: "jane@gmail.com".to_string(),
            password: "x".to_string(),
        };
        let errors = validate_login_form(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
        assert_eq!(errors[0].message, PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_login_form_collects_everything() {
        let errors = validate_login_form(&LoginForm::default());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn test_signup_form_all_good() {
        assert!(validate_signup_form(&form("jane@acme.com", "Jane", "secret1", "secret1")).is_empty());
    }

    #[test]
    fn test_signup_form_short_name() {
        let errors = validate_signup_form(&form("jane@acme.com", "J", "secret1", "secret1"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_signup_form_short_password() {
        let errors = validate_signup_form(&form("jane@acme.com", "Jane", "abc", "abc"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn test_signup_form_mismatch() {
        let errors = validate_signup_form(&form("jane@acme.com", "Jane", "secret1", "secret2"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, PASSWORDS_DO_NOT_MATCH);
    }

    #[test]
    fn test_signup_form_collects_everything() {
        let errors = validate_signup_form(&form("nope", "", "x", "y"));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "name", "password", "confirm_password"]);
    }
}

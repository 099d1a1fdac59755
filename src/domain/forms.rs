//! Login and registration form rules.
//!
//! A field counts as filled when it is a non-empty string. Whitespace is
//! kept as typed. The presence check always runs first, so an incomplete
//! registration reports missing fields even when the passwords differ.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::config::{
    EMAIL_PATTERN, INVALID_EMAIL_MESSAGE, LOGIN_SUCCESS_MESSAGE, MISSING_FIELDS_MESSAGE,
    PASSWORD_MISMATCH_MESSAGE, REGISTER_SUCCESS_MESSAGE, REQUIRED_FIELD_CODE,
};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Why a submitted form was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl FormError {
    /// Stable error code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            FormError::MissingFields => "MISSING_FIELDS",
            FormError::PasswordMismatch => "PASSWORD_MISMATCH",
            FormError::InvalidEmail => "INVALID_EMAIL",
        }
    }

    /// User-facing notification text
    pub fn message(&self) -> &'static str {
        match self {
            FormError::MissingFields => MISSING_FIELDS_MESSAGE,
            FormError::PasswordMismatch => PASSWORD_MISMATCH_MESSAGE,
            FormError::InvalidEmail => INVALID_EMAIL_MESSAGE,
        }
    }
}

/// Notification for an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoginAccepted,
    RegistrationAccepted,
}

impl Notice {
    /// User-facing notification text
    pub fn message(&self) -> &'static str {
        match self {
            Notice::LoginAccepted => LOGIN_SUCCESS_MESSAGE,
            Notice::RegistrationAccepted => REGISTER_SUCCESS_MESSAGE,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Extra checks layered on top of the presence rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormPolicy {
    /// Reject emails that do not look like `local@domain.tld`
    pub strict_email: bool,
}

impl FormPolicy {
    pub fn strict() -> Self {
        Self { strict_email: true }
    }

    fn check_email(&self, email: &str) -> Result<(), FormError> {
        if self.strict_email && !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// Check an address against the accepted email shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Login form submission
#[derive(Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "a@b.com")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "x")]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Run the login rules and return the notification to show.
    pub fn check(&self, policy: FormPolicy) -> Result<Notice, FormError> {
        require_all(self)?;
        policy.check_email(&self.email)?;
        Ok(Notice::LoginAccepted)
    }
}

/// Registration form submission
#[derive(Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegistrationForm {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "bob")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "b@x.com")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "p1")]
    pub password: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        alias = "confirmPassword",
        alias = "confirm-password"
    )]
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "p1")]
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Run the registration rules and return the notification to show.
    pub fn check(&self, policy: FormPolicy) -> Result<Notice, FormError> {
        require_all(self)?;
        policy.check_email(&self.email)?;
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(Notice::RegistrationAccepted)
    }
}

// Keep credentials out of logs and panics.
impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Treat an explicit `null` like an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn require_all<T: Validate>(form: &T) -> Result<(), FormError> {
    form.validate().map_err(|errors| {
        tracing::debug!(fields = ?missing_fields(&errors), "form has empty fields");
        FormError::MissingFields
    })
}

/// Names of the fields that failed the presence rule, sorted.
fn missing_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .filter(|(_, errs)| errs.iter().any(|e| e.code == REQUIRED_FIELD_CODE))
        .map(|(field, _)| field.to_string())
        .collect();
    fields.sort_unstable();
    fields
}

//! Form submission service - Login and registration form handling.
//!
//! Submissions are checked and answered with a notification. Nothing is
//! stored and no credentials are verified.

use crate::domain::{FormPolicy, LoginForm, Notice, RegistrationForm};
use crate::errors::AppResult;

/// Form submission service trait for dependency injection.
pub trait FormService: Send + Sync {
    /// Check a login submission
    fn login(&self, form: &LoginForm) -> AppResult<Notice>;

    /// Check a registration submission
    fn register(&self, form: &RegistrationForm) -> AppResult<Notice>;
}

/// Concrete implementation of FormService driven by a [`FormPolicy`].
#[derive(Debug, Clone, Default)]
pub struct FormDesk {
    policy: FormPolicy,
}

impl FormDesk {
    pub fn new(policy: FormPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FormPolicy {
        self.policy
    }
}

impl FormService for FormDesk {
    fn login(&self, form: &LoginForm) -> AppResult<Notice> {
        match form.check(self.policy) {
            Ok(notice) => {
                tracing::info!("Login form accepted");
                Ok(notice)
            }
            Err(e) => {
                tracing::info!(reason = e.code(), "Login form rejected");
                Err(e.into())
            }
        }
    }

    fn register(&self, form: &RegistrationForm) -> AppResult<Notice> {
        match form.check(self.policy) {
            Ok(notice) => {
                tracing::info!("Registration form accepted");
                Ok(notice)
            }
            Err(e) => {
                tracing::info!(reason = e.code(), "Registration form rejected");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormError;
    use crate::errors::AppError;

    #[test]
    fn test_login_notice() {
        let desk = FormDesk::default();
        let notice = desk.login(&LoginForm::new("a@b.com", "x")).unwrap();
        assert_eq!(notice.message(), "Login successful! (Demo)");
    }

    #[test]
    fn test_login_rejection_is_form_error() {
        let desk = FormDesk::default();
        let err = desk.login(&LoginForm::new("", "x")).unwrap_err();
        assert!(matches!(err, AppError::Form(FormError::MissingFields)));
        assert_eq!(err.to_string(), "Please fill in all fields");
    }

    #[test]
    fn test_register_outcomes() {
        let desk = FormDesk::default();

        let ok = desk
            .register(&RegistrationForm::new("bob", "b@x.com", "p1", "p1"))
            .unwrap();
        assert_eq!(ok.message(), "Registration successful! (Demo)");

        let err = desk
            .register(&RegistrationForm::new("bob", "b@x.com", "p1", "p2"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_policy_is_applied() {
        let desk = FormDesk::new(FormPolicy::strict());
        assert!(desk.policy().strict_email);

        let err = desk
            .register(&RegistrationForm::new("bob", "bob", "p1", "p1"))
            .unwrap_err();
        assert!(matches!(err, AppError::Form(FormError::InvalidEmail)));
    }
}

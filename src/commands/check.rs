//! Check command - Runs the form rules without a server.

use crate::cli::args::{CheckArgs, CheckForm};
use crate::domain::{FormPolicy, LoginForm, RegistrationForm};
use crate::errors::AppResult;
use crate::services::{FormDesk, FormService};

/// Execute the check command.
///
/// Prints the notification either way; a rejected form is returned as an
/// error so the process exits non-zero.
pub async fn execute(args: CheckArgs) -> AppResult<()> {
    let desk = FormDesk::new(FormPolicy {
        strict_email: args.strict_email,
    });

    let outcome = submit(&desk, args.form);
    match &outcome {
        Ok(message) => println!("{}", message),
        Err(e) => println!("{}", e.user_message()),
    }

    outcome.map(|_| ())
}

fn submit(desk: &dyn FormService, form: CheckForm) -> AppResult<&'static str> {
    let notice = match form {
        CheckForm::Login { email, password } => desk.login(&LoginForm::new(email, password))?,
        CheckForm::Register {
            username,
            email,
            password,
            confirm_password,
        } => desk.register(&RegistrationForm::new(
            username,
            email,
            password,
            confirm_password,
        ))?,
    };
    Ok(notice.message())
}

use crate::domain::models::auth::AuthSession;
use crate::domain::services::stores::SessionStore;
use crate::error::AppError;
use chrono::Utc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

// There is no auth backend in this assessment context; credentials are only
// checked for shape, and the issued token is a fixed placeholder.
pub const LOGIN_TOKEN: &str = "mock-token";
const SUBMIT_DELAY: Duration = Duration::from_millis(400);

pub const ERR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERR_EMAIL_INVALID: &str = "Enter a valid email address";
pub const ERR_PASSWORD_REQUIRED: &str = "Password is required";
pub const ERR_PASSWORD_WEAK: &str = "Password must be at least 8 characters long and include uppercase, lowercase, number, and special character.";

fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn is_strong_password(password: &str) -> bool {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());
    let long_enough = password.chars().count() >= 8;

    has_lower && has_upper && has_digit && has_special && long_enough
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Debug)]
pub enum LoginOutcome {
    LoggedIn(AuthSession),
    Rejected(LoginErrors),
}

/// Login form state machine. Errors are recomputed on every change; the
/// touched flags only gate what the caller displays, never what blocks
/// submission.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub touched_email: bool,
    pub touched_password: bool,
    submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn touch_email(&mut self) {
        self.touched_email = true;
    }

    pub fn touch_password(&mut self) {
        self.touched_password = true;
    }

    pub fn errors(&self) -> LoginErrors {
        let mut errors = LoginErrors::default();

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some(ERR_EMAIL_REQUIRED);
        } else if !is_valid_email(email) {
            errors.email = Some(ERR_EMAIL_INVALID);
        }

        if self.password.is_empty() {
            errors.password = Some(ERR_PASSWORD_REQUIRED);
        } else if !is_strong_password(&self.password) {
            errors.password = Some(ERR_PASSWORD_WEAK);
        }

        errors
    }

    pub fn can_submit(&self) -> bool {
        self.errors().is_empty() && !self.submitting
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates, simulates the auth round-trip, and writes the session
    /// marker. Only the trimmed email and the placeholder token are persisted,
    /// never the password.
    pub async fn submit(&mut self, sessions: &SessionStore) -> Result<LoginOutcome, AppError> {
        self.touched_email = true;
        self.touched_password = true;

        if !self.can_submit() {
            return Ok(LoginOutcome::Rejected(self.errors()));
        }

        self.submitting = true;
        sleep(SUBMIT_DELAY).await;

        let session = AuthSession {
            token: LOGIN_TOKEN.to_string(),
            email: self.email.trim().to_string(),
            created_at: Utc::now().timestamp_millis(),
        };
        let written = sessions.set(&session);
        self.submitting = false;
        written?;

        info!("User logged in: {}", session.email);
        Ok(LoginOutcome::LoggedIn(session))
    }
}

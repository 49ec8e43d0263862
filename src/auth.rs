//! Single-user credential gate.

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Accepted,
    /// `attempts` is the failed-attempt count including this one
    Rejected { attempts: u32 },
}

/// Session state for one user. Failed attempts are counted but never lock out.
#[derive(Debug)]
pub struct AuthGate {
    user: String,
    password: String,
    current_user: Option<String>,
    failed_attempts: u32,
}

impl AuthGate {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            user: config.admin_user.clone(),
            password: config.admin_password.clone(),
            current_user: None,
            failed_attempts: 0,
        }
    }

    pub fn validate(&self, user: &str, password: &str) -> bool {
        user == self.user && password == self.password
    }

    pub fn login(&mut self, user: &str, password: &str) -> AuthOutcome {
        if self.validate(user, password) {
            self.current_user = Some(user.to_string());
            self.failed_attempts = 0;
            tracing::info!(user, "Login accepted");
            AuthOutcome::Accepted
        } else {
            self.failed_attempts += 1;
            tracing::warn!(user, attempts = self.failed_attempts, "Login rejected");
            AuthOutcome::Rejected {
                attempts: self.failed_attempts,
            }
        }
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }
}

//! Authentication provider and session lifecycle
//!
//! Login and registration go through the [`AuthProvider`] trait so callers can
//! swap the mock provider for a real one. A successful call yields a
//! [`Session`] that the caller owns and passes explicitly to whatever needs the
//! current user; [`Session::logout`] consumes it.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{GlobeError, GlobeResult};
use crate::models::{ProfileUpdate, Registration, User, UserId};

/// The signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: User,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            started_at: Utc::now(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Admin rights are granted by e-mail address only
    pub fn is_admin(&self, admin_email: &str) -> bool {
        self.user.email.eq_ignore_ascii_case(admin_email.trim())
    }

    /// End the session
    pub fn logout(self) {
        info!(email = %self.user.email, "logged out");
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> GlobeResult<Session>;

    async fn register(&self, registration: Registration) -> GlobeResult<Session>;

    /// Apply a profile edit, returning the refreshed session
    async fn update_profile(&self, session: Session, update: ProfileUpdate) -> GlobeResult<Session>;
}

/// Accepts any well-formed credentials
///
/// Known e-mail addresses resolve to their directory entry, the admin address
/// to an admin account, and anything else to a demo traveler.
#[derive(Debug, Clone)]
pub struct MockAuthProvider {
    admin_email: String,
    latency: Duration,
    directory: Vec<User>,
}

impl MockAuthProvider {
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into().trim().to_string(),
            latency: Duration::ZERO,
            directory: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.admin_email.clone()).with_latency(settings.auth_latency())
    }

    /// Simulated round-trip time applied to every call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Users that can sign in as themselves
    pub fn with_directory(mut self, users: Vec<User>) -> Self {
        self.directory = users;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn user_for(&self, email: &str) -> User {
        if let Some(user) = self
            .directory
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
        {
            return user.clone();
        }

        if email.eq_ignore_ascii_case(&self.admin_email) {
            let mut admin = User::new(email, "Admin", "User");
            admin.id = UserId::fixture(0);
            return admin;
        }

        let mut traveler = User::new(email, "John", "Traveler");
        traveler.phone = Some("+1 234 567 8900".into());
        traveler.city = Some("San Francisco".into());
        traveler.country = Some("USA".into());
        traveler
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn login(&self, email: &str, password: &str) -> GlobeResult<Session> {
        self.simulate_latency().await;

        let email = email.trim();
        if let Err(err) = validate_credentials(email, password) {
            warn!(email, "login rejected");
            return Err(err);
        }

        let session = Session::new(self.user_for(email));
        info!(email, admin = session.is_admin(&self.admin_email), "logged in");
        Ok(session)
    }

    async fn register(&self, registration: Registration) -> GlobeResult<Session> {
        self.simulate_latency().await;

        let email = registration.email.trim();
        validate_credentials(email, &registration.password)?;
        if registration.first_name.trim().is_empty() || registration.last_name.trim().is_empty() {
            return Err(GlobeError::Validation("First and last name are required".into()));
        }
        if self.directory.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(GlobeError::Auth(format!("{} is already registered", email)));
        }

        let mut user = User::new(email, registration.first_name.trim(), registration.last_name.trim());
        user.phone = registration.phone;
        user.city = registration.city;
        user.country = registration.country;
        user.additional_info = registration.additional_info;

        info!(email, "registered");
        Ok(Session::new(user))
    }

    async fn update_profile(&self, session: Session, update: ProfileUpdate) -> GlobeResult<Session> {
        self.simulate_latency().await;

        let Session { mut user, started_at } = session;
        user.apply(update);
        if user.first_name.trim().is_empty() {
            return Err(GlobeError::Validation("First name cannot be empty".into()));
        }
        Ok(Session { user, started_at })
    }
}

fn validate_credentials(email: &str, password: &str) -> GlobeResult<()> {
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'));
    if !well_formed {
        return Err(GlobeError::Auth(format!("'{}' is not a valid e-mail address", email)));
    }
    if password.is_empty() {
        return Err(GlobeError::Auth("Password is required".into()));
    }
    Ok(())
}

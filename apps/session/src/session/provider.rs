//! Identity provider — pluggable backend that turns credentials into an `Identity`.
//!
//! Default: `SimulatedIdentityProvider` (no backend: waits, then mints an identity locally).
//!
//! `SessionModel` holds a `Box<dyn IdentityProvider>`, chosen at startup.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{Identity, Role};
use crate::session::classify::{classify_role, email_local_part};
use crate::session::token::{self, TokenClaims};

/// What the session asks the provider to create at sign-up.
/// The role has already been resolved and checked by the session.
#[derive(Debug, Clone)]
pub struct Registration<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
    pub role: Role,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity>;

    async fn register(&self, registration: Registration<'_>) -> Result<Identity>;
}

/// Stands in for a backend. Ignores passwords, derives the role from the
/// email domain, and issues an unsigned token after `latency`.
#[derive(Debug, Clone)]
pub struct SimulatedIdentityProvider {
    latency: Duration,
}

impl SimulatedIdentityProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// No artificial delay. Used by tests and scripted runs.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            debug!("Simulating network latency of {:?}", self.latency);
            tokio::time::sleep(self.latency).await;
        }
    }

    fn mint(email: &str, name: &str, role: Role) -> Result<Identity> {
        let id = Uuid::new_v4().to_string();
        let claims = TokenClaims::new(&id, email, role, Utc::now());
        let token = token::encode(&claims)?;
        Ok(Identity::new(id, email, name, role, Some(token)))
    }
}

impl Default for SimulatedIdentityProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl IdentityProvider for SimulatedIdentityProvider {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<Identity> {
        self.simulate_round_trip().await;
        let email = email.trim();
        Self::mint(email, email_local_part(email), classify_role(email))
    }

    async fn register(&self, registration: Registration<'_>) -> Result<Identity> {
        self.simulate_round_trip().await;
        Self::mint(
            registration.email.trim(),
            registration.name.trim(),
            registration.role,
        )
    }
}

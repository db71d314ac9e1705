use tracing::{debug, error, info, warn};

use crate::errors::{Result, SessionError};
use crate::models::{Identity, Role};
use crate::navigation::{guard, GuardDecision, LogNavigator, Navigator, Route};
use crate::notify::{LogSink, Notification, NotificationSink};
use crate::session::classify::{classify_role, email_local_part};
use crate::session::provider::{IdentityProvider, Registration, SimulatedIdentityProvider};
use crate::session::validation::{validate_email, INVALID_EMAIL, PASSWORDS_DO_NOT_MATCH};
use crate::store::{MemoryStore, SessionStore};

/// Storage key the identity lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "talentGenius_user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(Role),
}

/// Everything `register` needs. `confirm_password` is checked only when present.
#[derive(Debug, Clone, Default)]
pub struct Signup<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
    pub confirm_password: Option<&'a str>,
    pub role: Option<Role>,
}

/// Owns who is signed in.
///
/// The store is always written before the in-memory slot changes, so after any
/// call the two agree, or the call failed and neither moved.
pub struct SessionModel {
    storage_key: String,
    store: Box<dyn SessionStore>,
    provider: Box<dyn IdentityProvider>,
    navigator: Box<dyn Navigator>,
    notifier: Box<dyn NotificationSink>,
    current: Option<Identity>,
}

pub struct SessionBuilder {
    storage_key: String,
    store: Box<dyn SessionStore>,
    provider: Box<dyn IdentityProvider>,
    navigator: Box<dyn Navigator>,
    notifier: Box<dyn NotificationSink>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            store: Box::new(MemoryStore::new()),
            provider: Box::new(SimulatedIdentityProvider::default()),
            navigator: Box::new(LogNavigator),
            notifier: Box::new(LogSink),
        }
    }
}

impl SessionBuilder {
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn store(mut self, store: impl SessionStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    pub fn provider(mut self, provider: impl IdentityProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Box::new(navigator);
        self
    }

    pub fn notifier(mut self, notifier: impl NotificationSink + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Builds the session and restores any identity left in the store.
    pub fn build(self) -> SessionModel {
        let mut session = SessionModel {
            storage_key: self.storage_key,
            store: self.store,
            provider: self.provider,
            navigator: self.navigator,
            notifier: self.notifier,
            current: None,
        };
        session.reload();
        session
    }
}

impl SessionModel {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(Identity::role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn state(&self) -> SessionState {
        match self.role() {
            Some(role) => SessionState::LoggedIn(role),
            None => SessionState::LoggedOut,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Re-reads the store. Absent or unreadable state means logged out;
    /// malformed state is also removed so memory and store agree.
    pub fn reload(&mut self) {
        self.current = match self.store.get(&self.storage_key) {
            Ok(None) => None,
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    debug!(
                        "Restored session for {} ({})",
                        identity.email(),
                        identity.role()
                    );
                    Some(identity)
                }
                Err(e) => {
                    warn!("Discarding malformed stored session: {e}");
                    if let Err(e) = self.store.remove(&self.storage_key) {
                        error!("Failed to clear malformed session: {e}");
                    }
                    None
                }
            },
            Err(e) => {
                warn!("Could not read stored session, starting logged out: {e}");
                None
            }
        };
    }

    /// Signs in. The password is not checked; the role comes from the email domain.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Identity> {
        match self.try_login(email, password).await {
            Ok(identity) => {
                info!("Login for {} as {}", identity.email(), identity.role());
                self.notifier.notify(Notification::success(
                    "Login successful",
                    format!("Welcome back, {}!", identity.name()),
                ));
                self.navigator.navigate(Route::dashboard_for(identity.role()));
                Ok(identity)
            }
            Err(e) => {
                warn!("Login failed for {email}: {e}");
                self.notifier.notify(e.notification("Login failed"));
                Err(e)
            }
        }
    }

    async fn try_login(&mut self, email: &str, password: &str) -> Result<Identity> {
        if !email.contains('@') {
            return Err(SessionError::validation(INVALID_EMAIL));
        }
        let expected = classify_role(email);
        let identity = self.provider.authenticate(email, password).await?;
        ensure_role(&identity, expected)?;
        self.commit(&identity)?;
        Ok(identity)
    }

    /// Creates an account. An explicit role wins over the email heuristic, but
    /// `Hr` is refused for personal webmail addresses.
    pub async fn signup(
        &mut self,
        email: &str,
        name: &str,
        password: &str,
        role: Option<Role>,
    ) -> Result<Identity> {
        self.register(Signup {
            email,
            name,
            password,
            confirm_password: None,
            role,
        })
        .await
    }

    /// `signup` with the form's confirmation field.
    pub async fn register(&mut self, signup: Signup<'_>) -> Result<Identity> {
        match self.try_register(&signup).await {
            Ok(identity) => {
                info!("Signup for {} as {}", identity.email(), identity.role());
                self.notifier.notify(Notification::success(
                    "Account created",
                    format!("Welcome to TalentGenius, {}!", identity.name()),
                ));
                self.navigator.navigate(Route::dashboard_for(identity.role()));
                Ok(identity)
            }
            Err(e) => {
                warn!("Signup failed for {}: {e}", signup.email);
                self.notifier.notify(e.notification("Signup failed"));
                Err(e)
            }
        }
    }

    async fn try_register(&mut self, signup: &Signup<'_>) -> Result<Identity> {
        let check = validate_email(signup.email, signup.role);
        if !check.valid {
            return Err(SessionError::validation(
                check.message.unwrap_or_else(|| INVALID_EMAIL.to_string()),
            ));
        }
        if let Some(confirm) = signup.confirm_password {
            if confirm != signup.password {
                return Err(SessionError::validation(PASSWORDS_DO_NOT_MATCH));
            }
        }

        let role = signup.role.unwrap_or_else(|| classify_role(signup.email));
        let name = match signup.name.trim() {
            "" => email_local_part(signup.email),
            name => name,
        };
        let identity = self
            .provider
            .register(Registration {
                email: signup.email,
                name,
                password: signup.password,
                role,
            })
            .await?;
        ensure_role(&identity, role)?;
        self.commit(&identity)?;
        Ok(identity)
    }

    /// Signs out and sends the user home. Never fails; calling it while
    /// logged out only makes sure nothing is left in the store.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.remove(&self.storage_key) {
            error!("Failed to clear stored session: {e}");
        }
        let Some(identity) = self.current.take() else {
            debug!("Logout while already logged out");
            return;
        };

        info!("Logout for {}", identity.email());
        self.navigator.navigate(Route::Home);
        self.notifier.notify(Notification::success(
            "Logged out",
            "You have been successfully logged out.",
        ));
    }

    /// Deletes the signed-in account. `confirmation` must repeat the account's email.
    pub fn delete_account(&mut self, confirmation: &str) -> Result<()> {
        let result = match &self.current {
            None => Err(SessionError::validation("You are not signed in")),
            Some(identity) if confirmation.trim() != identity.email() => Err(
                SessionError::validation(format!("Type {} to confirm", identity.email())),
            ),
            Some(_) => Ok(()),
        };
        if let Err(e) = result {
            self.notifier.notify(e.notification("Delete failed"));
            return Err(e);
        }

        self.notifier.notify(Notification::success(
            "Account deleted",
            "Your account has been permanently deleted.",
        ));
        self.logout();
        Ok(())
    }

    /// Whether the current user may open `route`, and where to go if not.
    pub fn authorize(&self, route: Route) -> GuardDecision {
        guard(self.current.as_ref(), route)
    }

    fn commit(&mut self, identity: &Identity) -> Result<()> {
        let json = serde_json::to_string(identity)?;
        self.store.set(&self.storage_key, &json)?;
        self.current = Some(identity.clone());
        Ok(())
    }
}

/// The session decides the role; a provider that disagrees is not trusted.
fn ensure_role(identity: &Identity, expected: Role) -> Result<()> {
    if identity.role() != expected {
        return Err(SessionError::Provider(format!(
            "provider returned role {} for {}, expected {expected}",
            identity.role(),
            identity.email()
        )));
    }
    Ok(())
}

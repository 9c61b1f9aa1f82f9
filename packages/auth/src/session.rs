//! # Session manager
//!
//! Holds the current user for the lifetime of the process and mirrors it into
//! a [`KeyValueStore`] under the `authToken` and `user` keys.
//!
//! ```text
//! Uninitialized ──restore()──> Restoring ──┬──> Anonymous
//!                                          └──> Authenticated(role)
//! Anonymous ──provider_login / seeker_login──> Authenticated(role)
//! Authenticated ──logout()──> Anonymous
//! ```
//!
//! The in-memory state sits behind a `std` lock that is never held across an
//! `.await`. Concurrent logins are not serialised; the last one to finish wins.

use freelink_core::{Notifier, User, UserType, AUTH_TOKEN_KEY, USER_KEY};
use freelink_storage::{KeyValueStore, StorageResult};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info, warn};

use crate::backend::AuthBackend;
use crate::error::{SessionError, SessionResult};

pub const LOGIN_SUCCESS: &str = "Successfully logged in!";
pub const LOGOUT_SUCCESS: &str = "Successfully logged out";
pub const LOGIN_REQUIRED: &str = "Please login first";
pub const LOGIN_SERVER_UNREACHABLE: &str =
    "Unable to connect to the login server. Please check your network or ensure the backend server is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "userType")]
pub enum SessionStatus {
    Uninitialized,
    Restoring,
    Anonymous,
    Authenticated(UserType),
}

/// Point-in-time view of the session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub user_type: Option<UserType>,
    pub loading: bool,
}

#[derive(Debug)]
struct SessionState {
    status: SessionStatus,
    user: Option<User>,
    token: Option<String>,
    pending_logins: usize,
}

impl SessionState {
    fn loading(&self) -> bool {
        matches!(
            self.status,
            SessionStatus::Uninitialized | SessionStatus::Restoring
        ) || self.pending_logins > 0
    }
}

/// Marks a login as outstanding until dropped
struct LoadingGuard<'a> {
    state: &'a RwLock<SessionState>,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a RwLock<SessionState>) -> Self {
        state.write().unwrap_or_else(PoisonError::into_inner).pending_logins += 1;
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.pending_logins = state.pending_logins.saturating_sub(1);
    }
}

pub struct SessionManager {
    backend: Arc<dyn AuthBackend>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            backend,
            storage,
            notifier,
            state: RwLock::new(SessionState {
                status: SessionStatus::Uninitialized,
                user: None,
                token: None,
                pending_logins: 0,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load a previously persisted session.
    ///
    /// A partial, unparseable or unreadable entry is removed and leaves the
    /// session anonymous. Nothing is reported to the user.
    pub async fn restore(&self) -> SessionStatus {
        self.write().status = SessionStatus::Restoring;

        let stored = match (
            self.storage.get(AUTH_TOKEN_KEY).await,
            self.storage.get(USER_KEY).await,
        ) {
            (Ok(token), Ok(user)) => (non_empty(token), non_empty(user)),
            (Err(e), _) | (_, Err(e)) => {
                warn!("Stored session could not be read, clearing it: {}", e);
                self.clear_storage().await;
                (None, None)
            }
        };

        let restored = match stored {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some((token, user)),
                Err(e) => {
                    warn!("Stored user could not be parsed, clearing session: {}", e);
                    self.clear_storage().await;
                    None
                }
            },
            (None, None) => None,
            _ => {
                warn!("Partial session found in storage, clearing it");
                self.clear_storage().await;
                None
            }
        };

        let mut state = self.write();
        match restored {
            Some((token, user)) => {
                info!("Restored {} session for {}", user.user_type, user.email);
                state.status = SessionStatus::Authenticated(user.user_type);
                state.user = Some(user);
                state.token = Some(token);
            }
            None => {
                debug!("No stored session");
                state.status = SessionStatus::Anonymous;
                state.user = None;
                state.token = None;
            }
        }
        state.status
    }

    async fn clear_storage(&self) {
        for key in [AUTH_TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key).await {
                warn!("Failed to remove {} from storage: {}", key, e);
            }
        }
    }

    pub async fn provider_login(&self, email: &str, password: &str) -> SessionResult<User> {
        self.login(UserType::Provider, email, password).await
    }

    pub async fn seeker_login(&self, email: &str, password: &str) -> SessionResult<User> {
        self.login(UserType::Seeker, email, password).await
    }

    async fn login(&self, role: UserType, email: &str, password: &str) -> SessionResult<User> {
        let _loading = LoadingGuard::new(&self.state);

        match self.authenticate(role, email, password).await {
            Ok(user) => {
                info!("{} {} logged in", role, user.email);
                self.notifier.success(LOGIN_SUCCESS);
                Ok(user)
            }
            Err(e) => {
                error!("{} login failed: {}", role, e);
                if e.is_transport() {
                    self.notifier.error(LOGIN_SERVER_UNREACHABLE);
                } else {
                    self.notifier.error(&format!("Login failed: {}", e));
                }
                Err(e)
            }
        }
    }

    async fn authenticate(&self, role: UserType, email: &str, password: &str) -> SessionResult<User> {
        let response = self.backend.login(role, email, password).await?;

        // The role the client asked for wins over whatever the backend reports
        let mut user = response.user;
        user.user_type = role;

        let user_json = serde_json::to_string(&user)?;
        if let Err(e) = self.persist(&response.token, &user_json).await {
            warn!("Could not persist session, clearing stored entries: {}", e);
            self.clear_storage().await;
            return Err(e.into());
        }

        let mut state = self.write();
        state.status = SessionStatus::Authenticated(role);
        state.user = Some(user.clone());
        state.token = Some(response.token);

        Ok(user)
    }

    async fn persist(&self, token: &str, user_json: &str) -> StorageResult<()> {
        self.storage.set(AUTH_TOKEN_KEY, token).await?;
        self.storage.set(USER_KEY, user_json).await
    }

    /// Forget the session in memory and in storage.
    ///
    /// Memory is always cleared; a storage failure is returned after both
    /// keys have been attempted.
    pub async fn logout(&self) -> SessionResult<()> {
        let previous = {
            let mut state = self.write();
            state.status = SessionStatus::Anonymous;
            state.token = None;
            state.user.take()
        };

        let mut result = Ok(());
        for key in [AUTH_TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key).await {
                error!("Failed to remove {} from storage: {}", key, e);
                if result.is_ok() {
                    result = Err(SessionError::from(e));
                }
            }
        }

        if let Some(user) = previous {
            info!("{} logged out", user.email);
        }
        if result.is_ok() {
            self.notifier.success(LOGOUT_SUCCESS);
        }
        result
    }

    /// Whether a user is held; notifies the user when nobody is logged in
    pub fn check_authentication(&self) -> bool {
        let authenticated = self.is_authenticated();
        if !authenticated {
            self.notifier.error(LOGIN_REQUIRED);
        }
        authenticated
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().user.is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.read().user.as_ref().map(|u| u.user_type)
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading()
    }

    /// Bearer token of the current session
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.read().status
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.read();
        SessionSnapshot {
            user: state.user.clone(),
            is_authenticated: state.user.is_some(),
            user_type: state.user.as_ref().map(|u| u.user_type),
            loading: state.loading(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

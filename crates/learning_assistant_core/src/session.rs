//! crates/learning_assistant_core/src/session.rs
//!
//! Explicit authentication state and the route guard that consults it.

use crate::domain::User;
use crate::phase::ClientError;
use crate::ports::SessionStore;
use crate::routes;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// The persisted session has not been checked yet.
    Checking,
    Authenticated(User),
    Anonymous,
}

/// Owns the signed-in user for the lifetime of the client.
pub struct AuthContext {
    store: Arc<dyn SessionStore>,
    state: RwLock<AuthState>,
}

impl AuthContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            state: RwLock::new(AuthState::Checking),
        }
    }

    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    pub async fn user(&self) -> Option<User> {
        match &*self.state.read().await {
            AuthState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    /// Restores a persisted session. An unreadable store counts as signed out.
    pub async fn initialize(&self) {
        let next = match self.store.load().await {
            Ok(Some(user)) => {
                info!("Restored session for {}.", user.username);
                AuthState::Authenticated(user)
            }
            Ok(None) => AuthState::Anonymous,
            Err(e) => {
                warn!("Failed to restore session: {:?}", e);
                AuthState::Anonymous
            }
        };
        *self.state.write().await = next;
    }

    pub async fn login(&self, user: User, token: &str) -> Result<(), ClientError> {
        self.store.save(&user, token).await?;
        info!("Signed in as {}.", user.username);
        *self.state.write().await = AuthState::Authenticated(user);
        Ok(())
    }

    /// Signs out locally even when the store cannot be cleared.
    pub async fn logout(&self) {
        if let Err(e) = self.store.clear().await {
            warn!("Failed to clear the session store: {:?}", e);
        }
        *self.state.write().await = AuthState::Anonymous;
        info!("Signed out.");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show a loading placeholder until the session check finishes.
    Loading,
    Render,
    Redirect(&'static str),
}

/// Decides whether a protected screen may render.
pub struct RouteGuard {
    auth: Arc<AuthContext>,
}

impl RouteGuard {
    pub fn new(auth: Arc<AuthContext>) -> Self {
        Self { auth }
    }

    pub async fn check(&self) -> GuardDecision {
        match self.auth.state().await {
            AuthState::Checking => GuardDecision::Loading,
            AuthState::Authenticated(_) => GuardDecision::Render,
            AuthState::Anonymous => GuardDecision::Redirect(routes::LOGIN),
        }
    }
}

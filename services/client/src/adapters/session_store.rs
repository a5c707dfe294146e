//! services/client/src/adapters/session_store.rs
//!
//! An in-memory `SessionStore` seeded from the configured token. Sessions do
//! not outlive the process.

use async_trait::async_trait;
use learning_assistant_core::domain::User;
use learning_assistant_core::ports::{PortResult, SessionStore};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<(User, String)>>,
}

impl MemorySessionStore {
    /// A store that already holds a session when a token is configured.
    pub fn seeded(token: Option<&str>, username: &str) -> Self {
        let session = token.map(|token| {
            let user = User {
                id: username.to_string(),
                username: username.to_string(),
                email: None,
            };
            (user, token.to_string())
        });
        Self {
            session: Mutex::new(session),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> PortResult<Option<User>> {
        Ok(self.session.lock().await.as_ref().map(|(user, _)| user.clone()))
    }

    async fn save(&self, user: &User, token: &str) -> PortResult<()> {
        *self.session.lock().await = Some((user.clone(), token.to_string()));
        Ok(())
    }

    async fn clear(&self) -> PortResult<()> {
        *self.session.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_restores_the_user() {
        let store = MemorySessionStore::seeded(Some("abc"), "ada");
        let user = store.load().await.unwrap().expect("seeded session");
        assert_eq!(user.username, "ada");
    }

    #[tokio::test]
    async fn unseeded_store_is_empty_until_saved() {
        let store = MemorySessionStore::seeded(None, "ada");
        assert_eq!(store.load().await.unwrap(), None);

        let user = User {
            id: "u1".into(),
            username: "grace".into(),
            email: None,
        };
        store.save(&user, "t").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}

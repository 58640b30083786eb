use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tokio::sync::broadcast;

/// Identity of the signed-in user, as supplied by the hosting application's
/// authentication provider. The core never sees credentials or tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedIn(UserSession),
    SignedOut,
}

/// Identity source for the UI layer. Ledger operations take the owner id
/// explicitly instead of reading ambient session state.
pub trait AuthSession: Send + Sync {
    fn current_user(&self) -> Option<UserSession>;
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}

/// In-process session holder the embedding app updates on login/logout.
pub struct SessionManager {
    current: RwLock<Option<UserSession>>,
    events: broadcast::Sender<AuthEvent>,
}

impl SessionManager {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        SessionManager {
            current: RwLock::new(None),
            events,
        }
    }

    pub fn sign_in(&self, user: UserSession) {
        if let Ok(mut current) = self.current.write() {
            *current = Some(user.clone());
        }
        // No receivers is fine; events are advisory
        let _ = self.events.send(AuthEvent::SignedIn(user));
    }

    pub fn sign_out(&self) {
        if let Ok(mut current) = self.current.write() {
            *current = None;
        }
        let _ = self.events.send(AuthEvent::SignedOut);
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession for SessionManager {
    fn current_user(&self) -> Option<UserSession> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserSession {
        UserSession {
            id: "user-1".to_string(),
            email: "user@example.com".to_string(),
        }
    }

    #[test]
    fn sign_in_and_out_update_current_user() {
        let manager = SessionManager::new();
        assert_eq!(manager.current_user(), None);

        manager.sign_in(user());
        assert_eq!(manager.current_user(), Some(user()));

        manager.sign_out();
        assert_eq!(manager.current_user(), None);
    }

    #[test]
    fn subscribers_see_auth_events() {
        let manager = SessionManager::new();
        let mut rx = manager.subscribe();

        manager.sign_in(user());
        manager.sign_out();

        assert!(matches!(rx.try_recv(), Ok(AuthEvent::SignedIn(u)) if u == user()));
        assert!(matches!(rx.try_recv(), Ok(AuthEvent::SignedOut)));
    }
}

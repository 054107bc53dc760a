use crate::db::{
    models::{JournalEntry, MoodPoint, User},
    Store,
};
use crate::error::CoreError;
use crate::responder::Responder;

/// The identity a session is currently bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveUser {
    pub id: i64,
    pub username: String,
    pub name: String,
}

impl From<User> for ActiveUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
        }
    }
}

/// Facade the UI talks to: binds a logged-in identity to store and responder
/// calls. Two states only, logged out and logged in; every data operation
/// requires the latter and fails with [`CoreError::NoActiveSession`] otherwise.
pub struct Session {
    store: Store,
    responder: Responder,
    user: Option<ActiveUser>,
}

impl Session {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            responder: Responder::new(),
            user: None,
        }
    }

    pub async fn sign_up(&mut self, username: &str, name: &str) -> Result<ActiveUser, CoreError> {
        let id = self
            .store
            .create_user(username.to_string(), name.to_string())
            .await?;

        let user = ActiveUser {
            id,
            username: username.to_string(),
            name: name.to_string(),
        };
        self.user = Some(user.clone());
        Ok(user)
    }

    pub async fn login(&mut self, username: &str) -> Result<ActiveUser, CoreError> {
        let user: ActiveUser = self.store.get_user(username).await?.into();
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn current_user(&self) -> Option<&ActiveUser> {
        self.user.as_ref()
    }

    fn require_user(&self) -> Result<&ActiveUser, CoreError> {
        self.user.as_ref().ok_or(CoreError::NoActiveSession)
    }

    pub async fn record_mood(&self, level: i64, note: Option<String>) -> Result<i64, CoreError> {
        let user = self.require_user()?;
        self.store.add_mood(user.id, level, note).await
    }

    pub async fn save_journal(&self, title: &str, content: &str) -> Result<i64, CoreError> {
        let user = self.require_user()?;
        self.store.add_journal(user.id, title, content).await
    }

    pub async fn mood_history(
        &self,
        window_days: Option<i64>,
    ) -> Result<Vec<MoodPoint>, CoreError> {
        let user = self.require_user()?;
        self.store.mood_history(user.id, window_days).await
    }

    pub async fn recent_journals(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<JournalEntry>, CoreError> {
        let user = self.require_user()?;
        self.store.recent_journals(user.id, limit).await
    }

    /// Chat never touches the store; it only needs a logged-in user to talk to.
    pub fn send_chat(&self, text: &str) -> Result<&'static str, CoreError> {
        self.require_user()?;
        Ok(self.responder.reply(text))
    }
}

use std::path::PathBuf;

use async_trait::async_trait;

use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::outgoing::session_store::{SessionStore, SessionStoreError};

/// Session persistence as a single JSON file next to the service. The file
/// holds at most one session; logout deletes it.
#[derive(Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStoreError::Io(e.to_string())),
        };

        let session = serde_json::from_str(&raw)
            .map_err(|e| SessionStoreError::Io(format!("corrupt session file: {}", e)))?;

        Ok(Some(session))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn temp_store() -> FileSessionStore {
        let path = std::env::temp_dir().join(format!("folio-session-{}.json", Uuid::new_v4()));
        FileSessionStore::new(path)
    }

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            operator: "owner@example.com".to_string(),
            expires_at: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let store = temp_store();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = temp_store();
        let session = session();

        store.save(&session).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded.token, session.token);
        assert_eq!(loaded.operator, session.operator);

        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = temp_store();

        store.save(&session()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let store = temp_store();
        tokio::fs::write(&store.path, "{ not json").await.unwrap();

        assert!(store.load().await.is_err());

        store.clear().await.unwrap();
    }
}

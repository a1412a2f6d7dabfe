use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::outgoing::identity_provider::{
    IdentityError, IdentityProvider, IssuedSession,
};
use crate::auth::application::ports::outgoing::session_store::{SessionStore, SessionStoreError};
use crate::connectivity::application::ports::outgoing::probe::ConnectivityProbe;
use crate::content::application::domain::entities::{
    ContactInfoPatch, ProfilePatch, ProjectDraft, ProjectPatch, ServiceDraft, ServicePatch,
};
use crate::content::application::ports::incoming::content_api::{
    ContentApi, ContentState, ContentSyncError,
};
use crate::content::application::ports::outgoing::content_store::DocumentId;

/* --------------------------------------------------
 * Identity provider
 * -------------------------------------------------- */

pub struct StubIdentityProvider {
    result: Result<IssuedSession, IdentityError>,
}

impl StubIdentityProvider {
    pub fn issuing(token: &str) -> Self {
        Self {
            result: Ok(IssuedSession {
                token: token.to_string(),
                expires_at: None,
            }),
        }
    }

    pub fn failing(err: IdentityError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn authenticate(
        &self,
        _identifier: &str,
        _secret: &str,
    ) -> Result<IssuedSession, IdentityError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Session store
 * -------------------------------------------------- */

#[derive(Default)]
pub struct MemorySessionStore {
    stored: Mutex<Option<Session>>,
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        *self.stored.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

/* --------------------------------------------------
 * Connectivity probe
 * -------------------------------------------------- */

pub struct StubConnectivityProbe {
    pub online: bool,
}

#[async_trait]
impl ConnectivityProbe for StubConnectivityProbe {
    async fn check(&self) -> bool {
        self.online
    }
}

/* --------------------------------------------------
 * Content api
 * -------------------------------------------------- */

/// Records every call and answers with a configured result, so handler
/// tests can assert routing without a real sync layer behind them.
#[derive(Clone)]
pub struct StubContentApi {
    inner: Arc<StubContentApiInner>,
}

struct StubContentApiInner {
    state: watch::Sender<ContentState>,
    calls: Mutex<Vec<String>>,
    failure: Option<ContentSyncError>,
    created_id: DocumentId,
}

impl StubContentApi {
    pub fn ok() -> Self {
        Self::build(ContentState::default(), None)
    }

    pub fn failing(err: ContentSyncError) -> Self {
        Self::build(ContentState::default(), Some(err))
    }

    pub fn with_state(state: ContentState) -> Self {
        Self::build(state, None)
    }

    fn build(state: ContentState, failure: Option<ContentSyncError>) -> Self {
        let (tx, _) = watch::channel(state);
        Self {
            inner: Arc::new(StubContentApiInner {
                state: tx,
                calls: Mutex::new(Vec::new()),
                failure,
                created_id: "stub-id".to_string(),
            }),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.inner.calls.lock().unwrap().push(call);
    }

    fn result(&self) -> Result<(), ContentSyncError> {
        match &self.inner.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentApi for StubContentApi {
    fn snapshot(&self) -> ContentState {
        self.inner.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.inner.state.subscribe()
    }

    async fn fetch_all(&self) {
        self.record("fetch_all".to_string());
    }

    async fn retry_fetch(&self) {
        self.record("retry_fetch".to_string());
    }

    async fn update_profile(&self, _patch: ProfilePatch) -> Result<(), ContentSyncError> {
        self.record("update_profile".to_string());
        self.result()
    }

    async fn add_project(&self, _draft: ProjectDraft) -> Result<DocumentId, ContentSyncError> {
        self.record("add_project".to_string());
        self.result().map(|_| self.inner.created_id.clone())
    }

    async fn update_project(
        &self,
        id: &str,
        _patch: ProjectPatch,
    ) -> Result<(), ContentSyncError> {
        self.record(format!("update_project:{}", id));
        self.result()
    }

    async fn delete_project(&self, id: &str) -> Result<(), ContentSyncError> {
        self.record(format!("delete_project:{}", id));
        self.result()
    }

    async fn add_service(&self, _draft: ServiceDraft) -> Result<DocumentId, ContentSyncError> {
        self.record("add_service".to_string());
        self.result().map(|_| self.inner.created_id.clone())
    }

    async fn update_service(
        &self,
        id: &str,
        _patch: ServicePatch,
    ) -> Result<(), ContentSyncError> {
        self.record(format!("update_service:{}", id));
        self.result()
    }

    async fn delete_service(&self, id: &str) -> Result<(), ContentSyncError> {
        self.record(format!("delete_service:{}", id));
        self.result()
    }

    async fn update_contact_info(&self, _patch: ContactInfoPatch) -> Result<(), ContentSyncError> {
        self.record("update_contact_info".to_string());
        self.result()
    }
}

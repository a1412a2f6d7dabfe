use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::outgoing::identity_provider::IdentityProvider;
use crate::auth::application::ports::outgoing::session_store::SessionStore;
use crate::auth::application::services::auth_gate::AuthGate;
use crate::connectivity::application::monitor::ConnectivityMonitor;
use crate::connectivity::application::ports::outgoing::probe::ConnectivityProbe;
use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::tests::support::stubs::{
    MemorySessionStore, StubConnectivityProbe, StubContentApi, StubIdentityProvider,
};
use crate::AppState;

pub struct TestAppStateBuilder {
    content: Arc<dyn ContentApi>,
    identity: Arc<dyn IdentityProvider>,
    sessions: Arc<dyn SessionStore>,
    connectivity: ConnectivityMonitor,
    probe: Arc<dyn ConnectivityProbe>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: Arc::new(StubContentApi::ok()),
            identity: Arc::new(StubIdentityProvider::issuing("test-token")),
            sessions: Arc::new(MemorySessionStore::default()),
            connectivity: ConnectivityMonitor::new(true),
            probe: Arc::new(StubConnectivityProbe { online: true }),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, api: impl ContentApi + 'static) -> Self {
        self.content = Arc::new(api);
        self
    }

    pub fn with_identity_provider(
        mut self,
        provider: impl IdentityProvider + 'static,
    ) -> Self {
        self.identity = Arc::new(provider);
        self
    }

    pub fn with_connectivity(mut self, monitor: ConnectivityMonitor) -> Self {
        self.connectivity = monitor;
        self
    }

    pub fn with_probe(mut self, probe: impl ConnectivityProbe + 'static) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    pub async fn build(self) -> web::Data<AppState> {
        let auth = AuthGate::new(self.identity, self.sessions).await;

        web::Data::new(AppState {
            content: self.content,
            auth,
            connectivity: self.connectivity,
            store_probe: self.probe,
        })
    }
}

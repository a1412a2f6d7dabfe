use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tracing::error;

use crate::auth::application::services::auth_gate::AuthGate;
use crate::connectivity::application::monitor::ConnectivityMonitor;
use crate::content::application::domain::entities::{
    ContactInfo, ContactInfoPatch, Profile, ProfilePatch, Project, ProjectDraft, ProjectPatch,
    Service, ServiceDraft, ServicePatch,
};
use crate::content::application::ports::incoming::content_api::{
    ContentApi, ContentState, ContentSyncError,
};
use crate::content::application::ports::outgoing::content_store::{
    Collection, ContentStore, Document, DocumentId, SingletonKey, StoreError,
};

pub const OFFLINE_MESSAGE: &str =
    "You are currently offline. Please check your internet connection.";
pub const STILL_OFFLINE_MESSAGE: &str = "Still offline. Please check your internet connection.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load content. Please try again later.";

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// The synchronization layer: single owner of the content mirror. All reads
/// go through `fetch_all`, which publishes the four domains as one batch;
/// all mutations run the same guard sequence (session, then connectivity)
/// before the store is touched, and apply their local equivalent only after
/// the store confirmed the write.
pub struct ContentSync<S>
where
    S: ContentStore,
{
    store: S,
    auth: AuthGate,
    connectivity: ConnectivityMonitor,
    state: watch::Sender<ContentState>,
    /// Serializes mutation sections so two in-flight mutations cannot
    /// interleave their local applies. Fetches stay outside it.
    write_gate: Mutex<()>,
}

impl<S> ContentSync<S>
where
    S: ContentStore,
{
    pub fn new(store: S, auth: AuthGate, connectivity: ConnectivityMonitor) -> Self {
        let initial = ContentState {
            loading: true,
            is_online: connectivity.is_online(),
            ..Default::default()
        };
        let (state, _) = watch::channel(initial);

        Self {
            store,
            auth,
            connectivity,
            state,
            write_gate: Mutex::new(()),
        }
    }

    /// Session first, then connectivity. Failing either leaves the mirror
    /// untouched and never reaches the store.
    fn guard_mutation(&self) -> Result<(), ContentSyncError> {
        if !self.auth.is_authenticated() {
            return Err(ContentSyncError::NotAuthenticated);
        }
        if !self.connectivity.is_online() {
            return Err(ContentSyncError::Offline);
        }
        Ok(())
    }

    async fn fetch_profile(&self) -> Result<Option<Profile>, StoreError> {
        match self.store.get_singleton(SingletonKey::Profile).await {
            Ok(Some(doc)) => from_document(doc).map(Some),
            Ok(None) | Err(StoreError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn fetch_contact(&self) -> Result<Option<ContactInfo>, StoreError> {
        match self.store.get_singleton(SingletonKey::Contact).await {
            Ok(Some(doc)) => from_document(doc).map(Some),
            Ok(None) | Err(StoreError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, StoreError> {
        let rows = self.store.list_ordered(Collection::Projects).await?;
        rows.into_iter()
            .map(|(id, doc)| {
                let mut project: Project = from_document(doc)?;
                project.id = id;
                Ok(project)
            })
            .collect()
    }

    async fn fetch_services(&self) -> Result<Vec<Service>, StoreError> {
        let rows = self.store.list_ordered(Collection::Services).await?;
        rows.into_iter()
            .map(|(id, doc)| {
                let mut service: Service = from_document(doc)?;
                service.id = id;
                Ok(service)
            })
            .collect()
    }

    /// Re-fetches on every offline→online transition. Offline transitions
    /// only flip the flag and surface the offline message.
    pub fn spawn_reconnect_listener(self: &Arc<Self>) -> tokio::task::JoinHandle<()>
    where
        S: 'static,
    {
        let sync = Arc::clone(self);
        let mut rx = sync.connectivity.subscribe();
        // Status at subscribe time; transitions are judged against it so a
        // flip that lands before the task first polls is still seen.
        let mut last = *rx.borrow();

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let online = *rx.borrow_and_update();
                if online == last {
                    continue;
                }
                last = online;

                if online {
                    sync.state.send_modify(|s| {
                        s.is_online = true;
                        s.error = None;
                    });
                    sync.fetch_all().await;
                } else {
                    sync.state.send_modify(|s| {
                        s.is_online = false;
                        s.error = Some(OFFLINE_MESSAGE.to_string());
                    });
                }
            }
        })
    }
}

#[async_trait]
impl<S> ContentApi for ContentSync<S>
where
    S: ContentStore,
{
    fn snapshot(&self) -> ContentState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.state.subscribe()
    }

    async fn fetch_all(&self) {
        if !self.connectivity.is_online() {
            self.state.send_modify(|s| {
                s.is_online = false;
                s.loading = false;
                s.error = Some(OFFLINE_MESSAGE.to_string());
            });
            return;
        }

        self.state.send_modify(|s| {
            s.is_online = true;
            s.loading = true;
            s.error = None;
        });

        // All four reads settle before anything becomes visible.
        let result = futures::try_join!(
            self.fetch_profile(),
            self.fetch_projects(),
            self.fetch_services(),
            self.fetch_contact(),
        );

        match result {
            Ok((profile, projects, services, contact_info)) => {
                self.state.send_modify(|s| {
                    if let Some(profile) = profile {
                        s.profile = Some(profile);
                    }
                    s.projects = projects;
                    s.services = services;
                    if let Some(contact_info) = contact_info {
                        s.contact_info = Some(contact_info);
                    }
                    s.loading = false;
                });
            }
            Err(e) => {
                error!("Error fetching content: {}", e);
                self.state.send_modify(|s| {
                    s.loading = false;
                    s.error = Some(FETCH_FAILED_MESSAGE.to_string());
                });
            }
        }
    }

    async fn retry_fetch(&self) {
        if !self.connectivity.is_online() {
            self.state.send_modify(|s| {
                s.error = Some(STILL_OFFLINE_MESSAGE.to_string());
            });
            return;
        }

        self.fetch_all().await;
    }

    async fn update_profile(&self, patch: ProfilePatch) -> Result<(), ContentSyncError> {
        self.guard_mutation()?;
        let _write = self.write_gate.lock().await;

        let fields = to_document(&patch)?;

        // Read-then-decide: a blind full write would drop remote fields
        // absent from the patch.
        let exists = self
            .store
            .get_singleton(SingletonKey::Profile)
            .await
            .map_err(|e| {
                error!("Error updating profile: {}", e);
                ContentSyncError::Store(e)
            })?
            .is_some();

        if exists {
            self.store
                .update_singleton(SingletonKey::Profile, fields)
                .await
                .map_err(|e| {
                    error!("Error updating profile: {}", e);
                    ContentSyncError::Store(e)
                })?;

            self.state.send_modify(|s| {
                if let Some(profile) = s.profile.as_mut() {
                    patch.apply_to(profile);
                }
            });
        } else {
            self.store
                .put_singleton(SingletonKey::Profile, fields)
                .await
                .map_err(|e| {
                    error!("Error updating profile: {}", e);
                    ContentSyncError::Store(e)
                })?;

            self.state
                .send_modify(|s| s.profile = Some(patch.to_profile()));
        }

        Ok(())
    }

    async fn add_project(&self, draft: ProjectDraft) -> Result<DocumentId, ContentSyncError> {
        self.guard_mutation()?;
        let _write = self.write_gate.lock().await;

        let document = to_document(&draft)?;
        let id = self
            .store
            .create(Collection::Projects, document)
            .await
            .map_err(|e| {
                error!("Error adding project: {}", e);
                ContentSyncError::Store(e)
            })?;

        let project = draft.into_project(id.clone());
        self.state.send_modify(|s| s.projects.push(project));

        Ok(id)
    }

    async fn update_project(
        &self,
        id: &str,
        patch: ProjectPatch,
    ) -> Result<(), ContentSyncError> {
        self.guard_mutation()?;
        let _write = self.write_gate.lock().await;

        let fields = to_document(&patch)?;
        self.store
            .update(Collection::Projects, id, fields)
            .await
            .map_err(|e| {
                error!("Error updating project: {}", e);
                ContentSyncError::Store(e)
            })?;

        // In-place merge; re-ordering waits for the next full fetch.
        self.state.send_modify(|s| {
            if let Some(project) = s.projects.iter_mut().find(|p| p.id == id) {
                patch.apply_to(project);
            }
        });

        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<(), ContentSyncError> {
        self.guard_mutation()?;
        let _write = self.write_gate.lock().await;

        self.store
            .delete(Collection::Projects, id)
            .await
            .map_err(|e| {
                error!("Error deleting project: {}", e);
                ContentSyncError::Store(e)
            })?;

        self.state.send_modify(|s| s.projects.retain(|p| p.id != id));

        Ok(())
    }

    async fn add_service(&self, draft: ServiceDraft) -> Result<DocumentId, ContentSyncError> {
        self.guard_mutation()?;
        let _write = self.write_gate.lock().await;

        let document = to_document(&draft)?;
        let id = self
            .store
            .create(Collection::Services, document)
            .await
            .map_err(|e| {
                error!("Error adding service: {}", e);
                ContentSyncError::Store(e)
            })?;

        let service = draft.into_service(id.clone());
        self.state.send_modify(|s| s.services.push(service));

        Ok(id)
    }

    async fn update_service(
        &self,
        id: &str,
        patch: ServicePatch,
    ) -> Result<(), ContentSyncError> {
        self.guard_mutation()?;
        let _write = self.write_gate.lock().await;

        let fields = to_document(&patch)?;
        self.store
            .update(Collection::Services, id, fields)
            .await
            .map_err(|e| {
                error!("Error updating service: {}", e);
                ContentSyncError::Store(e)
            })?;

        self.state.send_modify(|s| {
            if let Some(service) = s.services.iter_mut().find(|v| v.id == id) {
                patch.apply_to(service);
            }
        });

        Ok(())
    }

    async fn delete_service(&self, id: &str) -> Result<(), ContentSyncError> {
        self.guard_mutation()?;
        let _write = self.write_gate.lock().await;

        self.store
            .delete(Collection::Services, id)
            .await
            .map_err(|e| {
                error!("Error deleting service: {}", e);
                ContentSyncError::Store(e)
            })?;

        self.state.send_modify(|s| s.services.retain(|v| v.id != id));

        Ok(())
    }

    async fn update_contact_info(&self, patch: ContactInfoPatch) -> Result<(), ContentSyncError> {
        self.guard_mutation()?;
        let _write = self.write_gate.lock().await;

        let fields = to_document(&patch)?;

        let exists = self
            .store
            .get_singleton(SingletonKey::Contact)
            .await
            .map_err(|e| {
                error!("Error updating contact info: {}", e);
                ContentSyncError::Store(e)
            })?
            .is_some();

        if exists {
            self.store
                .update_singleton(SingletonKey::Contact, fields)
                .await
                .map_err(|e| {
                    error!("Error updating contact info: {}", e);
                    ContentSyncError::Store(e)
                })?;

            self.state.send_modify(|s| {
                if let Some(contact) = s.contact_info.as_mut() {
                    patch.apply_to(contact);
                }
            });
        } else {
            self.store
                .put_singleton(SingletonKey::Contact, fields)
                .await
                .map_err(|e| {
                    error!("Error updating contact info: {}", e);
                    ContentSyncError::Store(e)
                })?;

            self.state
                .send_modify(|s| s.contact_info = Some(patch.to_contact_info()));
        }

        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Helper Functions
// ──────────────────────────────────────────────────────────
//

fn to_document<T: Serialize>(value: &T) -> Result<Document, ContentSyncError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(ContentSyncError::Store(StoreError::Decode(format!(
            "expected a JSON object, got {}",
            other
        )))),
        Err(e) => Err(ContentSyncError::Store(StoreError::Decode(e.to_string()))),
    }
}

fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, StoreError> {
    serde_json::from_value(serde_json::Value::Object(document))
        .map_err(|e| StoreError::Decode(e.to_string()))
}

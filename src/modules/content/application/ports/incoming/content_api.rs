use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;
use utoipa::ToSchema;

use crate::content::application::domain::entities::{
    ContactInfo, ContactInfoPatch, Profile, ProfilePatch, Project, ProjectDraft, ProjectPatch,
    Service, ServiceDraft, ServicePatch,
};
use crate::content::application::ports::outgoing::content_store::{DocumentId, StoreError};

//
// ──────────────────────────────────────────────────────────
// Published state
// ──────────────────────────────────────────────────────────
//

/// The mirror plus its sync flags, published as one value. Consumers never
/// see a half-updated batch: a fetch replaces the whole state atomically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentState {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub contact_info: Option<ContactInfo>,
    pub loading: bool,
    pub is_online: bool,
    pub error: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Mutation failures surfaced to presentation. Guard failures are raised
/// before any store call; store failures keep their cause internally but
/// display a generic message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentSyncError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("You are currently offline")]
    Offline,

    #[error("Request failed. Please try again later.")]
    Store(#[from] StoreError),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// The surface presentation talks to: the mirrored state plus the eight
/// mutation operations and the fetch controls.
#[async_trait]
pub trait ContentApi: Send + Sync {
    fn snapshot(&self) -> ContentState;

    fn subscribe(&self) -> watch::Receiver<ContentState>;

    /// Load all four content domains; no-op short-circuit while offline.
    async fn fetch_all(&self);

    /// Operator-triggered re-fetch; reports "still offline" without
    /// touching the store when there is no connectivity.
    async fn retry_fetch(&self);

    async fn update_profile(&self, patch: ProfilePatch) -> Result<(), ContentSyncError>;

    async fn add_project(&self, draft: ProjectDraft) -> Result<DocumentId, ContentSyncError>;

    async fn update_project(&self, id: &str, patch: ProjectPatch)
        -> Result<(), ContentSyncError>;

    async fn delete_project(&self, id: &str) -> Result<(), ContentSyncError>;

    async fn add_service(&self, draft: ServiceDraft) -> Result<DocumentId, ContentSyncError>;

    async fn update_service(&self, id: &str, patch: ServicePatch)
        -> Result<(), ContentSyncError>;

    async fn delete_service(&self, id: &str) -> Result<(), ContentSyncError>;

    async fn update_contact_info(&self, patch: ContactInfoPatch) -> Result<(), ContentSyncError>;
}

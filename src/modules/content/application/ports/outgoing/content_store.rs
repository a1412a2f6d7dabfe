use async_trait::async_trait;

/// A document as the remote store sees it: a JSON object without its id.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Server-generated identifier of a collection document.
pub type DocumentId = String;

//
// ──────────────────────────────────────────────────────────
// Addressing
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Services,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Services => "services",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Well-known keys of the two singleton documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingletonKey {
    Profile,
    Contact,
}

impl SingletonKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SingletonKey::Profile => "profile",
            SingletonKey::Contact => "contact",
        }
    }
}

impl std::fmt::Display for SingletonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Addressed document does not exist.
    #[error("Document not found")]
    NotFound,

    /// The store could not be reached at all.
    #[error("Store unreachable: {0}")]
    Network(String),

    /// The store answered with a non-success status.
    #[error("Store rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    /// The store answered with a body this service cannot decode.
    #[error("Malformed document: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Thin client over the remote document database. One logical operation per
/// call; every failure carries its cause so callers can log it before
/// folding it into a user-facing message.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get_singleton(&self, key: SingletonKey) -> Result<Option<Document>, StoreError>;

    /// Full write: the given document becomes the entire singleton.
    async fn put_singleton(&self, key: SingletonKey, document: Document)
        -> Result<(), StoreError>;

    /// Field merge: absent fields keep their remote values.
    async fn update_singleton(&self, key: SingletonKey, fields: Document)
        -> Result<(), StoreError>;

    /// All documents of a collection, ascending by their `order` field.
    async fn list_ordered(
        &self,
        collection: Collection,
    ) -> Result<Vec<(DocumentId, Document)>, StoreError>;

    async fn create(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<DocumentId, StoreError>;

    /// Field merge into an existing document.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), StoreError>;

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;
}

use std::env;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::content::application::ports::outgoing::content_store::{
    Collection, ContentStore, Document, DocumentId, SingletonKey, StoreError,
};

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("STORE_URL").expect("STORE_URL is not set in .env file"),
            api_key: env::var("STORE_API_KEY").expect("STORE_API_KEY is not set in .env file"),
        }
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

// ============================================================================
// Store Implementation
// ============================================================================

/// REST client for the remote document database. Collections live under
/// `/collections/{name}`, the two singletons under `/singletons/{key}`.
/// Documents are plain JSON objects; collection ids are server-generated.
#[derive(Clone)]
pub struct RestContentStore {
    http: reqwest::Client,
    config: StoreConfig,
}

impl RestContentStore {
    pub fn new(http: reqwest::Client, config: StoreConfig) -> Self {
        Self { http, config }
    }

    fn singleton_url(&self, key: SingletonKey) -> String {
        format!("{}/singletons/{}", self.config.base_url, key.as_str())
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/collections/{}", self.config.base_url, collection.as_str())
    }

    fn document_url(&self, collection: Collection, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("x-request-id", Uuid::new_v4().to_string())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[derive(Deserialize)]
struct CreatedResponse {
    id: DocumentId,
}

#[derive(Deserialize)]
struct ListResponse {
    documents: Vec<ListedDocument>,
}

#[derive(Deserialize)]
struct ListedDocument {
    id: DocumentId,
    #[serde(flatten)]
    fields: Document,
}

fn network(e: reqwest::Error) -> StoreError {
    StoreError::Network(e.to_string())
}

fn decode(e: reqwest::Error) -> StoreError {
    StoreError::Decode(e.to_string())
}

#[async_trait]
impl ContentStore for RestContentStore {
    async fn get_singleton(&self, key: SingletonKey) -> Result<Option<Document>, StoreError> {
        let response = self
            .request(self.http.get(self.singleton_url(key)))
            .send()
            .await
            .map_err(network)?;

        match Self::check_status(response).await {
            Ok(response) => {
                let document = response.json::<Document>().await.map_err(decode)?;
                Ok(Some(document))
            }
            Err(StoreError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn put_singleton(
        &self,
        key: SingletonKey,
        document: Document,
    ) -> Result<(), StoreError> {
        let response = self
            .request(self.http.put(self.singleton_url(key)).json(&document))
            .send()
            .await
            .map_err(network)?;

        Self::check_status(response).await.map(|_| ())
    }

    async fn update_singleton(
        &self,
        key: SingletonKey,
        fields: Document,
    ) -> Result<(), StoreError> {
        let response = self
            .request(self.http.patch(self.singleton_url(key)).json(&fields))
            .send()
            .await
            .map_err(network)?;

        Self::check_status(response).await.map(|_| ())
    }

    async fn list_ordered(
        &self,
        collection: Collection,
    ) -> Result<Vec<(DocumentId, Document)>, StoreError> {
        let response = self
            .request(
                self.http
                    .get(self.collection_url(collection))
                    .query(&[("order_by", "order")]),
            )
            .send()
            .await
            .map_err(network)?;

        let body = Self::check_status(response)
            .await?
            .json::<ListResponse>()
            .await
            .map_err(decode)?;

        let mut rows: Vec<(DocumentId, Document)> = body
            .documents
            .into_iter()
            .map(|d| (d.id, d.fields))
            .collect();

        // The port promises ascending order even if the server ignores
        // the order_by parameter.
        rows.sort_by_key(|(_, doc)| doc.get("order").and_then(|v| v.as_i64()).unwrap_or(0));

        Ok(rows)
    }

    async fn create(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<DocumentId, StoreError> {
        let response = self
            .request(self.http.post(self.collection_url(collection)).json(&document))
            .send()
            .await
            .map_err(network)?;

        let created = Self::check_status(response)
            .await?
            .json::<CreatedResponse>()
            .await
            .map_err(decode)?;

        Ok(created.id)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), StoreError> {
        let response = self
            .request(self.http.patch(self.document_url(collection, id)).json(&fields))
            .send()
            .await
            .map_err(network)?;

        Self::check_status(response).await.map(|_| ())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let response = self
            .request(self.http.delete(self.document_url(collection, id)))
            .send()
            .await
            .map_err(network)?;

        Self::check_status(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_built_from_config() {
        let store = RestContentStore::new(
            reqwest::Client::new(),
            StoreConfig {
                base_url: "https://store.example/v1".to_string(),
                api_key: "k".to_string(),
            },
        );

        assert_eq!(
            store.singleton_url(SingletonKey::Profile),
            "https://store.example/v1/singletons/profile"
        );
        assert_eq!(
            store.collection_url(Collection::Services),
            "https://store.example/v1/collections/services"
        );
        assert_eq!(
            store.document_url(Collection::Projects, "abc"),
            "https://store.example/v1/collections/projects/abc"
        );
    }

    #[test]
    fn test_list_response_splits_id_from_fields() {
        let body: ListResponse = serde_json::from_value(serde_json::json!({
            "documents": [
                { "id": "a", "name": "one", "order": 2 },
                { "id": "b", "name": "two", "order": 1 }
            ]
        }))
        .unwrap();

        assert_eq!(body.documents.len(), 2);
        assert_eq!(body.documents[0].id, "a");
        assert_eq!(
            body.documents[0].fields.get("name"),
            Some(&serde_json::Value::String("one".to_string()))
        );
        assert!(body.documents[0].fields.get("id").is_none());
    }
}

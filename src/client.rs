use reqwest::Client;
use reqwest::header::{ HeaderMap, HeaderValue, CONTENT_TYPE };
use serde::Deserialize;
use serde_json::Value;
use log::{ info, error, debug };

use crate::error::ExportError;

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const API_KEY_HEADER: &str = "X-Appwrite-Key";

#[derive(Debug, Deserialize)]
struct AttributeListResponse {
    #[serde(default)]
    attributes: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct IndexListResponse {
    #[serde(default)]
    indexes: Vec<Value>,
}

/// HTTP client for the Appwrite REST API.
///
/// Authentication headers are set once at construction and sent with every
/// request. All operations are read-only GETs.
pub struct AppwriteClient {
    client: Client,
    endpoint: String,
}

impl AppwriteClient {
    pub fn new(endpoint: &str, project_id: &str, api_key: &str) -> Result<Self, ExportError> {
        let mut headers = HeaderMap::new();
        headers.insert(PROJECT_HEADER, HeaderValue::from_str(project_id)?);
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self, database_id: &str, collection_id: &str) -> String {
        format!("{}/databases/{}/collections/{}", self.endpoint, database_id, collection_id)
    }

    /// Fetches the raw metadata object for a collection.
    ///
    /// Returns `None` on a non-200 response (the collection is skipped by the
    /// exporter); transport errors propagate.
    pub async fn get_collection(
        &self,
        database_id: &str,
        collection_id: &str
    ) -> Result<Option<Value>, ExportError> {
        let url = self.collection_url(database_id, collection_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("Error fetching collection {}: {} - {}", collection_id, status.as_u16(), text);
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Lists attribute definitions for a collection.
    ///
    /// A non-200 response degrades to an empty list; only transport errors
    /// propagate.
    pub async fn list_attributes(
        &self,
        database_id: &str,
        collection_id: &str
    ) -> Result<Vec<Value>, ExportError> {
        let url = format!("{}/attributes", self.collection_url(database_id, collection_id));
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!("Attributes fetch for '{}' returned {}, using empty list", collection_id, status);
            return Ok(Vec::new());
        }

        let parsed: AttributeListResponse = serde_json::from_str(&response.text().await?)?;
        Ok(parsed.attributes)
    }

    /// Lists index definitions for a collection. Same contract as
    /// [`list_attributes`](Self::list_attributes).
    pub async fn list_indexes(
        &self,
        database_id: &str,
        collection_id: &str
    ) -> Result<Vec<Value>, ExportError> {
        let url = format!("{}/indexes", self.collection_url(database_id, collection_id));
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!("Indexes fetch for '{}' returned {}, using empty list", collection_id, status);
            return Ok(Vec::new());
        }

        let parsed: IndexListResponse = serde_json::from_str(&response.text().await?)?;
        Ok(parsed.indexes)
    }

    /// Pings the Appwrite health endpoint to verify connectivity and
    /// credentials before starting an export.
    pub async fn ping(&self) -> Result<(), ExportError> {
        let url = format!("{}/health", self.endpoint);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Appwrite health check failed (Status: {}): {}", status, body);
            return Err(ExportError::HealthCheck { status: status.as_u16(), body });
        }

        info!("Appwrite connection verified");
        Ok(())
    }
}

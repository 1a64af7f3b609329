use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Map;
use serde_json::ser::{ PrettyFormatter, Serializer };
use log::{ info, warn };

use crate::client::AppwriteClient;
use crate::error::ExportError;
use crate::schema::{ CollectionSchema, SchemaDocument };

/// Default name of the output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "appwrite_schema.json";

/// Everything an export run needs. Collection ids are fetched in the order
/// given here, and that order is preserved in the output mapping.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub api_key: String,
    pub collection_ids: Vec<String>,
}

pub struct SchemaExporter {
    client: AppwriteClient,
    database_id: String,
    collection_ids: Vec<String>,
}

impl SchemaExporter {
    pub fn new(config: &ExportConfig) -> Result<Self, ExportError> {
        let client = AppwriteClient::new(&config.endpoint, &config.project_id, &config.api_key)?;
        Ok(Self {
            client,
            database_id: config.database_id.clone(),
            collection_ids: config.collection_ids.clone(),
        })
    }

    /// Captures the schema of a single collection.
    ///
    /// Returns `Ok(None)` when the collection metadata fetch fails with a
    /// non-200 status (the caller skips the collection). Attribute and index
    /// fetches degrade to empty lists on non-200 instead of aborting, so a
    /// partially introspectable collection is still captured.
    pub async fn fetch_collection_schema(
        &self,
        collection_id: &str
    ) -> Result<Option<CollectionSchema>, ExportError> {
        info!("Fetching schema for collection: {}...", collection_id);

        let collection = match self.client.get_collection(&self.database_id, collection_id).await? {
            Some(metadata) => metadata,
            None => {
                return Ok(None);
            }
        };

        let attributes = self.client.list_attributes(&self.database_id, collection_id).await?;
        let indexes = self.client.list_indexes(&self.database_id, collection_id).await?;

        Ok(Some(CollectionSchema { collection, attributes, indexes }))
    }

    /// Fetches every configured collection in declaration order and merges
    /// the results into a single document. Collections whose metadata fetch
    /// failed are absent from the output, with no placeholder.
    pub async fn export(&self) -> Result<SchemaDocument, ExportError> {
        let mut collections = Map::new();

        for collection_id in &self.collection_ids {
            if let Some(schema) = self.fetch_collection_schema(collection_id).await? {
                collections.insert(collection_id.clone(), serde_json::to_value(schema)?);
            }
        }

        if collections.is_empty() {
            warn!("No collection schemas could be fetched.");
        }

        Ok(SchemaDocument {
            database_id: self.database_id.clone(),
            collections,
        })
    }

    /// Health check pass-through, used by the binary before exporting.
    pub async fn ping(&self) -> Result<(), ExportError> {
        self.client.ping().await
    }
}

/// Serializes a schema document to `path` with 4-space indentation,
/// overwriting any existing file. Parent directories are created if needed.
pub fn write_schema(document: &SchemaDocument, path: &str) -> Result<(), ExportError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;

    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, buf)?;

    info!("✅ Schema exported successfully to {}", path);
    Ok(())
}

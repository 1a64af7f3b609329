use serde::{ Deserialize, Serialize };
use serde_json::{ Map, Value };

/// Schema captured for a single Appwrite collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CollectionSchema {
    /// Raw collection metadata exactly as returned by the service.
    pub collection: Value,
    /// Attribute definitions, in the order the service lists them.
    pub attributes: Vec<Value>,
    /// Index definitions, in the order the service lists them.
    pub indexes: Vec<Value>,
}

/// Top-level artifact written to the schema file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SchemaDocument {
    #[serde(rename = "databaseId")]
    pub database_id: String,
    /// Collection id -> captured schema, in configured declaration order.
    pub collections: Map<String, Value>,
}

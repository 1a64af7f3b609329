pub mod client;
pub mod error;
pub mod export;
pub mod schema;
pub use client::AppwriteClient;
pub use error::ExportError;
pub use export::{ ExportConfig, SchemaExporter, write_schema, DEFAULT_OUTPUT_FILE };
pub use schema::{ CollectionSchema, SchemaDocument };

use appwrite_schema_export::{ ExportConfig, SchemaExporter, write_schema, DEFAULT_OUTPUT_FILE };
use log::info;
use tracing_subscriber::EnvFilter;

const ENDPOINT: &str = "https://nyc.cloud.appwrite.io/v1";
const PROJECT_ID: &str = "697668d20008048533e3";
const DATABASE_ID: &str = "6977db47002be9bd55d6";
const API_KEY: &str = "standard_16f41e45cb6ed6a2c63d173605d214bd4d1813cecccf493859899890201815fb69260a49e32f7f18c2a48035d0c096b58f676d7ac905c66fd545ff7f49165b53111e8aac5a983c385bde3823bc50bceae919c5edd2e45f8cca678e77069b38e8affb3a55c9783bf2d5efc9977e01d9ae8130df59a0611a3a1b4634d9a2c58207";

const COLLECTION_IDS: [&str; 6] = [
    "users",
    "docks",
    "vocabularies",
    "study_logs",
    "daily_streaks",
    "quiz_results",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ExportConfig {
        endpoint: ENDPOINT.to_string(),
        project_id: PROJECT_ID.to_string(),
        database_id: DATABASE_ID.to_string(),
        api_key: API_KEY.to_string(),
        collection_ids: COLLECTION_IDS.iter().map(|id| id.to_string()).collect(),
    };

    let exporter = SchemaExporter::new(&config)?;
    exporter.ping().await?;

    info!("Exporting schema for {} collections...", config.collection_ids.len());
    let document = exporter.export().await?;
    write_schema(&document, DEFAULT_OUTPUT_FILE)?;

    Ok(())
}

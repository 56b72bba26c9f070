use super::store::{export_seed_plan, DocumentStore, SeedReport};
use crate::models::Collection;
use crate::seed::seed_plan;
use anyhow::{Context, Result as AnyhowResult};
use bson::{doc, Document};
use chrono::Utc;
use log::{error, info};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "test";

/// A live MongoDB connection bound to one database.
#[derive(Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Opens a connection and checks that the server answers.
    ///
    /// The driver connects lazily, so a `ping` is sent before returning; an unreachable
    /// server is reported here rather than on the first write. If the ping fails the
    /// client is shut down before the error is returned.
    ///
    /// # Arguments
    ///
    /// * `uri` - MongoDB connection string (e.g., "mongodb://localhost:27017/learnerReport").
    ///
    /// # Returns
    ///
    /// * `Ok(MongoStore)` - Connected to the URI's default database, or [`DEFAULT_DATABASE`].
    /// * `Err(anyhow::Error)` - The URI is invalid or the server could not be reached.
    pub async fn connect(uri: &str) -> AnyhowResult<Self> {
        let options = ClientOptions::parse(uri)
            .await
            .context("Failed to parse MongoDB connection string")?;
        let database_name = database_name(&options);
        let client = Client::with_options(options).context("Failed to create MongoDB client")?;
        let database = client.database(&database_name);

        if let Err(e) = database.run_command(doc! { "ping": 1 }).await {
            client.shutdown().await;
            return Err(e).context("Failed to connect to MongoDB");
        }

        info!("Connected to MongoDB database {}", database_name);
        Ok(Self { client, database })
    }

    /// Closes the connection pool, waiting for in-flight operations.
    pub async fn disconnect(self) {
        self.client.shutdown().await;
        info!("Disconnected from MongoDB");
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.database.collection(collection.name())
    }
}

impl DocumentStore for MongoStore {
    async fn clear(&self, collection: Collection) -> AnyhowResult<u64> {
        let result = self.collection(collection).delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn insert(&self, collection: Collection, documents: Vec<Document>) -> AnyhowResult<usize> {
        let result = self.collection(collection).insert_many(documents).await?;
        Ok(result.inserted_ids.len())
    }
}

fn database_name(options: &ClientOptions) -> String {
    options
        .default_database
        .clone()
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
}

/// Printed to stdout once every collection has been written.
pub const SUCCESS_MESSAGE: &str = "Dummy data inserted successfully!";

/// Logs a seeding failure at error level, with its full cause chain.
pub fn log_seed_failure(err: &anyhow::Error) {
    error!("Error inserting dummy data: {:#}", err);
}

/// Seeds a MongoDB database with the fixed dummy records.
///
/// Connects to `uri` and writes the seed plan (administrators replaced, all other
/// collections appended to). The outcome is reported while the connection is still
/// open: [`SUCCESS_MESSAGE`] on stdout, or the error through [`log_seed_failure`].
/// The connection is then closed whether or not seeding succeeded. An invalid
/// connection string fails before any client is created.
///
/// # Arguments
///
/// * `uri` - MongoDB connection string.
///
/// # Returns
///
/// * `Ok(SeedReport)` - Per-collection counts of removed and inserted documents.
/// * `Err(anyhow::Error)` - Connection or write failure, already logged. Collections
///   processed before the failure keep their changes.
///
/// # Examples
///
/// ```rust,no_run
/// use learner_report_seed::export::seed_mongodb;
///
/// #[tokio::main]
/// async fn main() {
///     if let Ok(report) = seed_mongodb("mongodb://localhost:27017/learnerReport").await {
///         println!("Inserted {} documents", report.total_inserted());
///     }
/// }
/// ```
pub async fn seed_mongodb(uri: &str) -> AnyhowResult<SeedReport> {
    let store = match MongoStore::connect(uri).await {
        Ok(store) => store,
        Err(e) => {
            log_seed_failure(&e);
            return Err(e);
        }
    };

    let result = match seed_plan(Utc::now()) {
        Ok(plan) => export_seed_plan(&store, plan).await,
        Err(e) => Err(e),
    };

    match &result {
        Ok(_) => println!("{}", SUCCESS_MESSAGE),
        Err(e) => log_seed_failure(e),
    }

    store.disconnect().await;
    result
}

use anyhow::Result;
use mongodb::bson::{doc, Document};
use mongodb::Client;

pub mod documents;
pub mod maintenance;

/// Handle on one named database inside the document store. Passed explicitly
/// into every operation; the driver pools connections internally.
#[derive(Clone)]
pub struct Database {
    pub client: Client,
    database: mongodb::Database,
}

impl Database {
    pub async fn new(url: &str, database_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(url).await?;
        let database = client.database(database_name);
        Ok(Self { client, database })
    }

    pub fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.database.collection(name)
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// One round trip to the server. The client connects lazily, so this is
    /// the first point a bad connection string or unreachable store shows up.
    pub async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

use crate::error::{LicenseError, LicenseErrorExt};
use crate::License;
use async_trait::async_trait;
use menkyo_database::{Database, DatabaseError};
use tracing::{debug, info};

/// Store table holding the license definitions.
const LICENSE_TABLE: &str = "license";

/// Read access to the license collection of a document store.
#[async_trait]
pub trait LicenseStore: Send + Sync {
    /// Fetches every license record, in whatever order the store returns them.
    async fn fetch_all(&self) -> Result<Vec<License>, DatabaseError>;
}

#[async_trait]
impl LicenseStore for Database {
    async fn fetch_all(&self) -> Result<Vec<License>, DatabaseError> {
        let licenses: Vec<License> =
            self.select(LICENSE_TABLE).await.map_err(DatabaseError::from)?;
        Ok(licenses)
    }
}

/// Data access object over the license collection.
///
/// Exactly one unfiltered query: no retry, no pagination, no re-sorting.
/// Results keep the order the store returned them in. Reading is
/// side-effect-free, so calls are idempotent.
#[derive(Debug, Clone)]
pub struct LicenseRepository<S> {
    store: S,
}

impl<S: LicenseStore> LicenseRepository<S> {
    /// Creates a repository over the given store handle.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetches all license definitions.
    ///
    /// # Errors
    /// Surfaces the store's failure unchanged as the source of
    /// [`LicenseError::Storage`]; no partial results are returned.
    pub async fn licenses(&self) -> Result<Vec<License>, LicenseError> {
        let licenses = self.store.fetch_all().await.context("Fetching license definitions")?;
        debug!(count = licenses.len(), "License definitions fetched");
        Ok(licenses)
    }
}

/// Initialize the licensing feature over an established store connection.
pub fn init(db: Database) -> LicenseRepository<Database> {
    info!("Licensing slice initialized");
    LicenseRepository::new(db)
}

//! # Menkyo Probe
//!
//! A console diagnostic that exercises the license catalog end to end:
//! load configuration, open the document store, fetch every license
//! definition, log them, and wait for the operator before exiting.
//!
//! ## Example
//! ```no_run
//! use menkyo_probe::Probe;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Probe::builder()
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

use anyhow::{Context, Result};
use menkyo::domain::config::Config;
use menkyo::licensing::LicenseRepository;
use menkyo_database::Database;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

/// A fluent builder for configuring and initializing the [`Probe`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ProbeBuilder {
    cfg: Config,
}

impl ProbeBuilder {
    /// Set up the probe's configuration.
    pub fn config(mut self, cfg: Config) -> Self {
        self.cfg = cfg;
        self
    }

    async fn init_database(&self) -> Result<Database> {
        let store_cfg = &self.cfg.datastore;
        let mut builder = Database::builder()
            .url(&store_cfg.url)
            .project(&store_cfg.project_name)
            .database(&store_cfg.database);

        if let Some(credentials) = &store_cfg.credentials {
            builder = builder.auth(&credentials.username, &credentials.password);
        }

        builder.init().await.context("Failed to establish store connection")
    }

    /// Consumes the builder and initializes the probe.
    ///
    /// # Process
    /// 1. Logs the resolved configuration (secrets redacted)
    /// 2. Establishes the store connection keyed by the configured project
    /// 3. Initializes the licensing slice
    ///
    /// # Errors
    /// Returns an error if the store connection cannot be established
    /// (unreachable engine, rejected credentials).
    pub async fn build(self) -> Result<Probe> {
        info!(features = ?menkyo::features::ENABLED, "menkyo-probe started");
        self.cfg.log();

        let db = self.init_database().await?;
        info!(project = %db.project(), "Store client successfully created");

        let repository = menkyo::init(&db);

        Ok(Probe { repository })
    }
}

/// A fully initialized probe instance ready to run.
///
/// This struct is returned by [`ProbeBuilder::build`] and holds the store
/// connection for the remainder of the process lifetime.
#[must_use = "call .run().await to start the probe"]
#[derive(Debug)]
pub struct Probe {
    repository: LicenseRepository<Database>,
}

impl Probe {
    /// Returns a new [`ProbeBuilder`] to configure the probe.
    ///
    /// This is the recommended way to initialize the probe.
    pub fn builder() -> ProbeBuilder {
        ProbeBuilder::default()
    }

    /// Runs the probe until the operator ends it.
    ///
    /// Performs exactly one unfiltered license fetch, logs the result set,
    /// then blocks on a single line of standard input before logging the
    /// shutdown line.
    ///
    /// # Errors
    /// A storage failure is fatal: it is logged and propagated, ending the
    /// process with a non-zero exit code. No retry is attempted.
    pub async fn run(self) -> Result<()> {
        let licenses = match self.repository.licenses().await {
            Ok(licenses) => licenses,
            Err(e) => {
                error!(error = %e, "License fetch failed");
                return Err(e).context("Fetching the license catalog");
            }
        };

        info!(count = licenses.len(), "License definitions fetched");
        for license in &licenses {
            info!(
                name = %license.name,
                kind = %license.kind,
                owner = %license.owner.id,
                payment_model = %license.payment.model,
                exclusive_value = license.exclusive.value,
                "License"
            );
        }

        wait_for_operator().await?;

        info!("menkyo-probe stopped");
        Ok(())
    }
}

/// Blocks until the operator sends one line (Enter) on standard input.
async fn wait_for_operator() -> Result<()> {
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Reading from standard input")?;
    Ok(())
}

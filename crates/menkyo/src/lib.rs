//! Facade crate for Menkyo features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load configuration through [`kernel::config`].
//! - Call [`init`] with an established store connection to register feature
//!   slices; extend as new slices appear.

pub use menkyo_domain as domain;
pub use menkyo_kernel as kernel;
pub use menkyo_licensing as licensing;

use menkyo_database::Database;
use menkyo_licensing::LicenseRepository;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["licensing"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// Today that is the licensing slice alone; its repository is handed back to
/// the caller directly.
#[must_use]
pub fn init(database: &Database) -> LicenseRepository<Database> {
    licensing::init(database.clone())
}

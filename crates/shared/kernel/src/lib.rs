//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the configuration loader and
//! the domain model for downstream crates.
//!
//! ## Config loading
//! ```rust,ignore
//! use menkyo_kernel::config::load_config_or_default;
//! use menkyo_kernel::domain::config::Config;
//!
//! let cfg: Config = load_config_or_default(Some("menkyo"));
//! ```

pub mod config;

pub use menkyo_domain as domain;

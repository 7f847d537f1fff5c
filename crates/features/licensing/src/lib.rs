//! # License Catalog
//!
//! This crate provides the license-definition records stored in the Menkyo
//! document store, together with a thin read-only repository over them.
//!
//! ## Architecture
//!
//! 1.  **Records:** [`License`] and its value objects mirror the store schema
//!     one-to-one; they are deserialized projections and are never mutated by
//!     this crate.
//! 2.  **Repository ([`LicenseRepository`]):** one unfiltered fetch over the
//!     `license` table, behind the [`LicenseStore`] seam so tests can swap
//!     the engine out.
//!
//! Wire field names are camelCase (`adsPolicy`, `allowModifications`, …) and
//! round-trip losslessly through JSON.

mod error;
mod repository;

pub use crate::error::{LicenseError, LicenseErrorExt};
pub use crate::repository::{LicenseRepository, LicenseStore, init};

use serde::{Deserialize, Serialize};

/// A content-licensing agreement between an item owner and its distributors.
///
/// Fields missing from a stored record deserialize to their zero values, so
/// sparsely filled rows still project into a usable record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct License {
    /// Name of the license definition.
    pub name: String,
    /// The type of the license.
    #[serde(rename = "type")]
    pub kind: String,
    /// Price the licensor asks for selling the item with exclusive access
    /// for one publisher. A zero value means exclusivity is not on offer.
    pub exclusive: Price,
    /// Terms of payment for item views.
    pub payment: Payment,
    /// The legal entity owning the item.
    pub owner: LegalEntity,
    /// Rules for item distribution.
    pub distribution: String,
    /// Rules for ads insertion into the item.
    pub ads_policy: AdsPolicy,
    /// Whether the distributor may modify the item. Changes to the license
    /// itself always need the owner's approval.
    pub allow_modifications: bool,
    /// Free-text conditions the owner and distributor agreed to.
    pub custom_conditions: String,
}

/// A monetary amount: value in minor currency units ("cents") plus the
/// currency code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    pub value: i64,
    pub currency: String,
}

/// Terms of payment for item views.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    /// Payment model name. The meaning of `price` depends on the model;
    /// the model vocabulary itself is not validated here.
    pub model: String,
    pub price: Price,
}

/// A legal entity reference: entity type plus an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// Rules for including ads in an item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdsPolicy {
    /// Whether ads are allowed in the item at all.
    pub allowed: bool,
    // TODO: model the ad restrictions once the rule schema is agreed with owners.
}

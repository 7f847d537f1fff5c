//! # Domain Models
//!
//! This crate contains the configuration model shared by every Menkyo
//! component. Keep it lean: no I/O, networking, or heavy logic—just data,
//! documented defaults, and the redacting settings logger.

pub mod config;

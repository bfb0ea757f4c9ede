//! Domain logic for the investment project registry.
//!
//! Everything in this crate is pure: records, metadata, validation,
//! duplicate detection and dashboard aggregation take their inputs as
//! arguments and never touch the database or the network.

pub mod cache;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod metadata;
pub mod project;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

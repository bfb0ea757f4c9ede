//! Database row structs.
//!
//! Rows decode with `FromRow` and convert into the domain types from
//! `investtrack_core`, which are what the rest of the system passes around.

pub mod project;

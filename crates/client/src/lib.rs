//! Typed client for the investment project registry API.
//!
//! [`api::ProjectsApi`] wraps each HTTP endpoint. [`session::Session`]
//! holds the full record set in memory, validates form submissions
//! against it before they leave the process, and merges the server's
//! canonical record back after each mutation.

pub mod api;
pub mod session;

pub use api::{ApiClientError, ProjectsApi};
pub use session::{Session, SessionError};

pub mod dashboard;
pub mod metadata;
pub mod project;

//! Domain types shared by the todo workspace.
//!
//! Everything here is pure: no database access, no HTTP. The db crate builds
//! the entity model on top of these types and the api crate turns
//! [`envelope::Outcome`] values into HTTP responses.

pub mod envelope;
pub mod lifecycle;
pub mod types;
pub mod validation;

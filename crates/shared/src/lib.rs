//! Shared types for the Helvania social-profile widget.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;

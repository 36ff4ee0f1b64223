//! Domain layer - pure composer abstractions
//!
//! Error types and the collaborator contracts the composer is written
//! against. The reqwest implementations live in the api layer.

pub mod errors;
pub mod providers;

pub use errors::{ApiError, ComposerError};
pub use providers::{BookSetFilter, BookSetProvider, MasterDataProvider};

pub mod api;
pub mod composer;
pub mod config;
pub mod domain;
pub mod master_forms;
pub mod models;
pub mod services;

pub use api::ApiClient;
pub use composer::{BookSetDraft, ComposerSession, SelectionRegistry};
pub use config::Config;
pub use domain::{ApiError, ComposerError};

//! reqwest implementation of the provider contracts.

mod book_sets;
mod client;
mod master_data;

pub use client::ApiClient;

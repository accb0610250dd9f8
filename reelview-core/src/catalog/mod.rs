//! Remote catalog access.

pub mod cache;
pub mod client;
pub mod query;
pub mod source;
pub mod state;
pub mod tmdb;

pub use cache::QueryCache;
pub use client::CatalogClient;
pub use query::{CatalogQuery, DetailKey};
pub use source::CatalogSource;
pub use state::QueryState;
pub use tmdb::{TmdbSettings, TmdbSource};

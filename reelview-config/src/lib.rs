//! Shared configuration library for reelview.
//!
//! Settings come from three layers, lowest priority first: built-in
//! defaults, a `reelview.toml` file, and the process environment (optionally
//! seeded from a `.env` file). [`ConfigLoader`] merges the layers, applies
//! guard rails, and reports soft problems as [`ConfigWarnings`].

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::{
    CarouselConfig, CatalogConfig, Config, ConfigMetadata, ImageConfig,
    DEFAULT_API_BASE, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT,
};
pub use sources::{EnvConfig, FileConfig, RejectedVar};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};

use std::path::PathBuf;
use std::time::Duration;

use reelview_model::{DEFAULT_IMAGE_BASE, ImageSize};

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub images: ImageConfig,
    pub carousel: CarouselConfig,
    pub metadata: ConfigMetadata,
}

/// Remote catalog access.
#[derive(Clone)]
pub struct CatalogConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub language: Option<String>,
    pub region: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("language", &self.language)
            .field("region", &self.region)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    pub base_url: String,
    /// Size used for slider cards.
    pub slider_size: ImageSize,
    /// Size used for the page banner and the overlay cover.
    pub banner_size: ImageSize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IMAGE_BASE.to_string(),
            slider_size: ImageSize::card(),
            banner_size: ImageSize::Original,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Cards per slider page.
    pub page_size: usize,
    /// Drop the banner category's first item from its slider.
    pub banner_excludes_first: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            banner_excludes_first: true,
        }
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

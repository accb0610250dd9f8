//! Mapping from loaded configuration onto core settings.

use reelview_config::Config;
use reelview_core::catalog::TmdbSettings;
use reelview_core::page::PageSettings;
use reelview_model::ImagePathResolver;

pub fn tmdb_settings(config: &Config) -> TmdbSettings {
    let catalog = &config.catalog;
    TmdbSettings {
        api_key: catalog.api_key.clone(),
        base_url: catalog.api_base_url.clone(),
        language: catalog.language.clone(),
        region: catalog.region.clone(),
        timeout: catalog.timeout,
    }
}

pub fn page_settings(config: &Config) -> PageSettings {
    PageSettings {
        page_size: config.carousel.page_size,
        banner_excludes_first: config.carousel.banner_excludes_first,
        resolver: ImagePathResolver::new(config.images.base_url.clone()),
        slider_size: config.images.slider_size,
        banner_size: config.images.banner_size,
    }
}

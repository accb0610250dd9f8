pub mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reelview_model::ImageSize;
use tracing::debug;

use self::error::ConfigLoadError;
use crate::models::{
    CarouselConfig, CatalogConfig, Config, ConfigMetadata, DEFAULT_API_BASE,
    DEFAULT_TIMEOUT, ImageConfig,
};
use crate::sources::{EnvConfig, FileConfig};
use crate::validation::{ConfigGuardRailError, ConfigWarnings, check_base_url};

const DEFAULT_CONFIG_LOCATIONS: &[&str] =
    &["reelview.toml", "config/reelview.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, then the process environment, then the file layer.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose a configuration from an already gathered environment layer.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push_with_hint(
                "No reelview.toml detected; falling back to environment variables",
                "Create reelview.toml or set TMDB_API_KEY in the environment",
            );
        }

        let config = compose_config(
            file_config.unwrap_or_default(),
            env,
            config_path,
            &mut warnings,
        )?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let path = if let Some(explicit) = &self.options.config_path {
            if !explicit.exists() {
                return Err(ConfigLoadError::MissingConfig {
                    path: explicit.clone(),
                });
            }
            explicit.clone()
        } else if let Some(from_env) = &env.config_path {
            if !from_env.exists() {
                return Ok((None, None));
            }
            from_env.clone()
        } else {
            match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(Path::new)
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.to_path_buf(),
                None => return Ok((None, None)),
            }
        };

        debug!(path = %path.display(), "reading configuration file");
        let contents = fs::read_to_string(&path).map_err(|err| {
            ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            }
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    warnings: &mut ConfigWarnings,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        catalog: file_catalog,
        images: file_images,
        carousel: file_carousel,
    } = file;

    for var in &env.rejected {
        warnings.push_with_hint(
            format!("ignoring {}={:?}", var.name, var.value),
            format!("Expected {}", var.expected),
        );
    }

    let api_key = env
        .api_key
        .or(file_catalog.api_key)
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigGuardRailError::MissingApiKey)?;

    let api_base_url = env
        .api_base_url
        .or(file_catalog.api_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    check_base_url("api_base_url", &api_base_url)?;

    let timeout = match env.timeout.or(file_catalog.timeout) {
        Some(raw) => parse_timeout(&raw)?,
        None => DEFAULT_TIMEOUT,
    };

    let catalog = CatalogConfig {
        api_key,
        api_base_url: api_base_url.trim_end_matches('/').to_string(),
        language: env.language.or(file_catalog.language),
        region: env.region.or(file_catalog.region),
        timeout,
    };

    let image_defaults = ImageConfig::default();
    let base_url = env
        .image_base_url
        .or(file_images.base_url)
        .unwrap_or(image_defaults.base_url);
    check_base_url("image base_url", &base_url)?;
    let images = ImageConfig {
        base_url,
        slider_size: parse_size(
            "images.slider_size",
            file_images.slider_size,
            image_defaults.slider_size,
        )?,
        banner_size: parse_size(
            "images.banner_size",
            file_images.banner_size,
            image_defaults.banner_size,
        )?,
    };

    let carousel_defaults = CarouselConfig::default();
    let page_size = env
        .page_size
        .or(file_carousel.page_size)
        .unwrap_or(carousel_defaults.page_size);
    if page_size == 0 {
        return Err(ConfigGuardRailError::ZeroPageSize.into());
    }
    if page_size > 20 {
        warnings.push_with_hint(
            format!("carousel page size {page_size} exceeds one catalog page"),
            "Catalog queries return 20 items; sliders will show a single page",
        );
    }
    let carousel = CarouselConfig {
        page_size,
        banner_excludes_first: env
            .banner_excludes_first
            .or(file_carousel.banner_excludes_first)
            .unwrap_or(carousel_defaults.banner_excludes_first),
    };

    Ok(Config {
        catalog,
        images,
        carousel,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    })
}

fn parse_size(
    field: &'static str,
    raw: Option<String>,
    default: ImageSize,
) -> Result<ImageSize, ConfigGuardRailError> {
    match raw {
        Some(value) => ImageSize::parse(value.trim()).map_err(|_| {
            ConfigGuardRailError::InvalidImageSize { field, value }
        }),
        None => Ok(default),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigGuardRailError> {
    humantime::parse_duration(raw.trim()).map_err(|err| {
        ConfigGuardRailError::InvalidTimeout {
            value: raw.to_string(),
            reason: err.to_string(),
        }
    })
}

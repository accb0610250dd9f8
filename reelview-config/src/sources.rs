use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub images: FileImageConfig,
    #[serde(default)]
    pub carousel: FileCarouselConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Humantime string, e.g. `"10s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileImageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slider_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_size: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_excludes_first: Option<bool>,
}

/// Values read from the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub timeout: Option<String>,
    pub image_base_url: Option<String>,
    pub page_size: Option<usize>,
    pub banner_excludes_first: Option<bool>,
    /// Variables that were set but could not be parsed; treated as unset.
    pub rejected: Vec<RejectedVar>,
}

/// An environment value that did not parse as its expected type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedVar {
    pub name: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name).filter(|value| !value.trim().is_empty())
        };
        let mut rejected = Vec::new();
        let page_size = parse_var(
            "REELVIEW_PAGE_SIZE",
            var("REELVIEW_PAGE_SIZE"),
            "a positive integer",
            |raw| raw.trim().parse().ok(),
            &mut rejected,
        );
        let banner_excludes_first = parse_var(
            "REELVIEW_BANNER_EXCLUDES_FIRST",
            var("REELVIEW_BANNER_EXCLUDES_FIRST"),
            "true/false, yes/no, on/off or 1/0",
            parse_bool,
            &mut rejected,
        );

        Self {
            config_path: var("REELVIEW_CONFIG_PATH").map(PathBuf::from),
            api_key: var("TMDB_API_KEY"),
            api_base_url: var("TMDB_API_BASE"),
            language: var("TMDB_LANG"),
            region: var("TMDB_REGION"),
            timeout: var("TMDB_TIMEOUT"),
            image_base_url: var("TMDB_IMAGE_BASE"),
            page_size,
            banner_excludes_first,
            rejected,
        }
    }
}

fn parse_var<T>(
    name: &'static str,
    raw: Option<String>,
    expected: &'static str,
    parse: impl Fn(&str) -> Option<T>,
    rejected: &mut Vec<RejectedVar>,
) -> Option<T> {
    let raw = raw?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        rejected.push(RejectedVar {
            name,
            value: raw,
            expected,
        });
    }
    parsed
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! HTTP implementation of [`CatalogSource`] for the TMDB v3 API.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reelview_model::{
    ContentDetail, ContentId, ContentItem, ContentList, DateRange, Genre,
    MediaKind, ResultPage,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::query::{CatalogQuery, DetailKey};
use super::source::CatalogSource;
use crate::error::{CatalogError, Result};

pub const TMDB_V3_BASE: &str = "https://api.themoviedb.org/3";

#[derive(Clone)]
pub struct TmdbSettings {
    pub api_key: String,
    pub base_url: String,
    pub language: Option<String>,
    pub region: Option<String>,
    pub timeout: Duration,
}

impl TmdbSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: TMDB_V3_BASE.to_string(),
            language: None,
            region: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl fmt::Debug for TmdbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("region", &self.region)
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub struct TmdbSource {
    http: reqwest::Client,
    settings: TmdbSettings,
}

impl fmt::Debug for TmdbSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbSource")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl TmdbSource {
    pub fn new(settings: TmdbSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self::with_client(http, settings))
    }

    pub fn with_client(http: reqwest::Client, settings: TmdbSettings) -> Self {
        Self { http, settings }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    fn common_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("api_key", self.settings.api_key.clone())];
        if let Some(language) = &self.settings.language {
            params.push(("language", language.clone()));
        }
        if let Some(region) = &self.settings.region {
            params.push(("region", region.clone()));
        }
        params
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&'static str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "catalog request");

        let response = self
            .http
            .get(&url)
            .query(&self.common_params())
            .query(extra)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let err = classify_failure(status.as_u16(), &body);
            error!(
                %url,
                status = status.as_u16(),
                error = %err,
                "catalog request failed"
            );
            return Err(err);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogSource for TmdbSource {
    async fn list(&self, query: &CatalogQuery) -> Result<ResultPage> {
        let extra = match query {
            CatalogQuery::Category(_) => Vec::new(),
            CatalogQuery::Search { text, .. } => vec![("query", text.clone())],
        };
        let page: WirePage = self.get_json(&query.api_path(), &extra).await?;
        Ok(page.into())
    }

    async fn detail(&self, key: DetailKey) -> Result<ContentDetail> {
        let wire: WireDetail = self.get_json(&key.api_path(), &[]).await?;
        Ok(wire.into_detail(key.kind))
    }
}

/// Map a non-success response onto the error taxonomy.
pub fn classify_failure(status: u16, body: &str) -> CatalogError {
    #[derive(Debug, Deserialize)]
    struct TmdbErrorBody {
        #[serde(default)]
        status_message: Option<String>,
    }

    match status {
        401 => CatalogError::InvalidApiKey,
        404 => CatalogError::NotFound,
        429 => CatalogError::RateLimited,
        _ => {
            let message = serde_json::from_str::<TmdbErrorBody>(body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or_else(|| {
                    format!("TMDB request failed with status {status}")
                });
            CatalogError::Api { status, message }
        }
    }
}

/// Decode a list payload.
pub fn decode_page(body: &str) -> Result<ResultPage> {
    let page: WirePage = serde_json::from_str(body)?;
    Ok(page.into())
}

/// Decode a detail payload.
pub fn decode_detail(kind: MediaKind, body: &str) -> Result<ContentDetail> {
    let wire: WireDetail = serde_json::from_str(body)?;
    Ok(wire.into_detail(kind))
}

#[derive(Debug, Deserialize)]
struct WirePage {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    results: Vec<WireItem>,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u32,
    dates: Option<WireDates>,
}

#[derive(Debug, Deserialize)]
struct WireDates {
    maximum: String,
    minimum: String,
}

/// Movies carry `title`/`release_date`, series `name`/`first_air_date`.
#[derive(Debug, Deserialize)]
struct WireItem {
    id: i64,
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    backdrop_path: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    vote_average: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WireGenre {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireDetail {
    id: i64,
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    tagline: Option<String>,
    backdrop_path: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    runtime: Option<u32>,
    #[serde(default)]
    episode_run_time: Vec<u32>,
    vote_average: Option<f64>,
    #[serde(default)]
    genres: Vec<WireGenre>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<WireItem> for ContentItem {
    fn from(w: WireItem) -> Self {
        ContentItem {
            id: ContentId(w.id),
            title: w.title.or(w.name).unwrap_or_default(),
            overview: w.overview.unwrap_or_default(),
            backdrop_path: non_empty(w.backdrop_path),
            poster_path: non_empty(w.poster_path),
            release_date: non_empty(w.release_date)
                .or_else(|| non_empty(w.first_air_date)),
            rating: w.vote_average,
        }
    }
}

impl From<WirePage> for ResultPage {
    fn from(w: WirePage) -> Self {
        ResultPage {
            page: w.page,
            results: w
                .results
                .into_iter()
                .map(ContentItem::from)
                .collect::<ContentList>(),
            total_pages: w.total_pages,
            total_results: w.total_results,
            dates: w.dates.map(|d| DateRange {
                minimum: d.minimum,
                maximum: d.maximum,
            }),
        }
    }
}

impl WireDetail {
    fn into_detail(self, kind: MediaKind) -> ContentDetail {
        let runtime = self
            .runtime
            .or_else(|| self.episode_run_time.first().copied());
        ContentDetail {
            id: ContentId(self.id),
            kind,
            title: self.title.or(self.name).unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
            tagline: non_empty(self.tagline),
            backdrop_path: non_empty(self.backdrop_path),
            poster_path: non_empty(self.poster_path),
            release_date: non_empty(self.release_date)
                .or_else(|| non_empty(self.first_air_date)),
            runtime,
            rating: self.vote_average,
            genres: self
                .genres
                .into_iter()
                .map(|g| Genre {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
        }
    }
}

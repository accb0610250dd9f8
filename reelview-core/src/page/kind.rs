use reelview_model::{Category, MediaKind};
use serde::Serialize;

use crate::catalog::CatalogQuery;
use crate::routing::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Tv,
    Search,
}

/// How a page gates rendering on its fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPolicy {
    /// One loading state until every slider has data.
    Unified,
    /// Each slider shows its own loading state.
    PerSlider,
}

/// Static description of one slider on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderSpec {
    pub key: String,
    pub title: String,
    pub query: CatalogQuery,
    /// The page banner shows this slider's first item.
    pub banner_source: bool,
}

impl SliderSpec {
    pub fn category(category: Category) -> Self {
        Self {
            key: category.slug().to_string(),
            title: category.label().to_string(),
            query: CatalogQuery::Category(category),
            banner_source: false,
        }
    }

    pub fn search(kind: MediaKind, keyword: &str) -> Self {
        let (key, title) = match kind {
            MediaKind::Movie => ("search-movies", "MOVIES"),
            MediaKind::Tv => ("search-tv", "TV SHOWS"),
        };
        Self {
            key: key.to_string(),
            title: title.to_string(),
            query: CatalogQuery::search(kind, keyword),
            banner_source: false,
        }
    }

    fn as_banner(mut self) -> Self {
        self.banner_source = true;
        self
    }
}

impl PageKind {
    pub const fn section(self) -> Section {
        match self {
            PageKind::Home => Section::Home,
            PageKind::Tv => Section::Tv,
            PageKind::Search => Section::Search,
        }
    }

    pub const fn from_section(section: Section) -> Self {
        match section {
            Section::Home => PageKind::Home,
            Section::Tv => PageKind::Tv,
            Section::Search => PageKind::Search,
        }
    }

    pub const fn loading_policy(self) -> LoadingPolicy {
        match self {
            PageKind::Home | PageKind::Tv => LoadingPolicy::Unified,
            PageKind::Search => LoadingPolicy::PerSlider,
        }
    }

    /// Media kind of items routed on this page when no slider claims them.
    /// Search mixes both, so it has none.
    pub const fn default_media(self) -> Option<MediaKind> {
        match self {
            PageKind::Home => Some(MediaKind::Movie),
            PageKind::Tv => Some(MediaKind::Tv),
            PageKind::Search => None,
        }
    }

    /// Sliders in display order. Search without a keyword has none.
    pub fn sliders(self, keyword: Option<&str>) -> Vec<SliderSpec> {
        match self {
            PageKind::Home => vec![
                SliderSpec::category(Category::NowPlayingMovies).as_banner(),
                SliderSpec::category(Category::TopRatedMovies),
                SliderSpec::category(Category::PopularMovies),
                SliderSpec::category(Category::UpcomingMovies),
            ],
            PageKind::Tv => vec![
                SliderSpec::category(Category::AiringTodayTv).as_banner(),
                SliderSpec::category(Category::PopularTv),
                SliderSpec::category(Category::TopRatedTv),
                SliderSpec::category(Category::OnTheAirTv),
            ],
            PageKind::Search => match keyword.map(str::trim) {
                Some(keyword) if !keyword.is_empty() => vec![
                    SliderSpec::search(MediaKind::Movie, keyword),
                    SliderSpec::search(MediaKind::Tv, keyword),
                ],
                _ => Vec::new(),
            },
        }
    }
}

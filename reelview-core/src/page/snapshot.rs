//! Serializable view model of a page.

use reelview_model::{
    ContentDetail, ContentId, ContentItem, ImagePathResolver, ImageSize,
};
use serde::Serialize;

use super::kind::PageKind;
use crate::carousel::Direction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub page: PageKind,
    pub path: String,
    /// Page-wide loading state; only set by pages with a unified policy.
    pub loading: bool,
    pub banner: Option<BannerSnapshot>,
    pub sliders: Vec<SliderSnapshot>,
    pub overlay: Option<OverlaySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerSnapshot {
    pub id: ContentId,
    pub title: String,
    pub overview: String,
    pub image_url: String,
}

impl BannerSnapshot {
    pub(crate) fn new(
        item: &ContentItem,
        resolver: &ImagePathResolver,
        size: ImageSize,
    ) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            overview: item.overview.clone(),
            image_url: item.backdrop_url(resolver, Some(size)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderSnapshot {
    pub key: String,
    pub title: String,
    pub loading: bool,
    pub page_index: usize,
    pub page_count: usize,
    pub direction: Direction,
    pub animating: bool,
    pub cards: Vec<CardSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSnapshot {
    pub id: ContentId,
    pub title: String,
    pub image_url: String,
}

impl CardSnapshot {
    pub(crate) fn new(
        item: &ContentItem,
        resolver: &ImagePathResolver,
        size: ImageSize,
    ) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            image_url: item.card_image_url(resolver, size),
        }
    }
}

/// Open overlay. `item` and `detail` are filled in as far as data allows;
/// both absent means an empty shell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlaySnapshot {
    /// Id exactly as routed.
    pub item_id: String,
    /// Key of the slider the item was found in.
    pub slider: Option<String>,
    pub item: Option<OverlayItem>,
    pub detail: Option<OverlayDetail>,
}

/// Overlay fields taken straight from the list item, available as soon as
/// the slider has loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayItem {
    pub id: ContentId,
    pub title: String,
    pub overview: String,
    pub image_url: String,
    pub release_date: Option<String>,
    pub rating: Option<String>,
}

impl OverlayItem {
    pub(crate) fn new(
        item: &ContentItem,
        resolver: &ImagePathResolver,
        size: ImageSize,
    ) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            overview: item.overview.clone(),
            image_url: item.backdrop_url(resolver, Some(size)),
            release_date: item.release_date.clone(),
            rating: item.rating_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayDetail {
    pub tagline: Option<String>,
    pub release_year: Option<String>,
    pub runtime: Option<String>,
    pub rating: Option<String>,
    pub genres: Vec<String>,
}

impl From<&ContentDetail> for OverlayDetail {
    fn from(detail: &ContentDetail) -> Self {
        Self {
            tagline: detail.tagline.clone(),
            release_year: detail.release_year().map(str::to_string),
            runtime: detail.runtime_label(),
            rating: detail.rating_label(),
            genres: detail.genres.iter().map(|g| g.name.clone()).collect(),
        }
    }
}

use std::ops::Deref;
use std::sync::Arc;

use crate::ids::ContentId;
use crate::image::{ImagePathResolver, ImageSize};

/// One catalog entry as returned by a list query. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentItem {
    pub id: ContentId,
    /// Movie title or series name.
    pub title: String,
    pub overview: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    /// Release date for movies, first air date for series.
    pub release_date: Option<String>,
    pub rating: Option<f64>,
}

impl ContentItem {
    pub fn new(id: impl Into<ContentId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            overview: String::new(),
            backdrop_path: None,
            poster_path: None,
            release_date: None,
            rating: None,
        }
    }

    /// Image for a slider card: backdrop, falling back to the poster.
    pub fn card_image_path(&self) -> &str {
        non_empty(self.backdrop_path.as_deref())
            .or_else(|| non_empty(self.poster_path.as_deref()))
            .unwrap_or_default()
    }

    pub fn card_image_url(
        &self,
        resolver: &ImagePathResolver,
        size: ImageSize,
    ) -> String {
        resolver.resolve(self.card_image_path(), Some(size))
    }

    pub fn backdrop_url(
        &self,
        resolver: &ImagePathResolver,
        size: Option<ImageSize>,
    ) -> String {
        resolver.resolve(self.backdrop_path.as_deref().unwrap_or_default(), size)
    }

    /// `"7.3 / 10"` style label.
    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|r| format!("{r:.1} / 10"))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Ordered result of one catalog query. Order is server-determined and is
/// the paging order; cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentList {
    items: Arc<[ContentItem]>,
}

impl ContentList {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn as_slice(&self) -> &[ContentItem] {
        &self.items
    }

    /// Banner item of a category.
    pub fn first(&self) -> Option<&ContentItem> {
        self.items.first()
    }

    pub fn find_by_id(&self, id: ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Lookup by a raw route segment, compared by value.
    pub fn find_by_segment(&self, segment: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id.matches_segment(segment))
    }
}

impl Deref for ContentList {
    type Target = [ContentItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl From<Vec<ContentItem>> for ContentList {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<ContentItem> for ContentList {
    fn from_iter<T: IntoIterator<Item = ContentItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Window reported by "now playing"/"upcoming" style queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    pub minimum: String,
    pub maximum: String,
}

/// One page of a paginated catalog response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub page: u32,
    pub results: ContentList,
    pub total_pages: u32,
    pub total_results: u32,
    pub dates: Option<DateRange>,
}

impl ResultPage {
    pub fn single(results: ContentList) -> Self {
        let total = results.len() as u32;
        Self {
            page: 1,
            results,
            total_pages: 1,
            total_results: total,
            dates: None,
        }
    }
}

use std::fmt;

use reelview_model::{Category, ContentId, MediaKind};

/// Cache key for a list query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogQuery {
    Category(Category),
    Search { kind: MediaKind, text: String },
}

impl CatalogQuery {
    pub fn search(kind: MediaKind, text: impl Into<String>) -> Self {
        Self::Search {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            CatalogQuery::Category(category) => category.kind(),
            CatalogQuery::Search { kind, .. } => *kind,
        }
    }

    /// Endpoint path relative to the API base.
    pub fn api_path(&self) -> String {
        match self {
            CatalogQuery::Category(category) => category.api_path().to_string(),
            CatalogQuery::Search { kind, .. } => {
                format!("/search/{}", kind.api_segment())
            }
        }
    }
}

impl From<Category> for CatalogQuery {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogQuery::Category(category) => {
                write!(f, "{}", category.slug())
            }
            CatalogQuery::Search { kind, text } => {
                write!(f, "search/{}?{text}", kind.api_segment())
            }
        }
    }
}

/// Cache key for a detail query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailKey {
    pub kind: MediaKind,
    pub id: ContentId,
}

impl DetailKey {
    pub fn new(kind: MediaKind, id: ContentId) -> Self {
        Self { kind, id }
    }

    pub fn api_path(&self) -> String {
        format!("/{}/{}", self.kind.api_segment(), self.id)
    }
}

impl fmt::Display for DetailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind.api_segment(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(
            CatalogQuery::from(Category::UpcomingMovies).api_path(),
            "/movie/upcoming"
        );
        assert_eq!(
            CatalogQuery::search(MediaKind::Tv, "dark").api_path(),
            "/search/tv"
        );
        assert_eq!(
            DetailKey::new(MediaKind::Movie, ContentId(550)).api_path(),
            "/movie/550"
        );
    }
}

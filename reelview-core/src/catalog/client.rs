use std::fmt;
use std::sync::Arc;

use reelview_model::{ContentDetail, ContentList};
use tracing::info;

use super::cache::QueryCache;
use super::query::{CatalogQuery, DetailKey};
use super::source::CatalogSource;
use super::state::QueryState;
use crate::error::Result;

/// Cached, coalescing front for a [`CatalogSource`].
///
/// Repeated requests for a loaded query are answered from memory;
/// concurrent requests for the same query share one transport call.
/// Different queries proceed independently with no ordering between their
/// completions.
#[derive(Clone)]
pub struct CatalogClient {
    source: Arc<dyn CatalogSource>,
    lists: Arc<QueryCache<CatalogQuery, ContentList>>,
    details: Arc<QueryCache<DetailKey, ContentDetail>>,
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("lists", &self.lists)
            .field("details", &self.details)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            lists: Arc::new(QueryCache::new("lists")),
            details: Arc::new(QueryCache::new("details")),
        }
    }

    pub async fn fetch(&self, query: CatalogQuery) -> Result<ContentList> {
        let source = Arc::clone(&self.source);
        let request = query.clone();
        self.lists
            .get_or_fetch(query, move || async move {
                let page = source.list(&request).await?;
                info!(
                    query = %request,
                    items = page.results.len(),
                    total = page.total_results,
                    "catalog list loaded"
                );
                Ok(page.results)
            })
            .await
    }

    pub async fn detail(&self, key: DetailKey) -> Result<ContentDetail> {
        let source = Arc::clone(&self.source);
        self.details
            .get_or_fetch(key, move || async move {
                let detail = source.detail(key).await?;
                info!(key = %key, "catalog detail loaded");
                Ok(detail)
            })
            .await
    }

    pub fn list_state(&self, query: &CatalogQuery) -> QueryState<ContentList> {
        self.lists.state(query)
    }

    pub fn detail_state(&self, key: &DetailKey) -> QueryState<ContentDetail> {
        self.details.state(key)
    }

    pub fn invalidate(&self, query: &CatalogQuery) -> bool {
        self.lists.invalidate(query)
    }

    pub fn clear(&self) {
        self.lists.clear();
        self.details.clear();
    }
}

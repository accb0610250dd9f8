use async_trait::async_trait;
use reelview_model::{ContentDetail, ResultPage};

use super::query::{CatalogQuery, DetailKey};
use crate::error::Result;

/// Transport boundary to the remote catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the first page of a list query.
    async fn list(&self, query: &CatalogQuery) -> Result<ResultPage>;

    /// Fetch the extended record of a single item.
    async fn detail(&self, key: DetailKey) -> Result<ContentDetail>;
}

//! Caching and coalescing behaviour of the catalog client.

mod support;

use std::sync::Arc;

use reelview_core::catalog::{CatalogClient, CatalogQuery, DetailKey, QueryState};
use reelview_core::error::CatalogError;
use reelview_model::{Category, ContentId, MediaKind};
use support::{FakeSource, detail, items};

fn popular() -> CatalogQuery {
    Category::PopularMovies.into()
}

#[tokio::test]
async fn repeated_fetch_is_served_from_cache() {
    let source = Arc::new(FakeSource::new().with_list(popular(), Ok(items(1..=3))));
    let client = CatalogClient::new(source.clone());

    let first = client.fetch(popular()).await.unwrap();
    let second = client.fetch(popular()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(source.list_calls(&popular()), 1);
    assert!(client.list_state(&popular()).is_ready());
}

#[tokio::test]
async fn concurrent_fetches_share_one_request() {
    let source = Arc::new(FakeSource::new().with_list(popular(), Ok(items(1..=3))));
    let client = CatalogClient::new(source.clone());
    source.close_gate();

    let (a, b, c, ()) = tokio::join!(
        client.fetch(popular()),
        client.fetch(popular()),
        client.fetch(popular()),
        async {
            tokio::task::yield_now().await;
            assert_eq!(client.list_state(&popular()), QueryState::Loading);
            source.open_gate();
        }
    );

    assert_eq!(a.unwrap().len(), 3);
    assert_eq!(b.unwrap().len(), 3);
    assert_eq!(c.unwrap().len(), 3);
    assert_eq!(source.list_calls(&popular()), 1);
}

#[tokio::test]
async fn failure_reaches_every_waiter_and_is_not_cached() {
    let source = Arc::new(
        FakeSource::new().with_list(popular(), Err(CatalogError::RateLimited)),
    );
    let client = CatalogClient::new(source.clone());
    source.close_gate();

    let (a, b, ()) = tokio::join!(
        client.fetch(popular()),
        client.fetch(popular()),
        async {
            tokio::task::yield_now().await;
            source.open_gate();
        }
    );
    assert_eq!(a, Err(CatalogError::RateLimited));
    assert_eq!(b, Err(CatalogError::RateLimited));
    assert_eq!(source.list_calls(&popular()), 1);
    assert_eq!(
        client.list_state(&popular()),
        QueryState::Failed(CatalogError::RateLimited)
    );

    let _ = client.fetch(popular()).await;
    assert_eq!(source.list_calls(&popular()), 2);
}

#[tokio::test]
async fn different_queries_are_independent() {
    let top = CatalogQuery::from(Category::TopRatedMovies);
    let source = Arc::new(
        FakeSource::new()
            .with_list(popular(), Ok(items(1..=2)))
            .with_list(top.clone(), Err(CatalogError::NotFound)),
    );
    let client = CatalogClient::new(source.clone());

    let (ok, failed) = tokio::join!(client.fetch(popular()), client.fetch(top.clone()));
    assert!(ok.is_ok());
    assert_eq!(failed, Err(CatalogError::NotFound));
    assert!(client.list_state(&popular()).is_ready());
    assert!(client.list_state(&top).error().is_some());
}

#[tokio::test]
async fn invalidate_refetches() {
    let source = Arc::new(FakeSource::new().with_list(popular(), Ok(items(1..=2))));
    let client = CatalogClient::new(source.clone());

    client.fetch(popular()).await.unwrap();
    assert!(client.invalidate(&popular()));
    assert_eq!(client.list_state(&popular()), QueryState::Idle);
    client.fetch(popular()).await.unwrap();
    assert_eq!(source.list_calls(&popular()), 2);
}

#[tokio::test]
async fn details_are_cached_per_kind_and_id() {
    let source = Arc::new(
        FakeSource::new()
            .with_detail(detail(MediaKind::Movie, 438631))
            .with_detail(detail(MediaKind::Tv, 438631)),
    );
    let client = CatalogClient::new(source.clone());
    let movie = DetailKey::new(MediaKind::Movie, ContentId(438631));
    let tv = DetailKey::new(MediaKind::Tv, ContentId(438631));

    let first = client.detail(movie).await.unwrap();
    client.detail(movie).await.unwrap();
    let series = client.detail(tv).await.unwrap();

    assert_eq!(first.kind, MediaKind::Movie);
    assert_eq!(series.kind, MediaKind::Tv);
    assert_eq!(source.detail_calls(&movie), 1);
    assert_eq!(source.detail_calls(&tv), 1);

    let missing = DetailKey::new(MediaKind::Movie, ContentId(1));
    assert_eq!(client.detail(missing).await, Err(CatalogError::NotFound));
}

//! Pages driven end to end over a scripted catalog.

mod support;

use std::sync::Arc;

use reelview_core::catalog::{CatalogClient, CatalogQuery};
use reelview_core::error::CatalogError;
use reelview_core::page::{PageEvent, PageKind, PageSettings, PageView};
use reelview_core::routing::{Navigator, Route, Section};
use reelview_model::{Category, ContentId, MediaKind};
use support::{FakeSource, detail, items};

fn client(source: &Arc<FakeSource>) -> CatalogClient {
    CatalogClient::new(source.clone())
}

#[tokio::test]
async fn home_loads_every_category_once() {
    let source = Arc::new(FakeSource::with_catalog());
    let client = client(&source);
    let mut page = PageView::new(PageKind::Home, PageSettings::default(), None);

    page.load(&client).await;
    let snapshot = page.snapshot(&Route::home());

    assert!(!snapshot.loading);
    assert_eq!(snapshot.banner.as_ref().map(|b| b.id), Some(ContentId(101)));
    assert_eq!(
        snapshot.sliders.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
        vec!["NOW PLAYING", "TOP RATED", "POPULAR", "UPCOMING"]
    );
    // Banner slider: 12 items after the banner, two pages.
    assert_eq!(snapshot.sliders[0].cards[0].id, ContentId(2));
    assert_eq!(snapshot.sliders[0].page_count, 2);
    assert_eq!(source.total_list_calls(), 4);

    // Reloading is served from the cache.
    page.load(&client).await;
    assert_eq!(source.total_list_calls(), 4);
}

#[tokio::test]
async fn two_pages_loading_together_share_requests() {
    let source = Arc::new(FakeSource::with_catalog());
    let client = client(&source);
    let mut first = PageView::new(PageKind::Tv, PageSettings::default(), None);
    let mut second = PageView::new(PageKind::Tv, PageSettings::default(), None);
    source.close_gate();

    tokio::join!(first.load(&client), second.load(&client), async {
        tokio::task::yield_now().await;
        source.open_gate();
    });

    for category in [
        Category::AiringTodayTv,
        Category::PopularTv,
        Category::TopRatedTv,
        Category::OnTheAirTv,
    ] {
        assert_eq!(source.list_calls(&category.into()), 1, "{category:?}");
    }
    assert!(!first.is_loading());
    assert!(!second.is_loading());
}

#[tokio::test]
async fn failed_category_leaves_home_loading() {
    let source = Arc::new(
        FakeSource::with_catalog()
            .with_list(Category::UpcomingMovies, Err(CatalogError::InvalidApiKey)),
    );
    let client = client(&source);
    let mut page = PageView::new(PageKind::Home, PageSettings::default(), None);

    page.load(&client).await;
    let snapshot = page.snapshot(&Route::home());
    assert!(snapshot.loading);
    assert!(snapshot.banner.is_none());
    assert!(snapshot.sliders.iter().all(|s| s.cards.is_empty()));

    // A later load retries only the failed category.
    page.load(&client).await;
    assert_eq!(source.list_calls(&Category::UpcomingMovies.into()), 2);
    assert_eq!(source.list_calls(&Category::NowPlayingMovies.into()), 1);
}

#[tokio::test]
async fn paging_wraps_and_locks() {
    let source = Arc::new(FakeSource::with_catalog());
    let client = client(&source);
    let mut page = PageView::new(PageKind::Home, PageSettings::default(), None);
    let mut nav = Navigator::default();
    page.load(&client).await;

    assert!(page.update(PageEvent::Previous(0), &mut nav));
    assert!(!page.update(PageEvent::Previous(0), &mut nav));
    let snapshot = page.snapshot(nav.current());
    assert_eq!(snapshot.sliders[0].page_index, 1);
    assert!(snapshot.sliders[0].animating);
    assert_eq!(snapshot.sliders[0].cards[0].id, ContentId(108));

    page.update(PageEvent::TransitionFinished(0), &mut nav);
    assert!(page.update(PageEvent::Next(0), &mut nav));
    assert_eq!(page.sliders()[0].carousel().page_index(), 0);
}

#[tokio::test]
async fn overlay_flow_with_detail() {
    let source = Arc::new(
        FakeSource::with_catalog().with_detail(detail(MediaKind::Movie, 2)),
    );
    let client = client(&source);
    let mut page = PageView::new(PageKind::Home, PageSettings::default(), None);
    let mut nav = Navigator::default();
    page.load(&client).await;

    let click = PageEvent::CardClicked {
        slider: 2,
        id: ContentId(2),
    };
    assert!(page.update(click, &mut nav));
    let route = nav.current().clone();
    assert_eq!(route.path(), "/movies/2");

    let shell = page.snapshot(&route).overlay.unwrap();
    assert_eq!(shell.slider.as_deref(), Some("popular"));
    assert!(shell.detail.is_none());

    page.load_detail(&client, &route).await;
    let overlay = page.snapshot(&route).overlay.unwrap();
    let detail = overlay.detail.unwrap();
    assert_eq!(detail.runtime.as_deref(), Some("2h 35m"));
    assert_eq!(detail.release_year.as_deref(), Some("2021"));
    assert_eq!(detail.genres, vec!["Science Fiction".to_string()]);
    assert_eq!(overlay.item.unwrap().title, "title 2");

    assert!(page.update(PageEvent::OverlayDismissed, &mut nav));
    assert_eq!(nav.current(), &Route::home());
    assert!(page.snapshot(nav.current()).overlay.is_none());
}

#[tokio::test]
async fn stacked_overlays_unwind_to_the_slider_they_came_from() {
    let source = Arc::new(
        FakeSource::with_catalog().with_detail(detail(MediaKind::Movie, 2)),
    );
    let client = client(&source);
    let mut page = PageView::new(PageKind::Home, PageSettings::default(), None);
    let mut nav = Navigator::default();
    page.load(&client).await;

    for (slider, id) in [(3, 2), (1, 203)] {
        let click = PageEvent::CardClicked {
            slider,
            id: ContentId(id),
        };
        assert!(page.update(click, &mut nav));
    }
    assert_eq!(nav.current().path(), "/movies/203");
    let top = page.snapshot(nav.current()).overlay.unwrap();
    assert_eq!(top.slider.as_deref(), Some("top-rated"));

    assert!(page.update(PageEvent::OverlayDismissed, &mut nav));
    let route = nav.current().clone();
    assert_eq!(route.path(), "/movies/2");
    page.load_detail(&client, &route).await;
    let restored = page.snapshot(&route).overlay.unwrap();
    assert_eq!(restored.slider.as_deref(), Some("upcoming"));
    assert!(restored.detail.is_some());

    assert!(page.update(PageEvent::OverlayDismissed, &mut nav));
    assert_eq!(nav.current(), &Route::home());
    assert!(!nav.can_go_back());
}

#[tokio::test]
async fn deep_link_before_load_shows_shell_then_item() {
    let source = Arc::new(FakeSource::with_catalog());
    let client = client(&source);
    let route = Route::parse("/tv/2");
    let mut page = PageView::for_route(&route, PageSettings::default()).unwrap();

    let before = page.snapshot(&route);
    assert!(before.loading);
    let shell = before.overlay.unwrap();
    assert!(shell.item.is_none());

    // Detail for an unclaimed id falls back to the page's media kind.
    page.load_detail(&client, &route).await;
    assert!(page.detail_state().unwrap().error().is_some());

    page.load(&client).await;
    let after = page.snapshot(&route).overlay.unwrap();
    assert_eq!(after.slider.as_deref(), Some("airing-today"));
    assert_eq!(after.item.unwrap().id, ContentId(2));
}

#[tokio::test]
async fn search_page_follows_keyword() {
    let source = Arc::new(
        FakeSource::new()
            .with_list(
                CatalogQuery::search(MediaKind::Movie, "dune"),
                Ok(items(1..=8)),
            )
            .with_list(
                CatalogQuery::search(MediaKind::Tv, "dune"),
                Err(CatalogError::Network("reset".into())),
            ),
    );
    let client = client(&source);
    let route = Route::parse("/search?keyword=dune");
    let mut page = PageView::for_route(&route, PageSettings::default()).unwrap();
    page.load(&client).await;

    let snapshot = page.snapshot(&route);
    assert!(!snapshot.loading);
    assert_eq!(snapshot.sliders[0].cards.len(), 6);
    assert!(snapshot.sliders[1].loading);

    let mut nav = Navigator::new(route);
    page.update(
        PageEvent::CardClicked {
            slider: 0,
            id: ContentId(7),
        },
        &mut nav,
    );
    assert_eq!(nav.current().path(), "/search/7?keyword=dune");
    assert_eq!(nav.current().section(), Some(Section::Search));
}

#[tokio::test]
async fn empty_search_and_unknown_routes_fetch_nothing() {
    let source = Arc::new(FakeSource::with_catalog());
    let client = client(&source);

    let mut page =
        PageView::for_route(&Route::parse("/search"), PageSettings::default())
            .unwrap();
    page.load(&client).await;
    assert!(page.sliders().is_empty());
    assert!(!page.is_loading());

    let unknown = Route::parse("/nowhere");
    assert!(PageView::for_route(&unknown, PageSettings::default()).is_none());
    assert_eq!(source.total_list_calls(), 0);
}

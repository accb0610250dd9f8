use futures::future::join_all;
use reelview_model::{ContentDetail, ContentId, ContentList};
use tracing::{debug, info, warn};

use super::event::PageEvent;
use super::kind::{LoadingPolicy, PageKind, SliderSpec};
use super::settings::PageSettings;
use super::snapshot::{
    BannerSnapshot, CardSnapshot, OverlayDetail, OverlayItem, OverlaySnapshot,
    PageSnapshot, SliderSnapshot,
};
use crate::carousel::{CarouselController, Direction};
use crate::catalog::{CatalogClient, DetailKey, QueryState};
use crate::error::Result;
use crate::overlay::RoutedOverlay;
use crate::routing::{Navigator, Route};

/// One category row: its data, paging state and overlay.
#[derive(Debug, Clone)]
pub struct Slider {
    spec: SliderSpec,
    state: QueryState<ContentList>,
    carousel: CarouselController,
    overlay: RoutedOverlay,
}

impl Slider {
    fn new(spec: SliderSpec, settings: &PageSettings) -> Self {
        let skip_first = spec.banner_source && settings.banner_excludes_first;
        Self {
            spec,
            state: QueryState::Idle,
            carousel: CarouselController::new(settings.page_size, skip_first),
            overlay: RoutedOverlay::new(),
        }
    }

    pub fn spec(&self) -> &SliderSpec {
        &self.spec
    }

    pub fn state(&self) -> &QueryState<ContentList> {
        &self.state
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn overlay(&self) -> &RoutedOverlay {
        &self.overlay
    }

    pub fn list(&self) -> Option<&ContentList> {
        self.state.data()
    }

    fn set_result(&mut self, result: Result<ContentList>) {
        match result {
            Ok(list) => {
                self.carousel.set_item_count(list.len());
                self.state = QueryState::Ready(list);
            }
            Err(err) => {
                warn!(
                    slider = %self.spec.key,
                    error = %err,
                    "slider fetch failed"
                );
                self.state = QueryState::Failed(err);
            }
        }
    }
}

/// Composition of one page's sliders, banner and overlay.
#[derive(Debug, Clone)]
pub struct PageView {
    kind: PageKind,
    settings: PageSettings,
    sliders: Vec<Slider>,
    detail: Option<(DetailKey, QueryState<ContentDetail>)>,
}

impl PageView {
    pub fn new(
        kind: PageKind,
        settings: PageSettings,
        keyword: Option<&str>,
    ) -> Self {
        let sliders = kind
            .sliders(keyword)
            .into_iter()
            .map(|spec| Slider::new(spec, &settings))
            .collect();
        Self {
            kind,
            settings,
            sliders,
            detail: None,
        }
    }

    /// Page for `route`, or `None` for an unknown path.
    pub fn for_route(route: &Route, settings: PageSettings) -> Option<Self> {
        let kind = PageKind::from_section(route.section()?);
        Some(Self::new(kind, settings, route.keyword()))
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn detail_state(&self) -> Option<&QueryState<ContentDetail>> {
        self.detail.as_ref().map(|(_, state)| state)
    }

    /// Whether the page as a whole is still waiting on data. Pages that
    /// gate per slider are never loading as a whole.
    pub fn is_loading(&self) -> bool {
        match self.kind.loading_policy() {
            LoadingPolicy::Unified => {
                self.sliders.iter().any(|s| !s.state.is_ready())
            }
            LoadingPolicy::PerSlider => false,
        }
    }

    /// Fetch every slider concurrently. Each slider settles on its own
    /// result; a failure leaves that slider loading.
    pub async fn load(&mut self, client: &CatalogClient) {
        let queries: Vec<_> =
            self.sliders.iter().map(|s| s.spec.query.clone()).collect();
        for slider in &mut self.sliders {
            if !slider.state.is_ready() {
                slider.state = QueryState::Loading;
            }
        }

        let results =
            join_all(queries.into_iter().map(|q| client.fetch(q))).await;
        for (index, result) in results.into_iter().enumerate() {
            self.apply(index, result);
        }

        let ready = self.sliders.iter().filter(|s| s.state.is_ready()).count();
        info!(
            page = ?self.kind,
            ready,
            sliders = self.sliders.len(),
            "page loaded"
        );
    }

    /// Store the outcome of one slider's fetch.
    pub fn apply(&mut self, index: usize, result: Result<ContentList>) {
        match self.sliders.get_mut(index) {
            Some(slider) => slider.set_result(result),
            None => warn!(index, "result for unknown slider dropped"),
        }
    }

    /// Returns whether anything changed.
    pub fn update(
        &mut self,
        event: PageEvent,
        navigator: &mut Navigator,
    ) -> bool {
        match event {
            PageEvent::Previous(index) => {
                self.page(index, Direction::Backward)
            }
            PageEvent::Next(index) => self.page(index, Direction::Forward),
            PageEvent::TransitionFinished(index) => self
                .sliders
                .get_mut(index)
                .is_some_and(|s| s.carousel.on_transition_complete()),
            PageEvent::CardClicked { slider, id } => {
                self.open(slider, id, navigator)
            }
            PageEvent::OverlayDismissed => self.dismiss(navigator),
        }
    }

    fn page(&mut self, index: usize, direction: Direction) -> bool {
        let Some(slider) = self.sliders.get_mut(index) else {
            warn!(index, "page change for unknown slider");
            return false;
        };
        let changed = slider.carousel.advance(direction);
        if !changed {
            debug!(
                slider = %slider.spec.key,
                ?direction,
                "page change ignored"
            );
        }
        changed
    }

    fn open(
        &mut self,
        index: usize,
        id: ContentId,
        navigator: &mut Navigator,
    ) -> bool {
        let Some(slider) = self.sliders.get_mut(index) else {
            warn!(index, "click on unknown slider");
            return false;
        };
        let visible = slider
            .list()
            .map(|l| slider.carousel.window(l.as_slice()))
            .unwrap_or_default();
        let Some(item) = visible.iter().find(|item| item.id == id).cloned()
        else {
            debug!(slider = %slider.spec.key, %id, "click on item not shown");
            return false;
        };

        let current = navigator.current().clone();
        slider.overlay.open(&item, &current, navigator);
        let depth = navigator.depth();
        for (other, slider) in self.sliders.iter_mut().enumerate() {
            if other != index {
                slider.overlay.forget_above(depth - 1);
            }
        }
        true
    }

    /// Go back one entry when this page shows an overlay. Hints recorded
    /// for earlier entries are kept so the previous overlay comes back with
    /// the slider it was opened from.
    fn dismiss(&mut self, navigator: &mut Navigator) -> bool {
        let current = navigator.current().clone();
        let routed = self.routed_item(&current);
        if !RoutedOverlay::is_open(routed) {
            debug!(route = %current, "no overlay to dismiss");
            return false;
        }
        match self.active_slider(routed) {
            Some(index) => self.sliders[index].overlay.dismiss(navigator),
            None => navigator.back(),
        }
    }

    /// Slider that owns the overlay for `item_id`: the one holding the
    /// newest click hint for it, else the first whose list contains it.
    pub fn active_slider(&self, item_id: Option<&str>) -> Option<usize> {
        let id = item_id?;
        self.sliders
            .iter()
            .enumerate()
            .filter(|(_, s)| s.overlay.owns(Some(id)))
            .max_by_key(|(_, s)| s.overlay.opened_at())
            .map(|(index, _)| index)
            .or_else(|| {
                self.sliders.iter().position(|s| {
                    RoutedOverlay::select(Some(id), s.list()).is_some()
                })
            })
    }

    fn routed_item<'r>(&self, route: &'r Route) -> Option<&'r str> {
        if route.section() == Some(self.kind.section()) {
            route.item_id()
        } else {
            None
        }
    }

    fn detail_key(&self, route: &Route) -> Option<DetailKey> {
        let raw = self.routed_item(route)?;
        let id = raw
            .parse::<ContentId>()
            .ok()
            .filter(|id| id.matches_segment(raw))?;
        let media = match self.active_slider(Some(raw)) {
            Some(index) => self.sliders[index].spec.query.kind(),
            None => self.kind.default_media()?,
        };
        Some(DetailKey::new(media, id))
    }

    /// Fetch the supplemental detail for the overlay `route` opens. Does
    /// nothing when no overlay is open or the id is not numeric.
    pub async fn load_detail(&mut self, client: &CatalogClient, route: &Route) {
        let Some(key) = self.detail_key(route) else {
            debug!(route = %route, "no detail to load");
            return;
        };
        self.detail = Some((key, QueryState::Loading));
        let state = QueryState::from(client.detail(key).await);
        if let QueryState::Failed(err) = &state {
            warn!(%key, error = %err, "detail fetch failed");
        }
        self.detail = Some((key, state));
    }

    pub fn snapshot(&self, route: &Route) -> PageSnapshot {
        let loading = self.is_loading();
        let resolver = &self.settings.resolver;

        let banner = if loading {
            None
        } else {
            self.sliders
                .iter()
                .find(|s| s.spec.banner_source)
                .and_then(|s| s.list())
                .and_then(|l| l.first())
                .map(|item| {
                    BannerSnapshot::new(
                        item,
                        resolver,
                        self.settings.banner_size,
                    )
                })
        };

        let sliders = self
            .sliders
            .iter()
            .map(|slider| {
                let list = slider.list().filter(|_| !loading);
                let cards = list
                    .map(|l| {
                        slider
                            .carousel
                            .window(l.as_slice())
                            .iter()
                            .map(|item| {
                                CardSnapshot::new(
                                    item,
                                    resolver,
                                    self.settings.slider_size,
                                )
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                SliderSnapshot {
                    key: slider.spec.key.clone(),
                    title: slider.spec.title.clone(),
                    loading: list.is_none(),
                    page_index: slider.carousel.page_index(),
                    page_count: slider.carousel.page_count(),
                    direction: slider.carousel.direction(),
                    animating: slider.carousel.is_animating(),
                    cards,
                }
            })
            .collect();

        PageSnapshot {
            page: self.kind,
            path: route.path(),
            loading,
            banner,
            sliders,
            overlay: self.overlay_snapshot(route),
        }
    }

    fn overlay_snapshot(&self, route: &Route) -> Option<OverlaySnapshot> {
        let routed = self.routed_item(route);
        if !RoutedOverlay::is_open(routed) {
            return None;
        }
        let item_id = routed?.to_string();

        let owner = self.active_slider(routed).map(|i| &self.sliders[i]);
        let item = owner
            .and_then(|s| RoutedOverlay::select(routed, s.list()))
            .map(|item| {
                OverlayItem::new(
                    item,
                    &self.settings.resolver,
                    self.settings.banner_size,
                )
            });

        let detail = match (&self.detail, self.detail_key(route)) {
            (Some((loaded, QueryState::Ready(detail))), Some(wanted))
                if *loaded == wanted =>
            {
                Some(OverlayDetail::from(detail))
            }
            _ => None,
        };

        Some(OverlaySnapshot {
            item_id,
            slider: owner.map(|s| s.spec.key.clone()),
            item,
            detail,
        })
    }
}

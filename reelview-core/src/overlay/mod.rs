//! Route-driven detail overlay.
//!
//! The overlay is open whenever the current route names an item. Which item
//! it shows is looked up in the slider's loaded list; a missing list or a
//! stale id resolves to an empty shell rather than an error.

use reelview_model::{ContentItem, ContentList};
use tracing::debug;

use crate::routing::{Navigator, Route};

/// Click hint recorded for one history entry.
#[derive(Debug, Clone, PartialEq)]
struct Opened {
    depth: usize,
    item: ContentItem,
}

/// Per-slider overlay state.
///
/// The clicked item is carried explicitly from the click to the overlay
/// instead of living in shared global state. Each hint is tagged with the
/// history depth of the entry it pushed, so going back restores the hint of
/// the previous entry. Hints only decide which slider owns the overlay when
/// several lists contain the routed id; the item that is rendered always
/// comes from [`select`](Self::select).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutedOverlay {
    opened: Vec<Opened>,
}

impl RoutedOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the route designates an item, found or not.
    pub fn is_open(route_item_id: Option<&str>) -> bool {
        route_item_id.is_some()
    }

    /// Find the routed item in `list` by value. `None` when nothing is
    /// routed, the list has not loaded, or no item matches.
    pub fn select<'a>(
        route_item_id: Option<&str>,
        list: Option<&'a ContentList>,
    ) -> Option<&'a ContentItem> {
        let id = route_item_id?;
        let Some(list) = list else {
            debug!(id, "overlay list not loaded yet");
            return None;
        };
        let found = list.find_by_segment(id);
        if found.is_none() {
            debug!(id, items = list.len(), "overlay item not in list");
        }
        found
    }

    /// Record the clicked item and push its item route on top of `current`.
    pub fn open(
        &mut self,
        item: &ContentItem,
        current: &Route,
        navigator: &mut Navigator,
    ) {
        navigator.push(current.with_item(item.id));
        self.forget_above(navigator.depth() - 1);
        self.opened.push(Opened {
            depth: navigator.depth(),
            item: item.clone(),
        });
    }

    /// Close the overlay by going back one history entry. Only the hint of
    /// the entry being left is dropped.
    pub fn dismiss(&mut self, navigator: &mut Navigator) -> bool {
        if self.opened_at() == Some(navigator.depth()) {
            self.opened.pop();
        }
        navigator.back()
    }

    pub fn clicked(&self) -> Option<&ContentItem> {
        self.opened.last().map(|opened| &opened.item)
    }

    /// History depth the newest hint was recorded at.
    pub fn opened_at(&self) -> Option<usize> {
        self.opened.last().map(|opened| opened.depth)
    }

    /// Whether the newest hint was recorded for the routed id.
    pub fn owns(&self, route_item_id: Option<&str>) -> bool {
        match (route_item_id, self.clicked()) {
            (Some(id), Some(item)) => item.id.matches_segment(id),
            _ => false,
        }
    }

    /// Drop hints for history entries deeper than `depth`. Those entries
    /// no longer exist once navigation has moved back past them.
    pub fn forget_above(&mut self, depth: usize) {
        self.opened.retain(|opened| opened.depth <= depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Section;

    fn list() -> ContentList {
        (1..=7)
            .map(|id| ContentItem::new(id, format!("item {id}")))
            .collect()
    }

    #[test]
    fn routed_item_in_loaded_list() {
        let route = Route::parse("/movies/2");
        let list = list();

        assert!(RoutedOverlay::is_open(route.item_id()));
        let selected = RoutedOverlay::select(route.item_id(), Some(&list));
        assert_eq!(selected.map(|i| i.title.as_str()), Some("item 2"));
    }

    #[test]
    fn routed_item_before_list_loads_is_an_empty_shell() {
        let route = Route::parse("/movies/2");
        assert!(RoutedOverlay::is_open(route.item_id()));
        assert_eq!(RoutedOverlay::select(route.item_id(), None), None);
    }

    #[test]
    fn misses_are_none() {
        let list = list();
        for id in ["0", "8", "02", "two", ""] {
            assert_eq!(RoutedOverlay::select(Some(id), Some(&list)), None);
        }
        assert_eq!(RoutedOverlay::select(None, Some(&list)), None);
        assert!(!RoutedOverlay::is_open(None));
    }

    #[test]
    fn open_then_dismiss_returns_to_previous_route() {
        let list = list();
        let mut nav = Navigator::new(Route::page(Section::Tv));
        let mut overlay = RoutedOverlay::new();

        let current = nav.current().clone();
        overlay.open(&list[3], &current, &mut nav);
        assert_eq!(nav.current().path(), "/tv/4");
        assert!(overlay.owns(nav.current().item_id()));

        assert!(overlay.dismiss(&mut nav));
        assert_eq!(nav.current(), &Route::page(Section::Tv));
        assert!(overlay.clicked().is_none());
        assert!(!RoutedOverlay::is_open(nav.current().item_id()));
    }

    #[test]
    fn stacked_hints_unwind_one_entry_at_a_time() {
        let list = list();
        let mut nav = Navigator::default();
        let mut overlay = RoutedOverlay::new();

        let home = nav.current().clone();
        overlay.open(&list[1], &home, &mut nav);
        let first = nav.current().clone();
        overlay.open(&list[2], &first, &mut nav);
        assert_eq!(nav.current().path(), "/movies/3");
        assert_eq!(overlay.opened_at(), Some(3));

        assert!(overlay.dismiss(&mut nav));
        assert_eq!(nav.current().path(), "/movies/2");
        assert!(overlay.owns(nav.current().item_id()));
        assert_eq!(overlay.clicked().map(|i| i.id.get()), Some(2));

        assert!(overlay.dismiss(&mut nav));
        assert_eq!(nav.current(), &Route::home());
        assert!(overlay.clicked().is_none());
    }

    #[test]
    fn dismiss_keeps_hints_of_other_entries() {
        let list = list();
        let mut nav = Navigator::default();
        let mut overlay = RoutedOverlay::new();

        let home = nav.current().clone();
        overlay.open(&list[1], &home, &mut nav);
        // Another overlay pushed the next entry.
        nav.push(Route::parse("/movies/5"));

        assert!(overlay.dismiss(&mut nav));
        assert_eq!(nav.current().path(), "/movies/2");
        assert!(overlay.owns(nav.current().item_id()));
    }

    #[test]
    fn opening_again_replaces_hints_for_abandoned_entries() {
        let list = list();
        let mut nav = Navigator::default();
        let mut overlay = RoutedOverlay::new();

        let home = nav.current().clone();
        overlay.open(&list[1], &home, &mut nav);
        let first = nav.current().clone();
        overlay.open(&list[2], &first, &mut nav);
        assert!(nav.back());
        assert!(nav.back());

        overlay.open(&list[4], &home, &mut nav);
        assert_eq!(overlay.opened_at(), Some(2));
        assert_eq!(overlay.clicked().map(|i| i.id.get()), Some(5));
        assert!(overlay.dismiss(&mut nav));
        assert!(overlay.clicked().is_none());
    }
}

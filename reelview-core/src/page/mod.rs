//! Home, TV and Search pages.
//!
//! A [`PageView`] owns one slider per catalog query. Each slider pairs the
//! query's [`QueryState`](crate::catalog::QueryState) with its own
//! [`CarouselController`](crate::carousel::CarouselController) and
//! [`RoutedOverlay`](crate::overlay::RoutedOverlay). Rendering is left to
//! the caller, which draws the [`PageSnapshot`] produced for a route.

mod event;
mod kind;
mod settings;
mod snapshot;
mod view;

pub use event::PageEvent;
pub use kind::{LoadingPolicy, PageKind, SliderSpec};
pub use settings::PageSettings;
pub use snapshot::{
    BannerSnapshot, CardSnapshot, OverlayDetail, OverlayItem, OverlaySnapshot,
    PageSnapshot, SliderSnapshot,
};
pub use view::{PageView, Slider};

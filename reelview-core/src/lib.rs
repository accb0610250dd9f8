//! # reelview-core
//!
//! Headless core of a catalog browser: a caching, request-coalescing
//! catalog client, carousel paging controllers, route-driven detail
//! overlays, and page views that compose them into serializable snapshots.
//!
//! ## Layout
//!
//! - [`catalog`]: remote catalog access ([`catalog::CatalogSource`],
//!   [`catalog::TmdbSource`]) behind a coalescing [`catalog::CatalogClient`].
//! - [`carousel`]: per-slider paging state with an animation lock.
//! - [`overlay`]: correlates the routed item id with a loaded list.
//! - [`routing`]: path parsing and an in-memory history stack.
//! - [`page`]: Home/TV/Search composition and snapshots.

#![allow(missing_docs)]

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod overlay;
pub mod page;
pub mod routing;

pub use carousel::{CarouselController, CarouselPhase, Direction};
pub use catalog::{
    CatalogClient, CatalogQuery, CatalogSource, DetailKey, QueryCache,
    QueryState, TmdbSettings, TmdbSource,
};
pub use error::{CatalogError, Result};
pub use overlay::RoutedOverlay;
pub use page::{
    PageEvent, PageKind, PageSettings, PageSnapshot, PageView, SliderSpec,
};
pub use routing::{Navigator, Route, Section};

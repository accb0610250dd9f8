//! Core data model definitions shared across reelview crates.
#![allow(missing_docs)]

pub mod category;
pub mod content;
pub mod details;
pub mod error;
pub mod ids;
pub mod image;
pub mod media_type;

pub use category::Category;
pub use content::{ContentItem, ContentList, DateRange, ResultPage};
pub use details::{ContentDetail, Genre};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ContentId;
pub use image::{
    BackdropSize, ImagePathResolver, ImageSize, PosterSize,
    DEFAULT_IMAGE_BASE, make_image_path,
};
pub use media_type::MediaKind;

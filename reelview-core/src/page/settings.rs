use reelview_model::{ImagePathResolver, ImageSize};

/// Presentation knobs shared by every slider on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub page_size: usize,
    /// Drop the banner item from the banner-source slider before paging.
    pub banner_excludes_first: bool,
    pub resolver: ImagePathResolver,
    pub slider_size: ImageSize,
    pub banner_size: ImageSize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            page_size: 6,
            banner_excludes_first: true,
            resolver: ImagePathResolver::default(),
            slider_size: ImageSize::card(),
            banner_size: ImageSize::Original,
        }
    }
}

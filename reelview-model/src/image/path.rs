//! Image URL construction.

use super::sizes::ImageSize;

/// Image CDN root used when nothing else is configured.
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Maps an image identifier and size tag onto a fully qualified URL:
/// `<base>/<size or "original">/<id>`.
///
/// Resolution always succeeds. An empty identifier produces a URL with an
/// empty final segment; callers decide whether to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePathResolver {
    base: String,
}

impl Default for ImagePathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

impl ImagePathResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn resolve(&self, image_id: &str, size: Option<ImageSize>) -> String {
        let size = size.unwrap_or(ImageSize::Original);
        // Catalog identifiers arrive as "/abc.jpg"; keep exactly one separator.
        let image_id = image_id.strip_prefix('/').unwrap_or(image_id);
        format!("{}/{}/{}", self.base, size.as_str(), image_id)
    }

    /// Same as [`resolve`](Self::resolve) for a raw size tag; `None` or an
    /// empty tag means `original`. Unknown tags are passed through verbatim.
    pub fn resolve_tag(&self, image_id: &str, tag: Option<&str>) -> String {
        let tag = tag.filter(|t| !t.is_empty()).unwrap_or("original");
        let image_id = image_id.strip_prefix('/').unwrap_or(image_id);
        format!("{}/{}/{}", self.base, tag, image_id)
    }
}

/// Resolve against the default CDN root.
pub fn make_image_path(image_id: &str, size: Option<ImageSize>) -> String {
    ImagePathResolver::default().resolve(image_id, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PosterSize;

    #[test]
    fn defaults_to_original() {
        assert_eq!(
            make_image_path("/abc.jpg", None),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
    }

    #[test]
    fn sized_path() {
        assert_eq!(
            make_image_path("/abc.jpg", Some(ImageSize::Poster(PosterSize::W500))),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            make_image_path("abc.jpg", Some(ImageSize::card())),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn empty_id_yields_empty_segment() {
        assert_eq!(
            make_image_path("", None),
            "https://image.tmdb.org/t/p/original/"
        );
    }

    #[test]
    fn custom_base_and_raw_tags() {
        let resolver = ImagePathResolver::new("http://cdn.local/img/");
        assert_eq!(resolver.base(), "http://cdn.local/img");
        assert_eq!(
            resolver.resolve_tag("/x.png", Some("w92")),
            "http://cdn.local/img/w92/x.png"
        );
        assert_eq!(
            resolver.resolve_tag("/x.png", Some("")),
            "http://cdn.local/img/original/x.png"
        );
    }
}

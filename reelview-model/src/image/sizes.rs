use crate::error::ModelError;

/// Size tags accepted by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageSize {
    Poster(PosterSize),
    Backdrop(BackdropSize),
    /// Untouched upload.
    #[default]
    Original,
}

impl ImageSize {
    /// Slider card size (500px).
    pub const fn card() -> Self {
        Self::Poster(PosterSize::W500)
    }

    /// Path segment, e.g. `w500` or `original`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Poster(s) => s.as_str(),
            ImageSize::Backdrop(s) => s.as_str(),
            ImageSize::Original => "original",
        }
    }

    /// Parse a raw tag. Tags shared by both families resolve to the poster
    /// family; the emitted path segment is identical either way.
    pub fn parse(tag: &str) -> Result<Self, ModelError> {
        if tag == "original" {
            return Ok(Self::Original);
        }
        PosterSize::from_tag(tag)
            .map(Self::Poster)
            .or_else(|| BackdropSize::from_tag(tag).map(Self::Backdrop))
            .ok_or_else(|| ModelError::UnknownImageSize(tag.to_string()))
    }
}

/// Poster image sizes (2:3 aspect ratio)
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PosterSize {
    /// 92px width - tiny thumbnail
    W92,
    W154,
    W185,
    W342,
    /// 500px width - slider cards (default)
    #[default]
    W500,
    /// 780px width - high quality poster
    W780,
}

impl PosterSize {
    pub const ALL: [PosterSize; 6] = [
        Self::W92,
        Self::W154,
        Self::W185,
        Self::W342,
        Self::W500,
        Self::W780,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == tag)
    }
}

/// 16:9 backdrop sizes
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackdropSize {
    W300,
    W780,
    #[default]
    W1280,
}

impl BackdropSize {
    pub const ALL: [BackdropSize; 3] = [Self::W300, Self::W780, Self::W1280];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W300 => "w300",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == tag)
    }
}

use std::fmt::{Display, Formatter};

use crate::media_type::MediaKind;

/// Named catalog slice backing one slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    NowPlayingMovies,
    TopRatedMovies,
    PopularMovies,
    UpcomingMovies,
    AiringTodayTv,
    OnTheAirTv,
    PopularTv,
    TopRatedTv,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::NowPlayingMovies,
        Self::TopRatedMovies,
        Self::PopularMovies,
        Self::UpcomingMovies,
        Self::AiringTodayTv,
        Self::OnTheAirTv,
        Self::PopularTv,
        Self::TopRatedTv,
    ];

    pub const fn kind(self) -> MediaKind {
        match self {
            Self::NowPlayingMovies
            | Self::TopRatedMovies
            | Self::PopularMovies
            | Self::UpcomingMovies => MediaKind::Movie,
            Self::AiringTodayTv
            | Self::OnTheAirTv
            | Self::PopularTv
            | Self::TopRatedTv => MediaKind::Tv,
        }
    }

    /// Endpoint path relative to the API base, e.g. `/movie/now_playing`.
    pub const fn api_path(self) -> &'static str {
        match self {
            Self::NowPlayingMovies => "/movie/now_playing",
            Self::TopRatedMovies => "/movie/top_rated",
            Self::PopularMovies => "/movie/popular",
            Self::UpcomingMovies => "/movie/upcoming",
            Self::AiringTodayTv => "/tv/airing_today",
            Self::OnTheAirTv => "/tv/on_the_air",
            Self::PopularTv => "/tv/popular",
            Self::TopRatedTv => "/tv/top_rated",
        }
    }

    /// Stable slug used as slider key and cache key component.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::NowPlayingMovies => "now-playing",
            Self::TopRatedMovies => "top-rated",
            Self::PopularMovies => "popular",
            Self::UpcomingMovies => "upcoming",
            Self::AiringTodayTv => "airing-today",
            Self::OnTheAirTv => "on-the-air",
            Self::PopularTv => "popular-tv",
            Self::TopRatedTv => "top-rated-tv",
        }
    }

    /// Slider heading.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NowPlayingMovies => "NOW PLAYING",
            Self::TopRatedMovies | Self::TopRatedTv => "TOP RATED",
            Self::PopularMovies | Self::PopularTv => "POPULAR",
            Self::UpcomingMovies => "UPCOMING",
            Self::AiringTodayTv => "AIRING TODAY",
            Self::OnTheAirTv => "ON THE AIR",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.label())
    }
}

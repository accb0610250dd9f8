use crate::ids::ContentId;
use crate::media_type::MediaKind;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Extended record fetched when an overlay opens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentDetail {
    pub id: ContentId,
    pub kind: MediaKind,
    pub title: String,
    pub overview: String,
    pub tagline: Option<String>,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    /// Minutes. Series report the first episode run time.
    pub runtime: Option<u32>,
    pub rating: Option<f64>,
    pub genres: Vec<Genre>,
}

impl ContentDetail {
    /// First four characters of the release date, when present.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
    }

    /// `"2h 5m"` style label. Zero or missing runtimes yield `None`.
    pub fn runtime_label(&self) -> Option<String> {
        match self.runtime {
            Some(minutes) if minutes > 0 => {
                Some(format!("{}h {}m", minutes / 60, minutes % 60))
            }
            _ => None,
        }
    }

    /// `"7.3 / 10"`.
    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|r| format!("{r:.1} / 10"))
    }
}

use std::fmt;

use serde::Serialize;
use url::form_urlencoded;

/// Top-level page a route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Home,
    Tv,
    Search,
}

impl Section {
    /// Path of the page itself.
    pub const fn root(self) -> &'static str {
        match self {
            Section::Home => "/",
            Section::Tv => "/tv",
            Section::Search => "/search",
        }
    }

    /// First segment of an item route, `/<base>/<id>`.
    pub const fn item_base(self) -> &'static str {
        match self {
            Section::Home => "movies",
            Section::Tv => "tv",
            Section::Search => "search",
        }
    }
}

/// A parsed location.
///
/// The item id is kept exactly as it appeared in the path; matching it
/// against loaded content is the overlay's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Page {
        section: Section,
        item_id: Option<String>,
        keyword: Option<String>,
    },
    NotFound(String),
}

impl Route {
    pub fn page(section: Section) -> Self {
        Route::Page {
            section,
            item_id: None,
            keyword: None,
        }
    }

    pub fn home() -> Self {
        Self::page(Section::Home)
    }

    pub fn search(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        Route::Page {
            section: Section::Search,
            item_id: None,
            keyword: (!keyword.is_empty()).then_some(keyword),
        }
    }

    /// `/<base>/<id>` for `section`.
    pub fn item_path(section: Section, id: impl fmt::Display) -> Self {
        Route::Page {
            section,
            item_id: Some(id.to_string()),
            keyword: None,
        }
    }

    /// Parse a path with an optional `?keyword=` query.
    pub fn parse(raw: &str) -> Self {
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };

        let keyword = query.and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "keyword")
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        });

        let segments: Vec<&str> =
            path.split('/').filter(|s| !s.is_empty()).collect();

        let (section, item_id) = match segments.as_slice() {
            [] => (Section::Home, None),
            ["movies", id] => (Section::Home, Some(*id)),
            ["tv"] => (Section::Tv, None),
            ["tv", id] => (Section::Tv, Some(*id)),
            ["search"] => (Section::Search, None),
            ["search", id] => (Section::Search, Some(*id)),
            _ => return Route::NotFound(raw.to_string()),
        };

        Route::Page {
            section,
            item_id: item_id.map(str::to_string),
            keyword,
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Route::Page { section, .. } => Some(*section),
            Route::NotFound(_) => None,
        }
    }

    pub fn item_id(&self) -> Option<&str> {
        match self {
            Route::Page { item_id, .. } => item_id.as_deref(),
            Route::NotFound(_) => None,
        }
    }

    pub fn keyword(&self) -> Option<&str> {
        match self {
            Route::Page { keyword, .. } => keyword.as_deref(),
            Route::NotFound(_) => None,
        }
    }

    /// Same page and keyword, designating `id` as the open item.
    pub fn with_item(&self, id: impl fmt::Display) -> Self {
        match self {
            Route::Page {
                section, keyword, ..
            } => Route::Page {
                section: *section,
                item_id: Some(id.to_string()),
                keyword: keyword.clone(),
            },
            Route::NotFound(path) => Route::NotFound(path.clone()),
        }
    }

    pub fn path(&self) -> String {
        let (section, item_id, keyword) = match self {
            Route::Page {
                section,
                item_id,
                keyword,
            } => (section, item_id, keyword),
            Route::NotFound(path) => return path.clone(),
        };

        let mut path = match item_id {
            Some(id) => format!("/{}/{}", section.item_base(), id),
            None => section.root().to_string(),
        };
        if let Some(keyword) = keyword {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("keyword", keyword)
                .finish();
            path.push('?');
            path.push_str(&query);
        }
        path
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

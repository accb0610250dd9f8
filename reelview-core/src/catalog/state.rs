use crate::error::CatalogError;

/// Observable state of one cached query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Never requested.
    Idle,
    /// Request in flight.
    Loading,
    Ready(T),
    /// Last attempt failed; the next request re-issues the fetch.
    Failed(CatalogError),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> QueryState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, QueryState::Ready(_))
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            QueryState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, CatalogError>> for QueryState<T> {
    fn from(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(data) => QueryState::Ready(data),
            Err(err) => QueryState::Failed(err),
        }
    }
}

//! Scripted in-memory catalog used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use reelview_core::catalog::{CatalogQuery, CatalogSource, DetailKey};
use reelview_core::error::{CatalogError, Result};
use reelview_model::{
    Category, ContentDetail, ContentItem, ContentList, Genre, MediaKind,
    ResultPage,
};
use tokio::sync::watch;

pub fn item(id: i64) -> ContentItem {
    let mut item = ContentItem::new(id, format!("title {id}"));
    item.overview = format!("overview {id}");
    item.backdrop_path = Some(format!("/backdrop{id}.jpg"));
    item.poster_path = Some(format!("/poster{id}.jpg"));
    item
}

pub fn items(ids: impl IntoIterator<Item = i64>) -> ContentList {
    ids.into_iter().map(item).collect()
}

pub fn detail(kind: MediaKind, id: i64) -> ContentDetail {
    ContentDetail {
        id: id.into(),
        kind,
        title: format!("title {id}"),
        overview: format!("overview {id}"),
        tagline: Some("tagline".into()),
        backdrop_path: None,
        poster_path: None,
        release_date: Some("2021-09-15".into()),
        runtime: Some(155),
        rating: Some(7.84),
        genres: vec![Genre {
            id: 878,
            name: "Science Fiction".into(),
        }],
    }
}

/// Responds from fixed tables and counts calls. Every call waits for the
/// gate to open; it starts open.
pub struct FakeSource {
    lists: HashMap<CatalogQuery, Result<ContentList>>,
    details: HashMap<DetailKey, ContentDetail>,
    list_calls: Mutex<HashMap<CatalogQuery, usize>>,
    detail_calls: Mutex<HashMap<DetailKey, usize>>,
    gate: watch::Receiver<bool>,
    gate_tx: watch::Sender<bool>,
}

impl FakeSource {
    pub fn new() -> Self {
        let (gate_tx, gate) = watch::channel(true);
        Self {
            lists: HashMap::new(),
            details: HashMap::new(),
            list_calls: Mutex::new(HashMap::new()),
            detail_calls: Mutex::new(HashMap::new()),
            gate,
            gate_tx,
        }
    }

    /// Every home and TV category filled with 13 items; ids are unique per
    /// category except the shared id 2.
    pub fn with_catalog() -> Self {
        let mut source = Self::new();
        for (n, category) in Category::ALL.into_iter().enumerate() {
            let base = (n as i64 + 1) * 100;
            let mut ids: Vec<i64> = vec![base + 1, 2];
            ids.extend(base + 3..=base + 13);
            source = source.with_list(category, Ok(items(ids)));
        }
        source
    }

    pub fn with_list(
        mut self,
        query: impl Into<CatalogQuery>,
        result: Result<ContentList>,
    ) -> Self {
        self.lists.insert(query.into(), result);
        self
    }

    pub fn with_detail(mut self, detail: ContentDetail) -> Self {
        self.details
            .insert(DetailKey::new(detail.kind, detail.id), detail);
        self
    }

    pub fn close_gate(&self) {
        self.gate_tx.send_replace(false);
    }

    pub fn open_gate(&self) {
        self.gate_tx.send_replace(true);
    }

    pub fn list_calls(&self, query: &CatalogQuery) -> usize {
        self.list_calls.lock().get(query).copied().unwrap_or(0)
    }

    pub fn total_list_calls(&self) -> usize {
        self.list_calls.lock().values().sum()
    }

    pub fn detail_calls(&self, key: &DetailKey) -> usize {
        self.detail_calls.lock().get(key).copied().unwrap_or(0)
    }

    async fn wait_for_gate(&self) {
        let mut gate = self.gate.clone();
        let _ = gate.wait_for(|open| *open).await;
    }
}

#[async_trait]
impl CatalogSource for FakeSource {
    async fn list(&self, query: &CatalogQuery) -> Result<ResultPage> {
        *self.list_calls.lock().entry(query.clone()).or_default() += 1;
        self.wait_for_gate().await;
        match self.lists.get(query) {
            Some(result) => result.clone().map(ResultPage::single),
            None => Err(CatalogError::NotFound),
        }
    }

    async fn detail(&self, key: DetailKey) -> Result<ContentDetail> {
        *self.detail_calls.lock().entry(key).or_default() += 1;
        self.wait_for_gate().await;
        self.details.get(&key).cloned().ok_or(CatalogError::NotFound)
    }
}

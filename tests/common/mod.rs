#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::mpsc;

use slink::application::services::{LinkService, StatsService};
use slink::domain::click_event::ClickEvent;
use slink::domain::entities::{Link, NewLink};
use slink::domain::repositories::{LinkRepository, StatsOverview, StatsRepository};
use slink::error::AppError;
use slink::infrastructure::cache::NullCache;
use slink::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

/// In-memory link store used to exercise handlers without PostgreSQL.
///
/// Implements both repository traits over a single `Vec<Link>`, mirroring
/// the semantics of the SQL implementations (unique slugs, counter
/// increments, top-N ordering).
#[derive(Default)]
pub struct InMemoryStore {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seeds a link directly, bypassing the service layer.
    pub fn seed(&self, slug: &str, long_url: &str, access_count: i64) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.links.lock().unwrap().push(Link::new(
            id,
            slug.to_string(),
            long_url.to_string(),
            Utc::now(),
            access_count,
        ));
    }

    pub fn access_count(&self, slug: &str) -> Option<i64> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.slug == slug)
            .map(|l| l.access_count)
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.slug == new_link.slug) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "slug": new_link.slug }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let link = Link::new(id, new_link.slug, new_link.long_url, Utc::now(), 0);
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.slug == slug)
            .cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.long_url == long_url)
            .cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl StatsRepository for InMemoryStore {
    async fn increment_access(&self, slug: &str) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();

        match links.iter_mut().find(|l| l.slug == slug) {
            Some(link) => {
                link.access_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn overview(&self, top_n: i64) -> Result<StatsOverview, AppError> {
        let links = self.links.lock().unwrap();

        let total_urls = links.len() as i64;
        let total_clicks = links.iter().map(|l| l.access_count).sum();

        let mut top: Vec<Link> = links.clone();
        top.sort_by(|a, b| b.access_count.cmp(&a.access_count));
        top.truncate(top_n as usize);

        Ok(StatsOverview {
            total_urls,
            total_clicks,
            top,
        })
    }
}

/// Builds an [`AppState`] backed by an in-memory store.
///
/// Returns the state, the receiving end of the click queue (so tests can
/// assert enqueued events), and the store itself for seeding/inspection.
pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let (tx, rx) = mpsc::channel(100);

    let state = AppState {
        link_service: Arc::new(LinkService::new(store.clone(), BASE_URL)),
        stats_service: Arc::new(StatsService::new(store.clone())),
        cache: Arc::new(NullCache),
        click_sender: tx,
    };

    (state, rx, store)
}

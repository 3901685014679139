//! Background worker draining the click event queue.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::StatsRepository;

/// Drains the click queue, incrementing the persisted access counter once
/// per event.
///
/// Each increment is retried with exponential backoff before the event is
/// dropped. Events referencing unknown slugs are discarded; a stale cache
/// entry can produce a redirect for a slug that no longer resolves.
///
/// Runs until the sending side of the channel is closed.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    stats_repository: Arc<dyn StatsRepository>,
) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(50).map(jitter).take(3);

        let result = Retry::spawn(strategy, || stats_repository.increment_access(&event.slug)).await;

        match result {
            Ok(true) => debug!("Recorded click for {}", event.slug),
            Ok(false) => warn!("Dropping click for unknown slug {}", event.slug),
            Err(e) => error!("Failed to record click for {}: {}", event.slug, e),
        }
    }

    debug!("Click queue closed, worker exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockStatsRepository;

    #[tokio::test]
    async fn test_worker_increments_once_per_event() {
        let mut mock = MockStatsRepository::new();
        mock.expect_increment_access()
            .withf(|slug| slug == "abc123")
            .times(3)
            .returning(|_| Ok(true));

        let (tx, rx) = mpsc::channel(10);
        for _ in 0..3 {
            tx.send(ClickEvent::new("abc123")).await.unwrap();
        }
        drop(tx);

        run_click_worker(rx, Arc::new(mock)).await;
    }

    #[tokio::test]
    async fn test_worker_ignores_unknown_slug() {
        let mut mock = MockStatsRepository::new();
        mock.expect_increment_access()
            .times(1)
            .returning(|_| Ok(false));

        let (tx, rx) = mpsc::channel(10);
        tx.send(ClickEvent::new("ghost")).await.unwrap();
        drop(tx);

        run_click_worker(rx, Arc::new(mock)).await;
    }
}

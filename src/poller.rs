use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use crate::error::FetchError;
use crate::fetcher::LanyardClient;
use crate::models::presence::Presence;
use crate::presence::normalize;
use crate::store::ViewStore;

/// Handle to the running poll loop. Dropping it stops polling; call
/// `shutdown` to also wait until the loop has fully stopped.
pub struct PollHandle {
    handle: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// Stop the timer and abort in-flight requests. Once this returns the
    /// store will not be written again by this poller.
    pub async fn shutdown(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
        tracing::debug!("presence poller stopped");
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Start polling: one fetch immediately, then one per `interval`.
pub fn spawn(client: LanyardClient, store: Arc<ViewStore>, interval: Duration) -> PollHandle {
    let handle = tokio::spawn(run(client, store, interval));
    PollHandle {
        handle: Some(handle),
    }
}

async fn run(client: LanyardClient, store: Arc<ViewStore>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Requests run as separate tasks so a slow one does not hold back the
    // next tick. Results come back here, so commits stop with this task.
    let mut in_flight: JoinSet<(u64, Result<Presence, FetchError>)> = JoinSet::new();
    let mut seq: u64 = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                seq += 1;
                let client = client.clone();
                in_flight.spawn(async move {
                    let result = client.fetch_presence().await;
                    (seq, result)
                });
            }
            Some(joined) = in_flight.join_next() => {
                match joined {
                    Ok((tick, result)) => apply(&store, client.user_id(), tick, result),
                    Err(e) if e.is_panic() => tracing::error!("presence fetch task panicked: {e}"),
                    Err(_) => {}
                }
            }
        }
    }
}

fn apply(store: &ViewStore, user_id: &str, seq: u64, result: Result<Presence, FetchError>) {
    match result {
        Ok(presence) => {
            let view = normalize(&presence, user_id);
            if store.commit(seq, view) {
                tracing::trace!(seq, status = %presence.discord_status, "presence updated");
            } else {
                tracing::debug!(seq, "discarded stale presence response");
            }
        }
        Err(e) => {
            tracing::warn!(seq, kind = e.kind(), "presence fetch failed: {e}");
        }
    }
}

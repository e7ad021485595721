use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::view::ViewState;

/// A committed view together with the poll tick that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub seq: u64,
    pub updated_at: Option<DateTime<Utc>>,
    pub view: ViewState,
}

/// Holds the current snapshot. Readers get an `Arc` to an immutable
/// snapshot; writers swap in a new one.
pub struct ViewStore {
    current: ArcSwap<Snapshot>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Snapshot {
                seq: 0,
                updated_at: None,
                view: ViewState::loading(),
            }),
        }
    }

    pub fn load(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Commit the view produced by tick `seq`. Returns false, leaving the
    /// store untouched, if a newer tick has already committed.
    pub fn commit(&self, seq: u64, view: ViewState) -> bool {
        let mut accepted = false;
        self.current.rcu(|current| {
            if seq > current.seq {
                accepted = true;
                Arc::new(Snapshot {
                    seq,
                    updated_at: Some(Utc::now()),
                    view: view.clone(),
                })
            } else {
                accepted = false;
                Arc::clone(current)
            }
        });
        accepted
    }
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Debounced auto-save of the CV aggregate.
//!
//! # Policy
//! - A save scheduled within the debounce window of a pending one replaces
//!   it; only the newest aggregate lands (last-write-wins per window).
//! - An aggregate with no user content is never written.
//! - Write failures surface as a transient `Error` status only; the
//!   in-memory aggregate stays authoritative and the next edit retries
//!   naturally. Nothing here propagates to the mutating caller.
//!
//! The debouncer is an abortable task plus a generation counter, so the
//! whole schedule/cancel/commit cycle runs on the tokio clock and is tested
//! without wall-clock waits.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::AutoSaveTiming;
use crate::errors::EngineError;
use crate::models::CvData;
use crate::storage::KeyValueStore;

/// Storage key for the aggregate snapshot.
pub const CV_DATA_KEY: &str = "cvstudio.cv_data";

/// Top-level fields a persisted snapshot must carry to be restorable.
const AGGREGATE_FIELDS: [&str; 4] = ["personalInfo", "experiences", "education", "skills"];

/// Save progress, as shown by the host's status indicator. `Saved` and
/// `Error` decay back to `Idle` after a display window, a UI affordance
/// rather than a correctness mechanism.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Idle,
    /// A write is scheduled but not yet committed.
    Saving,
    /// The last write committed at the given instant.
    Saved { at: DateTime<Utc> },
    Error { message: String },
}

#[derive(Clone)]
pub struct AutoSaveStore {
    inner: Arc<Inner>,
}

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    timing: AutoSaveTiming,
    status: watch::Sender<SaveStatus>,
    last_saved: Mutex<Option<DateTime<Utc>>>,
    pending: Mutex<Option<JoinHandle<()>>>,
    /// Bumped on every schedule and clear; a stale display-window task checks
    /// it before flipping the status back to `Idle`.
    generation: AtomicU64,
}

impl AutoSaveStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, timing: AutoSaveTiming) -> Self {
        let (status, _) = watch::channel(SaveStatus::Idle);
        Self {
            inner: Arc::new(Inner {
                storage,
                timing,
                status,
                last_saved: Mutex::new(None),
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Schedules a debounced write of `data`, superseding any pending write.
    /// Must be called from within a tokio runtime.
    pub fn schedule_save(&self, data: CvData) {
        if !data.has_content() {
            debug!("auto-save skipped: aggregate has no user content");
            return;
        }

        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.status.send_replace(SaveStatus::Saving);

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            tokio::time::sleep(inner.timing.debounce).await;
            Inner::commit(&inner, &data, generation).await;
        });

        if let Ok(mut pending) = self.inner.pending.lock() {
            if let Some(previous) = pending.replace(task) {
                previous.abort();
            }
        }
    }

    /// Deserializes the persisted snapshot. Anything short of a complete
    /// aggregate (missing record, storage failure, parse failure, missing
    /// top-level field) is `None`, i.e. first-run semantics.
    pub async fn load_saved(&self) -> Option<CvData> {
        let raw = match self.inner.storage.get(CV_DATA_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("failed to read saved CV data: {err}");
                return None;
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("saved CV data is not valid JSON: {err}");
                return None;
            }
        };
        let complete = value
            .as_object()
            .is_some_and(|obj| AGGREGATE_FIELDS.iter().all(|k| obj.contains_key(*k)));
        if !complete {
            warn!("saved CV data is missing aggregate fields; treating as first run");
            return None;
        }

        match serde_json::from_value(value) {
            Ok(cv) => Some(cv),
            Err(err) => {
                warn!("saved CV data failed to deserialize: {err}");
                None
            }
        }
    }

    /// Purges the persisted snapshot. Aborts any pending debounced write so a
    /// stale timer cannot re-populate storage after the clear.
    pub async fn clear_saved(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut pending) = self.inner.pending.lock() {
            if let Some(task) = pending.take() {
                task.abort();
            }
        }

        if let Err(err) = self.inner.storage.remove(CV_DATA_KEY).await {
            warn!("failed to clear saved CV data: {err}");
        }
        if let Ok(mut last) = self.inner.last_saved.lock() {
            *last = None;
        }
        self.inner.status.send_replace(SaveStatus::Idle);
    }

    /// Presence check without deserializing.
    pub async fn has_saved(&self) -> bool {
        self.inner.storage.contains(CV_DATA_KEY).await.unwrap_or(false)
    }

    pub fn status(&self) -> watch::Receiver<SaveStatus> {
        self.inner.status.subscribe()
    }

    pub fn current_status(&self) -> SaveStatus {
        self.inner.status.borrow().clone()
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.inner.last_saved.lock().ok().and_then(|guard| *guard)
    }
}

impl Inner {
    async fn commit(inner: &Arc<Inner>, data: &CvData, generation: u64) {
        match Self::write_snapshot(inner, data).await {
            Ok(at) => {
                if let Ok(mut last) = inner.last_saved.lock() {
                    *last = Some(at);
                }
                inner.status.send_replace(SaveStatus::Saved { at });
                debug!("CV data auto-saved");
                tokio::time::sleep(inner.timing.saved_display).await;
                Self::reset_status_if_current(inner, generation);
            }
            Err(err) => {
                warn!("auto-save failed: {err}");
                inner.status.send_replace(SaveStatus::Error {
                    message: err.to_string(),
                });
                tokio::time::sleep(inner.timing.error_display).await;
                Self::reset_status_if_current(inner, generation);
            }
        }
    }

    async fn write_snapshot(inner: &Arc<Inner>, data: &CvData) -> Result<DateTime<Utc>, EngineError> {
        let json = serde_json::to_string(data)?;
        inner.storage.set(CV_DATA_KEY, &json).await?;
        Ok(Utc::now())
    }

    fn reset_status_if_current(inner: &Arc<Inner>, generation: u64) {
        if inner.generation.load(Ordering::SeqCst) == generation {
            inner.status.send_replace(SaveStatus::Idle);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests: all on the paused tokio clock, no wall-clock waits
// ────────────────────────────────────────────────────────────────────────────

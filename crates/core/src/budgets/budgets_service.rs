//! Budget view-model service.
//!
//! Owns the in-memory denormalized budget collection and mediates all
//! read/write traffic to the remote store. Local state changes only after
//! the server confirms a mutation; a failed call leaves the collection
//! exactly as it was and surfaces one error notification.

use log::{debug, error, info};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use super::budgets_model::{BudgetDraft, BudgetView};
use super::budgets_traits::{BudgetServiceTrait, BudgetStore};
use super::mapping::{self, ReferenceData};
use crate::errors::{Error, Result};
use crate::events::NotificationSink;

/// Slice one page out of an already-filtered view.
///
/// Pages are 1-based. An out-of-range page (including page 0 or a zero
/// page size) yields an empty slice rather than clamping or panicking;
/// callers re-position their cursor with [`page_count`] when the
/// underlying set shrinks.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Number of pages a collection of `len` items spans at `page_size`.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Service maintaining the denormalized, filterable budget collection.
pub struct BudgetService {
    store: Arc<dyn BudgetStore>,
    notifications: Arc<dyn NotificationSink>,
    budgets: RwLock<Vec<BudgetView>>,
    reference_data: RwLock<ReferenceData>,
    loading: AtomicBool,
    in_flight: Mutex<HashSet<i64>>,
}

impl BudgetService {
    /// Creates a new BudgetService instance
    pub fn new(store: Arc<dyn BudgetStore>, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            store,
            notifications,
            budgets: RwLock::new(Vec::new()),
            reference_data: RwLock::new(ReferenceData::default()),
            loading: AtomicBool::new(false),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Log a failed remote call and emit its single user notification.
    fn report_failure(&self, context: &str, err: &Error) {
        error!("{}: {}", context, err);
        self.notifications.notify_error(&err.user_message());
    }

    /// Local precondition: the id must exist in the loaded collection.
    fn ensure_present(&self, id: i64) -> Result<()> {
        let budgets = self.budgets.read().unwrap();
        if budgets.iter().any(|b| b.id == id) {
            Ok(())
        } else {
            Err(Error::NotFound(format!("budget {}", id)))
        }
    }

    /// Claim the per-record edit slot, rejecting a second concurrent edit
    /// for the same id instead of silently dropping it.
    fn begin_edit(&self, id: i64) -> Result<()> {
        let mut in_flight = self.in_flight.lock().unwrap();
        if in_flight.insert(id) {
            Ok(())
        } else {
            Err(Error::EditInFlight(id))
        }
    }

    fn end_edit(&self, id: i64) {
        self.in_flight.lock().unwrap().remove(&id);
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn load(&self) -> Result<()> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.store.fetch_snapshot().await;

        let outcome = match result {
            Ok(snapshot) => {
                let refs = ReferenceData::from_snapshot(&snapshot);
                let views: Vec<BudgetView> = snapshot
                    .budgets
                    .iter()
                    .map(|record| mapping::denormalize(record, &refs))
                    .collect();
                info!(
                    "Loaded {} budgets ({} clients, {} vehicles, {} products)",
                    views.len(),
                    snapshot.clients.len(),
                    snapshot.vehicles.len(),
                    snapshot.products.len()
                );
                *self.reference_data.write().unwrap() = refs;
                *self.budgets.write().unwrap() = views;
                Ok(())
            }
            Err(err) => {
                // Prior collection stays in place: a failed refresh must
                // not blank out the last good snapshot.
                self.report_failure("Failed to load budgets", &err);
                Err(err)
            }
        };

        self.loading.store(false, Ordering::SeqCst);
        outcome
    }

    fn budgets(&self) -> Vec<BudgetView> {
        self.budgets.read().unwrap().clone()
    }

    fn filter(&self, term: &str) -> Vec<BudgetView> {
        let budgets = self.budgets.read().unwrap();
        if term.is_empty() {
            return budgets.clone();
        }
        let needle = term.to_lowercase();
        budgets
            .iter()
            .filter(|b| {
                b.status.as_str().to_lowercase().contains(&needle)
                    || b.client
                        .as_ref()
                        .is_some_and(|c| c.name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    async fn create(&self, draft: BudgetDraft) -> Result<BudgetView> {
        draft.validate()?;
        debug!("Creating budget, status: {}", draft.status.as_str());

        match self.store.create_budget(&draft).await {
            Ok(record) => {
                let view = {
                    let refs = self.reference_data.read().unwrap();
                    mapping::denormalize(&record, &refs)
                };
                self.budgets.write().unwrap().push(view.clone());
                Ok(view)
            }
            Err(err) => {
                self.report_failure("Failed to create budget", &err);
                Err(err)
            }
        }
    }

    async fn update(&self, id: i64, draft: BudgetDraft) -> Result<BudgetView> {
        draft.validate()?;
        self.ensure_present(id)?;
        self.begin_edit(id)?;

        let result = self.store.update_budget(id, &draft).await;
        self.end_edit(id);

        match result {
            Ok(record) => {
                let view = {
                    let refs = self.reference_data.read().unwrap();
                    mapping::denormalize(&record, &refs)
                };
                let mut budgets = self.budgets.write().unwrap();
                if let Some(slot) = budgets.iter_mut().find(|b| b.id == id) {
                    *slot = view.clone();
                }
                Ok(view)
            }
            Err(err) => {
                self.report_failure("Failed to update budget", &err);
                Err(err)
            }
        }
    }

    async fn remove(&self, id: i64) -> Result<()> {
        self.ensure_present(id)?;
        self.begin_edit(id)?;

        let result = self.store.delete_budget(id).await;
        self.end_edit(id);

        match result {
            Ok(()) => {
                self.budgets.write().unwrap().retain(|b| b.id != id);
                debug!("Removed budget {}", id);
                Ok(())
            }
            Err(err) => {
                self.report_failure("Failed to delete budget", &err);
                Err(err)
            }
        }
    }
}

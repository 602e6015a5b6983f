//! Budget store and service traits.
//!
//! These traits define the contract for budget operations without any
//! transport-specific types, allowing for different remote store
//! implementations (HTTP in production, in-memory in tests).

use async_trait::async_trait;

use super::budgets_model::{BudgetDraft, BudgetRecord, BudgetSnapshot, BudgetView};
use crate::errors::Result;

/// Remote store contract for budget records.
///
/// Implementations perform the actual REST calls. Every method resolves
/// only after the server has confirmed or rejected the operation; there
/// are no optimistic results.
#[async_trait]
pub trait BudgetStore: Send + Sync {
    /// Fetch the combined snapshot of budgets plus the client, vehicle,
    /// and product catalogs needed to join them.
    async fn fetch_snapshot(&self) -> Result<BudgetSnapshot>;

    /// Create a budget from a flat draft. The server assigns the id and
    /// creation timestamp and returns the stored record.
    async fn create_budget(&self, draft: &BudgetDraft) -> Result<BudgetRecord>;

    /// Replace the budget identified by `id` with the draft's fields and
    /// return the stored record.
    async fn update_budget(&self, id: i64, draft: &BudgetDraft) -> Result<BudgetRecord>;

    /// Delete the budget identified by `id`.
    async fn delete_budget(&self, id: i64) -> Result<()>;
}

/// Service contract for the budget view-model.
///
/// The service owns the denormalized local collection exclusively; no
/// other component mutates it.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Fetch the full snapshot and replace the local collection with the
    /// joined views. On failure the previous collection is kept.
    async fn load(&self) -> Result<()>;

    /// The current local collection, in server insertion order.
    fn budgets(&self) -> Vec<BudgetView>;

    /// Case-insensitive filter over status and client name. A pure view:
    /// the authoritative collection is untouched and an empty term
    /// returns everything.
    fn filter(&self, term: &str) -> Vec<BudgetView>;

    /// Whether a snapshot fetch is currently in flight.
    fn is_loading(&self) -> bool;

    /// Validate and create a budget, appending the server's record to the
    /// local collection on success.
    async fn create(&self, draft: BudgetDraft) -> Result<BudgetView>;

    /// Update an existing budget. The id must be present in the local
    /// collection; the local record is replaced with the server's
    /// response on success.
    async fn update(&self, id: i64, draft: BudgetDraft) -> Result<BudgetView>;

    /// Delete a budget, removing it locally only after the server
    /// confirms. Callers must obtain explicit user confirmation before
    /// invoking this.
    async fn remove(&self, id: i64) -> Result<()>;
}

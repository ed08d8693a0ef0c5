//! Storage abstraction consumed by the page executor.

use crate::error::Result;
use crate::predicate::Predicate;
use crate::record::{Record, RecordId};
use crate::strategy::OrderKey;

/// A storage engine capable of ordered, predicate-filtered, limited scans.
///
/// Any backend providing these two primitives satisfies the contract: SQL, a
/// key-value store with a secondary index, or an in-memory sorted structure.
///
/// ## Consistency
///
/// A single page fetch performs a point lookup (cursor resolution) followed
/// by a scan. Implementations should serve both from one consistent view
/// (e.g. one transaction or snapshot). Without that, a write landing between
/// the two calls can make a just-deleted anchor surface as
/// [`Error::InvalidCursor`](crate::Error::InvalidCursor), or duplicate/skip
/// records at the page boundary. The engine documents and accepts this race;
/// it holds no state to roll back.
///
/// Failures are wrapped via [`Error::source_error`](crate::Error::source_error)
/// and propagated unchanged — the engine performs no retries. Timeouts and
/// cancellation are likewise the implementation's concern.
#[allow(async_fn_in_trait)]
pub trait DataSource {
   /// Point lookup by identifier.
   async fn get(&self, id: RecordId) -> Result<Option<Record>>;

   /// Return at most `limit` records matching `predicate`, sorted per
   /// `order`.
   async fn scan(
      &self,
      order: &[OrderKey],
      predicate: &Predicate,
      limit: usize,
   ) -> Result<Vec<Record>>;
}

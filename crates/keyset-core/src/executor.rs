//! Page executor: combines ordering, boundary predicate, and limit into a
//! single bounded fetch against a data source.

use serde::Serialize;
use tracing::debug;

use crate::cursor::resolve_anchor;
use crate::error::{Error, Result};
use crate::predicate::boundary;
use crate::record::{Record, RecordId};
use crate::source::DataSource;
use crate::strategy::StrategyRegistry;

/// A bounded page of records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
   /// The records in this page, in strategy order
   pub records: Vec<Record>,
   /// Identifier of the last record, present iff the page is full.
   ///
   /// Feed this into the next fetch to continue the walk. A shorter-than-
   /// requested page signals end of data and carries no cursor.
   pub next_cursor: Option<RecordId>,
   /// Whether more records remain past this page.
   ///
   /// Detected with a sentinel row (the scan requests one record beyond the
   /// page size), so a walk can stop without issuing the final empty fetch.
   pub has_more: bool,
}

/// Stateless page executor over a frozen [`StrategyRegistry`].
///
/// Each fetch is independent and purely a read; sequencing across pages is
/// the caller's responsibility. Safe for concurrent use from multiple tasks.
#[derive(Debug, Clone)]
pub struct Paginator {
   registry: StrategyRegistry,
}

impl Paginator {
   /// Create an executor over a registry of sort strategies.
   pub fn new(registry: StrategyRegistry) -> Self {
      Self { registry }
   }

   /// The registry this executor resolves strategy names against.
   pub fn registry(&self) -> &StrategyRegistry {
      &self.registry
   }

   /// Fetch one page: resolve the cursor, build the boundary predicate,
   /// apply the strategy's ordering and the size bound, and execute.
   ///
   /// `size` must be positive; this is checked before any data source call.
   /// The page is shorter than `size` iff fewer matching records remain.
   /// No total count is computed — counting an unbounded dataset is exactly
   /// the cost keyset pagination exists to avoid.
   pub async fn fetch_page<S: DataSource>(
      &self,
      source: &S,
      strategy_name: &str,
      cursor: Option<RecordId>,
      size: usize,
   ) -> Result<Page> {
      if size == 0 {
         return Err(Error::InvalidPageSize);
      }
      let strategy = self.registry.get(strategy_name)?;

      let anchor = resolve_anchor(source, cursor).await?;
      let predicate = boundary(strategy, anchor.as_ref());
      let order = strategy.order_keys();

      // One extra row as a sentinel: if it comes back, more pages remain.
      let limit = size.checked_add(1).ok_or(Error::InvalidPageSize)?;

      debug!(strategy = strategy_name, cursor = ?cursor, size, "fetching page");
      let mut records = source.scan(&order, &predicate, limit).await?;

      let has_more = records.len() > size;
      if has_more {
         records.truncate(size);
      }

      let next_cursor = if records.len() == size {
         records.last().map(|record| record.id)
      } else {
         None
      };

      Ok(Page {
         records,
         next_cursor,
         has_more,
      })
   }
}

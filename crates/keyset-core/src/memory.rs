//! In-memory data source: the reference [`DataSource`] implementation.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::predicate::Predicate;
use crate::record::{Record, RecordId};
use crate::source::DataSource;
use crate::strategy::{OrderKey, compare_records};

/// A data source backed by an in-memory sorted map.
///
/// Scans materialize the matching records and sort them with
/// [`compare_records`], so this is the executable definition of the scan
/// contract that storage-backed implementations must reproduce. It doubles
/// as the test fixture for the engine's own suites.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
   records: BTreeMap<RecordId, Record>,
}

impl MemorySource {
   /// Create an empty source.
   pub fn new() -> Self {
      Self::default()
   }

   /// Insert a record, replacing any existing record with the same id.
   pub fn insert(&mut self, record: Record) -> Option<Record> {
      self.records.insert(record.id, record)
   }

   /// Remove a record by id.
   pub fn remove(&mut self, id: RecordId) -> Option<Record> {
      self.records.remove(&id)
   }

   /// Number of stored records.
   pub fn len(&self) -> usize {
      self.records.len()
   }

   /// Whether the source holds no records.
   pub fn is_empty(&self) -> bool {
      self.records.is_empty()
   }
}

impl DataSource for MemorySource {
   async fn get(&self, id: RecordId) -> Result<Option<Record>> {
      Ok(self.records.get(&id).cloned())
   }

   async fn scan(
      &self,
      order: &[OrderKey],
      predicate: &Predicate,
      limit: usize,
   ) -> Result<Vec<Record>> {
      let mut matched: Vec<Record> = self
         .records
         .values()
         .filter(|record| predicate.matches(record))
         .cloned()
         .collect();

      matched.sort_by(|a, b| compare_records(order, a, b));
      matched.truncate(limit);

      Ok(matched)
   }
}

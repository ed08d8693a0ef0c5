//! Cursor resolution: mapping an opaque cursor token to its anchor record.

use crate::error::{Error, Result};
use crate::record::{Record, RecordId};
use crate::source::DataSource;

/// Resolve a cursor to the anchor record the next boundary is built from.
///
/// An absent cursor short-circuits to "no boundary" (first page). A cursor
/// that does not reference an existing record fails with
/// [`Error::InvalidCursor`], aborting the whole page request — callers must
/// be able to distinguish "end of data" from a stale or garbled cursor, so
/// this never degrades to an empty page.
pub async fn resolve_anchor<S: DataSource>(
   source: &S,
   cursor: Option<RecordId>,
) -> Result<Option<Record>> {
   let Some(id) = cursor else {
      return Ok(None);
   };

   match source.get(id).await? {
      Some(record) => Ok(Some(record)),
      None => Err(Error::InvalidCursor(id)),
   }
}

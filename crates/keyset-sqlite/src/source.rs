//! SQLite-backed [`DataSource`] implementation.

use std::path::Path;

use indexmap::IndexMap;
use keyset_core::{DataSource, FieldValue, OrderKey, Predicate, Record, RecordId};
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool, TypeInfo, Value, ValueRef};
use tracing::debug;

use crate::error::{Error, Result};
use crate::sql::{render_order_by, render_predicate};
use crate::table::TableSpec;

/// A data source reading records from one SQLite table via an `sqlx` pool.
///
/// The point lookup and the page scan run as separate pool queries; under
/// concurrent writers the engine's documented anchor race applies. Callers
/// needing strict snapshot isolation can hand the source a pool whose
/// connections read inside a transaction.
#[derive(Debug, Clone)]
pub struct SqliteSource {
   pool: SqlitePool,
   spec: TableSpec,
}

impl SqliteSource {
   /// Open (or create) a SQLite database file and scan the given table.
   pub async fn connect(path: impl AsRef<Path>, spec: TableSpec) -> Result<Self> {
      let options = SqliteConnectOptions::new()
         .filename(path.as_ref())
         .create_if_missing(true);
      let pool = SqlitePoolOptions::new().connect_with(options).await?;

      Ok(Self { pool, spec })
   }

   /// Wrap an existing pool.
   pub fn from_pool(pool: SqlitePool, spec: TableSpec) -> Self {
      Self { pool, spec }
   }

   /// The underlying connection pool.
   pub fn pool(&self) -> &SqlitePool {
      &self.pool
   }

   /// The table configuration this source scans.
   pub fn spec(&self) -> &TableSpec {
      &self.spec
   }

   async fn fetch_records(&self, sql: &str, binds: Vec<FieldValue>) -> Result<Vec<Record>> {
      let mut query = sqlx::query(sql);
      for value in binds {
         query = bind_value(query, value);
      }

      let rows = query.fetch_all(&self.pool).await?;
      rows.iter().map(|row| self.decode_row(row)).collect()
   }

   fn decode_row(&self, row: &SqliteRow) -> Result<Record> {
      // The select list puts the id column first, then the attribute
      // columns in spec order.
      let id: RecordId = row.try_get(0)?;

      let mut fields = IndexMap::with_capacity(self.spec.columns().len());
      for (index, name) in self.spec.columns().iter().enumerate() {
         let raw = row.try_get_raw(index + 1)?;
         fields.insert(name.clone(), decode_value(raw)?);
      }

      Ok(Record { id, fields })
   }
}

impl DataSource for SqliteSource {
   async fn get(&self, id: RecordId) -> keyset_core::Result<Option<Record>> {
      let sql = format!(
         "SELECT {} FROM {} WHERE {} = $1",
         self.spec.select_list(),
         self.spec.quoted_table(),
         self.spec.quoted_id_column(),
      );

      let records = self
         .fetch_records(&sql, vec![FieldValue::Integer(id)])
         .await
         .map_err(keyset_core::Error::from)?;

      Ok(records.into_iter().next())
   }

   async fn scan(
      &self,
      order: &[OrderKey],
      predicate: &Predicate,
      limit: usize,
   ) -> keyset_core::Result<Vec<Record>> {
      let mut binds = Vec::new();
      let mut sql = format!(
         "SELECT {} FROM {}",
         self.spec.select_list(),
         self.spec.quoted_table(),
      );

      if !matches!(predicate, Predicate::True) {
         let condition = render_predicate(predicate, &self.spec, &mut binds);
         sql.push_str(&format!(" WHERE ({condition})"));
      }

      sql.push_str(&format!(
         " {} LIMIT {}",
         render_order_by(order, &self.spec),
         limit,
      ));

      debug!(%sql, binds = binds.len(), "scanning page");
      self
         .fetch_records(&sql, binds)
         .await
         .map_err(keyset_core::Error::from)
   }
}

/// Bind a field value to the next query placeholder.
fn bind_value<'q>(
   query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
   value: FieldValue,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
   match value {
      FieldValue::Null => query.bind(None::<i64>),
      FieldValue::Integer(i) => query.bind(i),
      FieldValue::Real(f) => query.bind(f),
      FieldValue::Text(s) => query.bind(s),
   }
}

/// Decode one SQLite column value into a sortable field value.
///
/// INTEGER, REAL, TEXT, and NULL map directly; anything else (e.g. BLOB)
/// has no place in a sort key and is rejected.
fn decode_value(raw: sqlx::sqlite::SqliteValueRef<'_>) -> Result<FieldValue> {
   let value = ValueRef::to_owned(&raw);
   if value.is_null() {
      return Ok(FieldValue::Null);
   }

   match value.type_info().name() {
      "INTEGER" | "BOOLEAN" => Ok(FieldValue::Integer(value.try_decode::<i64>()?)),
      "REAL" => Ok(FieldValue::Real(value.try_decode::<f64>()?)),
      "TEXT" | "DATETIME" | "DATE" | "TIME" => {
         Ok(FieldValue::Text(value.try_decode::<String>()?))
      }
      other => Err(Error::UnsupportedDatatype(other.to_string())),
   }
}

//! Record model: identifiers, sortable field values, and records.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of a record.
///
/// Unique and totally ordered; assumed monotonic with respect to insertion
/// order, which makes it a deterministic, storage-order-independent
/// tie-break key.
pub type RecordId = i64;

/// A sortable field value.
///
/// Values carry a total order in the style of SQLite type affinity:
/// `Null` sorts before all numeric values, numeric values sort before text,
/// and integers and reals compare numerically with each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
   /// Absent value; sorts before everything else.
   Null,
   /// 64-bit signed integer.
   Integer(i64),
   /// 64-bit float; ordered via `f64::total_cmp`.
   Real(f64),
   /// UTF-8 text; ordered lexicographically by byte value.
   Text(String),
}

impl FieldValue {
   fn type_rank(&self) -> u8 {
      match self {
         FieldValue::Null => 0,
         FieldValue::Integer(_) | FieldValue::Real(_) => 1,
         FieldValue::Text(_) => 2,
      }
   }
}

impl Ord for FieldValue {
   fn cmp(&self, other: &Self) -> Ordering {
      use FieldValue::{Integer, Null, Real, Text};

      match (self, other) {
         (Null, Null) => Ordering::Equal,
         (Integer(a), Integer(b)) => a.cmp(b),
         (Real(a), Real(b)) => a.total_cmp(b),
         (Integer(a), Real(b)) => (*a as f64).total_cmp(b),
         (Real(a), Integer(b)) => a.total_cmp(&(*b as f64)),
         (Text(a), Text(b)) => a.cmp(b),
         _ => self.type_rank().cmp(&other.type_rank()),
      }
   }
}

impl PartialOrd for FieldValue {
   fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
      Some(self.cmp(other))
   }
}

// Equality must agree with Ord: Integer(3) == Real(3.0).
impl PartialEq for FieldValue {
   fn eq(&self, other: &Self) -> bool {
      self.cmp(other) == Ordering::Equal
   }
}

impl Eq for FieldValue {}

impl From<i64> for FieldValue {
   fn from(value: i64) -> Self {
      FieldValue::Integer(value)
   }
}

impl From<f64> for FieldValue {
   fn from(value: f64) -> Self {
      FieldValue::Real(value)
   }
}

impl From<&str> for FieldValue {
   fn from(value: &str) -> Self {
      FieldValue::Text(value.to_string())
   }
}

impl From<String> for FieldValue {
   fn from(value: String) -> Self {
      FieldValue::Text(value)
   }
}

static NULL_VALUE: FieldValue = FieldValue::Null;

/// A data item with an identifier and zero or more sortable attribute fields.
///
/// Records are owned by the data source; the pagination engine only reads
/// and compares them. A field that is absent from a record compares as
/// [`FieldValue::Null`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
   /// Unique identifier; doubles as the cursor and tie-break key.
   pub id: RecordId,
   /// Named attribute fields, in declaration order.
   pub fields: IndexMap<String, FieldValue>,
}

impl Record {
   /// Create a record with the given identifier and no fields.
   pub fn new(id: RecordId) -> Self {
      Self {
         id,
         fields: IndexMap::new(),
      }
   }

   /// Add a field, consuming and returning the record for chaining.
   pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
      self.fields.insert(name.into(), value.into());
      self
   }

   /// Look up a field by name.
   pub fn field(&self, name: &str) -> Option<&FieldValue> {
      self.fields.get(name)
   }

   /// Field value used for sorting and boundary comparison.
   ///
   /// Missing fields compare as `Null`, matching SQL semantics for absent
   /// or unset columns.
   pub fn sort_value(&self, name: &str) -> &FieldValue {
      self.fields.get(name).unwrap_or(&NULL_VALUE)
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn null_sorts_before_numbers_and_text() {
      assert!(FieldValue::Null < FieldValue::Integer(i64::MIN));
      assert!(FieldValue::Null < FieldValue::Real(f64::NEG_INFINITY));
      assert!(FieldValue::Null < FieldValue::Text(String::new()));
   }

   #[test]
   fn numbers_sort_before_text() {
      assert!(FieldValue::Integer(999) < FieldValue::Text("0".into()));
      assert!(FieldValue::Real(1e300) < FieldValue::Text(String::new()));
   }

   #[test]
   fn integers_and_reals_compare_numerically() {
      assert!(FieldValue::Integer(2) < FieldValue::Real(2.5));
      assert!(FieldValue::Real(2.5) < FieldValue::Integer(3));
      assert_eq!(FieldValue::Integer(3), FieldValue::Real(3.0));
   }

   #[test]
   fn text_compares_lexicographically() {
      assert!(FieldValue::Text("apple".into()) < FieldValue::Text("banana".into()));
      assert_eq!(
         FieldValue::Text("same".into()),
         FieldValue::Text("same".into())
      );
   }

   #[test]
   fn missing_field_is_null() {
      let record = Record::new(1).with_field("age", 10);
      assert_eq!(record.sort_value("age"), &FieldValue::Integer(10));
      assert_eq!(record.sort_value("height"), &FieldValue::Null);
      assert!(record.field("height").is_none());
   }

   #[test]
   fn with_field_replaces_existing_value() {
      let record = Record::new(1).with_field("age", 10).with_field("age", 11);
      assert_eq!(record.sort_value("age"), &FieldValue::Integer(11));
      assert_eq!(record.fields.len(), 1);
   }

   #[test]
   fn field_value_serializes_to_camel_case() {
      assert_eq!(
         serde_json::to_string(&FieldValue::Integer(7)).unwrap(),
         r#"{"integer":7}"#
      );
      assert_eq!(serde_json::to_string(&FieldValue::Null).unwrap(), "\"null\"");
   }
}

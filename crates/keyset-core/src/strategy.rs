//! Named sort strategies and the registry that maps names to orderings.
//!
//! A [`SortStrategy`] is an ordered list of attribute sort keys. The
//! ascending-identifier tie-break is never part of the registered key list:
//! the engine appends it to every ordering and every boundary predicate, so
//! two records with an equal primary sort value can never be skipped or
//! duplicated across pages, and the tie-break can never be misconfigured.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::predicate::FieldRef;
use crate::record::Record;

/// Sort direction for a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
   /// Ascending order (smallest first)
   Asc,
   /// Descending order (largest first)
   Desc,
}

impl SortDirection {
   /// Return the opposite sort direction.
   pub fn reversed(self) -> Self {
      match self {
         SortDirection::Asc => SortDirection::Desc,
         SortDirection::Desc => SortDirection::Asc,
      }
   }
}

/// An attribute field paired with a sort direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKey {
   /// Attribute field name the key sorts on
   pub field: String,
   /// Sort direction for this key
   pub direction: SortDirection,
}

impl SortKey {
   /// Create a sort key with ascending direction.
   pub fn asc(field: impl Into<String>) -> Self {
      Self {
         field: field.into(),
         direction: SortDirection::Asc,
      }
   }

   /// Create a sort key with descending direction.
   pub fn desc(field: impl Into<String>) -> Self {
      Self {
         field: field.into(),
         direction: SortDirection::Desc,
      }
   }
}

/// One level of the effective ordering handed to a data source.
///
/// Unlike [`SortKey`], this can reference the record identifier, which is how
/// the implicit tie-break reaches storage backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderKey {
   /// Field the ordering level compares
   pub field: FieldRef,
   /// Direction for this level
   pub direction: SortDirection,
}

/// A named sort strategy's multi-key ordering definition.
///
/// Holds the attribute keys only; [`SortStrategy::order_keys`] appends the
/// ascending-identifier tie-break as the final level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStrategy {
   keys: Vec<SortKey>,
}

impl SortStrategy {
   pub(crate) fn new(keys: Vec<SortKey>) -> Self {
      Self { keys }
   }

   /// The registered attribute keys, in precedence order.
   pub fn keys(&self) -> &[SortKey] {
      &self.keys
   }

   /// The full ordering for a data-source scan: attribute keys followed by
   /// the ascending-identifier tie-break.
   pub fn order_keys(&self) -> Vec<OrderKey> {
      let mut order: Vec<OrderKey> = self
         .keys
         .iter()
         .map(|key| OrderKey {
            field: FieldRef::Named(key.field.clone()),
            direction: key.direction,
         })
         .collect();

      order.push(OrderKey {
         field: FieldRef::Id,
         direction: SortDirection::Asc,
      });

      order
   }

   /// Compare two records under this strategy's full ordering.
   pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
      compare_records(&self.order_keys(), a, b)
   }
}

/// Compare two records under an explicit ordering.
///
/// This is the comparator data sources without native ordering support (such
/// as [`MemorySource`](crate::MemorySource)) sort with.
pub fn compare_records(order: &[OrderKey], a: &Record, b: &Record) -> Ordering {
   for key in order {
      let ordering = match &key.field {
         FieldRef::Id => a.id.cmp(&b.id),
         FieldRef::Named(name) => a.sort_value(name).cmp(b.sort_value(name)),
      };

      let ordering = match key.direction {
         SortDirection::Asc => ordering,
         SortDirection::Desc => ordering.reverse(),
      };

      if ordering != Ordering::Equal {
         return ordering;
      }
   }

   Ordering::Equal
}

/// Validate that a field name is safe for storage-backend interpolation.
///
/// Accepts names matching `[a-zA-Z_][a-zA-Z0-9_]*`.
pub(crate) fn validate_field_name(name: &str) -> Result<()> {
   let mut chars = name.chars();

   let Some(first) = chars.next() else {
      return Err(Error::InvalidFieldName {
         name: name.to_string(),
      });
   };
   if !first.is_ascii_alphabetic() && first != '_' {
      return Err(Error::InvalidFieldName {
         name: name.to_string(),
      });
   }

   for ch in chars {
      if !ch.is_ascii_alphanumeric() && ch != '_' {
         return Err(Error::InvalidFieldName {
            name: name.to_string(),
         });
      }
   }

   Ok(())
}

/// Immutable map from strategy name to its ordering definition.
///
/// Built once via [`StrategyRegistry::builder`] and read-only afterwards, so
/// it can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
   strategies: IndexMap<String, SortStrategy>,
}

impl StrategyRegistry {
   /// Start building a registry.
   pub fn builder() -> RegistryBuilder {
      RegistryBuilder::default()
   }

   /// Look up a strategy by name.
   pub fn get(&self, name: &str) -> Result<&SortStrategy> {
      self
         .strategies
         .get(name)
         .ok_or_else(|| Error::UnknownStrategy(name.to_string()))
   }

   /// Registered strategy names, in registration order.
   pub fn names(&self) -> impl Iterator<Item = &str> {
      self.strategies.keys().map(String::as_str)
   }

   /// Number of registered strategies.
   pub fn len(&self) -> usize {
      self.strategies.len()
   }

   /// Whether the registry is empty.
   pub fn is_empty(&self) -> bool {
      self.strategies.is_empty()
   }
}

/// Builder for [`StrategyRegistry`].
///
/// Validation is deferred to [`RegistryBuilder::build`] so registration reads
/// as a simple declarative list.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
   strategies: Vec<(String, Vec<SortKey>)>,
}

impl RegistryBuilder {
   /// Register a named strategy with its attribute keys.
   ///
   /// An empty key list is valid and yields a pure identifier ordering.
   pub fn strategy(mut self, name: impl Into<String>, keys: Vec<SortKey>) -> Self {
      self.strategies.push((name.into(), keys));
      self
   }

   /// Validate all registrations and freeze the registry.
   pub fn build(self) -> Result<StrategyRegistry> {
      let mut strategies = IndexMap::with_capacity(self.strategies.len());

      for (name, keys) in self.strategies {
         for key in &keys {
            validate_field_name(&key.field)?;
         }
         if strategies.contains_key(&name) {
            return Err(Error::DuplicateStrategy(name));
         }
         strategies.insert(name, SortStrategy::new(keys));
      }

      Ok(StrategyRegistry { strategies })
   }
}

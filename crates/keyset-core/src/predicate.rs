//! Boundary predicates: the condition selecting records strictly after an
//! anchor in a strategy's ordering.
//!
//! Predicates are a small inspectable AST rather than closures so that
//! storage backends can translate them (e.g. to SQL) while in-memory sources
//! evaluate them directly with [`Predicate::matches`].

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record};
use crate::strategy::{SortDirection, SortStrategy};

/// Reference to a comparable field of a record.
///
/// The identifier gets its own variant so predicates never depend on a magic
/// attribute name for the tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldRef {
   /// The record identifier
   Id,
   /// A named attribute field
   Named(String),
}

/// Comparison operator for a predicate leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CmpOp {
   /// Strictly greater than
   Gt,
   /// Strictly less than
   Lt,
   /// Equal to
   Eq,
}

/// A boundary predicate over records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Predicate {
   /// Matches every record (no restriction; first page)
   True,
   /// Compare one field against a constant
   Cmp {
      field: FieldRef,
      op: CmpOp,
      value: FieldValue,
   },
   /// All sub-predicates must match
   And(Vec<Predicate>),
   /// At least one sub-predicate must match
   Or(Vec<Predicate>),
}

impl Predicate {
   /// Evaluate the predicate against a record.
   pub fn matches(&self, record: &Record) -> bool {
      match self {
         Predicate::True => true,
         Predicate::Cmp { field, op, value } => {
            let resolved = match field {
               FieldRef::Id => FieldValue::Integer(record.id),
               FieldRef::Named(name) => record.sort_value(name).clone(),
            };
            match op {
               CmpOp::Gt => resolved > *value,
               CmpOp::Lt => resolved < *value,
               CmpOp::Eq => resolved == *value,
            }
         }
         Predicate::And(parts) => parts.iter().all(|p| p.matches(record)),
         Predicate::Or(parts) => parts.iter().any(|p| p.matches(record)),
      }
   }
}

/// Build the boundary predicate selecting records strictly after `anchor` in
/// the strategy's ordering.
///
/// Without an anchor (first page) the predicate is unrestricted. With an
/// anchor, an ordering with keys `K1..Kn` produces the chained composite
///
/// ```text
/// (K1 cmp a.K1) OR (K1 = a.K1 AND (K2 cmp a.K2 OR (K2 = a.K2 AND ... (id > a.id))))
/// ```
///
/// where `cmp` is `>` for ascending keys and `<` for descending keys. The
/// innermost tie-break is always `id > anchor.id` — strict and ascending
/// regardless of the primary direction — which is what makes the walk through
/// duplicate primary values stable and resumable.
pub fn boundary(strategy: &SortStrategy, anchor: Option<&Record>) -> Predicate {
   let Some(anchor) = anchor else {
      return Predicate::True;
   };

   let mut predicate = Predicate::Cmp {
      field: FieldRef::Id,
      op: CmpOp::Gt,
      value: FieldValue::Integer(anchor.id),
   };

   for key in strategy.keys().iter().rev() {
      let anchor_value = anchor.sort_value(&key.field).clone();
      let op = match key.direction {
         SortDirection::Asc => CmpOp::Gt,
         SortDirection::Desc => CmpOp::Lt,
      };

      predicate = Predicate::Or(vec![
         Predicate::Cmp {
            field: FieldRef::Named(key.field.clone()),
            op,
            value: anchor_value.clone(),
         },
         Predicate::And(vec![
            Predicate::Cmp {
               field: FieldRef::Named(key.field.clone()),
               op: CmpOp::Eq,
               value: anchor_value,
            },
            predicate,
         ]),
      ]);
   }

   predicate
}

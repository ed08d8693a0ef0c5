//! SQL rendering: translating the engine's predicate and ordering model
//! into SQLite fragments with `$N` placeholders.

use keyset_core::{CmpOp, FieldValue, OrderKey, Predicate, SortDirection};

use crate::table::TableSpec;

/// Render a predicate as a SQL condition, appending bind values.
///
/// Placeholders are numbered `$N` from `binds.len() + 1`, so fragments can
/// be composed with other bound parameters.
///
/// Comparisons mirror the engine's value ordering (`Null` sorts before
/// everything) rather than SQL three-valued logic: `= Null` renders as
/// `IS NULL`, `> Null` as `IS NOT NULL`, and `< Null` matches nothing.
/// `<` against a non-null value must also admit NULL rows — under the
/// engine's ordering they sort below every value, but a bare SQL `<`
/// comparison would drop them.
pub(crate) fn render_predicate(
   predicate: &Predicate,
   spec: &TableSpec,
   binds: &mut Vec<FieldValue>,
) -> String {
   match predicate {
      Predicate::True => "1".to_string(),
      Predicate::Cmp { field, op, value } => {
         let column = spec.column_sql(field);
         match (op, value) {
            (CmpOp::Eq, FieldValue::Null) => format!("{column} IS NULL"),
            (CmpOp::Gt, FieldValue::Null) => format!("{column} IS NOT NULL"),
            (CmpOp::Lt, FieldValue::Null) => "0".to_string(),
            (CmpOp::Lt, value) => {
               binds.push(value.clone());
               format!("({column} < ${} OR {column} IS NULL)", binds.len())
            }
            (op, value) => {
               binds.push(value.clone());
               format!("{} {} ${}", column, op_sql(*op), binds.len())
            }
         }
      }
      Predicate::And(parts) => join_parts(parts, " AND ", spec, binds),
      Predicate::Or(parts) => join_parts(parts, " OR ", spec, binds),
   }
}

fn join_parts(
   parts: &[Predicate],
   separator: &str,
   spec: &TableSpec,
   binds: &mut Vec<FieldValue>,
) -> String {
   parts
      .iter()
      .map(|part| format!("({})", render_predicate(part, spec, binds)))
      .collect::<Vec<_>>()
      .join(separator)
}

fn op_sql(op: CmpOp) -> &'static str {
   match op {
      CmpOp::Gt => ">",
      CmpOp::Lt => "<",
      CmpOp::Eq => "=",
   }
}

/// Render the ORDER BY clause for an ordering.
pub(crate) fn render_order_by(order: &[OrderKey], spec: &TableSpec) -> String {
   let parts: Vec<String> = order
      .iter()
      .map(|key| {
         let direction = match key.direction {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
         };
         format!("{} {}", spec.column_sql(&key.field), direction)
      })
      .collect();

   format!("ORDER BY {}", parts.join(", "))
}

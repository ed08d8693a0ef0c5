//! Table configuration: which table and columns a source reads from.

use keyset_core::FieldRef;

use crate::error::{Error, Result};

/// Validate that an identifier is safe for SQL interpolation.
///
/// Accepts names matching `[a-zA-Z_][a-zA-Z0-9_.]*`, which covers plain
/// names, qualified names (e.g. `schema.table`), and underscored
/// identifiers.
pub(crate) fn validate_identifier(name: &str) -> Result<()> {
   let mut chars = name.chars();

   let Some(first) = chars.next() else {
      return Err(Error::InvalidIdentifier {
         name: name.to_string(),
      });
   };
   if !first.is_ascii_alphabetic() && first != '_' {
      return Err(Error::InvalidIdentifier {
         name: name.to_string(),
      });
   }

   for ch in chars {
      if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '.' {
         return Err(Error::InvalidIdentifier {
            name: name.to_string(),
         });
      }
   }

   Ok(())
}

/// Quote an identifier with double-quote delimiters.
///
/// Any embedded double quotes are doubled per SQL standard (`"` → `""`).
pub(crate) fn quote_identifier(name: &str) -> String {
   format!("\"{}\"", name.replace('"', "\"\""))
}

/// Describes the table a [`SqliteSource`](crate::SqliteSource) scans:
/// the table name, the identifier column, and the attribute columns exposed
/// as record fields.
///
/// All identifiers are validated at construction, so SQL rendering can
/// interpolate them without further checks.
#[derive(Debug, Clone)]
pub struct TableSpec {
   table: String,
   id_column: String,
   columns: Vec<String>,
}

impl TableSpec {
   /// Create a table spec, validating every identifier.
   ///
   /// The id column must not be repeated in `columns`; it is always selected
   /// first and populates the record identifier, not a named field.
   pub fn new(
      table: impl Into<String>,
      id_column: impl Into<String>,
      columns: impl IntoIterator<Item = impl Into<String>>,
   ) -> Result<Self> {
      let table = table.into();
      let id_column = id_column.into();
      let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

      validate_identifier(&table)?;
      validate_identifier(&id_column)?;
      for column in &columns {
         validate_identifier(column)?;
         if *column == id_column {
            return Err(Error::DuplicateIdColumn(id_column));
         }
      }

      Ok(Self {
         table,
         id_column,
         columns,
      })
   }

   /// Table name as configured.
   pub fn table(&self) -> &str {
      &self.table
   }

   /// Identifier column name as configured.
   pub fn id_column(&self) -> &str {
      &self.id_column
   }

   /// Attribute column names, in selection order.
   pub fn columns(&self) -> &[String] {
      &self.columns
   }

   pub(crate) fn quoted_table(&self) -> String {
      quote_identifier(&self.table)
   }

   pub(crate) fn quoted_id_column(&self) -> String {
      quote_identifier(&self.id_column)
   }

   /// The SELECT list: the id column first, then the attribute columns.
   pub(crate) fn select_list(&self) -> String {
      let mut parts = Vec::with_capacity(self.columns.len() + 1);
      parts.push(self.quoted_id_column());
      parts.extend(self.columns.iter().map(|c| quote_identifier(c)));
      parts.join(", ")
   }

   /// SQL column expression for an engine field reference.
   pub(crate) fn column_sql(&self, field: &FieldRef) -> String {
      match field {
         FieldRef::Id => self.quoted_id_column(),
         FieldRef::Named(name) => quote_identifier(name),
      }
   }
}

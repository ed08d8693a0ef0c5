/// Result type alias for SQLite source operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the SQLite data source.
///
/// Errors crossing the [`DataSource`](keyset_core::DataSource) boundary are
/// wrapped in [`keyset_core::Error::Source`] and propagated unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Error from SQLx operations.
   #[error(transparent)]
   Sqlx(#[from] sqlx::Error),

   /// Table or column name contains invalid characters.
   ///
   /// Identifiers must match `[a-zA-Z_][a-zA-Z0-9_.]*` (letters, digits,
   /// underscores, and dots for qualified names like `schema.table`).
   #[error("invalid SQL identifier '{name}': must match [a-zA-Z_][a-zA-Z0-9_.]*")]
   InvalidIdentifier { name: String },

   /// Id column was also listed among the attribute columns.
   #[error("id column '{0}' must not be listed among the attribute columns")]
   DuplicateIdColumn(String),

   /// SQLite type that cannot be mapped to a sortable field value.
   #[error("unsupported datatype: {0}")]
   UnsupportedDatatype(String),
}

impl From<Error> for keyset_core::Error {
   fn from(err: Error) -> Self {
      keyset_core::Error::source_error(err)
   }
}

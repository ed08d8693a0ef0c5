use crate::record::RecordId;

/// Result type alias for pagination operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for keyset pagination operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Sort strategy name is not present in the registry.
   #[error("unknown sort strategy: {0}")]
   UnknownStrategy(String),

   /// Sort strategy name was registered more than once.
   #[error("sort strategy already registered: {0}")]
   DuplicateStrategy(String),

   /// Sort key references a field with an invalid name.
   ///
   /// Field names must match `[a-zA-Z_][a-zA-Z0-9_]*` so that storage
   /// backends can interpolate them into queries safely.
   #[error("invalid sort field name '{name}': must match [a-zA-Z_][a-zA-Z0-9_]*")]
   InvalidFieldName { name: String },

   /// Cursor identifier does not resolve to an existing record.
   ///
   /// Distinct from an empty page: a stale or garbled cursor aborts the
   /// whole request so callers can tell it apart from end-of-data.
   #[error("cursor does not reference an existing record: {0}")]
   InvalidCursor(RecordId),

   /// Page size must be greater than zero.
   #[error("page size must be greater than zero")]
   InvalidPageSize,

   /// Failure reported by the underlying data source.
   ///
   /// Propagated unchanged; the engine does not retry or mask.
   #[error("data source error: {0}")]
   Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
   /// Wrap a storage-backend failure for propagation through the engine.
   pub fn source_error(err: impl std::error::Error + Send + Sync + 'static) -> Self {
      Error::Source(Box::new(err))
   }

   /// Extract a structured error code from the error type.
   ///
   /// This provides machine-readable error codes for error handling.
   pub fn error_code(&self) -> &'static str {
      match self {
         Error::UnknownStrategy(_) => "UNKNOWN_STRATEGY",
         Error::DuplicateStrategy(_) => "DUPLICATE_STRATEGY",
         Error::InvalidFieldName { .. } => "INVALID_FIELD_NAME",
         Error::InvalidCursor(_) => "INVALID_CURSOR",
         Error::InvalidPageSize => "INVALID_PAGE_SIZE",
         Error::Source(_) => "SOURCE_ERROR",
      }
   }
}

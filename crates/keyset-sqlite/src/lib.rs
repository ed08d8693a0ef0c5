//! # keyset-sqlite
//!
//! SQLite [`DataSource`](keyset_core::DataSource) for the `keyset-core`
//! pagination engine, built on `sqlx`.
//!
//! ## Core Types
//!
//! - **[`SqliteSource`]**: Data source reading records from one SQLite table
//! - **[`TableSpec`]**: Table/column configuration with identifier validation
//! - **[`Error`]**: Error type for setup and SQL translation failures
//!
//! ## How It Works
//!
//! The engine hands this crate an ordering and a boundary-predicate AST;
//! `keyset-sqlite` renders them into a single `SELECT … WHERE … ORDER BY …
//! LIMIT …` with `$N` placeholders, executes it on an `sqlx` pool, and
//! decodes the rows back into engine records. Cursor resolution is a point
//! lookup on the configured id column.
//!
//! ```no_run
//! use keyset_core::{Paginator, SortKey, StrategyRegistry};
//! use keyset_sqlite::{SqliteSource, TableSpec};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = TableSpec::new("students", "id", ["name", "age"])?;
//! let source = SqliteSource::connect("students.db", spec).await?;
//!
//! let registry = StrategyRegistry::builder()
//!    .strategy("age_asc", vec![SortKey::asc("age")])
//!    .build()?;
//! let paginator = Paginator::new(registry);
//!
//! let page = paginator.fetch_page(&source, "age_asc", None, 20).await?;
//! let next = paginator
//!    .fetch_page(&source, "age_asc", page.next_cursor, 20)
//!    .await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod source;
mod sql;
mod table;

pub use error::{Error, Result};
pub use source::SqliteSource;
pub use table::TableSpec;

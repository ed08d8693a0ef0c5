//! # keyset-core
//!
//! A standalone keyset (cursor) pagination engine for read-only range scans
//! over a totally ordered dataset, with pluggable named sort strategies and
//! stable, stateless cursor semantics.
//!
//! ## Core Types
//!
//! - **[`Paginator`]**: Page executor — combines ordering, boundary predicate,
//!   and limit into a single bounded fetch against a [`DataSource`]
//! - **[`StrategyRegistry`]**: Immutable map from strategy name to its
//!   multi-key ordering definition
//! - **[`Predicate`]**: Inspectable boundary-predicate AST, evaluable
//!   in-memory and translatable by storage backends
//! - **[`DataSource`]**: Storage abstraction — point lookup by id plus an
//!   ordered, predicate-filtered, limit-bounded scan
//! - **[`MemorySource`]**: In-memory reference implementation of
//!   [`DataSource`]
//!
//! ## How It Works
//!
//! Instead of skipping rows with an offset, keyset pagination seeks past the
//! last-seen record (the *anchor*) by comparing against its key values. A
//! cursor is simply the identifier of the last record on the previous page;
//! the engine resolves it to the anchor record, builds a boundary predicate
//! selecting only records strictly after the anchor in the strategy's
//! ordering, and fetches the next bounded page.
//!
//! Every ordering ends with an implicit ascending-identifier tie-break, so
//! records sharing a primary sort value are never skipped or duplicated
//! across pages — regardless of the primary sort direction.
//!
//! Each fetch is stateless and independent; sequencing across pages is the
//! caller's responsibility (present the prior page's `next_cursor` on the
//! next request). The engine never mutates records and holds no
//! session-scoped state, so it is safe for concurrent use.

mod cursor;
mod error;
mod executor;
mod memory;
mod predicate;
mod record;
mod source;
mod strategy;

pub use cursor::resolve_anchor;
pub use error::{Error, Result};
pub use executor::{Page, Paginator};
pub use memory::MemorySource;
pub use predicate::{CmpOp, FieldRef, Predicate, boundary};
pub use record::{FieldValue, Record, RecordId};
pub use source::DataSource;
pub use strategy::{
   OrderKey, RegistryBuilder, SortDirection, SortKey, SortStrategy, StrategyRegistry,
   compare_records,
};

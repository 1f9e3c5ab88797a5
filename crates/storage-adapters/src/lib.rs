//! # storage-adapters
//!
//! Implementations of [`domains::ThreadRepository`].
//!
//! - [`InMemoryThreadRepository`]: always compiled; used for local runs
//!   (`DATABASE_URL=memory://`) and tests.
//! - `PgThreadRepository`: Postgres, one JSONB document per thread
//!   (feature `db-postgres`).

pub mod memory;
#[cfg(feature = "db-postgres")]
pub mod postgres;

pub use memory::InMemoryThreadRepository;
#[cfg(feature = "db-postgres")]
pub use postgres::PgThreadRepository;

//! affinity-storage: SQLite persistence for transactions and rules.
//!
//! Connection pragmas, schema migrations, and query modules. The engine
//! reads transaction rows through this crate and writes its ranked rule
//! table back; analysis code never depends on storage internals.

pub mod connection;
pub mod migrations;
pub mod queries;

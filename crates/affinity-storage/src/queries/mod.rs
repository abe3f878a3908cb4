//! Query modules for each domain table.

pub mod rules;
pub mod transactions;

//! Report computations over the double-entry ledger.
//!
//! Each submodule owns one report family and reads through SeaORM from the
//! entities in the `model` crate:
//!
//! - [`chart`] loads and validates the chart of accounts
//! - [`ledger`] folds journal lines into the trial balance and profit & loss
//! - [`receivables`] summarizes invoices, payments and per-line margins
//! - [`trend`] buckets invoice totals over a lookback window and paginates
//!
//! All operations are read-only. They recompute from source rows on every
//! call and share no state across calls, so any number of them may run
//! concurrently against the same connection pool.

pub mod chart;
pub mod error;
pub mod ledger;
pub mod receivables;
pub mod trend;

#[cfg(test)]
pub(crate) mod testing;

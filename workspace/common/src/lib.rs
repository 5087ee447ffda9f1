//! Shared wire types for the ledger reporting API.
//! The compute layer builds these shapes and the HTTP layer serializes them,
//! so they live in one crate to keep both sides in agreement.

mod money;
mod reports;
mod trend;

pub use money::money;
pub use reports::{GrossProfitSummary, ProfitAndLossSummary, ReceivablesSummary, TrialBalanceRow};
pub use trend::{
    BucketWidth, InvalidTrendRange, PurchaseTrendPoint, SalesTrendPoint, TrendPage, TrendRange,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

//! Windowing and bucketing policy for the sales/purchase trend reports,
//! plus the paginated wire shapes they produce.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::money::money;

/// Default number of buckets per page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Lookback window selector for the trend reports.
///
/// The literal forms (`24h`, `4d`, ...) are the accepted values of the
/// `range` query parameter; anything else is rejected before any data access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
pub enum TrendRange {
    /// Last 24 hours.
    Hours24,
    /// Last 4 days.
    Days4,
    /// Last 7 days.
    Week1,
    /// Last 30 days.
    #[default]
    Month1,
    /// Last 90 days.
    Months3,
    /// Last 180 days.
    Months6,
    /// Last 365 days.
    Year1,
}

impl TrendRange {
    /// Every accepted range, in the order the API documents them.
    pub const ALL: [TrendRange; 7] = [
        TrendRange::Hours24,
        TrendRange::Days4,
        TrendRange::Week1,
        TrendRange::Month1,
        TrendRange::Months3,
        TrendRange::Months6,
        TrendRange::Year1,
    ];

    /// Query-parameter literal for this range.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendRange::Hours24 => "24h",
            TrendRange::Days4 => "4d",
            TrendRange::Week1 => "1w",
            TrendRange::Month1 => "1m",
            TrendRange::Months3 => "3m",
            TrendRange::Months6 => "6m",
            TrendRange::Year1 => "1y",
        }
    }

    /// How far back from "now" the window reaches.
    pub fn lookback(&self) -> Duration {
        match self {
            TrendRange::Hours24 => Duration::hours(24),
            TrendRange::Days4 => Duration::days(4),
            TrendRange::Week1 => Duration::weeks(1),
            TrendRange::Month1 => Duration::days(30),
            TrendRange::Months3 => Duration::days(90),
            TrendRange::Months6 => Duration::days(180),
            TrendRange::Year1 => Duration::days(365),
        }
    }

    /// Bucket granularity is tied to the range: windows up to a month bucket
    /// by day, the quarter and half-year windows by week, the full year by
    /// month.
    pub fn bucket_width(&self) -> BucketWidth {
        match self {
            TrendRange::Hours24 | TrendRange::Days4 | TrendRange::Week1 | TrendRange::Month1 => {
                BucketWidth::Day
            }
            TrendRange::Months3 | TrendRange::Months6 => BucketWidth::Week,
            TrendRange::Year1 => BucketWidth::Month,
        }
    }

    /// First calendar date inside the window.
    ///
    /// Invoice dates are plain dates, so the instant `now - lookback` is
    /// floored to its date and invoices with `date >= window_start` are in.
    pub fn window_start(&self, now: DateTime<Utc>) -> NaiveDate {
        (now - self.lookback()).date_naive()
    }
}

impl fmt::Display for TrendRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized `range` literal. The `Display` output is returned to API
/// callers verbatim, so it names the offending value and the accepted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTrendRange(pub String);

impl fmt::Display for InvalidTrendRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid range '{}'. Valid: 24h, 4d, 1w, 1m, 3m, 6m, 1y.",
            self.0
        )
    }
}

impl std::error::Error for InvalidTrendRange {}

impl FromStr for TrendRange {
    type Err = InvalidTrendRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrendRange::ALL
            .iter()
            .copied()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| InvalidTrendRange(s.to_string()))
    }
}

/// Width of one trend bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketWidth {
    Day,
    Week,
    Month,
}

impl BucketWidth {
    /// Truncate a date to the start of its bucket.
    ///
    /// Weeks start on ISO Monday and months truncate to the first. Every
    /// invoice date maps to exactly one bucket start, so this function is the
    /// single place the calendar convention lives.
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            BucketWidth::Day => date,
            BucketWidth::Week => date.week(Weekday::Mon).first_day(),
            BucketWidth::Month => date.with_day(1).unwrap_or(date),
        }
    }
}

/// One bucket of the sales trend series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SalesTrendPoint {
    /// Bucket start date.
    pub period: NaiveDate,
    /// Sum of invoice totals falling into this bucket.
    pub total_sales: Decimal,
}

impl SalesTrendPoint {
    pub fn new(period: NaiveDate, total_sales: Decimal) -> Self {
        Self {
            period,
            total_sales: money(total_sales),
        }
    }
}

/// One bucket of the purchase trend series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PurchaseTrendPoint {
    /// Bucket start date.
    pub period: NaiveDate,
    /// Sum of invoice totals falling into this bucket.
    pub total_purchases: Decimal,
}

impl PurchaseTrendPoint {
    pub fn new(period: NaiveDate, total_purchases: Decimal) -> Self {
        Self {
            period,
            total_purchases: money(total_purchases),
        }
    }
}

/// Pagination envelope for the trend reports.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TrendPage<T> {
    /// Number of buckets across the whole series, not just this page.
    pub total_count: u64,
    /// Relative link to the next page, or null on the last page.
    pub next_page: Option<String>,
    /// Relative link to the previous page, or null on the first page.
    pub prev_page: Option<String>,
    /// Buckets on this page, ascending by period.
    pub data: Vec<T>,
}

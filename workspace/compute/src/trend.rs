//! Time-bucketed sales and purchase series over a lookback window.
//!
//! The window and bucket width both follow from the caller's
//! [`TrendRange`]; the date filter is pushed into the invoice query and the
//! surviving rows are folded into a `BTreeMap`, so buckets come out ordered
//! ascending by bucket start. Pagination applies to that ordered bucket
//! list, never to raw invoices.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::{debug, instrument};

use common::{BucketWidth, PurchaseTrendPoint, SalesTrendPoint, TrendRange};
use model::entities::{purchase_invoice, sales_invoice};

use crate::error::{ComputeError, Result};

/// One page of a bucketed series, with enough counters for the caller to
/// build navigation links.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSlice<T> {
    /// Number of buckets in the whole series.
    pub total_count: u64,
    /// 1-based page number this slice holds.
    pub page: u64,
    pub page_size: u64,
    pub has_next: bool,
    pub has_prev: bool,
    /// Buckets on this page, ascending by period.
    pub data: Vec<T>,
}

/// Buckets sales invoice totals over the range's window.
///
/// `now` anchors the window so callers (and tests) control the clock.
/// `page` is 1-based; requesting past the last page is an error, but page 1
/// of an empty series is an empty slice.
#[instrument(skip(db), fields(range = %range, page = page, page_size = page_size))]
pub async fn sales_trend(
    db: &DatabaseConnection,
    range: TrendRange,
    now: DateTime<Utc>,
    page: u64,
    page_size: u64,
) -> Result<TrendSlice<SalesTrendPoint>> {
    let window_start = range.window_start(now);
    let invoices = sales_invoice::Entity::find()
        .filter(sales_invoice::Column::Date.gte(window_start))
        .all(db)
        .await?;

    debug!(
        "Sales trend: {} invoices on or after {}, bucketed by {:?}",
        invoices.len(),
        window_start,
        range.bucket_width()
    );

    let buckets = bucket_totals(
        invoices
            .iter()
            .map(|invoice| (invoice.date, invoice.total_amount)),
        range.bucket_width(),
    );
    let points = buckets
        .into_iter()
        .map(|(period, total)| SalesTrendPoint::new(period, total))
        .collect();

    paginate(points, page, page_size)
}

/// Buckets purchase invoice totals over the range's window. Same windowing,
/// bucketing and pagination rules as [`sales_trend`].
#[instrument(skip(db), fields(range = %range, page = page, page_size = page_size))]
pub async fn purchase_trend(
    db: &DatabaseConnection,
    range: TrendRange,
    now: DateTime<Utc>,
    page: u64,
    page_size: u64,
) -> Result<TrendSlice<PurchaseTrendPoint>> {
    let window_start = range.window_start(now);
    let invoices = purchase_invoice::Entity::find()
        .filter(purchase_invoice::Column::Date.gte(window_start))
        .all(db)
        .await?;

    debug!(
        "Purchase trend: {} invoices on or after {}, bucketed by {:?}",
        invoices.len(),
        window_start,
        range.bucket_width()
    );

    let buckets = bucket_totals(
        invoices
            .iter()
            .map(|invoice| (invoice.date, invoice.total_amount)),
        range.bucket_width(),
    );
    let points = buckets
        .into_iter()
        .map(|(period, total)| PurchaseTrendPoint::new(period, total))
        .collect();

    paginate(points, page, page_size)
}

/// Folds dated amounts into per-bucket totals, keyed by bucket start.
///
/// The `BTreeMap` keeps buckets sorted ascending, which is the order the
/// report pages through.
fn bucket_totals<I>(rows: I, width: BucketWidth) -> BTreeMap<NaiveDate, Decimal>
where
    I: IntoIterator<Item = (NaiveDate, Decimal)>,
{
    let mut buckets = BTreeMap::new();
    for (invoice_date, amount) in rows {
        *buckets
            .entry(width.bucket_start(invoice_date))
            .or_insert(Decimal::ZERO) += amount;
    }
    buckets
}

/// Cuts one 1-based page out of the ordered bucket list.
///
/// An empty series still has one (empty) valid page, so asking for page 1
/// of nothing succeeds; anything past the last page does not. Callers are
/// expected to have validated `page >= 1` and a sane `page_size` already.
fn paginate<T>(points: Vec<T>, page: u64, page_size: u64) -> Result<TrendSlice<T>> {
    let total_count = points.len() as u64;
    let last_page = total_count.div_ceil(page_size).max(1);

    if page > last_page {
        return Err(ComputeError::PageOutOfRange { page, last_page });
    }

    let start = page.saturating_sub(1) * page_size;
    let data: Vec<T> = points
        .into_iter()
        .skip(start as usize)
        .take(page_size as usize)
        .collect();

    Ok(TrendSlice {
        total_count,
        page,
        page_size,
        has_next: page < last_page,
        has_prev: page > 1,
        data,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::testing::{date, dec, new_company, new_purchase_invoice, new_sales_invoice, setup_db};

    fn now() -> DateTime<Utc> {
        "2026-03-15T10:30:00Z".parse().unwrap()
    }

    #[tokio::test]
    async fn test_sales_trend_excludes_invoices_before_window() {
        let db = setup_db().await.unwrap();
        let company = new_company(&db).await.unwrap();

        new_sales_invoice(&db, &company, "SI-0001", date(2026, 3, 15), "500.00")
            .await
            .unwrap();
        new_sales_invoice(&db, &company, "SI-0002", date(2026, 3, 14), "249.25")
            .await
            .unwrap();
        // 40 days back, outside the one month window.
        new_sales_invoice(&db, &company, "SI-0003", date(2026, 2, 3), "100.00")
            .await
            .unwrap();

        let slice = sales_trend(&db, TrendRange::Month1, now(), 1, 10)
            .await
            .unwrap();

        assert_eq!(slice.total_count, 2);
        assert_eq!(slice.data.len(), 2);
        assert_eq!(slice.data[0].period, date(2026, 3, 14));
        assert_eq!(slice.data[0].total_sales, dec("249.25"));
        assert_eq!(slice.data[1].period, date(2026, 3, 15));
        assert_eq!(slice.data[1].total_sales, dec("500.00"));
        assert!(!slice.has_next);
        assert!(!slice.has_prev);
    }

    #[tokio::test]
    async fn test_sales_trend_includes_window_start_date() {
        let db = setup_db().await.unwrap();
        let company = new_company(&db).await.unwrap();

        // Window start for 1m at the fixed clock is exactly 2026-02-13.
        new_sales_invoice(&db, &company, "SI-0001", date(2026, 2, 13), "75.00")
            .await
            .unwrap();
        new_sales_invoice(&db, &company, "SI-0002", date(2026, 2, 12), "80.00")
            .await
            .unwrap();

        let slice = sales_trend(&db, TrendRange::Month1, now(), 1, 10)
            .await
            .unwrap();

        assert_eq!(slice.total_count, 1);
        assert_eq!(slice.data[0].period, date(2026, 2, 13));
        assert_eq!(slice.data[0].total_sales, dec("75.00"));
    }

    #[tokio::test]
    async fn test_sales_trend_sums_same_day_invoices() {
        let db = setup_db().await.unwrap();
        let company = new_company(&db).await.unwrap();

        new_sales_invoice(&db, &company, "SI-0001", date(2026, 3, 10), "100.00")
            .await
            .unwrap();
        new_sales_invoice(&db, &company, "SI-0002", date(2026, 3, 10), "49.25")
            .await
            .unwrap();

        let slice = sales_trend(&db, TrendRange::Week1, now(), 1, 10)
            .await
            .unwrap();

        assert_eq!(slice.total_count, 1);
        assert_eq!(slice.data[0].total_sales, dec("149.25"));
    }

    #[tokio::test]
    async fn test_quarter_range_buckets_by_iso_week() {
        let db = setup_db().await.unwrap();
        let company = new_company(&db).await.unwrap();

        // Monday and Sunday of the same ISO week.
        new_sales_invoice(&db, &company, "SI-0001", date(2026, 3, 9), "100.00")
            .await
            .unwrap();
        new_sales_invoice(&db, &company, "SI-0002", date(2026, 3, 15), "50.00")
            .await
            .unwrap();
        // The Thursday before, previous ISO week.
        new_sales_invoice(&db, &company, "SI-0003", date(2026, 3, 5), "25.00")
            .await
            .unwrap();

        let slice = sales_trend(&db, TrendRange::Months3, now(), 1, 10)
            .await
            .unwrap();

        assert_eq!(slice.total_count, 2);
        assert_eq!(slice.data[0].period, date(2026, 3, 2));
        assert_eq!(slice.data[0].total_sales, dec("25.00"));
        assert_eq!(slice.data[1].period, date(2026, 3, 9));
        assert_eq!(slice.data[1].total_sales, dec("150.00"));
    }

    #[tokio::test]
    async fn test_year_range_buckets_by_month() {
        let db = setup_db().await.unwrap();
        let company = new_company(&db).await.unwrap();

        new_sales_invoice(&db, &company, "SI-0001", date(2025, 6, 10), "100.00")
            .await
            .unwrap();
        new_sales_invoice(&db, &company, "SI-0002", date(2025, 6, 25), "50.00")
            .await
            .unwrap();
        new_sales_invoice(&db, &company, "SI-0003", date(2025, 7, 1), "20.00")
            .await
            .unwrap();

        let slice = sales_trend(&db, TrendRange::Year1, now(), 1, 10)
            .await
            .unwrap();

        assert_eq!(slice.total_count, 2);
        assert_eq!(slice.data[0].period, date(2025, 6, 1));
        assert_eq!(slice.data[0].total_sales, dec("150.00"));
        assert_eq!(slice.data[1].period, date(2025, 7, 1));
        assert_eq!(slice.data[1].total_sales, dec("20.00"));
    }

    #[tokio::test]
    async fn test_pagination_walk_reconstructs_the_series() {
        let db = setup_db().await.unwrap();
        let company = new_company(&db).await.unwrap();

        for day in 1..=25u32 {
            new_sales_invoice(
                &db,
                &company,
                &format!("SI-{:04}", day),
                date(2026, 3, day),
                "10.00",
            )
            .await
            .unwrap();
        }

        let clock: DateTime<Utc> = "2026-03-25T23:00:00Z".parse().unwrap();

        let mut collected = Vec::new();
        for page in 1..=3u64 {
            let slice = sales_trend(&db, TrendRange::Month1, clock, page, 10)
                .await
                .unwrap();
            assert_eq!(slice.total_count, 25);
            assert_eq!(slice.has_prev, page > 1);
            assert_eq!(slice.has_next, page < 3);
            collected.extend(slice.data);
        }

        assert_eq!(collected.len(), 25);
        for (index, point) in collected.iter().enumerate() {
            assert_eq!(point.period, date(2026, 3, index as u32 + 1));
        }

        let err = sales_trend(&db, TrendRange::Month1, clock, 4, 10)
            .await
            .unwrap_err();
        match err {
            ComputeError::PageOutOfRange { page, last_page } => {
                assert_eq!(page, 4);
                assert_eq!(last_page, 3);
            }
            other => panic!("expected page out of range, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_window_is_an_empty_first_page() {
        let db = setup_db().await.unwrap();

        let slice = sales_trend(&db, TrendRange::Month1, now(), 1, 10)
            .await
            .unwrap();
        assert_eq!(slice.total_count, 0);
        assert!(slice.data.is_empty());
        assert!(!slice.has_next);
        assert!(!slice.has_prev);

        // Only the first page of an empty series is reachable.
        let err = sales_trend(&db, TrendRange::Month1, now(), 2, 10)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ComputeError::PageOutOfRange { page: 2, last_page: 1 }
        ));
    }

    #[tokio::test]
    async fn test_purchase_trend_buckets_purchases() {
        let db = setup_db().await.unwrap();
        let company = new_company(&db).await.unwrap();

        new_purchase_invoice(&db, &company, "PI-0001", date(2026, 3, 10), "200.00")
            .await
            .unwrap();
        new_purchase_invoice(&db, &company, "PI-0002", date(2026, 3, 10), "99.25")
            .await
            .unwrap();
        new_purchase_invoice(&db, &company, "PI-0003", date(2026, 2, 1), "300.00")
            .await
            .unwrap();

        let slice = purchase_trend(&db, TrendRange::Month1, now(), 1, 10)
            .await
            .unwrap();

        assert_eq!(slice.total_count, 1);
        assert_eq!(slice.data[0].period, date(2026, 3, 10));
        assert_eq!(slice.data[0].total_purchases, dec("299.25"));
    }
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use tracing::{error, instrument, warn};

use common::{
    GrossProfitSummary, ProfitAndLossSummary, PurchaseTrendPoint, ReceivablesSummary,
    SalesTrendPoint, TrendPage, TrendRange, TrialBalanceRow, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use compute::error::ComputeError;
use compute::trend::TrendSlice;

use crate::schemas::{ApiResponse, AppState, ErrorResponse, TrendQuery};

/// Trial balance over the full chart of accounts
#[utoipa::path(
    get,
    path = "/api/v1/reports/trial-balance",
    tag = "reports",
    responses(
        (status = 200, description = "Trial balance computed successfully", body = ApiResponse<Vec<TrialBalanceRow>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_trial_balance(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TrialBalanceRow>>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = compute::ledger::trial_balance(&state.db)
        .await
        .map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: rows,
        message: "Trial balance computed successfully".to_string(),
        success: true,
    }))
}

/// Profit and loss statement
#[utoipa::path(
    get,
    path = "/api/v1/reports/profit-and-loss",
    tag = "reports",
    responses(
        (status = 200, description = "Profit and loss computed successfully", body = ApiResponse<ProfitAndLossSummary>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_profit_and_loss(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ProfitAndLossSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let summary = compute::ledger::profit_and_loss(&state.db)
        .await
        .map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: summary,
        message: "Profit and loss computed successfully".to_string(),
        success: true,
    }))
}

/// Accounts receivable summary
#[utoipa::path(
    get,
    path = "/api/v1/reports/accounts-receivable-summary",
    tag = "reports",
    responses(
        (status = 200, description = "Receivables summary computed successfully", body = ApiResponse<ReceivablesSummary>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_accounts_receivable_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReceivablesSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let summary = compute::receivables::receivables_summary(&state.db)
        .await
        .map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: summary,
        message: "Accounts receivable summary computed successfully".to_string(),
        success: true,
    }))
}

/// Gross profit over sales invoice line items
#[utoipa::path(
    get,
    path = "/api/v1/reports/gross-profit",
    tag = "reports",
    responses(
        (status = 200, description = "Gross profit computed successfully", body = ApiResponse<GrossProfitSummary>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_gross_profit(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GrossProfitSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let summary = compute::receivables::gross_profit(&state.db)
        .await
        .map_err(internal_error)?;

    Ok(Json(ApiResponse {
        data: summary,
        message: "Gross profit computed successfully".to_string(),
        success: true,
    }))
}

/// Sales trend bucketed over a lookback window
#[utoipa::path(
    get,
    path = "/api/v1/reports/sales-trend",
    tag = "reports",
    params(
        ("range" = Option<String>, Query, description = "Lookback window: 24h, 4d, 1w, 1m, 3m, 6m or 1y (default 1m)"),
        ("page" = Option<i64>, Query, description = "1-based page number (default 1)"),
        ("page_size" = Option<i64>, Query, description = "Buckets per page, between 1 and 100 (default 10)")
    ),
    responses(
        (status = 200, description = "Sales trend computed successfully", body = ApiResponse<TrendPage<SalesTrendPoint>>),
        (status = 400, description = "Invalid range or pagination parameters", body = ErrorResponse),
        (status = 404, description = "Page past the end of the series", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_sales_trend(
    Query(query): Query<TrendQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TrendPage<SalesTrendPoint>>>, (StatusCode, Json<ErrorResponse>)> {
    let (range, page, page_size) = validate_trend_query(&query)?;

    let slice = compute::trend::sales_trend(&state.db, range, Utc::now(), page, page_size)
        .await
        .map_err(trend_error)?;

    Ok(Json(ApiResponse {
        data: to_trend_page(slice, "/api/v1/reports/sales-trend", range),
        message: "Sales trend computed successfully".to_string(),
        success: true,
    }))
}

/// Purchase trend bucketed over a lookback window
#[utoipa::path(
    get,
    path = "/api/v1/reports/purchase-trend",
    tag = "reports",
    params(
        ("range" = Option<String>, Query, description = "Lookback window: 24h, 4d, 1w, 1m, 3m, 6m or 1y (default 1m)"),
        ("page" = Option<i64>, Query, description = "1-based page number (default 1)"),
        ("page_size" = Option<i64>, Query, description = "Buckets per page, between 1 and 100 (default 10)")
    ),
    responses(
        (status = 200, description = "Purchase trend computed successfully", body = ApiResponse<TrendPage<PurchaseTrendPoint>>),
        (status = 400, description = "Invalid range or pagination parameters", body = ErrorResponse),
        (status = 404, description = "Page past the end of the series", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_purchase_trend(
    Query(query): Query<TrendQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TrendPage<PurchaseTrendPoint>>>, (StatusCode, Json<ErrorResponse>)> {
    let (range, page, page_size) = validate_trend_query(&query)?;

    let slice = compute::trend::purchase_trend(&state.db, range, Utc::now(), page, page_size)
        .await
        .map_err(trend_error)?;

    Ok(Json(ApiResponse {
        data: to_trend_page(slice, "/api/v1/reports/purchase-trend", range),
        message: "Purchase trend computed successfully".to_string(),
        success: true,
    }))
}

/// Parses and validates the trend query parameters before any data access.
fn validate_trend_query(
    query: &TrendQuery,
) -> Result<(TrendRange, u64, u64), (StatusCode, Json<ErrorResponse>)> {
    let range = match query.range.as_deref() {
        None => TrendRange::default(),
        Some(value) => value.parse::<TrendRange>().map_err(|err| {
            warn!("Rejected trend range: {}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                    code: "INVALID_RANGE".to_string(),
                    success: false,
                }),
            )
        })?,
    };

    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE as i64);
    if page < 1 || page_size < 1 || page_size > MAX_PAGE_SIZE as i64 {
        warn!(
            "Rejected pagination parameters: page={}, page_size={}",
            page, page_size
        );
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!(
                    "Invalid pagination: page must be at least 1 and page_size between 1 and {}",
                    MAX_PAGE_SIZE
                ),
                code: "INVALID_PAGINATION".to_string(),
                success: false,
            }),
        ));
    }

    Ok((range, page as u64, page_size as u64))
}

/// Converts a computed slice into the wire envelope with relative page links.
fn to_trend_page<T>(slice: TrendSlice<T>, path: &str, range: TrendRange) -> TrendPage<T> {
    let next_page = slice
        .has_next
        .then(|| page_link(path, range, slice.page + 1, slice.page_size));
    let prev_page = slice
        .has_prev
        .then(|| page_link(path, range, slice.page - 1, slice.page_size));

    TrendPage {
        total_count: slice.total_count,
        next_page,
        prev_page,
        data: slice.data,
    }
}

fn page_link(path: &str, range: TrendRange, page: u64, page_size: u64) -> String {
    format!(
        "{}?range={}&page={}&page_size={}",
        path, range, page, page_size
    )
}

/// Maps trend computation failures onto HTTP responses. A page past the end
/// of the series is the caller's mistake, everything else is ours.
fn trend_error(err: ComputeError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ComputeError::PageOutOfRange { page, last_page } => {
            warn!("Requested trend page {} past last page {}", page, last_page);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Page {} is out of range, last page is {}", page, last_page),
                    code: "INVALID_PAGE".to_string(),
                    success: false,
                }),
            )
        }
        other => internal_error(other),
    }
}

fn internal_error(err: ComputeError) -> (StatusCode, Json<ErrorResponse>) {
    error!("Report computation failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to compute report".to_string(),
            code: "ERROR".to_string(),
            success: false,
        }),
    )
}

use common::{
    GrossProfitSummary, ProfitAndLossSummary, PurchaseTrendPoint, ReceivablesSummary,
    SalesTrendPoint, TrendPage, TrialBalanceRow,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// Query parameters for the trend report endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct TrendQuery {
    /// Lookback window: 24h, 4d, 1w, 1m, 3m, 6m or 1y (default 1m)
    pub range: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<i64>,
    /// Buckets per page, between 1 and 100 (default 10)
    pub page_size: Option<i64>,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::reports::get_trial_balance,
        crate::handlers::reports::get_profit_and_loss,
        crate::handlers::reports::get_accounts_receivable_summary,
        crate::handlers::reports::get_gross_profit,
        crate::handlers::reports::get_sales_trend,
        crate::handlers::reports::get_purchase_trend,
    ),
    components(
        schemas(
            ApiResponse<Vec<TrialBalanceRow>>,
            ApiResponse<ProfitAndLossSummary>,
            ApiResponse<ReceivablesSummary>,
            ApiResponse<GrossProfitSummary>,
            ApiResponse<TrendPage<SalesTrendPoint>>,
            ApiResponse<TrendPage<PurchaseTrendPoint>>,
            ErrorResponse,
            HealthResponse,
            TrendQuery,
            TrialBalanceRow,
            ProfitAndLossSummary,
            ReceivablesSummary,
            GrossProfitSummary,
            SalesTrendPoint,
            PurchaseTrendPoint,
            TrendPage<SalesTrendPoint>,
            TrendPage<PurchaseTrendPoint>,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "reports", description = "Financial report endpoints"),
    ),
    info(
        title = "ERPRust API",
        description = "Double-entry ledger aggregation and financial reporting API",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

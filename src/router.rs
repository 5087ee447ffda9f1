use crate::handlers::{
    health::health_check,
    reports::{
        get_accounts_receivable_summary, get_gross_profit, get_profit_and_loss,
        get_purchase_trend, get_sales_trend, get_trial_balance,
    },
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Report routes
        .route("/api/v1/reports/trial-balance", get(get_trial_balance))
        .route("/api/v1/reports/profit-and-loss", get(get_profit_and_loss))
        .route(
            "/api/v1/reports/accounts-receivable-summary",
            get(get_accounts_receivable_summary),
        )
        .route("/api/v1/reports/gross-profit", get(get_gross_profit))
        .route("/api/v1/reports/sales-trend", get(get_sales_trend))
        .route("/api/v1/reports/purchase-trend", get(get_purchase_trend))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

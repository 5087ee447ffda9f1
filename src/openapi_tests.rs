#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        // Test that the OpenAPI schema can be generated without errors
        let openapi = ApiDoc::openapi();

        // Verify that the schema contains the expected components
        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        // Envelope and report DTO schemas must all be registered
        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));
        assert!(components.schemas.contains_key("TrialBalanceRow"));
        assert!(components.schemas.contains_key("ProfitAndLossSummary"));
        assert!(components.schemas.contains_key("ReceivablesSummary"));
        assert!(components.schemas.contains_key("GrossProfitSummary"));
        assert!(components.schemas.contains_key("SalesTrendPoint"));
        assert!(components.schemas.contains_key("PurchaseTrendPoint"));

        // Verify that the schema can be serialized to JSON without errors
        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let error_response_schema = components.schemas.get("ErrorResponse").unwrap();

        // Verify ErrorResponse has the expected structure
        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
            error_response_schema
        {
            let properties = &obj.properties;
            assert!(properties.contains_key("error"));
            assert!(properties.contains_key("code"));
            assert!(properties.contains_key("success"));
        } else {
            panic!("ErrorResponse should be an object schema");
        }
    }

    #[test]
    fn test_trial_balance_row_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let row_schema = components.schemas.get("TrialBalanceRow").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = row_schema
        {
            let properties = &obj.properties;
            assert!(properties.contains_key("account"));
            assert!(properties.contains_key("debit"));
            assert!(properties.contains_key("credit"));
            assert!(properties.contains_key("balance"));
        } else {
            panic!("TrialBalanceRow should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths_contain_report_endpoints() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.paths.paths.contains_key("/health"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/reports/trial-balance"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/reports/profit-and-loss"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/reports/accounts-receivable-summary"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/reports/gross-profit"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/reports/sales-trend"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/reports/purchase-trend"));
    }

    #[test]
    fn test_sales_trend_documents_validation_responses() {
        let openapi = ApiDoc::openapi();

        let trend_path = openapi
            .paths
            .paths
            .get("/api/v1/reports/sales-trend")
            .unwrap();
        let trend_get = trend_path
            .operations
            .get(&utoipa::openapi::PathItemType::Get);
        assert!(trend_get.is_some());

        let responses = &trend_get.unwrap().responses;
        // Success plus the validation, pagination and storage failure cases
        assert!(responses.responses.contains_key("200"));
        assert!(responses.responses.contains_key("400"));
        assert!(responses.responses.contains_key("404"));
        assert!(responses.responses.contains_key("500"));
    }
}

//! HTTP API Client
//!
//! Public endpoint surface for the dashboard. Every call goes through the
//! canned mock source until a backend exists; flipping `USE_MOCK_DATA` routes
//! the same functions to the REST API instead.

use gloo_net::http::Request;

use super::mock;
use super::types::{
    ChartPoint, ChartType, ConversionPoint, CustomerAnalytics, KpiCard, Product, SalesData,
    TimeRange, TrafficFlow,
};

/// Serve canned data instead of calling the backend
pub const USE_MOCK_DATA: bool = true;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("sungjangtong_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Path plus the time-range query every dashboard endpoint takes
fn range_query(path: &str, range: TimeRange) -> String {
    format!("{}?timeRange={}", path, range.key())
}

/// GET a JSON payload from the backend
async fn fetch_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}{}", api_base, path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ API Functions ============

/// Fetch the ranked product table
pub async fn get_product_list(range: TimeRange) -> Result<Vec<Product>, String> {
    if USE_MOCK_DATA {
        return Ok(mock::product_list(range));
    }
    fetch_json(&range_query("/products", range)).await
}

/// Fetch the buyer-count series
pub async fn get_buyers_data(range: TimeRange) -> Result<Vec<ChartPoint>, String> {
    if USE_MOCK_DATA {
        return Ok(mock::buyers_data(range));
    }
    fetch_json(&range_query("/buyers", range)).await
}

/// Fetch the click and cart-addition series
pub async fn get_click_cart_data(range: TimeRange) -> Result<Vec<ChartPoint>, String> {
    if USE_MOCK_DATA {
        return Ok(mock::click_cart_data(range));
    }
    fetch_json(&range_query("/click-cart", range)).await
}

/// Fetch the average stay-time series (seconds)
pub async fn get_avg_stay_time_data(range: TimeRange) -> Result<Vec<ChartPoint>, String> {
    if USE_MOCK_DATA {
        return Ok(mock::avg_stay_time_data(range));
    }
    fetch_json(&range_query("/stay-time", range)).await
}

/// Fetch the age, gender and device breakdowns
pub async fn get_customer_analytics(range: TimeRange) -> Result<CustomerAnalytics, String> {
    if USE_MOCK_DATA {
        return Ok(mock::customer_analytics(range));
    }
    fetch_json(&range_query("/customers", range)).await
}

/// Fetch the headline KPI cards
pub async fn get_kpi_data(range: TimeRange) -> Result<Vec<KpiCard>, String> {
    if USE_MOCK_DATA {
        return Ok(mock::kpi_data(range));
    }
    fetch_json(&range_query("/kpi", range)).await
}

/// Fetch the four sales-information series
pub async fn get_sales_data(range: TimeRange) -> Result<SalesData, String> {
    if USE_MOCK_DATA {
        return Ok(mock::sales_data(range));
    }
    fetch_json(&range_query("/sales", range)).await
}

/// Fetch the cart-to-purchase funnel series
pub async fn get_conversion_data(range: TimeRange) -> Result<Vec<ConversionPoint>, String> {
    if USE_MOCK_DATA {
        return Ok(mock::conversion_data(range));
    }
    fetch_json(&range_query("/conversions", range)).await
}

/// Fetch the hot product ranking
pub async fn get_hot_products_data(range: TimeRange) -> Result<Vec<Product>, String> {
    if USE_MOCK_DATA {
        return Ok(mock::hot_products_data(range));
    }
    fetch_json(&range_query("/hot-products", range)).await
}

/// Fetch the per-product performance series for one metric
pub async fn get_performance_chart_data(
    range: TimeRange,
    chart_type: ChartType,
) -> Result<Vec<ChartPoint>, String> {
    if USE_MOCK_DATA {
        return Ok(mock::performance_chart_data(range, chart_type));
    }
    fetch_json(&format!(
        "/performance?timeRange={}&chartType={}",
        range.key(),
        chart_type.key()
    ))
    .await
}

/// Fetch the loyal-customer KPI cards
pub async fn get_loyal_customer_kpi(range: TimeRange) -> Result<Vec<KpiCard>, String> {
    if USE_MOCK_DATA {
        return Ok(mock::loyal_customer_kpi(range));
    }
    fetch_json(&range_query("/loyal-kpi", range)).await
}

/// Fetch the acquisition-to-purchase traffic flow
pub async fn get_traffic_flow() -> Result<TrafficFlow, String> {
    if USE_MOCK_DATA {
        return Ok(mock::traffic_flow());
    }
    fetch_json("/traffic-flow").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query_formats_key() {
        assert_eq!(range_query("/products", TimeRange::Week), "/products?timeRange=week");
        assert_eq!(range_query("/kpi", TimeRange::Yesterday), "/kpi?timeRange=yesterday");
    }

    #[test]
    fn test_api_error_parses_with_and_without_code() {
        let with_code: ApiError =
            serde_json::from_str(r#"{"error":"bad range","code":"E400"}"#).unwrap();
        assert_eq!(with_code.error, "bad range");
        assert_eq!(with_code.code.as_deref(), Some("E400"));

        let without_code: ApiError = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(without_code.error, "boom");
        assert!(without_code.code.is_none());
    }
}

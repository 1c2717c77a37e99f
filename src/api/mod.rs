//! API Layer
//!
//! Typed payloads, the mock data source and the HTTP client surface.

pub mod client;
pub mod mock;
pub mod types;

pub use client::{
    get_avg_stay_time_data, get_buyers_data, get_click_cart_data, get_conversion_data,
    get_customer_analytics, get_hot_products_data, get_kpi_data, get_loyal_customer_kpi,
    get_performance_chart_data, get_product_list, get_sales_data, get_traffic_flow,
};
pub use types::{
    ChangeType, ChartPoint, ChartType, ConversionPoint, CustomerAnalytics, DemographicSlice,
    KpiCard, Product, SalesData, TimeRange, TrafficFlow, TrafficLink,
};

//! Data Fetch Hooks
//!
//! One hook per endpoint. Each returns signals for the payload, a loading
//! flag and the last error, and refetches whenever its input changes. A
//! generation counter discards responses that arrive for an outdated input,
//! so a slow reply can never overwrite a newer one. On error the previous
//! payload is kept so views can keep rendering it.

use leptos::*;
use std::future::Future;

use crate::api;
use crate::api::types::{
    ChartPoint, ChartType, ConversionPoint, CustomerAnalytics, KpiCard, Product, SalesData,
    TimeRange, TrafficFlow,
};

/// Reactive handles for one endpoint fetch
pub struct FetchState<T: 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: 'static> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchState<T> {}

/// Drive one endpoint: refetch when the key changes
fn create_fetch<K, T, F, Fut>(key: impl Fn() -> K + 'static, fetcher: F) -> FetchState<T>
where
    K: 'static,
    T: Clone + 'static,
    F: Fn(K) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = FetchState {
        data: create_rw_signal(None),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
    };
    let generation = create_rw_signal(0usize);

    create_effect(move |_| {
        let key = key();
        let request = generation.get_untracked() + 1;
        generation.set(request);

        state.loading.set(true);
        state.error.set(None);

        spawn_local(async move {
            let result = fetcher(key).await;

            // A newer request took over while this one was in flight
            if generation.get_untracked() != request {
                return;
            }

            match result {
                Ok(data) => state.data.set(Some(data)),
                Err(message) => {
                    web_sys::console::error_1(&format!("Failed to fetch: {}", message).into());
                    state.error.set(Some(message));
                }
            }
            state.loading.set(false);
        });
    });

    state
}

pub fn use_product_list(range: RwSignal<TimeRange>) -> FetchState<Vec<Product>> {
    create_fetch(move || range.get(), api::get_product_list)
}

pub fn use_buyers_data(range: RwSignal<TimeRange>) -> FetchState<Vec<ChartPoint>> {
    create_fetch(move || range.get(), api::get_buyers_data)
}

pub fn use_click_cart_data(range: RwSignal<TimeRange>) -> FetchState<Vec<ChartPoint>> {
    create_fetch(move || range.get(), api::get_click_cart_data)
}

pub fn use_avg_stay_time_data(range: RwSignal<TimeRange>) -> FetchState<Vec<ChartPoint>> {
    create_fetch(move || range.get(), api::get_avg_stay_time_data)
}

pub fn use_customer_analytics(range: RwSignal<TimeRange>) -> FetchState<CustomerAnalytics> {
    create_fetch(move || range.get(), api::get_customer_analytics)
}

pub fn use_kpi_data(range: RwSignal<TimeRange>) -> FetchState<Vec<KpiCard>> {
    create_fetch(move || range.get(), api::get_kpi_data)
}

pub fn use_sales_data(range: RwSignal<TimeRange>) -> FetchState<SalesData> {
    create_fetch(move || range.get(), api::get_sales_data)
}

pub fn use_conversion_data(range: RwSignal<TimeRange>) -> FetchState<Vec<ConversionPoint>> {
    create_fetch(move || range.get(), api::get_conversion_data)
}

pub fn use_hot_products_data(range: RwSignal<TimeRange>) -> FetchState<Vec<Product>> {
    create_fetch(move || range.get(), api::get_hot_products_data)
}

/// The only two-input hook: refetches on either the range or the metric
pub fn use_performance_chart_data(
    range: RwSignal<TimeRange>,
    chart_type: RwSignal<ChartType>,
) -> FetchState<Vec<ChartPoint>> {
    create_fetch(
        move || (range.get(), chart_type.get()),
        |(range, chart_type)| api::get_performance_chart_data(range, chart_type),
    )
}

pub fn use_loyal_customer_kpi(range: RwSignal<TimeRange>) -> FetchState<Vec<KpiCard>> {
    create_fetch(move || range.get(), api::get_loyal_customer_kpi)
}

pub fn use_traffic_flow() -> FetchState<TrafficFlow> {
    create_fetch(|| (), |_: ()| api::get_traffic_flow())
}

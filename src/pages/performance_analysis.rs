//! Performance Analysis Page
//!
//! KPI cards, the four sales-information charts, cart conversion
//! analysis with a summary table, and the customer flow diagram.

use leptos::*;

use crate::api::types::{ConversionPoint, TimeRange};
use crate::components::{
    BarChart, ConversionAreaChart, ConversionTrendChart, ErrorMessage, KpiStatCard, Loading,
    TimeRangeTabs, TrafficFlowChart,
};
use crate::hooks::{use_conversion_data, use_kpi_data, use_sales_data, use_traffic_flow};
use crate::router::use_router;

use super::format_count;

/// 장바구니에 담은 고객 중 실제 구매까지 간 비율
fn cart_to_purchase_rate(point: &ConversionPoint) -> String {
    format!(
        "{:.1}%",
        point.purchases as f64 / point.cart_adds as f64 * 100.0
    )
}

/// 클릭 대비 구매 비율
fn overall_rate(point: &ConversionPoint) -> String {
    if point.clicks == 0 {
        return "N/A%".to_string();
    }
    format!(
        "{:.1}%",
        point.purchases as f64 / point.clicks as f64 * 100.0
    )
}

/// 성과 지표 분석
#[component]
pub fn PerformanceAnalysis() -> impl IntoView {
    let router = use_router();
    let range = create_rw_signal(TimeRange::default());

    let kpis = use_kpi_data(range);
    let sales = use_sales_data(range);
    let conversions = use_conversion_data(range);
    let traffic = use_traffic_flow();

    let is_loading = create_memo(move |_| {
        kpis.loading.get() || sales.loading.get() || conversions.loading.get()
    });
    let fetch_error = create_memo(move |_| {
        kpis.error
            .get()
            .or_else(|| sales.error.get())
            .or_else(|| conversions.error.get())
    });

    let revenue_points =
        Signal::derive(move || sales.data.get().map(|s| s.sales_revenue).unwrap_or_default());
    let purchase_points =
        Signal::derive(move || sales.data.get().map(|s| s.total_purchases).unwrap_or_default());
    let click_points =
        Signal::derive(move || sales.data.get().map(|s| s.total_clicks).unwrap_or_default());
    let cart_points =
        Signal::derive(move || sales.data.get().map(|s| s.cart_additions).unwrap_or_default());
    let conversion_points = Signal::derive(move || conversions.data.get().unwrap_or_default());
    let traffic_flow = Signal::derive(move || traffic.data.get().unwrap_or_default());

    view! {
        {move || {
            if let Some(message) = fetch_error.get() {
                return view! { <ErrorMessage message=message /> }.into_view();
            }

            let router = router.clone();

            view! {
                <div class="min-h-screen bg-gray-50">
                    <header class="bg-white border-b border-gray-200 px-8 py-6">
                        <div class="flex items-center justify-between">
                            <button
                                class="flex items-center space-x-2 px-3 py-2 rounded-lg text-sm text-gray-600 hover:bg-gray-100 transition-colors"
                                on:click=move |_| router.navigate("/")
                            >
                                <span>"←"</span>
                                <span>"돌아가기"</span>
                            </button>
                            <h1 class="text-2xl font-bold text-gray-900">"성과 지표 분석"</h1>
                            <div></div>
                        </div>
                    </header>

                    <div class="p-8 space-y-8">
                        <section class="flex justify-center">
                            <TimeRangeTabs range=range />
                        </section>

                        {move || {
                            if is_loading.get() {
                                return view! { <Loading /> }.into_view();
                            }

                            view! {
                                <section>
                                    <h2 class="text-xl font-semibold text-gray-900 mb-6 text-center">"핵심 KPI"</h2>
                                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                                        {move || {
                                            kpis.data
                                                .get()
                                                .unwrap_or_default()
                                                .into_iter()
                                                .map(|card| view! { <KpiStatCard card=card /> })
                                                .collect_view()
                                        }}
                                    </div>
                                </section>

                                <section>
                                    <h2 class="text-xl font-semibold text-gray-900 mb-8 text-center">"판매 정보"</h2>
                                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-8">
                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <h3 class="text-sm font-medium text-gray-700 mb-4">"총 매출액"</h3>
                                            <BarChart data=revenue_points color="#9CA3AF" height=260 />
                                        </div>
                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <h3 class="text-sm font-medium text-gray-700 mb-4">"총 구매 수"</h3>
                                            <BarChart data=purchase_points color="#9CA3AF" height=260 />
                                        </div>
                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <h3 class="text-sm font-medium text-gray-700 mb-4">"총 클릭 수"</h3>
                                            <BarChart data=click_points color="#9CA3AF" height=260 />
                                        </div>
                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <h3 class="text-sm font-medium text-gray-700 mb-4">"장바구니 추가 수"</h3>
                                            <BarChart data=cart_points color="#9CA3AF" height=260 />
                                        </div>
                                    </div>
                                </section>

                                <section class="space-y-8">
                                    <h2 class="text-xl font-semibold text-gray-900 text-center">
                                        "장바구니 전환율 분석"
                                    </h2>

                                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <h3 class="text-sm font-medium text-gray-700 mb-4">
                                                "장바구니 전환율 트렌드"
                                            </h3>
                                            <ConversionTrendChart data=conversion_points height=260 />
                                        </div>
                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <h3 class="text-sm font-medium text-gray-700 mb-4">"상세 전환 분석"</h3>
                                            <ConversionAreaChart data=conversion_points height=260 />
                                        </div>
                                    </div>

                                    <ConversionSummaryTable points=conversion_points />
                                </section>

                                <section class="bg-white rounded-xl border border-gray-200 shadow-sm">
                                    <div class="px-6 pt-6">
                                        <h3 class="text-lg font-semibold text-gray-900">"고객 흐름 요약도"</h3>
                                        <p class="text-sm text-gray-500 mt-1">
                                            "상품 분석 대시보드 이용 고객의 매체별 유입 경로"
                                        </p>
                                    </div>
                                    <div class="p-6">
                                        <TrafficFlowChart data=traffic_flow />
                                    </div>
                                </section>
                            }
                            .into_view()
                        }}
                    </div>
                </div>
            }
            .into_view()
        }}
    }
}

/// Per-period funnel numbers with computed conversion columns
#[component]
fn ConversionSummaryTable(#[prop(into)] points: Signal<Vec<ConversionPoint>>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"전환율 요약"</h3>
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "기간"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "총 클릭"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "장바구니 추가"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "구매"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "장바구니→구매 전환율"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "전체 전환율"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {move || {
                            points
                                .get()
                                .into_iter()
                                .map(|point| {
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                                {point.period.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                {format_count(point.clicks)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                {format_count(point.cart_adds)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                {format_count(point.purchases)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-green-600">
                                                {cart_to_purchase_rate(&point)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-blue-600">
                                                {overall_rate(&point)}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn test_conversion_rates_for_january() {
        let points = mock::conversion_data(TimeRange::Month);
        assert_eq!(cart_to_purchase_rate(&points[0]), "45.3%");
        assert_eq!(overall_rate(&points[0]), "17.1%");
    }

    #[test]
    fn test_overall_rate_without_clicks() {
        let point = ConversionPoint {
            period: "어제".to_string(),
            cart_adds: 110,
            purchases: 48,
            conversion_rate: 43.6,
            clicks: 0,
        };
        assert_eq!(overall_rate(&point), "N/A%");
    }
}

//! Product Focus Page
//!
//! KPI strip, HOT product list, metric-switchable performance chart and
//! distribution donuts for the flagship products.

use leptos::*;

use crate::api::types::{ChartType, Product, TimeRange};
use crate::components::{
    BarChart, ChartTypeTabs, DonutChart, DonutSlice, ErrorMessage, Loading, TimeRangePills,
};
use crate::hooks::{use_hot_products_data, use_performance_chart_data};
use crate::router::use_router;

use super::format_count;

const CATEGORY_PALETTE: [&str; 4] = ["#7C3AED", "#A78BFA", "#C4B5FD", "#E5E7EB"];

struct FocusKpi {
    title: &'static str,
    value: String,
    unit: &'static str,
    icon: &'static str,
    color: &'static str,
}

/// Headline numbers aggregated over the HOT product list
fn focus_kpis(products: &[Product]) -> Vec<FocusKpi> {
    let total_sales: u32 = products.iter().map(|p| p.sales).sum();
    let total_revenue: f64 = products.iter().map(|p| parse_revenue(&p.revenue)).sum();
    let avg_conversion = if products.is_empty() {
        0.0
    } else {
        products
            .iter()
            .map(|p| parse_percent(&p.conversion_rate))
            .sum::<f64>()
            / products.len() as f64
    };

    vec![
        FocusKpi {
            title: "총 판매량",
            value: format_count(total_sales),
            unit: "개",
            icon: "📦",
            color: "text-blue-600",
        },
        FocusKpi {
            title: "총 매출",
            value: format!("₩{}", format_count(total_revenue as u64)),
            unit: "원",
            icon: "💰",
            color: "text-green-600",
        },
        FocusKpi {
            title: "평균 체류시간",
            value: "2분 45초".to_string(),
            unit: "",
            icon: "🕐",
            color: "text-purple-600",
        },
        FocusKpi {
            title: "평균 전환율",
            value: format!("{:.1}", avg_conversion),
            unit: "%",
            icon: "📈",
            color: "text-orange-600",
        },
    ]
}

/// Top four products as rounded shares of total sales
fn category_breakdown(products: &[Product]) -> Vec<DonutSlice> {
    let total_sales: u32 = products.iter().map(|p| p.sales).sum();
    if total_sales == 0 {
        return Vec::new();
    }
    products
        .iter()
        .take(4)
        .enumerate()
        .map(|(index, product)| {
            let share = (product.sales as f64 / total_sales as f64 * 100.0).round();
            DonutSlice::new(&product.name, share, CATEGORY_PALETTE[index.min(3)])
        })
        .collect()
}

fn channel_breakdown() -> Vec<DonutSlice> {
    vec![
        DonutSlice::new("온라인", 60.0, "#7C3AED"),
        DonutSlice::new("오프라인", 25.0, "#A78BFA"),
        DonutSlice::new("기타", 15.0, "#E5E7EB"),
    ]
}

/// Strip the ₩ sign and separators from a revenue string
fn parse_revenue(revenue: &str) -> f64 {
    revenue
        .replace(['₩', ','], "")
        .parse()
        .unwrap_or(0.0)
}

fn parse_percent(rate: &str) -> f64 {
    rate.trim_end_matches('%').parse().unwrap_or(0.0)
}

/// 주요 상품 분석
#[component]
pub fn ProductFocus() -> impl IntoView {
    let router = use_router();
    let range = create_rw_signal(TimeRange::default());
    let chart_type = create_rw_signal(ChartType::default());

    let hot_products = use_hot_products_data(range);
    let performance = use_performance_chart_data(range, chart_type);

    let is_loading = create_memo(move |_| hot_products.loading.get() || performance.loading.get());
    let fetch_error = create_memo(move |_| {
        hot_products.error.get().or_else(|| performance.error.get())
    });

    let product_list = Signal::derive(move || hot_products.data.get().unwrap_or_default());
    let performance_points = Signal::derive(move || performance.data.get().unwrap_or_default());
    let category_slices =
        Signal::derive(move || category_breakdown(&hot_products.data.get().unwrap_or_default()));
    let channel_slices = Signal::derive(channel_breakdown);

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
                            <h1 class="text-2xl font-bold text-gray-900">"주력 상품 집중 분석"</h1>
                            <div></div>
                        </div>
                    </header>

                    <div class="p-8 space-y-8">
                        {move || {
                            if is_loading.get() {
                                return view! { <Loading /> }.into_view();
                            }

                            view! {
                                <section class="flex justify-center">
                                    <TimeRangePills range=range />
                                </section>

                                <section>
                                    <h2 class="text-xl font-semibold text-gray-900 mb-6">"핵심 KPI"</h2>
                                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                                        {move || {
                                            focus_kpis(&product_list.get())
                                                .into_iter()
                                                .map(|kpi| {
                                                    view! {
                                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6 hover:shadow-lg transition-shadow">
                                                            <div class="flex items-center justify-between">
                                                                <div>
                                                                    <p class="text-sm font-medium text-gray-600 mb-2">{kpi.title}</p>
                                                                    <div class="flex items-baseline space-x-2">
                                                                        <span class="text-2xl font-bold text-gray-900">{kpi.value}</span>
                                                                        {(!kpi.unit.is_empty())
                                                                            .then(|| view! { <span class="text-sm text-gray-500">{kpi.unit}</span> })}
                                                                    </div>
                                                                </div>
                                                                <span class=format!("text-3xl {}", kpi.color)>{kpi.icon}</span>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </div>
                                </section>

                                <section class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                                    <h2 class="text-xl font-semibold text-gray-900 mb-6">"HOT 상품별 데이터"</h2>
                                    <div class="space-y-4">
                                        {move || {
                                            product_list
                                                .get()
                                                .into_iter()
                                                .map(|product| view! { <HotProductRow product=product /> })
                                                .collect_view()
                                        }}
                                    </div>
                                </section>

                                <section class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                                    <h2 class="text-xl font-semibold text-gray-900 mb-6">"상품별 성과 분석 차트"</h2>
                                    <div class="mb-6">
                                        <ChartTypeTabs chart_type=chart_type />
                                    </div>
                                    <BarChart data=performance_points color="#7C3AED" />
                                </section>

                                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                                    <section class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                                        <h3 class="text-lg font-semibold text-gray-900 mb-6">"카테고리별 분포"</h3>
                                        <DonutChart slices=category_slices />
                                        <DonutLegend slices=category_slices />
                                    </section>

                                    <section class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                                        <h3 class="text-lg font-semibold text-gray-900 mb-6">"채널별 분포"</h3>
                                        <DonutChart slices=channel_slices />
                                        <DonutLegend slices=channel_slices />
                                    </section>
                                </div>
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

#[component]
fn HotProductRow(product: Product) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 rounded-lg border border-gray-100 hover:bg-gray-50 transition-colors">
            <div class="flex items-center space-x-4">
                <div class="w-10 h-10 bg-gray-800 rounded-lg flex items-center justify-center">
                    <span class="text-white font-semibold">{product.id}</span>
                </div>
                <div>
                    <h3 class="font-medium text-gray-900">{product.name.clone()}</h3>
                    <p class="text-sm text-gray-500">
                        {format!("클릭수: {}", format_count(product.clicks))}
                    </p>
                </div>
            </div>
            <div class="text-right space-y-1">
                <div class="text-sm font-medium text-gray-900">
                    {format!("판매량: {}개", format_count(product.sales))}
                </div>
                <div class="text-sm text-gray-500">{format!("매출: {}", product.revenue)}</div>
                <div class="text-sm text-green-600">{format!("전환율: {}", product.conversion_rate)}</div>
            </div>
        </div>
    }
}

/// Row legend listing each slice with its share on the right
#[component]
fn DonutLegend(#[prop(into)] slices: Signal<Vec<DonutSlice>>) -> impl IntoView {
    view! {
        <div class="mt-4 space-y-2">
            {move || {
                slices
                    .get()
                    .into_iter()
                    .map(|slice| {
                        view! {
                            <div class="flex items-center justify-between text-sm">
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", slice.color)
                                    ></div>
                                    <span class="text-gray-600">{slice.label}</span>
                                </div>
                                <span class="font-medium text-gray-900">{format!("{}%", slice.value)}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn test_focus_kpis_aggregate_hot_products() {
        let products = mock::hot_products_data(TimeRange::Month);
        let kpis = focus_kpis(&products);

        assert_eq!(kpis[0].value, "24,300");
        assert_eq!(kpis[1].value, "₩52,500,000");
        assert_eq!(kpis[2].value, "2분 45초");
        assert_eq!(kpis[3].value, "4.0");
    }

    #[test]
    fn test_focus_kpis_handle_empty_list() {
        let kpis = focus_kpis(&[]);
        assert_eq!(kpis[0].value, "0");
        assert_eq!(kpis[3].value, "0.0");
    }

    #[test]
    fn test_category_breakdown_rounds_shares() {
        let products = mock::hot_products_data(TimeRange::Month);
        let slices = category_breakdown(&products);

        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].label, "상품 A");
        let shares: Vec<f64> = slices.iter().map(|s| s.value).collect();
        assert_eq!(shares, vec![29.0, 21.0, 20.0, 16.0]);
    }

    #[test]
    fn test_revenue_and_percent_parsing() {
        assert_eq!(parse_revenue("₩15,000,000"), 15_000_000.0);
        assert_eq!(parse_revenue("garbage"), 0.0);
        assert_eq!(parse_percent("5.8%"), 5.8);
    }
}

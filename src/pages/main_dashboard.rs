//! Main Dashboard Page
//!
//! Product ranking table, buyer and engagement charts, and the customer
//! demographic section.

use leptos::*;

use crate::api::types::{ChartPoint, DemographicSlice, Product, TimeRange};
use crate::components::{
    BarChart, DonutChart, DonutSlice, ErrorMessage, LineChart, Loading, TimeRangeTabs,
};
use crate::hooks::{
    use_avg_stay_time_data, use_buyers_data, use_click_cart_data, use_customer_analytics,
    use_product_list,
};

use super::format_count;

const DONUT_PALETTE: [&str; 3] = ["#7857FF", "#D7D7D7", "#EDEDED"];

fn donut_slices(slices: &[DemographicSlice]) -> Vec<DonutSlice> {
    slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            DonutSlice::new(&slice.label, slice.percentage, DONUT_PALETTE[index.min(2)])
        })
        .collect()
}

/// 메인 대시보드
#[component]
pub fn MainDashboard() -> impl IntoView {
    let range = create_rw_signal(TimeRange::default());
    let selected_product = create_rw_signal(None::<u32>);

    let products = use_product_list(range);
    let buyers = use_buyers_data(range);
    let clicks_cart = use_click_cart_data(range);
    let stay_time = use_avg_stay_time_data(range);
    let customers = use_customer_analytics(range);

    let is_loading = create_memo(move |_| {
        products.loading.get()
            || buyers.loading.get()
            || clicks_cart.loading.get()
            || stay_time.loading.get()
            || customers.loading.get()
    });

    let fetch_error = create_memo(move |_| {
        products
            .error
            .get()
            .or_else(|| buyers.error.get())
            .or_else(|| clicks_cart.error.get())
            .or_else(|| stay_time.error.get())
            .or_else(|| customers.error.get())
    });

    let product_rows = Signal::derive(move || products.data.get().unwrap_or_default());
    let buyer_points = Signal::derive(move || buyers.data.get().unwrap_or_default());
    let click_cart_points = Signal::derive(move || clicks_cart.data.get().unwrap_or_default());
    let stay_time_points = Signal::derive(move || stay_time.data.get().unwrap_or_default());

    let age_points = Signal::derive(move || {
        customers
            .data
            .get()
            .map(|c| {
                c.age_data
                    .iter()
                    .map(|slice| ChartPoint::new(&slice.label, slice.count as f64))
                    .collect()
            })
            .unwrap_or_default()
    });
    let gender_slices = Signal::derive(move || {
        customers
            .data
            .get()
            .map(|c| donut_slices(&c.gender_data))
            .unwrap_or_default()
    });
    let device_slices = Signal::derive(move || {
        customers
            .data
            .get()
            .map(|c| donut_slices(&c.device_data))
            .unwrap_or_default()
    });

    view! {
        {move || {
            if let Some(message) = fetch_error.get() {
                return view! { <ErrorMessage message=message /> }.into_view();
            }

            view! {
                <div class="min-h-screen bg-gray-50">
                    // Header with the time range tabs
                    <header class="bg-white border-b border-gray-200 px-8 py-6">
                        <div class="max-w-7xl mx-auto">
                            <h1 class="text-2xl font-bold text-gray-900 text-center">
                                "주요 상품 분석 대시보드"
                            </h1>
                            <div class="flex justify-center mt-6">
                                <TimeRangeTabs range=range />
                            </div>
                        </div>
                    </header>

                    <div class="max-w-7xl mx-auto p-8 space-y-8">
                        {move || {
                            if is_loading.get() {
                                return view! { <Loading /> }.into_view();
                            }

                            view! {
                                <ProductTable products=product_rows selected=selected_product />

                                <section class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                                    <h3 class="text-lg font-semibold text-gray-900 mb-6">"구매자 수"</h3>
                                    <BarChart data=buyer_points color="#3b82f6" />
                                </section>

                                <section class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                                    <h3 class="text-lg font-semibold text-gray-900 mb-6">
                                        "클릭 수 & 장바구니 추가 수"
                                    </h3>
                                    <LineChart data=click_cart_points color="#C1C7CD" />
                                </section>

                                <section class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                                    <h3 class="text-lg font-semibold text-gray-900 mb-6">"평균 체류시간"</h3>
                                    <BarChart data=stay_time_points color="#C1C7CD" unit="초" />
                                </section>

                                <section class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                                    <h2 class="text-lg font-semibold text-gray-900 mb-8 text-center">
                                        "고객 정보"
                                    </h2>

                                    <div class="mb-8 border border-gray-200 rounded-xl p-6">
                                        <h3 class="text-sm font-medium text-gray-700 mb-4">"연령대 분포"</h3>
                                        <BarChart data=age_points color="rgba(0,0,0,0.5)" />
                                    </div>

                                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                                        <div class="border border-gray-200 rounded-xl p-6">
                                            <h3 class="text-sm font-medium text-gray-700 mb-4">"성별 분포"</h3>
                                            <DonutChart slices=gender_slices show_legend=true />
                                        </div>
                                        <div class="border border-gray-200 rounded-xl p-6">
                                            <h3 class="text-sm font-medium text-gray-700 mb-4">"디바이스 분포"</h3>
                                            <DonutChart slices=device_slices show_legend=true />
                                        </div>
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

/// Top 5 ranking table with a click-to-expand detail row
#[component]
fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    selected: RwSignal<Option<u32>>,
) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-gray-900 flex items-center">
                        <span class="mr-2">"📦"</span>
                        "상품 리스트"
                    </h2>
                    <div class="text-sm text-gray-500">"Top 5 상품"</div>
                </div>
            </div>

            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider w-16">
                                "순위"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                <div class="flex items-center space-x-1">
                                    <span>"상품명"</span>
                                    <span class="text-gray-400">"↓"</span>
                                </div>
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "카테고리"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "판매량"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "클릭수"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "매출액"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "전환율"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "작업"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .take(5)
                                .enumerate()
                                .map(|(index, product)| {
                                    let is_selected = selected.get() == Some(product.id);
                                    view! { <ProductRow index=index product=product is_selected=is_selected selected=selected /> }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[component]
fn ProductRow(
    index: usize,
    product: Product,
    is_selected: bool,
    selected: RwSignal<Option<u32>>,
) -> impl IntoView {
    let badge_class = match index {
        0 => "w-8 h-8 rounded-full flex items-center justify-center text-sm font-bold text-white bg-yellow-500",
        1 => "w-8 h-8 rounded-full flex items-center justify-center text-sm font-bold text-white bg-gray-400",
        2 => "w-8 h-8 rounded-full flex items-center justify-center text-sm font-bold text-white bg-orange-600",
        _ => "w-8 h-8 rounded-full flex items-center justify-center text-sm font-bold text-white bg-blue-500",
    };
    let row_class = if is_selected {
        "hover:bg-gray-50 transition-colors cursor-pointer bg-blue-50"
    } else {
        "hover:bg-gray-50 transition-colors cursor-pointer"
    };

    let product_id = product.id;
    let detail = is_selected.then(|| view! { <ProductDetailRow product=product.clone() /> });

    view! {
        <tr
            class=row_class
            on:click=move |_| {
                selected.update(|current| {
                    *current = if *current == Some(product_id) { None } else { Some(product_id) };
                })
            }
        >
            <td class="px-6 py-4 whitespace-nowrap">
                <div class=badge_class>{index + 1}</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm font-medium text-gray-900">{product.name.clone()}</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{product.category.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format_count(product.sales)}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format_count(product.clicks)}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                {product.revenue.clone()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                {product.conversion_rate.clone()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                <button
                    class="px-2 py-1 rounded hover:bg-gray-100"
                    on:click=move |ev| ev.stop_propagation()
                >
                    "⋯"
                </button>
            </td>
        </tr>
        {detail}
    }
}

/// Expanded analysis shown under the selected row
#[component]
fn ProductDetailRow(product: Product) -> impl IntoView {
    let per_click_rate = product.sales as f64 / product.clicks as f64 * 100.0;

    view! {
        <tr class="bg-blue-50">
            <td colspan="8" class="px-6 py-6">
                <div class="bg-white rounded-lg p-6 shadow-sm">
                    <h3 class="text-lg font-semibold text-gray-900 mb-4">
                        {format!("{} 상세 분석", product.name)}
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <div class="text-center p-4 bg-gray-50 rounded-lg">
                            <p class="text-sm text-gray-500">"총 판매량"</p>
                            <p class="text-2xl font-bold text-gray-900">{format_count(product.sales)}</p>
                        </div>
                        <div class="text-center p-4 bg-gray-50 rounded-lg">
                            <p class="text-sm text-gray-500">"총 클릭수"</p>
                            <p class="text-2xl font-bold text-gray-900">{format_count(product.clicks)}</p>
                        </div>
                        <div class="text-center p-4 bg-gray-50 rounded-lg">
                            <p class="text-sm text-gray-500">"전환율"</p>
                            <p class="text-2xl font-bold text-blue-600">{product.conversion_rate}</p>
                        </div>
                    </div>
                    <div class="mt-4 text-sm text-gray-600">
                        <p>{format!("• 카테고리: {}", product.category)}</p>
                        <p>{format!("• 총 매출: {}", product.revenue)}</p>
                        <p>{format!("• 클릭당 전환율: {:.2}%", per_click_rate)}</p>
                    </div>
                </div>
            </td>
        </tr>
    }
}

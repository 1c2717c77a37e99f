//! Customer Analysis Page
//!
//! Loyal customer KPIs, VIP statistics, repurchase and device
//! breakdowns, preference ladders and the loyalty trend.

use leptos::*;

use crate::api::types::{ChartPoint, KpiCard, TimeRange};
use crate::components::{
    AreaChart, DonutChart, DonutSlice, ErrorMessage, Loading, TimeRangeTabs,
};
use crate::hooks::use_loyal_customer_kpi;
use crate::router::use_router;

const CATEGORY_LADDER: [(&str, u32, &str); 8] = [
    ("상의", 310, "#03045e"),
    ("하의", 280, "#023e8a"),
    ("아우터", 251, "#0077b6"),
    ("신발", 224, "#0096c7"),
    ("가방", 195, "#00b4d8"),
    ("액세서리", 187, "#48cae4"),
    ("언더웨어", 133, "#8aebff"),
    ("기타", 101, "#caf0f8"),
];

const ACCESS_PAGE_LADDER: [(&str, u32, &str); 8] = [
    ("메인 페이지", 310, "#03045e"),
    ("상품 상세", 280, "#023e8a"),
    ("카테고리", 251, "#0077b6"),
    ("장바구니", 224, "#0096c7"),
    ("마이페이지", 195, "#00b4d8"),
    ("이벤트", 187, "#48cae4"),
    ("리뷰", 133, "#8aebff"),
    ("기타", 101, "#caf0f8"),
];

fn device_breakdown() -> Vec<DonutSlice> {
    vec![
        DonutSlice::new("Mobile", 45.0, "rgba(0,0,0,0.5)"),
        DonutSlice::new("PC", 35.0, "rgba(0,0,0,0.3)"),
        DonutSlice::new("Tablet", 20.0, "rgba(0,0,0,0.1)"),
    ]
}

/// Days-until-repurchase histogram, scaled like the mock endpoints
fn repurchase_time_data(range: TimeRange) -> Vec<ChartPoint> {
    const BASE: [(&str, f64); 7] = [
        ("1-7일", 45.0),
        ("8-14일", 32.0),
        ("15-21일", 28.0),
        ("22-28일", 35.0),
        ("29-35일", 42.0),
        ("36-42일", 38.0),
        ("43일+", 25.0),
    ];

    let multiplier = match range {
        TimeRange::Yesterday => 0.05,
        TimeRange::Week => 0.3,
        TimeRange::Month => 1.0,
    };
    BASE.iter()
        .map(|&(time, count)| ChartPoint::new(time, (count * multiplier).round()))
        .collect()
}

/// Repurchase-rate trend plotted in the loyalty flow card
fn loyalty_flow_data(range: TimeRange) -> Vec<ChartPoint> {
    match range {
        TimeRange::Yesterday => vec![ChartPoint::new("어제", 29.5)],
        TimeRange::Week => vec![
            ChartPoint::new("월", 28.5),
            ChartPoint::new("화", 29.1),
            ChartPoint::new("수", 28.8),
            ChartPoint::new("목", 29.4),
            ChartPoint::new("금", 30.2),
            ChartPoint::new("토", 27.9),
            ChartPoint::new("일", 26.5),
        ],
        TimeRange::Month => vec![
            ChartPoint::new("1월", 25.2),
            ChartPoint::new("2월", 26.1),
            ChartPoint::new("3월", 24.8),
            ChartPoint::new("4월", 27.3),
            ChartPoint::new("5월", 28.1),
            ChartPoint::new("6월", 28.5),
            ChartPoint::new("7월", 29.2),
        ],
    }
}

struct VipStat {
    icon: &'static str,
    title: &'static str,
    main_value: String,
    sub_value: &'static str,
}

/// Pull the three VIP headline numbers out of the loyal customer KPIs
fn vip_stats(cards: &[KpiCard]) -> Vec<VipStat> {
    let value_of = |needle: &str| {
        cards
            .iter()
            .find(|kpi| kpi.title.contains(needle))
            .map(|kpi| kpi.value.clone())
            .unwrap_or_else(|| "N/A".to_string())
    };

    vec![
        VipStat {
            icon: "👤",
            title: "충성고객 수",
            main_value: value_of("VIP 고객수"),
            sub_value: "총 매출액",
        },
        VipStat {
            icon: "💰",
            title: "총 매출액",
            main_value: value_of("평균 LTV"),
            sub_value: "5회",
        },
        VipStat {
            icon: "⏳",
            title: "평균 재구매 기간",
            main_value: value_of("평균 구매 간격"),
            sub_value: "10/10/2023",
        },
    ]
}

/// 고객정보 관리
#[component]
pub fn CustomerAnalysis() -> impl IntoView {
    let router = use_router();
    let range = create_rw_signal(TimeRange::default());

    let loyal_kpis = use_loyal_customer_kpi(range);

    let repurchase_points = Signal::derive(move || repurchase_time_data(range.get()));
    let loyalty_points = Signal::derive(move || loyalty_flow_data(range.get()));
    let device_slices = Signal::derive(device_breakdown);

    view! {
        {move || {
            if let Some(message) = loyal_kpis.error.get() {
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
                            <h1 class="text-2xl font-bold text-gray-900">"주요 고객 집중 분석"</h1>
                            <div></div>
                        </div>
                    </header>

                    <div class="p-8 space-y-12">
                        {move || {
                            if loyal_kpis.loading.get() {
                                return view! { <Loading /> }.into_view();
                            }

                            view! {
                                <section class="text-center space-y-6">
                                    <h2 class="text-4xl font-bold text-gray-900">"충성 고객 분석"</h2>
                                    <div class="flex justify-center">
                                        <TimeRangeTabs range=range />
                                    </div>
                                </section>

                                <section class="space-y-8">
                                    <h2 class="text-4xl font-bold text-gray-900 text-center">"충성고객 KPI"</h2>
                                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-6">
                                        {move || {
                                            loyal_kpis
                                                .data
                                                .get()
                                                .unwrap_or_default()
                                                .into_iter()
                                                .map(|card| view! { <LoyalKpiCard card=card /> })
                                                .collect_view()
                                        }}
                                    </div>
                                </section>

                                <section class="space-y-8">
                                    <h2 class="text-4xl font-bold text-gray-900 text-center">"VIP 고객 주요 통계"</h2>
                                    <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                                        {move || {
                                            vip_stats(&loyal_kpis.data.get().unwrap_or_default())
                                                .into_iter()
                                                .map(|stat| {
                                                    view! {
                                                        <div class="text-center space-y-5">
                                                            <div
                                                                class="w-[100px] h-[100px] rounded-full mx-auto flex items-center justify-center text-5xl"
                                                                style="background-color: rgba(0,0,0,0.05)"
                                                            >
                                                                {stat.icon}
                                                            </div>
                                                            <div class="space-y-2">
                                                                <p class="text-xl text-gray-900">{stat.main_value}</p>
                                                                <p class="text-base text-gray-500">{stat.sub_value}</p>
                                                            </div>
                                                            <h3 class="text-2xl font-medium text-gray-900">{stat.title}</h3>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </div>
                                </section>

                                <section class="space-y-8">
                                    <h2 class="text-4xl font-bold text-gray-900 text-center">"분석 차트"</h2>

                                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 mb-10">
                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <div class="space-y-3 mb-6">
                                                <h3 class="text-xl font-medium text-gray-900">"재구매 시간 대"</h3>
                                                <p class="text-base text-gray-500">"수"</p>
                                            </div>
                                            <AreaChart
                                                data=repurchase_points
                                                stroke="rgba(0,0,0,0.8)"
                                                fill="rgba(0,0,0,0.1)"
                                            />
                                            <p class="text-base text-gray-500 text-right">"시간???"</p>
                                        </div>

                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <div class="space-y-3 mb-6">
                                                <h3 class="text-xl font-medium text-gray-900">"주요 접속 디바이스"</h3>
                                                <p class="text-base text-gray-500">"???"</p>
                                            </div>
                                            <DonutChart slices=device_slices size=280 show_legend=true />
                                            <p class="text-base text-gray-500 text-right">"비율???"</p>
                                        </div>
                                    </div>

                                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-10">
                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <div class="flex justify-between items-center mb-6">
                                                <h3 class="text-base font-normal text-gray-900">"충성고객 선호 카테고리"</h3>
                                                <p class="text-base text-gray-400">"8개 카테고리"</p>
                                            </div>
                                            <LadderChart items=&CATEGORY_LADDER />
                                        </div>

                                        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                            <div class="space-y-3 mb-6">
                                                <h3 class="text-xl font-medium text-gray-900">"충성고객 주요 접속 페이지"</h3>
                                                <p class="text-base text-gray-500">"매출 비율(%)"</p>
                                            </div>
                                            <LadderChart items=&ACCESS_PAGE_LADDER />
                                        </div>
                                    </div>
                                </section>

                                <section class="space-y-8">
                                    <h2 class="text-4xl font-bold text-gray-900 text-center">"충성도 흐름"</h2>
                                    <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                                        <div class="space-y-3 mb-6">
                                            <h3 class="text-xl font-medium text-gray-900">"충성 고객 유지"</h3>
                                            <p class="text-base text-gray-500">"재구매율, 평균 LTV, VIP 매출 기여도"</p>
                                        </div>
                                        <AreaChart
                                            data=loyalty_points
                                            stroke="rgba(0,0,0,0.8)"
                                            fill="rgba(0,0,0,0.1)"
                                        />
                                        <p class="text-base text-gray-500 text-right">"???"</p>
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

/// Compact KPI card without an icon
#[component]
fn LoyalKpiCard(card: KpiCard) -> impl IntoView {
    let change_class = format!("text-sm {}", card.change_type.text_class());

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-4 hover:shadow-lg transition-shadow h-[124px]">
            <div class="space-y-1">
                <p class="text-sm text-gray-500">{card.title}</p>
                <p class="text-2xl font-medium text-gray-900">{card.value}</p>
                <p class=change_class>{card.change}</p>
            </div>
        </div>
    }
}

/// Stacked width-proportional bars, widest on top
#[component]
fn LadderChart(items: &'static [(&'static str, u32, &'static str)]) -> impl IntoView {
    let max = items.iter().map(|(_, value, _)| *value).max().unwrap_or(1);

    view! {
        <div>
            {items
                .iter()
                .enumerate()
                .map(|(index, &(label, value, color))| {
                    let radius = if index == 0 {
                        "6px 6px 0 0"
                    } else if index == items.len() - 1 {
                        "0 0 6px 6px"
                    } else {
                        "0 6px 6px 0"
                    };
                    let style = format!(
                        "background-color: {}; width: {}%; border-radius: {}",
                        color,
                        value as f64 / max as f64 * 100.0,
                        radius
                    );
                    view! {
                        <div class="flex items-center py-2.5 px-4 text-white text-base font-medium" style=style>
                            {label}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn test_repurchase_counts_scale_by_range() {
        let month = repurchase_time_data(TimeRange::Month);
        assert_eq!(month[0], ChartPoint::new("1-7일", 45.0));

        let week = repurchase_time_data(TimeRange::Week);
        assert_eq!(week[0].value, 14.0);
        assert_eq!(week[1].value, 10.0);

        let yesterday = repurchase_time_data(TimeRange::Yesterday);
        assert_eq!(yesterday[0].value, 2.0);
    }

    #[test]
    fn test_loyalty_flow_windows() {
        assert_eq!(loyalty_flow_data(TimeRange::Month).len(), 7);
        assert_eq!(
            loyalty_flow_data(TimeRange::Yesterday),
            vec![ChartPoint::new("어제", 29.5)]
        );
        assert_eq!(loyalty_flow_data(TimeRange::Week)[4].value, 30.2);
    }

    #[test]
    fn test_vip_stats_pull_from_kpis() {
        let stats = vip_stats(&mock::loyal_customer_kpi(TimeRange::Month));
        assert_eq!(stats[0].main_value, "342명");
        assert_eq!(stats[1].main_value, "₩450,000");
        assert_eq!(stats[2].main_value, "18일");
    }

    #[test]
    fn test_vip_stats_without_kpis() {
        let stats = vip_stats(&[]);
        assert!(stats.iter().all(|stat| stat.main_value == "N/A"));
    }
}

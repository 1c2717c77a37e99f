//! Tab Selectors
//!
//! Segmented controls for the time range and chart type filters.

use leptos::*;

use crate::api::types::{ChartType, TimeRange};

/// 어제 / 이번주 / 이번달 segmented control
#[component]
pub fn TimeRangeTabs(range: RwSignal<TimeRange>) -> impl IntoView {
    view! {
        <div class="inline-grid grid-cols-3 w-fit bg-gray-100 rounded-lg p-1">
            {TimeRange::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class=move || {
                                if range.get() == option {
                                    "px-4 py-1.5 rounded-md text-sm font-medium bg-white \
                                     text-gray-900 shadow-sm transition-colors"
                                } else {
                                    "px-4 py-1.5 rounded-md text-sm text-gray-600 \
                                     hover:text-gray-900 transition-colors"
                                }
                            }
                            on:click=move |_| range.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// 어제 / 이번주 / 이번달 pill selector
#[component]
pub fn TimeRangePills(range: RwSignal<TimeRange>) -> impl IntoView {
    view! {
        <div class="flex space-x-4">
            {TimeRange::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class=move || pill_class(range.get() == option)
                            on:click=move |_| range.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// 판매량 / 매출액 / 클릭수 pill selector
#[component]
pub fn ChartTypeTabs(chart_type: RwSignal<ChartType>) -> impl IntoView {
    view! {
        <div class="flex space-x-4">
            {ChartType::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class=move || pill_class(chart_type.get() == option)
                            on:click=move |_| chart_type.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn pill_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg text-sm font-medium transition-colors bg-blue-100 text-blue-700"
    } else {
        "px-4 py-2 rounded-lg text-sm font-medium transition-colors text-gray-600 hover:bg-gray-100"
    }
}

//! Error Message Component
//!
//! Centered fetch-failure notice with a refresh hint.

use leptos::*;

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center p-8">
            <div class="text-red-600 text-center">
                <p>{format!("오류가 발생했습니다: {}", message)}</p>
                <p class="text-sm text-gray-500 mt-2">"페이지를 새로고침해주세요."</p>
            </div>
        </div>
    }
}

//! Sidebar Navigation
//!
//! Fixed sidebar with logo, menu entries and the session footer.

use leptos::*;

use crate::router::use_router;
use crate::state::use_auth;

const MENU_ITEMS: [(&str, &str, &str); 5] = [
    ("/", "🏠", "메인 대시보드"),
    ("/product-focus", "📦", "주요 상품 분석"),
    ("/performance-analysis", "📊", "성과 지표 분석"),
    ("/customer-analysis", "👥", "고객정보 관리"),
    ("/account", "👤", "내 계정 관리"),
];

/// Fixed left sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let auth_for_footer = auth.clone();

    view! {
        <div class="fixed left-0 top-0 h-full w-64 bg-white border-r border-gray-200 shadow-lg z-50 flex flex-col">
            <div class="p-6 flex-1">
                // Logo
                <div class="mb-12 pb-4 border-b border-gray-100">
                    <div class="flex items-center space-x-3">
                        <div class="w-8 h-8 bg-gray-800 rounded-lg flex items-center justify-center shadow-md">
                            <span class="text-white text-sm font-bold">"성"</span>
                        </div>
                        <h1 class="text-lg text-gray-800 font-semibold">"성장통"</h1>
                    </div>
                </div>

                // Navigation
                <nav class="space-y-2">
                    {MENU_ITEMS
                        .into_iter()
                        .map(|(path, icon, label)| {
                            view! { <MenuItem path=path icon=icon label=label /> }
                        })
                        .collect_view()}
                </nav>
            </div>

            // Session footer
            <div class="p-4 border-t border-gray-100">
                <div class="px-2 mb-3 text-xs text-gray-500 truncate">
                    {move || auth_for_footer.user().with(|u| u.as_ref().map(|u| u.email.clone()))}
                </div>
                <button
                    class="w-full flex items-center space-x-3 px-4 py-2 rounded-xl text-sm text-gray-600 hover:bg-red-50 hover:text-red-600 transition-colors"
                    on:click=move |_| auth.logout()
                >
                    <span>"🚪"</span>
                    <span>"로그아웃"</span>
                </button>
            </div>
        </div>
    }
}

/// Individual menu entry
#[component]
fn MenuItem(
    path: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    let router = use_router();
    let router_for_active = router.clone();

    let active =
        create_memo(move |_| router_for_active.current_path().with(|current| current == path));

    view! {
        <button
            class=move || {
                if active.get() {
                    "w-full flex items-center space-x-3 px-4 py-3 rounded-xl transition-all duration-200 \
                     text-sm relative overflow-hidden bg-gradient-to-r from-blue-500 to-purple-600 \
                     text-white font-semibold shadow-lg shadow-blue-500/25"
                } else {
                    "w-full flex items-center space-x-3 px-4 py-3 rounded-xl transition-all duration-200 \
                     text-sm relative overflow-hidden text-gray-600 hover:bg-gradient-to-r \
                     hover:from-blue-50 hover:to-purple-50 hover:text-gray-900 hover:shadow-md"
                }
            }
            on:click=move |_| router.navigate(path)
        >
            {move || {
                active
                    .get()
                    .then(|| view! { <div class="absolute left-0 top-0 bottom-0 w-1 bg-white rounded-r-full" /> })
            }}
            <span class="w-5 text-center">{icon}</span>
            <span>{label}</span>
        </button>
    }
}

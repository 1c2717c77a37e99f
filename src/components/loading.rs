//! Loading Component
//!
//! Spinner shown while a dashboard section fetches.

use leptos::*;

/// Centered loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" />
        </div>
    }
}

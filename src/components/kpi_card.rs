//! KPI Card Component
//!
//! Compact stat card with icon, change badge, title and value.

use leptos::*;

use crate::api::types::KpiCard;

/// Single KPI stat card
#[component]
pub fn KpiStatCard(card: KpiCard) -> impl IntoView {
    let change_class = format!("text-sm font-medium {}", card.change_type.text_class());
    let icon_class = format!("text-3xl {}", card.color);

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6 hover:shadow-lg transition-shadow">
            <div class="flex items-center justify-between mb-4">
                <span class=icon_class>{kpi_icon(&card.icon)}</span>
                <span class=change_class>{card.change}</span>
            </div>
            <div>
                <p class="text-sm font-medium text-gray-600 mb-2">{card.title}</p>
                <p class="text-2xl font-bold text-gray-900">{card.value}</p>
            </div>
        </div>
    }
}

/// Get glyph for an icon name
fn kpi_icon(icon: &str) -> &'static str {
    match icon {
        "DollarSign" => "💰",
        "ShoppingCart" => "🛒",
        "Users" => "👥",
        "RefreshCw" => "🔄",
        "Star" => "⭐",
        "TrendingUp" => "📈",
        "Calendar" => "📅",
        _ => "📊",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_icon_fallback() {
        assert_eq!(kpi_icon("DollarSign"), "💰");
        assert_eq!(kpi_icon("Activity"), "📊");
        assert_eq!(kpi_icon("Unknown"), "📊");
    }
}

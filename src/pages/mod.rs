//! Pages
//!
//! Top-level page components for each route, plus the auth cards shown
//! while no session is active.

pub mod account;
pub mod auth;
pub mod customer_analysis;
pub mod main_dashboard;
pub mod performance_analysis;
pub mod product_focus;

pub use account::Account;
pub use auth::{ForgotPassword, Login, Signup};
pub use customer_analysis::CustomerAnalysis;
pub use main_dashboard::MainDashboard;
pub use performance_analysis::PerformanceAnalysis;
pub use product_focus::ProductFocus;

/// Grouped thousands, the way counters render everywhere in the UI
pub(crate) fn format_count(value: impl Into<u64>) -> String {
    let digits = value.into().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0u32), "0");
        assert_eq!(format_count(999u32), "999");
        assert_eq!(format_count(1_000u32), "1,000");
        assert_eq!(format_count(24_300u32), "24,300");
        assert_eq!(format_count(1_234_567u64), "1,234,567");
    }
}

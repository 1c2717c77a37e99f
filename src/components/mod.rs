//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod conversion;
pub mod donut;
pub mod error;
pub mod kpi_card;
pub mod loading;
pub mod sankey;
pub mod sidebar;
pub mod tabs;
pub mod toast;

pub use chart::{AreaChart, BarChart, LineChart};
pub use conversion::{ConversionAreaChart, ConversionTrendChart};
pub use donut::{DonutChart, DonutSlice};
pub use error::ErrorMessage;
pub use kpi_card::KpiStatCard;
pub use loading::Loading;
pub use sankey::TrafficFlowChart;
pub use sidebar::Sidebar;
pub use tabs::{ChartTypeTabs, TimeRangePills, TimeRangeTabs};
pub use toast::Toast;

//! API Data Types
//!
//! Typed payloads for every dashboard endpoint, plus the time-range and
//! chart-type selectors that key the queries.

/// Time range selector for all dashboard queries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeRange {
    Yesterday,
    Week,
    Month,
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Month
    }
}

impl TimeRange {
    /// All ranges in tab order
    pub const ALL: [TimeRange; 3] = [TimeRange::Yesterday, TimeRange::Week, TimeRange::Month];

    /// Stable key used in query strings and storage
    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::Yesterday => "yesterday",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
        }
    }

    /// Korean label shown on the tab buttons
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Yesterday => "어제",
            TimeRange::Week => "이번주",
            TimeRange::Month => "이번달",
        }
    }
}

/// Metric selector for the product performance chart
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartType {
    Sales,
    Revenue,
    Clicks,
}

impl Default for ChartType {
    fn default() -> Self {
        ChartType::Sales
    }
}

impl ChartType {
    /// All chart types in tab order
    pub const ALL: [ChartType; 3] = [ChartType::Sales, ChartType::Revenue, ChartType::Clicks];

    /// Stable key used in query strings
    pub fn key(&self) -> &'static str {
        match self {
            ChartType::Sales => "sales",
            ChartType::Revenue => "revenue",
            ChartType::Clicks => "clicks",
        }
    }

    /// Korean label shown on the tab buttons
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Sales => "판매량",
            ChartType::Revenue => "매출액",
            ChartType::Clicks => "클릭수",
        }
    }
}

/// Direction of a KPI change, colors the delta text
#[derive(Clone, Copy, Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
}

impl ChangeType {
    /// Tailwind text class for the delta
    pub fn text_class(&self) -> &'static str {
        match self {
            ChangeType::Positive => "text-green-600",
            ChangeType::Negative => "text-red-600",
        }
    }
}

/// One row of a product ranking table
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub sales: u32,
    pub clicks: u32,
    pub revenue: String,
    pub conversion_rate: String,
}

/// A single labeled value in a chart series
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ChartPoint {
    pub period: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(period: &str, value: f64) -> Self {
        Self {
            period: period.to_string(),
            value,
        }
    }
}

/// One slice of a demographic breakdown (age band, gender, device)
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct DemographicSlice {
    pub label: String,
    pub count: u32,
    pub percentage: f64,
}

/// Age, gender and device breakdowns for the customer section
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAnalytics {
    pub age_data: Vec<DemographicSlice>,
    pub gender_data: Vec<DemographicSlice>,
    pub device_data: Vec<DemographicSlice>,
}

/// A headline KPI card
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub change_type: ChangeType,
    pub icon: String,
    pub color: String,
}

/// The four sales-information series shown side by side
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesData {
    pub sales_revenue: Vec<ChartPoint>,
    pub total_purchases: Vec<ChartPoint>,
    pub total_clicks: Vec<ChartPoint>,
    pub cart_additions: Vec<ChartPoint>,
}

/// Cart-to-purchase funnel numbers for one period
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPoint {
    pub period: String,
    pub cart_adds: u32,
    pub purchases: u32,
    pub conversion_rate: f64,
    pub clicks: u32,
}

/// One weighted edge of the traffic flow diagram
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct TrafficLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

/// Node names plus weighted links for the traffic flow diagram
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct TrafficFlow {
    pub nodes: Vec<String>,
    pub links: Vec<TrafficLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_keys_are_distinct() {
        assert_eq!(TimeRange::Yesterday.key(), "yesterday");
        assert_eq!(TimeRange::Week.key(), "week");
        assert_eq!(TimeRange::Month.key(), "month");
    }

    #[test]
    fn test_time_range_labels() {
        assert_eq!(TimeRange::Yesterday.label(), "어제");
        assert_eq!(TimeRange::Week.label(), "이번주");
        assert_eq!(TimeRange::Month.label(), "이번달");
        assert_eq!(TimeRange::default(), TimeRange::Month);
    }

    #[test]
    fn test_chart_type_keys_and_labels() {
        assert_eq!(ChartType::Sales.key(), "sales");
        assert_eq!(ChartType::Revenue.label(), "매출액");
        assert_eq!(ChartType::default(), ChartType::Sales);
    }

    #[test]
    fn test_change_type_text_class() {
        assert_eq!(ChangeType::Positive.text_class(), "text-green-600");
        assert_eq!(ChangeType::Negative.text_class(), "text-red-600");
    }
}

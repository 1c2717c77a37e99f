//! Mock Data Source
//!
//! Deterministic canned datasets for every dashboard endpoint. Values are
//! adjusted per time range with fixed multipliers so the same inputs always
//! produce the same output.

use super::types::{
    ChangeType, ChartPoint, ChartType, ConversionPoint, CustomerAnalytics, DemographicSlice,
    KpiCard, Product, SalesData, TimeRange, TrafficFlow, TrafficLink,
};

const MONTH_PERIODS: [&str; 7] = ["1월", "2월", "3월", "4월", "5월", "6월", "7월"];
const WEEK_PERIODS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Multiplier applied to product table counts
fn product_factor(range: TimeRange) -> f64 {
    match range {
        TimeRange::Yesterday => 0.1,
        TimeRange::Week => 0.3,
        TimeRange::Month => 1.0,
    }
}

/// Multiplier applied to audience-sized counts (customers, hot products)
fn audience_factor(range: TimeRange) -> f64 {
    match range {
        TimeRange::Yesterday => 0.05,
        TimeRange::Week => 0.2,
        TimeRange::Month => 1.0,
    }
}

fn scaled(value: u32, multiplier: f64) -> u32 {
    (value as f64 * multiplier).round() as u32
}

fn month_series(values: [f64; 7]) -> Vec<ChartPoint> {
    MONTH_PERIODS
        .iter()
        .zip(values)
        .map(|(period, value)| ChartPoint::new(period, value))
        .collect()
}

fn week_series(values: [f64; 7]) -> Vec<ChartPoint> {
    WEEK_PERIODS
        .iter()
        .zip(values)
        .map(|(period, value)| ChartPoint::new(period, value))
        .collect()
}

fn product(
    id: u32,
    name: &str,
    category: &str,
    sales: u32,
    clicks: u32,
    revenue: &str,
    conversion_rate: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        sales,
        clicks,
        revenue: revenue.to_string(),
        conversion_rate: conversion_rate.to_string(),
    }
}

fn slice(label: &str, count: u32, percentage: f64) -> DemographicSlice {
    DemographicSlice {
        label: label.to_string(),
        count,
        percentage,
    }
}

fn kpi(title: &str, value: &str, change: &str, icon: &str, color: &str) -> KpiCard {
    KpiCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        change_type: ChangeType::Positive,
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

/// Swap card values while keeping titles, changes and styling
fn with_values<const N: usize>(mut cards: Vec<KpiCard>, values: [&str; N]) -> Vec<KpiCard> {
    for (card, value) in cards.iter_mut().zip(values) {
        card.value = value.to_string();
    }
    cards
}

// ============ Main dashboard ============

pub fn product_list(range: TimeRange) -> Vec<Product> {
    let base = vec![
        product(1, "청 셔츠", "Cell Text", 1200, 3400, "₩2,400,000", "35.3%"),
        product(2, "퍼티그 패츠", "Cell Text", 890, 2800, "₩1,780,000", "31.8%"),
        product(3, "화이트 스니커즈", "Cell Text", 1450, 3900, "₩2,900,000", "37.2%"),
        product(4, "블랙 재킷", "Cell Text", 670, 2100, "₩1,340,000", "31.9%"),
        product(5, "데님 패츠", "Cell Text", 1100, 3200, "₩2,200,000", "34.4%"),
    ];

    let multiplier = product_factor(range);
    base.into_iter()
        .map(|p| Product {
            sales: scaled(p.sales, multiplier),
            clicks: scaled(p.clicks, multiplier),
            ..p
        })
        .collect()
}

pub fn buyers_data(range: TimeRange) -> Vec<ChartPoint> {
    match range {
        TimeRange::Yesterday => vec![ChartPoint::new("어제", 1200.0)],
        TimeRange::Week => week_series([180.0, 165.0, 190.0, 175.0, 200.0, 160.0, 140.0]),
        TimeRange::Month => {
            month_series([1200.0, 1100.0, 1300.0, 1150.0, 1400.0, 1250.0, 1350.0])
        }
    }
}

pub fn click_cart_data(range: TimeRange) -> Vec<ChartPoint> {
    match range {
        TimeRange::Yesterday => vec![ChartPoint::new("어제", 2800.0)],
        TimeRange::Week => week_series([420.0, 380.0, 450.0, 410.0, 480.0, 360.0, 320.0]),
        TimeRange::Month => {
            month_series([2800.0, 2400.0, 3100.0, 2600.0, 3300.0, 2900.0, 3200.0])
        }
    }
}

pub fn avg_stay_time_data(range: TimeRange) -> Vec<ChartPoint> {
    match range {
        TimeRange::Yesterday => vec![ChartPoint::new("어제", 180.0)],
        TimeRange::Week => week_series([28.0, 25.0, 32.0, 27.0, 30.0, 22.0, 20.0]),
        TimeRange::Month => month_series([180.0, 165.0, 195.0, 170.0, 200.0, 185.0, 190.0]),
    }
}

pub fn customer_analytics(range: TimeRange) -> CustomerAnalytics {
    let age = vec![
        slice("10-19", 280, 11.3),
        slice("20-29", 520, 21.0),
        slice("30-39", 680, 27.4),
        slice("40-49", 590, 23.8),
        slice("50-59", 330, 13.3),
        slice("60+", 80, 3.2),
    ];
    let gender = vec![slice("남성", 1180, 47.6), slice("여성", 1300, 52.4)];
    let device = vec![
        slice("PC", 1240, 50.0),
        slice("모바일", 990, 39.9),
        slice("태블릿", 250, 10.1),
    ];

    let multiplier = audience_factor(range);
    let scale = |slices: Vec<DemographicSlice>| -> Vec<DemographicSlice> {
        slices
            .into_iter()
            .map(|s| DemographicSlice {
                count: scaled(s.count, multiplier),
                ..s
            })
            .collect()
    };

    CustomerAnalytics {
        age_data: scale(age),
        gender_data: scale(gender),
        device_data: scale(device),
    }
}

// ============ Performance dashboard ============

pub fn kpi_data(range: TimeRange) -> Vec<KpiCard> {
    let base = vec![
        kpi("총 매출액", "₩125,000,000", "+12%", "DollarSign", "text-green-600"),
        kpi("총 구매 수", "1,250", "+8%", "ShoppingCart", "text-blue-600"),
        kpi("총 사용자 수", "1,240", "+7%", "Users", "text-purple-600"),
        kpi("총 장바구니 추가 수", "2,300", "+5%", "Activity", "text-orange-600"),
    ];

    match range {
        TimeRange::Yesterday => with_values(base, ["₩4,200,000", "42", "38", "76"]),
        TimeRange::Week => with_values(base, ["₩25,000,000", "250", "248", "460"]),
        TimeRange::Month => base,
    }
}

pub fn sales_data(range: TimeRange) -> SalesData {
    match range {
        TimeRange::Yesterday => SalesData {
            sales_revenue: vec![ChartPoint::new("어제", 4200000.0)],
            total_purchases: vec![ChartPoint::new("어제", 48.0)],
            total_clicks: vec![ChartPoint::new("어제", 280.0)],
            cart_additions: vec![ChartPoint::new("어제", 110.0)],
        },
        TimeRange::Week => SalesData {
            sales_revenue: week_series([
                18000000.0, 15000000.0, 22000000.0, 19000000.0, 25000000.0, 14000000.0,
                12000000.0,
            ]),
            total_purchases: week_series([200.0, 180.0, 240.0, 210.0, 280.0, 160.0, 140.0]),
            total_clicks: week_series([1200.0, 1100.0, 1350.0, 1250.0, 1450.0, 900.0, 800.0]),
            cart_additions: week_series([450.0, 420.0, 520.0, 480.0, 580.0, 350.0, 300.0]),
        },
        TimeRange::Month => SalesData {
            sales_revenue: month_series([
                125000000.0,
                98000000.0,
                87000000.0,
                102000000.0,
                89000000.0,
                134000000.0,
                78000000.0,
            ]),
            total_purchases: month_series([1450.0, 1200.0, 980.0, 1100.0, 890.0, 1380.0, 750.0]),
            total_clicks: month_series([8500.0, 7200.0, 6800.0, 7500.0, 6200.0, 8900.0, 5800.0]),
            cart_additions: month_series([3200.0, 2800.0, 2400.0, 2900.0, 2100.0, 3400.0, 1900.0]),
        },
    }
}

pub fn conversion_data(range: TimeRange) -> Vec<ConversionPoint> {
    fn point(period: &str, cart_adds: u32, purchases: u32, rate: f64, clicks: u32) -> ConversionPoint {
        ConversionPoint {
            period: period.to_string(),
            cart_adds,
            purchases,
            conversion_rate: rate,
            clicks,
        }
    }

    match range {
        TimeRange::Yesterday => vec![point("어제", 110, 48, 43.6, 280)],
        TimeRange::Week => vec![
            point("월", 450, 200, 44.4, 1200),
            point("화", 420, 180, 42.9, 1100),
            point("수", 520, 240, 46.2, 1350),
            point("목", 480, 210, 43.8, 1250),
            point("금", 580, 280, 48.3, 1450),
            point("토", 350, 160, 45.7, 900),
            point("일", 300, 140, 46.7, 800),
        ],
        TimeRange::Month => vec![
            point("1월", 3200, 1450, 45.3, 8500),
            point("2월", 2800, 1200, 42.9, 7200),
            point("3월", 2400, 980, 40.8, 6800),
            point("4월", 2900, 1100, 37.9, 7500),
            point("5월", 2100, 890, 42.4, 6200),
            point("6월", 3400, 1380, 40.6, 8900),
            point("7월", 1900, 750, 39.5, 5800),
        ],
    }
}

/// Traffic flow between acquisition channels and conversion steps
pub fn traffic_flow() -> TrafficFlow {
    let nodes = [
        "검색엔진",
        "SNS 광고",
        "직접 방문",
        "이메일",
        "홈페이지",
        "상품 페이지",
        "회원가입",
        "구매",
    ];
    let links = [
        (0, 4, 3500.0),
        (0, 5, 2000.0),
        (1, 4, 2800.0),
        (1, 5, 1200.0),
        (2, 4, 1500.0),
        (3, 4, 800.0),
        (4, 6, 2000.0),
        (4, 7, 1500.0),
        (5, 7, 2500.0),
    ];

    TrafficFlow {
        nodes: nodes.iter().map(|n| n.to_string()).collect(),
        links: links
            .iter()
            .map(|&(source, target, value)| TrafficLink {
                source,
                target,
                value,
            })
            .collect(),
    }
}

// ============ Product focus dashboard ============

pub fn hot_products_data(range: TimeRange) -> Vec<Product> {
    let base = vec![
        product(1, "상품 A", "의류", 7000, 1900, "₩15,000,000", "5.8%"),
        product(2, "상품 B", "신발", 5200, 1600, "₩12,000,000", "4.2%"),
        product(3, "상품 C", "액세서리", 4800, 1400, "₩8,500,000", "3.9%"),
        product(4, "상품 D", "가방", 3900, 1200, "₩9,800,000", "3.2%"),
        product(5, "상품 E", "의류", 3400, 1100, "₩7,200,000", "2.8%"),
    ];

    let multiplier = audience_factor(range);
    base.into_iter()
        .map(|p| Product {
            sales: scaled(p.sales, multiplier),
            clicks: scaled(p.clicks, multiplier),
            ..p
        })
        .collect()
}

pub fn performance_chart_data(range: TimeRange, chart_type: ChartType) -> Vec<ChartPoint> {
    let base: [f64; 7] = match chart_type {
        ChartType::Sales => [4200.0, 3800.0, 4500.0, 3900.0, 4800.0, 4200.0, 4600.0],
        ChartType::Revenue => [8500.0, 7800.0, 9200.0, 8100.0, 9800.0, 8700.0, 9400.0],
        ChartType::Clicks => [
            12000.0, 11200.0, 13500.0, 11800.0, 14200.0, 12800.0, 13800.0,
        ],
    };
    const WEEK_FACTORS: [f64; 7] = [0.15, 0.14, 0.16, 0.15, 0.18, 0.12, 0.10];

    match range {
        TimeRange::Yesterday => vec![ChartPoint::new("어제", base[0] * 0.05)],
        TimeRange::Week => WEEK_PERIODS
            .iter()
            .zip(base)
            .zip(WEEK_FACTORS)
            .map(|((period, value), factor)| ChartPoint::new(period, (value * factor).round()))
            .collect(),
        TimeRange::Month => month_series(base),
    }
}

// ============ Customer dashboard ============

pub fn loyal_customer_kpi(range: TimeRange) -> Vec<KpiCard> {
    let base = vec![
        kpi("재구매율", "28.5%", "+1.2%p", "RefreshCw", "text-green-600"),
        kpi("평균 LTV", "₩450,000", "+8.5%", "DollarSign", "text-blue-600"),
        kpi("VIP 고객수", "342명", "+15명", "Star", "text-yellow-600"),
        kpi("VIP 매출 기여도", "62.8%", "+2.1%p", "TrendingUp", "text-purple-600"),
        kpi("평균 구매 간격", "18일", "-2일", "Calendar", "text-orange-600"),
    ];

    match range {
        TimeRange::Yesterday => with_values(base, ["32.1%", "₩15,000", "12명", "68.5%", "1일"]),
        TimeRange::Week => with_values(base, ["29.8%", "₩90,000", "68명", "64.2%", "4일"]),
        TimeRange::Month => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_list_is_deterministic() {
        assert_eq!(product_list(TimeRange::Week), product_list(TimeRange::Week));
        assert_eq!(
            performance_chart_data(TimeRange::Month, ChartType::Clicks),
            performance_chart_data(TimeRange::Month, ChartType::Clicks)
        );
    }

    #[test]
    fn test_product_counts_grow_with_range() {
        let yesterday = product_list(TimeRange::Yesterday);
        let week = product_list(TimeRange::Week);
        let month = product_list(TimeRange::Month);

        for i in 0..month.len() {
            assert!(yesterday[i].sales < week[i].sales);
            assert!(week[i].sales < month[i].sales);
            assert!(yesterday[i].clicks < week[i].clicks);
            assert!(week[i].clicks < month[i].clicks);
        }
    }

    #[test]
    fn test_product_strings_do_not_scale() {
        let yesterday = product_list(TimeRange::Yesterday);
        let month = product_list(TimeRange::Month);
        assert_eq!(yesterday[0].revenue, month[0].revenue);
        assert_eq!(yesterday[0].conversion_rate, month[0].conversion_rate);
    }

    #[test]
    fn test_week_kpi_values() {
        let cards = kpi_data(TimeRange::Week);
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["₩25,000,000", "250", "248", "460"]);
    }

    #[test]
    fn test_kpi_styling_is_range_independent() {
        let month = kpi_data(TimeRange::Month);
        let yesterday = kpi_data(TimeRange::Yesterday);
        for (a, b) in month.iter().zip(&yesterday) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.change, b.change);
            assert_eq!(a.icon, b.icon);
            assert_eq!(a.color, b.color);
        }
    }

    #[test]
    fn test_buyers_series_shape_per_range() {
        let yesterday = buyers_data(TimeRange::Yesterday);
        assert_eq!(yesterday.len(), 1);
        assert_eq!(yesterday[0].period, "어제");
        assert_eq!(yesterday[0].value, 1200.0);

        let week = buyers_data(TimeRange::Week);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].period, "월");

        let month = buyers_data(TimeRange::Month);
        assert_eq!(month.len(), 7);
        assert_eq!(month[6].period, "7월");
        assert_eq!(month[6].value, 1350.0);
    }

    #[test]
    fn test_customer_counts_scale_but_shares_hold() {
        let yesterday = customer_analytics(TimeRange::Yesterday);
        let week = customer_analytics(TimeRange::Week);
        let month = customer_analytics(TimeRange::Month);

        for i in 0..month.age_data.len() {
            assert!(yesterday.age_data[i].count < week.age_data[i].count);
            assert!(week.age_data[i].count < month.age_data[i].count);
            assert_eq!(yesterday.age_data[i].percentage, month.age_data[i].percentage);
        }
        assert_eq!(month.gender_data[1].label, "여성");
        assert_eq!(month.device_data[0].count, 1240);
    }

    #[test]
    fn test_performance_chart_week_is_rounded() {
        let week = performance_chart_data(TimeRange::Week, ChartType::Sales);
        let values: Vec<f64> = week.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![630.0, 532.0, 720.0, 585.0, 864.0, 504.0, 460.0]);
    }

    #[test]
    fn test_performance_chart_yesterday_keeps_raw_product() {
        let yesterday = performance_chart_data(TimeRange::Yesterday, ChartType::Revenue);
        assert_eq!(yesterday.len(), 1);
        assert_eq!(yesterday[0].value, 8500.0 * 0.05);
    }

    #[test]
    fn test_conversion_yesterday_snapshot() {
        let yesterday = conversion_data(TimeRange::Yesterday);
        assert_eq!(yesterday.len(), 1);
        assert_eq!(yesterday[0].cart_adds, 110);
        assert_eq!(yesterday[0].purchases, 48);
        assert_eq!(yesterday[0].conversion_rate, 43.6);
        assert_eq!(yesterday[0].clicks, 280);
    }

    #[test]
    fn test_sales_data_series_align() {
        for range in TimeRange::ALL {
            let data = sales_data(range);
            assert_eq!(data.sales_revenue.len(), data.total_purchases.len());
            assert_eq!(data.total_clicks.len(), data.cart_additions.len());
        }
        assert_eq!(sales_data(TimeRange::Yesterday).sales_revenue[0].value, 4200000.0);
    }

    #[test]
    fn test_loyal_kpi_week_values() {
        let cards = loyal_customer_kpi(TimeRange::Week);
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["29.8%", "₩90,000", "68명", "64.2%", "4일"]);
    }

    #[test]
    fn test_traffic_flow_links_reference_nodes() {
        let flow = traffic_flow();
        assert_eq!(flow.nodes.len(), 8);
        assert_eq!(flow.links.len(), 9);
        for link in &flow.links {
            assert!(link.source < flow.nodes.len());
            assert!(link.target < flow.nodes.len());
            assert!(link.value > 0.0);
        }
    }

    #[test]
    fn test_hot_products_month_baseline() {
        let month = hot_products_data(TimeRange::Month);
        assert_eq!(month[0].name, "상품 A");
        assert_eq!(month[0].sales, 7000);
        assert_eq!(month[0].clicks, 1900);
        assert_eq!(month[4].revenue, "₩7,200,000");
    }
}

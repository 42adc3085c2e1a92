//! Sales Report Model

use serde::{Deserialize, Serialize};

/// Daily summary block of a sales report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    /// Total revenue across all platforms
    pub revenue: f64,
    /// Total order count across all platforms
    pub orders: i64,
    /// Average order value (revenue / orders, 0.0 when there are no orders)
    pub aov: f64,
    /// Best-selling item label
    pub best_seller: String,
}

/// Per-platform revenue line with its variance against target
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformVariance {
    pub platform: String,
    /// Actual revenue taken on the platform
    pub revenue: f64,
    pub orders: i64,
    /// Signed percentage deviation from target ("+3.0%", "-7.1%", "+0%" or "N/A")
    pub sales_variance: String,
}

/// Full sales report returned by `POST /upload`
///
/// Top-level keys are snake_case while the nested blocks are camelCase; this
/// is the wire format the dashboard frontend consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    pub daily_report: DailyReport,
    /// One entry per platform, in channel order (POS, Swiggy, Zomato)
    pub variance_report: Vec<PlatformVariance>,
    /// Free-text menu insights
    pub menu_analysis: Vec<String>,
    /// When the report was generated (Unix millis)
    pub generated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_wire_format() {
        let report = SalesReport {
            daily_report: DailyReport {
                revenue: 45200.0,
                orders: 312,
                aov: 144.87,
                best_seller: "Signature Cold Brew".to_string(),
            },
            variance_report: vec![PlatformVariance {
                platform: "POS (In-Store)".to_string(),
                revenue: 25000.0,
                orders: 170,
                sales_variance: "+8.7%".to_string(),
            }],
            menu_analysis: vec!["Espresso Category Sales: +15% WoW".to_string()],
            generated_at: 1754438400000,
        };

        let json = serde_json::to_value(&report).unwrap();

        // Top-level keys stay snake_case
        assert!(json.get("daily_report").is_some());
        assert!(json.get("variance_report").is_some());
        assert!(json.get("menu_analysis").is_some());

        // Nested blocks are camelCase
        assert_eq!(json["daily_report"]["bestSeller"], "Signature Cold Brew");
        assert_eq!(json["daily_report"]["aov"], 144.87);
        assert_eq!(json["variance_report"][0]["salesVariance"], "+8.7%");
    }
}

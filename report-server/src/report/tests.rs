use super::*;
use shared::models::PlatformSales;
use std::path::PathBuf;

fn batch() -> UploadBatch {
    UploadBatch {
        pos: PathBuf::from("uploads/pos_sales.csv"),
        swiggy: PathBuf::from("uploads/swiggy_sales.csv"),
        zomato: PathBuf::from("uploads/zomato_sales.xlsx"),
    }
}

// ---- variance ----

#[test]
fn test_variance_equal_actual_and_target() {
    assert_eq!(variance_percentage(23000.0, 23000.0), "+0.0%");
    assert_eq!(variance_percentage(0.5, 0.5), "+0.0%");
}

#[test]
fn test_variance_zero_target_zero_actual() {
    assert_eq!(variance_percentage(0.0, 0.0), NO_CHANGE);
}

#[test]
fn test_variance_zero_target_nonzero_actual() {
    assert_eq!(variance_percentage(5.0, 0.0), NOT_APPLICABLE);
}

#[test]
fn test_variance_rise_rounds_to_one_decimal() {
    // 690 / 23000 = 3.0%
    assert_eq!(variance_percentage(23690.0, 23000.0), "+3.0%");
}

#[test]
fn test_variance_drop_keeps_natural_sign() {
    // -500 / 7000 = -7.142...% -> -7.1%
    assert_eq!(variance_percentage(6500.0, 7000.0), "-7.1%");
}

#[test]
fn test_variance_midpoint_rounds_away_from_zero() {
    // exactly 0.05% -> 0.1%
    assert_eq!(variance_percentage(10005.0, 10000.0), "+0.1%");
    // exactly -0.05% -> -0.1%
    assert_eq!(variance_percentage(9995.0, 10000.0), "-0.1%");
}

#[test]
fn test_variance_small_negative_rounds_to_signed_zero() {
    // -0.04% rounds to zero and must keep the explicit plus sign
    assert_eq!(variance_percentage(9996.0, 10000.0), "+0.0%");
}

// ---- money ----

#[test]
fn test_decimal_addition_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let sum_f64 = 0.1_f64 + 0.2_f64;
    assert_ne!(sum_f64, 0.3);

    assert_eq!(to_f64(to_decimal(0.1) + to_decimal(0.2)), 0.3);
}

#[test]
fn test_to_f64_rounds_half_away_from_zero() {
    assert_eq!(to_f64(to_decimal(144.875)), 144.88);
    assert_eq!(to_f64(to_decimal(-144.875)), -144.88);
}

// ---- simulated source ----

#[test]
fn test_simulated_rows_are_fixed() {
    let rows = SimulatedSalesSource.platform_sales(&batch()).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].platform, "POS (In-Store)");
    assert_eq!(rows[0].actual_revenue, 25000.0);
    assert_eq!(rows[0].target_revenue, 23000.0);
    assert_eq!(rows[0].orders, 170);
    assert_eq!(rows[1].platform, "Swiggy");
    assert_eq!(rows[1].orders, 90);
    assert_eq!(rows[2].platform, "Zomato");
    assert_eq!(rows[2].orders, 52);
}

// ---- assembler ----

#[test]
fn test_report_totals_match_platform_rows() {
    let report = generate_report(&SimulatedSalesSource, &batch()).unwrap();

    // revenue is the sum of platform actuals, orders the sum of counts
    assert_eq!(report.daily_report.revenue, 45200.0);
    assert_eq!(report.daily_report.orders, 312);
    // aov = revenue / orders, rounded to cents
    assert_eq!(report.daily_report.aov, 144.87);
    assert_eq!(report.daily_report.best_seller, "Signature Cold Brew");
    assert_eq!(report.variance_report.len(), 3);
    assert_eq!(report.menu_analysis.len(), 3);
    assert!(report.generated_at > 0);
}

#[test]
fn test_report_variances_in_channel_order() {
    let report = generate_report(&SimulatedSalesSource, &batch()).unwrap();

    let variances: Vec<&str> = report
        .variance_report
        .iter()
        .map(|v| v.sales_variance.as_str())
        .collect();
    assert_eq!(variances, ["+8.7%", "-3.8%", "+10.0%"]);

    let platforms: Vec<&str> = report
        .variance_report
        .iter()
        .map(|v| v.platform.as_str())
        .collect();
    assert_eq!(platforms, ["POS (In-Store)", "Swiggy", "Zomato"]);
}

struct EmptyDay;

impl SalesDataSource for EmptyDay {
    fn platform_sales(&self, _batch: &UploadBatch) -> Result<Vec<PlatformSales>, ReportError> {
        Ok(vec![PlatformSales {
            platform: "POS (In-Store)".to_string(),
            actual_revenue: 0.0,
            target_revenue: 0.0,
            orders: 0,
        }])
    }
}

#[test]
fn test_zero_orders_fall_back_to_zero_aov() {
    let report = generate_report(&EmptyDay, &batch()).unwrap();

    assert_eq!(report.daily_report.revenue, 0.0);
    assert_eq!(report.daily_report.aov, 0.0);
    assert_eq!(report.variance_report[0].sales_variance, NO_CHANGE);
}

struct NoRows;

impl SalesDataSource for NoRows {
    fn platform_sales(&self, _batch: &UploadBatch) -> Result<Vec<PlatformSales>, ReportError> {
        Ok(Vec::new())
    }
}

#[test]
fn test_empty_source_is_an_error() {
    let err = generate_report(&NoRows, &batch()).unwrap_err();
    assert!(matches!(err, ReportError::Empty));
}

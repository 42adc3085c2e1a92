//! Report assembly
//!
//! Combines platform sales rows into the daily summary, the per-platform
//! variance table and the menu insights of a [`SalesReport`].

use rust_decimal::prelude::*;

use shared::models::{DailyReport, PlatformVariance, SalesReport};

use crate::report::money::{to_decimal, to_f64};
use crate::report::source::{ReportError, SalesDataSource, UploadBatch};
use crate::report::variance::variance_percentage;

/// Best-selling item shown on the daily summary (simulated analysis output)
const BEST_SELLER: &str = "Signature Cold Brew";

/// Menu insights shown on the report (simulated analysis output)
const MENU_INSIGHTS: &[&str] = &[
    "Espresso Category Sales: +15% WoW",
    "Muffin (Blueberry) - Low Stock Warning: 5 units remaining",
    "Savory Sandwiches - Top Performing Category this Month",
];

/// Assemble a full sales report from the given source and upload batch
///
/// Totals are derived from the rows: `revenue` is the sum of platform
/// actuals, `orders` the sum of platform order counts, `aov` their quotient
/// (0.0 when there are no orders). A source that produces no rows is an
/// error.
pub fn generate_report(
    source: &dyn SalesDataSource,
    batch: &UploadBatch,
) -> Result<SalesReport, ReportError> {
    let rows = source.platform_sales(batch)?;
    if rows.is_empty() {
        return Err(ReportError::Empty);
    }

    let mut revenue = Decimal::ZERO;
    let mut orders: i64 = 0;
    for row in &rows {
        revenue += to_decimal(row.actual_revenue);
        orders += row.orders;
    }

    // An empty day must not divide by zero
    let aov = if orders > 0 {
        revenue / Decimal::from(orders)
    } else {
        Decimal::ZERO
    };

    let variance_report = rows
        .iter()
        .map(|row| PlatformVariance {
            platform: row.platform.clone(),
            revenue: row.actual_revenue,
            orders: row.orders,
            sales_variance: variance_percentage(row.actual_revenue, row.target_revenue),
        })
        .collect();

    Ok(SalesReport {
        daily_report: DailyReport {
            revenue: to_f64(revenue),
            orders,
            aov: to_f64(aov),
            best_seller: BEST_SELLER.to_string(),
        },
        variance_report,
        menu_analysis: MENU_INSIGHTS.iter().map(|s| s.to_string()).collect(),
        generated_at: chrono::Utc::now().timestamp_millis(),
    })
}

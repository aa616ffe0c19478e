use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::models::{Sale, SalesMetrics};

/// Summarizes a set of completed sales.
///
/// `today_sales` compares each record's creation instant against `now` by
/// calendar day in the server's local time zone. The average carries full
/// decimal precision; rounding is left to consumers.
pub fn compute_metrics(sales: &[Sale], now: DateTime<Local>) -> SalesMetrics {
    let total_sales: Decimal = sales.iter().map(|s| s.amount).sum();
    let sales_count = sales.len() as i64;

    let average_order = if sales_count > 0 {
        total_sales / Decimal::from(sales_count)
    } else {
        Decimal::ZERO
    };

    let today = now.date_naive();
    let today_sales = sales
        .iter()
        .filter(|s| s.created_at.with_timezone(&Local).date_naive() == today)
        .map(|s| s.amount)
        .sum();

    SalesMetrics {
        total_sales,
        sales_count,
        average_order,
        today_sales,
    }
}

#[cfg(test)]
mod tests {
    use super::compute_metrics;
    use crate::models::{Sale, SaleStatus};
    use chrono::{DateTime, Duration, Local, Utc};
    use rust_decimal::{Decimal, dec};

    fn sale(amount: Decimal, created_at: DateTime<Utc>) -> Sale {
        Sale {
            id: 1,
            user_id: 1,
            customer_id: 1,
            product_id: 1,
            amount,
            quantity: 1,
            status: SaleStatus::Completed,
            sale_date: created_at,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn empty_set_yields_all_zero_metrics() {
        let metrics = compute_metrics(&[], Local::now());

        assert_eq!(metrics.total_sales, Decimal::ZERO);
        assert_eq!(metrics.sales_count, 0);
        assert_eq!(metrics.average_order, Decimal::ZERO);
        assert_eq!(metrics.today_sales, Decimal::ZERO);
    }

    #[test]
    fn sums_counts_and_averages() {
        let now = Local::now();
        let sales = vec![
            sale(dec!(100), now.with_timezone(&Utc)),
            sale(dec!(200), now.with_timezone(&Utc)),
        ];

        let metrics = compute_metrics(&sales, now);

        assert_eq!(metrics.total_sales, dec!(300));
        assert_eq!(metrics.sales_count, 2);
        assert_eq!(metrics.average_order, dec!(150));
        assert_eq!(metrics.today_sales, dec!(300));
    }

    #[test]
    fn average_keeps_full_precision() {
        let now = Local::now();
        let created = now.with_timezone(&Utc);
        let sales = vec![
            sale(dec!(40), created),
            sale(dec!(35), created),
            sale(dec!(25), created),
        ];

        let metrics = compute_metrics(&sales, now);

        assert_eq!(metrics.average_order, dec!(100) / dec!(3));
    }

    #[test]
    fn today_sales_ignores_older_records() {
        let now = Local::now();
        let today = now.with_timezone(&Utc);
        let last_week = today - Duration::days(7);
        let sales = vec![
            sale(dec!(120), today),
            sale(dec!(80), last_week),
            sale(dec!(55), last_week),
        ];

        let metrics = compute_metrics(&sales, now);

        assert_eq!(metrics.total_sales, dec!(255));
        assert_eq!(metrics.today_sales, dec!(120));
    }
}

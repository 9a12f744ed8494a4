//! Row types for the five generated tables.
//!
//! Each struct knows its column list and how to render itself as one CSV
//! record, in the exact column order the loader's schema expects. All
//! monetary values are rounded to 2 decimals through `round2`, the single
//! rounding primitive for the whole crate.

use chrono::NaiveDateTime;

/// Timestamp rendering used in every CSV file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Round to 2 decimals, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn money(x: f64) -> String {
    format!("{:.2}", x)
}

fn timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// A table row that can be serialized to CSV.
pub trait CsvRecord {
    /// Column names, in file order.
    const COLUMNS: &'static [&'static str];

    /// One rendered field per column, same order as `COLUMNS`.
    fn csv_record(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub signup_date: NaiveDateTime,
    pub country: &'static str,
    pub city: &'static str,
    pub marketing_opt_in: bool,
}

impl CsvRecord for User {
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "first_name",
        "last_name",
        "email",
        "signup_date",
        "country",
        "city",
        "marketing_opt_in",
    ];

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.user_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            timestamp(&self.signup_date),
            self.country.to_string(),
            self.city.to_string(),
            self.marketing_opt_in.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub is_active: bool,
}

impl CsvRecord for Product {
    const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "product_name",
        "category",
        "subcategory",
        "price",
        "created_at",
        "is_active",
    ];

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.product_id.to_string(),
            self.product_name.clone(),
            self.category.to_string(),
            self.subcategory.to_string(),
            money(self.price),
            timestamp(&self.created_at),
            self.is_active.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: i64,
    pub user_id: i64,
    pub order_date: NaiveDateTime,
    pub status: &'static str,
    pub total_amount: f64,
    pub payment_method: &'static str,
    pub shipping_country: &'static str,
    pub shipping_city: &'static str,
}

impl CsvRecord for Order {
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "user_id",
        "order_date",
        "status",
        "total_amount",
        "payment_method",
        "shipping_country",
        "shipping_city",
    ];

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.user_id.to_string(),
            timestamp(&self.order_date),
            self.status.to_string(),
            money(self.total_amount),
            self.payment_method.to_string(),
            self.shipping_country.to_string(),
            self.shipping_city.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub discount_pct: u8,
    pub line_amount: f64,
}

impl CsvRecord for OrderItem {
    const COLUMNS: &'static [&'static str] = &[
        "order_item_id",
        "order_id",
        "product_id",
        "quantity",
        "unit_price",
        "discount_pct",
        "line_amount",
    ];

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.order_item_id.to_string(),
            self.order_id.to_string(),
            self.product_id.to_string(),
            self.quantity.to_string(),
            money(self.unit_price),
            self.discount_pct.to_string(),
            money(self.line_amount),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub payment_id: i64,
    pub order_id: i64,
    pub payment_date: NaiveDateTime,
    pub payment_status: &'static str,
    pub amount: f64,
}

impl CsvRecord for Payment {
    const COLUMNS: &'static [&'static str] = &[
        "payment_id",
        "order_id",
        "payment_date",
        "payment_status",
        "amount",
    ];

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.payment_id.to_string(),
            self.order_id.to_string(),
            timestamp(&self.payment_date),
            self.payment_status.to_string(),
            money(self.amount),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(123.456), 123.46);
        assert_eq!(round2(19.999), 20.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_money_always_two_decimals() {
        assert_eq!(money(5.0), "5.00");
        assert_eq!(money(123.4), "123.40");
        assert_eq!(money(0.1 + 0.2), "0.30");
    }

    #[test]
    fn test_user_record_matches_columns() {
        let user = User {
            user_id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada.1@example.com".to_string(),
            signup_date: ts(2023, 5, 1),
            country: "UK",
            city: "London",
            marketing_opt_in: true,
        };
        let record = user.csv_record();
        assert_eq!(record.len(), User::COLUMNS.len());
        assert_eq!(record[0], "1");
        assert_eq!(record[4], "2023-05-01 09:30:00");
        assert_eq!(record[7], "true");
    }

    #[test]
    fn test_order_item_record_matches_columns() {
        let item = OrderItem {
            order_item_id: 7,
            order_id: 3,
            product_id: 12,
            quantity: 2,
            unit_price: 19.9,
            discount_pct: 10,
            line_amount: round2(2.0 * 19.9 * 0.9),
        };
        let record = item.csv_record();
        assert_eq!(record.len(), OrderItem::COLUMNS.len());
        assert_eq!(record[4], "19.90");
        assert_eq!(record[5], "10");
        assert_eq!(record[6], "35.82");
    }

    #[test]
    fn test_payment_record_matches_columns() {
        let payment = Payment {
            payment_id: 1,
            order_id: 1,
            payment_date: ts(2024, 1, 2),
            payment_status: "failed",
            amount: 0.0,
        };
        let record = payment.csv_record();
        assert_eq!(record.len(), Payment::COLUMNS.len());
        assert_eq!(record[3], "failed");
        assert_eq!(record[4], "0.00");
    }
}

//! Controlled vocabularies for the dataset: every categorical field is drawn
//! from the fixed lists below, so the generated tables look plausible while
//! staying joinable (a city always belongs to its country, a subcategory to
//! its category).

use chrono::{NaiveDate, NaiveDateTime};

/// Countries with their city lists. Cities are only ever drawn from the
/// owning country's slice.
pub const COUNTRIES: [(&str, &[&str]); 6] = [
    ("India", &["Hyderabad", "Bengaluru", "Mumbai", "Delhi"]),
    ("USA", &["New York", "San Francisco", "Chicago"]),
    ("UK", &["London", "Manchester"]),
    ("Germany", &["Berlin", "Munich"]),
    ("Canada", &["Toronto", "Vancouver"]),
    ("Australia", &["Sydney", "Melbourne"]),
];

/// Product categories with their subcategory lists.
pub const CATEGORIES: [(&str, &[&str]); 4] = [
    ("Electronics", &["Mobiles", "Laptops", "Accessories"]),
    ("Clothing", &["Men", "Women", "Kids"]),
    ("Home", &["Kitchen", "Furniture"]),
    ("Sports", &["Outdoor", "Indoor"]),
];

/// Order statuses with selection weights. "delivered" and "shipped" dominate.
pub const ORDER_STATUSES: [(&str, f64); 4] = [
    ("pending", 0.10),
    ("shipped", 0.20),
    ("delivered", 0.60),
    ("cancelled", 0.10),
];

pub const PAYMENT_METHODS: [&str; 4] = ["card", "upi", "wallet", "cod"];

pub const PAYMENT_STATUSES: [&str; 3] = ["paid", "refunded", "failed"];

/// Discount percentage slots. Three zero slots give a 50% chance of no
/// discount, with the remaining mass split evenly across 5/10/15.
pub const DISCOUNT_SLOTS: [u8; 6] = [0, 0, 0, 5, 10, 15];

/// Order statuses that imply the payment went through.
pub const SETTLED_ORDER_STATUSES: [&str; 2] = ["shipped", "delivered"];

/// The fixed window all timestamps (signups, product creation, orders) are
/// drawn from: 2022-01-01T00:00:00 to 2025-01-01T00:00:00.
pub fn date_window() -> (NaiveDateTime, NaiveDateTime) {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1)
        .expect("valid window start")
        .and_hms_opt(0, 0, 0)
        .expect("valid window time");
    let end = NaiveDate::from_ymd_opt(2025, 1, 1)
        .expect("valid window end")
        .and_hms_opt(0, 0, 0)
        .expect("valid window time");
    (start, end)
}

//! Order, order-item and payment generation.
//!
//! The three tables are produced in one loop because items and payments
//! hang off their order: each order gets 1–5 line items and exactly one
//! payment. Item and payment ids are monotonic across the whole run.

use chrono::Duration;
use rand::rngs::StdRng;
use rand::Rng;

use crate::catalog;
use crate::generate::sample::{date_between, uniform_price, weighted_pick};
use crate::generate::{report_progress, Progress};
use crate::model::{round2, Order, OrderItem, Payment};

/// Orders plus their dependent rows.
#[derive(Debug)]
pub struct OrderBatch {
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

/// Generate `count` orders referencing users 1..=n_users and products
/// 1..=n_products. Callers must ensure both parent ranges are non-empty
/// when `count > 0` (see `GenerateParams::validate`).
pub fn generate_orders(
    count: usize,
    n_users: usize,
    n_products: usize,
    rng: &mut StdRng,
    progress: Progress<'_>,
) -> OrderBatch {
    let (start, end) = catalog::date_window();
    let mut orders = Vec::with_capacity(count);
    // 1..=5 items per order, 3 on average
    let mut order_items = Vec::with_capacity(count * 3);
    let mut payments = Vec::with_capacity(count);

    let mut order_item_id: i64 = 1;
    let mut payment_id: i64 = 1;

    for idx in 0..count {
        let order_id = idx as i64 + 1;
        let user_id = rng.random_range(1..=n_users as i64);
        let order_date = date_between(rng, start, end);
        let status = weighted_pick(&catalog::ORDER_STATUSES, rng);
        let payment_method =
            catalog::PAYMENT_METHODS[rng.random_range(0..catalog::PAYMENT_METHODS.len())];

        // Shipping address is drawn independently of the user's address.
        let (country, cities) = catalog::COUNTRIES[rng.random_range(0..catalog::COUNTRIES.len())];
        let city = cities[rng.random_range(0..cities.len())];

        let n_items = rng.random_range(1..=5);
        let mut order_total = 0.0_f64;

        for _ in 0..n_items {
            let product_id = rng.random_range(1..=n_products as i64);
            let quantity = rng.random_range(1..=3);
            // Re-sampled per line, deliberately NOT the product's list price.
            let unit_price = uniform_price(rng);
            let discount_pct =
                catalog::DISCOUNT_SLOTS[rng.random_range(0..catalog::DISCOUNT_SLOTS.len())];

            let line_amount = round2(
                quantity as f64 * unit_price * (1.0 - f64::from(discount_pct) / 100.0),
            );
            order_total += line_amount;

            order_items.push(OrderItem {
                order_item_id,
                order_id,
                product_id,
                quantity,
                unit_price,
                discount_pct,
                line_amount,
            });
            order_item_id += 1;
        }

        // Line amounts are already 2-decimal; the final round only guards
        // against drift accumulated in the sum.
        let order_total = round2(order_total);

        orders.push(Order {
            order_id,
            user_id,
            order_date,
            status,
            total_amount: order_total,
            payment_method,
            shipping_country: country,
            shipping_city: city,
        });

        // Shipped/delivered orders are always paid; the rest land anywhere.
        let payment_status = if catalog::SETTLED_ORDER_STATUSES.contains(&status) {
            "paid"
        } else {
            catalog::PAYMENT_STATUSES[rng.random_range(0..catalog::PAYMENT_STATUSES.len())]
        };
        let amount = if payment_status == "failed" {
            0.0
        } else {
            order_total
        };
        let payment_date = order_date + Duration::hours(rng.random_range(0..=72));

        payments.push(Payment {
            payment_id,
            order_id,
            payment_date,
            payment_status,
            amount,
        });
        payment_id += 1;

        report_progress(progress, "orders", idx + 1, count);
    }

    OrderBatch {
        orders,
        order_items,
        payments,
    }
}

//! The synthetic data generator.
//!
//! One `StdRng` is seeded once per run and threaded through three flat
//! loops in a fixed order (users, products, orders + items + payments), so
//! the same seed and row counts always reproduce the exact same dataset.

pub mod orders;
pub mod products;
pub mod sample;
pub mod users;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Result, StoreGenError};
use crate::model::{Order, OrderItem, Payment, Product, User};

/// Default row counts and seed, matching the reference dataset.
pub const DEFAULT_USER_ROWS: usize = 50_000;
pub const DEFAULT_PRODUCT_ROWS: usize = 50_000;
pub const DEFAULT_ORDER_ROWS: usize = 100_000;
pub const DEFAULT_SEED: u64 = 42;

/// Progress reporting batch size — avoids terminal I/O overhead on every row.
pub const PROGRESS_BATCH_SIZE: usize = 1_000;

/// Progress callback: (table name, rows generated for that table, table total).
pub type Progress<'a> = Option<&'a dyn Fn(&str, usize, usize)>;

pub(crate) fn report_progress(progress: Progress<'_>, table: &str, current: usize, total: usize) {
    if let Some(cb) = progress {
        if current.is_multiple_of(PROGRESS_BATCH_SIZE) || current == total {
            cb(table, current, total);
        }
    }
}

/// Row counts and seed for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateParams {
    pub users: usize,
    pub products: usize,
    pub orders: usize,
    pub seed: u64,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            users: DEFAULT_USER_ROWS,
            products: DEFAULT_PRODUCT_ROWS,
            orders: DEFAULT_ORDER_ROWS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GenerateParams {
    /// Orders reference users and products by id, so generating orders
    /// against an empty parent table can never produce a valid dataset.
    pub fn validate(&self) -> Result<()> {
        if self.orders > 0 && (self.users == 0 || self.products == 0) {
            return Err(StoreGenError::Config {
                message: format!(
                    "cannot generate {} orders with {} users and {} products: \
                     orders reference both tables by id",
                    self.orders, self.users, self.products
                ),
            });
        }
        Ok(())
    }
}

/// All five generated tables, in generation order.
#[derive(Debug)]
pub struct Dataset {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

impl Dataset {
    pub fn total_rows(&self) -> usize {
        self.users.len()
            + self.products.len()
            + self.orders.len()
            + self.order_items.len()
            + self.payments.len()
    }
}

/// Generate the full dataset.
///
/// The `progress` callback receives (table, generated, table_total) every
/// `PROGRESS_BATCH_SIZE` rows. Tables are always generated in the order
/// users, products, orders — both for progress reporting and because the
/// orders stage samples foreign keys from the ranges the first two stages
/// emitted.
pub fn generate_dataset(params: &GenerateParams, progress: Progress<'_>) -> Result<Dataset> {
    params.validate()?;

    let mut rng = StdRng::seed_from_u64(params.seed);

    let users = users::generate_users(params.users, &mut rng, progress);
    tracing::debug!(rows = users.len(), "generated users");

    let products = products::generate_products(params.products, &mut rng, progress);
    tracing::debug!(rows = products.len(), "generated products");

    let batch = orders::generate_orders(params.orders, params.users, params.products, &mut rng, progress);
    tracing::debug!(
        orders = batch.orders.len(),
        items = batch.order_items.len(),
        payments = batch.payments.len(),
        "generated orders"
    );

    Ok(Dataset {
        users,
        products,
        orders: batch.orders,
        order_items: batch.order_items,
        payments: batch.payments,
    })
}

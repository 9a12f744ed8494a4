//! Fixed relational schema for the five tables.
//!
//! Drop order is children-first, create and load order parents-first, so
//! the foreign-key references hold at every step. Rerunning the reset is
//! always safe: `DROP TABLE IF EXISTS` wipes whatever a previous run left.

use sqlx::SqlitePool;

use crate::error::{Result, StoreGenError};

/// Parent-before-child ordering, shared by table creation and loading.
pub const TABLE_ORDER: [&str; 5] = ["users", "products", "orders", "order_items", "payments"];

const CREATE_USERS: &str = "\
CREATE TABLE users (
    user_id INTEGER PRIMARY KEY,
    first_name VARCHAR,
    last_name VARCHAR,
    email VARCHAR,
    signup_date TIMESTAMP,
    country VARCHAR,
    city VARCHAR,
    marketing_opt_in BOOLEAN
)";

const CREATE_PRODUCTS: &str = "\
CREATE TABLE products (
    product_id INTEGER PRIMARY KEY,
    product_name VARCHAR,
    category VARCHAR,
    subcategory VARCHAR,
    price DECIMAL(10,2),
    created_at TIMESTAMP,
    is_active BOOLEAN
)";

const CREATE_ORDERS: &str = "\
CREATE TABLE orders (
    order_id INTEGER PRIMARY KEY,
    user_id INTEGER REFERENCES users(user_id),
    order_date TIMESTAMP,
    status VARCHAR,
    total_amount DECIMAL(12,2),
    payment_method VARCHAR,
    shipping_country VARCHAR,
    shipping_city VARCHAR
)";

const CREATE_ORDER_ITEMS: &str = "\
CREATE TABLE order_items (
    order_item_id INTEGER PRIMARY KEY,
    order_id INTEGER REFERENCES orders(order_id),
    product_id INTEGER REFERENCES products(product_id),
    quantity INTEGER,
    unit_price DECIMAL(10,2),
    discount_pct DECIMAL(5,2),
    line_amount DECIMAL(12,2)
)";

const CREATE_PAYMENTS: &str = "\
CREATE TABLE payments (
    payment_id INTEGER PRIMARY KEY,
    order_id INTEGER REFERENCES orders(order_id),
    payment_date TIMESTAMP,
    payment_status VARCHAR,
    amount DECIMAL(12,2)
)";

const CREATE_STATEMENTS: [(&str, &str); 5] = [
    ("users", CREATE_USERS),
    ("products", CREATE_PRODUCTS),
    ("orders", CREATE_ORDERS),
    ("order_items", CREATE_ORDER_ITEMS),
    ("payments", CREATE_PAYMENTS),
];

/// Drop all five tables (children first) and recreate them (parents first).
pub async fn reset_schema(pool: &SqlitePool) -> Result<()> {
    for table in TABLE_ORDER.iter().rev() {
        let sql = format!("DROP TABLE IF EXISTS {}", table);
        execute(pool, &sql).await?;
    }
    for (table, ddl) in CREATE_STATEMENTS {
        tracing::debug!(table, "creating table");
        execute(pool, ddl).await?;
    }
    Ok(())
}

async fn execute(pool: &SqlitePool, sql: &str) -> Result<()> {
    sqlx::query(sql)
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| StoreGenError::Sql {
            statement: sql.lines().next().unwrap_or(sql).to_string(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_statements_cover_table_order() {
        for (idx, table) in TABLE_ORDER.iter().enumerate() {
            assert_eq!(CREATE_STATEMENTS[idx].0, *table);
            assert!(CREATE_STATEMENTS[idx].1.contains(&format!("CREATE TABLE {}", table)));
        }
    }

    #[test]
    fn test_children_reference_earlier_parents() {
        // Every REFERENCES clause must point at a table created earlier.
        for (idx, (_, ddl)) in CREATE_STATEMENTS.iter().enumerate() {
            for (parent_idx, parent) in TABLE_ORDER.iter().enumerate() {
                if ddl.contains(&format!("REFERENCES {}(", parent)) {
                    assert!(
                        parent_idx < idx,
                        "{} references {} before it is created",
                        TABLE_ORDER[idx],
                        parent
                    );
                }
            }
        }
    }
}

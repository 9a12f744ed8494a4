//! Product table generation.

use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::rngs::StdRng;
use rand::Rng;

use crate::catalog;
use crate::generate::sample::{date_between, uniform_price};
use crate::generate::{report_progress, Progress};
use crate::model::Product;

/// Generate `count` products with ids 1..=count.
///
/// Product names combine the subcategory with a random word ("Laptops
/// vero"), which is enough variety for a browsable toy catalog. Roughly
/// three in four products are active.
pub fn generate_products(count: usize, rng: &mut StdRng, progress: Progress<'_>) -> Vec<Product> {
    let (start, end) = catalog::date_window();
    let mut products = Vec::with_capacity(count);

    for idx in 0..count {
        let (category, subs) = catalog::CATEGORIES[rng.random_range(0..catalog::CATEGORIES.len())];
        let subcategory = subs[rng.random_range(0..subs.len())];
        let word: String = Word().fake_with_rng(rng);

        products.push(Product {
            product_id: idx as i64 + 1,
            product_name: format!("{} {}", subcategory, word),
            category,
            subcategory,
            price: uniform_price(rng),
            created_at: date_between(rng, start, end),
            is_active: rng.random_bool(0.75),
        });

        report_progress(progress, "products", idx + 1, count);
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = generate_products(30, &mut rng, None);
        for (idx, product) in products.iter().enumerate() {
            assert_eq!(product.product_id, idx as i64 + 1);
        }
    }

    #[test]
    fn test_subcategory_belongs_to_category() {
        let mut rng = StdRng::seed_from_u64(42);
        for product in generate_products(500, &mut rng, None) {
            let (_, subs) = catalog::CATEGORIES
                .iter()
                .find(|(c, _)| *c == product.category)
                .expect("category from catalog");
            assert!(subs.contains(&product.subcategory));
        }
    }

    #[test]
    fn test_name_starts_with_subcategory() {
        let mut rng = StdRng::seed_from_u64(42);
        for product in generate_products(100, &mut rng, None) {
            assert!(product.product_name.starts_with(product.subcategory));
        }
    }

    #[test]
    fn test_prices_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for product in generate_products(1_000, &mut rng, None) {
            assert!((5.0..=500.0).contains(&product.price));
        }
    }

    #[test]
    fn test_most_products_active() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = generate_products(10_000, &mut rng, None);
        let active = products.iter().filter(|p| p.is_active).count();
        // 75% ± a generous margin
        assert!(
            active > 7_000 && active < 8_000,
            "expected ~7500 active, got {}",
            active
        );
    }
}

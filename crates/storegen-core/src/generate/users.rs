//! User table generation.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::Rng;

use crate::catalog;
use crate::generate::sample::date_between;
use crate::generate::{report_progress, Progress};
use crate::model::User;

/// Generate `count` users with ids 1..=count.
///
/// The country is chosen uniformly and the city from that country's list,
/// so the pair is always consistent. Emails are unique by construction:
/// the user id is spliced into the faker-provided local part.
pub fn generate_users(count: usize, rng: &mut StdRng, progress: Progress<'_>) -> Vec<User> {
    let (start, end) = catalog::date_window();
    let mut users = Vec::with_capacity(count);

    for idx in 0..count {
        let user_id = idx as i64 + 1;
        let (country, cities) = catalog::COUNTRIES[rng.random_range(0..catalog::COUNTRIES.len())];
        let city = cities[rng.random_range(0..cities.len())];

        users.push(User {
            user_id,
            first_name: FirstName().fake_with_rng(rng),
            last_name: LastName().fake_with_rng(rng),
            email: unique_email(rng, user_id),
            signup_date: date_between(rng, start, end),
            country,
            city,
            marketing_opt_in: rng.random_bool(0.5),
        });

        report_progress(progress, "users", idx + 1, count);
    }

    users
}

/// A fake email made collision-free by splicing the user id into the local
/// part ("jane.17@example.net").
fn unique_email(rng: &mut impl Rng, user_id: i64) -> String {
    let email: String = SafeEmail().fake_with_rng(rng);
    match email.split_once('@') {
        Some((local, domain)) => format!("{}.{}@{}", local, user_id, domain),
        None => format!("user{}@example.com", user_id),
    }
}

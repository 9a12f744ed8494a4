use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use storegen_core::config::{read_config, DEFAULT_DATA_DIR};
use storegen_core::generate::{
    generate_dataset, GenerateParams, DEFAULT_ORDER_ROWS, DEFAULT_PRODUCT_ROWS, DEFAULT_SEED,
    DEFAULT_USER_ROWS,
};
use storegen_core::output::csv::write_dataset;

use crate::args::GenerateArgs;

pub async fn run(args: &GenerateArgs) -> Result<()> {
    // Load optional storegen.toml config; CLI flags win over the file
    let config = read_config(Path::new("."))?;
    let file_generate = config
        .as_ref()
        .map(|c| c.generate.clone())
        .unwrap_or_default();
    let file_paths = config.as_ref().map(|c| c.paths.clone()).unwrap_or_default();

    let params = GenerateParams {
        users: args.users.or(file_generate.users).unwrap_or(DEFAULT_USER_ROWS),
        products: args
            .products
            .or(file_generate.products)
            .unwrap_or(DEFAULT_PRODUCT_ROWS),
        orders: args
            .orders
            .or(file_generate.orders)
            .unwrap_or(DEFAULT_ORDER_ROWS),
        seed: args.seed.or(file_generate.seed).unwrap_or(DEFAULT_SEED),
    };
    let data_dir: PathBuf = args
        .data_dir
        .clone()
        .or(file_paths.data_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    tracing::debug!(?params, data_dir = %data_dir.display(), "resolved generate settings");

    // Phase 1: Generate
    let loop_rows = params.users + params.products + params.orders;
    let pb = ProgressBar::new(loop_rows as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.cyan} [1/2] Generating data... {bar:40.cyan/dim} {pos}/{len} ({eta})",
            )
            .unwrap()
            .progress_chars("█▓░"),
    );

    // The generator reports per-table positions; tables always run in the
    // order users, products, orders, so the bar offset is known up front.
    let user_rows = params.users;
    let product_rows = params.products;
    let progress = |table: &str, current: usize, _total: usize| {
        let offset = match table {
            "users" => 0,
            "products" => user_rows,
            _ => user_rows + product_rows,
        };
        pb.set_position((offset + current) as u64);
    };

    let data = generate_dataset(&params, Some(&progress))?;
    pb.finish();

    // Phase 2: Write CSV files
    let pb2 = ProgressBar::new_spinner();
    pb2.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [2/2] {msg}")
            .unwrap(),
    );
    pb2.set_message(format!("Writing CSV files to {}...", data_dir.display()));
    pb2.enable_steady_tick(std::time::Duration::from_millis(100));

    write_dataset(&data_dir, &data)?;

    pb2.finish_with_message(format!(
        "Writing CSV files to {}... ✓",
        data_dir.display()
    ));

    eprintln!(
        "\n✓ Generated {} rows across 5 tables → {} (seed {})",
        data.total_rows(),
        data_dir.display(),
        params.seed
    );

    Ok(())
}

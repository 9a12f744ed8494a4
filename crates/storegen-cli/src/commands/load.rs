use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};

use storegen_core::config::{read_config, DEFAULT_DATABASE_PATH, DEFAULT_DATA_DIR};
use storegen_core::load::import::load_tables;
use storegen_core::load::schema::reset_schema;

use crate::args::LoadArgs;

pub async fn run(args: &LoadArgs) -> Result<()> {
    let config = read_config(Path::new("."))?;
    let file_paths = config.as_ref().map(|c| c.paths.clone()).unwrap_or_default();

    let data_dir: PathBuf = args
        .data_dir
        .clone()
        .or(file_paths.data_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let db_path: PathBuf = args
        .database
        .clone()
        .or(file_paths.database)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

    tracing::debug!(
        data_dir = %data_dir.display(),
        database = %db_path.display(),
        "resolved load settings"
    );

    let pool = storegen_core::load::connect(&db_path).await?;

    // Phase 1: Reset schema
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [1/2] {msg}")
            .unwrap(),
    );
    pb.set_message("Resetting schema...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    reset_schema(&pool).await?;

    pb.finish_with_message("Resetting schema... ✓ 5 tables recreated");

    // Phase 2: Bulk import. Total row count is only known once the files
    // are read, so the bar length is set from inside the callback.
    let pb2 = ProgressBar::new(0);
    pb2.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [2/2] Loading tables... {bar:40.cyan/dim} {pos}/{len}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    let progress = |current: usize, total: usize| {
        pb2.set_length(total as u64);
        pb2.set_position(current as u64);
    };

    let counts = load_tables(&pool, &data_dir, Some(&progress)).await?;
    pb2.finish();

    pool.close().await;

    let mut summary = Table::new();
    summary.set_header(vec!["table", "rows loaded"]);
    for (table, rows) in &counts {
        summary.add_row(vec![table.clone(), rows.to_string()]);
    }
    println!("{summary}");

    let total_rows: usize = counts.values().sum();
    eprintln!("\n✓ Loaded {} rows into {}", total_rows, db_path.display());

    Ok(())
}

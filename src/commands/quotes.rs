use anyhow::Result;
use colored::Colorize;
use comfy_table::Cell;
use std::path::Path;
use uniform_shop::{config, db, quotes::QuoteStore};

use crate::cli::QuotesArgs;
use crate::commands::options::new_table;

/// Execute the quotes command
///
/// Lists the most recent quote requests straight from the database. This is
/// the only way to read them back in bulk; the HTTP API never exposes a list.
pub async fn execute(path: &Path, args: &QuotesArgs) -> Result<()> {
    let cfg = config::load_config(path)?;
    let pool = db::connect(&cfg.database).await?;
    let store = QuoteStore::new(pool.clone());

    let quotes = store.list_recent(args.limit).await?;
    pool.close().await;

    if quotes.is_empty() {
        println!("{}", "No quote requests yet".yellow());
        return Ok(());
    }

    let mut table = new_table(&["Created", "Name", "Phone", "Company", "Estimate", "Status"]);
    for quote in &quotes {
        let estimate = quote
            .estimate
            .map(|e| e.estimated_price.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(quote.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&quote.name),
            Cell::new(&quote.phone),
            Cell::new(quote.company.as_deref().unwrap_or("-")),
            Cell::new(estimate),
            Cell::new(&quote.status),
        ]);
    }
    println!("{table}");
    println!("{} quote request(s)", quotes.len());

    Ok(())
}

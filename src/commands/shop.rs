//! Shop command - browse the garden catalog and buy items.

use std::path::PathBuf;

use anyhow::Result;

use crate::storage;


/// Run the shop command.
pub fn run(db_path: PathBuf, buy: Option<i64>) -> Result<()> {
    if !db_path.exists() {
        println!("No database found. Run 'hbg init' to get started.");
        return Ok(());
    }

    if let Some(item_id) = buy {
        let purchase = storage::purchase_item(&db_path, item_id)?;
        let coins = storage::coin_ledger(&db_path)?;
        println!(
            "Bought {} for {} coins ({} left)",
            purchase.item_name, purchase.cost_at_purchase, coins.balance
        );
        return Ok(());
    }

    let items = storage::list_items(&db_path)?;
    let coins = storage::coin_ledger(&db_path)?;

    println!("Garden shop (balance: {} coins)", coins.balance);
    println!("{}", "-".repeat(32));
    for item in items {
        let marker = if item.cost <= coins.balance { " " } else { "*" };
        println!("{marker} {:>4}  {:<20} {:>5} coins", item.id, item.name, item.cost);
    }
    println!("  (* = not enough coins; buy with 'hbg shop --buy <id>')");

    let purchases = storage::list_purchases(&db_path)?;
    if !purchases.is_empty() {
        println!("\nYour garden:");
        for purchase in purchases {
            println!("  {} ({} coins)", purchase.item_name, purchase.cost_at_purchase);
        }
    }

    Ok(())
}

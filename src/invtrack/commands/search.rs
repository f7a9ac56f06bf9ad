use crate::commands::{CmdMessage, CmdResult};
use crate::inventory::Inventory;

/// Case-insensitive substring match on id, name and category. An empty term
/// matches every product. Results keep inventory order.
pub fn run(inventory: &Inventory, term: &str) -> CmdResult {
    let term_lower = term.trim().to_lowercase();

    let matches: Vec<_> = inventory
        .iter()
        .filter(|record| {
            record.id.to_lowercase().contains(&term_lower)
                || record.name.to_lowercase().contains(&term_lower)
                || record.category.to_lowercase().contains(&term_lower)
        })
        .cloned()
        .collect();

    let message = if matches.is_empty() {
        CmdMessage::info(format!("No products found matching '{}'.", term.trim()))
    } else {
        CmdMessage::info(format!("Found {} product(s):", matches.len()))
    };

    CmdResult::default()
        .with_message(message)
        .with_listed_products(matches)
}

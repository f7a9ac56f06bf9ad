use crate::commands::{summary, CmdMessage, CmdResult};
use crate::inventory::Inventory;
use crate::model::ProductRecord;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    PriceAsc,
    QuantityDesc,
    Category,
}

impl SortKey {
    fn compare(self, a: &ProductRecord, b: &ProductRecord) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::QuantityDesc => b.quantity.cmp(&a.quantity),
            SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::PriceAsc => "price_asc",
            SortKey::QuantityDesc => "quantity_desc",
            SortKey::Category => "category",
        };
        f.write_str(name)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "price" | "price_asc" => Ok(SortKey::PriceAsc),
            "quantity" | "quantity_desc" | "qty" => Ok(SortKey::QuantityDesc),
            "category" => Ok(SortKey::Category),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Lists every product ordered by `sort_key`. Sorting is stable, so ties keep
/// inventory order. An unknown key is not an error: the unsorted list is
/// returned along with a warning.
pub fn run(inventory: &Inventory, sort_key: &str) -> CmdResult {
    let mut products: Vec<ProductRecord> = inventory.iter().cloned().collect();
    let mut result = CmdResult::default();

    match sort_key.parse::<SortKey>() {
        Ok(key) => products.sort_by(|a, b| key.compare(a, b)),
        Err(_) => result.add_message(CmdMessage::warning(format!(
            "Invalid sort option '{}'. Showing unsorted list.",
            sort_key.trim()
        ))),
    }

    result
        .with_listed_products(products)
        .with_summary(summary::run(inventory))
}

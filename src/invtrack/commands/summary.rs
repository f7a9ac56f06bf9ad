use crate::inventory::Inventory;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub product_count: usize,
    pub total_quantity: u64,
    pub total_value: f64,
    /// Distinct categories, in order of first appearance.
    pub categories: Vec<String>,
}

/// Computes totals over the current contents of `inventory`.
pub fn run(inventory: &Inventory) -> Summary {
    let mut categories: Vec<String> = Vec::new();
    let mut total_quantity: u64 = 0;
    let mut total_value = 0.0;

    for record in inventory {
        total_quantity = total_quantity.saturating_add(record.quantity);
        total_value += record.total_value();
        if !categories.contains(&record.category) {
            categories.push(record.category.clone());
        }
    }

    Summary {
        product_count: inventory.len(),
        total_quantity,
        total_value,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::InventoryFixture;

    #[test]
    fn totals_quantity_and_value() {
        let inventory = InventoryFixture::new()
            .with_categorized("A", "a", "Tools", 2, 3.0)
            .with_categorized("B", "b", "Food", 1, 10.0)
            .with_categorized("C", "c", "Tools", 0, 99.0)
            .build();
        let summary = run(&inventory);
        assert_eq!(summary.product_count, 3);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.total_value, 16.0);
        assert_eq!(summary.categories, vec!["Tools", "Food"]);
    }

    #[test]
    fn empty_inventory() {
        let summary = run(&Inventory::new());
        assert_eq!(summary.product_count, 0);
        assert_eq!(summary.total_quantity, 0);
        assert_eq!(summary.total_value, 0.0);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn reflects_later_changes() {
        let mut inventory = InventoryFixture::new().with_product("A", "a", 2, 3.0).build();
        assert_eq!(run(&inventory).total_quantity, 2);
        inventory.get_mut("A").unwrap().quantity = 5;
        assert_eq!(run(&inventory).total_quantity, 5);
    }
}

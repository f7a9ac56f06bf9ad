use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InvError, Result};
use crate::inventory::Inventory;
use crate::model::{
    non_blank, timestamp, validate_price, NewProduct, ProductRecord, DEFAULT_CATEGORY,
};
use tracing::debug;

pub fn run(inventory: &mut Inventory, product: NewProduct) -> Result<CmdResult> {
    let id = product.id.trim();
    if id.is_empty() {
        return Err(InvError::invalid("Product ID cannot be empty"));
    }
    let name = product.name.trim();
    if name.is_empty() {
        return Err(InvError::invalid("Product name cannot be empty"));
    }
    validate_price(product.price)?;
    if inventory.contains(id) {
        return Err(InvError::AlreadyExists(id.to_string()));
    }

    let record = ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        quantity: product.quantity,
        price: product.price,
        category: non_blank(product.category.as_deref())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string(),
        added_at: timestamp::now(),
        updated_at: None,
    };
    debug!(id = %record.id, "adding product");
    inventory.insert(record.clone());

    let message = CmdMessage::success(format!("Product '{}' added successfully!", record.name));
    Ok(CmdResult::default()
        .with_affected_products(vec![record])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_product_with_defaults() {
        let mut inventory = Inventory::new();
        let result = run(&mut inventory, NewProduct::new("P1", "Widget", 3, 2.5)).unwrap();

        let record = inventory.get("P1").unwrap();
        assert_eq!(record.name, "Widget");
        assert_eq!(record.quantity, 3);
        assert_eq!(record.price, 2.5);
        assert_eq!(record.category, "General");
        assert!(record.updated_at.is_none());
        assert_eq!(result.affected_products[0].id, "P1");
    }

    #[test]
    fn blank_category_defaults_to_general() {
        let mut inventory = Inventory::new();
        run(
            &mut inventory,
            NewProduct::new("P1", "Widget", 1, 1.0).with_category("   "),
        )
        .unwrap();
        assert_eq!(inventory.get("P1").unwrap().category, "General");
    }

    #[test]
    fn trims_text_fields() {
        let mut inventory = Inventory::new();
        run(
            &mut inventory,
            NewProduct::new("  P1 ", " Widget ", 1, 1.0).with_category(" Tools "),
        )
        .unwrap();
        let record = inventory.get("P1").unwrap();
        assert_eq!(record.name, "Widget");
        assert_eq!(record.category, "Tools");
    }

    #[test]
    fn rejects_duplicates_without_changing_store() {
        let mut inventory = Inventory::new();
        run(&mut inventory, NewProduct::new("P1", "Widget", 3, 2.5)).unwrap();
        let before = inventory.clone();

        let err = run(&mut inventory, NewProduct::new("P1", "Other", 9, 9.0)).unwrap_err();
        assert!(matches!(err, InvError::AlreadyExists(id) if id == "P1"));
        assert_eq!(inventory, before);
    }

    #[test]
    fn rejects_invalid_input() {
        let mut inventory = Inventory::new();
        for product in [
            NewProduct::new("", "Widget", 1, 1.0),
            NewProduct::new("P1", "  ", 1, 1.0),
            NewProduct::new("P1", "Widget", 1, -0.01),
            NewProduct::new("P1", "Widget", 1, f64::NAN),
        ] {
            assert!(matches!(
                run(&mut inventory, product),
                Err(InvError::InvalidInput(_))
            ));
        }
        assert!(inventory.is_empty());
    }

    #[test]
    fn ids_stay_unique_across_adds_and_removes() {
        let mut inventory = Inventory::new();
        for id in ["A", "B", "A", "C", "B"] {
            let _ = run(&mut inventory, NewProduct::new(id, "x", 1, 1.0));
        }
        crate::commands::remove::run(&mut inventory, "A").unwrap();
        run(&mut inventory, NewProduct::new("A", "again", 1, 1.0)).unwrap();

        let mut ids: Vec<_> = inventory.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), inventory.len());
        assert_eq!(inventory.len(), 3);
    }
}

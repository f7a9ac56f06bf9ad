use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InvError, Result};
use crate::inventory::Inventory;
use crate::model::{timestamp, validate_price, ProductUpdate};
use tracing::debug;

/// Applies `update` to product `id`. The product is looked up first, then
/// every supplied field is validated before any of them is written, so a
/// rejected update leaves the product untouched.
pub fn run(inventory: &mut Inventory, id: &str, update: &ProductUpdate) -> Result<CmdResult> {
    let id = id.trim();
    let record = inventory
        .get_mut(id)
        .ok_or_else(|| InvError::NotFound(id.to_string()))?;

    if let Some(price) = update.price {
        validate_price(price)?;
    }

    if let Some(name) = update.name_value() {
        record.name = name.to_string();
    }
    if let Some(quantity) = update.quantity {
        record.quantity = quantity;
    }
    if let Some(price) = update.price {
        record.price = price;
    }
    if let Some(category) = update.category_value() {
        record.category = category.to_string();
    }
    record.updated_at = Some(timestamp::now());
    debug!(id = %record.id, ?update, "product updated");

    let record = record.clone();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Product '{}' updated successfully!",
            record.name
        )))
        .with_affected_products(vec![record]))
}

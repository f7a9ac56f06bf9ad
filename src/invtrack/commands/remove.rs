use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InvError, Result};
use crate::inventory::Inventory;
use tracing::debug;

pub fn run(inventory: &mut Inventory, id: &str) -> Result<CmdResult> {
    let id = id.trim();
    let removed = inventory
        .remove(id)
        .ok_or_else(|| InvError::NotFound(id.to_string()))?;
    debug!(id = %removed.id, "product removed");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Product '{}' removed successfully!",
            removed.name
        )))
        .with_affected_products(vec![removed]))
}

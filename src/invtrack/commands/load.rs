use crate::commands::{CmdMessage, CmdResult};
use crate::inventory::Inventory;
use crate::store::InventoryBackend;
use tracing::debug;

/// Loads the inventory from `backend`. This never fails: a missing file
/// starts an empty inventory, and an unreadable or corrupt one does too but
/// with a warning in the result.
pub fn run<B: InventoryBackend>(backend: &B) -> (Inventory, CmdResult) {
    let mut result = CmdResult::default();
    let location = backend.location();

    let inventory = match backend.load() {
        Ok(Some(inventory)) => {
            result.add_message(CmdMessage::info(format!(
                "Inventory loaded from {} ({} products)",
                location,
                inventory.len()
            )));
            inventory
        }
        Ok(None) => {
            result.add_message(CmdMessage::info(
                "No existing inventory file found. Starting fresh.",
            ));
            Inventory::new()
        }
        Err(e) => {
            debug!(location = %location, error = %e, "falling back to empty inventory");
            result.add_message(CmdMessage::warning(format!(
                "Warning: {}. Starting with an empty inventory.",
                e
            )));
            Inventory::new()
        }
    };

    (inventory, result)
}

use crate::commands::CmdResult;
use crate::error::{InvError, Result};
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory, id: &str) -> Result<CmdResult> {
    let id = id.trim();
    let record = inventory
        .get(id)
        .ok_or_else(|| InvError::NotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_products(vec![record.clone()]))
}

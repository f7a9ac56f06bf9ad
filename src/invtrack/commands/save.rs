use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::InventoryBackend;
use tracing::info;

pub fn run<B: InventoryBackend>(backend: &mut B, inventory: &Inventory) -> Result<CmdResult> {
    backend.save(inventory)?;
    let location = backend.location();
    info!(location = %location, products = inventory.len(), "inventory saved");
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Inventory saved to {}",
        location
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvError;
    use crate::store::fs::FileBackend;
    use crate::store::memory::{fixtures::InventoryFixture, InMemoryBackend};
    use tempfile::TempDir;

    #[test]
    fn saves_to_backend() {
        let mut backend = InMemoryBackend::new();
        let inventory = InventoryFixture::new().with_product("P1", "Widget", 1, 1.0).build();

        let result = run(&mut backend, &inventory).unwrap();
        assert_eq!(backend.saved(), Some(&inventory));
        assert!(result.messages[0].content.contains("saved"));
    }

    #[test]
    fn reports_write_failures() {
        let dir = TempDir::new().unwrap();
        let mut backend = FileBackend::new(dir.path().join("nope").join("inventory.json"));
        assert!(matches!(
            run(&mut backend, &Inventory::new()),
            Err(InvError::Write { .. })
        ));
    }
}

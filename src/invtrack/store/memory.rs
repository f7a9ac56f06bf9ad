use super::InventoryBackend;
use crate::error::{InvError, Result};
use crate::inventory::Inventory;
use std::io;
use std::path::PathBuf;

/// In-memory storage for tests. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryBackend {
    saved: Option<Inventory>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `inventory`, as if saved by an earlier run.
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            saved: Some(inventory),
            ..Self::default()
        }
    }

    /// Makes every later `save` fail with a write error.
    pub fn with_failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn saved(&self) -> Option<&Inventory> {
        self.saved.as_ref()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl InventoryBackend for InMemoryBackend {
    fn load(&self) -> Result<Option<Inventory>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        if self.fail_saves {
            return Err(InvError::Write {
                path: PathBuf::from(self.location()),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "saves are disabled"),
            });
        }
        self.saved = Some(inventory.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}


// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::inventory::Inventory;
    use crate::model::{timestamp, ProductRecord, DEFAULT_CATEGORY};

    /// Builds inventories for tests without going through the add command.
    #[derive(Default)]
    pub struct InventoryFixture {
        pub inventory: Inventory,
    }

    impl InventoryFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_product(mut self, id: &str, name: &str, quantity: u64, price: f64) -> Self {
            self.inventory.insert(ProductRecord {
                id: id.to_string(),
                name: name.to_string(),
                quantity,
                price,
                category: DEFAULT_CATEGORY.to_string(),
                added_at: timestamp::now(),
                updated_at: None,
            });
            self
        }

        pub fn with_categorized(
            mut self,
            id: &str,
            name: &str,
            category: &str,
            quantity: u64,
            price: f64,
        ) -> Self {
            self = self.with_product(id, name, quantity, price);
            if let Some(record) = self.inventory.get_mut(id) {
                record.category = category.to_string();
            }
            self
        }

        pub fn build(self) -> Inventory {
            self.inventory
        }
    }
}

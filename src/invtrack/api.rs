//! # API Facade
//!
//! [`InventoryApi`] is the single entry point for UI code. It owns the
//! in-memory [`Inventory`] and the backend it was loaded from, and forwards
//! each operation to the matching command.
//!
//! The facade is generic over [`InventoryBackend`]:
//! - Production: `InventoryApi<FileBackend>`
//! - Testing: `InventoryApi<InMemoryBackend>`
//!
//! Nothing here prints or prompts. Changes stay in memory until [`save`] is
//! called.
//!
//! [`save`]: InventoryApi::save

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{NewProduct, ProductUpdate};
use crate::store::InventoryBackend;

pub struct InventoryApi<B: InventoryBackend> {
    backend: B,
    inventory: Inventory,
}

impl<B: InventoryBackend> InventoryApi<B> {
    /// Loads the inventory from `backend`. Loading never fails; the returned
    /// result carries an info or warning message describing what was found.
    pub fn open(backend: B) -> (Self, commands::CmdResult) {
        let (inventory, result) = commands::load::run(&backend);
        (Self { backend, inventory }, result)
    }

    pub fn add_product(&mut self, product: NewProduct) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, product)
    }

    pub fn update_product(
        &mut self,
        id: &str,
        update: &ProductUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.inventory, id, update)
    }

    pub fn remove_product(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.inventory, id)
    }

    pub fn view_product(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.inventory, id)
    }

    pub fn search_products(&self, term: &str) -> commands::CmdResult {
        commands::search::run(&self.inventory, term)
    }

    pub fn list_products(&self, sort_key: &str) -> commands::CmdResult {
        commands::list::run(&self.inventory, sort_key)
    }

    pub fn summary(&self) -> commands::Summary {
        commands::summary::run(&self.inventory)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.backend, &self.inventory)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inventory.contains(id.trim())
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, SortKey, Summary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvError;
    use crate::store::memory::InMemoryBackend;

    fn api() -> InventoryApi<InMemoryBackend> {
        InventoryApi::open(InMemoryBackend::new()).0
    }

    #[test]
    fn dispatches_crud() {
        let mut api = api();
        api.add_product(NewProduct::new("P1", "Widget", 2, 3.0)).unwrap();
        assert!(api.contains("P1"));

        api.update_product("P1", &ProductUpdate::new().with_quantity(5))
            .unwrap();
        assert_eq!(api.view_product("P1").unwrap().listed_products[0].quantity, 5);

        api.remove_product("P1").unwrap();
        assert!(!api.contains("P1"));
        assert!(matches!(api.view_product("P1"), Err(InvError::NotFound(_))));
    }

    #[test]
    fn changes_persist_only_on_save() {
        let mut api = api();
        api.add_product(NewProduct::new("P1", "Widget", 2, 3.0)).unwrap();
        assert!(api.backend().saved().is_none());

        api.save().unwrap();
        assert_eq!(api.backend().saved().unwrap().len(), 1);
        assert_eq!(api.backend().save_count(), 1);
    }

    #[test]
    fn summary_and_listing() {
        let mut api = api();
        api.add_product(NewProduct::new("A", "a", 2, 3.0)).unwrap();
        api.add_product(NewProduct::new("B", "b", 1, 10.0)).unwrap();

        let summary = api.summary();
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.total_value, 16.0);
        assert_eq!(summary.product_count, 2);

        assert_eq!(api.list_products("price").listed_products[0].id, "A");
        assert_eq!(api.search_products("b").listed_products.len(), 1);
    }

    #[test]
    fn reopening_restores_saved_state() {
        let mut api = api();
        api.add_product(NewProduct::new("P1", "Widget", 2, 3.0)).unwrap();
        api.save().unwrap();
        let saved = api.backend().saved().cloned().unwrap();

        let (reopened, _) = InventoryApi::open(InMemoryBackend::with_inventory(saved));
        assert_eq!(reopened.inventory(), api.inventory());
    }
}

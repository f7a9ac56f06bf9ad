//! # Storage Layer
//!
//! The inventory is always held in memory; a backend only knows how to load
//! the whole collection and write it back. The [`InventoryBackend`] trait keeps
//! the command layer independent from where that happens.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one pretty-printed JSON file
//!   written with write-to-temp-then-rename.
//! - [`memory::InMemoryBackend`]: no persistence, used by tests.

use crate::error::Result;
use crate::inventory::Inventory;

pub mod fs;
pub mod memory;

/// Whole-collection persistence for an [`Inventory`].
pub trait InventoryBackend {
    /// Load the persisted inventory. `Ok(None)` means nothing has been saved
    /// yet, which is not an error.
    fn load(&self) -> Result<Option<Inventory>>;

    /// Replace the persisted inventory with `inventory`.
    fn save(&mut self, inventory: &Inventory) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}

//! # Inventory
//!
//! The in-memory collection of products. Lookups go through an id → position
//! index, while iteration follows insertion order so that unsorted listings
//! and search results are stable.
//!
//! On disk the inventory is a JSON object keyed by product id:
//!
//! ```text
//! {
//!   "P1": { "name": "Widget", "quantity": 4, "price": 2.5, "category": "Tools",
//!           "added_date": "2024-03-01 09:15:00" },
//!   ...
//! }
//! ```
//!
//! `Serialize`/`Deserialize` are implemented by hand so that the object key
//! becomes the record's `id` and the key order of the file is kept.

use crate::model::ProductRecord;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    records: Vec<ProductRecord>,
    positions: HashMap<String, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        self.positions.get(id).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ProductRecord> {
        match self.positions.get(id) {
            Some(&pos) => Some(&mut self.records[pos]),
            None => None,
        }
    }

    /// Inserts a record under its own id. An existing record with the same id
    /// is replaced in place and returned.
    pub fn insert(&mut self, record: ProductRecord) -> Option<ProductRecord> {
        match self.positions.get(&record.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.positions.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Removes a record, keeping the relative order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<ProductRecord> {
        let pos = self.positions.remove(id)?;
        let removed = self.records.remove(pos);
        for later in &self.records[pos..] {
            if let Some(p) = self.positions.get_mut(&later.id) {
                *p -= 1;
            }
        }
        Some(removed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ProductRecord> for Inventory {
    fn from_iter<T: IntoIterator<Item = ProductRecord>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for record in iter {
            inventory.insert(record);
        }
        inventory
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.id, record)?;
        }
        map.end()
    }
}

struct InventoryVisitor;

impl<'de> Visitor<'de> for InventoryVisitor {
    type Value = Inventory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping product ids to products")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Inventory, A::Error> {
        let mut inventory = Inventory::new();
        while let Some((id, mut record)) = access.next_entry::<String, ProductRecord>()? {
            record.id = id;
            record.check().map_err(serde::de::Error::custom)?;
            inventory.insert(record);
        }
        Ok(inventory)
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(InventoryVisitor)
    }
}

//! # Command Layer
//!
//! Each operation lives in its own submodule as a plain function over an
//! [`Inventory`](crate::inventory::Inventory) (or a storage backend for
//! `load`/`save`). Commands validate input, mutate or query the inventory and
//! return a [`CmdResult`] describing what happened.
//!
//! Commands never print, prompt or exit. Confirmation before removal, input
//! re-prompting and rendering are left to the caller.
//!
//! ## Command Modules
//!
//! - [`add`]: Create a product
//! - [`update`]: Apply a partial update
//! - [`remove`]: Delete a product
//! - [`view`]: Fetch one product
//! - [`search`]: Case-insensitive substring search
//! - [`list`]: Sorted listing
//! - [`summary`]: Totals over the whole inventory
//! - [`load`]: Read the inventory from a backend, falling back to empty
//! - [`save`]: Write the inventory to a backend

use crate::model::ProductRecord;
use serde::Serialize;

pub mod add;
pub mod list;
pub mod load;
pub mod remove;
pub mod save;
pub mod search;
pub mod summary;
pub mod update;
pub mod view;

pub use list::SortKey;
pub use summary::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products created, changed or removed by the command, in their
    /// post-operation state.
    pub affected_products: Vec<ProductRecord>,
    /// Products to display, in display order.
    pub listed_products: Vec<ProductRecord>,
    pub summary: Option<Summary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<ProductRecord>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<ProductRecord>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}

//! # Invtrack Architecture
//!
//! Invtrack is a small inventory library with a command-line client. The
//! library knows nothing about terminals; the binary is the only place that
//! reads stdin, prints, or decides exit codes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, interactive menu, prompts, rendering        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory Inventory and its backend             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, CRUD, search, sort, summary                  │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - InventoryBackend trait                                   │
//! │  - FileBackend (production), InMemoryBackend (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole inventory is held in memory. It is read once when the API is
//! opened and written back as a single JSON document on save.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`inventory`]: The ordered, id-indexed product collection
//! - [`model`]: `ProductRecord`, inputs, and input parsing
//! - [`config`]: Configuration file and data file resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;

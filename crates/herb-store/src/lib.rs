//! # herb-store
//!
//! Persistence for Herbaria: a key-value substrate with pluggable backends,
//! and the three stores layered on top of it — the account registry, the
//! signed-in session slot, and the identification history.
//!
//! The substrate models browser local storage: string keys, serialized
//! values, no transactions. All state lives under three independent keys
//! ([`ACCOUNTS_KEY`], [`SESSION_KEY`], [`HISTORY_KEY`]); concurrent writers
//! are last-write-wins. A substrate without persistence capability degrades
//! to no-op writes and empty reads rather than failing, so callers stay
//! usable in degraded form.

pub mod accounts;
pub mod error;
pub mod history;
pub mod session;
pub mod substrate;

pub use accounts::AccountStore;
pub use error::StoreError;
pub use history::HistoryStore;
pub use session::SessionContext;
pub use substrate::{FileStore, MemoryStore, Substrate};

/// Substrate key holding the serialized account list.
pub const ACCOUNTS_KEY: &str = "herbaria_accounts";
/// Substrate key holding the serialized signed-in account, if any.
pub const SESSION_KEY: &str = "herbaria_session";
/// Substrate key holding the serialized identification records (all owners).
pub const HISTORY_KEY: &str = "herbaria_history";

//! In-memory caching for sheet data.
//!
//! This module provides the `SheetCache` for fetching each sheet once and
//! serving list and lookup requests from memory afterwards, and the
//! `IndexSlot` for a single caller-owned value.
//!
//! Nothing here expires. Entries live as long as the cache object.

pub mod manager;
pub mod slot;

pub use manager::SheetCache;
pub use slot::IndexSlot;

// src/cookbook/mod.rs

//! Cookbook entries and the registry that owns them
//!
//! - **Ingredient**: an atomic entry with a fixed cook time
//! - **Recipe**: a list of `(name, quantity)` references to other entries
//! - **Registry**: the name-keyed store, validated at write time
//!
//! References between entries are plain names. A recipe may name an entry
//! that does not exist yet; that only becomes an error when the recipe is
//! summarized.

mod entry;
mod registry;

pub use entry::{
    Entry, EntryKind, EntryRequest, Ingredient, Recipe, RequiredItem, check_required_items,
};
pub use registry::Registry;

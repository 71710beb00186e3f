// src/lib.rs

//! Cookbook Registry
//!
//! An in-memory registry of ingredients and recipes that answers one
//! question: what does it take to cook this recipe?
//!
//! # Architecture
//!
//! - Entries: ingredients carry a cook time, recipes reference other entries
//!   by name with a quantity
//! - Registry: create-only, validated at write time, behind one lock
//! - Resolver: depth-first expansion that multiplies quantities down each
//!   path and sums base ingredients and cook time
//! - Server: a small axum HTTP API over the registry (feature `server`)

pub mod cookbook;
mod error;
pub mod label;
pub mod resolver;

#[cfg(feature = "server")]
pub mod server;

pub use cookbook::{Entry, EntryKind, EntryRequest, Ingredient, Recipe, Registry, RequiredItem};
pub use error::{EntryError, Error, NameError, RequiredItemsError, ResolveError, Result};
pub use label::normalize;
pub use resolver::{
    IngredientTotal, Resolution, Resolver, Summary, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING,
};

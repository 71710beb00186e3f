// src/cookbook/registry.rs

//! The in-memory entry registry
//!
//! The registry owns every [`Entry`]. Entries are create-only: there is no
//! update or delete. All access goes through one reader/writer lock, so a
//! write is never interleaved with a running summary.

use super::entry::{Entry, EntryKind, EntryRequest, Ingredient, Recipe, RequiredItem, check_required_items};
use crate::error::{EntryError, ResolveError};
use crate::resolver::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, Resolution, Resolver, Summary};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};

/// Mapping of entry name to entry
pub struct Registry {
    entries: RwLock<HashMap<String, Entry>>,
    /// Maximum recipe nesting allowed during resolution
    max_depth: usize,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry with the default resolution depth limit
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create an empty registry with a custom resolution depth limit, capped at
    /// [`MAX_DEPTH_CEILING`]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_depth: max_depth.min(MAX_DEPTH_CEILING),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Validate a raw create-entry request and insert it
    ///
    /// Checks run in a fixed order and the first failure wins: type, name,
    /// then the kind-specific field. Nothing is inserted on failure.
    pub fn create_entry(&self, request: EntryRequest) -> Result<EntryKind, EntryError> {
        let kind = request.entry_kind()?;

        let mut entries = self.entries.write();

        let name = match request.entry_name() {
            Some(name) if !entries.contains_key(name) => name.to_string(),
            _ => return Err(EntryError::DuplicateOrMissingName),
        };

        let entry = match kind {
            EntryKind::Ingredient => Entry::Ingredient(Ingredient {
                name,
                cook_time: request.cook_time()?,
            }),
            EntryKind::Recipe => Entry::Recipe(Recipe {
                name,
                required_items: request.required_items()?,
            }),
        };

        info!("Registered {} '{}'", kind, entry.name());
        entries.insert(entry.name().to_string(), entry);
        Ok(kind)
    }

    /// Insert an already-typed entry, applying the same rules as [`create_entry`]
    ///
    /// [`create_entry`]: Registry::create_entry
    pub fn insert(&self, entry: Entry) -> Result<(), EntryError> {
        let mut entries = self.entries.write();

        if entry.name().is_empty() || entries.contains_key(entry.name()) {
            return Err(EntryError::DuplicateOrMissingName);
        }
        if let Entry::Recipe(recipe) = &entry {
            check_required_items(&recipe.required_items)?;
        }

        debug!("Inserted {} '{}'", entry.kind(), entry.name());
        entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    /// Register an ingredient
    pub fn add_ingredient(&self, name: impl Into<String>, cook_time: u64) -> Result<(), EntryError> {
        self.insert(Entry::Ingredient(Ingredient {
            name: name.into(),
            cook_time,
        }))
    }

    /// Register a recipe from `(name, quantity)` pairs
    pub fn add_recipe<I, S>(&self, name: impl Into<String>, items: I) -> Result<(), EntryError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let required_items = items
            .into_iter()
            .map(|(item, quantity)| RequiredItem::new(item, quantity))
            .collect();
        self.insert(Entry::Recipe(Recipe {
            name: name.into(),
            required_items,
        }))
    }

    /// Look up an entry by exact name
    pub fn lookup(&self, name: &str) -> Result<Entry, ResolveError> {
        self.entries
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Expand `name` with the given multiplier against a consistent snapshot
    pub fn resolve(&self, name: &str, multiplier: u64) -> Result<Resolution, ResolveError> {
        let entries = self.entries.read();
        Resolver::new(&entries)
            .with_max_depth(self.max_depth)
            .resolve(name, multiplier)
    }

    /// Summarize a recipe against a consistent snapshot
    pub fn summarize(&self, name: &str) -> Result<Summary, ResolveError> {
        let entries = self.entries.read();
        Resolver::new(&entries)
            .with_max_depth(self.max_depth)
            .summarize(name)
    }
}

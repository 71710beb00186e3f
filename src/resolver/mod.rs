// src/resolver/mod.rs

//! Recipe expansion
//!
//! Walks a recipe's required items depth-first, multiplying quantities along
//! each path, and flattens the result into base-ingredient totals and a total
//! cook time. Independent paths to the same ingredient are summed.
//!
//! The walk keeps the chain of recipes currently being expanded. Reaching a
//! recipe that is already on that chain is reported as a cycle, and chains
//! longer than the configured depth are refused, so a malformed graph fails
//! with an error instead of exhausting the stack.
//!
//! Each recipe is expanded once per walk. Its per-unit totals are kept and
//! scaled on every later reference, so shared sub-recipes cost one expansion
//! no matter how many paths reach them.

mod plan;

pub use plan::{IngredientTotal, Resolution, Summary};

use crate::cookbook::Entry;
use crate::error::ResolveError;
use std::collections::HashMap;
use tracing::debug;

/// Default maximum recipe nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest depth limit that may be configured
///
/// Expansion recurses once per nested recipe, so the limit also bounds stack use.
pub const MAX_DEPTH_CEILING: usize = 512;

/// Stateless expander over a snapshot of the registry
pub struct Resolver<'a> {
    entries: &'a HashMap<String, Entry>,
    max_depth: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(entries: &'a HashMap<String, Entry>) -> Self {
        Self {
            entries,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the depth limit, capped at [`MAX_DEPTH_CEILING`]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    /// Expand `name` scaled by `multiplier`
    ///
    /// An unknown name anywhere in the walk fails the whole resolution with
    /// [`ResolveError::MissingReference`].
    pub fn resolve(&self, name: &str, multiplier: u64) -> Result<Resolution, ResolveError> {
        let mut walk = Walk::default();
        let (unit, _) = self.expand(name, &mut walk)?;
        unit.scaled(multiplier, name)
    }

    /// Build the summary for a recipe
    ///
    /// Only recipes can be summarized; an ingredient is rejected with
    /// [`ResolveError::NotARecipe`].
    pub fn summarize(&self, name: &str) -> Result<Summary, ResolveError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))?;
        if entry.as_recipe().is_none() {
            return Err(ResolveError::NotARecipe(name.to_string()));
        }

        let resolution = self.resolve(name, 1)?;
        Ok(Summary::from_resolution(name, resolution))
    }

    /// Per-unit totals of `name` and the number of recipe levels beneath it
    fn expand(&self, name: &str, walk: &mut Walk) -> Result<(Resolution, usize), ResolveError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| ResolveError::MissingReference {
                name: name.to_string(),
            })?;

        let recipe = match entry {
            Entry::Ingredient(ingredient) => {
                return Ok((Resolution::ingredient(name, ingredient.cook_time, 1)?, 0));
            }
            Entry::Recipe(recipe) => recipe,
        };

        // A finished recipe has no cycle below it, only its height matters here
        if let Some(done) = walk.expanded.get(name) {
            if walk.chain.len() + done.height > self.max_depth {
                return Err(ResolveError::MaxDepthExceeded {
                    limit: self.max_depth,
                });
            }
            return Ok((done.unit.clone(), done.height));
        }

        if let Some(start) = walk.chain.iter().position(|n| n == name) {
            let mut path = walk.chain[start..].to_vec();
            path.push(name.to_string());
            return Err(ResolveError::CyclicReference { path });
        }
        if walk.chain.len() >= self.max_depth {
            return Err(ResolveError::MaxDepthExceeded {
                limit: self.max_depth,
            });
        }

        debug!("Expanding '{}' at depth {}", name, walk.chain.len());
        walk.chain.push(name.to_string());

        let mut unit = Resolution::default();
        let mut below = 0;
        for item in &recipe.required_items {
            let (child, child_height) = self.expand(&item.name, walk)?;
            unit.absorb(child.scaled(item.quantity, &item.name)?, name)?;
            below = below.max(child_height);
        }

        walk.chain.pop();
        let height = below + 1;
        walk.expanded.insert(
            name.to_string(),
            Expanded {
                unit: unit.clone(),
                height,
            },
        );
        Ok((unit, height))
    }
}

/// State of a single resolution
#[derive(Default)]
struct Walk {
    /// Recipes currently being expanded, outermost first
    chain: Vec<String>,
    /// Recipes already fully expanded in this walk
    expanded: HashMap<String, Expanded>,
}

struct Expanded {
    unit: Resolution,
    height: usize,
}

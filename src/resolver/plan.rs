// src/resolver/plan.rs

//! Resolution result types
//!
//! Contains the flattened output of expanding a recipe.

use crate::error::ResolveError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flattened totals for one expanded entry
///
/// Ingredient keys keep the order in which they were first reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub ingredients: IndexMap<String, u64>,
    pub cook_time: u64,
}

impl Resolution {
    /// The resolution of a single ingredient scaled by `multiplier`
    pub(crate) fn ingredient(name: &str, cook_time: u64, multiplier: u64) -> Result<Self, ResolveError> {
        let cook_time = cook_time.checked_mul(multiplier).ok_or_else(|| overflow(name))?;
        let mut ingredients = IndexMap::with_capacity(1);
        ingredients.insert(name.to_string(), multiplier);
        Ok(Self {
            ingredients,
            cook_time,
        })
    }

    /// Fold a child's totals into this one, summing per ingredient
    pub(crate) fn absorb(&mut self, child: Resolution, parent: &str) -> Result<(), ResolveError> {
        for (name, quantity) in child.ingredients {
            let total = self.ingredients.entry(name).or_insert(0);
            *total = total.checked_add(quantity).ok_or_else(|| overflow(parent))?;
        }
        self.cook_time = self
            .cook_time
            .checked_add(child.cook_time)
            .ok_or_else(|| overflow(parent))?;
        Ok(())
    }

    /// These totals multiplied by `factor`, keeping ingredient order
    ///
    /// Overflow is reported against `name`, the entry being scaled.
    pub(crate) fn scaled(&self, factor: u64, name: &str) -> Result<Self, ResolveError> {
        let mut ingredients = IndexMap::with_capacity(self.ingredients.len());
        for (ingredient, quantity) in &self.ingredients {
            let quantity = quantity.checked_mul(factor).ok_or_else(|| overflow(name))?;
            ingredients.insert(ingredient.clone(), quantity);
        }
        let cook_time = self.cook_time.checked_mul(factor).ok_or_else(|| overflow(name))?;
        Ok(Self {
            ingredients,
            cook_time,
        })
    }

    /// Quantity of one base ingredient, 0 if it was never reached
    pub fn quantity_of(&self, name: &str) -> u64 {
        self.ingredients.get(name).copied().unwrap_or(0)
    }
}

fn overflow(name: &str) -> ResolveError {
    ResolveError::QuantityOverflow {
        name: name.to_string(),
    }
}

/// One line of a recipe summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientTotal {
    pub name: String,
    pub quantity: u64,
}

/// Response body of `GET /summary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientTotal>,
}

impl Summary {
    pub(crate) fn from_resolution(name: &str, resolution: Resolution) -> Self {
        Self {
            name: name.to_string(),
            cook_time: resolution.cook_time,
            ingredients: resolution
                .ingredients
                .into_iter()
                .map(|(name, quantity)| IngredientTotal { name, quantity })
                .collect(),
        }
    }
}

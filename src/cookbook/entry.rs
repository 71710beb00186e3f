// src/cookbook/entry.rs

//! Cookbook entry definitions
//!
//! An entry is either an atomic [`Ingredient`] or a [`Recipe`] built from
//! other entries. Entries serialize to the same JSON shape that
//! `POST /entry` accepts:
//!
//! ```json
//! { "type": "ingredient", "name": "Egg", "cookTime": 6 }
//! { "type": "recipe", "name": "Omelette", "requiredItems": [{ "name": "Egg", "quantity": 3 }] }
//! ```

use crate::error::{EntryError, RequiredItemsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// The two kinds of cookbook entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Recipe,
    Ingredient,
}

impl EntryKind {
    /// Parse the wire name; only the exact lowercase strings are accepted
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "recipe" => Some(Self::Recipe),
            "ingredient" => Some(Self::Ingredient),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Ingredient => "ingredient",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An atomic entry with a fixed cook time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: u64,
}

/// A reference from a recipe to another entry, by name
///
/// The referenced entry does not have to exist when the recipe is
/// registered; a dangling name only fails at summary time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A composite entry made of required items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A registered entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Ingredient(_) => EntryKind::Ingredient,
            Entry::Recipe(_) => EntryKind::Recipe,
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Entry::Recipe(recipe) => Some(recipe),
            Entry::Ingredient(_) => None,
        }
    }
}

impl From<Ingredient> for Entry {
    fn from(ingredient: Ingredient) -> Self {
        Entry::Ingredient(ingredient)
    }
}

impl From<Recipe> for Entry {
    fn from(recipe: Recipe) -> Self {
        Entry::Recipe(recipe)
    }
}

/// Raw body of a create-entry request
///
/// Every field stays untyped JSON so that the registry, not the JSON
/// decoder, decides which validation rule failed first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub cook_time: Option<Value>,
    #[serde(default)]
    pub required_items: Option<Value>,
}

impl EntryRequest {
    /// Validate the `type` field
    pub fn entry_kind(&self) -> Result<EntryKind, EntryError> {
        self.kind
            .as_ref()
            .and_then(Value::as_str)
            .and_then(EntryKind::parse)
            .ok_or(EntryError::InvalidType)
    }

    /// The `name` field, if it is a non-empty string
    pub fn entry_name(&self) -> Option<&str> {
        self.name
            .as_ref()
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Validate the `cookTime` field
    pub fn cook_time(&self) -> Result<u64, EntryError> {
        self.cook_time
            .as_ref()
            .and_then(Value::as_u64)
            .ok_or(EntryError::InvalidCookTime)
    }

    /// Validate the `requiredItems` field
    ///
    /// Items are checked in order; for each one the name is checked before
    /// the quantity.
    pub fn required_items(&self) -> Result<Vec<RequiredItem>, RequiredItemsError> {
        let raw = match &self.required_items {
            Some(Value::Array(raw)) => raw,
            _ => return Err(RequiredItemsError::NotAList),
        };

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(raw.len());

        for value in raw {
            let object = value.as_object().ok_or(RequiredItemsError::NotAnObject)?;

            let name = match object.get("name").and_then(Value::as_str) {
                Some(name) if !name.is_empty() => name,
                _ => return Err(RequiredItemsError::EmptyName),
            };
            if !seen.insert(name) {
                return Err(RequiredItemsError::DuplicateName(name.to_string()));
            }

            let quantity = object
                .get("quantity")
                .and_then(Value::as_u64)
                .ok_or_else(|| RequiredItemsError::InvalidQuantity(name.to_string()))?;

            items.push(RequiredItem::new(name, quantity));
        }

        Ok(items)
    }
}

/// Check the structural rules for an already-typed item list
pub fn check_required_items(items: &[RequiredItem]) -> Result<(), RequiredItemsError> {
    let mut seen = HashSet::new();
    for item in items {
        if item.name.is_empty() {
            return Err(RequiredItemsError::EmptyName);
        }
        if !seen.insert(item.name.as_str()) {
            return Err(RequiredItemsError::DuplicateName(item.name.clone()));
        }
    }
    Ok(())
}

// src/error.rs

//! Error types for the cookbook registry
//!
//! Each concern has its own enum:
//! - [`EntryError`]: write-time validation failures from `POST /entry`
//! - [`ResolveError`]: read-time failures while looking up or summarizing
//! - [`NameError`]: display-name normalization failures
//!
//! [`Error`] wraps all of them for callers that do not care which stage failed.

use thiserror::Error;

/// Rejection reasons for a new registry entry
///
/// The registry is never modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Type must be 'recipe' or 'ingredient'")]
    InvalidType,

    #[error("Entry name must be unique")]
    DuplicateOrMissingName,

    #[error("cookTime must be a non-negative integer")]
    InvalidCookTime,

    #[error("{0}")]
    InvalidRequiredItems(#[from] RequiredItemsError),
}

/// Why a recipe's `requiredItems` list was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequiredItemsError {
    #[error("requiredItems must be a list")]
    NotAList,

    #[error("Each required item must be an object")]
    NotAnObject,

    #[error("Required item name must not be empty")]
    EmptyName,

    #[error("Duplicate required item '{0}'")]
    DuplicateName(String),

    #[error("Quantity for '{0}' must be a non-negative integer")]
    InvalidQuantity(String),
}

/// Failures while reading from the registry or expanding a recipe
///
/// Resolution never returns partial results: the first failure aborts the walk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Recipe not found")]
    NotFound(String),

    #[error("Not a recipe")]
    NotARecipe(String),

    #[error("Recipe contains missing items: '{name}' is not registered")]
    MissingReference { name: String },

    #[error("Recipe contains a cyclic reference: {}", path.join(" -> "))]
    CyclicReference { path: Vec<String> },

    #[error("Recipe nesting exceeds the maximum depth of {limit}")]
    MaxDepthExceeded { limit: usize },

    #[error("Quantity overflow while expanding '{name}'")]
    QuantityOverflow { name: String },
}

/// Display-name normalization failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Nothing was left after stripping separators, digits and punctuation
    #[error("Invalid recipe name")]
    Empty,
}

/// Crate-level error
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Name(#[from] NameError),
}

/// Result alias using the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

// src/label.rs

//! Display-name normalization for handwritten recipe names
//!
//! Turns free text such as `"riZZo-_pasta 2!!"` into a canonical label
//! (`"Rizzo Pasta"`):
//!
//! 1. Runs of `-` and `_` become a single space
//! 2. Anything that is not an ASCII letter or whitespace is dropped
//! 3. Whitespace runs collapse to one space and the ends are trimmed
//! 4. Each word is title-cased
//!
//! An input with nothing left after step 3 is rejected. Names given to
//! `POST /entry` are stored verbatim and never pass through here.

use crate::error::NameError;
use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]+").unwrap());
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z\s]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a raw display name
pub fn normalize(raw: &str) -> Result<String, NameError> {
    if raw.is_empty() {
        return Err(NameError::Empty);
    }

    let name = SEPARATORS.replace_all(raw, " ");
    let name = DISALLOWED.replace_all(&name, "");
    let name = WHITESPACE.replace_all(&name, " ");
    let name = name.trim();

    if name.is_empty() {
        return Err(NameError::Empty);
    }

    Ok(title_case(name))
}

/// Capitalize the first letter of each space-separated word, lowercase the rest
fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

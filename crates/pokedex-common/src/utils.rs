//! Utility functions used across the Pokédex bot

use crate::{DexError, Result};

/// Normalize a user-supplied name into the PokeAPI slug form.
///
/// PokeAPI identifiers are lowercase with `-` separators, so
/// "Mr. Mime" and "mr mime" both resolve to "mr-mime".
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace('.', "")
        .replace('\'', "")
}

/// Turn an API slug into a display name ("mr-mime" -> "Mr Mime").
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first character of a word
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Validate that a string is not empty after trimming
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DexError::validation_field(
            format!("{} cannot be empty", field_name),
            field_name,
        ))
    } else {
        Ok(trimmed.to_string())
    }
}

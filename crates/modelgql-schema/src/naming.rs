//! Naming conventions for generated types and root fields.

/// Capitalizes the first character of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// GraphQL type name for an entity registered under `entity_name`.
pub fn type_name(entity_name: &str) -> String {
    capitalize_first(entity_name)
}

/// Name of the create input type for `type_name`.
pub fn create_input_name(type_name: &str) -> String {
    format!("_createInput{type_name}")
}

/// Name of the update input type for `type_name`.
pub fn update_input_name(type_name: &str) -> String {
    format!("_updateInput{type_name}")
}

/// Name of the count field paired with a list field.
pub fn count_field_name(list_field: &str) -> String {
    format!("{list_field}Count")
}

/// Default plural form for an entity that declares none.
///
/// Covers the regular English endings only; irregular nouns should declare
/// their naming forms explicitly.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_ascii_lowercase();
    if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        return format!("{}ies", &word[..word.len() - 1]);
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| lower.ends_with(suffix)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut rev = lower.chars().rev();
    rev.next();
    matches!(rev.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

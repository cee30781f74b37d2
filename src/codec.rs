//! Permission list encoding and decoding.
//!
//! Permission lists travel inside a single claim value as a `,`-joined
//! string. Identifiers must not contain the separator character; no escaping
//! is performed.

use std::fmt::Display;

/// Separator used when joining permission identifiers into a claim value.
pub const PERMISSION_SEPARATOR: char = ',';

/// Join permission identifiers into a single claim value.
///
/// Accepts anything with a canonical textual form, so enum permission types
/// implementing `Display` work the same as plain strings. An empty list
/// yields an empty string.
pub fn encode_permissions<I, P>(permissions: I) -> String
where
    I: IntoIterator<Item = P>,
    P: Display,
{
    permissions
        .into_iter()
        .map(|permission| permission.to_string())
        .collect::<Vec<_>>()
        .join(&PERMISSION_SEPARATOR.to_string())
}

/// Split a claim value back into permission identifiers.
///
/// This is a literal split: decoding an empty string yields `vec![""]`,
/// matching the claim value format issued by existing token producers.
/// Callers needing "no permissions" semantics handle the absent claim case
/// before decoding.
pub fn decode_permissions(value: &str) -> Vec<String> {
    value
        .split(PERMISSION_SEPARATOR)
        .map(str::to_string)
        .collect()
}

//! Canonical key derivation: case folding, structural-name transformation,
//! and path joining.
//!
//! Every key that enters a [`ValueMap`](crate::ValueMap) goes through
//! [`normalize_key`]. Keys derived from a record's shape additionally pass
//! each path segment through [`transform_struct_key`], which turns mixed-case
//! identifiers into uppercase-with-underscores, treating runs of consecutive
//! capitals as acronyms.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Separator between nested path segments in a canonical key.
pub(crate) const SEPARATOR: &str = "__";

static ACRONYM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][A-Z]+").expect("acronym pattern"));

static CAPITAL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+").expect("capital word pattern"));

/// Normalize a user-facing key spelling into its canonical form: trimmed of
/// surrounding whitespace and uppercased. Idempotent.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}

/// Transform a mixed-case structural name into an underscore-separated
/// segment: `MyURLField` becomes `MY_URL_FIELD`, `2Foo` becomes `2_FOO`.
///
/// A run of two-or-more consecutive capitals is kept together as an acronym;
/// a trailing capital that starts a new word splits off (`MyURLForOAuth2`
/// becomes `MY_URL_FOR_O_AUTH2`). Names without capitals pass through
/// unchanged; the final uppercasing happens when the segments are joined.
pub fn transform_struct_key(name: &str) -> String {
    let value = ACRONYM_RUN.replace_all(name, "_${0}");
    let value = CAPITAL_WORD.replace_all(&value, |caps: &Captures<'_>| {
        format!("_{}", caps[0].to_uppercase())
    });
    value.trim_matches('_').to_string()
}

/// Join already-rendered path segments with the separator and normalize the
/// result.
pub(crate) fn join_key(segments: &[String]) -> String {
    normalize_key(&segments.join(SEPARATOR))
}

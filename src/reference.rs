//! `${NAME}` / `${NAME:-default}` occurrence parsing and substitution.
//!
//! A reference is `${` followed by one-or-more non-`}` characters and a
//! closing `}`. The payload splits on the first `:-` into the referenced
//! name and an optional literal fallback. Parsing and substitution are pure
//! text operations; deciding what a name resolves to is the
//! [`resolve`](crate::resolve) module's job.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("reference pattern"));

/// The references found in one value string.
pub(crate) struct References {
    /// Referenced names, one entry per occurrence, in order of appearance.
    pub names: Vec<String>,
    /// Inline defaults, at most one per distinct name. When the same name
    /// appears with different defaults, the last occurrence wins.
    pub defaults: BTreeMap<String, String>,
}

impl References {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn split_payload(payload: &str) -> (&str, Option<&str>) {
    match payload.split_once(":-") {
        Some((name, default)) => (name, Some(default)),
        None => (payload, None),
    }
}

pub(crate) fn parse_references(value: &str) -> References {
    let mut names = Vec::new();
    let mut defaults = BTreeMap::new();

    for caps in REFERENCE.captures_iter(value) {
        let (name, default) = split_payload(&caps[1]);
        names.push(name.to_string());
        if let Some(default) = default {
            defaults.insert(name.to_string(), default.to_string());
        }
    }

    References { names, defaults }
}

/// Replace every reference whose name is bound in `bindings` with the bound
/// value, verbatim. Unbound occurrences are left untouched, default clause
/// included. Inline defaults play no part here.
pub(crate) fn substitute(value: &str, bindings: &BTreeMap<String, String>) -> String {
    REFERENCE
        .replace_all(value, |caps: &Captures<'_>| {
            let (name, _) = split_payload(&caps[1]);
            match bindings.get(name) {
                Some(bound) => bound.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

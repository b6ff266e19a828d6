//! Reference expansion over a value map.
//!
//! Each key is resolved recursively: its references are resolved first, then
//! substituted in one shot, and the fully expanded value is stored back.
//! Already-expanded keys are memoised, and an explicit visiting path detects
//! cycles. The driver walks keys in ascending lexicographic order, so when
//! several independent failures exist the reported one is deterministic;
//! final values never depend on the order (expansion is confluent).
//!
//! A name that is absent from the map falls back to its inline
//! `${NAME:-default}` literal for that substitution only; the default is
//! never written into the map, and it does not rescue a cycle.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ConfbindError;
use crate::key::normalize_key;
use crate::map::ValueMap;
use crate::reference::{parse_references, substitute};

/// Expand every reference in `map` in place. On failure the map is left
/// partially expanded and must be discarded by the caller.
pub(crate) fn resolve(map: &mut ValueMap) -> Result<(), ConfbindError> {
    let keys: Vec<String> = map.keys().map(str::to_string).collect();
    tracing::debug!(keys = keys.len(), "expanding value references");

    let mut resolved = BTreeSet::new();
    let mut visiting = Vec::new();
    for key in &keys {
        resolve_key(map, key, &mut visiting, &mut resolved)?;
    }
    Ok(())
}

fn resolve_key(
    map: &mut ValueMap,
    key: &str,
    visiting: &mut Vec<String>,
    resolved: &mut BTreeSet<String>,
) -> Result<(), ConfbindError> {
    if resolved.contains(key) {
        return Ok(());
    }

    if let Some(position) = visiting.iter().position(|seen| seen == key) {
        let mut cycle = visiting[position..].to_vec();
        cycle.push(key.to_string());
        return Err(ConfbindError::CyclicReference(cycle));
    }

    // The driver only passes keys present in the map.
    let value = map.get(key).unwrap_or_default().to_string();
    let references = parse_references(&value);
    if references.is_empty() {
        resolved.insert(key.to_string());
        return Ok(());
    }

    visiting.push(key.to_string());
    let mut bindings: BTreeMap<String, String> = BTreeMap::new();
    for name in &references.names {
        if bindings.contains_key(name) {
            continue;
        }

        let target = normalize_key(name);
        if map.contains_key(&target) {
            resolve_key(map, &target, visiting, resolved)?;
            let bound = map.get(&target).unwrap_or_default().to_string();
            bindings.insert(name.clone(), bound);
        } else if let Some(default) = references.defaults.get(name) {
            bindings.insert(name.clone(), default.clone());
        } else {
            return Err(ConfbindError::MissingReference {
                name: target,
                referenced_by: key.to_string(),
            });
        }
    }
    visiting.pop();

    map.set(key, substitute(&value, &bindings));
    resolved.insert(key.to_string());
    Ok(())
}

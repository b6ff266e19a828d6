//! Flattening a `Serialize` source into a configuration layer.
//!
//! The source is serialized through `serde_json` and its object tree walked
//! into flat keys: each object key becomes a path segment (structurally
//! transformed, so `poolSize` and `pool_size` both land on `POOL_SIZE`) and
//! nesting joins segments with `__`. Scalars are rendered to their string
//! form. `null` entries are skipped, so `Option::None` fields stay sparse
//! and fall through to lower layers.

use serde::Serialize;
use serde_json::Value;

use crate::error::ConfbindError;
use crate::key::{normalize_key, transform_struct_key, SEPARATOR};
use crate::map::ValueMap;

pub(crate) fn flatten<S: Serialize>(source: &S) -> Result<ValueMap, ConfbindError> {
    let value =
        serde_json::to_value(source).map_err(|e| ConfbindError::Flatten(e.to_string()))?;

    let Value::Object(entries) = value else {
        return Err(ConfbindError::Flatten(
            "source must serialize to a map or struct".to_string(),
        ));
    };

    let mut map = ValueMap::new();
    for (key, value) in &entries {
        walk(value, transform_struct_key(key), &mut map)?;
    }
    Ok(map)
}

fn walk(value: &Value, prefix: String, out: &mut ValueMap) -> Result<(), ConfbindError> {
    match value {
        Value::Null => Ok(()),
        Value::Bool(b) => {
            out.set(&prefix, b.to_string());
            Ok(())
        }
        Value::Number(n) => {
            out.set(&prefix, n.to_string());
            Ok(())
        }
        Value::String(s) => {
            out.set(&prefix, s.clone());
            Ok(())
        }
        Value::Object(entries) => {
            for (key, value) in entries {
                let child = format!("{prefix}{SEPARATOR}{}", transform_struct_key(key));
                walk(value, child, out)?;
            }
            Ok(())
        }
        Value::Array(_) => Err(ConfbindError::Flatten(format!(
            "unsupported array value at key {}",
            normalize_key(&prefix)
        ))),
    }
}

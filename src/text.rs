//! Flat `key = value` text parsing.
//!
//! Line-oriented: blank lines and lines whose first non-whitespace character
//! is `#` are skipped; the rest split on the first `=` with both sides
//! trimmed. A line with no `=` is a key with an empty value.

use crate::error::ConfbindError;
use crate::map::ValueMap;

pub(crate) fn parse(data: &str) -> Result<ValueMap, ConfbindError> {
    let mut map = ValueMap::new();

    for (index, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (line, ""),
        };
        if key.is_empty() {
            return Err(ConfbindError::EmptyKey(index + 1));
        }
        map.set(key, value);
    }

    Ok(map)
}

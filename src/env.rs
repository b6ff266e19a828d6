use crate::map::ValueMap;

/// Build a layer from environment-style pairs: keep entries whose name
/// starts with `prefix`, strip the prefix, and normalize what remains.
///
/// Takes an iterator so tests can pass synthetic data instead of
/// `std::env::vars()`.
pub(crate) fn subset(
    prefix: &str,
    vars: impl IntoIterator<Item = (String, String)>,
) -> ValueMap {
    let mut map = ValueMap::new();
    for (name, value) in vars {
        if let Some(key) = name.strip_prefix(prefix) {
            map.set(key, value);
        }
    }
    map
}

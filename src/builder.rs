//! The fluent layering surface and build orchestration.
//!
//! A [`Builder`] accumulates one flat value map across layering calls, later
//! layers overwriting earlier ones key-by-key. The terminal [`build`] call
//! walks the target record's shape, merges declared defaults underneath the
//! accumulated layers, expands references, and writes the results back.
//!
//! The builder is a short-circuiting accumulator: once any layering step
//! fails, every further call is a no-op and `build` surfaces the first
//! error.
//!
//! [`build`]: Builder::build

use std::path::Path;

use serde::Serialize;

use crate::env;
use crate::error::ConfbindError;
use crate::file;
use crate::flatten;
use crate::map::ValueMap;
use crate::resolve::resolve;
use crate::shape::{Collected, Record, Walker};
use crate::text;

#[derive(Debug, Default)]
pub struct Builder {
    err: Option<ConfbindError>,
    values: ValueMap,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first error recorded by any layering call, if any.
    pub fn error(&self) -> Option<&ConfbindError> {
        self.err.as_ref()
    }

    fn has_error(&self) -> bool {
        self.err.is_some()
    }

    fn fail(mut self, err: ConfbindError) -> Self {
        if self.err.is_none() {
            self.err = Some(err);
        }
        self
    }

    /// Stage a single key/value override.
    pub fn set(self, key: &str, value: &str) -> Self {
        if self.has_error() {
            return self;
        }
        let mut map = ValueMap::new();
        map.set(key, value);
        self.merge_map(map)
    }

    /// Merge a map of key/value pairs; its entries overwrite earlier layers.
    pub fn merge_map(mut self, map: ValueMap) -> Self {
        if self.has_error() {
            return self;
        }
        tracing::debug!(keys = map.len(), "merging layer");
        self.values.merge(map);
        self
    }

    /// Parse flat `key = value` text and merge it as one layer.
    pub fn merge_data(self, data: &str) -> Self {
        if self.has_error() {
            return self;
        }
        match text::parse(data) {
            Ok(map) => self.merge_map(map),
            Err(err) => self.fail(err),
        }
    }

    /// Read a file and merge its contents as flat text. An I/O failure
    /// becomes the sticky error.
    pub fn merge_file(self, path: impl AsRef<Path>) -> Self {
        if self.has_error() {
            return self;
        }
        match file::read(path.as_ref()) {
            Ok(data) => self.merge_data(&data),
            Err(err) => self.fail(err),
        }
    }

    /// Like [`merge_file`](Self::merge_file), but a missing file is silently
    /// skipped. Useful with [`platform_config_file`](crate::platform_config_file).
    pub fn merge_file_if_exists(self, path: impl AsRef<Path>) -> Self {
        if self.has_error() {
            return self;
        }
        let path = path.as_ref();
        if !path.exists() {
            return self;
        }
        self.merge_file(path)
    }

    /// Merge the subset of `vars` whose names start with `prefix`, with the
    /// prefix stripped: with prefix `APP__`, the pair `("APP__FOO", "1")`
    /// stages the key `FOO`.
    pub fn merge_environ(
        self,
        prefix: &str,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        if self.has_error() {
            return self;
        }
        self.merge_map(env::subset(prefix, vars))
    }

    /// [`merge_environ`](Self::merge_environ) over the live process
    /// environment.
    pub fn merge_env(self, prefix: &str) -> Self {
        if self.has_error() {
            return self;
        }
        self.merge_environ(prefix, std::env::vars())
    }

    /// Flatten any `Serialize` source into `__`-joined keys and merge it as
    /// one layer. `None` fields are skipped, so an options struct only
    /// overrides the keys it actually carries.
    pub fn merge_source<S: Serialize>(self, source: &S) -> Self {
        if self.has_error() {
            return self;
        }
        match flatten::flatten(source) {
            Ok(map) => self.merge_map(map),
            Err(err) => self.fail(err),
        }
    }

    /// Bind the accumulated configuration into `target`.
    ///
    /// Runs the full pipeline: walk the record's shape, merge declared
    /// defaults below the accumulated layers, check for missing required
    /// keys, expand `${KEY}` references, convert each value into its field,
    /// and evaluate validation rules. On failure the target's contents are
    /// unspecified and must be discarded.
    pub fn build<T: Record>(self, target: &mut T) -> Result<(), ConfbindError> {
        if let Some(err) = self.err {
            return Err(err);
        }

        let mut collected = Collected::default();
        target.walk(&mut Walker::collect(&mut collected))?;
        tracing::debug!(
            required = collected.required.len(),
            "collected record shape"
        );

        // Declared field defaults sit below capability-supplied defaults,
        // which sit below every explicitly merged layer.
        let mut values = collected.literal_defaults;
        values.merge(collected.capability_defaults);
        values.merge(self.values);

        let missing: Vec<String> = collected
            .required
            .iter()
            .filter(|key| !values.contains_key(key))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(ConfbindError::MissingKeys(missing));
        }

        resolve(&mut values)?;

        let mut invalid = Vec::new();
        target.walk(&mut Walker::apply(&values, &mut invalid))?;
        if !invalid.is_empty() {
            invalid.sort();
            invalid.dedup();
            return Err(ConfbindError::Validation(invalid));
        }

        Ok(())
    }
}

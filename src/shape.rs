//! Record shape traversal: the declare-once registration surface that turns
//! a record's fields into canonical keys, defaults, and writable slots.
//!
//! A target type implements [`Record`] by registering each field against the
//! [`Walker`] in declaration order. The same `walk` body drives two phases:
//! a collect pass that derives the required-key set and the default layers,
//! and an apply pass that converts resolved values into the fields and
//! evaluates validation rules. Because each field is only borrowed for the
//! duration of its own registration call, no descriptor ever outlives the
//! traversal.

use std::collections::BTreeSet;

use crate::convert::FromConfig;
use crate::error::ConfbindError;
use crate::key::{join_key, normalize_key, transform_struct_key};
use crate::map::ValueMap;
use crate::validate::Rule;

/// Rename sentinel that excludes a field and its subtree entirely.
const SKIP: &str = "-";

/// A type whose shape can be walked for configuration binding.
///
/// Implementations register every bindable field, in declaration order:
///
/// ```ignore
/// impl Record for ServerConfig {
///     fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
///         w.leaf("host", &mut self.host, Field::new().default_value("localhost"))?;
///         w.leaf("port", &mut self.port, Field::new())?;
///         w.nested("database", &mut self.database, Field::new())?;
///         Ok(())
///     }
/// }
/// ```
///
/// Fields that are not registered are invisible to binding.
pub trait Record {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<(), ConfbindError>;
}

/// Capability: a field value (leaf or nested record) that supplies its own
/// default key/value pairs, interpreted relative to the field's canonical
/// path prefix.
pub trait DefaultsProvider {
    fn supplied_defaults(&self) -> ValueMap;
}

/// Per-field registration options: default literal, key rename, validation.
#[derive(Debug, Clone, Default)]
pub struct Field {
    default: Option<String>,
    rename: Option<String>,
    rules: Vec<Rule>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default string value used when no layer supplies this field's key.
    pub fn default_value(mut self, value: &str) -> Self {
        self.default = Some(value.to_string());
        self
    }

    /// Replace the structural path segment with the normalized literal
    /// `name`. The sentinel `-` excludes the field and its subtree.
    pub fn rename(mut self, name: &str) -> Self {
        self.rename = Some(name.to_string());
        self
    }

    /// Shorthand for `rename("-")`.
    pub fn skip() -> Self {
        Self::new().rename(SKIP)
    }

    /// Attach a validation rule, evaluated against the final resolved value.
    pub fn validate(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    fn skipped(&self) -> bool {
        self.rename.as_deref() == Some(SKIP)
    }

    fn segment(&self, name: &str) -> String {
        match &self.rename {
            Some(rename) => normalize_key(rename),
            None => transform_struct_key(name),
        }
    }
}

/// Everything the collect phase learns about a record's shape.
#[derive(Debug, Default)]
pub(crate) struct Collected {
    /// Canonical key of every registered leaf.
    pub required: BTreeSet<String>,
    /// Per-field default literals.
    pub literal_defaults: ValueMap,
    /// Defaults merged in from `DefaultsProvider` capabilities.
    pub capability_defaults: ValueMap,
}

enum Mode<'a> {
    Collect(&'a mut Collected),
    Apply {
        values: &'a ValueMap,
        invalid: &'a mut Vec<String>,
    },
}

/// Drives one traversal of a [`Record`], in either collect or apply mode.
pub struct Walker<'a> {
    prefix: Vec<String>,
    mode: Mode<'a>,
}

impl<'a> Walker<'a> {
    pub(crate) fn collect(out: &'a mut Collected) -> Self {
        Walker {
            prefix: Vec::new(),
            mode: Mode::Collect(out),
        }
    }

    pub(crate) fn apply(values: &'a ValueMap, invalid: &'a mut Vec<String>) -> Self {
        Walker {
            prefix: Vec::new(),
            mode: Mode::Apply { values, invalid },
        }
    }

    fn key_for(&self, segment: String) -> String {
        let mut segments = self.prefix.clone();
        segments.push(segment);
        join_key(&segments)
    }

    /// Register a scalar field under the current path.
    pub fn leaf<F: FromConfig>(
        &mut self,
        name: &str,
        field: &mut F,
        opts: Field,
    ) -> Result<(), ConfbindError> {
        if opts.skipped() {
            return Ok(());
        }
        let key = self.key_for(opts.segment(name));

        match &mut self.mode {
            Mode::Collect(out) => {
                out.required.insert(key.clone());
                if let Some(default) = &opts.default {
                    out.literal_defaults.set(&key, default.clone());
                }
            }
            Mode::Apply { values, invalid } => {
                let Some(value) = values.get(&key) else {
                    return Err(ConfbindError::Convert {
                        key,
                        reason: "not found".to_string(),
                    });
                };
                *field = F::from_config(value).map_err(|e| ConfbindError::Convert {
                    key: key.clone(),
                    reason: e.to_string(),
                })?;
                if opts.rules.iter().any(|rule| !rule.check(value)) {
                    invalid.push(key);
                }
            }
        }
        Ok(())
    }

    /// Register a named sub-record: adds a path segment and traverses into it.
    pub fn nested<R: Record>(
        &mut self,
        name: &str,
        record: &mut R,
        opts: Field,
    ) -> Result<(), ConfbindError> {
        if opts.skipped() {
            return Ok(());
        }
        self.prefix.push(opts.segment(name));
        let outcome = record.walk(self);
        self.prefix.pop();
        outcome
    }

    /// Register an embedded sub-record: traverses into it with no extra path
    /// segment, flattening its fields into the parent's key space.
    pub fn embedded<R: Record>(&mut self, record: &mut R) -> Result<(), ConfbindError> {
        record.walk(self)
    }

    /// Merge a capability's supplied defaults, each key joined under the
    /// current path prefix. A record that provides its own defaults calls
    /// this at the top of its `walk` body. No-op during the apply phase.
    pub fn defaults_from<P: DefaultsProvider + ?Sized>(&mut self, provider: &P) {
        let Mode::Collect(out) = &mut self.mode else {
            return;
        };
        for (key, value) in provider.supplied_defaults() {
            let mut segments = self.prefix.clone();
            segments.push(key);
            out.capability_defaults.set(&join_key(&segments), value);
        }
    }

    /// Like [`defaults_from`](Self::defaults_from), scoped under the path
    /// segment of the named leaf field.
    pub fn defaults_at<P: DefaultsProvider>(&mut self, name: &str, provider: &P) {
        self.prefix.push(transform_struct_key(name));
        self.defaults_from(provider);
        self.prefix.pop();
    }
}

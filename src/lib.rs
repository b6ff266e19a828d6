//! Layered key/value configuration binding for Rust records. Declare a
//! struct, stage your sources, and go.
//!
//! Confbind populates a statically declared record from flat string
//! key/value pairs gathered from several sources (explicit overrides,
//! `key = value` text, environment variables, programmatic maps) through a
//! builder API, expanding `${KEY}` cross-references between values along the
//! way.
//!
//! ```ignore
//! let mut config = AppConfig::default();
//! Builder::new()
//!     .merge_file("app.conf")
//!     .merge_env("MYAPP__")
//!     .build(&mut config)?;
//! ```
//!
//! That single chain parses the file, overlays matching environment
//! variables, fills in declared defaults, expands references, and hands you
//! a fully populated, validated struct.
//!
//! # Design: record as source of truth
//!
//! Your config struct defines which keys exist, what their defaults are, and
//! how they validate. It does so by implementing [`Record`]: the `walk`
//! method registers each field against a [`Walker`], and every other
//! operation (key derivation, default layering, missing-key checking, value
//! conversion, validation) derives from that one declaration.
//!
//! ```ignore
//! struct AppConfig {
//!     host: String,
//!     port: u16,
//!     database: DbConfig,
//! }
//!
//! impl Record for AppConfig {
//!     fn walk(&mut self, w: &mut Walker<'_>) -> Result<(), ConfbindError> {
//!         w.leaf("host", &mut self.host, Field::new().default_value("localhost"))?;
//!         w.leaf("port", &mut self.port, Field::new().default_value("8080"))?;
//!         w.nested("database", &mut self.database, Field::new())?;
//!         Ok(())
//!     }
//! }
//! ```
//!
//! # Canonical keys
//!
//! Every key is normalized: trimmed, uppercased. Keys derived from nested
//! fields join their path segments with `__`, and each segment's structural
//! name is transformed from mixed case into uppercase-with-underscores
//! (`database` + `poolSize` → `DATABASE__POOL_SIZE`). Fields registered via
//! [`Walker::embedded`] contribute their keys directly into the parent's
//! path with no extra segment. `Field::rename` replaces a segment with a
//! literal name; the sentinel `-` excludes the field and its subtree.
//!
//! # Layer precedence
//!
//! ```text
//! Declared field defaults      Field::new().default_value(...)
//!        ↑ overridden by
//! Capability defaults          DefaultsProvider::supplied_defaults
//!        ↑ overridden by
//! Merged layers, in call order set / merge_map / merge_data /
//!                              merge_file / merge_environ / merge_source
//! ```
//!
//! Every layer is sparse: it only carries the keys it actually sets, and
//! unset keys fall through to the layer below. A key required by the record
//! and supplied by no layer at all fails the build with an aggregated
//! missing-keys error.
//!
//! # References
//!
//! Any value may reference another key with `${KEY}`, or supply a fallback
//! with `${KEY:-default}` for when `KEY` is absent from the merged map.
//! Expansion runs once over the final merged map: references resolve
//! recursively, cycles are detected and reported with their full path, and
//! a reference to a key that exists nowhere (and has no fallback) names both
//! ends of the dangling edge. Expansion is confluent: layer call order
//! never changes the final values.
//!
//! # Conversion and validation
//!
//! Resolved strings are written into fields through [`FromConfig`]: strings
//! pass through, integers and booleans parse, and any other type can
//! implement the trait itself to take full control. Validation rules
//! ([`Rule`]) attach per field and run against the final resolved value;
//! all failures in a build are aggregated into one error.
//!
//! # Sticky errors
//!
//! The builder short-circuits: the first failing layering call stores its
//! error, every later call becomes a no-op, and [`Builder::build`] surfaces
//! that first error. There is no partial success: on any failure the
//! target's contents are unspecified and must be discarded.

pub mod error;

mod builder;
mod convert;
mod env;
mod file;
mod flatten;
mod key;
mod map;
mod reference;
mod resolve;
mod shape;
mod text;
mod validate;

#[cfg(test)]
mod fixtures;

pub use builder::Builder;
pub use convert::{ConvertError, FromConfig};
pub use error::ConfbindError;
pub use file::platform_config_file;
pub use key::{normalize_key, transform_struct_key};
pub use map::ValueMap;
pub use shape::{DefaultsProvider, Field, Record, Walker};
pub use validate::Rule;

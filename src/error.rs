use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfbindError {
    #[error("invalid empty key on line {0}")]
    EmptyKey(usize),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}", missing_keys_message(.0))]
    MissingKeys(Vec<String>),

    #[error("cyclic reference: {}", join_keys(.0))]
    CyclicReference(Vec<String>),

    #[error("key {name} referenced by {referenced_by} not found")]
    MissingReference { name: String, referenced_by: String },

    #[error("configuration key \"{key}\": {reason}")]
    Convert { key: String, reason: String },

    #[error("validation failed: {}", join_keys(.0))]
    Validation(Vec<String>),

    #[error("failed to flatten layer source: {0}")]
    Flatten(String),
}

fn join_keys(keys: &[String]) -> String {
    keys.join(", ")
}

fn missing_keys_message(keys: &[String]) -> String {
    let plural = if keys.len() == 1 { "" } else { "s" };
    format!(
        "missing {} configuration key{}: {}",
        keys.len(),
        plural,
        keys.join(", ")
    )
}

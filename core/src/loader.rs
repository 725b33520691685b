//! Dataset loading and validation.
//!
//! Loading happens in two steps so callers can tell the failures apart:
//! 1. **Parsing**: raw text to a JSON document ([`LoadError::MalformedInput`] on failure).
//! 2. **Validation**: the document must be an object with a `hosts` array whose
//!    entries decode into [`HostRecord`]s ([`LoadError::Schema`] otherwise).

use std::fs;
use std::io::Read;
use std::path::Path;

use scanlens_common::error::LoadError;
use scanlens_common::models::dataset::Dataset;
use scanlens_common::models::host::HostRecord;
use serde_json::Value;
use tracing::debug;

/// Keys every host entry of a complete export carries.
pub const HOST_RECORD_KEYS: [&str; 4] = ["ip", "location", "services", "threat_intelligence"];

/// Parses `text` as JSON without checking its shape.
pub fn parse_document(text: &str) -> Result<Value, LoadError> {
    let document: Value = serde_json::from_str(text)?;
    debug!(bytes = text.len(), "parsed JSON document");
    Ok(document)
}

/// Parses raw bytes as JSON without checking their shape.
///
/// Invalid UTF-8 is a parse failure like any other.
pub fn parse_bytes(bytes: &[u8]) -> Result<Value, LoadError> {
    let document: Value = serde_json::from_slice(bytes)?;
    debug!(bytes = bytes.len(), "parsed JSON document");
    Ok(document)
}

/// Checks that `document` is shaped like a dataset and decodes it.
pub fn validate(document: Value) -> Result<Dataset, LoadError> {
    let mut root = match document {
        Value::Object(root) => root,
        other => {
            return Err(LoadError::schema(format!(
                "top level must be an object, found {}",
                kind_of(&other)
            )));
        }
    };

    let hosts = root
        .remove("hosts")
        .ok_or_else(|| LoadError::schema("missing `hosts` key"))?;

    let entries = match hosts {
        Value::Array(entries) => entries,
        other => {
            return Err(LoadError::schema(format!(
                "`hosts` must be an array, found {}",
                kind_of(&other)
            )));
        }
    };

    let hosts: Vec<HostRecord> = entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            serde_json::from_value(entry)
                .map_err(|e| LoadError::schema(format!("host #{idx}: {e}")))
        })
        .collect::<Result<_, _>>()?;

    debug!(hosts = hosts.len(), "validated dataset");
    Ok(Dataset::new(hosts))
}

pub fn from_str(text: &str) -> Result<Dataset, LoadError> {
    validate(parse_document(text)?)
}

/// Loads a dataset from an arbitrary byte source, such as an uploaded file.
///
/// The whole source is buffered first so a truncated upload surfaces as
/// [`LoadError::MalformedInput`] rather than a partial dataset.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Dataset, LoadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Read { source })?;
    validate(parse_bytes(&bytes)?)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "read dataset file");
    validate(parse_bytes(&bytes)?)
}

/// Lists `(host index, key)` pairs for every [`HOST_RECORD_KEYS`] entry a host lacks.
///
/// Missing keys are legal for [`validate`]; this is for reporting only.
/// Non-object host entries report every key as missing.
pub fn missing_host_keys(document: &Value) -> Vec<(usize, &'static str)> {
    let Some(hosts) = document.get("hosts").and_then(Value::as_array) else {
        return Vec::new();
    };

    hosts
        .iter()
        .enumerate()
        .flat_map(|(idx, host)| {
            HOST_RECORD_KEYS
                .iter()
                .filter(move |key| host.get(**key).is_none())
                .map(move |key| (idx, *key))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Document loader for search profile output.
//!
//! Accepts either the `profile` section on its own or a complete search
//! response (detected by the presence of both `took` and `profile`), and
//! resolves it to the list of shard profiles it contains.

use super::schema::ShardProfile;
use crate::utils::config::{ENVELOPE_MARKER_KEY, ENVELOPE_PROFILE_KEY, SHARDS_KEY};
use crate::utils::error::ParseError;
use log::debug;
use serde_json::Value;
use std::io::Read;

/// Resolve a parsed JSON document to its shard profiles
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `ParseError::MissingField` - no `shards` list at the top level
/// * `ParseError::MalformedInput` - a shard or node lacks a required field
pub fn load_shards(document: Value) -> Result<Vec<ShardProfile>, ParseError> {
    let mut profile = unwrap_envelope(document);

    let shards = match profile.as_object_mut() {
        Some(obj) => obj
            .remove(SHARDS_KEY)
            .ok_or_else(|| ParseError::MissingField(SHARDS_KEY.to_string()))?,
        None => {
            return Err(ParseError::MissingField(format!(
                "{} (document is not a JSON object)",
                SHARDS_KEY
            )))
        }
    };

    let shards: Vec<ShardProfile> = serde_json::from_value(shards)
        .map_err(|e| ParseError::MalformedInput(e.to_string()))?;

    debug!("Loaded {} shard profiles", shards.len());

    Ok(shards)
}

/// Parse a document from text and load its shards
///
/// # Errors
/// * `ParseError::JsonError` - text is not valid JSON
/// * anything `load_shards` returns
pub fn parse_document(text: &str) -> Result<Vec<ShardProfile>, ParseError> {
    let document: Value = serde_json::from_str(text)?;
    load_shards(document)
}

/// Read a whole document from a reader and load its shards
pub fn read_document<R: Read>(reader: R) -> Result<Vec<ShardProfile>, ParseError> {
    let document: Value = serde_json::from_reader(reader)?;
    load_shards(document)
}

/// Replace a raw search response by its `profile` section
///
/// **Private** - internal helper for load_shards
fn unwrap_envelope(document: Value) -> Value {
    match document {
        Value::Object(mut obj)
            if obj.contains_key(ENVELOPE_MARKER_KEY) && obj.contains_key(ENVELOPE_PROFILE_KEY) =>
        {
            debug!("Unwrapping profile section from search response");
            obj.remove(ENVELOPE_PROFILE_KEY).unwrap_or(Value::Null)
        }
        other => other,
    }
}

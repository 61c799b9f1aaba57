//! Structural merge of stored section documents over their defaults.
//!
//! Stored documents may predate fields added to a section's default. Objects
//! are merged key by key at every depth, so a stored `mission` object without
//! a `title` still picks up the default title. Everything else (strings,
//! numbers, arrays, explicit `null`) in the stored document wins outright.

use serde_json::Value;

pub fn merge_over_default(default: Value, stored: Value) -> Value {
    match (default, stored) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                let merged = match base.remove(&key) {
                    Some(existing) => merge_over_default(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            Value::Object(base)
        }
        (_, stored) => stored,
    }
}

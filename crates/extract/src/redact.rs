// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive key removal over JSON documents.
//!
//! Parameter entries are either bare key names (`token`) or dotted
//! paths (`user.token`). Redaction deletes each named key, and its
//! entire subtree, wherever the path matches — dotted paths are
//! resolved one segment per recursion level, and a path whose first
//! segment is absent at the current level is carried down unchanged
//! so it still applies to a deeper key of the same name.

use serde_json::Value;
use std::collections::BTreeSet;

/// Set of keys and dotted paths to redact.
///
/// Unordered as far as semantics go; duplicates collapse. Entries are
/// expected to be pre-trimmed (see [`crate::scan::find_param_set`]).
pub type ParamSet = BTreeSet<String>;

/// Remove every key named by `params` from `value`, in place.
///
/// At each object level:
/// - a key exactly matching an entry is deleted outright, subtree and
///   all (a direct match wins even when the key is also the prefix of
///   a dotted entry);
/// - otherwise, entries of the form `key.rest` recurse into the child
///   at `key` with the `rest` fragments;
/// - otherwise the child is visited with the unmodified set.
///
/// Arrays are visited element-wise with the unmodified set. Scalars
/// terminate recursion, so a dotted path pointing through a scalar is
/// a silent no-op.
pub fn redact_keys(value: &mut Value, params: &ParamSet) {
    match value {
        Value::Object(map) => {
            let keys: Vec<String> = map.keys().cloned().collect();
            for key in keys {
                if params.contains(&key) {
                    map.remove(&key);
                    continue;
                }

                let prefix = format!("{key}.");
                let nested: ParamSet = params
                    .iter()
                    .filter_map(|entry| entry.strip_prefix(&prefix))
                    .map(str::to_string)
                    .collect();

                if let Some(child) = map.get_mut(&key) {
                    if nested.is_empty() {
                        redact_keys(child, params);
                    } else {
                        redact_keys(child, &nested);
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                redact_keys(item, params);
            }
        }
        // Scalars: string/number/boolean/null terminate recursion
        _ => {}
    }
}

#[cfg(test)]
#[path = "redact_tests.rs"]
mod tests;

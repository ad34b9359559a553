//! Decision application: write the winning imported values into a copy of
//! the local document.

use std::collections::BTreeMap;

use serde_json::Value;
use sv_types::{Document, FieldPath, Resolution};

/// Apply a fully resolved decision map.
///
/// The result starts as a deep copy of `local`; every `use_imported` path is
/// overwritten with the imported value at that path (`null` when the import
/// has nothing there), and `keep_local` paths are left untouched. Writes
/// create missing intermediates and replace non-object intermediates with an
/// empty object before descending.
///
/// Pure function of its three inputs: calling it twice with identical
/// arguments yields identical results, and neither input document is
/// mutated.
pub fn apply_merge(
    local: &Document,
    imported: &Document,
    decisions: &BTreeMap<FieldPath, Resolution>,
) -> Document {
    let mut merged = local.clone();
    for (path, resolution) in decisions {
        if *resolution == Resolution::UseImported {
            let value = imported.get(path).cloned().unwrap_or(Value::Null);
            merged.set(path, value);
        }
    }
    merged
}

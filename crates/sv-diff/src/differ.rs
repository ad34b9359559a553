//! Recursive lock-step comparison of two documents.

use serde_json::{Map, Value};
use sv_policy::MergePolicy;
use sv_types::{DivergenceAction, Document, FieldPath};

use crate::divergence::{Divergence, DocumentDiff};

/// Compare a locally stored document with an imported one.
///
/// Walks both trees recursively. At every object level, local keys are
/// visited in their declared order, then imported-only keys in theirs; a
/// divergence is emitted for a path exactly when the two sides differ there.
/// Null and absent are equivalent ("missing") on either side. Arrays are
/// atomic: an unequal pair yields a single conflict for the whole array.
pub fn diff_documents(
    local: &Document,
    imported: &Document,
    policy: &MergePolicy,
) -> DocumentDiff {
    let mut divergences = Vec::new();
    diff_objects(None, local.as_map(), imported.as_map(), policy, &mut divergences);
    DocumentDiff { divergences }
}

fn diff_objects(
    prefix: Option<&FieldPath>,
    local: &Map<String, Value>,
    imported: &Map<String, Value>,
    policy: &MergePolicy,
    out: &mut Vec<Divergence>,
) {
    let keys = local
        .keys()
        .chain(imported.keys().filter(|k| !local.contains_key(*k)));

    for key in keys {
        let path = match prefix {
            Some(p) => p.child(key),
            None => FieldPath::key(key),
        };
        diff_key(&path, key, local.get(key), imported.get(key), policy, out);
    }
}

fn diff_key(
    path: &FieldPath,
    key: &str,
    local: Option<&Value>,
    imported: Option<&Value>,
    policy: &MergePolicy,
    out: &mut Vec<Divergence>,
) {
    // Tool-managed subtrees are synced verbatim: any inequality is a single
    // use-imported divergence, without recursion or classification.
    if policy.is_always_imported(key) {
        let old = local.unwrap_or(&Value::Null);
        let new = imported.unwrap_or(&Value::Null);
        if old != new {
            out.push(Divergence {
                path: path.clone(),
                old: old.clone(),
                new: new.clone(),
                action: DivergenceAction::UseImported,
            });
        }
        return;
    }

    let local = local.filter(|v| !v.is_null());
    let imported = imported.filter(|v| !v.is_null());

    match (local, imported) {
        (None, None) => {}

        (None, Some(new)) => out.push(Divergence {
            path: path.clone(),
            old: Value::Null,
            new: new.clone(),
            action: DivergenceAction::UseImported,
        }),

        (Some(old), None) => out.push(Divergence {
            path: path.clone(),
            old: old.clone(),
            new: Value::Null,
            action: DivergenceAction::KeepLocal,
        }),

        (Some(Value::Object(old)), Some(Value::Object(new))) => {
            diff_objects(Some(path), old, new, policy, out);
        }

        (Some(old @ Value::Array(_)), Some(new @ Value::Array(_))) => {
            if old != new {
                out.push(Divergence {
                    path: path.clone(),
                    old: old.clone(),
                    new: new.clone(),
                    action: DivergenceAction::Conflict,
                });
            }
        }

        // Primitive change, or a shape mismatch such as number-vs-object.
        (Some(old), Some(new)) => {
            if old != new {
                out.push(Divergence {
                    path: path.clone(),
                    old: old.clone(),
                    new: new.clone(),
                    action: policy.classify(path),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        Document::from_value(value).unwrap()
    }

    fn diff(local: Value, imported: Value) -> DocumentDiff {
        diff_documents(&doc(local), &doc(imported), &MergePolicy::standard())
    }

    #[test]
    fn identical_documents_produce_no_divergences() {
        let value = json!({
            "name": "Nora",
            "system": {
                "health": {"value": 10, "max": 20},
                "attributes": {"str": {"value": 7}},
            },
            "items": [{"id": 1}],
        });
        assert!(diff(value.clone(), value).is_empty());
    }

    #[test]
    fn changed_health_value_only() {
        let d = diff(
            json!({"system": {"health": {"value": 10, "max": 20}}}),
            json!({"system": {"health": {"value": 15, "max": 20}}}),
        );
        assert_eq!(d.len(), 1);
        let only = &d.divergences[0];
        assert_eq!(only.path.as_str(), "system.health.value");
        assert_eq!(only.old, json!(10));
        assert_eq!(only.new, json!(15));
        assert_eq!(only.action, DivergenceAction::KeepLocal);
    }

    #[test]
    fn changed_image_follows_import() {
        let d = diff(json!({"img": "a.png"}), json!({"img": "b.png"}));
        assert_eq!(d.len(), 1);
        assert_eq!(d.divergences[0].action, DivergenceAction::UseImported);
    }

    #[test]
    fn unequal_arrays_are_one_conflict() {
        let d = diff(
            json!({"items": [{"id": 1}]}),
            json!({"items": [{"id": 1}, {"id": 2}]}),
        );
        assert_eq!(d.len(), 1);
        let only = &d.divergences[0];
        assert_eq!(only.path.as_str(), "items");
        assert_eq!(only.action, DivergenceAction::Conflict);
        assert_eq!(only.new, json!([{"id": 1}, {"id": 2}]));
    }

    #[test]
    fn equal_arrays_are_silent() {
        let d = diff(json!({"items": [1, 2, 3]}), json!({"items": [1, 2, 3]}));
        assert!(d.is_empty());
    }

    #[test]
    fn always_imported_keys_bypass_classification() {
        fn singleton(key: &str, value: Value) -> Document {
            let mut root = Map::new();
            root.insert(key.to_string(), value);
            Document::from_map(root)
        }

        for key in ["flags", "effects", "prototypeToken", "_stats"] {
            let local = singleton(key, json!({"a": 1}));
            let imported = singleton(key, json!({"a": 2, "b": 3}));

            let d = diff_documents(&local, &imported, &MergePolicy::standard());
            assert_eq!(d.len(), 1, "one divergence for {key}");
            let only = &d.divergences[0];
            assert_eq!(only.path.as_str(), key);
            assert_eq!(only.action, DivergenceAction::UseImported);
            // The whole subtree is carried, not a per-field breakdown.
            assert_eq!(only.new, json!({"a": 2, "b": 3}));
        }
    }

    #[test]
    fn always_imported_applies_at_any_depth() {
        let d = diff(
            json!({"system": {"flags": {"x": 1}}}),
            json!({"system": {"flags": {"x": 2}}}),
        );
        assert_eq!(d.len(), 1);
        assert_eq!(d.divergences[0].path.as_str(), "system.flags");
        assert_eq!(d.divergences[0].action, DivergenceAction::UseImported);
    }

    #[test]
    fn key_only_in_import_is_use_imported() {
        let d = diff(
            json!({"system": {}}),
            json!({"system": {"origin": "vault"}}),
        );
        assert_eq!(d.len(), 1);
        let only = &d.divergences[0];
        assert_eq!(only.path.as_str(), "system.origin");
        assert_eq!(only.old, Value::Null);
        assert_eq!(only.action, DivergenceAction::UseImported);
    }

    #[test]
    fn key_only_in_local_is_keep_local() {
        let d = diff(
            json!({"system": {"trait": "gifted"}}),
            json!({"system": {}}),
        );
        assert_eq!(d.len(), 1);
        let only = &d.divergences[0];
        assert_eq!(only.path.as_str(), "system.trait");
        assert_eq!(only.new, Value::Null);
        assert_eq!(only.action, DivergenceAction::KeepLocal);
    }

    #[test]
    fn null_and_absent_are_equivalent() {
        let d = diff(
            json!({"system": {"biography": null}}),
            json!({"system": {}}),
        );
        assert!(d.is_empty());

        let d = diff(
            json!({"system": {}}),
            json!({"system": {"biography": null}}),
        );
        assert!(d.is_empty());
    }

    #[test]
    fn null_to_value_follows_import() {
        let d = diff(
            json!({"system": {"origin": null}}),
            json!({"system": {"origin": "wastes"}}),
        );
        assert_eq!(d.len(), 1);
        assert_eq!(d.divergences[0].action, DivergenceAction::UseImported);
    }

    #[test]
    fn shape_mismatch_is_a_divergence_not_an_error() {
        // Number locally, object when imported: representable as a conflict.
        let d = diff(
            json!({"system": {"carryWeight": 150}}),
            json!({"system": {"carryWeight": {"base": 150, "mod": 0}}}),
        );
        assert_eq!(d.len(), 1);
        let only = &d.divergences[0];
        assert_eq!(only.path.as_str(), "system.carryWeight");
        assert_eq!(only.action, DivergenceAction::Conflict);
    }

    #[test]
    fn unknown_keys_are_walked_like_any_other() {
        let d = diff(
            json!({"homebrew": {"mutations": 2}}),
            json!({"homebrew": {"mutations": 3}}),
        );
        assert_eq!(d.len(), 1);
        assert_eq!(d.divergences[0].path.as_str(), "homebrew.mutations");
        assert_eq!(d.divergences[0].action, DivergenceAction::Conflict);
    }

    #[test]
    fn local_key_order_then_imported_only_keys() {
        let d = diff(
            json!({"b": 1, "a": 2}),
            json!({"z": 9, "a": 3, "b": 1}),
        );
        let paths: Vec<&str> = d.iter().map(|v| v.path.as_str()).collect();
        // Local declaration order first (b before a), imported-only key last.
        assert_eq!(paths, vec!["a", "z"]);

        let d = diff(json!({"b": 1, "a": 2}), json!({"b": 2, "a": 3, "z": 9}));
        let paths: Vec<&str> = d.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["b", "a", "z"]);
    }

    #[test]
    fn paths_are_unique() {
        let d = diff(
            json!({"system": {"health": {"value": 1, "max": 2}, "radiation": 0}}),
            json!({"system": {"health": {"value": 3, "max": 4}, "radiation": 5}}),
        );
        let mut paths: Vec<&str> = d.iter().map(|v| v.path.as_str()).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn empty_policy_classifies_leaf_changes_as_conflicts() {
        let d = diff_documents(
            &doc(json!({"img": "a.png"})),
            &doc(json!({"img": "b.png"})),
            &MergePolicy::empty(),
        );
        assert_eq!(d.divergences[0].action, DivergenceAction::Conflict);
    }
}

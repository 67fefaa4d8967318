//! JSON object utilities over `serde_json::Value`.
//!
//! Small helpers for shuffling metadata objects around (attribute bags,
//! provider options, EXIF subsets). Key order is preserved end to end
//! (`serde_json` with `preserve_order`).

use serde_json::{Map, Value};

/// Recursively merge `patch` into `target`.
///
/// Objects merge key-by-key; any other pairing (including object vs
/// non-object) replaces the target value wholesale.
pub fn deep_merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match target_map.get_mut(key) {
                    Some(existing) => deep_merge(existing, patch_value),
                    None => {
                        target_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

/// New object containing only the listed top-level keys.
///
/// Missing keys are skipped, not inserted as null. Non-objects produce
/// an empty object.
pub fn pick(value: &Value, keys: &[&str]) -> Value {
    let mut out = Map::new();
    if let Value::Object(map) = value {
        for key in keys {
            if let Some(v) = map.get(*key) {
                out.insert((*key).to_string(), v.clone());
            }
        }
    }
    Value::Object(out)
}

/// New object without the listed top-level keys.
pub fn omit(value: &Value, keys: &[&str]) -> Value {
    match value {
        Value::Object(map) => {
            let out: Map<String, Value> = map
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            Value::Object(out)
        }
        other => other.clone(),
    }
}

/// Strip null entries from objects, recursively.
///
/// Nulls inside arrays are kept; only object members are dropped.
pub fn compact(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                compact(v);
            }
        }
        Value::Array(items) => {
            for item in items {
                compact(item);
            }
        }
        _ => {}
    }
}

/// Look up a dotted path like `"image.meta.width"`.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge_nested_objects() {
        let mut target = json!({"a": 1, "nested": {"x": 1, "y": 2}});
        deep_merge(&mut target, &json!({"nested": {"y": 3, "z": 4}, "b": 2}));
        assert_eq!(
            target,
            json!({"a": 1, "nested": {"x": 1, "y": 3, "z": 4}, "b": 2})
        );
    }

    #[test]
    fn test_deep_merge_replaces_non_objects() {
        let mut target = json!({"list": [1, 2, 3], "s": "old"});
        deep_merge(&mut target, &json!({"list": [9], "s": "new"}));
        assert_eq!(target, json!({"list": [9], "s": "new"}));
    }

    #[test]
    fn test_deep_merge_object_replaces_scalar() {
        let mut target = json!({"opt": 5});
        deep_merge(&mut target, &json!({"opt": {"w": 100}}));
        assert_eq!(target, json!({"opt": {"w": 100}}));
    }

    #[test]
    fn test_pick() {
        let value = json!({"w": 100, "h": 50, "q": 75});
        assert_eq!(pick(&value, &["w", "q", "missing"]), json!({"w": 100, "q": 75}));
        assert_eq!(pick(&json!(42), &["w"]), json!({}));
    }

    #[test]
    fn test_omit() {
        let value = json!({"w": 100, "h": 50, "secret": true});
        assert_eq!(omit(&value, &["secret"]), json!({"w": 100, "h": 50}));
        assert_eq!(omit(&json!("scalar"), &["x"]), json!("scalar"));
    }

    #[test]
    fn test_compact_strips_nulls_recursively() {
        let mut value = json!({
            "keep": 1,
            "drop": null,
            "nested": {"also_drop": null, "keep": "x"},
            "arr": [null, {"inner": null, "ok": 2}]
        });
        compact(&mut value);
        assert_eq!(
            value,
            json!({
                "keep": 1,
                "nested": {"keep": "x"},
                "arr": [null, {"ok": 2}]
            })
        );
    }

    #[test]
    fn test_get_path() {
        let value = json!({"image": {"meta": {"width": 800}}});
        assert_eq!(get_path(&value, "image.meta.width"), Some(&json!(800)));
        assert_eq!(get_path(&value, "image.meta"), Some(&json!({"width": 800})));
        assert_eq!(get_path(&value, "image.missing.width"), None);
        assert_eq!(get_path(&value, ""), None);
    }

    #[test]
    fn test_preserves_key_order() {
        let value = json!({"z": 1, "a": 2, "m": 3});
        let picked = omit(&value, &[]);
        let keys: Vec<&String> = picked.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}

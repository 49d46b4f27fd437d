//! Field-by-field merging of configuration tiers.
//!
//! Higher tiers override lower tiers key by key. Arrays are replaced, never
//! concatenated.

use serde_json::Value;

/// Deep merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively
/// - Any other overlay value replaces the base value
/// - A null overlay keeps the base value (null means "not specified")
///
/// # Example
/// ```
/// use serde_json::json;
/// use human_suite::config::deep_merge;
///
/// let base = json!({ "storage": { "indent": 2, "tasks_file": "tasks_data.json" } });
/// let overlay = json!({ "storage": { "indent": 4 } });
/// let merged = deep_merge(base, overlay);
/// assert_eq!(merged["storage"]["indent"], 4);
/// assert_eq!(merged["storage"]["tasks_file"], "tasks_data.json");
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged_value);
            }
            Value::Object(base_map)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Merge tiers in order, later ones winning.
pub fn deep_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values.into_iter().fold(Value::Null, deep_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_section_merge() {
        let base = json!({
            "storage": {"data_dir": ".human_suite_data", "indent": 2},
            "timelog": {"timestamp_format": "%H:%M"}
        });
        let overlay = json!({"storage": {"indent": 4}});
        assert_eq!(
            deep_merge(base, overlay),
            json!({
                "storage": {"data_dir": ".human_suite_data", "indent": 4},
                "timelog": {"timestamp_format": "%H:%M"}
            })
        );
    }

    #[test]
    fn test_extension_lists_are_replaced() {
        let base = json!({"notes": {"extensions": [".txt", ".md", ".note"]}});
        let overlay = json!({"notes": {"extensions": [".org"]}});
        assert_eq!(
            deep_merge(base, overlay),
            json!({"notes": {"extensions": [".org"]}})
        );
    }

    #[test]
    fn test_null_overlay_keeps_base() {
        let base = json!({"storage": {"indent": 2}});
        let overlay = json!({"storage": {"indent": null}});
        assert_eq!(deep_merge(base, overlay), json!({"storage": {"indent": 2}}));
    }

    #[test]
    fn test_merge_all_later_wins() {
        let tiers = vec![
            json!({"storage": {"indent": 2, "tasks_file": "a.json"}}),
            json!({"storage": {"indent": 3}}),
            json!({"storage": {"tasks_file": "b.json"}}),
        ];
        assert_eq!(
            deep_merge_all(tiers),
            json!({"storage": {"indent": 3, "tasks_file": "b.json"}})
        );
    }
}

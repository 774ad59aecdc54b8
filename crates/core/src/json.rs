//! Pruning of unset branches from payload trees.

use serde_json::{Map, Value};

/// Remove nulls, empty objects and empty arrays from `value`, recursively.
///
/// Children are pruned before their parent is inspected, so an object
/// whose members were all null disappears as well. Keys listed in
/// `keep` are retained as-is at any depth, even when null.
pub fn prune_nulls(value: Value, keep: &[&str]) -> Value {
    match value {
        Value::Object(map) => Value::Object(prune_object(map, keep)),
        Value::Array(items) => Value::Array(prune_array(items, keep)),
        other => other,
    }
}

fn prune_object(map: Map<String, Value>, keep: &[&str]) -> Map<String, Value> {
    map.into_iter()
        .filter_map(|(key, child)| {
            if keep.contains(&key.as_str()) {
                return Some((key, child));
            }
            let pruned = prune_nulls(child, keep);
            (!is_vacant(&pruned)).then_some((key, pruned))
        })
        .collect()
}

fn prune_array(items: Vec<Value>, keep: &[&str]) -> Vec<Value> {
    items
        .into_iter()
        .map(|item| prune_nulls(item, keep))
        .filter(|item| !is_vacant(item))
        .collect()
}

fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

use serde_json::{Map, Value};

use super::{property, vocab};

/// Converts one MF2 item (`type` + `properties` + optional `children`)
/// into one JF2 object.
///
/// `type` comes from the first string in the MF2 `type` array with its
/// vocabulary prefix stripped; further entries are ignored. Properties are
/// flattened one by one in source key order. Absent or empty fields emit
/// no key at all.
pub fn convert_item(item: &Value) -> Value {
    let mut out = Map::new();

    if let Some(kind) = item
        .get("type")
        .and_then(Value::as_array)
        .and_then(|types| types.first())
        .and_then(Value::as_str)
    {
        out.insert("type".to_owned(), Value::String(vocab::strip_prefix(kind).to_owned()));
    }

    if let Some(properties) = item.get("properties").and_then(Value::as_object) {
        for (key, values) in properties {
            if values.as_array().is_some_and(|v| v.is_empty()) {
                continue;
            }
            out.insert(key.clone(), property::flatten(values));
        }
    }

    if let Some(children) = item.get("children").and_then(Value::as_array) {
        if !children.is_empty() {
            let converted = children.iter().map(convert_item).collect();
            out.insert("children".to_owned(), Value::Array(converted));
        }
    }

    Value::Object(out)
}

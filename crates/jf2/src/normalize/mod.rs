//! MF2 → JF2 normalization (document shape, item conversion, property
//! flattening, vocabulary prefix stripping).

pub mod item;
pub mod property;
pub mod vocab;

use serde_json::{Map, Value};

/// Decides the top-level JF2 shape from the document's `items`.
///
/// No items (missing, empty, or not an array) gives an empty object. A
/// single item is converted and returned directly, unwrapped. Two or more
/// items become `{"children": [...]}` with no top-level `type`; the
/// collection carries no entity identity of its own.
pub fn convert_document(document: &Value) -> Value {
    let items = match document.get("items").and_then(Value::as_array) {
        Some(items) => items,
        None => return Value::Object(Map::new()),
    };
    match items.as_slice() {
        [] => Value::Object(Map::new()),
        [only] => item::convert_item(only),
        many => {
            let children = many.iter().map(item::convert_item).collect();
            let mut out = Map::new();
            out.insert("children".to_owned(), Value::Array(children));
            Value::Object(out)
        }
    }
}

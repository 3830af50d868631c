use serde_json::{Map, Value};

use super::item;

/// Flattens one MF2 property value array.
///
/// Arity rule first: a single-element array collapses to its converted
/// element, a longer array keeps its length with each element converted.
/// The rule is structural and uniform across property names; `category`
/// collapses with one tag but not with two, and `photo` stays an array
/// whenever multiple values are present.
pub fn flatten(values: &Value) -> Value {
    match values {
        Value::Array(elements) => match elements.as_slice() {
            [single] => convert_element(single),
            many => Value::Array(many.iter().map(convert_element).collect()),
        },
        // Not an array at all; MF2 always wraps, so pass through untouched.
        other => other.clone(),
    }
}

/// Shape dispatch for one element. Content and nested-item shapes have
/// disjoint key sets (`html` vs `type`), so the order here is safe.
fn convert_element(element: &Value) -> Value {
    let Some(shape) = element.as_object() else {
        return element.clone();
    };
    if shape.contains_key("html") {
        return convert_content(shape);
    }
    if shape.contains_key("type") {
        // An embedded item, typically an author h-card.
        return item::convert_item(element);
    }
    // Media references and unknown shapes pass through unchanged.
    element.clone()
}

/// Renames the content keys: `html` stays, `value` becomes `text`. When
/// `value` is absent, no `text` key is emitted. Both strings pass through
/// verbatim; sanitization belongs upstream.
fn convert_content(content: &Map<String, Value>) -> Value {
    let mut out = Map::new();
    if let Some(html) = content.get("html") {
        out.insert("html".to_owned(), html.clone());
    }
    if let Some(text) = content.get("value") {
        out.insert("text".to_owned(), text.clone());
    }
    Value::Object(out)
}

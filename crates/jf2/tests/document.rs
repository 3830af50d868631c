use serde_json::json;

#[test]
fn empty_object_returns_empty_object() {
    assert_eq!(jf2::convert(&json!({})), json!({}));
}

#[test]
fn empty_items_array_returns_empty_object() {
    assert_eq!(jf2::convert(&json!({ "items": [] })), json!({}));
}

#[test]
fn non_object_document_returns_empty_object() {
    assert_eq!(jf2::convert(&json!("not a document")), json!({}));
    assert_eq!(jf2::convert(&json!(null)), json!({}));
    assert_eq!(jf2::convert(&json!([1, 2])), json!({}));
}

#[test]
fn non_array_items_returns_empty_object() {
    assert_eq!(jf2::convert(&json!({ "items": "oops" })), json!({}));
    assert_eq!(jf2::convert(&json!({ "items": {} })), json!({}));
}

#[test]
fn empty_h_entry_returns_empty_entry() {
    let result = jf2::convert(&json!({
        "items": [{ "type": ["h-entry"] }]
    }));
    assert_eq!(result, json!({ "type": "entry" }));
}

#[test]
fn single_item_is_merged_at_top_level() {
    let result = jf2::convert(&json!({
        "items": [{
            "type": ["h-entry"],
            "properties": {
                "name": ["Simple entry"],
                "published": ["2020-07-25"],
                "url": ["https://example.com"]
            }
        }]
    }));
    assert_eq!(
        result,
        json!({
            "type": "entry",
            "name": "Simple entry",
            "published": "2020-07-25",
            "url": "https://example.com"
        })
    );
}

#[test]
fn bare_entries_become_children() {
    let result = jf2::convert(&json!({
        "items": [{
            "type": ["h-entry"],
            "properties": { "name": ["Entry A"] }
        }, {
            "type": ["h-entry"],
            "properties": { "name": ["Entry B"] }
        }]
    }));
    assert_eq!(
        result,
        json!({
            "children": [
                { "type": "entry", "name": "Entry A" },
                { "type": "entry", "name": "Entry B" }
            ]
        })
    );
    // The collection itself carries no type, even with homogeneous items.
    assert!(result.get("type").is_none());
}

#[test]
fn property_key_order_follows_source_order() -> Result<(), Box<dyn std::error::Error>> {
    let out = jf2::convert_to_string(&json!({
        "items": [{
            "type": ["h-entry"],
            "properties": {
                "name": ["Ordered"],
                "published": ["2020-07-25"],
                "url": ["https://example.com"]
            }
        }]
    }))?;
    assert_eq!(
        out,
        r#"{"type":"entry","name":"Ordered","published":"2020-07-25","url":"https://example.com"}"#
    );
    Ok(())
}

#[test]
fn convert_from_str_rejects_invalid_json() {
    assert!(jf2::convert_from_str("{ not json").is_err());
}

#[test]
fn convert_from_reader_parses_and_converts() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{"items":[{"type":["h-card"],"properties":{"name":["Jane"]}}]}"#;
    let result = jf2::convert_from_reader(input.as_bytes())?;
    assert_eq!(result, json!({ "type": "card", "name": "Jane" }));
    Ok(())
}

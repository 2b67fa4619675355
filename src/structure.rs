//! Response shape extraction, used to document what an endpoint returns
//! without keeping any of the (often personal) data it returned.

use serde_json::{Map, Value};

/// Reduces `value` to its key structure.
///
/// Objects keep every key with a shaped value, scalars become `null`, and an
/// array becomes a one-element array holding the shape of its first item (or
/// stays empty).
///
/// ```
/// use serde_json::json;
///
/// let shape = sevima::structure::shape(&json!({
///     "data": [{"id": "123", "attributes": {"nama": "Budi", "sks": 3}}],
///     "meta": {"total": 1}
/// }));
/// assert_eq!(shape, json!({
///     "data": [{"id": null, "attributes": {"nama": null, "sks": null}}],
///     "meta": {"total": null}
/// }));
/// ```
pub fn shape(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), shape(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => match items.first() {
            Some(first) => Value::Array(vec![shape(first)]),
            None => Value::Array(Vec::new()),
        },
        _ => Value::Null,
    }
}

/// Stores `shape(response)` under `key` in a JSON object document.
///
/// Anything that is not an object is replaced by a fresh one.
pub fn record(document: &mut Value, key: &str, response: &Value) {
    if !document.is_object() {
        *document = Value::Object(Map::new());
    }
    if let Value::Object(map) = document {
        map.insert(key.to_string(), shape(response));
    }
}

use serde_json::json;
use serde_json::Value;

/// Widen `schema` so that it also accepts `null`.
///
/// - `{"type": T}` becomes `{"type": [T, "null"]}` (and `null` joins any
///   `enum` list).
/// - A `$ref` becomes `{"anyOf": [{"$ref": ...}, {"type": "null"}]}`, and so
///   does an object carrying `allOf` branches.
/// - An `anyOf` gets `{"type": "null"}` prepended.
/// - The never-matching `{"not": {}}` becomes `{"type": "null"}`.
/// - The permissive `{}` is already nullable and stays as it is.
pub fn make_nullable(schema: Value) -> Value {
    let Value::Object(mut map) = schema else {
        return schema;
    };

    if map.is_empty() {
        return Value::Object(map);
    }

    if map.len() == 1 && map.get("not").is_some_and(|not| not == &json!({})) {
        return json!({"type": "null"});
    }

    if map.contains_key("$ref") || map.contains_key("allOf") {
        return json!({"anyOf": [Value::Object(map), {"type": "null"}]});
    }

    if let Some(type_) = map.get_mut("type") {
        match type_ {
            Value::String(type_name) => {
                if type_name != "null" {
                    let widened = json!([type_name.to_string(), "null"]);
                    *type_ = widened;
                }
            },
            Value::Array(type_names) => {
                if !type_names.iter().any(|t| t == "null") {
                    type_names.push(json!("null"));
                }
            },
            _ => return json!({"anyOf": [Value::Object(map), {"type": "null"}]}),
        }
        if let Some(Value::Array(values)) = map.get_mut("enum") {
            if !values.contains(&Value::Null) {
                values.push(Value::Null);
            }
        }
        if let Some(const_value) = map.remove("const") {
            map.insert("enum".to_string(), json!([const_value, null]));
        }
        return Value::Object(map);
    }

    if let Some(Value::Array(branches)) = map.get_mut("anyOf") {
        branches.insert(0, json!({"type": "null"}));
        return Value::Object(map);
    }

    json!({"anyOf": [Value::Object(map), {"type": "null"}]})
}

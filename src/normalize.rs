use serde_json::{Map, Value};

/// Rewrite a snake_case string to camelCase.
///
/// Only the single-underscore-then-lowercase-letter pattern is rewritten;
/// trailing and doubled underscores pass through untouched, so the function
/// is a no-op on strings that are already camelCase.
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    chars.next();
                    out.push(next.to_ascii_uppercase());
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Rewrite every object key in a JSON value from snake_case to camelCase.
///
/// Arrays are mapped element-wise, primitives pass through unchanged.
/// The transform takes the value by move and builds a new structure, so
/// nothing is mutated in place, and it is idempotent.
pub fn map_keys_to_camel_case(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                out.insert(to_camel_case(&key), map_keys_to_camel_case(val));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(map_keys_to_camel_case)
                .collect(),
        ),
        other => other,
    }
}

//! Extraction of the human-readable `detail` from an error body.
//!
//! The service reports failures as `{"detail": "..."}`. Request validation
//! failures use a list instead: `{"detail": [{"loc": [...], "msg": "..."}]}`.

use serde_json::Value;

pub fn extract(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items.iter().filter_map(item_message).collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn item_message(item: &Value) -> Option<String> {
    let msg = item.get("msg")?.as_str()?;
    let field = item
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .and_then(Value::as_str);

    Some(match field {
        Some(field) => format!("{field}: {msg}"),
        None => msg.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        assert_eq!(
            extract(br#"{"detail":"Service down"}"#).as_deref(),
            Some("Service down")
        );
    }

    #[test]
    fn test_validation_list_detail() {
        let body = br#"{"detail":[
            {"loc":["body","product_name"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","tone"],"msg":"str type expected","type":"type_error.str"}
        ]}"#;
        assert_eq!(
            extract(body).as_deref(),
            Some("product_name: field required; tone: str type expected")
        );
    }

    #[test]
    fn test_missing_or_unusable_detail() {
        assert_eq!(extract(b"Internal Server Error"), None);
        assert_eq!(extract(br#"{"error":"x"}"#), None);
        assert_eq!(extract(br#"{"detail":""}"#), None);
        assert_eq!(extract(br#"{"detail":42}"#), None);
        assert_eq!(extract(br#"{"detail":[]}"#), None);
    }
}

use anyhow::Result;
use serde_json::Value;

use seqkit::chunks;
use seqkit::json::into_array;

/// Splits an array into chunks of `size` elements; padding cells become `pad`.
pub fn run(size: usize, pad: &Value, document: Value) -> Result<Value> {
    let items = into_array(document, "chunks")?;
    let rows = chunks(size, items)?
        .map(|chunk| {
            Value::Array(
                chunk
                    .into_iter()
                    .map(|cell| cell.unwrap_or_else(|| pad.clone()))
                    .collect(),
            )
        })
        .collect();
    Ok(Value::Array(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chunks_padding() {
        let result = run(3, &Value::Null, json!([0, 1, 2, 3, 4])).unwrap();
        assert_eq!(result, json!([[0, 1, 2], [3, 4, null]]));
    }

    #[test]
    fn test_chunks_custom_pad() {
        let result = run(3, &json!("-"), json!([null, 1, 2, null])).unwrap();
        assert_eq!(result, json!([[null, 1, 2], [null, "-", "-"]]));
    }

    #[test]
    fn test_chunks_empty() {
        assert_eq!(run(2, &Value::Null, json!([])).unwrap(), json!([]));
    }

    #[test]
    fn test_chunks_rejects_zero() {
        assert!(run(0, &Value::Null, json!([1, 2])).is_err());
    }
}

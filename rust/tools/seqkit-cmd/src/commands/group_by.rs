use anyhow::{Context, Result};
use serde_json::Value;

use seqkit::group_by;
use seqkit::json::into_array;

/// Groups an array of objects by `key`.
///
/// The result is an array of `{"key": ..., "items": [...]}` buckets in the
/// order their keys first appear.
pub fn run(key: &str, document: Value) -> Result<Value> {
    let records = into_array(document, "group-by")?;
    let groups =
        group_by(key, records).with_context(|| format!("Failed to group by '{}'", key))?;
    tracing::debug!("group-by '{}': {} groups", key, groups.len());
    Ok(groups.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_by_gender() {
        let users = json!([
            {"gender": "female", "age": 33},
            {"gender": "male", "age": 20},
            {"gender": "female", "age": 21}
        ]);
        let result = run("gender", users).unwrap();
        assert_eq!(
            result,
            json!([
                {
                    "key": "female",
                    "items": [
                        {"gender": "female", "age": 33},
                        {"gender": "female", "age": 21}
                    ]
                },
                {"key": "male", "items": [{"gender": "male", "age": 20}]}
            ])
        );
    }

    #[test]
    fn test_group_by_missing_key() {
        let err = run("gender", json!([{"gender": "male"}, {"age": 1}])).unwrap_err();
        assert_eq!(err.to_string(), "Failed to group by 'gender'");
        assert_eq!(
            err.root_cause().to_string(),
            "element #1 has no key 'gender'"
        );
    }
}

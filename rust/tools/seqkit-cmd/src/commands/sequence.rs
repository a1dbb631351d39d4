//! Commands that treat the document as a plain sequence: count, flatten,
//! distinct, first and last.

use anyhow::Result;
use serde_json::Value;

use seqkit::json::{JsonKey, count_value, first_value, into_array, last_value};
use seqkit::{Error, SeqIteratorsExt};

pub fn count(document: &Value) -> Result<Value> {
    let n = count_value(document).ok_or_else(|| Error::not_an_array("count"))?;
    Ok(Value::from(n))
}

pub fn flatten(document: Value) -> Result<Value> {
    let items = into_array(document, "flatten")?;
    Ok(Value::Array(items.into_iter().flatten_leaves().collect()))
}

pub fn distinct(document: Value) -> Result<Value> {
    let items = into_array(document, "distinct")?;
    let total = items.len();
    let unique = items.into_iter().map(JsonKey).distinct_items();
    tracing::debug!("distinct: {} of {} elements kept", unique.len(), total);
    Ok(Value::Array(unique.into_iter().map(Value::from).collect()))
}

/// The first element, or `absent` when the document is empty or not an array.
pub fn first(document: &Value, absent: &Value) -> Value {
    first_value(document).unwrap_or(absent).clone()
}

/// The last element, or `absent` when the document is empty or not an array.
pub fn last(document: &Value, absent: &Value) -> Value {
    last_value(document).unwrap_or(absent).clone()
}

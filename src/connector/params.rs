use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered request parameters.
///
/// Keys keep insertion order. Optional values go through [`Params::insert_opt`], so an
/// unset value never shows up as a key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert `value` only when it is `Some`.
    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Convert into a JSON object, e.g. to nest it under another key.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Flatten into query-string pairs.
    ///
    /// Strings and numbers are sent as text, booleans as `1`/`0`, arrays as repeated
    /// `key[]` entries and nested objects as JSON text. `null` values are skipped.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::<(String, String)>::new();
        for (key, value) in &self.0 {
            push_query_value(&mut pairs, key, value);
        }
        pairs
    }
}

fn push_query_value(pairs: &mut Vec<(String, String)>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            let flag = if *flag { "1" } else { "0" };
            pairs.push((key.to_owned(), flag.to_owned()));
        }
        Value::Number(number) => pairs.push((key.to_owned(), number.to_string())),
        Value::String(text) => pairs.push((key.to_owned(), text.clone())),
        Value::Array(items) => {
            let key = format!("{key}[]");
            for item in items {
                push_query_value(pairs, &key, item);
            }
        }
        Value::Object(_) => pairs.push((key.to_owned(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn insert_opt_skips_none_and_keeps_zero() {
        let mut params = Params::new();
        params.insert_opt("from_date", None::<i64>);
        params.insert_opt("to_date", Some(0_i64));

        assert!(!params.contains_key("from_date"));
        assert_eq!(params.get("to_date"), Some(&json!(0)));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn keys_keep_insertion_order() {
        let mut params = Params::new();
        params.insert("from", "Beepsend");
        params.insert("to", "46736007518");
        params.insert("message", "hi");
        params.insert("encoding", "UTF-8");
        params.insert("from", "Other");

        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["from", "to", "message", "encoding"]
        );
        assert_eq!(params.get("from"), Some(&json!("Other")));
    }

    #[test]
    fn serializes_as_plain_json_object_in_order() {
        let mut params = Params::new();
        params.insert("to", "46736007518");
        params.insert("count", 200);
        params.insert("groups", vec![1_u64, 2]);

        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"to":"46736007518","count":200,"groups":[1,2]}"#
        );
    }

    #[test]
    fn query_pairs_flatten_values() {
        let mut params = Params::new();
        params.insert("from_date", 1000);
        params.insert("MCC", "240");
        params.insert("receive_dlr", true);
        params.insert("groups", vec![11_u64, 34]);
        params.insert("skip", Value::Null);
        params.insert("nested", json!({"a": 1}));

        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("from_date".to_owned(), "1000".to_owned()),
                ("MCC".to_owned(), "240".to_owned()),
                ("receive_dlr".to_owned(), "1".to_owned()),
                ("groups[]".to_owned(), "11".to_owned()),
                ("groups[]".to_owned(), "34".to_owned()),
                ("nested".to_owned(), r#"{"a":1}"#.to_owned()),
            ]
        );
    }

    #[test]
    fn into_value_nests_as_object() {
        let mut inner = Params::new();
        inner.insert("from", "beepsend");
        let mut outer = Params::new();
        outer.insert("sms", inner.into_value());

        assert_eq!(outer.into_value(), json!({"sms": {"from": "beepsend"}}));
    }
}

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One credential entry as it appears in `data.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_string")]
    pub system: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub equipment: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub login: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub remark: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
}

/// The whole lookup table. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub systems: Vec<String>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub rows: Vec<Record>,
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(value_to_string).unwrap_or_default())
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map(value_to_string)
        .collect())
}

fn lenient_rows<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}

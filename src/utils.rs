use super::*;

/// Formats unix seconds as a UTC timestamp.
pub(crate) fn format_time(time: Option<i64>) -> String {
  time
    .and_then(|secs| DateTime::from_timestamp(secs, 0))
    .map_or_else(
      || "unknown time".to_string(),
      |time| time.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}

/// Accepts a JSON string or number as text. Accounts created with numeric
/// names come back as numbers.
pub(crate) fn string_or_number<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let unexpected = match Option::<Value>::deserialize(deserializer)? {
    None | Some(Value::Null) => return Ok(None),
    Some(Value::String(text)) => return Ok(Some(text)),
    Some(Value::Number(number)) => return Ok(Some(number.to_string())),
    Some(Value::Bool(flag)) => Unexpected::Bool(flag),
    Some(Value::Array(_)) => Unexpected::Seq,
    Some(Value::Object(_)) => Unexpected::Map,
  };

  Err(de::Error::invalid_type(unexpected, &"a string or number"))
}

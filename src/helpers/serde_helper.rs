use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Seconds(i64),
    Text(String),
}

/// Accepts unix seconds or an RFC 3339 string and yields unix seconds.
pub fn timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Seconds(seconds) => Ok(seconds),
        RawTimestamp::Text(text) => chrono::DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.timestamp())
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(deserialize_with = "super::timestamp")]
        at: i64,
    }

    #[test]
    fn accepts_seconds_and_rfc3339() {
        let numeric: Stamped = serde_json::from_str(r#"{"at": 1700000000}"#).unwrap();
        assert_eq!(numeric.at, 1_700_000_000);

        let text: Stamped = serde_json::from_str(r#"{"at": "2023-11-14T22:13:20Z"}"#).unwrap();
        assert_eq!(text.at, 1_700_000_000);

        assert!(serde_json::from_str::<Stamped>(r#"{"at": "yesterday"}"#).is_err());
    }
}

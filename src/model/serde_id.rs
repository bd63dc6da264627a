//! Serde helpers that send snowflakes as strings.
//!
//! JavaScript clients lose precision on integers above 2^53, so ids travel as strings.

use serde::{Deserialize, Deserializer, Serializer};

/// `#[serde(with = "crate::model::serde_id::string")]` for `u64` ids.
pub mod string {
    use super::*;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        String::deserialize(deserializer)?
            .parse::<u64>()
            .map_err(D::Error::custom)
    }
}

/// `#[serde(with = "crate::model::serde_id::option_string")]` for `Option<u64>` ids.
pub mod option_string {
    use super::*;

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_some(&id.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        Option::<String>::deserialize(deserializer)?
            .map(|s| s.parse::<u64>().map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Ids {
        #[serde(with = "super::string")]
        id: u64,
        #[serde(with = "super::option_string", default)]
        other: Option<u64>,
    }

    #[test]
    fn ids_round_trip_as_strings() {
        let ids = Ids {
            id: u64::MAX,
            other: Some(42),
        };

        let json = serde_json::to_value(&ids).unwrap();

        assert_eq!(json["id"], "18446744073709551615");
        assert_eq!(json["other"], "42");
        assert_eq!(serde_json::from_value::<Ids>(json).unwrap(), ids);
    }

    #[test]
    fn missing_optional_id_is_none() {
        let ids: Ids = serde_json::from_str(r#"{"id":"7"}"#).unwrap();

        assert_eq!(ids.other, None);
    }
}

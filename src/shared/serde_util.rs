//! Custom serde helpers for exchange wire formats.

/// Deserializes an epoch-millis number into `DateTime<Utc>`.
///
/// Trade results carry `timestamp` as epoch milliseconds, not ISO 8601 strings.
pub mod timestamp_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp_millis())
    }
}

/// Accepts an integer sent either as a JSON number or a numeric string
/// (`"tid": "1393281234567"`).
pub mod i64_or_string {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(n),
            Raw::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| serde::de::Error::custom(format!("Invalid integer {:?}: {}", s, e))),
        }
    }

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(*value)
    }
}

/// Accepts a decimal sent either as a numeric string (`"0.60"`) or a bare JSON
/// number (`0.6`). Serializes back as a string.
pub mod decimal_or_number {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    impl Raw {
        pub(super) fn into_decimal<E: serde::de::Error>(self) -> Result<Decimal, E> {
            let text = match self {
                Raw::Str(s) => s,
                // Number's Display is the shortest round-trip form, e.g. `0.6`
                Raw::Num(n) => n.to_string(),
            };
            let trimmed = text.trim();
            Decimal::from_str(trimmed)
                .or_else(|_| Decimal::from_scientific(trimmed))
                .map_err(|e| E::custom(format!("Invalid decimal {:?}: {}", text, e)))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        Raw::deserialize(deserializer)?.into_decimal()
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(value, serializer)
    }
}

/// [`decimal_or_number`] for optional fields; `null` and a missing key are `None`.
pub mod option_decimal_or_number {
    use super::decimal_or_number::Raw;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Raw>::deserialize(deserializer)?
            .map(Raw::into_decimal)
            .transpose()
    }

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }
}

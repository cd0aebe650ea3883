//! Lenient deserializers for parameter structs.
//!
//! Parameters often arrive as text (command lines, config files), so each
//! helper accepts either the native JSON type or its string spelling.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(u64),
    Float(f64),
    Str(String),
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Str(s) => s,
    }))
}

pub(crate) fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(scalar) => unsigned(scalar).map(Some),
    }
}

pub(crate) fn u32_value<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    unsigned(Scalar::deserialize(deserializer)?)
}

pub(crate) fn u64_value<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => Ok(n),
        Scalar::Str(s) => s
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid integer '{}': {}", s, e))),
        _ => Err(de::Error::custom("expected an unsigned integer")),
    }
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Bool(b) => Ok(b),
        Scalar::Int(n) => Ok(n != 0),
        Scalar::Str(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" | "" => Ok(false),
            _ => Err(de::Error::custom(format!("invalid boolean '{}'", s))),
        },
        Scalar::Float(_) => Err(de::Error::custom("expected a boolean")),
    }
}

fn unsigned<E: de::Error>(scalar: Scalar) -> Result<u32, E> {
    match scalar {
        Scalar::Int(n) => u32::try_from(n).map_err(|_| E::custom(format!("{} is out of range", n))),
        Scalar::Str(s) => s
            .trim()
            .parse()
            .map_err(|e| E::custom(format!("invalid integer '{}': {}", s, e))),
        _ => Err(E::custom("expected an unsigned integer")),
    }
}

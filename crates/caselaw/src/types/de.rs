//! Lenient field decoders shared by the record model.

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default value.
///
/// Combined with `#[serde(default)]` this makes a field tolerant of both
/// absence and an explicit `null`, while a value of the wrong shape is
/// still an error.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a continuation URL, treating `null` and `""` as "no page".
pub(crate) fn cursor<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default instead of failing.
///
/// The API sends `null` for text and numeric fields it has no data for.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

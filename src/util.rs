use serde::{
    Deserialize,
    Deserializer,
};

/// Deserialize a value, using its default if it is `null`.
///
/// `#[serde(default)]` only covers missing keys, the api also sends explicit nulls.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

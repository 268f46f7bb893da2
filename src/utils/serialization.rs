use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same way as a missing field.
///
/// Pair with `#[serde(default)]` so absent keys also land on `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let v = Option::<T>::deserialize(deserializer)?;
    Ok(v.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        price: f64,
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
    }

    #[test]
    fn test_null_and_missing() {
        let s: Sample = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert_eq!(s.price, 0.0);
        assert_eq!(s.label, "");
    }

    #[test]
    fn test_present_values_pass_through() {
        let s: Sample = serde_json::from_str(r#"{"price": 1.25, "label": "x"}"#).unwrap();
        assert_eq!(s.price, 1.25);
        assert_eq!(s.label, "x");
    }
}

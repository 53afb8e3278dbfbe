//! The plain options record accepted from callers.

use std::fmt;

use indexmap::IndexMap;

/// A single unvalidated option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A boolean, such as `convection: true`.
    Bool(bool),
    /// A small integer, such as `dimensionality: 1`.
    Integer(i64),
    /// A string, such as `surface form: "differential"`.
    String(String),
    /// A list of values, such as `side reactions: ["oxygen"]`.
    List(Vec<Self>),
    /// A nested mapping, such as `convection: {"transverse": "full"}`.
    Map(IndexMap<String, Self>),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::List(values) => {
                let values = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{values}]")
            }
            Self::Map(entries) => {
                let entries = entries
                    .iter()
                    .map(|(key, value)| format!("{key:?}: {value}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{entries}}}")
            }
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(Self::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionValue {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.into_iter().map(Self::from).collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for OptionValue {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), Self::from(value)))
                .collect(),
        )
    }
}

impl From<IndexMap<String, Self>> for OptionValue {
    fn from(entries: IndexMap<String, Self>) -> Self {
        Self::Map(entries)
    }
}

/// An unvalidated options record, mapping option keys to values.
///
/// Keys keep their insertion order so that validation reports the first
/// offending key the caller wrote.
///
/// ```rust
/// use plumbum_options::RawOptions;
///
/// let options = RawOptions::new()
///     .with("surface form", "differential")
///     .with("side reactions", ["oxygen"])
///     .with("dimensionality", 1);
///
/// assert_eq!(options.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions(IndexMap<String, OptionValue>);

impl RawOptions {
    /// Creates an empty options record. Every option takes its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the record is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for RawOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_display_like_the_record_they_came_from() {
        assert_eq!(OptionValue::from(true).to_string(), "true");
        assert_eq!(OptionValue::from(2).to_string(), "2");
        assert_eq!(OptionValue::from("lumped").to_string(), "\"lumped\"");
        assert_eq!(
            OptionValue::from(["oxygen", "hydrogen"]).to_string(),
            "[\"oxygen\", \"hydrogen\"]"
        );
        assert_eq!(
            OptionValue::from([("transverse", "full")]).to_string(),
            "{\"transverse\": \"full\"}"
        );
    }

    #[test]
    fn later_inserts_replace_earlier_ones() {
        let mut options = RawOptions::new().with("thermal", "isothermal");

        let previous = options.insert("thermal", "lumped");

        assert_eq!(previous, Some(OptionValue::from("isothermal")));
        assert_eq!(options.get("thermal"), Some(&OptionValue::from("lumped")));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn collects_from_pairs_in_order() {
        let options: RawOptions = [("dimensionality", 1), ("thermal", 0)].into_iter().collect();

        let keys: Vec<_> = options.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["dimensionality", "thermal"]);
    }
}

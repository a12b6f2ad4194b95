//! Flattening of typed request parameters into form/query pairs.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// Date format the service expects for every date parameter.
const DATE_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// Locale-invariant conversion of a value into its wire string.
pub trait ParamValue {
    /// Render the value as sent to the service.
    fn to_param(&self) -> String;
}

impl<T: ParamValue + ?Sized> ParamValue for &T {
    fn to_param(&self) -> String {
        (**self).to_param()
    }
}

impl ParamValue for str {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl ParamValue for bool {
    fn to_param(&self) -> String {
        if *self { "True" } else { "False" }.to_string()
    }
}

macro_rules! display_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamValue for $ty {
                fn to_param(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_param!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl ParamValue for NaiveDateTime {
    fn to_param(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }
}

impl ParamValue for DateTime<Utc> {
    fn to_param(&self) -> String {
        self.naive_utc().to_param()
    }
}

/// Implements [`ParamValue`] for enums that render their variant name via `Display`.
macro_rules! enum_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::params::ParamValue for $ty {
                fn to_param(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

pub(crate) use enum_param;

/// Ordered multi-map of request parameters.
///
/// A key may appear several times. Serializes as a sequence of pairs, which
/// is what both `reqwest::RequestBuilder::form` and `query` accept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterMap {
    entries: Vec<(String, String)>,
}

impl ParameterMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter that is always sent.
    pub fn param(mut self, key: impl Into<String>, value: impl ParamValue) -> Self {
        self.entries.push((key.into(), value.to_param()));
        self
    }

    /// Add a parameter only when the caller supplied it.
    pub fn opt<V: ParamValue>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Add a sequence as a single comma-joined value.
    pub fn joined<I>(self, key: impl Into<String>, values: Option<I>) -> Self
    where
        I: IntoIterator,
        I::Item: ParamValue,
    {
        match values {
            Some(values) => {
                let joined = values
                    .into_iter()
                    .map(|v| v.to_param())
                    .collect::<Vec<_>>()
                    .join(",");
                self.param(key, joined)
            }
            None => self,
        }
    }

    /// Add a sequence as one entry per element, in order, under the same key.
    pub fn repeated<I>(mut self, key: impl Into<String>, values: Option<I>) -> Self
    where
        I: IntoIterator,
        I::Item: ParamValue,
    {
        if let Some(values) = values {
            let key = key.into();
            for value in values {
                self.entries.push((key.clone(), value.to_param()));
            }
        }
        self
    }

    /// Add each mapping entry under `<prefix>_<key>`.
    pub fn prefixed<I, K, V>(mut self, prefix: &str, values: Option<I>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ParamValue,
    {
        if let Some(values) = values {
            for (key, value) in values {
                self.entries
                    .push((format!("{prefix}_{}", key.as_ref()), value.to_param()));
            }
        }
        self
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value stored under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns `true` if at least one entry uses `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of entries, counting repeated keys separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::Formatter;

/// Value written in place of a missing value by the upstream spreadsheet export.
pub const NOT_A_NUMBER: &str = "NaN";

/// A text field of a member record that may be missing.
///
/// Upstream data is loosely typed: a field can be missing, `null`, empty, blank,
/// a number, or the literal `"NaN"`. All of those are folded into either a present
/// text or an absent value once, when the record is read.
/// A present value is kept verbatim, without trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptionalText(Option<String>);

impl OptionalText {
    pub fn new(value: Option<String>) -> Self {
        Self(value.filter(|value| !is_blank(value)))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Text to display, or `default` when absent.
    pub fn or<'a>(&'a self, default: &'a str) -> &'a str {
        self.get().unwrap_or(default)
    }
}

impl From<&str> for OptionalText {
    fn from(value: &str) -> Self {
        Self::new(Some(value.to_owned()))
    }
}

impl From<Option<&str>> for OptionalText {
    fn from(value: Option<&str>) -> Self {
        Self::new(value.map(str::to_owned))
    }
}

fn is_blank(value: &str) -> bool {
    value == NOT_A_NUMBER || value.trim().is_empty()
}

/// Numbers coming from spreadsheet columns are floats when the column has holes.
/// `2015.0` is displayed as `2015`, like a browser would.
fn float_to_text(value: f64) -> Option<String> {
    if !value.is_finite() {
        None
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        Some(format!("{}", value as i64))
    } else {
        Some(format!("{value}"))
    }
}

struct OptionalTextVisitor;

impl<'de> Visitor<'de> for OptionalTextVisitor {
    type Value = OptionalText;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a string, a number, a boolean or null")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(OptionalText::new(Some(value.to_string())))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(OptionalText::new(Some(value.to_string())))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(OptionalText::new(Some(value.to_string())))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(OptionalText::new(float_to_text(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(OptionalText::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(OptionalText::new(Some(value)))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionalText::absent())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionalText::absent())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OptionalTextVisitor)
    }
}

impl<'de> Deserialize<'de> for OptionalText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OptionalTextVisitor)
    }
}

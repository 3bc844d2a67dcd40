use crate::errors::Error;
use crate::intervals::Interval;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::ops::Range;

impl From<f64> for Interval {
    /// A bare number is a degenerate interval; a non-finite one is
    /// unbounded.
    fn from(value: f64) -> Self {
        Interval::single(value)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((a, b): (f64, f64)) -> Self {
        Interval::new(a, b)
    }
}

impl From<[f64; 2]> for Interval {
    fn from([a, b]: [f64; 2]) -> Self {
        Interval::new(a, b)
    }
}

impl TryFrom<&[f64]> for Interval {
    type Error = Error;

    fn try_from(bounds: &[f64]) -> Result<Self, Error> {
        match bounds {
            [a, b] => Ok(Interval::new(*a, *b)),
            other => Err(Error::InvalidArity(other.len())),
        }
    }
}

impl TryFrom<Vec<f64>> for Interval {
    type Error = Error;

    fn try_from(bounds: Vec<f64>) -> Result<Self, Error> {
        Interval::try_from(bounds.as_slice())
    }
}

impl TryFrom<&str> for Interval {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self, Error> {
        text.parse()
    }
}

impl Interval {
    /// The consecutive integers from `lower` (inclusive) to `upper`
    /// (exclusive).  Fails unless both bounds are finite integers.
    pub fn to_range(&self) -> Result<Range<i64>, Error> {
        let (lower, upper) = self.bounds();
        if !self.is_finite() || lower.fract() != 0.0 || upper.fract() != 0.0 {
            return Err(Error::NonIntegerBounds(*self));
        }
        Ok(lower as i64..upper as i64)
    }

    /// Materializes [`Interval::to_range`] into a set of integers.  The
    /// caller is responsible for keeping the span reasonable.
    pub fn to_set(&self) -> Result<BTreeSet<i64>, Error> {
        Ok(self.to_range()?.collect())
    }

    /// The structured `{"lower": .., "upper": ..}` export.  An infinite
    /// bound is `null`, and reads back as an unbounded side.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "lower": finite_or_none(self.lower()),
            "upper": finite_or_none(self.upper()),
        })
    }
}

fn finite_or_none(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Interval", 2)?;
        state.serialize_field("lower", &finite_or_none(self.lower()))?;
        state.serialize_field("upper", &finite_or_none(self.upper()))?;
        state.end()
    }
}

/// The wire shape: either bound may be null or missing.
#[derive(Deserialize)]
struct RawBounds {
    #[serde(default)]
    lower: Option<f64>,
    #[serde(default)]
    upper: Option<f64>,
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBounds::deserialize(deserializer)?;
        Ok(Interval::from_bounds(raw.lower, raw.upper))
    }
}

use crate::errors::Error;
use std::hash::{Hash, Hasher};

/// A closed interval `[lower, upper]` over `f64`.
///
/// The bounds are always ordered (`lower <= upper`), never NaN, and may be
/// infinite to represent an open side.  Equality is structural and the type
/// is hashable, so intervals can serve as set or map keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

/// Collapses `-0.0` to `0.0` so that equal bounds also hash equally.
fn canonical(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl Interval {
    /// The interval containing every value (`[-inf, +inf]`).
    pub fn unbounded() -> Self {
        Interval {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// An interval holding a single point (`[v, v]`).
    ///
    /// A NaN or infinite value carries no boundary information and yields
    /// the unbounded interval instead.
    pub fn single(value: f64) -> Self {
        if value.is_finite() {
            Self::from_raw(value, value)
        } else {
            Self::unbounded()
        }
    }

    /// Builds `[a, b]`.  Out-of-order pairs are silently swapped:
    ///
    /// ```
    /// use interval_arith::Interval;
    /// assert_eq!(Interval::new(5.0, 0.0), Interval::new(0.0, 5.0));
    /// ```
    pub fn new(a: f64, b: f64) -> Self {
        Self::from_raw(a, b)
    }

    /// Builds an interval from optional bounds; a missing bound is the
    /// corresponding infinity.
    pub fn from_bounds(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self::from_raw(
            lower.unwrap_or(f64::NEG_INFINITY),
            upper.unwrap_or(f64::INFINITY),
        )
    }

    /// Builds an interval from an iterator that must yield exactly two
    /// bounds.
    pub fn try_from_iter<I>(bounds: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut iter = bounds.into_iter();
        match (iter.next(), iter.next()) {
            (Some(a), Some(b)) => match iter.count() {
                0 => Ok(Self::new(a, b)),
                extra => Err(Error::InvalidArity(2 + extra)),
            },
            (Some(_), None) => Err(Error::InvalidArity(1)),
            (None, Some(_)) | (None, None) => Err(Error::InvalidArity(0)),
        }
    }

    /// The single normalization path every constructor and operation goes
    /// through: a NaN bound collapses to its slot's infinity, `-0.0` is
    /// canonicalized, and the pair is ordered.
    pub(crate) fn from_raw(lower: f64, upper: f64) -> Self {
        let mut lower = if lower.is_nan() {
            f64::NEG_INFINITY
        } else {
            canonical(lower)
        };
        let mut upper = if upper.is_nan() {
            f64::INFINITY
        } else {
            canonical(upper)
        };
        if lower > upper {
            std::mem::swap(&mut lower, &mut upper);
        }
        Interval { lower, upper }
    }

    /// The lower bound (`-inf` when the left side is open).
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The upper bound (`+inf` when the right side is open).
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Both bounds as a pair.
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Replaces the lower bound, re-ordering if needed.
    pub fn with_lower(&self, lower: f64) -> Self {
        Self::from_raw(lower, self.upper)
    }

    /// Replaces the upper bound, re-ordering if needed.
    pub fn with_upper(&self, upper: f64) -> Self {
        Self::from_raw(self.lower, upper)
    }

    /// True when both bounds are finite.  Downstream code uses this as the
    /// "is this interval actionable" test: unbounded intervals carry no
    /// usable width.
    pub fn is_finite(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// True when both bounds are infinite.
    pub fn is_infinite(&self) -> bool {
        self.lower.is_infinite() && self.upper.is_infinite()
    }

    /// True if the lower bound is infinite.
    pub fn lower_unbounded(&self) -> bool {
        self.lower.is_infinite()
    }

    /// True if the upper bound is infinite.
    pub fn upper_unbounded(&self) -> bool {
        self.upper.is_infinite()
    }

    /// True if self is of the form `[A, A]` (a single point).
    pub fn is_single(&self) -> bool {
        self.lower == self.upper
    }

    /// The width of the interval rounded up to an integer count.  Saturates
    /// for infinite spans.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        (self.upper - self.lower).ceil() as usize
    }

    /// The exact width `upper - lower`.
    pub fn true_len(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether the two intervals have no point in common.  Checked in both
    /// directions, so the operand order does not matter.
    pub fn is_disjoint(&self, other: impl Into<Interval>) -> bool {
        let other = other.into();
        self.upper < other.lower || other.upper < self.lower
    }

    /// Whether self contains every value of `other` (and possibly more).
    pub fn is_superset(&self, other: impl Into<Interval>) -> bool {
        let other = other.into();
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Whether every value of self is contained in `other`.
    pub fn is_subset(&self, other: impl Into<Interval>) -> bool {
        let other = other.into();
        other.lower <= self.lower && self.upper <= other.upper
    }

    /// Whether the item (a number, pair or interval) lies entirely within
    /// self.
    pub fn contains(&self, item: impl Into<Interval>) -> bool {
        self.is_superset(item)
    }

    /// The interval `[max(lowers), min(uppers)]`.
    ///
    /// For disjoint operands the raw pair comes out inverted and bound
    /// ordering turns it into the gap between the two intervals; use
    /// [`Interval::try_intersection`] to fail instead.
    pub fn intersection(&self, other: impl Into<Interval>) -> Interval {
        let other = other.into();
        Self::from_raw(self.lower.max(other.lower), self.upper.min(other.upper))
    }

    /// Like [`Interval::intersection`], but disjoint operands are an
    /// [`Error::IncompatibleRange`].
    pub fn try_intersection(
        &self,
        other: impl Into<Interval>,
    ) -> Result<Interval, Error> {
        let other = other.into();
        if self.is_disjoint(other) {
            return Err(Error::IncompatibleRange(*self, other));
        }
        Ok(self.intersection(other))
    }

    /// The convex hull `[min(lowers), max(uppers)]`: the smallest interval
    /// containing both operands, even when they are disjoint.  This widens
    /// rather than computing a true union of two separated ranges.
    pub fn union(&self, other: impl Into<Interval>) -> Interval {
        let other = other.into();
        Self::from_raw(self.lower.min(other.lower), self.upper.max(other.upper))
    }

    /// Like [`Interval::union`], but disjoint operands are an
    /// [`Error::IncompatibleRange`].
    pub fn try_union(&self, other: impl Into<Interval>) -> Result<Interval, Error> {
        let other = other.into();
        if self.is_disjoint(other) {
            return Err(Error::IncompatibleRange(*self, other));
        }
        Ok(self.union(other))
    }

    /// Whether every value in self is strictly less than (<) every value in
    /// `other`.  Overlapping intervals are neither left nor right of each
    /// other.
    pub fn strictly_left_of(&self, other: impl Into<Interval>) -> bool {
        self.upper < other.into().lower
    }

    /// Whether every value in self is less than (<=) every value in `other`.
    pub fn left_of(&self, other: impl Into<Interval>) -> bool {
        self.upper <= other.into().lower
    }

    /// Whether every value in self is strictly greater than (>) every value
    /// in `other`.
    pub fn strictly_right_of(&self, other: impl Into<Interval>) -> bool {
        self.lower > other.into().upper
    }

    /// Whether every value in self is greater than (>=) every value in
    /// `other`.
    pub fn right_of(&self, other: impl Into<Interval>) -> bool {
        self.lower >= other.into().upper
    }
}

impl Default for Interval {
    /// Returns the unbounded interval.
    fn default() -> Self {
        Self::unbounded()
    }
}

// Bounds are never NaN, so equality is total.
impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower.to_bits().hash(state);
        self.upper.to_bits().hash(state);
    }
}

impl std::fmt::Display for Interval {
    /// The canonical display form `[lower, upper]`, with infinite bounds
    /// rendered as `-inf` and `inf`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

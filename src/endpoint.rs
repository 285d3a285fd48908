use core::fmt::{self, Display};

/// One end of a [`Range`](crate::Range): either a concrete value or
/// one of the two unbounded sentinels.
///
/// The variants are declared in ascending order, so the derived
/// ordering puts `Min` below every value and `Max` above every value,
/// while `Min == Min` and `Max == Max`. There is exactly one `Min`
/// and one `Max` per value type, so comparing an endpoint against
/// [`Endpoint::Min`] is how "unbounded below" is detected.
///
/// Sentinels absorb arithmetic: shifting `Min` or `Max` by any
/// distance leaves it unchanged, so a range bounded by one stays
/// unbounded on that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint<T> {
    /// Negative infinity.
    Min,
    /// A concrete, bounded endpoint.
    Value(T),
    /// Positive infinity.
    Max,
}

impl<T> Endpoint<T> {
    /// Returns `true` for `Min` and `Max`.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Endpoint::Value(_))
    }

    /// Returns the concrete value, if this is not a sentinel.
    pub fn value(&self) -> Option<&T> {
        match self {
            Endpoint::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Like [`value`](Endpoint::value), taking ownership.
    pub fn into_value(self) -> Option<T> {
        match self {
            Endpoint::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Endpoint<&T> {
        match self {
            Endpoint::Min => Endpoint::Min,
            Endpoint::Value(value) => Endpoint::Value(value),
            Endpoint::Max => Endpoint::Max,
        }
    }

    /// Maps the concrete value, leaving sentinels in place.
    pub fn map<U, F>(self, f: F) -> Endpoint<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Endpoint::Min => Endpoint::Min,
            Endpoint::Value(value) => Endpoint::Value(f(value)),
            Endpoint::Max => Endpoint::Max,
        }
    }
}

impl<T: Display> Display for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Min => f.write_str("-inf"),
            Endpoint::Value(value) => value.fmt(f),
            Endpoint::Max => f.write_str("+inf"),
        }
    }
}

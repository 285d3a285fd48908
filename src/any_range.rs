use core::cmp::Ordering;
use core::fmt::{self, Display};

use crate::error::{Error, Result};
use crate::kind::{Date, Datetime, Integer, Kind};
use crate::range::Range;

/// A range of one of the built-in kinds, with the kind known only at
/// runtime.
///
/// Ranges of different kinds are never equal and cannot be ordered
/// against each other: `==` is `false`, `partial_cmp` is `None`, and
/// the fallible [`try_cmp`](AnyRange::try_cmp) reports
/// [`Error::IncomparableKinds`].
#[derive(Clone, Copy, Debug)]
pub enum AnyRange {
    Integer(Range<Integer<i64>>),
    Date(Range<Date>),
    Datetime(Range<Datetime>),
}

impl AnyRange {
    /// Name of the kind of the wrapped range.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AnyRange::Integer(_) => Integer::<i64>::NAME,
            AnyRange::Date(_) => Date::NAME,
            AnyRange::Datetime(_) => Datetime::NAME,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnyRange::Integer(range) => range.is_empty(),
            AnyRange::Date(range) => range.is_empty(),
            AnyRange::Datetime(range) => range.is_empty(),
        }
    }

    /// Compares two ranges of the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncomparableKinds`] if the kinds differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (AnyRange::Integer(a), AnyRange::Integer(b)) => Ok(a.compare(b)),
            (AnyRange::Date(a), AnyRange::Date(b)) => Ok(a.compare(b)),
            (AnyRange::Datetime(a), AnyRange::Datetime(b)) => Ok(a.compare(b)),
            _ => {
                log::debug!(
                    "refusing to compare {} range with {} range",
                    self.kind_name(),
                    other.kind_name()
                );
                Err(Error::IncomparableKinds {
                    left: self.kind_name(),
                    right: other.kind_name(),
                })
            }
        }
    }

    /// Tolerant equality for two ranges of the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncomparableKinds`] if the kinds differ.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.try_cmp(other).map(|ordering| ordering == Ordering::Equal)
    }

    /// Returns `true` if `self` sorts strictly before `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncomparableKinds`] if the kinds differ.
    pub fn try_lt(&self, other: &Self) -> Result<bool> {
        self.try_cmp(other).map(|ordering| ordering == Ordering::Less)
    }
}

impl PartialEq for AnyRange {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl PartialOrd for AnyRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Display for AnyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyRange::Integer(range) => range.fmt(f),
            AnyRange::Date(range) => range.fmt(f),
            AnyRange::Datetime(range) => range.fmt(f),
        }
    }
}

impl From<Range<Integer<i64>>> for AnyRange {
    fn from(range: Range<Integer<i64>>) -> Self {
        AnyRange::Integer(range)
    }
}

impl From<Range<Date>> for AnyRange {
    fn from(range: Range<Date>) -> Self {
        AnyRange::Date(range)
    }
}

impl From<Range<Datetime>> for AnyRange {
    fn from(range: Range<Datetime>) -> Self {
        AnyRange::Datetime(range)
    }
}

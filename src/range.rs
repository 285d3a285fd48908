use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;

use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::kind::{Date, Kind, ToDate};


/// An interval between two endpoints of kind `K`, closed on both ends
/// up to the kind's sigma.
///
/// Either endpoint may be a sentinel ([`Endpoint::Min`] or
/// [`Endpoint::Max`]), making the range unbounded on that side.
/// `start <= end` always holds; constructors reject anything else.
///
/// Equality and ordering are tolerant: endpoints closer together than
/// [`Kind::sigma`] are considered the same. That relation is not
/// transitive for every kind, so `Range` implements `PartialEq` and
/// `PartialOrd` only.
pub struct Range<K: Kind> {
    start: Endpoint<K::Value>,
    end: Endpoint<K::Value>,
    kind: PhantomData<fn() -> K>,
}

impl<K: Kind> Range<K> {
    /// Makes a new bounded range from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end`.
    ///
    /// ```rust
    /// use fuzzyrange::{Error, IntegerRange};
    ///
    /// assert!(IntegerRange::new(1, 2).is_ok());
    /// assert!(matches!(IntegerRange::new(2, 1), Err(Error::InvalidRange { .. })));
    /// ```
    pub fn new(start: K::Value, end: K::Value) -> Result<Self> {
        Self::from_endpoints(Endpoint::Value(start), Endpoint::Value(end))
    }

    /// Makes a new range from endpoints which may be sentinels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn from_endpoints(start: Endpoint<K::Value>, end: Endpoint<K::Value>) -> Result<Self> {
        if start > end {
            log::trace!(
                "rejecting {} range {}..{}",
                K::NAME,
                describe(&start),
                describe(&end)
            );
            return Err(Error::InvalidRange {
                kind: K::NAME,
                start: describe(&start),
                end: describe(&end),
            });
        }
        Ok(Self::from_ordered(start, end))
    }

    /// Caller guarantees `start <= end`.
    pub(crate) fn from_ordered(start: Endpoint<K::Value>, end: Endpoint<K::Value>) -> Self {
        debug_assert!(start <= end);
        Range {
            start,
            end,
            kind: PhantomData,
        }
    }

    /// The range from negative infinity up to and including `end`.
    pub fn up_to(end: K::Value) -> Self {
        Self::from_ordered(Endpoint::Min, Endpoint::Value(end))
    }

    /// The range from `start` (inclusive) to positive infinity.
    pub fn starting_from(start: K::Value) -> Self {
        Self::from_ordered(Endpoint::Value(start), Endpoint::Max)
    }

    /// The range covering every value of the kind.
    pub fn unbounded() -> Self {
        Self::from_ordered(Endpoint::Min, Endpoint::Max)
    }

    /// The canonical empty range, `Min..Min`.
    ///
    /// Other ranges may be empty too (any range whose endpoints lie
    /// within sigma of each other), but this is the one returned by
    /// [`gap`](Range::gap) when there is nothing between two ranges.
    pub fn empty() -> Self {
        Self::from_ordered(Endpoint::Min, Endpoint::Min)
    }

    /// The negative-infinity sentinel of this kind.
    pub fn min() -> Endpoint<K::Value> {
        Endpoint::Min
    }

    /// The positive-infinity sentinel of this kind.
    pub fn max() -> Endpoint<K::Value> {
        Endpoint::Max
    }

    /// The lower endpoint, which may be [`Endpoint::Min`].
    pub fn start(&self) -> &Endpoint<K::Value> {
        &self.start
    }

    /// The upper endpoint, which may be [`Endpoint::Max`].
    pub fn end(&self) -> &Endpoint<K::Value> {
        &self.end
    }

    /// Consumes the range, returning `(start, end)`.
    pub fn into_endpoints(self) -> (Endpoint<K::Value>, Endpoint<K::Value>) {
        (self.start, self.end)
    }

    /// Returns `true` unless the range starts at [`Endpoint::Min`].
    pub fn is_bounded_below(&self) -> bool {
        self.start != Endpoint::Min
    }

    /// Returns `true` unless the range ends at [`Endpoint::Max`].
    pub fn is_bounded_above(&self) -> bool {
        self.end != Endpoint::Max
    }

    /// Returns `true` if neither endpoint is a sentinel.
    pub fn is_bounded(&self) -> bool {
        !self.start.is_sentinel() && !self.end.is_sentinel()
    }

    /// Whether `a` and `b` are at least sigma apart.
    ///
    /// A sentinel only matches the same sentinel. A distance that
    /// cannot be represented counts as a difference.
    fn differs(a: &Endpoint<K::Value>, b: &Endpoint<K::Value>) -> bool {
        match (a, b) {
            (Endpoint::Value(a), Endpoint::Value(b)) => {
                let (low, high) = if a <= b { (a, b) } else { (b, a) };
                K::distance(low, high).map_or(true, |distance| distance >= K::sigma())
            }
            (a, b) => a != b,
        }
    }

    /// Returns `true` if the endpoints lie within sigma of each other.
    pub fn is_empty(&self) -> bool {
        !Self::differs(&self.start, &self.end)
    }

    // `start - sigma < point`, decided by distance so that nothing is
    // shifted past the edge of the value type.
    fn above_lower(&self, point: &K::Value) -> bool {
        match &self.start {
            Endpoint::Min => true,
            Endpoint::Max => false,
            Endpoint::Value(start) => {
                point >= start || K::distance(point, start).map_or(false, |d| d < K::sigma())
            }
        }
    }

    // `point < end + sigma`, likewise.
    fn below_upper(&self, point: &K::Value) -> bool {
        match &self.end {
            Endpoint::Min => false,
            Endpoint::Max => true,
            Endpoint::Value(end) => {
                point <= end || K::distance(end, point).map_or(false, |d| d < K::sigma())
            }
        }
    }

    // Open comparison against the sigma-widened endpoints, so that
    // the endpoints themselves (give or take some drift) are covered.
    // Sentinels are never covered.
    fn covers(&self, point: Endpoint<&K::Value>) -> bool {
        match point {
            Endpoint::Value(point) => {
                !self.is_empty() && self.above_lower(point) && self.below_upper(point)
            }
            _ => false,
        }
    }

    // Like `covers`, for `point - sigma`. The lowered point is never
    // built: a value within sigma of the bottom of its type still has
    // a real value below it, which `Min` would not stand in for.
    fn covers_lowered(&self, point: &Endpoint<K::Value>) -> bool {
        let point = match point {
            Endpoint::Value(point) if !self.is_empty() => point,
            _ => return false,
        };
        // start - sigma < point - sigma
        let above = match &self.start {
            Endpoint::Min => true,
            Endpoint::Max => false,
            Endpoint::Value(start) => start < point,
        };
        above
            && match K::retreat(point, &K::sigma()) {
                Some(lowered) => self.below_upper(&lowered),
                None => self.end != Endpoint::Min,
            }
    }

    /// Returns `true` if `point` lies within the range.
    ///
    /// Both endpoints are included. Empty ranges contain nothing.
    ///
    /// ```rust
    /// use fuzzyrange::IntegerRange;
    ///
    /// let range = IntegerRange::new(1, 2).unwrap();
    /// assert!(!range.contains(&0));
    /// assert!(range.contains(&1));
    /// assert!(range.contains(&2));
    /// assert!(!range.contains(&3));
    /// ```
    pub fn contains(&self, point: &K::Value) -> bool {
        self.covers(Endpoint::Value(point))
    }

    /// Like [`contains`](Range::contains), for an endpoint which may be
    /// a sentinel. A sentinel is never strictly inside a range, so
    /// this is `false` for `Min` and `Max`.
    pub fn contains_endpoint(&self, point: &Endpoint<K::Value>) -> bool {
        self.covers(point.as_ref())
    }

    /// Returns `true` if both endpoints of a non-empty `other` lie
    /// within this range.
    pub fn includes(&self, other: &Self) -> bool {
        !other.is_empty() && self.covers(other.start.as_ref()) && self.covers(other.end.as_ref())
    }

    /// Returns `true` if this range and `other` share some span.
    ///
    /// Both of this range's endpoints are pulled down by sigma before
    /// being tested against `other`, so the relation is not symmetric
    /// at the boundaries: `0..3` does not overlap `3..5`, but `3..5`
    /// does overlap `0..3`.
    ///
    /// ```rust
    /// use fuzzyrange::Range;
    ///
    /// type Bytes = Range<fuzzyrange::Integer<u8>>;
    ///
    /// // Same answer at the bottom of the value type as anywhere else.
    /// assert!(Bytes::new(5, 10).unwrap().overlaps(&Bytes::up_to(5)));
    /// assert!(Bytes::new(0, 10).unwrap().overlaps(&Bytes::up_to(0)));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        other.covers_lowered(&self.start)
            || other.covers_lowered(&self.end)
            || self.includes(other)
    }

    /// The uncovered span between this range and `other`.
    ///
    /// Returns [`Range::empty`] if the two overlap or touch.
    ///
    /// ```rust
    /// use fuzzyrange::IntegerRange;
    ///
    /// let a = IntegerRange::new(0, 2).unwrap();
    /// let b = IntegerRange::new(4, 5).unwrap();
    /// assert_eq!(a.gap(&b), IntegerRange::new(2, 4).unwrap());
    /// assert_eq!(b.gap(&a), IntegerRange::new(2, 4).unwrap());
    /// ```
    pub fn gap(&self, other: &Self) -> Self {
        if self.overlaps(other) {
            return Self::empty();
        }
        let (lower, higher) = if self < other {
            (self, other)
        } else {
            (other, self)
        };
        // A range reaching past the start of the higher one has nothing
        // uncovered before it, even when the two do not overlap.
        if Self::differs(&lower.end, &higher.start) && lower.end < higher.start {
            log::trace!(
                "gap between {:?} and {:?} is {}..{}",
                lower,
                higher,
                describe(&lower.end),
                describe(&higher.start)
            );
            Self::from_ordered(lower.end.clone(), higher.start.clone())
        } else {
            Self::empty()
        }
    }

    /// Returns `true` if the two ranges neither overlap nor leave a gap
    /// between them.
    pub fn abuts(&self, other: &Self) -> bool {
        !self.overlaps(other) && self.gap(other).is_empty()
    }

    /// `end - start`, or [`Endpoint::Max`] if the range is unbounded
    /// on either side (or the distance is not representable).
    pub fn duration(&self) -> Endpoint<K::Distance> {
        match (self.start.value(), self.end.value()) {
            (Some(start), Some(end)) => {
                K::distance(start, end).map_or(Endpoint::Max, Endpoint::Value)
            }
            _ => Endpoint::Max,
        }
    }

    /// The total order used by `PartialOrd`: by start, then by end,
    /// each compared with sigma tolerance.
    pub fn compare(&self, other: &Self) -> Ordering {
        if Self::differs(&self.start, &other.start) {
            self.start.cmp(&other.start)
        } else if Self::differs(&self.end, &other.end) {
            self.end.cmp(&other.end)
        } else {
            Ordering::Equal
        }
    }
}

impl Range<Date> {
    /// Makes a date range, truncating datetime endpoints to their
    /// calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the truncated `start` is
    /// after the truncated `end`.
    pub fn truncating<S, E>(start: S, end: E) -> Result<Self>
    where
        S: ToDate,
        E: ToDate,
    {
        Self::new(start.to_date(), end.to_date())
    }
}

fn describe<T: Debug>(endpoint: &Endpoint<T>) -> String {
    match endpoint {
        Endpoint::Min => "-inf".to_owned(),
        Endpoint::Value(value) => format!("{:?}", value),
        Endpoint::Max => "+inf".to_owned(),
    }
}

impl<K: Kind> Clone for Range<K> {
    fn clone(&self) -> Self {
        Range {
            start: self.start.clone(),
            end: self.end.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: Kind> Copy for Range<K> where K::Value: Copy {}

impl<K: Kind> PartialEq for Range<K> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<K: Kind> PartialOrd for Range<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<K: Kind> Debug for Range<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}..{})",
            K::NAME,
            describe(&self.start),
            describe(&self.end)
        )
    }
}

impl<K> Display for Range<K>
where
    K: Kind,
    K::Value: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("[]")
        } else {
            write!(f, "{} - {}", self.start, self.end)
        }
    }
}

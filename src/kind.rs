use core::fmt::Debug;
use core::marker::PhantomData;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use num_traits::PrimInt;

/// The value domain of a [`Range`](crate::Range).
///
/// A kind ties together an ordered endpoint type, the type of the
/// distance between two endpoints, and a _sigma_: the smallest
/// distance that counts as a real difference. Any two values closer
/// than sigma are treated as equal by every range operation, which is
/// how ranges over imprecise representations stay well behaved.
///
/// Kinds are zero-sized markers; nothing is ever instantiated. To add
/// your own, implement this trait on an empty type:
///
/// ```rust
/// use fuzzyrange::{Kind, Range};
///
/// /// Lengths in micrometres, where anything under a tenth of a millimetre is noise.
/// struct Micrometres;
///
/// impl Kind for Micrometres {
///     type Value = i64;
///     type Distance = i64;
///     const NAME: &'static str = "micrometres";
///
///     fn sigma() -> i64 {
///         100
///     }
///
///     fn distance(from: &i64, to: &i64) -> Option<i64> {
///         to.checked_sub(*from)
///     }
///
///     fn retreat(value: &i64, by: &i64) -> Option<i64> {
///         value.checked_sub(*by)
///     }
///
///     fn advance(value: &i64, by: &i64) -> Option<i64> {
///         value.checked_add(*by)
///     }
/// }
///
/// let range = Range::<Micrometres>::new(0, 1_000).unwrap();
/// assert!(range.contains(&1_050));
/// assert!(!range.contains(&1_100));
/// assert!(Range::<Micrometres>::new(0, 99).unwrap().is_empty());
/// ```
pub trait Kind {
    /// Endpoint type.
    type Value: Ord + Clone + Debug;
    /// Result of subtracting one endpoint from another.
    type Distance: Ord + Clone + Debug;

    /// Human-readable name of the kind, used in errors and `Debug` output.
    const NAME: &'static str;

    /// Smallest distance treated as a real difference.
    fn sigma() -> Self::Distance;

    /// `to - from`, or `None` if that is not representable.
    ///
    /// Only ever called with `from <= to`.
    fn distance(from: &Self::Value, to: &Self::Value) -> Option<Self::Distance>;

    /// `value - by`, or `None` on underflow.
    fn retreat(value: &Self::Value, by: &Self::Distance) -> Option<Self::Value>;

    /// `value + by`, or `None` on overflow.
    fn advance(value: &Self::Value, by: &Self::Distance) -> Option<Self::Value>;
}

/// Integers of primitive type `T`, with a sigma of one.
///
/// With a sigma of one the tolerant comparisons coincide with exact
/// ones, and the closed range `[start, end]` behaves as expected.
pub struct Integer<T>(PhantomData<fn() -> T>);

impl<T> Kind for Integer<T>
where
    T: PrimInt + Debug,
{
    type Value = T;
    type Distance = T;
    const NAME: &'static str = "integer";

    fn sigma() -> T {
        T::one()
    }

    fn distance(from: &T, to: &T) -> Option<T> {
        to.checked_sub(from)
    }

    fn retreat(value: &T, by: &T) -> Option<T> {
        value.checked_sub(by)
    }

    fn advance(value: &T, by: &T) -> Option<T> {
        value.checked_add(by)
    }
}

/// Calendar dates, with a sigma of one day.
///
/// Use [`Range::truncating`](crate::Range::truncating) to build a
/// date range from datetimes; the time of day is discarded.
pub struct Date;

impl Kind for Date {
    type Value = NaiveDate;
    type Distance = TimeDelta;
    const NAME: &'static str = "date";

    fn sigma() -> TimeDelta {
        TimeDelta::days(1)
    }

    fn distance(from: &NaiveDate, to: &NaiveDate) -> Option<TimeDelta> {
        Some(to.signed_duration_since(*from))
    }

    fn retreat(value: &NaiveDate, by: &TimeDelta) -> Option<NaiveDate> {
        value.checked_sub_signed(*by)
    }

    fn advance(value: &NaiveDate, by: &TimeDelta) -> Option<NaiveDate> {
        value.checked_add_signed(*by)
    }
}

/// Naive (zone-less) datetimes, with a sigma of one microsecond.
pub struct Datetime;

impl Kind for Datetime {
    type Value = NaiveDateTime;
    type Distance = TimeDelta;
    const NAME: &'static str = "datetime";

    fn sigma() -> TimeDelta {
        TimeDelta::microseconds(1)
    }

    fn distance(from: &NaiveDateTime, to: &NaiveDateTime) -> Option<TimeDelta> {
        Some(to.signed_duration_since(*from))
    }

    fn retreat(value: &NaiveDateTime, by: &TimeDelta) -> Option<NaiveDateTime> {
        value.checked_sub_signed(*by)
    }

    fn advance(value: &NaiveDateTime, by: &TimeDelta) -> Option<NaiveDateTime> {
        value.checked_add_signed(*by)
    }
}

/// Zoned datetimes, with a sigma of one microsecond.
///
/// Arithmetic is delegated to [`DateTime`], so it happens on the
/// underlying UTC instant; no calendar adjustments are made.
pub struct Timestamp<Tz>(PhantomData<fn() -> Tz>);

impl<Tz: TimeZone> Kind for Timestamp<Tz> {
    type Value = DateTime<Tz>;
    type Distance = TimeDelta;
    const NAME: &'static str = "timestamp";

    fn sigma() -> TimeDelta {
        TimeDelta::microseconds(1)
    }

    fn distance(from: &DateTime<Tz>, to: &DateTime<Tz>) -> Option<TimeDelta> {
        Some(to.clone().signed_duration_since(from))
    }

    fn retreat(value: &DateTime<Tz>, by: &TimeDelta) -> Option<DateTime<Tz>> {
        value.clone().checked_sub_signed(*by)
    }

    fn advance(value: &DateTime<Tz>, by: &TimeDelta) -> Option<DateTime<Tz>> {
        value.clone().checked_add_signed(*by)
    }
}

/// Values that can be truncated to their calendar date.
///
/// Endpoints of a [`Date`] range may be given as any of these; full
/// datetimes lose their time of day before being stored.
pub trait ToDate {
    fn to_date(&self) -> NaiveDate;
}

impl ToDate for NaiveDate {
    fn to_date(&self) -> NaiveDate {
        *self
    }
}

impl ToDate for NaiveDateTime {
    fn to_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> ToDate for DateTime<Tz> {
    fn to_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

/*!
[`Range`] is an interval between two endpoints of some _kind_:
integers, calendar dates, datetimes, or any value domain you define
yourself by implementing [`Kind`].

Ranges answer the usual interval questions: does a range
[contain](Range::contains) a point, does it [include](Range::includes)
another range, do two ranges [overlap](Range::overlaps) or
[abut](Range::abuts), and what is the [gap](Range::gap) between them.


# Sigma

Every kind has a _sigma_: the smallest distance between two values
that counts as a real difference. Endpoints closer together than sigma
are treated as equal, which keeps comparisons stable when values carry
some representational drift (think of datetimes that went through a
lossy conversion somewhere along the way).

Sigma shows up everywhere:

- A range whose endpoints are within sigma of each other is
  [empty](Range::is_empty), and empty ranges contain nothing.
- Ranges are closed on both ends: a point is contained if it lies
  strictly between `start - sigma` and `end + sigma`.
- Two ranges are equal if both pairs of endpoints are within sigma,
  and they are ordered by start, then by end, each compared the same
  tolerant way.

For [`Integer`] kinds sigma is one, so all of the above coincides with
ordinary exact arithmetic.


# Unbounded ranges

An endpoint is an [`Endpoint`]: a value, or one of the two sentinels
[`Endpoint::Min`] and [`Endpoint::Max`]. Sentinels sort below and above
every value respectively, absorb any arithmetic done on them, and are
only ever equal to themselves. [`Range::up_to`] and
[`Range::starting_from`] build ranges that are unbounded on one side;
their [duration](Range::duration) is [`Endpoint::Max`].


# Example: use with Chrono

```rust
use chrono::NaiveDate;
use fuzzyrange::{DateRange, Endpoint};

let jan = |d| NaiveDate::from_ymd_opt(2019, 1, d).unwrap();

let first_shift = DateRange::new(jan(7), jan(13)).unwrap();
let second_shift = DateRange::new(jan(14), jan(20)).unwrap();
let third_shift = DateRange::new(jan(28), jan(31)).unwrap();

assert!(first_shift.contains(&jan(13)));
assert!(!first_shift.overlaps(&second_shift));
assert_eq!(
    second_shift.gap(&third_shift),
    DateRange::new(jan(20), jan(28)).unwrap()
);

let everything_before = DateRange::up_to(jan(20));
assert!(everything_before.includes(&first_shift));
assert_eq!(everything_before.duration(), Endpoint::Max);
```


# Comparing ranges of different kinds

`Range<K>` is generic over its kind, so mixing kinds is a compile
error. When the kind is only known at runtime, wrap ranges in
[`AnyRange`]: ranges of different kinds are never equal, and ordering
them fails with [`Error::IncomparableKinds`].


## Crate features

If you enable the **quickcheck** feature the crate provides
`quickcheck::Arbitrary` implementations for [`Endpoint`] and
[`Range`].

You can enable it in your _Cargo.toml_ file like so:

```toml
[dependencies]
fuzzyrange = { version = "0.1", features = ["quickcheck"] }
```

*/

mod any_range;
mod endpoint;
mod error;
mod kind;
mod range;

#[cfg(feature = "quickcheck")]
mod arbitrary;

pub use any_range::AnyRange;
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use kind::{Date, Datetime, Integer, Kind, Timestamp, ToDate};
pub use range::Range;

/// Ranges over `i64`.
pub type IntegerRange = Range<Integer<i64>>;
/// Ranges over calendar dates.
pub type DateRange = Range<Date>;
/// Ranges over naive datetimes.
pub type DatetimeRange = Range<Datetime>;
/// Ranges over zoned datetimes.
pub type TimestampRange<Tz> = Range<Timestamp<Tz>>;

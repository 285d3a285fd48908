#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::{Arbitrary, Unstructured};
use fuzzyrange::{Endpoint, Range};

type Kind = fuzzyrange::Integer<u8>;

#[derive(Clone, Debug)]
struct Input {
    left: Range<Kind>,
    right: Range<Kind>,
}

fn endpoint(u: &mut Unstructured) -> arbitrary::Result<Endpoint<u8>> {
    // Stay close to the sentinels and to each other; that is where
    // the interesting boundary behaviour lives.
    Ok(match *u.choose(&[0u8, 1, 2, 3, 4])? {
        0 => Endpoint::Min,
        1 => Endpoint::Max,
        _ => Endpoint::Value(*u.choose(&[0, 1, 2, 3, 4, 5, 100, 101, 102, 254, 255])?),
    })
}

fn range(u: &mut Unstructured) -> arbitrary::Result<Range<Kind>> {
    let a = endpoint(u)?;
    let b = endpoint(u)?;
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    Ok(Range::from_endpoints(start, end).expect("endpoints are ordered"))
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self {
            left: range(u)?,
            right: range(u)?,
        })
    }
}

fuzz_target!(|input: Input| {
    let Input { left, right } = input;

    let gap = left.gap(&right);

    // Gaps are either the canonical empty range or a real span.
    if gap.is_empty() {
        assert_eq!(gap, Range::empty());
    } else {
        assert!(!left.overlaps(&right));
        assert!(gap.start() < gap.end());

        // The gap sits strictly between the two ranges.
        let (lower, higher) = if left < right {
            (&left, &right)
        } else {
            (&right, &left)
        };
        assert_eq!(gap.start(), lower.end());
        assert_eq!(gap.end(), higher.start());
        assert!(!left.abuts(&right));
    }

    // Including a non-empty range implies overlapping it.
    if left.includes(&right) {
        assert!(left.overlaps(&right));
    }

    // Empty ranges never take part in inclusion.
    if right.is_empty() {
        assert!(!left.includes(&right));
    }
});

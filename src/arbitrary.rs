use quickcheck::{empty_shrinker, Arbitrary, Gen};

use crate::{Endpoint, Kind, Range};

impl<T: Arbitrary> Arbitrary for Endpoint<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        // Mostly values, with the odd sentinel.
        match u8::arbitrary(g) % 8 {
            0 => Endpoint::Min,
            1 => Endpoint::Max,
            _ => Endpoint::Value(T::arbitrary(g)),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Endpoint::Value(value) => Box::new(value.shrink().map(Endpoint::Value)),
            _ => empty_shrinker(),
        }
    }
}

impl<K> Arbitrary for Range<K>
where
    K: Kind + 'static,
    K::Value: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let a = Endpoint::arbitrary(g);
        let b = Endpoint::arbitrary(g);
        if a <= b {
            Range::from_ordered(a, b)
        } else {
            Range::from_ordered(b, a)
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let (start, end) = self.clone().into_endpoints();
        let shrunk_starts = start.shrink().filter_map({
            let end = end.clone();
            move |start| Range::from_endpoints(start, end.clone()).ok()
        });
        let shrunk_ends = end
            .shrink()
            .filter_map(move |end| Range::from_endpoints(start.clone(), end).ok());
        Box::new(shrunk_starts.chain(shrunk_ends))
    }
}

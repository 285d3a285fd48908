use thiserror::Error;

/// Errors raised when constructing or comparing ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A range was constructed with its start after its end.
    ///
    /// Endpoints are never swapped silently; the caller has to
    /// supply them in order.
    #[error("invalid {kind} range: start {start} is after end {end}")]
    InvalidRange {
        kind: &'static str,
        start: String,
        end: String,
    },

    /// Two ranges over different kinds were compared for order.
    #[error("cannot compare a {left} range with a {right} range")]
    IncomparableKinds {
        left: &'static str,
        right: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

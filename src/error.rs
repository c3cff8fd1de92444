use thiserror::Error;

/// Errors produced while loading points or searching for a tour.
///
/// Generator exhaustion is not represented here: running out of
/// permutations is normal iterator termination (`None`), never a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The search was invoked with zero points; no tour is definable.
    #[error("cannot search for a tour over an empty point set")]
    EmptyPointSet,

    /// A line of a point file did not parse as an `id x y` record.
    #[error("malformed point record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Underlying I/O failure while reading a point file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a [`Error::MalformedRecord`] for the given 1-based line.
    pub fn malformed_record(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

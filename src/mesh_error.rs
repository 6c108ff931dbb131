//! BubbleMeshError: unified error type for bubble-mesh public APIs
//!
//! This error type is used throughout the bubble-mesh library to provide
//! robust, non-panicking error handling for all public APIs. Compilation
//! errors are terminal: a failed run emits no partial entity set, since a
//! broken region invalidates tag accounting for every region after it.

use thiserror::Error;

use crate::entities::tag::EntityKind;

/// Unified error type for bubble-mesh operations.
#[derive(Debug, Error)]
pub enum BubbleMeshError {
    /// Attempted to construct a `Tag` with a zero value (invalid).
    #[error("Tag must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidTag,
    /// A tag cursor would exceed the representable range.
    #[error("{0} tag counter exhausted")]
    AllocatorOverflow(EntityKind),
    /// A ring resolves to fewer than 3 distinct coordinates.
    #[error("region {region}: ring reduces to {distinct} distinct coordinates, need at least 3")]
    DegenerateRing {
        /// Input index of the offending region in the flatten sequence.
        region: usize,
        /// Number of distinct coordinates left after dropping the closing duplicate.
        distinct: usize,
    },
    /// An entity set without physical groups was handed to a writer that requires one.
    #[error("entity set contains no physical groups")]
    EmptyTopology,
    /// Failure while writing a geometry file.
    #[error("geo output error: {0}")]
    Io(#[from] std::io::Error),
}

//! `Tag`: a strong, zero-cost identifier for geometry entities
//!
//! Every geometry entity handed to the meshing kernel (point, line, curve
//! loop, plane surface, physical group, ...) is addressed by a positive
//! integer tag, unique within its own kind. `Tag` wraps a nonzero `u64` to
//! enforce at compile- and runtime that 0 is reserved as an invalid or
//! sentinel value — kernel tag spaces start at 1.
//!
//! This module provides:
//! - A transparent `Tag` newtype around `NonZeroU64` for zero-cost layout
//!   guarantees.
//! - A fallible constructor and accessors.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing, serde) so `Tag` can be used in maps, sets, and printed into
//!   geometry scripts directly.

use std::{fmt, num::NonZeroU64};

use crate::mesh_error::BubbleMeshError;

/// Positive integer identifier for one geometry entity.
///
/// Uniqueness is per entity kind, not across kinds: point 3 and line 3 are
/// unrelated entities.
///
/// # Memory layout
/// This type is `repr(transparent)`, meaning it has the same ABI and
/// alignment as its single field (`NonZeroU64`).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct Tag(NonZeroU64);

impl Tag {
    /// Creates a new `Tag` from a raw `u64` value.
    ///
    /// # Errors
    ///
    /// Returns [`BubbleMeshError::InvalidTag`] if `raw == 0`.
    #[inline]
    pub fn new(raw: u64) -> Result<Self, BubbleMeshError> {
        NonZeroU64::new(raw)
            .map(Tag)
            .ok_or(BubbleMeshError::InvalidTag)
    }

    /// Returns the inner `u64` value of this `Tag`.
    ///
    /// Use it when the raw integer is needed (script output, arithmetic on
    /// tag ranges); prefer to work with `Tag` otherwise for type safety.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Custom `Debug` implementation to display as `Tag(raw_value)`.
impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.get()).finish()
    }
}

/// Custom `Display` implementation to print only the raw integer.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The four entity kinds whose tags are handed out by the allocator.
///
/// Physical-group tags are not allocated; they are derived from the
/// material level of the region that produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Point,
    Line,
    CurveLoop,
    PlaneSurface,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Point => "point",
            EntityKind::Line => "line",
            EntityKind::CurveLoop => "curve loop",
            EntityKind::PlaneSurface => "plane surface",
        };
        write!(f, "{name}")
    }
}

// -----------------------------------------------------------------------------
// Testing and assertions
// -----------------------------------------------------------------------------

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `Tag` has the same size as `u64`.
    use super::*;
    use static_assertions::assert_eq_size;

    // If this fails, our repr(transparent) guarantee is broken!
    assert_eq_size!(Tag, u64);
}

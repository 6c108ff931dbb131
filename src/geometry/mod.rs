//! Planar geometry collaborators: coordinates, rings, polygons.
//!
//! The compiler consumes polygons through this minimal contract: one
//! exterior ring plus zero or more interior rings, each ring an ordered
//! closed sequence of 2-D coordinates. No geometric predicates
//! (intersection, containment) live here; building a valid topology is the
//! caller's job.

pub mod shapes;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A 2-D coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Bit pattern of both components, for exact-identity comparisons.
    pub(crate) fn to_bits(self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One closed ring of coordinates, bounding either the outside (exterior
/// ring) or an excluded area (interior ring) of a polygon.
///
/// Both closing conventions are accepted: the first coordinate may or may
/// not be repeated at the end. [`Ring::open_coords`] normalizes to the open
/// form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    coords: Vec<Coord>,
}

impl Ring {
    /// Creates a ring from a coordinate sequence in traversal order.
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    /// Creates a ring from `(x, y)` tuples.
    pub fn from_tuples<I>(tuples: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(tuples.into_iter().map(Coord::from).collect())
    }

    /// All coordinates as given, including a closing duplicate if present.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Coordinates with the closing duplicate (if present) removed.
    ///
    /// The duplicate is only dropped when the last coordinate is bitwise
    /// equal to the first.
    pub fn open_coords(&self) -> &[Coord] {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) if self.coords.len() > 1 && first.to_bits() == last.to_bits() => {
                &self.coords[..self.coords.len() - 1]
            }
            _ => &self.coords,
        }
    }

    /// Number of distinct coordinate values among [`Ring::open_coords`].
    ///
    /// Distinctness is bitwise, so `-0.0` and `0.0` count as two values and
    /// NaN positions are never collapsed.
    pub fn distinct_count(&self) -> usize {
        self.open_coords()
            .iter()
            .map(|c| c.to_bits())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// The same ring traversed in the opposite direction.
    ///
    /// Useful when a hole boundary must wind against its enclosing ring and
    /// automatic loop correction is not requested.
    pub fn reversed(&self) -> Ring {
        let mut coords: Vec<Coord> = self.open_coords().to_vec();
        coords.reverse();
        Ring::new(coords)
    }
}

/// A polygon: one exterior ring plus zero or more interior (hole) rings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl Polygon {
    pub fn new(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    pub fn interiors(&self) -> &[Ring] {
        &self.interiors
    }
}

impl From<Ring> for Polygon {
    /// A polygon with no holes.
    fn from(exterior: Ring) -> Self {
        Self::new(exterior, Vec::new())
    }
}

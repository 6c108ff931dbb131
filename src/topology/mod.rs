//! Hierarchical bubble topology, reduced to its iteration contract.
//!
//! A [`Topology`] owns an ordered list of bubbles (polygon + material
//! level) and the set of levels that mark void space. The compiler only
//! relies on two things: [`Topology::flatten`], a finite restartable
//! iteration over `(polygon, level)` pairs in insertion order, and
//! [`Topology::holes`], the hole-level set. Nesting, clipping and distance
//! constraints between bubbles are the concern of whatever builds the
//! topology, not of this container.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::geometry::Polygon;

/// One polygon tagged with a material level; the atomic unit the compiler
/// processes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub polygon: Polygon,
    pub level: u32,
}

/// Ordered collection of bubbles plus the hole-level set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    bubbles: Vec<Bubble>,
    holes: BTreeSet<u32>,
}

impl Topology {
    /// Creates a topology whose domain polygon sits at level 0.
    pub fn new(domain: Polygon, holes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            bubbles: vec![Bubble {
                polygon: domain,
                level: 0,
            }],
            holes: holes.into_iter().collect(),
        }
    }

    /// Appends a bubble at `level`.
    pub fn add(&mut self, polygon: Polygon, level: u32) {
        self.bubbles.push(Bubble { polygon, level });
    }

    /// Marks `level` as a hole level.
    pub fn mark_hole(&mut self, level: u32) {
        self.holes.insert(level);
    }

    /// Iterates all `(polygon, level)` pairs in insertion order.
    ///
    /// The iteration is lazy and can be restarted by calling `flatten`
    /// again; the underlying sequence never changes between calls unless
    /// the topology is mutated.
    pub fn flatten(&self) -> impl Iterator<Item = (&Polygon, u32)> + '_ {
        self.bubbles.iter().map(|b| (&b.polygon, b.level))
    }

    /// Levels designated as holes (void, non-fillable regions).
    pub fn holes(&self) -> &BTreeSet<u32> {
        &self.holes
    }

    /// Whether `level` marks void space.
    pub fn is_hole(&self, level: u32) -> bool {
        self.holes.contains(&level)
    }

    /// Number of bubbles, hole levels included.
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}

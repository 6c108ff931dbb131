//! Geometry entity records handed to the meshing kernel.
//!
//! These are the flat, immutable value types a compilation run produces:
//! points, lines, curve loops, plane surfaces and physical groups, plus the
//! 3-D extension records (surface loops, volumes) that share the data model
//! but are not produced by the planar compilation path. Entities are created
//! once, append-only, and cross-reference each other exclusively through
//! [`Tag`]s.

pub mod tag;

use serde::{Deserialize, Serialize};

pub use tag::{EntityKind, Tag};

/// Dimensions allowed for physical groups and meshes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalDimension {
    Two,
    Three,
}

impl PhysicalDimension {
    /// The numeric dimension (2 or 3).
    pub const fn as_u8(self) -> u8 {
        match self {
            PhysicalDimension::Two => 2,
            PhysicalDimension::Three => 3,
        }
    }
}

/// A mesh vertex with characteristic length `lc`.
///
/// `z` is 0 for planar regions.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub lc: f64,
    pub tag: Tag,
}

/// A directed line between two points; one edge of a ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub start_tag: Tag,
    pub end_tag: Tag,
    pub tag: Tag,
}

/// A closed loop of lines.
///
/// The line sequence must trace a single cycle: line `i`'s end point is
/// line `i + 1`'s start point, wrapping at the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveLoop {
    pub line_tags: Vec<Tag>,
    pub tag: Tag,
}

/// A surface delimited by curve loops.
///
/// The first loop is the outer boundary; any further loops denote holes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneSurface {
    pub curve_loop_tags: Vec<Tag>,
    pub tag: Tag,
}

/// A group of entities sharing one material or boundary label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalGroup {
    pub dim: PhysicalDimension,
    pub entity_tags: Vec<Tag>,
    pub tag: Tag,
}

/// A closed loop of surfaces (3-D extension).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceLoop {
    pub surface_tags: Vec<Tag>,
    pub tag: Tag,
}

/// A volume delimited by surface loops (3-D extension).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub surface_loop_tags: Vec<Tag>,
    pub tag: Tag,
}

/// The complete entity set of one compilation run, ordered per kind in
/// creation order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GmshEntities {
    pub points: Vec<Point>,
    pub lines: Vec<Line>,
    pub curve_loops: Vec<CurveLoop>,
    pub plane_surfaces: Vec<PlaneSurface>,
    pub physical_groups: Vec<PhysicalGroup>,
    pub surface_loops: Vec<SurfaceLoop>,
    pub volumes: Vec<Volume>,
}

impl GmshEntities {
    /// Creates an empty entity set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends all entities of `other`, preserving relative order per kind.
    pub fn extend(&mut self, other: GmshEntities) {
        self.points.extend(other.points);
        self.lines.extend(other.lines);
        self.curve_loops.extend(other.curve_loops);
        self.plane_surfaces.extend(other.plane_surfaces);
        self.physical_groups.extend(other.physical_groups);
        self.surface_loops.extend(other.surface_loops);
        self.volumes.extend(other.volumes);
    }

    /// Returns `true` when no entity of any kind is present.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
            && self.lines.is_empty()
            && self.curve_loops.is_empty()
            && self.plane_surfaces.is_empty()
            && self.physical_groups.is_empty()
            && self.surface_loops.is_empty()
            && self.volumes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(raw: u64) -> Tag {
        Tag::new(raw).unwrap()
    }

    #[test]
    fn dimension_values() {
        assert_eq!(PhysicalDimension::Two.as_u8(), 2);
        assert_eq!(PhysicalDimension::Three.as_u8(), 3);
    }

    #[test]
    fn extend_preserves_order() {
        let mut a = GmshEntities::new();
        a.lines.push(Line {
            start_tag: t(1),
            end_tag: t(2),
            tag: t(1),
        });
        let mut b = GmshEntities::new();
        b.lines.push(Line {
            start_tag: t(2),
            end_tag: t(1),
            tag: t(2),
        });
        a.extend(b);
        assert_eq!(a.lines.len(), 2);
        assert_eq!(a.lines[0].tag, t(1));
        assert_eq!(a.lines[1].tag, t(2));
    }

    #[test]
    fn empty_detection() {
        let mut e = GmshEntities::new();
        assert!(e.is_empty());
        e.points.push(Point {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            lc: 0.1,
            tag: t(1),
        });
        assert!(!e.is_empty());
    }

    #[test]
    fn entity_set_json_roundtrip() {
        let mut e = GmshEntities::new();
        e.points.push(Point {
            x: 1.5,
            y: -2.0,
            z: 0.0,
            lc: 0.1,
            tag: t(1),
        });
        e.curve_loops.push(CurveLoop {
            line_tags: vec![t(1), t(2), t(3)],
            tag: t(1),
        });
        e.physical_groups.push(PhysicalGroup {
            dim: PhysicalDimension::Two,
            entity_tags: vec![t(1)],
            tag: t(2),
        });
        let json = serde_json::to_string(&e).unwrap();
        let back: GmshEntities = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}

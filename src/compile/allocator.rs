//! Monotonic tag allocation for one compilation run.
//!
//! Kernel tags start at 1 and must form a contiguous, gap-free range per
//! entity kind across the whole run. The allocator is an explicit value
//! threaded by `&mut` through every sub-compilation step; independent runs
//! never share cursors.

use crate::entities::tag::{EntityKind, Tag};
use crate::mesh_error::BubbleMeshError;

/// One cursor per allocatable entity kind, each pointing at the next tag to
/// hand out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagAllocator {
    points: u64,
    lines: u64,
    curve_loops: u64,
    plane_surfaces: u64,
}

impl Default for TagAllocator {
    fn default() -> Self {
        Self {
            points: 1,
            lines: 1,
            curve_loops: 1,
            plane_surfaces: 1,
        }
    }
}

impl TagAllocator {
    /// Fresh allocator with every cursor at 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(cursor: &mut u64, kind: EntityKind) -> Result<Tag, BubbleMeshError> {
        let tag = Tag::new(*cursor)?;
        *cursor = cursor
            .checked_add(1)
            .ok_or(BubbleMeshError::AllocatorOverflow(kind))?;
        Ok(tag)
    }

    /// Next point tag.
    pub fn next_point(&mut self) -> Result<Tag, BubbleMeshError> {
        Self::bump(&mut self.points, EntityKind::Point)
    }

    /// Next line tag.
    pub fn next_line(&mut self) -> Result<Tag, BubbleMeshError> {
        Self::bump(&mut self.lines, EntityKind::Line)
    }

    /// Next curve-loop tag.
    pub fn next_curve_loop(&mut self) -> Result<Tag, BubbleMeshError> {
        Self::bump(&mut self.curve_loops, EntityKind::CurveLoop)
    }

    /// Next plane-surface tag.
    pub fn next_plane_surface(&mut self) -> Result<Tag, BubbleMeshError> {
        Self::bump(&mut self.plane_surfaces, EntityKind::PlaneSurface)
    }
}

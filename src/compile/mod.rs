//! Topology-to-entity compilation.
//!
//! [`compile_topology`] drives the whole pipeline: it walks the topology's
//! flatten sequence, skips hole levels, compiles each remaining bubble into
//! a local entity set with one shared [`TagAllocator`], concatenates
//! everything per kind, and merges physical groups that share a tag —
//! disjoint regions on the same material level must reach the solver as one
//! logical group.
//!
//! The transform is sequential and deterministic; any failure aborts the
//! run without emitting a partial entity set.

pub mod allocator;
mod region;
mod ring;

use itertools::Itertools;
use log::debug;

use crate::entities::{GmshEntities, PhysicalGroup};
use crate::mesh_error::BubbleMeshError;
use crate::topology::Topology;

pub use allocator::TagAllocator;

/// Knobs for one compilation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompileOptions {
    /// Uniform characteristic mesh length assigned to every point.
    pub mesh_size: f64,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { mesh_size: 0.1 }
    }
}

/// Compiles every non-hole bubble of `topology` into one flat entity set.
///
/// Zero non-hole bubbles is not an error; the result simply has empty
/// collections (emission decides whether that is acceptable).
///
/// # Errors
///
/// [`BubbleMeshError::DegenerateRing`] if any ring of any compiled region
/// collapses below 3 distinct coordinates, and
/// [`BubbleMeshError::AllocatorOverflow`] if a tag cursor is exhausted.
pub fn compile_topology(
    topology: &Topology,
    options: &CompileOptions,
) -> Result<GmshEntities, BubbleMeshError> {
    let mut tags = TagAllocator::new();
    let mut entities = GmshEntities::new();
    let mut skipped = 0usize;

    for (region, (polygon, level)) in topology.flatten().enumerate() {
        if topology.is_hole(level) {
            skipped += 1;
            continue;
        }
        let local = region::compile_region(polygon, level, region, options, &mut tags)?;
        entities.extend(local);
    }
    debug!(
        "compiled {} regions ({skipped} hole regions skipped): {} points, {} lines",
        entities.plane_surfaces.len(),
        entities.points.len(),
        entities.lines.len()
    );

    entities.physical_groups = merge_physical_groups(std::mem::take(&mut entities.physical_groups));
    Ok(entities)
}

/// Merges physical-group records sharing a tag into a single group per tag.
///
/// Records are sorted by tag (stable, so entity tags stay in allocation
/// order, i.e. ascending surface tag) and reduced with a group-by over the
/// sorted run.
fn merge_physical_groups(mut groups: Vec<PhysicalGroup>) -> Vec<PhysicalGroup> {
    groups.sort_by_key(|group| group.tag);
    let mut merged = Vec::new();
    for (tag, chunk) in &groups.into_iter().chunk_by(|group| group.tag) {
        let records: Vec<PhysicalGroup> = chunk.collect();
        let dim = records[0].dim;
        let entity_tags = records
            .into_iter()
            .flat_map(|group| group.entity_tags)
            .collect();
        merged.push(PhysicalGroup {
            dim,
            entity_tags,
            tag,
        });
    }
    merged
}

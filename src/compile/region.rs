//! Region compilation: one bubble into a self-contained local entity set.

use log::debug;

use crate::entities::{GmshEntities, PhysicalDimension, PhysicalGroup, PlaneSurface, Tag};
use crate::geometry::Polygon;
use crate::mesh_error::BubbleMeshError;

use super::allocator::TagAllocator;
use super::ring::compile_ring;
use super::CompileOptions;

/// Compiles one `(polygon, level)` bubble.
///
/// The exterior ring is compiled first, then each interior ring in order;
/// one plane surface spans all resulting curve loops (outer boundary
/// first), and one dimension-2 physical group tagged `level + 1` holds the
/// surface. Apart from the shared allocator, the result is independent of
/// any other region in the run.
pub(crate) fn compile_region(
    polygon: &Polygon,
    level: u32,
    region: usize,
    options: &CompileOptions,
    tags: &mut TagAllocator,
) -> Result<GmshEntities, BubbleMeshError> {
    let mut entities = GmshEntities::new();
    let mut curve_loop_tags = Vec::with_capacity(1 + polygon.interiors().len());

    let exterior = compile_ring(polygon.exterior(), options.mesh_size, region, tags)?;
    curve_loop_tags.push(exterior.curve_loop.tag);
    entities.points.extend(exterior.points);
    entities.lines.extend(exterior.lines);
    entities.curve_loops.push(exterior.curve_loop);

    for interior in polygon.interiors() {
        let hole = compile_ring(interior, options.mesh_size, region, tags)?;
        curve_loop_tags.push(hole.curve_loop.tag);
        entities.points.extend(hole.points);
        entities.lines.extend(hole.lines);
        entities.curve_loops.push(hole.curve_loop);
    }

    let surface_tag = tags.next_plane_surface()?;
    entities.plane_surfaces.push(PlaneSurface {
        curve_loop_tags,
        tag: surface_tag,
    });
    // +1 because physical group tags start at 1; level 0 maps to tag 1.
    let group_tag = Tag::new(u64::from(level) + 1)?;
    entities.physical_groups.push(PhysicalGroup {
        dim: PhysicalDimension::Two,
        entity_tags: vec![surface_tag],
        tag: group_tag,
    });
    debug!(
        "region {region} (level {level}): surface {surface_tag}, group {group_tag}, {} loops",
        entities.curve_loops.len()
    );

    Ok(entities)
}

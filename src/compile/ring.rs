//! Ring compilation: one closed coordinate ring into kernel primitives.

use log::trace;

use crate::entities::{CurveLoop, Line, Point};
use crate::geometry::Ring;
use crate::mesh_error::BubbleMeshError;

use super::allocator::TagAllocator;

/// Entities produced by compiling a single ring.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RingEntities {
    pub points: Vec<Point>,
    pub lines: Vec<Line>,
    pub curve_loop: CurveLoop,
}

/// Compiles one ring into points, chained lines and a single curve loop.
///
/// The closing duplicate coordinate is dropped first. Each remaining
/// coordinate becomes one point (z = 0, characteristic length `lc`);
/// consecutive points are connected in input order, with a final line from
/// the last point back to the first; the curve loop lists all line tags in
/// that order. The ring's winding is taken as given — orientation
/// correction is a kernel concern, requested through the emission options.
///
/// `region` is the input index of the enclosing region, used only for
/// error reporting.
pub(crate) fn compile_ring(
    ring: &Ring,
    lc: f64,
    region: usize,
    tags: &mut TagAllocator,
) -> Result<RingEntities, BubbleMeshError> {
    let distinct = ring.distinct_count();
    if distinct < 3 {
        return Err(BubbleMeshError::DegenerateRing { region, distinct });
    }

    let coords = ring.open_coords();
    let mut points = Vec::with_capacity(coords.len());
    for coord in coords {
        points.push(Point {
            x: coord.x,
            y: coord.y,
            z: 0.0,
            lc,
            tag: tags.next_point()?,
        });
    }

    let mut lines = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        lines.push(Line {
            start_tag: pair[0].tag,
            end_tag: pair[1].tag,
            tag: tags.next_line()?,
        });
    }
    // Closing line back to the first point.
    lines.push(Line {
        start_tag: points[points.len() - 1].tag,
        end_tag: points[0].tag,
        tag: tags.next_line()?,
    });

    let curve_loop = CurveLoop {
        line_tags: lines.iter().map(|line| line.tag).collect(),
        tag: tags.next_curve_loop()?,
    };
    trace!(
        "ring in region {region}: {} points, {} lines, loop {}",
        points.len(),
        lines.len(),
        curve_loop.tag
    );

    Ok(RingEntities {
        points,
        lines,
        curve_loop,
    })
}

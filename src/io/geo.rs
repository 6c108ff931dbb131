//! Gmsh geo-script writer.
//!
//! Serializes a compiled entity set as the plain-text statement form gmsh
//! unrolls `.geo` files into: one statement per entity, in kind order
//! (points, lines, curve loops, plane surfaces, 3-D records, physical
//! groups). Meshing itself stays with the external kernel; this writer only
//! persists the geometry description it consumes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::entities::{GmshEntities, PhysicalDimension, Tag};
use crate::mesh_error::BubbleMeshError;

use super::EntityWriter;

/// Options controlling geo-script emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoOptions {
    /// Target mesh dimension. The planar compilation path produces
    /// dimension-2 sets; 3-D records are serialized if present.
    pub dim: PhysicalDimension,
    /// Request automatic curve-loop reorientation from the kernel.
    ///
    /// The geo statement grammar has no per-loop reorient argument (it
    /// exists only in the kernel API), so this writer emits loops exactly
    /// as compiled; the flag is carried for API-backed writers. Compiled
    /// loops always form consistent traversal chains — when the flag is
    /// off, ring winding consistent with the fill/hole convention is the
    /// caller's responsibility.
    pub correct_curve_loops: bool,
    /// Save mesh elements regardless of physical-group membership.
    ///
    /// When false, an entity set without physical groups is rejected with
    /// [`BubbleMeshError::EmptyTopology`].
    pub save_all: bool,
    /// Append a `Mesh <dim>;` statement so running the script through gmsh
    /// generates the mesh immediately instead of only loading the geometry.
    pub generate_mesh: bool,
    /// Mesh file format version pinned in the script.
    pub msh_file_version: f64,
}

impl Default for GeoOptions {
    fn default() -> Self {
        Self {
            dim: PhysicalDimension::Two,
            correct_curve_loops: false,
            save_all: false,
            generate_mesh: false,
            // Solver-compatible legacy format (e.g. dolfin-convert).
            msh_file_version: 2.0,
        }
    }
}

/// Writer producing gmsh geo statements.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoWriter {
    pub options: GeoOptions,
}

impl GeoWriter {
    pub fn new(options: GeoOptions) -> Self {
        Self { options }
    }
}

fn tag_list(tags: &[Tag]) -> String {
    tags.iter().join(", ")
}

impl EntityWriter for GeoWriter {
    fn write<W: Write>(
        &self,
        mut writer: W,
        entities: &GmshEntities,
    ) -> Result<(), BubbleMeshError> {
        if entities.physical_groups.is_empty() && !self.options.save_all {
            return Err(BubbleMeshError::EmptyTopology);
        }

        writeln!(writer, "Mesh.MshFileVersion = {};", self.options.msh_file_version)?;
        if self.options.save_all {
            writeln!(writer, "Mesh.SaveAll = 1;")?;
        }

        for point in &entities.points {
            writeln!(
                writer,
                "Point({}) = {{{}, {}, {}, {}}};",
                point.tag, point.x, point.y, point.z, point.lc
            )?;
        }
        for line in &entities.lines {
            writeln!(
                writer,
                "Line({}) = {{{}, {}}};",
                line.tag, line.start_tag, line.end_tag
            )?;
        }
        for curve_loop in &entities.curve_loops {
            writeln!(
                writer,
                "Curve Loop({}) = {{{}}};",
                curve_loop.tag,
                tag_list(&curve_loop.line_tags)
            )?;
        }
        for surface in &entities.plane_surfaces {
            writeln!(
                writer,
                "Plane Surface({}) = {{{}}};",
                surface.tag,
                tag_list(&surface.curve_loop_tags)
            )?;
        }
        for surface_loop in &entities.surface_loops {
            writeln!(
                writer,
                "Surface Loop({}) = {{{}}};",
                surface_loop.tag,
                tag_list(&surface_loop.surface_tags)
            )?;
        }
        for volume in &entities.volumes {
            writeln!(
                writer,
                "Volume({}) = {{{}}};",
                volume.tag,
                tag_list(&volume.surface_loop_tags)
            )?;
        }
        for group in &entities.physical_groups {
            let keyword = match group.dim {
                PhysicalDimension::Two => "Physical Surface",
                PhysicalDimension::Three => "Physical Volume",
            };
            writeln!(
                writer,
                "{keyword}({}) = {{{}}};",
                group.tag,
                tag_list(&group.entity_tags)
            )?;
        }
        if self.options.generate_mesh {
            writeln!(writer, "Mesh {};", self.options.dim.as_u8())?;
        }
        Ok(())
    }
}

/// Writes `entities` as a geo script at `path`.
pub fn write_geo_file<P: AsRef<Path>>(
    path: P,
    entities: &GmshEntities,
    options: GeoOptions,
) -> Result<(), BubbleMeshError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    GeoWriter::new(options).write(&mut writer, entities)?;
    writer.flush()?;
    info!(
        "wrote geo script {} ({} surfaces, {} physical groups)",
        path.display(),
        entities.plane_surfaces.len(),
        entities.physical_groups.len()
    );
    Ok(())
}

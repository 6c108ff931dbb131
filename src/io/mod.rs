//! Emission of compiled entity sets.
//!
//! This module provides trait-based writers for handing a finished
//! [`GmshEntities`] set to a geometry kernel or a persisted format. The
//! compiler itself never writes files; writers consume the immutable
//! entity set exactly once per run.

pub mod geo;

use std::io::Write;

use crate::entities::GmshEntities;
use crate::mesh_error::BubbleMeshError;

pub use geo::{write_geo_file, GeoOptions, GeoWriter};

/// Trait for writers that serialize a compiled entity set.
pub trait EntityWriter {
    /// Write `entities` to `writer`.
    fn write<W: Write>(&self, writer: W, entities: &GmshEntities) -> Result<(), BubbleMeshError>;
}

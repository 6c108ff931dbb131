//! # bubble-mesh
//!
//! bubble-mesh is a Rust library that compiles hierarchical descriptions of
//! nested, possibly-holed 2-D regions ("bubbles", each tagged with a
//! material level) into a flat, globally tag-consistent set of gmsh
//! geometry entities — points, lines, curve loops, plane surfaces and
//! physical groups — ready for an external meshing kernel and, downstream,
//! a finite-element solver.
//!
//! ## Features
//! - Immutable entity records with strongly typed, non-zero [`entities::Tag`]s
//! - An explicit per-run tag allocator: contiguous, gap-free tag ranges per
//!   entity kind, no ambient global state
//! - Hole-level filtering and per-level physical-group merging, so disjoint
//!   regions of one material reach the solver as one logical group
//! - A minimal topology container exposing the `flatten()` iteration
//!   contract, plus discretizable analytic shapes for building inputs
//! - A geo-script writer for handing the compiled geometry to gmsh
//!
//! ## Determinism
//!
//! Compilation is a single-threaded, purely sequential batch transform: a
//! run either completes deterministically or fails fast with a
//! [`mesh_error::BubbleMeshError`], emitting no partial entity set.
//! Randomized shape generators draw from `SmallRng` with explicit seeds so
//! runs are reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use bubble_mesh::prelude::*;
//!
//! let domain = Rectangle::new((0.5, 0.5), 1.0, 1.0).discretize(1);
//! let mut topology = Topology::new(Polygon::from(domain), [1]);
//! topology.add(
//!     Polygon::from(Circle::new((0.5, 0.5), 0.2).discretize(16)),
//!     2,
//! );
//!
//! let entities = compile_topology(&topology, &CompileOptions::default())?;
//! assert_eq!(entities.plane_surfaces.len(), 2);
//! # Ok::<(), bubble_mesh::mesh_error::BubbleMeshError>(())
//! ```

pub mod compile;
pub mod entities;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used types & functions:
pub mod prelude {
    pub use crate::compile::{compile_topology, CompileOptions, TagAllocator};
    pub use crate::entities::{
        CurveLoop, GmshEntities, Line, PhysicalDimension, PhysicalGroup, PlaneSurface, Point,
        SurfaceLoop, Tag, Volume,
    };
    pub use crate::geometry::shapes::{Circle, NStar, Rectangle, Stellar};
    pub use crate::geometry::{Coord, Polygon, Ring};
    pub use crate::io::{write_geo_file, EntityWriter, GeoOptions, GeoWriter};
    pub use crate::mesh_error::BubbleMeshError;
    pub use crate::topology::{Bubble, Topology};
}

//! Converts GeoJSON documents into an explicit polygonal mesh: one point
//! set plus typed primitive buckets for vertices, polylines and polygons,
//! with every polygon reduced to triangles.
//!
//! Data flow: source text → `serde_json` tree → [`reader::parse_document`]
//! → feature / geometry extraction → [`mesh::Mesh`] →
//! [`triangulate::triangulate_polygons`] → final mesh.

// Error taxonomy shared by all stages
pub mod error;
// Feature-level extraction (standard and bare shapes)
pub mod feature;
// Geometry-type dispatch and per-type extraction
pub mod geometry;
// The point set and primitive buckets
pub mod mesh;
// Source selection and the root dispatcher
pub mod reader;
// Ear-clipping adapter that makes the mesh simplicial
pub mod triangulate;

pub use error::{GeometryError, ParseError, SkipReason, Skipped};
pub use feature::extract_feature;
pub use geometry::{equals_ignoring_case, extract_geometry, GeometryKind};
pub use mesh::{Mesh, PointId};
pub use reader::{parse_document, GeoJsonReader, ReadResult};
pub use triangulate::triangulate_polygons;

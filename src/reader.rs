use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ParseError, SkipReason, Skipped};
use crate::feature::extract_feature;
use crate::mesh::Mesh;
use crate::triangulate::triangulate_polygons;

/// Where the document text comes from.
#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Text(String),
}

/// Reads one GeoJSON document and produces a triangulated mesh.
///
/// Accepted root shapes: a FeatureCollection, a single Feature, and the
/// bare geometry-bearing object some GIS exporters emit without either
/// wrapper. Malformed features inside a collection are skipped and
/// reported, not fatal.
///
/// ```
/// use geojson_mesh::GeoJsonReader;
///
/// let reader = GeoJsonReader::from_string(
///     r#"{"type":"Point","coordinates":[12.5,41.9]}"#,
/// );
/// let result = reader.read().unwrap();
/// assert_eq!(result.mesh.verts().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GeoJsonReader {
    source: Source,
}

/// The mesh plus diagnostics for features that were dropped along the way.
#[derive(Debug, Clone)]
pub struct ReadResult {
    pub mesh: Mesh,
    pub skipped: Vec<Skipped>,
}

impl GeoJsonReader {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        GeoJsonReader {
            source: Source::File(path.into()),
        }
    }

    pub fn from_string(content: impl Into<String>) -> Self {
        GeoJsonReader {
            source: Source::Text(content.into()),
        }
    }

    pub fn read(&self) -> Result<ReadResult, ParseError> {
        let text = match &self.source {
            Source::File(path) => {
                fs::read_to_string(path).map_err(|source| ParseError::SourceUnavailable {
                    path: path.clone(),
                    source,
                })?
            }
            Source::Text(content) => content.clone(),
        };
        let root: Value = serde_json::from_str(&text)
            .map_err(|err| ParseError::MalformedDocument(err.to_string()))?;
        parse_document(&root)
    }
}

/// Parses an already-decoded JSON tree into a mesh. Triangulation runs
/// exactly once, over the finished polygon bucket, before returning.
pub fn parse_document(root: &Value) -> Result<ReadResult, ParseError> {
    if !root.is_object() {
        return Err(ParseError::MalformedDocument(String::from(
            "root is not a JSON object",
        )));
    }

    let mut mesh = Mesh::new();
    let mut skipped = Vec::new();

    match root.get("features") {
        Some(Value::Array(features)) => {
            for (index, feature) in features.iter().enumerate() {
                if !feature.is_object() {
                    warn!("skipping feature {index}: not a JSON object");
                    skipped.push(Skipped {
                        feature: index,
                        reason: SkipReason::NotAnObject,
                    });
                    continue;
                }
                match extract_feature(feature, &mut mesh) {
                    Ok(true) => {}
                    Ok(false) => {
                        warn!("skipping feature {index}: no recognizable geometry");
                        skipped.push(Skipped {
                            feature: index,
                            reason: SkipReason::NoGeometry,
                        });
                    }
                    Err(err) => {
                        warn!("skipping feature {index}: {err}");
                        skipped.push(Skipped {
                            feature: index,
                            reason: SkipReason::Geometry(err),
                        });
                    }
                }
            }
        }
        // Some exporters put a single feature object under "features"
        // instead of an array of them.
        Some(features @ Value::Object(_)) => parse_single(features, &mut mesh)?,
        _ => parse_single(root, &mut mesh)?,
    }

    triangulate_polygons(&mut mesh);
    debug!(
        "parsed mesh: {} points, {} verts, {} lines, {} triangles, {} skipped",
        mesh.points().len(),
        mesh.verts().len(),
        mesh.lines().len(),
        mesh.polys().len(),
        skipped.len()
    );
    Ok(ReadResult { mesh, skipped })
}

/// Root-level single feature (standard or bare). Here a failure is fatal:
/// there is nothing else in the document to fall back on.
fn parse_single(node: &Value, mesh: &mut Mesh) -> Result<(), ParseError> {
    match extract_feature(node, mesh) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ParseError::UnrecognizedRootShape),
        Err(err) => {
            warn!("root geometry rejected: {err}");
            Err(ParseError::UnrecognizedRootShape)
        }
    }
}

use serde_json::Value;

use crate::error::GeometryError;
use crate::mesh::{Mesh, PointId};

/// The geometry types named by the GeoJSON specification, plus an explicit
/// catch-all carrying the offending tag for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Unknown(String),
}

/// Case-insensitive ASCII comparison; type tags from real-world exporters
/// vary in case.
pub fn equals_ignoring_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

impl GeometryKind {
    const RECOGNIZED: [(&'static str, GeometryKind); 7] = [
        ("Point", GeometryKind::Point),
        ("MultiPoint", GeometryKind::MultiPoint),
        ("LineString", GeometryKind::LineString),
        ("MultiLineString", GeometryKind::MultiLineString),
        ("Polygon", GeometryKind::Polygon),
        ("MultiPolygon", GeometryKind::MultiPolygon),
        ("GeometryCollection", GeometryKind::GeometryCollection),
    ];

    pub fn from_type_name(name: &str) -> GeometryKind {
        for (tag, kind) in &Self::RECOGNIZED {
            if equals_ignoring_case(name, tag) {
                return kind.clone();
            }
        }
        GeometryKind::Unknown(name.to_string())
    }
}

/// Extracts one geometry node into the mesh, dispatching on its `type` tag.
///
/// All-or-nothing: the node is extracted into a scratch mesh that is merged
/// into `mesh` only when the whole node (including nested geometries of a
/// GeometryCollection) decoded cleanly, so a failing node never leaves
/// partial primitives behind.
pub fn extract_geometry(node: &Value, mesh: &mut Mesh) -> Result<(), GeometryError> {
    let mut scratch = Mesh::new();
    walk(node, &mut scratch)?;
    mesh.merge(scratch);
    Ok(())
}

fn walk(node: &Value, mesh: &mut Mesh) -> Result<(), GeometryError> {
    match classify(node)? {
        GeometryKind::Point => extract_point(node, mesh),
        GeometryKind::MultiPoint => extract_multi_point(node, mesh),
        GeometryKind::LineString => extract_line_string(node, mesh),
        GeometryKind::MultiLineString => extract_multi_line_string(node, mesh),
        GeometryKind::Polygon => extract_polygon(node, mesh),
        GeometryKind::MultiPolygon => extract_multi_polygon(node, mesh),
        GeometryKind::GeometryCollection => extract_collection(node, mesh),
        GeometryKind::Unknown(name) => Err(GeometryError::UnsupportedType(name)),
    }
}

/// Determines the geometry kind of a node. A declared `type` tag wins; nodes
/// without one (seen from non-conformant producers) are classified by the
/// nesting depth of their `coordinates` array, or as a collection when they
/// carry a `geometries` array.
fn classify(node: &Value) -> Result<GeometryKind, GeometryError> {
    if let Some(tag) = node.get("type").and_then(Value::as_str) {
        return Ok(GeometryKind::from_type_name(tag));
    }
    if node.get("geometries").is_some() {
        return Ok(GeometryKind::GeometryCollection);
    }
    match node.get("coordinates") {
        Some(coordinates) => Ok(classify_by_depth(coordinates)),
        None => Err(GeometryError::UnsupportedType(String::from("<missing>"))),
    }
}

/// Depths 0..=3 of the coordinates array map onto Point, LineString,
/// Polygon and MultiPolygon; the Multi* point/line variants cannot be told
/// apart from these without a tag, so the single-geometry reading wins.
fn classify_by_depth(coordinates: &Value) -> GeometryKind {
    let mut depth = 0usize;
    let mut value = coordinates;
    while let Some(array) = value.as_array() {
        match array.first() {
            Some(first) if first.is_array() => {
                depth += 1;
                value = first;
            }
            _ => break,
        }
    }
    match depth {
        0 => GeometryKind::Point,
        1 => GeometryKind::LineString,
        2 => GeometryKind::Polygon,
        _ => GeometryKind::MultiPolygon,
    }
}

// Raw coordinate shapes pulled straight out of the JSON tree. Decoding a
// whole geometry through these before any mesh append is what makes
// extraction all-or-nothing at the node level.
type RawPosition = Vec<f64>;
type RawLine = Vec<RawPosition>;
type RawRings = Vec<RawLine>;

fn coordinates_field<'a>(node: &'a Value, kind: &'static str) -> Result<&'a Value, GeometryError> {
    node.get("coordinates").ok_or(GeometryError::ShapeMismatch {
        kind,
        detail: String::from("missing \"coordinates\" field"),
    })
}

fn decode<T: serde::de::DeserializeOwned>(
    coordinates: &Value,
    kind: &'static str,
) -> Result<T, GeometryError> {
    serde_json::from_value(coordinates.clone()).map_err(|err| GeometryError::ShapeMismatch {
        kind,
        detail: err.to_string(),
    })
}

/// A GeoJSON position is `[x, y]` or `[x, y, z]`; a missing altitude
/// defaults to 0 and anything past the third element is ignored.
fn push_position(raw: &[f64], kind: &'static str, mesh: &mut Mesh) -> Result<PointId, GeometryError> {
    if raw.len() < 2 {
        return Err(GeometryError::ShapeMismatch {
            kind,
            detail: format!("position has {} elements, expected at least 2", raw.len()),
        });
    }
    let z = raw.get(2).copied().unwrap_or(0.0);
    Ok(mesh.push_point([raw[0], raw[1], z]))
}

fn extract_point(node: &Value, mesh: &mut Mesh) -> Result<(), GeometryError> {
    let raw: RawPosition = decode(coordinates_field(node, "Point")?, "Point")?;
    let point = push_position(&raw, "Point", mesh)?;
    mesh.push_vert(point);
    Ok(())
}

fn extract_multi_point(node: &Value, mesh: &mut Mesh) -> Result<(), GeometryError> {
    let raw: RawLine = decode(coordinates_field(node, "MultiPoint")?, "MultiPoint")?;
    for position in &raw {
        let point = push_position(position, "MultiPoint", mesh)?;
        mesh.push_vert(point);
    }
    Ok(())
}

fn push_line(raw: &RawLine, kind: &'static str, mesh: &mut Mesh) -> Result<(), GeometryError> {
    if raw.len() < 2 {
        return Err(GeometryError::ShapeMismatch {
            kind,
            detail: format!("line has {} positions, expected at least 2", raw.len()),
        });
    }
    let mut line = Vec::with_capacity(raw.len());
    for position in raw {
        line.push(push_position(position, kind, mesh)?);
    }
    mesh.push_line(line);
    Ok(())
}

fn extract_line_string(node: &Value, mesh: &mut Mesh) -> Result<(), GeometryError> {
    let raw: RawLine = decode(coordinates_field(node, "LineString")?, "LineString")?;
    push_line(&raw, "LineString", mesh)
}

fn extract_multi_line_string(node: &Value, mesh: &mut Mesh) -> Result<(), GeometryError> {
    let raw: RawRings = decode(coordinates_field(node, "MultiLineString")?, "MultiLineString")?;
    for line in &raw {
        push_line(line, "MultiLineString", mesh)?;
    }
    Ok(())
}

/// Every ring of a polygon (exterior first, then holes) becomes one polygon
/// primitive over freshly appended points. Holes are not subtracted from
/// the exterior; they land in the same bucket as additional polygons.
fn push_rings(raw: &RawRings, kind: &'static str, mesh: &mut Mesh) -> Result<(), GeometryError> {
    for ring in raw {
        if ring.len() < 3 {
            return Err(GeometryError::ShapeMismatch {
                kind,
                detail: format!("ring has {} positions, expected at least 3", ring.len()),
            });
        }
        let mut indices = Vec::with_capacity(ring.len());
        for position in ring {
            indices.push(push_position(position, kind, mesh)?);
        }
        mesh.push_poly(indices);
    }
    Ok(())
}

fn extract_polygon(node: &Value, mesh: &mut Mesh) -> Result<(), GeometryError> {
    let raw: RawRings = decode(coordinates_field(node, "Polygon")?, "Polygon")?;
    push_rings(&raw, "Polygon", mesh)
}

fn extract_multi_polygon(node: &Value, mesh: &mut Mesh) -> Result<(), GeometryError> {
    let raw: Vec<RawRings> = decode(coordinates_field(node, "MultiPolygon")?, "MultiPolygon")?;
    for polygon in &raw {
        push_rings(polygon, "MultiPolygon", mesh)?;
    }
    Ok(())
}

fn extract_collection(node: &Value, mesh: &mut Mesh) -> Result<(), GeometryError> {
    let geometries = node
        .get("geometries")
        .and_then(Value::as_array)
        .ok_or(GeometryError::ShapeMismatch {
            kind: "GeometryCollection",
            detail: String::from("missing \"geometries\" array"),
        })?;
    for child in geometries {
        walk(child, mesh)?;
    }
    Ok(())
}

use serde_json::{Map, Value};

use crate::error::GeometryError;
use crate::geometry::{extract_geometry, GeometryKind};
use crate::mesh::Mesh;

/// Extracts the geometry of one feature node into the mesh.
///
/// Two shapes are accepted: the standard Feature object carrying a nested
/// `geometry` object, and the bare variant produced by some GIS exporters
/// (PostGIS among them) where the node itself is the geometry. Returns
/// `Ok(false)` when neither shape matches, leaving the caller to decide
/// whether that is fatal (root level) or skippable (inside a collection).
pub fn extract_feature(node: &Value, mesh: &mut Mesh) -> Result<bool, GeometryError> {
    let Some(object) = node.as_object() else {
        return Ok(false);
    };

    if let Some(geometry) = object.get("geometry") {
        if geometry.is_object() {
            extract_geometry(geometry, mesh)?;
            return Ok(true);
        }
    }

    if looks_like_geometry(object) {
        extract_geometry(node, mesh)?;
        return Ok(true);
    }

    Ok(false)
}

/// Probe for the bare-geometry shape: a recognized geometry `type` tag, or
/// (looser, for producers that omit the tag) a coordinate-bearing field.
fn looks_like_geometry(object: &Map<String, Value>) -> bool {
    if let Some(tag) = object.get("type").and_then(Value::as_str) {
        if !matches!(GeometryKind::from_type_name(tag), GeometryKind::Unknown(_)) {
            return true;
        }
    }
    object.contains_key("coordinates") || object.contains_key("geometries")
}

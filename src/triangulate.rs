use geo::Area;
use geo_types::{Coord, LineString, Polygon};
use tracing::warn;

use crate::mesh::{Mesh, PointId};

/// Replaces the polygon bucket with triangles so the mesh is simplicial.
///
/// Each ring is ear-clipped on its (x, y) projection and the resulting
/// local indices are mapped back onto the shared point set. Degenerate
/// rings (fewer than 3 distinct points, zero area) contribute no triangles
/// instead of failing the batch. Output winding follows the ear-clipper
/// and is not fixed relative to the input ring.
pub fn triangulate_polygons(mesh: &mut Mesh) {
    for ring in mesh.take_polys() {
        let ring = strip_closing_point(ring, mesh);
        if ring.len() < 3 {
            continue;
        }

        let shell: LineString = ring
            .iter()
            .map(|&id| {
                let p = mesh.points()[id as usize];
                Coord { x: p[0], y: p[1] }
            })
            .collect();
        if Polygon::new(shell, vec![]).unsigned_area() == 0.0 {
            continue;
        }

        let mut flat = Vec::with_capacity(ring.len() * 2);
        for &id in &ring {
            let p = mesh.points()[id as usize];
            flat.push(p[0]);
            flat.push(p[1]);
        }

        let triangles = match earcutr::earcut(&flat, &[], 2) {
            Ok(indices) => indices,
            Err(err) => {
                warn!("ear clipping failed for a {}-point ring: {err:?}", ring.len());
                continue;
            }
        };
        for tri in triangles.chunks_exact(3) {
            mesh.push_poly(vec![ring[tri[0]], ring[tri[1]], ring[tri[2]]]);
        }
    }
}

/// GeoJSON rings usually repeat the first position as the last; the ear
/// clipper wants the open form.
fn strip_closing_point(mut ring: Vec<PointId>, mesh: &Mesh) -> Vec<PointId> {
    if ring.len() > 3 {
        let first = mesh.points()[ring[0] as usize];
        let last = mesh.points()[ring[ring.len() - 1] as usize];
        if first == last {
            ring.pop();
        }
    }
    ring
}

use serde::Serialize;

/// Index into a mesh's point set.
pub type PointId = u32;

/// The mesh accumulator: one append-only point set plus the three typed
/// primitive buckets (vertices, lines, polygons). Primitives reference
/// points by index; indices never point past the current end of the point
/// set, and points are never deduplicated across primitives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    points: Vec<[f64; 3]>,
    verts: Vec<PointId>,
    lines: Vec<Vec<PointId>>,
    polys: Vec<Vec<PointId>>,
}

impl Mesh {
    pub fn new() -> Self {
        Mesh::default()
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Vertex primitives, one point index each.
    pub fn verts(&self) -> &[PointId] {
        &self.verts
    }

    /// Line primitives: open polylines of at least 2 indices.
    pub fn lines(&self) -> &[Vec<PointId>] {
        &self.lines
    }

    /// Polygon primitives: implicitly closed rings of at least 3 indices.
    /// After triangulation every entry has exactly 3.
    pub fn polys(&self) -> &[Vec<PointId>] {
        &self.polys
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty() && self.lines.is_empty() && self.polys.is_empty()
    }

    /// Appends a point and returns its index.
    pub fn push_point(&mut self, point: [f64; 3]) -> PointId {
        let id = self.points.len() as PointId;
        self.points.push(point);
        id
    }

    pub fn push_vert(&mut self, point: PointId) {
        debug_assert!((point as usize) < self.points.len());
        self.verts.push(point);
    }

    pub fn push_line(&mut self, line: Vec<PointId>) {
        debug_assert!(line.iter().all(|&p| (p as usize) < self.points.len()));
        self.lines.push(line);
    }

    pub fn push_poly(&mut self, ring: Vec<PointId>) {
        debug_assert!(ring.iter().all(|&p| (p as usize) < self.points.len()));
        self.polys.push(ring);
    }

    /// Appends another mesh's points and primitives, rebasing the
    /// fragment's indices onto this point set. Used to merge per-feature
    /// scratch meshes into the document accumulator only once extraction
    /// of the whole feature has succeeded.
    pub fn merge(&mut self, fragment: Mesh) {
        let offset = self.points.len() as PointId;
        self.points.extend(fragment.points);
        self.verts
            .extend(fragment.verts.into_iter().map(|p| p + offset));
        self.lines.extend(
            fragment
                .lines
                .into_iter()
                .map(|line| line.into_iter().map(|p| p + offset).collect()),
        );
        self.polys.extend(
            fragment
                .polys
                .into_iter()
                .map(|ring| ring.into_iter().map(|p| p + offset).collect()),
        );
    }

    /// Removes and returns the polygon bucket, leaving it empty so the
    /// triangulator can refill it.
    pub(crate) fn take_polys(&mut self) -> Vec<Vec<PointId>> {
        std::mem::take(&mut self.polys)
    }
}

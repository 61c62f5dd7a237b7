use geojson_mesh::{GeoJsonReader, ParseError, ReadResult, SkipReason};

fn read(content: &str) -> ReadResult {
    GeoJsonReader::from_string(content).read().unwrap()
}

#[test]
fn line_string_feature_collection() {
    let result = read(
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[1,0],[1,1]]}}
        ]}"#,
    );
    let mesh = &result.mesh;
    assert_eq!(
        mesh.points(),
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]
    );
    assert_eq!(mesh.lines(), &[vec![0, 1, 2]]);
    assert!(mesh.verts().is_empty());
    assert!(mesh.polys().is_empty());
    assert!(result.skipped.is_empty());
}

#[test]
fn point_feature_yields_one_vert() {
    let result = read(
        r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2.5,3.5]}}"#,
    );
    assert_eq!(result.mesh.points(), &[[2.5, 3.5, 0.0]]);
    assert_eq!(result.mesh.verts(), &[0]);
}

#[test]
fn quad_polygon_is_triangulated_into_two_triangles() {
    let result = read(
        r#"{"type":"Feature","geometry":{"type":"Polygon",
            "coordinates":[[[0,0],[4,0],[4,4],[0,4],[0,0]]]}}"#,
    );
    let mesh = &result.mesh;
    assert_eq!(mesh.points().len(), 5);
    assert_eq!(mesh.polys().len(), 2);
    assert!(mesh.polys().iter().all(|tri| tri.len() == 3));
}

#[test]
fn polygon_hole_becomes_a_separate_triangulated_ring() {
    // Holes are not subtracted from the exterior: each ring is its own
    // polygon over the shared point pool.
    let result = read(
        r#"{"type":"Feature","geometry":{"type":"Polygon","coordinates":[
            [[0,0],[10,0],[10,10],[0,10],[0,0]],
            [[2,2],[4,2],[4,4],[2,4],[2,2]]
        ]}}"#,
    );
    assert_eq!(result.mesh.points().len(), 10);
    // Two quads, two triangles each.
    assert_eq!(result.mesh.polys().len(), 4);
}

#[test]
fn every_leaf_coordinate_lands_in_the_point_set() {
    let result = read(
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"MultiPolygon","coordinates":[
                [[[0,0],[1,0],[1,1]]],
                [[[5,5],[6,5],[6,6]]]
            ]}},
            {"type":"Feature","geometry":{"type":"GeometryCollection","geometries":[
                {"type":"Point","coordinates":[9,9]},
                {"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2],[3,3]]]}
            ]}}
        ]}"#,
    );
    // 3 + 3 ring points, 1 point, 2 + 2 line points.
    assert_eq!(result.mesh.points().len(), 11);
    assert_eq!(result.mesh.verts().len(), 1);
    assert_eq!(result.mesh.lines().len(), 2);
    // Two triangle rings survive triangulation as one triangle each.
    assert_eq!(result.mesh.polys().len(), 2);
}

#[test]
fn parsing_twice_is_order_stable() {
    let content = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]}},
        {"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[3,4]]}},
        {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[2,0],[2,2],[0,2]]]}}
    ]}"#;
    let first = read(content);
    let second = read(content);
    assert_eq!(first.mesh, second.mesh);
}

#[test]
fn bogus_feature_is_skipped_not_fatal() {
    let result = read(
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]}},
            {"type":"Feature","geometry":{"type":"Bogus","coordinates":[1,1]}},
            {"type":"Feature","geometry":{"type":"Point","coordinates":[2,2]}}
        ]}"#,
    );
    assert_eq!(result.mesh.verts().len(), 2);
    assert_eq!(result.mesh.points(), &[[0.0, 0.0, 0.0], [2.0, 2.0, 0.0]]);
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].feature, 1);
    assert!(matches!(result.skipped[0].reason, SkipReason::Geometry(_)));
}

#[test]
fn non_object_collection_entry_is_skipped() {
    let result = read(
        r#"{"type":"FeatureCollection","features":[
            42,
            {"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]}}
        ]}"#,
    );
    assert_eq!(result.mesh.verts().len(), 1);
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].reason, SkipReason::NotAnObject);
}

#[test]
fn bare_geometry_root_parses() {
    let result = read(r#"{"type":"Point","coordinates":[7,8]}"#);
    assert_eq!(result.mesh.points(), &[[7.0, 8.0, 0.0]]);
    assert_eq!(result.mesh.verts(), &[0]);
}

#[test]
fn single_feature_object_under_features_key_parses() {
    let result = read(
        r#"{"type":"FeatureCollection","features":
            {"type":"Feature","geometry":{"type":"Point","coordinates":[3,3]}}}"#,
    );
    assert_eq!(result.mesh.verts().len(), 1);
}

#[test]
fn non_object_root_is_malformed() {
    let err = GeoJsonReader::from_string("[1,2,3]").read().unwrap_err();
    assert!(matches!(err, ParseError::MalformedDocument(_)));
}

#[test]
fn invalid_json_is_malformed() {
    let err = GeoJsonReader::from_string("{not json").read().unwrap_err();
    assert!(matches!(err, ParseError::MalformedDocument(_)));
}

#[test]
fn unusable_root_object_is_unrecognized() {
    let err = GeoJsonReader::from_string(r#"{"hello":"world"}"#)
        .read()
        .unwrap_err();
    assert!(matches!(err, ParseError::UnrecognizedRootShape));
}

#[test]
fn missing_file_is_source_unavailable() {
    let err = GeoJsonReader::from_file("/no/such/file.geojson")
        .read()
        .unwrap_err();
    assert!(matches!(err, ParseError::SourceUnavailable { .. }));
}

#[test]
fn file_source_round_trips() {
    let path = std::env::temp_dir().join("geojson_mesh_reader_test.geojson");
    std::fs::write(
        &path,
        r#"{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[5,5]]}}"#,
    )
    .unwrap();

    let result = GeoJsonReader::from_file(&path).read().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(result.mesh.lines(), &[vec![0, 1]]);
}

#[test]
fn altitude_is_preserved_and_defaults_to_zero() {
    let result = read(
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"Point","coordinates":[1,2,30]}},
            {"type":"Feature","geometry":{"type":"Point","coordinates":[4,5]}}
        ]}"#,
    );
    assert_eq!(result.mesh.points(), &[[1.0, 2.0, 30.0], [4.0, 5.0, 0.0]]);
}

use bubble_mesh::compile::{compile_topology, CompileOptions};
use bubble_mesh::entities::{GmshEntities, PhysicalDimension, PhysicalGroup, SurfaceLoop, Tag, Volume};
use bubble_mesh::geometry::{Polygon, Ring};
use bubble_mesh::io::{write_geo_file, EntityWriter, GeoOptions, GeoWriter};
use bubble_mesh::mesh_error::BubbleMeshError;
use bubble_mesh::topology::Topology;

fn t(raw: u64) -> Tag {
    Tag::new(raw).unwrap()
}

fn unit_square_entities() -> GmshEntities {
    let topology = Topology::new(
        Polygon::from(Ring::from_tuples([
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ])),
        [],
    );
    compile_topology(&topology, &CompileOptions::default()).unwrap()
}

#[test]
fn unit_square_script() {
    let entities = unit_square_entities();
    let mut out = Vec::new();
    GeoWriter::default().write(&mut out, &entities).unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = "\
Mesh.MshFileVersion = 2;
Point(1) = {0, 0, 0, 0.1};
Point(2) = {1, 0, 0, 0.1};
Point(3) = {1, 1, 0, 0.1};
Point(4) = {0, 1, 0, 0.1};
Line(1) = {1, 2};
Line(2) = {2, 3};
Line(3) = {3, 4};
Line(4) = {4, 1};
Curve Loop(1) = {1, 2, 3, 4};
Plane Surface(1) = {1};
Physical Surface(1) = {1};
";
    assert_eq!(text, expected);
}

#[test]
fn empty_entity_set_is_rejected() {
    let mut out = Vec::new();
    let err = GeoWriter::default()
        .write(&mut out, &GmshEntities::new())
        .unwrap_err();
    assert!(matches!(err, BubbleMeshError::EmptyTopology));
}

#[test]
fn save_all_accepts_empty_entity_set() {
    let options = GeoOptions {
        save_all: true,
        ..GeoOptions::default()
    };
    let mut out = Vec::new();
    GeoWriter::new(options).write(&mut out, &GmshEntities::new()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "Mesh.MshFileVersion = 2;\nMesh.SaveAll = 1;\n");
}

#[test]
fn three_dimensional_records_are_serialized() {
    let mut entities = unit_square_entities();
    entities.surface_loops.push(SurfaceLoop {
        surface_tags: vec![t(1)],
        tag: t(1),
    });
    entities.volumes.push(Volume {
        surface_loop_tags: vec![t(1)],
        tag: t(1),
    });
    entities.physical_groups.push(PhysicalGroup {
        dim: PhysicalDimension::Three,
        entity_tags: vec![t(1)],
        tag: t(2),
    });

    let mut out = Vec::new();
    GeoWriter::default().write(&mut out, &entities).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Surface Loop(1) = {1};"));
    assert!(text.contains("Volume(1) = {1};"));
    assert!(text.contains("Physical Volume(2) = {1};"));
}

#[test]
fn generate_mesh_appends_mesh_statement() {
    let entities = unit_square_entities();
    let options = GeoOptions {
        generate_mesh: true,
        ..GeoOptions::default()
    };
    let mut out = Vec::new();
    GeoWriter::new(options).write(&mut out, &entities).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("Mesh 2;\n"));
}

#[test]
fn geo_file_round_trips_through_disk() {
    let entities = unit_square_entities();
    let path = std::env::temp_dir().join(format!(
        "bubble_mesh_geo_test_{}.geo_unrolled",
        std::process::id()
    ));
    write_geo_file(&path, &entities, GeoOptions::default()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Mesh.MshFileVersion = 2;"));
    assert!(text.contains("Plane Surface(1) = {1};"));
    std::fs::remove_file(&path).unwrap();
}

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use geodome::error::{GeodomeError, OperationError};
use geodome::math::{Vector3, VectorExt};
use geodome::operations::creation::{MakePolyhedron, PolyhedronKind};
use geodome::operations::modification::Subdivide;
use geodome::operations::query::{EdgeLengths, Edges, Triangles, Vertices};
use geodome::operations::transform::Spherify;
use geodome::topology::{VertexData, VertexId, VertexStore};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn icosahedron(store: &mut VertexStore) -> VertexId {
    MakePolyhedron::new(PolyhedronKind::Icosahedron)
        .execute(store)
        .unwrap()
}

fn keys(store: &VertexStore, root: VertexId) -> HashSet<String> {
    store
        .component(root)
        .unwrap()
        .into_iter()
        .map(|id| store.vertex(id).unwrap().key.clone())
        .collect()
}

#[test]
fn base_icosahedron() {
    init_tracing();
    let mut store = VertexStore::new();
    let root = icosahedron(&mut store);

    let ids = store.component(root).unwrap();
    assert_eq!(ids.len(), 12);
    assert_eq!(Edges::new(root).execute(&store).unwrap().len(), 30);
    assert_eq!(Triangles::new(root).execute(&store).unwrap().len(), 20);

    let radius = store.vertex(root).unwrap().point.norm();
    for id in ids {
        assert_eq!(store.neighbors(id).unwrap().len(), 5);
        assert_abs_diff_eq!(store.vertex(id).unwrap().point.norm(), radius, epsilon = 1e-12);
    }
    for (_, length) in EdgeLengths::new(root).execute(&store).unwrap() {
        assert_abs_diff_eq!(length, 2.0, epsilon = 1e-12);
    }
}

#[test]
fn icosahedron_frequency_two() {
    init_tracing();
    let mut store = VertexStore::new();
    let root = icosahedron(&mut store);
    let sub = Subdivide::new(root, 2).execute(&mut store).unwrap();

    assert_eq!(store.component(sub).unwrap().len(), 42);
    assert!(keys(&store, root).is_subset(&keys(&store, sub)));
}

#[test]
fn icosahedron_radius_ten() {
    init_tracing();
    let mut store = VertexStore::new();
    let root = icosahedron(&mut store);
    let sphere = Spherify::from_name(root, "radius", 10.0)
        .unwrap()
        .execute(&mut store)
        .unwrap();

    for id in store.component(sphere).unwrap() {
        assert_abs_diff_eq!(store.vertex(id).unwrap().point.norm(), 10.0, epsilon = 1e-9);
    }
}

#[test]
fn three_four_five_edge() {
    let mut store = VertexStore::new();
    let a = store.add_vertex(VertexData::new("A", Vector3::new(0.0, 0.0, 0.0)));
    let b = store.add_vertex(VertexData::new("B", Vector3::new(3.0, 4.0, 0.0)));
    store.connect(a, b).unwrap();

    let lengths = EdgeLengths::new(a).execute(&store).unwrap();
    assert_eq!(lengths.len(), 1);
    assert_abs_diff_eq!(lengths[0].1, 5.0);

    let (pa, pb) = (store.vertex(a).unwrap().point, store.vertex(b).unwrap().point);
    assert_abs_diff_eq!(pa.distance_to(&pb), 5.0);
}

#[test]
fn operation_order_changes_positions() {
    init_tracing();
    let mut store = VertexStore::new();
    let root = icosahedron(&mut store);

    let flat = Subdivide::new(root, 2).execute(&mut store).unwrap();
    let subdivided_first = Spherify::from_name(flat, "radius", 1.0)
        .unwrap()
        .execute(&mut store)
        .unwrap();

    let sphere = Spherify::from_name(root, "radius", 1.0)
        .unwrap()
        .execute(&mut store)
        .unwrap();
    let spherified_first = Subdivide::new(sphere, 2).execute(&mut store).unwrap();

    let a = Vertices::new(subdivided_first).execute(&store).unwrap();
    let b = Vertices::new(spherified_first).execute(&store).unwrap();
    assert_eq!(a.len(), b.len());

    // Same keys in the same order; midpoints sit on the sphere only when
    // projected last.
    let mut differing = 0;
    for (&x, &y) in a.iter().zip(&b) {
        let (x, y) = (store.vertex(x).unwrap(), store.vertex(y).unwrap());
        assert_eq!(x.key, y.key);
        if !x.point.is_equal_to(&y.point, 1e-9) {
            differing += 1;
        }
    }
    assert_eq!(differing, 30);
}

#[test]
fn invalid_inputs_are_distinguishable() {
    let mut store = VertexStore::new();
    let root = icosahedron(&mut store);

    assert!(matches!(
        Spherify::from_name(root, "volume", 1.0),
        Err(GeodomeError::Operation(OperationError::InvalidMode(_)))
    ));
    assert!(matches!(
        Subdivide::new(root, 0).execute(&mut store),
        Err(GeodomeError::Operation(OperationError::InvalidFrequency(_)))
    ));
    assert!(matches!(
        Subdivide::with_frequency(root, 1.5),
        Err(GeodomeError::Operation(OperationError::InvalidFrequency(f))) if (f - 1.5).abs() < f64::EPSILON
    ));
    assert!(matches!(
        "cube".parse::<PolyhedronKind>(),
        Err(GeodomeError::Operation(OperationError::UnknownPolyhedron(_)))
    ));
    assert_eq!(store.len(), 12);
}

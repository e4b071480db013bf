use std::fmt;
use std::str::FromStr;

use crate::error::{GeodomeError, OperationError, Result};
use crate::math::Vector3;
use crate::topology::{VertexData, VertexId, VertexStore};

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// Regular triangulated polyhedra available as subdivision bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolyhedronKind {
    Tetrahedron,
    Octahedron,
    #[default]
    Icosahedron,
}

impl PolyhedronKind {
    /// Identifier accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Octahedron => "octahedron",
            Self::Icosahedron => "icosahedron",
        }
    }
}

impl FromStr for PolyhedronKind {
    type Err = GeodomeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tetrahedron" => Ok(Self::Tetrahedron),
            "octahedron" => Ok(Self::Octahedron),
            "icosahedron" => Ok(Self::Icosahedron),
            _ => Err(OperationError::UnknownPolyhedron(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for PolyhedronKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Creates a base polyhedron as a new component and returns its first vertex.
///
/// Vertices are keyed with consecutive capital letters starting at `A`.
pub struct MakePolyhedron {
    kind: PolyhedronKind,
}

impl MakePolyhedron {
    /// Creates a new `MakePolyhedron` operation.
    #[must_use]
    pub fn new(kind: PolyhedronKind) -> Self {
        Self { kind }
    }

    /// Executes the operation, creating the polyhedron in the vertex store.
    ///
    /// # Errors
    ///
    /// Returns an error if wiring the vertices fails.
    pub fn execute(&self, store: &mut VertexStore) -> Result<VertexId> {
        let (points, edges) = match self.kind {
            PolyhedronKind::Tetrahedron => tetrahedron(),
            PolyhedronKind::Octahedron => octahedron(),
            PolyhedronKind::Icosahedron => icosahedron(),
        };

        let ids: Vec<VertexId> = points
            .into_iter()
            .zip('A'..='Z')
            .map(|(point, key)| store.add_vertex(VertexData::new(key.to_string(), point)))
            .collect();
        for (a, b) in edges {
            store.connect(ids[a], ids[b])?;
        }
        Ok(ids[0])
    }
}

type Layout = (Vec<Vector3>, Vec<(usize, usize)>);

/// Inscribed in the unit sphere with one vertex at +Y.
fn tetrahedron() -> Layout {
    let root2 = 2.0_f64.sqrt();
    let root6 = 6.0_f64.sqrt();
    let points = vec![
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, -1.0 / 3.0, 2.0 * root2 / 3.0),
        Vector3::new(-root6 / 3.0, -1.0 / 3.0, -root2 / 3.0),
        Vector3::new(root6 / 3.0, -1.0 / 3.0, -root2 / 3.0),
    ];
    let edges = vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
    (points, edges)
}

/// Unit vertices on the coordinate axes.
fn octahedron() -> Layout {
    let points = vec![
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
    ];
    // Top and bottom meet every equatorial vertex; the equator is a 4-cycle.
    let edges = vec![
        (0, 4), (0, 5), (0, 2), (0, 3),
        (1, 4), (1, 5), (1, 2), (1, 3),
        (4, 2), (4, 3), (5, 2), (5, 3),
    ];
    (points, edges)
}

/// Cyclic permutations of `(0, ±1, ±φ)`; every edge has length 2.
fn icosahedron() -> Layout {
    let points = (0..12_u8)
        .map(|i| {
            let a = 0.0;
            let b = if i % 2 == 0 { -1.0 } else { 1.0 };
            let c = if (i / 2) % 2 == 0 { -PHI } else { PHI };
            match i {
                0..=3 => Vector3::new(a, b, c),
                4..=7 => Vector3::new(b, c, a),
                _ => Vector3::new(c, a, b),
            }
        })
        .collect();
    let edges = vec![
        (0, 1), (0, 4), (0, 5), (0, 8), (0, 10),
        (1, 6), (1, 7), (1, 8), (1, 10),
        (2, 3), (2, 4), (2, 5), (2, 9), (2, 11),
        (3, 6), (3, 7), (3, 9), (3, 11),
        (4, 5), (4, 8), (4, 9),
        (5, 10), (5, 11),
        (6, 7), (6, 8), (6, 9),
        (7, 10), (7, 11),
        (8, 9),
        (10, 11),
    ];
    (points, edges)
}

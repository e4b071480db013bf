use slotmap::SecondaryMap;
use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::math::{VectorExt, VectorOverrides};
use crate::topology::{VertexData, VertexId, VertexStore};

/// Replacement key and coordinates for one copied vertex.
///
/// Every `None` field keeps the original vertex's value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexOverrides {
    pub key: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl VertexOverrides {
    /// Overrides only the position.
    #[must_use]
    pub fn position(x: f64, y: f64, z: f64) -> Self {
        Self {
            key: None,
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    fn apply(self, original: &VertexData) -> VertexData {
        let point = original.point.with_overrides(VectorOverrides {
            x: self.x,
            y: self.y,
            z: self.z,
        });
        let key = self.key.unwrap_or_else(|| original.key.clone());
        VertexData::new(key, point)
    }
}

/// Original-to-copy lookup produced by [`CopyGraph::execute_mapped`].
#[derive(Debug)]
pub struct CopyMapping {
    root: VertexId,
    map: SecondaryMap<VertexId, VertexId>,
}

impl CopyMapping {
    /// The copy of the root vertex.
    #[must_use]
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// The copy of `original`, if it was part of the copied component.
    #[must_use]
    pub fn get(&self, original: VertexId) -> Option<VertexId> {
        self.map.get(original).copied()
    }

    /// Number of copied vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// IDs of all copied vertices.
    pub fn copies(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.map.values().copied()
    }
}

/// Copies the component containing a vertex into a new, disjoint,
/// isomorphic component in the same store.
///
/// The original component is never modified.
pub struct CopyGraph {
    root: VertexId,
}

impl CopyGraph {
    /// Creates a new `CopyGraph` operation.
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self { root }
    }

    /// Executes a plain copy and returns the copy of the root.
    ///
    /// # Errors
    ///
    /// Returns an error if the root vertex is not in the store.
    pub fn execute(&self, store: &mut VertexStore) -> Result<VertexId> {
        self.execute_with(store, |_, _| Ok(VertexOverrides::default()))
    }

    /// Executes the copy, letting `transform` override the key and
    /// coordinates of each copied vertex. `transform` receives the original
    /// vertex and its traversal index.
    ///
    /// # Errors
    ///
    /// Returns an error if the root vertex is not in the store or if
    /// `transform` fails. Nothing is inserted on error.
    pub fn execute_with<F>(&self, store: &mut VertexStore, transform: F) -> Result<VertexId>
    where
        F: FnMut(&VertexData, usize) -> Result<VertexOverrides>,
    {
        Ok(self.execute_mapped(store, transform)?.root())
    }

    /// Like [`execute_with`](Self::execute_with), but returns the full
    /// original-to-copy mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the root vertex is not in the store or if
    /// `transform` fails. Nothing is inserted on error.
    #[tracing::instrument(skip_all)]
    pub fn execute_mapped<F>(&self, store: &mut VertexStore, mut transform: F) -> Result<CopyMapping>
    where
        F: FnMut(&VertexData, usize) -> Result<VertexOverrides>,
    {
        // Stage everything first so a failing transform leaves the store untouched.
        let mut staged = Vec::new();
        for (index, id) in store.traverse(self.root)? {
            let original = store.vertex(id)?;
            let data = transform(original, index)?.apply(original);
            staged.push((id, data, original.neighbors().to_vec()));
        }

        let mut map = SecondaryMap::new();
        let mut wiring = Vec::with_capacity(staged.len());
        for (original, data, neighbors) in staged {
            let copy = store.add_vertex(data);
            map.insert(original, copy);
            wiring.push((copy, neighbors));
        }

        for (copy, neighbors) in wiring {
            let mapped = neighbors.iter().filter_map(|n| map.get(*n).copied()).collect();
            store.vertex_mut(copy)?.neighbors = mapped;
        }

        let root = map
            .get(self.root)
            .copied()
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))?;
        debug!(vertices = map.len(), "copied component");
        Ok(CopyMapping { root, map })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeodomeError, GeometryError};
    use crate::math::Vector3;
    use crate::operations::query::Edges;

    fn triangle(store: &mut VertexStore) -> [VertexId; 3] {
        let a = store.add_vertex(VertexData::new("A", Vector3::new(1.0, 0.0, 0.0)));
        let b = store.add_vertex(VertexData::new("B", Vector3::new(0.0, 1.0, 0.0)));
        let c = store.add_vertex(VertexData::new("C", Vector3::new(0.0, 0.0, 1.0)));
        store.connect(a, b).unwrap();
        store.connect(b, c).unwrap();
        store.connect(c, a).unwrap();
        [a, b, c]
    }

    fn keys(store: &VertexStore, root: VertexId) -> Vec<String> {
        let mut keys: Vec<_> = store
            .component(root)
            .unwrap()
            .into_iter()
            .map(|id| store.vertex(id).unwrap().key.clone())
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn plain_copy_is_disjoint_and_isomorphic() {
        let mut store = VertexStore::new();
        let [a, b, c] = triangle(&mut store);

        let copy = CopyGraph::new(a).execute(&mut store).unwrap();
        assert_ne!(copy, a);
        assert_eq!(store.len(), 6);
        assert_eq!(keys(&store, copy), keys(&store, a));

        let copied = store.component(copy).unwrap();
        assert!(copied.iter().all(|id| ![a, b, c].contains(id)));
        assert_eq!(Edges::new(copy).execute(&store).unwrap().len(), 3);
        assert_eq!(store.vertex(copy).unwrap().point, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn mapping_mirrors_adjacency() {
        let mut store = VertexStore::new();
        let [a, b, c] = triangle(&mut store);
        store.disconnect(b, c).unwrap();

        let mapping = CopyGraph::new(b)
            .execute_mapped(&mut store, |_, _| Ok(VertexOverrides::default()))
            .unwrap();
        assert_eq!(mapping.len(), 3);
        let (ca, cb, cc) = (
            mapping.get(a).unwrap(),
            mapping.get(b).unwrap(),
            mapping.get(c).unwrap(),
        );
        assert_eq!(mapping.root(), cb);
        assert!(store.is_connected(ca, cb));
        assert!(store.is_connected(ca, cc));
        assert!(!store.is_connected(cb, cc));
    }

    #[test]
    fn transform_overrides_only_supplied_fields() {
        let mut store = VertexStore::new();
        let [a, ..] = triangle(&mut store);

        let copy = CopyGraph::new(a)
            .execute_with(&mut store, |vertex, index| {
                Ok(VertexOverrides {
                    key: Some(format!("{}{index}", vertex.key)),
                    y: Some(0.0),
                    ..VertexOverrides::default()
                })
            })
            .unwrap();

        let root = store.vertex(copy).unwrap();
        assert_eq!(root.key, "A0");
        assert_eq!(root.point, Vector3::new(1.0, 0.0, 0.0));
        for id in store.component(copy).unwrap() {
            assert!(store.vertex(id).unwrap().point.y.abs() < f64::EPSILON);
        }
        // Originals untouched.
        assert_eq!(store.vertex(a).unwrap().key, "A");
    }

    #[test]
    fn failing_transform_inserts_nothing() {
        let mut store = VertexStore::new();
        let [a, ..] = triangle(&mut store);

        let result = CopyGraph::new(a).execute_with(&mut store, |_, index| {
            if index == 2 {
                Err(GeometryError::DegenerateVector("test".into()).into())
            } else {
                Ok(VertexOverrides::default())
            }
        });
        assert!(matches!(result, Err(GeodomeError::Geometry(_))));
        assert_eq!(store.len(), 3);
    }
}

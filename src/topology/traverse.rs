use slotmap::SecondaryMap;

use super::vertex::VertexId;
use super::VertexStore;

/// Depth-first walk over the connected component of a root vertex.
///
/// Yields `(index, id)` pairs where `index` is the visit ordinal. Every
/// vertex of the component is yielded exactly once, whatever cycles the
/// graph contains. Use the usual iterator adapters (`for_each`, `fold`,
/// `map`) for side effects and accumulation.
pub struct Traversal<'a> {
    store: &'a VertexStore,
    stack: Vec<VertexId>,
    seen: SecondaryMap<VertexId, ()>,
    index: usize,
}

impl<'a> Traversal<'a> {
    pub(super) fn new(store: &'a VertexStore, root: VertexId) -> Self {
        let mut seen = SecondaryMap::new();
        seen.insert(root, ());
        Self {
            store,
            stack: vec![root],
            seen,
            index: 0,
        }
    }
}

impl Iterator for Traversal<'_> {
    type Item = (usize, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(data) = self.store.vertices.get(id) {
            for &neighbor in &data.neighbors {
                if self.seen.insert(neighbor, ()).is_none() {
                    self.stack.push(neighbor);
                }
            }
        }
        let index = self.index;
        self.index += 1;
        Some((index, id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use crate::math::Vector3;
    use crate::topology::{VertexData, VertexStore};

    fn ring(store: &mut VertexStore, n: usize) -> Vec<super::VertexId> {
        let ids: Vec<_> = (0..n)
            .map(|i| store.add_vertex(VertexData::new(format!("v{i}"), Vector3::zeros())))
            .collect();
        for i in 0..n {
            store.connect(ids[i], ids[(i + 1) % n]).unwrap();
        }
        ids
    }

    #[test]
    fn visits_each_vertex_of_a_cycle_once() {
        let mut store = VertexStore::new();
        let ids = ring(&mut store, 7);

        let visited: Vec<_> = store.traverse(ids[3]).unwrap().collect();
        assert_eq!(visited.len(), 7);
        assert_eq!(visited[0], (0, ids[3]));

        let unique: HashSet<_> = visited.iter().map(|&(_, id)| id).collect();
        assert_eq!(unique, ids.iter().copied().collect());

        let indices: Vec<_> = visited.iter().map(|&(i, _)| i).collect();
        assert_eq!(indices, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn stays_inside_the_component() {
        let mut store = VertexStore::new();
        let first = ring(&mut store, 3);
        let second = ring(&mut store, 4);

        let reached: HashSet<_> = store.traverse(second[0]).unwrap().map(|(_, id)| id).collect();
        assert_eq!(reached.len(), 4);
        assert!(first.iter().all(|id| !reached.contains(id)));
    }

    #[test]
    fn folds_over_the_component() {
        let mut store = VertexStore::new();
        let ids = ring(&mut store, 5);
        let index_sum = store.traverse(ids[0]).unwrap().fold(0, |acc, (i, _)| acc + i);
        assert_eq!(index_sum, 10);
    }

    #[test]
    fn isolated_vertex_visits_itself() {
        let mut store = VertexStore::new();
        let id = store.add_vertex(VertexData::new("solo", Vector3::zeros()));
        assert_eq!(store.traverse(id).unwrap().collect::<Vec<_>>(), vec![(0, id)]);
    }
}

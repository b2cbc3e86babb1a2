/*
Adjacency-list graph over integer vertex keys.

Keys are mapped to dense slots in the order they are first seen, so every
per-run structure in the engine can be a plain Vec indexed by slot, the same
way the OSM loader builds `id_to_idx` / `idx_to_id` before filling `adj`.
*/

use fnv::FnvHashMap;

use crate::error::{GraphError, Result};

pub type VertexId = i64;
pub type Weight = i64;

/// Dense index of a vertex inside a `Graph`.
pub type Slot = usize;

#[derive(Debug, Default, Clone)]
pub struct Graph {
    id_to_slot: FnvHashMap<VertexId, Slot>,
    slot_to_id: Vec<VertexId>,
    adj: Vec<Vec<(Slot, Weight)>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_vertex(&mut self, id: VertexId) -> Slot {
        if let Some(&slot) = self.id_to_slot.get(&id) {
            return slot;
        }
        let slot = self.slot_to_id.len();
        self.slot_to_id.push(id);
        self.adj.push(Vec::new());
        self.id_to_slot.insert(id, slot);
        slot
    }

    /// Registers both endpoints, then appends `(to, weight)` to `from`'s list.
    /// Parallel edges are kept. Weights are assumed non-negative.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        let u = self.ensure_vertex(from);
        let v = self.ensure_vertex(to);
        self.adj[u].push((v, weight));
    }

    /// Vertex keys in first-seen order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.slot_to_id.iter().copied()
    }

    pub fn neighbors(
        &self,
        id: VertexId,
    ) -> Result<impl ExactSizeIterator<Item = (VertexId, Weight)> + '_> {
        let slot = self.slot(id).ok_or(GraphError::VertexNotFound(id))?;
        Ok(self.adj[slot]
            .iter()
            .map(move |&(to, w)| (self.slot_to_id[to], w)))
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.id_to_slot.contains_key(&id)
    }

    pub fn vertex_count(&self) -> usize {
        self.slot_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_to_id.is_empty()
    }

    pub(crate) fn slot(&self, id: VertexId) -> Option<Slot> {
        self.id_to_slot.get(&id).copied()
    }

    pub(crate) fn id(&self, slot: Slot) -> VertexId {
        self.slot_to_id[slot]
    }

    pub(crate) fn ids(&self) -> &[VertexId] {
        &self.slot_to_id
    }

    pub(crate) fn edges_from(&self, slot: Slot) -> &[(Slot, Weight)] {
        &self.adj[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_both_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1);
        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.contains(2));
        assert_eq!(graph.neighbors(2).unwrap().count(), 0);
    }

    #[test]
    fn keeps_first_seen_order() {
        let mut graph = Graph::new();
        graph.add_edge(10, 3, 1);
        graph.add_edge(-4, 10, 2);
        graph.add_edge(3, 99, 2);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![10, 3, -4, 99]);
    }

    #[test]
    fn keeps_parallel_edges_in_order() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 10);
        graph.add_edge(1, 3, 4);
        graph.add_edge(1, 2, 3);
        assert_eq!(
            graph.neighbors(1).unwrap().collect::<Vec<_>>(),
            vec![(2, 10), (3, 4), (2, 3)]
        );
    }

    #[test]
    fn unknown_vertex() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1);
        assert_eq!(graph.neighbors(5).err(), Some(GraphError::VertexNotFound(5)));
    }

    #[test]
    fn self_loop() {
        let mut graph = Graph::new();
        graph.add_edge(7, 7, 2);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.neighbors(7).unwrap().collect::<Vec<_>>(), vec![(7, 2)]);
    }
}

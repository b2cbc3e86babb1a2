use tracing::debug;

use crate::error::{GraphError, Result};
use crate::frontier::{DecreaseKeyFrontier, Distance, Frontier, FrontierKind, LazyFrontier};
use crate::graph::{Graph, Slot, VertexId};

/// Distances from one source to every vertex of the graph, `None` when unreachable.
/// Iterates in the graph's vertex order.
#[derive(Debug, Clone)]
pub struct DistanceMap<'g> {
    graph: &'g Graph,
    dist: Vec<Option<Distance>>,
}

impl<'g> DistanceMap<'g> {
    /// `None` for unreachable vertices and for keys the graph doesn't have.
    pub fn get(&self, vertex: VertexId) -> Option<Distance> {
        self.graph.slot(vertex).and_then(|slot| self.dist[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Option<Distance>)> + '_ {
        self.graph.ids().iter().copied().zip(self.dist.iter().copied())
    }

    pub fn finite(&self) -> impl Iterator<Item = (VertexId, Distance)> + '_ {
        self.iter().filter_map(|(v, d)| d.map(|d| (v, d)))
    }

    /// Last finite distance in iteration order.
    pub fn last_finite(&self) -> Option<Distance> {
        self.dist.iter().rev().find_map(|d| *d)
    }

    pub fn reachable(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}

impl PartialEq for DistanceMap<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for DistanceMap<'_> {}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrontierStats {
    pub pushes: usize,
    pub stale_pops: usize,
    pub settled: usize,
    pub peak_len: usize,
}

#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    pub distances: DistanceMap<'g>,
    /// Sum of all finite distances, saturating at `i64::MAX`.
    pub total_cost: i64,
    pub stats: FrontierStats,
}

/// Dijkstra from `source` to all vertices, on the lazy-deletion frontier.
pub fn dijkstra(graph: &Graph, source: VertexId) -> Result<ShortestPaths<'_>> {
    dijkstra_with(graph, source, FrontierKind::Lazy)
}

pub fn dijkstra_with(
    graph: &Graph,
    source: VertexId,
    kind: FrontierKind,
) -> Result<ShortestPaths<'_>> {
    let start = graph
        .slot(source)
        .ok_or(GraphError::InvalidSource(source))?;
    let (dist, stats) = match kind {
        FrontierKind::Lazy => run(graph, start, LazyFrontier::new()),
        FrontierKind::DecreaseKey => run(graph, start, DecreaseKeyFrontier::new()),
    };
    let total_cost = dist
        .iter()
        .flatten()
        .fold(0i64, |acc, d| acc.saturating_add(*d));
    debug!(
        source,
        frontier = %kind,
        settled = stats.settled,
        pushes = stats.pushes,
        stale_pops = stats.stale_pops,
        peak_len = stats.peak_len,
        total_cost,
        "dijkstra finished"
    );
    Ok(ShortestPaths {
        distances: DistanceMap { graph, dist },
        total_cost,
        stats,
    })
}

fn run<F: Frontier>(
    graph: &Graph,
    start: Slot,
    mut frontier: F,
) -> (Vec<Option<Distance>>, FrontierStats) {
    let mut dist: Vec<Option<Distance>> = vec![None; graph.vertex_count()];
    let mut stats = FrontierStats::default();

    dist[start] = Some(0);
    frontier.push(start, graph.id(start), 0);
    stats.pushes += 1;
    stats.peak_len = frontier.len();

    while let Some((cost, slot)) = frontier.pop_min() {
        // Left behind by a relaxation whose removal missed.
        if dist[slot].map_or(true, |best| cost > best) {
            stats.stale_pops += 1;
            continue;
        }
        stats.settled += 1;
        for &(next, w) in graph.edges_from(slot) {
            // An overflowing sum can't be shorter than anything recorded.
            let Some(next_cost) = cost.checked_add(w) else {
                continue;
            };
            let old = dist[next];
            if old.map_or(true, |d| next_cost < d) {
                dist[next] = Some(next_cost);
                frontier.relax(next, graph.id(next), old, next_cost);
                stats.pushes += 1;
                stats.peak_len = stats.peak_len.max(frontier.len());
            }
        }
    }
    (dist, stats)
}

//! Runs Dijkstra from every vertex of a graph and folds the per-source results
//! into one summary.

use hashbrown::HashSet;
use medians::Medianf64;
use std::time::{Duration, SystemTime};
use tracing::info;

use crate::dijkstra::{dijkstra_with, ShortestPaths};
use crate::error::{GraphError, Result};
use crate::frontier::FrontierKind;
use crate::graph::{Graph, VertexId};

/// One finished Dijkstra run, handed to the caller before the sweep moves on.
pub struct SourceRun<'a, 'g> {
    pub source: VertexId,
    pub paths: &'a ShortestPaths<'g>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub sources: usize,
    /// Sum over sources of the last finite distance in vertex order.
    pub grand_total: i64,
    /// Distinct vertices reached from at least one source.
    pub reached: usize,
    pub elapsed: Duration,
    pub run_times_ms: Vec<f64>,
}

impl SweepSummary {
    pub fn mean_run_ms(&self) -> Option<f64> {
        if self.run_times_ms.is_empty() {
            return None;
        }
        Some(self.run_times_ms.iter().sum::<f64>() / self.run_times_ms.len() as f64)
    }

    pub fn median_run_ms(&self) -> Option<f64> {
        if self.run_times_ms.is_empty() {
            return None;
        }
        self.run_times_ms.as_slice().medf_checked().ok()
    }
}

#[derive(Default)]
struct SweepState {
    visited: HashSet<VertexId>,
    reached: HashSet<VertexId>,
    grand_total: i64,
    run_times_ms: Vec<f64>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sweep {
    kind: FrontierKind,
}

impl Sweep {
    pub fn new(kind: FrontierKind) -> Self {
        Self { kind }
    }

    /// Calls `on_run` once per source, in vertex order. `edge_count` is carried
    /// through to the summary as-is.
    pub fn run<F>(&self, graph: &Graph, edge_count: usize, mut on_run: F) -> Result<SweepSummary>
    where
        F: FnMut(&SourceRun),
    {
        info!(
            vertices = graph.vertex_count(),
            edges = edge_count,
            frontier = %self.kind,
            "starting sweep"
        );
        let started = SystemTime::now();

        let state = graph
            .vertices()
            .try_fold(SweepState::default(), |mut state, source| {
                if state.visited.contains(&source) {
                    return Ok(state);
                }
                let now = SystemTime::now();
                let paths = dijkstra_with(graph, source, self.kind)?;
                let elapsed = now.elapsed().unwrap_or_default();

                state.reached.extend(paths.distances.finite().map(|(v, _)| v));
                let last = paths.distances.last_finite().unwrap_or(0);
                state.grand_total = state.grand_total.saturating_add(last);
                state.run_times_ms.push(elapsed.as_secs_f64() * 1000.0);
                state.visited.insert(source);

                on_run(&SourceRun {
                    source,
                    paths: &paths,
                    elapsed,
                });
                Ok::<_, GraphError>(state)
            })?;

        let elapsed = started.elapsed().unwrap_or_default();
        info!(
            sources = state.visited.len(),
            grand_total = state.grand_total,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "sweep finished"
        );

        Ok(SweepSummary {
            vertex_count: graph.vertex_count(),
            edge_count,
            sources: state.visited.len(),
            grand_total: state.grand_total,
            reached: state.reached.len(),
            elapsed,
            run_times_ms: state.run_times_ms,
        })
    }
}

//! Single-source shortest paths from every vertex of a weighted directed graph.
//!
//! Load a DIMACS graph with [`dimacs::read_graph_from_path`], then either call
//! [`dijkstra::dijkstra`] for one source or drive all of them with [`sweep::Sweep`].

pub mod dijkstra;
pub mod dimacs;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod sweep;

pub use dijkstra::{dijkstra, dijkstra_with, DistanceMap, FrontierStats, ShortestPaths};
pub use error::{GraphError, LoadError};
pub use frontier::{Distance, FrontierKind};
pub use graph::{Graph, VertexId, Weight};
pub use sweep::{SourceRun, Sweep, SweepSummary};

//! Error types for graph loading and shortest-path queries.

use thiserror::Error;

use crate::graph::VertexId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Neighbor lookup on a key that never appeared in any edge.
    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    /// Dijkstra was asked to start from a vertex the graph doesn't have.
    #[error("invalid source vertex {0}: not present in graph")]
    InvalidSource(VertexId),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An `a ` line that isn't `a <from> <to> <weight>` with integer fields.
    #[error("malformed edge on line {line}: {content:?}")]
    MalformedEdge { line: usize, content: String },
}

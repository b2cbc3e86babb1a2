/*
Loader for DIMACS shortest-path graphs (.gr).

Only arc lines are read: `a <from> <to> <weight>`. Comment (`c`), problem (`p`) and any
other lines are skipped without checks.
*/

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::info;

use crate::error::LoadError;
use crate::graph::{Graph, VertexId, Weight};

pub type Edge = (VertexId, VertexId, Weight);

#[derive(Debug, Default, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    /// Arc lines read, parallel arcs included.
    pub edge_count: usize,
}

/// `Ok(None)` for anything that is not an arc line. `line_no` is only used in errors.
pub fn parse_edge_line(line: &str, line_no: usize) -> Result<Option<Edge>, LoadError> {
    let Some(rest) = line.strip_prefix("a ") else {
        return Ok(None);
    };
    let malformed = || LoadError::MalformedEdge {
        line: line_no,
        content: line.to_string(),
    };
    let fields: Vec<&str> = rest.split_whitespace().collect();
    let &[from, to, weight] = fields.as_slice() else {
        return Err(malformed());
    };
    let from: VertexId = from.parse().map_err(|_| malformed())?;
    let to: VertexId = to.parse().map_err(|_| malformed())?;
    let weight: Weight = weight.parse().map_err(|_| malformed())?;
    Ok(Some((from, to, weight)))
}

pub fn read_graph<R: Read>(reader: R) -> Result<LoadedGraph, LoadError> {
    let mut loaded = LoadedGraph::default();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if let Some((from, to, weight)) = parse_edge_line(&line, idx + 1)? {
            loaded.graph.add_edge(from, to, weight);
            loaded.edge_count += 1;
        }
    }
    Ok(loaded)
}

pub fn read_graph_from_path<P: AsRef<Path>>(path: P) -> Result<LoadedGraph, LoadError> {
    let file = File::open(path.as_ref())?;
    let loaded = read_graph(file)?;
    info!(
        path = %path.as_ref().display(),
        vertices = loaded.graph.vertex_count(),
        edges = loaded.edge_count,
        "graph loaded"
    );
    Ok(loaded)
}

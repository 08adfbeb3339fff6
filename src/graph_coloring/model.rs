//! Graph and coloring data types.

use crate::error::{LocalSearchError, Result};
use std::fmt;

/// A vertex of a coloring: its index and assigned color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub index: usize,
    pub color: usize,
}

/// An undirected edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

/// Static description of an undirected graph.
///
/// Adjacency lists are sorted and de-duplicated, so iterating them is
/// deterministic for a given edge list.
///
/// With the `serde` feature only the vertex count and edge list are
/// serialized; deserializing goes through [`Graph::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GraphData", into = "GraphData"))]
pub struct Graph {
    n_vertices: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph, rejecting out-of-range endpoints and self-loops.
    pub fn new(n_vertices: usize, edges: Vec<Edge>) -> Result<Self> {
        let mut adjacency = vec![Vec::new(); n_vertices];
        for edge in &edges {
            if edge.start >= n_vertices || edge.end >= n_vertices {
                return Err(LocalSearchError::InvalidArgument(format!(
                    "edge ({}, {}) out of range for {n_vertices} vertices",
                    edge.start, edge.end
                )));
            }
            if edge.start == edge.end {
                return Err(LocalSearchError::InvalidArgument(format!(
                    "self-loop on vertex {}",
                    edge.start
                )));
            }
            adjacency[edge.start].push(edge.end);
            adjacency[edge.end].push(edge.start);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Ok(Self {
            n_vertices,
            edges,
            adjacency,
        })
    }

    /// Convenience constructor from `(start, end)` pairs.
    pub fn from_pairs(n_vertices: usize, pairs: &[(usize, usize)]) -> Result<Self> {
        Self::new(n_vertices, pairs.iter().copied().map(Edge::from).collect())
    }

    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of vertex `v`, sorted ascending.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Checks that `state` colors exactly the vertices of this graph, each
    /// with a color below the vertex count.
    pub fn validate_coloring(&self, state: &GraphColoringState) -> Result<()> {
        if state.len() != self.n_vertices {
            return Err(LocalSearchError::InvalidArgument(format!(
                "coloring has {} vertices, graph has {}",
                state.len(),
                self.n_vertices
            )));
        }
        if let Some(v) = state.coloring().iter().find(|v| v.color >= self.n_vertices) {
            return Err(LocalSearchError::InvalidArgument(format!(
                "vertex {} has color {}, must be below {}",
                v.index, v.color, self.n_vertices
            )));
        }
        Ok(())
    }
}

/// Serialized form of a [`Graph`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphData {
    n_vertices: usize,
    edges: Vec<Edge>,
}

#[cfg(feature = "serde")]
impl TryFrom<GraphData> for Graph {
    type Error = LocalSearchError;

    fn try_from(data: GraphData) -> Result<Self> {
        Graph::new(data.n_vertices, data.edges)
    }
}

#[cfg(feature = "serde")]
impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        GraphData {
            n_vertices: graph.n_vertices,
            edges: graph.edges,
        }
    }
}

/// A candidate coloring: one [`Vertex`] per graph vertex, indexed by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphColoringState {
    coloring: Vec<Vertex>,
}

impl GraphColoringState {
    /// Builds a state from a vertex sequence.
    ///
    /// Vertex `i` must sit at position `i`.
    pub fn new(coloring: Vec<Vertex>) -> Result<Self> {
        if let Some((pos, v)) = coloring.iter().enumerate().find(|(i, v)| v.index != *i) {
            return Err(LocalSearchError::InvalidArgument(format!(
                "vertex {} stored at position {pos}",
                v.index
            )));
        }
        Ok(Self { coloring })
    }

    /// Builds a state where vertex `i` has color `colors[i]`.
    ///
    /// Unchecked against any graph; see
    /// [`GraphColoringProblem::state`](super::GraphColoringProblem::state).
    pub fn from_colors(colors: &[usize]) -> Self {
        let coloring = colors
            .iter()
            .enumerate()
            .map(|(index, &color)| Vertex { index, color })
            .collect();
        Self { coloring }
    }

    pub fn coloring(&self) -> &[Vertex] {
        &self.coloring
    }

    /// Mutable access for moves working on their own copy.
    pub(crate) fn coloring_mut(&mut self) -> &mut [Vertex] {
        &mut self.coloring
    }

    pub fn len(&self) -> usize {
        self.coloring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coloring.is_empty()
    }

    pub fn color(&self, v: usize) -> usize {
        self.coloring[v].color
    }

    pub fn colors(&self) -> Vec<usize> {
        self.coloring.iter().map(|v| v.color).collect()
    }

    /// Largest color id in use, or `None` for an empty coloring.
    pub fn max_color(&self) -> Option<usize> {
        self.coloring.iter().map(|v| v.color).max()
    }

    /// Whether no edge of `graph` joins two vertices of the same color.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        graph
            .edges()
            .iter()
            .all(|e| self.color(e.start) != self.color(e.end))
    }
}

impl fmt::Display for GraphColoringState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.coloring.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v.color)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_adjacency_sorted_and_deduplicated() {
        let graph = Graph::from_pairs(4, &[(0, 2), (0, 1), (1, 0), (3, 0)]).unwrap();
        assert_eq!(graph.neighbors(0), &[1, 2, 3]);
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.degree(3), 1);
        assert_eq!(graph.edges().len(), 4);
    }

    #[test]
    fn test_graph_rejects_out_of_range_edge() {
        let err = Graph::from_pairs(3, &[(0, 3)]).unwrap_err();
        assert!(matches!(err, LocalSearchError::InvalidArgument(_)));
    }

    #[test]
    fn test_graph_rejects_self_loop() {
        assert!(Graph::from_pairs(3, &[(1, 1)]).is_err());
    }

    #[test]
    fn test_state_rejects_misplaced_vertex() {
        let coloring = vec![Vertex { index: 1, color: 0 }, Vertex { index: 0, color: 0 }];
        assert!(GraphColoringState::new(coloring).is_err());
    }

    #[test]
    fn test_validate_coloring() {
        let graph = Graph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();
        assert!(graph.validate_coloring(&GraphColoringState::from_colors(&[0, 1, 0])).is_ok());
        assert!(graph.validate_coloring(&GraphColoringState::from_colors(&[0, 1])).is_err());
        assert!(graph.validate_coloring(&GraphColoringState::from_colors(&[0, 1, 3])).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_graph_data_conversion_validates() {
        let bad = GraphData {
            n_vertices: 2,
            edges: vec![Edge::new(0, 5)],
        };
        assert!(matches!(
            Graph::try_from(bad),
            Err(LocalSearchError::InvalidArgument(_))
        ));

        let graph = Graph::from_pairs(3, &[(0, 1), (2, 1)]).unwrap();
        let data = GraphData::from(graph.clone());
        assert_eq!(Graph::try_from(data).unwrap(), graph);
    }

    #[test]
    fn test_state_from_colors() {
        let state = GraphColoringState::from_colors(&[0, 1, 0, 1]);
        assert_eq!(state.len(), 4);
        assert_eq!(state.color(2), 0);
        assert_eq!(state.max_color(), Some(1));
        assert_eq!(state.to_string(), "[0, 1, 0, 1]");
    }

    #[test]
    fn test_is_proper() {
        let graph = Graph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert!(GraphColoringState::from_colors(&[0, 1, 0, 1]).is_proper(&graph));
        assert!(!GraphColoringState::from_colors(&[0, 0, 1, 1]).is_proper(&graph));
    }
}

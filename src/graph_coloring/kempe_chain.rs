//! Kempe-chain neighborhood.
//!
//! Recoloring a vertex `v` from `a` to `b` and then swapping `a` and `b`
//! across the connected component of the `{a, b}`-induced subgraph that
//! contains `v` keeps a proper coloring proper: every edge inside the
//! component has both endpoints flipped, and edges leaving it touch a
//! vertex colored outside `{a, b}`.

use super::domain::{draw_recolor, recolor_pairs, ColorDomain};
use super::model::{Graph, GraphColoringState, Vertex};
use crate::error::{LocalSearchError, Result};
use crate::problem::{Move, MoveGenerator};
use rand::Rng;
use std::collections::VecDeque;
use std::ops::Range;
use std::sync::Arc;

/// Recolors one vertex and repairs the coloring along its Kempe chain.
#[derive(Debug, Clone)]
pub struct KempeChainMove<'a> {
    graph: &'a Graph,
    from_state: &'a GraphColoringState,
    idx: usize,
    color: usize,
    old_color: usize,
}

impl<'a> KempeChainMove<'a> {
    /// Creates a move recoloring vertex `idx` to `color`.
    ///
    /// Fails when `idx` is not a vertex of `graph`, when `from_state` does
    /// not color exactly the vertices of `graph`, or when `color` is not
    /// below the vertex count.
    ///
    /// Any color below the vertex count is accepted; a generator's
    /// [`ColorDomain`] only restricts the moves it proposes.
    pub fn new(
        graph: &'a Graph,
        from_state: &'a GraphColoringState,
        idx: usize,
        color: usize,
    ) -> Result<Self> {
        let n = graph.n_vertices();
        if from_state.len() != n {
            return Err(LocalSearchError::InvalidArgument(format!(
                "coloring has {} vertices, graph has {n}",
                from_state.len()
            )));
        }
        if idx >= n {
            return Err(LocalSearchError::InvalidArgument(format!(
                "vertex {idx} out of range for {n} vertices"
            )));
        }
        if color >= n {
            return Err(LocalSearchError::InvalidArgument(format!(
                "color {color} must be below the vertex count {n}"
            )));
        }
        Ok(Self::from_parts(graph, from_state, idx, color))
    }

    pub(crate) fn from_parts(
        graph: &'a Graph,
        from_state: &'a GraphColoringState,
        idx: usize,
        color: usize,
    ) -> Self {
        Self {
            graph,
            from_state,
            idx,
            color,
            old_color: from_state.color(idx),
        }
    }

    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn color(&self) -> usize {
        self.color
    }

    pub fn old_color(&self) -> usize {
        self.old_color
    }

    /// Breadth-first swap of `old_color` and `color` over the chain rooted
    /// at `idx`. Expects `idx` to already carry `color`.
    fn kempe_chain(&self, coloring: &mut [Vertex]) {
        let mut visited = vec![false; coloring.len()];
        visited[self.idx] = true;
        let mut queue = VecDeque::from([self.idx]);

        while let Some(v) = queue.pop_front() {
            for &u in self.graph.neighbors(v) {
                if visited[u] {
                    continue;
                }
                let c = coloring[u].color;
                if c == self.old_color {
                    coloring[u].color = self.color;
                } else if c == self.color {
                    coloring[u].color = self.old_color;
                } else {
                    continue;
                }
                visited[u] = true;
                queue.push_back(u);
            }
        }
    }
}

impl Move<GraphColoringState> for KempeChainMove<'_> {
    fn make(&self) -> GraphColoringState {
        let mut state = self.from_state.clone();
        let coloring = state.coloring_mut();
        coloring[self.idx].color = self.color;
        self.kempe_chain(coloring);
        state
    }
}

/// Generator of Kempe-chain moves.
#[derive(Debug, Clone)]
pub struct KempeChain {
    graph: Arc<Graph>,
    domain: ColorDomain,
}

impl KempeChain {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self {
            graph,
            domain: ColorDomain::default(),
        }
    }

    pub fn with_domain(mut self, domain: ColorDomain) -> Self {
        self.domain = domain;
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Colors a vertex may take in `state`. Every vertex currently shares
    /// the same domain.
    pub fn available_colors(&self, _vertex: usize, state: &GraphColoringState) -> Range<usize> {
        self.domain
            .available_colors(state, self.graph.n_vertices())
    }
}

impl MoveGenerator<GraphColoringState> for KempeChain {
    type Move<'a> = KempeChainMove<'a>;

    fn available_moves<'a>(
        &'a self,
        state: &'a GraphColoringState,
    ) -> impl Iterator<Item = KempeChainMove<'a>> + 'a {
        let k = self.domain.available_colors(state, self.graph.n_vertices()).end;
        recolor_pairs(state, k)
            .map(move |(idx, color)| KempeChainMove::from_parts(&self.graph, state, idx, color))
    }

    fn random_moves<'a, R: Rng>(
        &'a self,
        state: &'a GraphColoringState,
        rng: &'a mut R,
    ) -> impl Iterator<Item = KempeChainMove<'a>> + 'a {
        let k = self.domain.available_colors(state, self.graph.n_vertices()).end;
        std::iter::from_fn(move || {
            draw_recolor(state, k, &mut *rng)
                .map(|(idx, color)| KempeChainMove::from_parts(&self.graph, state, idx, color))
        })
    }
}

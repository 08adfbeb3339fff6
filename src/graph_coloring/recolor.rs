//! Single-vertex recolor neighborhood (no chain repair).

use super::domain::{draw_recolor, recolor_pairs, ColorDomain};
use super::model::{Graph, GraphColoringState};
use crate::error::{LocalSearchError, Result};
use crate::problem::{Move, MoveGenerator};
use rand::Rng;
use std::sync::Arc;

/// Assigns a new color to one vertex, leaving every other vertex alone.
#[derive(Debug, Clone)]
pub struct RecolorMove<'a> {
    from_state: &'a GraphColoringState,
    idx: usize,
    color: usize,
}

impl<'a> RecolorMove<'a> {
    pub fn new(from_state: &'a GraphColoringState, idx: usize, color: usize) -> Result<Self> {
        let n = from_state.len();
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
        Ok(Self {
            from_state,
            idx,
            color,
        })
    }

    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn color(&self) -> usize {
        self.color
    }
}

impl Move<GraphColoringState> for RecolorMove<'_> {
    fn make(&self) -> GraphColoringState {
        let mut state = self.from_state.clone();
        state.coloring_mut()[self.idx].color = self.color;
        state
    }
}

/// Generator of [`RecolorMove`]s.
#[derive(Debug, Clone)]
pub struct Recolor {
    graph: Arc<Graph>,
    domain: ColorDomain,
}

impl Recolor {
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
}

impl MoveGenerator<GraphColoringState> for Recolor {
    type Move<'a> = RecolorMove<'a>;

    fn available_moves<'a>(
        &'a self,
        state: &'a GraphColoringState,
    ) -> impl Iterator<Item = RecolorMove<'a>> + 'a {
        let k = self.domain.available_colors(state, self.graph.n_vertices()).end;
        recolor_pairs(state, k).map(move |(idx, color)| RecolorMove {
            from_state: state,
            idx,
            color,
        })
    }

    fn random_moves<'a, R: Rng>(
        &'a self,
        state: &'a GraphColoringState,
        rng: &'a mut R,
    ) -> impl Iterator<Item = RecolorMove<'a>> + 'a {
        let k = self.domain.available_colors(state, self.graph.n_vertices()).end;
        std::iter::from_fn(move || {
            draw_recolor(state, k, &mut *rng).map(|(idx, color)| RecolorMove {
                from_state: state,
                idx,
                color,
            })
        })
    }
}

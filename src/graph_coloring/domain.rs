//! Color-count policy: which colors a vertex may take.

use super::model::GraphColoringState;
use rand::Rng;
use std::ops::Range;

/// Determines the colors available to a vertex in a given state.
///
/// Both policies yield a contiguous range `0..k`, capped at the number of
/// vertices (a coloring never needs more colors than vertices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorDomain {
    /// Every color currently in use plus one fresh color.
    #[default]
    Adaptive,
    /// A fixed palette `0..k`.
    Fixed(usize),
}

impl ColorDomain {
    /// Colors available to any vertex of `state`.
    pub fn available_colors(&self, state: &GraphColoringState, n_vertices: usize) -> Range<usize> {
        let k = match *self {
            ColorDomain::Adaptive => state.max_color().map_or(0, |c| c + 2),
            ColorDomain::Fixed(k) => k,
        };
        0..k.min(n_vertices)
    }
}

/// Enumerates every `(vertex, color)` pair with `color` in `0..k` differing
/// from the vertex's current color, in vertex-then-color order.
pub(crate) fn recolor_pairs(
    state: &GraphColoringState,
    k: usize,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    state.coloring().iter().flat_map(move |v| {
        (0..k)
            .filter(move |&c| c != v.color)
            .map(move |c| (v.index, c))
    })
}

/// Draws a uniform vertex and a uniform color in `0..k` other than its
/// current one. Returns `None` when no vertex can change color.
pub(crate) fn draw_recolor<R: Rng>(
    state: &GraphColoringState,
    k: usize,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let movable = match k {
        0 => false,
        1 => state.coloring().iter().any(|v| v.color != 0),
        _ => !state.is_empty(),
    };
    if !movable {
        return None;
    }
    loop {
        let idx = rng.random_range(0..state.len());
        let current = state.color(idx);
        if current < k {
            if k == 1 {
                continue;
            }
            let r = rng.random_range(0..k - 1);
            return Some((idx, if r >= current { r + 1 } else { r }));
        }
        return Some((idx, rng.random_range(0..k)));
    }
}

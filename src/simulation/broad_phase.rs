//! Sort-and-sweep broad phase
//!
//! Instead of testing all n^2 sphere pairs, bodies are sorted by the minimum
//! extent of their projection onto one axis and swept in order: once the next
//! body's minimum endpoint passes the current body's maximum endpoint, no
//! later body can overlap it on that axis and the inner scan stops.
//!
//! The sweep axis is re-selected every step by positional variance: the axis
//! bodies are most spread out along culls the most pairs. Overlap on one axis
//! is necessary but not sufficient for 3D overlap, so the candidate list is a
//! superset of the truly colliding pairs; the narrow phase supplies the exact
//! test.

use std::cmp::Ordering;

use crate::simulation::states::Body;

/// Refresh every body's per-axis endpoints from its position and radius.
pub fn update_endpoints(bodies: &mut [Body]) {
    for b in bodies.iter_mut() {
        let r = b.radius();
        for i in 0..3 {
            b.min_ep[i] = b.x[i] - r;
            b.max_ep[i] = b.x[i] + r;
        }
    }
}

/// Body indices sorted ascending by minimum endpoint along `axis`.
///
/// The bodies themselves are never reordered, so indices held elsewhere
/// (spring endpoints, candidate pairs) stay stable across steps and spawns.
pub fn sorted_order(bodies: &[Body], axis: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..bodies.len()).collect();
    order.sort_by(|&a, &b| {
        bodies[a].min_ep[axis]
            .partial_cmp(&bodies[b].min_ep[axis])
            .unwrap_or(Ordering::Equal)
    });
    order
}

/// Sweep the sorted order and collect candidate pairs.
///
/// For each body in order, subsequent bodies are candidates while their
/// minimum endpoint does not pass this body's maximum endpoint; the first
/// failure ends the inner scan, since sorting guarantees every later body
/// fails too.
pub fn sweep(bodies: &[Body], order: &[usize], axis: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();

    for (si, &i) in order.iter().enumerate() {
        for &j in &order[si + 1..] {
            if bodies[j].min_ep[axis] > bodies[i].max_ep[axis] {
                break;
            }
            pairs.push((i, j));
        }
    }

    pairs
}

/// Pick the sweep axis for the next step: argmax of positional variance
/// `sum(x^2) - sum(x)^2 / n` per axis.
///
/// Ties break toward the lower axis index: x is the default, y and z only
/// take over on strictly greater variance.
pub fn select_sort_axis(bodies: &[Body]) -> usize {
    let n = bodies.len();
    if n == 0 {
        return 0;
    }

    let mut s = [0.0f64; 3];
    let mut s2 = [0.0f64; 3];
    for b in bodies {
        for c in 0..3 {
            s[c] += b.x[c];
            s2[c] += b.x[c] * b.x[c];
        }
    }

    let mut v = [0.0f64; 3];
    for c in 0..3 {
        v[c] = s2[c] - s[c] * s[c] / n as f64;
    }

    let mut axis = 0;
    if v[1] > v[0] {
        axis = 1;
    }
    if v[2] > v[axis] {
        axis = 2;
    }
    axis
}

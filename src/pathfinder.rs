// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Least-cost path over the seam digraph
//!
//! This is a label-correcting fixpoint rather than a priority-queue
//! Dijkstra: sweep every node in id order, relax every outgoing edge in
//! successor order, and keep sweeping until a whole pass changes
//! nothing.  Edges only go from one line to the next, so the number of
//! passes that can still improve something is bounded by the number of
//! lines.  A graph that keeps improving past that bound is not one the
//! builder made, and is reported rather than looped over forever.
//!
//! Distances only improve on a strict `>`, so when two predecessors
//! tie the one met first in the sweep keeps the node.

use crate::error::{invalid, SeamError};
use crate::graph::{Graph, NodeId};
use tracing::debug;

// One sweep over the whole graph.  Returns whether anything improved.
fn relax(graph: &mut Graph) -> bool {
    let nodes = graph.nodes_mut();
    let mut modified = false;
    for i in 0..nodes.len() {
        let reached = nodes[i].distance;
        if reached.is_infinite() {
            continue;
        }
        for j in 0..nodes[i].successors.len() {
            let s = nodes[i].successors[j];
            let candidate = reached + nodes[s].cost;
            if nodes[s].distance > candidate {
                nodes[s].distance = candidate;
                nodes[s].predecessor = Some(i);
                modified = true;
            }
        }
    }
    modified
}

/// Find the cheapest path from `from` to `to`, returning the ids of the
/// nodes strictly between them, in order.  Asking for a path that ends
/// at the source sentinel yields an empty path, as does `from == to`.
///
/// The graph is left holding the settled distances and predecessors;
/// rebuild it before searching again.
pub fn shortest_path(
    graph: &mut Graph,
    from: NodeId,
    to: NodeId,
) -> Result<Vec<NodeId>, SeamError> {
    if from >= graph.len() || to >= graph.len() {
        return invalid(format!(
            "path {} -> {} requested over a graph of {} nodes",
            from,
            to,
            graph.len()
        ));
    }
    if to == graph.source() || from == to {
        return Ok(vec![]);
    }

    {
        let start = &mut graph.nodes_mut()[from];
        start.distance = start.cost;
    }

    // Every improving pass extends the settled frontier by at least
    // one edge, and the longest path has `lines + 1` edges.
    let max_passes = graph.lines() as usize + 2;
    let mut passes = 0;
    loop {
        if passes == max_passes {
            return Err(SeamError::GraphInvariantViolation(format!(
                "relaxation still improving after {} passes",
                max_passes
            )));
        }
        passes += 1;
        if !relax(graph) {
            break;
        }
    }
    debug!(passes, from, to, "relaxation settled");

    if graph.node(to).distance.is_infinite() {
        return Err(SeamError::GraphInvariantViolation(format!(
            "node {} is not reachable from node {}",
            to, from
        )));
    }

    // Walk the predecessors back from the target.  A well-formed walk
    // visits each node at most once.
    let mut path = Vec::with_capacity(graph.lines() as usize);
    let mut index = to;
    loop {
        index = match graph.node(index).predecessor {
            Some(p) => p,
            None => {
                return Err(SeamError::GraphInvariantViolation(format!(
                    "node {} has no predecessor",
                    index
                )))
            }
        };
        if index == from {
            break;
        }
        if path.len() == graph.len() {
            return Err(SeamError::GraphInvariantViolation(
                "predecessor chain does not terminate".to_string(),
            ));
        }
        path.push(index);
    }
    path.reverse();
    Ok(path)
}

/// Sum of the node costs along an id path.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> f64 {
    path.iter().map(|&id| graph.node(id).cost).sum()
}

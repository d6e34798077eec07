// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam digraph
//!
//! Given a cost grid and an orientation, build an explicit graph with
//! one node per pixel plus two sentinels.  The source fans out to every
//! pixel of the first line, every pixel of the last line feeds the sink,
//! and every other pixel points at the (up to) three pixels that touch
//! it in the next line.  Edges only ever go from line `n` to line
//! `n + 1`, so the result is a DAG layered by line, and any path from
//! source to sink is an 8-connected seam.

use crate::cq;
use crate::error::{invalid, SeamError};
use crate::flipper::{Flipper, Orientation};
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// Index of a node within a [`Graph`].
pub type NodeId = usize;

/// What a node stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Source,
    Sink,
    Pixel { line: u32, position: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// The grid value for a pixel, zero for the sentinels.
    pub cost: f64,
    /// Best known total cost from the search's starting node to this
    /// one, accumulated forward during relaxation.  Infinite until
    /// reached.
    pub distance: f64,
    /// The node that currently yields `distance`.
    pub predecessor: Option<NodeId>,
    /// Nodes reachable by one edge, in a fixed order: previous, same,
    /// next position in the following line.
    pub successors: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, cost: f64, successors: Vec<NodeId>) -> Self {
        Node {
            kind,
            cost,
            distance: std::f64::INFINITY,
            predecessor: None,
            successors,
        }
    }
}

/// Pixel nodes occupy ids `0..lines * line_len`, numbered
/// `line * line_len + position`.  For a vertical graph that is the
/// usual row-major index; for a horizontal one it is the transposed
/// index.  The source and sink come last, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    orientation: Orientation,
    lines: u32,
    line_len: u32,
    nodes: Vec<Node>,
}

impl Graph {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of lines the seam has to cross.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn line_len(&self) -> u32 {
        self.line_len
    }

    /// Total number of nodes, sentinels included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn source(&self) -> NodeId {
        self.lines as usize * self.line_len as usize
    }

    pub fn sink(&self) -> NodeId {
        self.source() + 1
    }

    /// # Panics
    ///
    /// If `id` is not below `len()`.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn id_of(&self, line: u32, position: u32) -> NodeId {
        line as usize * self.line_len as usize + position as usize
    }

    /// Project a pixel id onto its position within its line: the column
    /// of a vertical seam, the row of a horizontal one.  Sentinels have
    /// no position.
    pub fn position_of(&self, id: NodeId) -> Option<u32> {
        match self.nodes.get(id)?.kind {
            NodeKind::Pixel { position, .. } => Some(position),
            _ => None,
        }
    }
}

/// Build the seam digraph for `grid`.  Costs must be finite and
/// non-negative; negative values, infinities and NaN are refused.
pub fn build_graph(
    grid: &TwoDimensionalMap<f64>,
    orientation: Orientation,
) -> Result<Graph, SeamError> {
    let view = Flipper::new(grid, orientation);
    let (lines, line_len) = (view.lines(), view.line_len());
    if lines == 0 || line_len == 0 {
        return invalid("cannot build a graph over an empty grid");
    }

    let id = |line: u32, position: u32| line as usize * line_len as usize + position as usize;
    let source = id(lines, 0);
    let sink = source + 1;
    let (last_line, max_position) = (lines - 1, line_len - 1);

    let mut nodes = Vec::with_capacity(source + 2);
    for (line, position) in iproduct!(0..lines, 0..line_len) {
        let cost = view.get(line, position);
        if !(cost >= 0.0) || cost.is_infinite() {
            let (x, y) = orientation.to_xy(line, position);
            return invalid(format!("cost at ({}, {}) is {}", x, y, cost));
        }

        let successors = if line == last_line {
            vec![sink]
        } else {
            let range = cq!(position == 0, 0, position - 1)
                ..=cq!(position == max_position, max_position, position + 1);
            range.map(|p| id(line + 1, p)).collect()
        };
        nodes.push(Node::new(NodeKind::Pixel { line, position }, cost, successors));
    }

    nodes.push(Node::new(
        NodeKind::Source,
        0.0,
        (0..line_len).map(|p| id(0, p)).collect(),
    ));
    nodes.push(Node::new(NodeKind::Sink, 0.0, vec![]));

    Ok(Graph {
        orientation,
        lines,
        line_len,
        nodes,
    })
}

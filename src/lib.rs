// #![deny(missing_docs)]

//! Seam carving over an explicit pixel graph.
//!
//! An energy map becomes a layered DAG with a source and a sink
//! sentinel; the cheapest source-to-sink path is the seam; the seam is
//! then painted onto or cut out of an image.

mod ternary;

pub mod color;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod graph;
pub mod imageio;
pub mod pathfinder;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use color::{ColorMap, PackedRgb};
pub use error::SeamError;
pub use flipper::Orientation;
pub use graph::{build_graph, Graph, Node, NodeId, NodeKind};
pub use pathfinder::shortest_path;
pub use seam::{find_seam, highlight_seam, remove_seam, seam_cost};
pub use seamcarver::SeamCarver;
pub use seamfinder::SeamFinder;
pub use twodmap::{GrayMap, TwoDimensionalMap};

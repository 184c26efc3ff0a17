// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! pangraph-layout: canvas layout for pangenome segment graphs.
//!
//! Segments of an alignment graph are placed on a 2-D canvas: the x axis
//! follows genomic order (longest-path layout over the segment DAG), the
//! y axis holds one lane per aligned genome. Composite wrapper shapes group
//! segments for the renderer, and generic computations over those shapes
//! (lane assignment, collapse proposals, ordering inside merged units) are
//! written as [`WrapperOperation`]s.
//!
//! Parsing, filtering, rendering and user interaction live elsewhere; this
//! crate receives built graphs and wrapper trees and hands back positions.
//!
//! ```
//! use pangraph_layout::{NodeId, SegmentGraph, SegmentNode, Whitespace};
//!
//! let mut graph = SegmentGraph::new();
//! graph.insert_node(SegmentNode::new(NodeId(0), None, 0, 4, &b"ACGT"[..])?)?;
//! graph.insert_node(SegmentNode::new(NodeId(1), None, 4, 7, &b"TTA"[..])?)?;
//! graph.connect(NodeId(0), NodeId(1))?;
//!
//! assert_eq!(graph.start_x(NodeId(1))?, 5);
//! assert_eq!(graph.right_whitespace(NodeId(0))?.get(), 1);
//! assert_eq!(graph.right_whitespace(NodeId(1))?, Whitespace::UNBOUNDED);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]

/// Layout tunables and the port they are loaded through.
pub mod config;
mod error;
mod graph;
mod ident;
mod layout;
mod node;
mod operation;
/// Built-in wrapper operations.
pub mod ops;
mod view;
mod wrapper;

pub use config::{LayoutConfig, LayoutConfigError, LayoutConfigStore, MAX_EDGE_GAP};
pub use error::LayoutError;
pub use graph::{GraphError, SegmentGraph};
pub use ident::{GenomeId, NodeId};
pub use layout::{LayoutStats, Whitespace, EDGE_GAP};
pub use node::{InvalidNodeError, SegmentNode};
pub use operation::{run, WrapperOperation};
pub use ops::{CollapsePlanner, CombinedOrdering, LaneAssignment};
pub use view::{FilteredNode, FilteredView};
pub use wrapper::{
    CombinedWrapper, HorizontalWrapper, LeafPosition, NodeWrapper, SingleWrapper, SpaceSlot,
    SpaceWrapper, VerticalWrapper, WrapperKind,
};

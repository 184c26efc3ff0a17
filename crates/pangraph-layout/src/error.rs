// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised by layout and wrapper dispatch.
use thiserror::Error;

use crate::ident::NodeId;
use crate::wrapper::WrapperKind;

/// Error type for positioning and wrapper operations.
///
/// None of these are transient: each one points at a malformed graph or an
/// incomplete operation and is propagated to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The segment graph contains a directed cycle through `node`.
    #[error("segment graph has a cycle through node {node}")]
    CyclicGraph {
        /// A node on the detected cycle.
        node: NodeId,
    },
    /// The id does not name a node of the graph or view.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    /// A query needed `x_start` of a node that has not been laid out.
    #[error("node {node} has no horizontal position yet")]
    Unpositioned {
        /// The node missing its position.
        node: NodeId,
    },
    /// A horizontal coordinate at or after `node` does not fit in `u64`.
    #[error("horizontal coordinate of node {node} overflows")]
    CoordinateOverflow {
        /// The node whose position or right edge overflowed.
        node: NodeId,
    },
    /// An operation was dispatched on a wrapper variant it cannot handle.
    #[error("operation {operation} does not support {variant} wrappers")]
    UnsupportedWrapperVariant {
        /// Name of the rejecting operation.
        operation: &'static str,
        /// The variant it was handed.
        variant: WrapperKind,
    },
    /// A combined wrapper was built without members.
    #[error("combined wrapper needs at least one member")]
    EmptyCombined,
}

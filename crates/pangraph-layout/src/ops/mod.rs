// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Built-in wrapper operations.
//!
//! - [`LaneAssignment`] writes the vertical lane of every visited segment.
//! - [`CollapsePlanner`] proposes neighbouring segments to merge.
//! - [`CombinedOrdering`] orders the members of each combined unit.

mod collapse;
mod combined_order;
mod lanes;

pub use collapse::CollapsePlanner;
pub use combined_order::CombinedOrdering;
pub use lanes::LaneAssignment;

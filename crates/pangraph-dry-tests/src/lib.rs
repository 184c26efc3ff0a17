// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for pangraph crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`graph`] - Segment graph builders

pub mod config;
pub mod graph;

pub use config::InMemoryConfigStore;
pub use graph::{chain, GraphFixture};

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Layout tunables and the port they are loaded through.
//!
//! The core never touches storage itself. Callers hand in a
//! [`LayoutConfigStore`] that yields the raw JSON document (or nothing);
//! this module parses it, checks bounds, and falls back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::EDGE_GAP;

/// Largest accepted [`LayoutConfig::edge_gap`].
///
/// Keeps `x_start + width + edge_gap` far from `u64::MAX` for any realistic
/// chain length.
pub const MAX_EDGE_GAP: u64 = 0xFFFF_FFFF;

/// Tunables for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal units reserved between a segment and its successor.
    pub edge_gap: u64,
    /// Largest right-hand whitespace for which two neighbouring segments are
    /// proposed for collapsing.
    pub collapse_max_gap: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            edge_gap: EDGE_GAP,
            collapse_max_gap: 1,
        }
    }
}

/// Error raised while reading, checking or persisting a [`LayoutConfig`].
#[derive(Debug, Error)]
pub enum LayoutConfigError {
    /// The stored document is not a valid layout config.
    #[error("malformed layout config: {0}")]
    Malformed(#[from] serde_json::Error),
    /// `edge_gap` is above [`MAX_EDGE_GAP`].
    #[error("edge_gap {0} exceeds the maximum of {max}", max = MAX_EDGE_GAP)]
    EdgeGapTooLarge(u64),
    /// The backing store failed.
    #[error("layout config store: {0}")]
    Store(String),
}

/// Source and sink of the serialized layout config document.
pub trait LayoutConfigStore {
    /// Returns the stored document, `None` when nothing has been saved.
    fn load_document(&self) -> Result<Option<Vec<u8>>, LayoutConfigError>;
    /// Replaces the stored document.
    fn save_document(&self, document: &[u8]) -> Result<(), LayoutConfigError>;
}

impl LayoutConfig {
    /// Rejects values that would make layout arithmetic overflow.
    pub fn validate(self) -> Result<Self, LayoutConfigError> {
        if self.edge_gap > MAX_EDGE_GAP {
            return Err(LayoutConfigError::EdgeGapTooLarge(self.edge_gap));
        }
        Ok(self)
    }

    /// Parses and validates a JSON document. Missing fields take their
    /// defaults.
    pub fn from_json(document: &[u8]) -> Result<Self, LayoutConfigError> {
        serde_json::from_slice::<Self>(document)?.validate()
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, LayoutConfigError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Loads the stored config, falling back to defaults when the store is
    /// empty or holds an empty document.
    pub fn load_or_default<S>(store: &S) -> Result<Self, LayoutConfigError>
    where
        S: LayoutConfigStore + ?Sized,
    {
        match store.load_document()? {
            Some(document) if !document.is_empty() => Self::from_json(&document),
            _ => Ok(Self::default()),
        }
    }

    /// Validates and persists this config.
    pub fn save<S>(&self, store: &S) -> Result<(), LayoutConfigError>
    where
        S: LayoutConfigStore + ?Sized,
    {
        let checked = self.validate()?;
        store.save_document(&checked.to_json()?)
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory layout config store for tests.

use pangraph_layout::{LayoutConfigError, LayoutConfigStore};
use std::sync::{Arc, Mutex};

/// In-memory implementation of [`LayoutConfigStore`] for testing.
///
/// Clones share the same document, so a test can hand one clone to the code
/// under test and inspect the other.
///
/// # Example
///
/// ```
/// use pangraph_dry_tests::InMemoryConfigStore;
/// use pangraph_layout::LayoutConfig;
///
/// let store = InMemoryConfigStore::new();
/// LayoutConfig::default().save(&store).unwrap();
/// assert_eq!(store.save_count(), 1);
/// assert!(store.document().is_some());
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    document: Option<Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
}

impl InMemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `document`.
    pub fn with_document(document: &[u8]) -> Self {
        let store = Self::new();
        store.lock().document = Some(document.to_vec());
        store
    }

    /// The stored document, if any.
    pub fn document(&self) -> Option<Vec<u8>> {
        self.lock().document.clone()
    }

    /// Makes every subsequent load fail with a store error.
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Number of load attempts, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of save attempts.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LayoutConfigStore for InMemoryConfigStore {
    fn load_document(&self) -> Result<Option<Vec<u8>>, LayoutConfigError> {
        let mut inner = self.lock();
        inner.load_count += 1;
        if inner.fail_on_load {
            return Err(LayoutConfigError::Store("simulated load failure".into()));
        }
        Ok(inner.document.clone())
    }

    fn save_document(&self, document: &[u8]) -> Result<(), LayoutConfigError> {
        let mut inner = self.lock();
        inner.save_count += 1;
        inner.document = Some(document.to_vec());
        Ok(())
    }
}

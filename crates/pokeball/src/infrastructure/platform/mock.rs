//! Mock platform for tests
//!
//! Random values are scripted up front; page titles are recorded.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::outbound::{DocumentProvider, RandomProvider};
use crate::state::Platform;

#[derive(Default)]
struct RandomScript {
    values: VecDeque<i32>,
    requested: Vec<(i32, i32)>,
}

/// Returns queued values in order, then `min` once the queue is empty.
#[derive(Clone, Default)]
pub struct MockRandomProvider {
    script: Arc<Mutex<RandomScript>>,
}

impl MockRandomProvider {
    pub fn push(&self, value: i32) {
        lock(&self.script).values.push_back(value);
    }

    /// Every `(min, max)` pair the provider was asked for
    pub fn requested_ranges(&self) -> Vec<(i32, i32)> {
        lock(&self.script).requested.clone()
    }
}

impl RandomProvider for MockRandomProvider {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let mut script = lock(&self.script);
        script.requested.push((min, max));
        script.values.pop_front().unwrap_or(min)
    }
}

#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<Mutex<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn title(&self) -> Option<String> {
        lock(&self.title).clone()
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        *lock(&self.title) = Some(title.to_string());
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Platform wired to mocks, plus handles to script and inspect them
pub fn create_mock_platform() -> (Platform, MockRandomProvider, MockDocumentProvider) {
    let random = MockRandomProvider::default();
    let document = MockDocumentProvider::default();
    let platform = Platform::new(random.clone(), document.clone());
    (platform, random, document)
}

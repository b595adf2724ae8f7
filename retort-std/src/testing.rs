//! Testing utilities for Retort.
//!
//! - [`FailingNormalizer`]: always errors, for exercising the
//!   fallback-on-failure path
//! - [`RecordingNormalizer`]: delegates to an inner normalizer while
//!   recording every input it saw

use retort_core::{BoxError, Normalizer};
use std::collections::BTreeSet;
use std::sync::Mutex;

/// A normalizer that fails on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingNormalizer;

impl Normalizer for FailingNormalizer {
    fn normalize(&self, _text: &str) -> Result<BTreeSet<String>, BoxError> {
        Err("normalizer is down".into())
    }
}

/// A normalizer that records inputs and delegates to an inner normalizer.
pub struct RecordingNormalizer<N> {
    inner: N,
    seen: Mutex<Vec<String>>,
}

impl<N: Normalizer> RecordingNormalizer<N> {
    /// Wrap an inner normalizer.
    pub fn new(inner: N) -> Self {
        Self {
            inner,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Every input passed to [`Normalizer::normalize`] so far, in order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl<N: Normalizer> Normalizer for RecordingNormalizer<N> {
    fn normalize(&self, text: &str) -> Result<BTreeSet<String>, BoxError> {
        self.seen.lock().unwrap().push(text.to_string());
        self.inner.normalize(text)
    }
}

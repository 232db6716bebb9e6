//! Single-frame classifier boundary (streaming mode).

use crate::error::{HandspellError, Result};
use crate::model::types::SymbolPrediction;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for per-frame symbol classification.
///
/// This trait allows swapping implementations (real model vs mock).
pub trait FrameClassifier: Send + Sync {
    /// Classify one mapped feature vector.
    ///
    /// # Arguments
    /// * `features` - Feature values in the layout of the resolved schema
    ///
    /// # Returns
    /// The predicted symbol with its confidence, or error
    fn predict(&self, features: &[f32]) -> Result<SymbolPrediction>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;
}

/// Implement FrameClassifier for Arc<T> to allow sharing across sessions.
impl<T: FrameClassifier> FrameClassifier for Arc<T> {
    fn predict(&self, features: &[f32]) -> Result<SymbolPrediction> {
        (**self).predict(features)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Mock classifier for testing.
///
/// Plays back a scripted sequence of predictions, then repeats a fallback
/// prediction once the script runs out.
pub struct MockFrameClassifier {
    model_name: String,
    script: Mutex<VecDeque<SymbolPrediction>>,
    fallback: SymbolPrediction,
    calls: AtomicUsize,
    should_fail: bool,
}

impl MockFrameClassifier {
    /// Create a new mock classifier with default settings
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            script: Mutex::new(VecDeque::new()),
            fallback: SymbolPrediction::blank(0.0),
            calls: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    /// Configure the prediction returned after the script is exhausted
    pub fn with_fallback(mut self, prediction: SymbolPrediction) -> Self {
        self.fallback = prediction;
        self
    }

    /// Append a prediction to the playback script
    pub fn with_prediction(self, prediction: SymbolPrediction) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(prediction);
        }
        self
    }

    /// Append `count` copies of the same prediction to the script
    pub fn with_repeated(self, prediction: SymbolPrediction, count: usize) -> Self {
        if let Ok(mut script) = self.script.lock() {
            for _ in 0..count {
                script.push_back(prediction);
            }
        }
        self
    }

    /// Configure the mock to fail on predict
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Number of predict calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FrameClassifier for MockFrameClassifier {
    fn predict(&self, _features: &[f32]) -> Result<SymbolPrediction> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(HandspellError::Inference {
                message: "mock classifier failure".to_string(),
            });
        }
        let scripted = self.script.lock().ok().and_then(|mut s| s.pop_front());
        Ok(scripted.unwrap_or(self.fallback))
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_plays_script_then_fallback() {
        let classifier = MockFrameClassifier::new("test-model")
            .with_prediction(SymbolPrediction::of('a', 0.9))
            .with_prediction(SymbolPrediction::of('b', 0.8))
            .with_fallback(SymbolPrediction::blank(0.5));

        assert_eq!(
            classifier.predict(&[]).unwrap(),
            SymbolPrediction::of('a', 0.9)
        );
        assert_eq!(
            classifier.predict(&[]).unwrap(),
            SymbolPrediction::of('b', 0.8)
        );
        assert_eq!(
            classifier.predict(&[]).unwrap(),
            SymbolPrediction::blank(0.5)
        );
    }

    #[test]
    fn test_mock_counts_calls() {
        let classifier = MockFrameClassifier::new("test-model");
        assert_eq!(classifier.calls(), 0);
        let _ = classifier.predict(&[0.0]);
        let _ = classifier.predict(&[0.0]);
        assert_eq!(classifier.calls(), 2);
    }

    #[test]
    fn test_mock_failure_propagates() {
        let classifier = MockFrameClassifier::new("test-model").with_failure();
        let err = classifier.predict(&[]).unwrap_err();
        assert!(matches!(err, HandspellError::Inference { .. }));
    }

    #[test]
    fn test_arc_impl_delegates() {
        let classifier =
            Arc::new(MockFrameClassifier::new("shared").with_fallback(SymbolPrediction::of('x', 1.0)));
        let shared: &dyn FrameClassifier = &classifier;
        assert_eq!(shared.model_name(), "shared");
        assert_eq!(shared.predict(&[]).unwrap().symbol, Some('x'));
    }
}

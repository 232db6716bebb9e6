//! Sequence model boundary (clip mode).

use crate::decode::context::DecodeContext;
use crate::defaults;
use crate::error::{HandspellError, Result};
use crate::landmark::FeatureVector;
use crate::model::types::SymbolPrediction;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for autoregressive sequence prediction over a buffered clip.
///
/// This trait allows swapping implementations (real model vs mock).
pub trait SequenceModel: Send + Sync {
    /// Predict the next symbol for a clip given the decoded context so far.
    ///
    /// # Arguments
    /// * `clip` - Feature vectors for every frame of the clip, in arrival order
    /// * `context` - Symbols accepted so far, including the start marker
    fn predict(&self, clip: &[FeatureVector], context: &DecodeContext) -> Result<SymbolPrediction>;

    /// The ordered feature names this model expects as input.
    ///
    /// Consulted once at load time to resolve the feature schema, never per
    /// frame.
    fn feature_names(&self) -> Vec<String>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;
}

/// Implement SequenceModel for Arc<T> to allow sharing across sessions.
impl<T: SequenceModel> SequenceModel for Arc<T> {
    fn predict(&self, clip: &[FeatureVector], context: &DecodeContext) -> Result<SymbolPrediction> {
        (**self).predict(clip, context)
    }

    fn feature_names(&self) -> Vec<String> {
        (**self).feature_names()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Mock sequence model for testing.
///
/// Plays back a scripted sequence of predictions and counts predict calls,
/// which the empty-clip short-circuit tests rely on.
pub struct MockSequenceModel {
    model_name: String,
    feature_names: Vec<String>,
    script: Mutex<VecDeque<SymbolPrediction>>,
    fallback: SymbolPrediction,
    calls: AtomicUsize,
    should_fail: bool,
}

impl MockSequenceModel {
    /// Create a new mock with a one-feature schema
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            feature_names: vec!["x_right_hand_0".to_string()],
            script: Mutex::new(VecDeque::new()),
            fallback: SymbolPrediction::blank(0.0),
            calls: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    /// Configure the feature names reported at load time
    pub fn with_feature_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append a prediction to the playback script
    pub fn with_prediction(self, prediction: SymbolPrediction) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(prediction);
        }
        self
    }

    /// Configure the prediction returned after the script is exhausted
    pub fn with_fallback(mut self, prediction: SymbolPrediction) -> Self {
        self.fallback = prediction;
        self
    }

    /// Script the mock to spell out a word at full confidence, then stop
    /// with the end marker.
    pub fn spelling(self, word: &str) -> Self {
        let mut mock = self;
        for ch in word.chars() {
            mock = mock.with_prediction(SymbolPrediction::of(ch, 1.0));
        }
        mock.with_prediction(SymbolPrediction::of(defaults::END_MARKER, 1.0))
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

impl SequenceModel for MockSequenceModel {
    fn predict(
        &self,
        _clip: &[FeatureVector],
        _context: &DecodeContext,
    ) -> Result<SymbolPrediction> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(HandspellError::Inference {
                message: "mock sequence model failure".to_string(),
            });
        }
        let scripted = self.script.lock().ok().and_then(|mut s| s.pop_front());
        Ok(scripted.unwrap_or(self.fallback))
    }

    fn feature_names(&self) -> Vec<String> {
        self.feature_names.clone()
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

//! Streaming-mode recognizers: per-character and word-building variants.

use crate::config::StreamingConfig;
use crate::error::Result;
use crate::landmark::mapper::map_frame;
use crate::landmark::schema::FeatureSchema;
use crate::landmark::types::LandmarkFrame;
use crate::model::classifier::FrameClassifier;
use crate::model::types::SymbolPrediction;
use crate::stream::debouncer::MajorityDebouncer;

/// One frame's recognition output: the current symbol or word, with the
/// classifier's confidence where it is meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub text: String,
    pub confidence: f32,
}

/// Capability shared by both streaming variants.
///
/// The variant is chosen when the session is constructed; callers hold a
/// `Box<dyn FrameRecognizer>` and never dispatch on the mode per frame.
pub trait FrameRecognizer: Send {
    /// Processes one frame's landmark detections, in arrival order.
    fn process_frame(&mut self, frame: &LandmarkFrame) -> Result<Recognition>;

    /// Clears accumulated state, keeping model and schema.
    fn reset(&mut self);

    /// Name for logging/diagnostics.
    fn name(&self) -> &'static str;
}

/// Emits one symbol per frame, straight from the classifier.
pub struct StaticRecognizer<C: FrameClassifier> {
    classifier: C,
    schema: FeatureSchema,
}

impl<C: FrameClassifier> StaticRecognizer<C> {
    /// Creates a per-character recognizer over a resolved schema.
    pub fn new(classifier: C, schema: FeatureSchema) -> Self {
        Self { classifier, schema }
    }

    /// Maps the frame and runs the classifier once.
    fn classify(&self, frame: &LandmarkFrame) -> Result<SymbolPrediction> {
        let features = map_frame(frame, &self.schema)?;
        self.classifier.predict(&features)
    }
}

impl<C: FrameClassifier> FrameRecognizer for StaticRecognizer<C> {
    fn process_frame(&mut self, frame: &LandmarkFrame) -> Result<Recognition> {
        let prediction = self.classify(frame)?;
        Ok(Recognition {
            text: prediction.symbol.map(String::from).unwrap_or_default(),
            confidence: prediction.confidence,
        })
    }

    fn reset(&mut self) {}

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Smooths per-frame symbols into a growing word via majority voting.
///
/// Confidence is not meaningful for the smoothed word and is reported as 0.
pub struct ContinuousRecognizer<C: FrameClassifier> {
    inner: StaticRecognizer<C>,
    debouncer: MajorityDebouncer,
}

impl<C: FrameClassifier> ContinuousRecognizer<C> {
    /// Creates a word-building recognizer over a resolved schema.
    pub fn new(classifier: C, schema: FeatureSchema, config: &StreamingConfig) -> Self {
        Self {
            inner: StaticRecognizer::new(classifier, schema),
            debouncer: MajorityDebouncer::new(config.buffer_size, config.confidence_fraction),
        }
    }

    /// The word accumulated so far.
    pub fn word(&self) -> &str {
        self.debouncer.word()
    }
}

impl<C: FrameClassifier> FrameRecognizer for ContinuousRecognizer<C> {
    fn process_frame(&mut self, frame: &LandmarkFrame) -> Result<Recognition> {
        let prediction = self.inner.classify(frame)?;
        let word = self.debouncer.step(&prediction);
        Ok(Recognition {
            text: word.to_string(),
            confidence: 0.0,
        })
    }

    fn reset(&mut self) {
        self.debouncer.reset();
    }

    fn name(&self) -> &'static str {
        "continuous"
    }
}

/// Which streaming variant a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizerMode {
    /// One symbol per frame.
    Static,
    /// Debounced word building.
    Continuous,
}

/// Builds the selected recognizer variant behind the shared capability.
pub fn build_recognizer<C: FrameClassifier + 'static>(
    mode: RecognizerMode,
    classifier: C,
    schema: FeatureSchema,
    config: &StreamingConfig,
) -> Box<dyn FrameRecognizer> {
    match mode {
        RecognizerMode::Static => Box::new(StaticRecognizer::new(classifier, schema)),
        RecognizerMode::Continuous => {
            Box::new(ContinuousRecognizer::new(classifier, schema, config))
        }
    }
}

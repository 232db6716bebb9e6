//! Clip-mode session: buffer a whole utterance, then decode it.

use crate::config::DecodeConfig;
use crate::decode::clip::Clip;
use crate::decode::decoder::{Decoded, DecodeOutcome, GreedyDecoder};
use crate::error::{HandspellError, Result};
use crate::landmark::mapper::map_frame;
use crate::landmark::schema::FeatureSchema;
use crate::landmark::types::LandmarkFrame;
use crate::model::sequence::SequenceModel;
use std::fmt;

/// Lifecycle of a clip session.
///
/// `Terminated` and `Truncated` are terminal: no further frames are accepted
/// and no further decoding happens until an explicit [`ClipSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No frames buffered.
    Empty,
    /// Frames buffered, not yet decoded.
    Accumulating,
    /// Decode accepted the end marker.
    Terminated,
    /// Decode exhausted its step budget without an end marker.
    Truncated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Empty => write!(f, "empty"),
            SessionState::Accumulating => write!(f, "accumulating"),
            SessionState::Terminated => write!(f, "terminated"),
            SessionState::Truncated => write!(f, "truncated"),
        }
    }
}

/// Accumulates mapped frames into a clip and decodes them on demand.
///
/// The schema is resolved once from the model's own metadata at
/// construction; the session owns its clip exclusively.
pub struct ClipSession<M: SequenceModel> {
    model: M,
    schema: FeatureSchema,
    decoder: GreedyDecoder,
    clip: Clip,
    state: SessionState,
    decoded: Option<Decoded>,
}

impl<M: SequenceModel> ClipSession<M> {
    /// Creates a session, resolving the feature schema from the model.
    ///
    /// Schema resolution is the one load-time step that can fail; an
    /// unparseable feature name surfaces immediately and is never retried.
    pub fn new(model: M, config: &DecodeConfig) -> Result<Self> {
        let schema = FeatureSchema::resolve(model.feature_names())?;
        Ok(Self {
            model,
            schema,
            decoder: GreedyDecoder::new(config.max_out_length, config.confidence_threshold),
            clip: Clip::new(),
            state: SessionState::Empty,
            decoded: None,
        })
    }

    /// Maps one frame and appends it to the clip.
    ///
    /// Rejected frames (dimension mismatch) leave the clip unchanged.
    /// Pushing after a decode finished is an error until [`Self::reset`].
    pub fn push_frame(&mut self, frame: &LandmarkFrame) -> Result<()> {
        if self.is_finished() {
            return Err(HandspellError::SessionTerminal {
                state: self.state.to_string(),
            });
        }
        let vector = map_frame(frame, &self.schema)?;
        self.clip.push(vector);
        self.state = SessionState::Accumulating;
        Ok(())
    }

    /// Decodes the buffered clip.
    ///
    /// An empty clip is a defined no-result: `Ok(None)`, with the model
    /// never invoked. After a decode the session is terminal and repeated
    /// calls return the same result without running the model again.
    pub fn translate(&mut self) -> Result<Option<Decoded>> {
        match self.state {
            SessionState::Empty => Ok(None),
            SessionState::Terminated | SessionState::Truncated => Ok(self.decoded.clone()),
            SessionState::Accumulating => {
                let decoded = self.decoder.decode(&self.clip, &self.model)?;
                if let Some(result) = &decoded {
                    self.state = match result.outcome {
                        DecodeOutcome::Terminated => SessionState::Terminated,
                        DecodeOutcome::Truncated => SessionState::Truncated,
                    };
                }
                self.decoded = decoded.clone();
                Ok(decoded)
            }
        }
    }

    /// Decodes the buffered clip, then resets regardless of outcome.
    pub fn translate_and_reset(&mut self) -> Result<Option<Decoded>> {
        let decoded = self.translate();
        self.reset();
        decoded
    }

    /// Clears the clip and returns the session to `Empty`.
    pub fn reset(&mut self) {
        self.clip.reset();
        self.decoded = None;
        self.state = SessionState::Empty;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of frames buffered so far.
    pub fn clip_len(&self) -> usize {
        self.clip.len()
    }

    /// The schema resolved from the model at construction.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn is_finished(&self) -> bool {
        matches!(
            self.state,
            SessionState::Terminated | SessionState::Truncated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::types::Landmark;
    use crate::model::sequence::MockSequenceModel;
    use crate::model::types::SymbolPrediction;

    fn hand_frame() -> LandmarkFrame {
        LandmarkFrame::new().with_right_hand(vec![Landmark::new(0.4, 0.6, 0.0); 21])
    }

    fn config() -> DecodeConfig {
        DecodeConfig {
            max_out_length: 31,
            confidence_threshold: 0.2,
        }
    }

    #[test]
    fn test_schema_resolved_from_model_metadata() {
        let model = MockSequenceModel::new("seq")
            .with_feature_names(["x_right_hand_0", "y_right_hand_0", "z_pose_14"]);
        let session = ClipSession::new(model, &config()).unwrap();
        assert_eq!(session.schema().len(), 3);
    }

    #[test]
    fn test_bad_feature_name_fails_at_construction() {
        let model = MockSequenceModel::new("seq").with_feature_names(["x_face_1"]);
        assert!(ClipSession::new(model, &config()).is_err());
    }

    #[test]
    fn test_lifecycle_empty_to_terminated() {
        let model = MockSequenceModel::new("seq").spelling("hi");
        let mut session = ClipSession::new(model, &config()).unwrap();
        assert_eq!(session.state(), SessionState::Empty);

        session.push_frame(&hand_frame()).unwrap();
        assert_eq!(session.state(), SessionState::Accumulating);
        assert_eq!(session.clip_len(), 1);

        let decoded = session.translate().unwrap().unwrap();
        assert_eq!(decoded.outcome, DecodeOutcome::Terminated);
        assert_eq!(decoded.text(), "hi");
        assert_eq!(session.state(), SessionState::Terminated);
    }

    #[test]
    fn test_empty_clip_translates_to_none_without_model_call() {
        let model = MockSequenceModel::new("seq").spelling("no");
        let mut session = ClipSession::new(model, &config()).unwrap();

        assert!(session.translate().unwrap().is_none());
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_repeat_translate_does_not_rerun_model() {
        let model = MockSequenceModel::new("seq").spelling("a");
        let mut session = ClipSession::new(model, &config()).unwrap();
        session.push_frame(&hand_frame()).unwrap();

        let first = session.translate().unwrap().unwrap();
        let second = session.translate().unwrap().unwrap();
        assert_eq!(first, second);
        // "a" then end marker: exactly two predict calls total.
        assert_eq!(session.model.calls(), 2);
    }

    #[test]
    fn test_push_after_terminal_requires_reset() {
        let model = MockSequenceModel::new("seq").spelling("x");
        let mut session = ClipSession::new(model, &config()).unwrap();
        session.push_frame(&hand_frame()).unwrap();
        session.translate().unwrap();

        let err = session.push_frame(&hand_frame()).unwrap_err();
        assert!(matches!(err, HandspellError::SessionTerminal { .. }));

        session.reset();
        assert!(session.push_frame(&hand_frame()).is_ok());
    }

    #[test]
    fn test_truncated_when_confidence_never_clears_gate() {
        let model = MockSequenceModel::new("seq")
            .with_fallback(SymbolPrediction::of('a', 0.0));
        let mut session = ClipSession::new(model, &config()).unwrap();
        session.push_frame(&hand_frame()).unwrap();

        let decoded = session.translate().unwrap().unwrap();
        assert_eq!(decoded.outcome, DecodeOutcome::Truncated);
        assert_eq!(decoded.context.to_string(), "<");
        assert_eq!(session.state(), SessionState::Truncated);
    }

    #[test]
    fn test_translate_and_reset_returns_result_and_empties() {
        let model = MockSequenceModel::new("seq").spelling("ok");
        let mut session = ClipSession::new(model, &config()).unwrap();
        session.push_frame(&hand_frame()).unwrap();

        let decoded = session.translate_and_reset().unwrap().unwrap();
        assert_eq!(decoded.text(), "ok");
        assert_eq!(session.state(), SessionState::Empty);
        assert_eq!(session.clip_len(), 0);
    }

    #[test]
    fn test_reset_then_empty_translate_is_idempotent() {
        let model = MockSequenceModel::new("seq").spelling("ok");
        let mut session = ClipSession::new(model, &config()).unwrap();
        session.push_frame(&hand_frame()).unwrap();
        session.translate().unwrap();

        session.reset();
        // Regardless of prior history, an empty clip decodes to no result.
        assert!(session.translate().unwrap().is_none());
        session.reset();
        assert!(session.translate().unwrap().is_none());
    }

    #[test]
    fn test_rejected_frame_leaves_clip_unchanged() {
        let model = MockSequenceModel::new("seq").spelling("ok");
        let mut session = ClipSession::new(model, &config()).unwrap();
        session.push_frame(&hand_frame()).unwrap();

        let bad = LandmarkFrame::new().with_right_hand(vec![Landmark::new(0.0, 0.0, 0.0); 2]);
        assert!(session.push_frame(&bad).is_err());
        assert_eq!(session.clip_len(), 1);
        assert_eq!(session.state(), SessionState::Accumulating);
    }
}

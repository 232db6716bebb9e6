//! Bounded greedy autoregressive decoding.

use crate::decode::clip::Clip;
use crate::decode::context::DecodeContext;
use crate::defaults;
use crate::error::Result;
use crate::model::sequence::SequenceModel;

/// How a decode pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The end marker was accepted within the step budget.
    Terminated,
    /// The step budget ran out before an end marker was accepted.
    Truncated,
}

/// Result of a decode pass: the accumulated context and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub context: DecodeContext,
    pub outcome: DecodeOutcome,
}

impl Decoded {
    /// The decoded word without the reserved markers.
    pub fn text(&self) -> String {
        self.context.text()
    }
}

/// Greedy decoder with a fixed step budget and a confidence gate.
#[derive(Debug, Clone, Copy)]
pub struct GreedyDecoder {
    max_out_length: usize,
    confidence_threshold: f32,
}

impl Default for GreedyDecoder {
    fn default() -> Self {
        Self {
            max_out_length: defaults::MAX_OUT_LENGTH,
            confidence_threshold: defaults::CONFIDENCE_THRESHOLD,
        }
    }
}

impl GreedyDecoder {
    /// Creates a decoder with an explicit step budget and confidence gate.
    pub fn new(max_out_length: usize, confidence_threshold: f32) -> Self {
        Self {
            max_out_length,
            confidence_threshold,
        }
    }

    /// Decodes a buffered clip into a symbol sequence.
    ///
    /// Runs up to `max_out_length` prediction steps. A step is accepted only
    /// when its confidence strictly exceeds the threshold; a below-threshold
    /// step (or one carrying no symbol) is skipped but still consumes budget,
    /// so a long run of low-confidence predictions exhausts the budget
    /// without producing an end marker.
    ///
    /// An empty clip returns `Ok(None)` without invoking the model.
    /// Model failures propagate unchanged.
    pub fn decode<M: SequenceModel + ?Sized>(
        &self,
        clip: &Clip,
        model: &M,
    ) -> Result<Option<Decoded>> {
        if clip.is_empty() {
            return Ok(None);
        }

        let mut context = DecodeContext::new();
        for _ in 0..self.max_out_length {
            let prediction = model.predict(clip.snapshot(), &context)?;
            if prediction.confidence <= self.confidence_threshold {
                continue;
            }
            let Some(symbol) = prediction.symbol else {
                continue;
            };
            context.push(symbol);
            if symbol == defaults::END_MARKER {
                return Ok(Some(Decoded {
                    context,
                    outcome: DecodeOutcome::Terminated,
                }));
            }
        }

        Ok(Some(Decoded {
            context,
            outcome: DecodeOutcome::Truncated,
        }))
    }
}

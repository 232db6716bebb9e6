//! Majority-vote debouncing of noisy per-frame predictions.

use crate::defaults;
use crate::model::types::SymbolPrediction;
use crate::stream::window::SlidingWindow;

/// The word built up so far in a streaming session.
///
/// Mutated only by the debouncer; monotonically growing until reset.
#[derive(Debug, Clone, Default)]
pub struct WordState {
    word: String,
    last_emitted: Option<char>,
}

impl WordState {
    /// The emitted word so far.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The most recently emitted symbol, if any.
    pub fn last_emitted(&self) -> Option<char> {
        self.last_emitted
    }
}

/// Converts a noisy stream of per-frame predictions into stable word output.
///
/// Each step pushes the newest prediction into a fixed-capacity window and
/// commits the window's majority symbol once it reaches the emission
/// threshold and differs from the previously emitted symbol. The committed
/// symbol is the *majority* symbol, and it is also what is remembered as
/// last-emitted, so a sustained majority can never be appended twice in a
/// row. Emitted symbols are never removed or rewritten.
#[derive(Debug, Clone)]
pub struct MajorityDebouncer {
    window: SlidingWindow,
    threshold_count: usize,
    state: WordState,
}

impl Default for MajorityDebouncer {
    fn default() -> Self {
        Self::new(defaults::BUFFER_SIZE, defaults::CONFIDENCE_FRACTION)
    }
}

impl MajorityDebouncer {
    /// Creates a debouncer with the given window capacity and agreement
    /// fraction.
    ///
    /// The emission threshold is `floor(buffer_size * confidence_fraction)`.
    pub fn new(buffer_size: usize, confidence_fraction: f32) -> Self {
        Self {
            window: SlidingWindow::new(buffer_size),
            threshold_count: (buffer_size as f32 * confidence_fraction) as usize,
            state: WordState::default(),
        }
    }

    /// Feeds one per-frame prediction and returns the current word.
    ///
    /// The word is monotonically non-decreasing in length within a session.
    pub fn step(&mut self, prediction: &SymbolPrediction) -> &str {
        self.window.push(prediction.symbol);

        if let Some((Some(majority), count)) = self.window.majority()
            && count >= self.threshold_count
            && self.state.last_emitted != Some(majority)
        {
            self.state.word.push(majority);
            self.state.last_emitted = Some(majority);
        }

        &self.state.word
    }

    /// The emitted word so far.
    pub fn word(&self) -> &str {
        self.state.word()
    }

    /// Word state for inspection.
    pub fn state(&self) -> &WordState {
        &self.state
    }

    /// The emission threshold derived from capacity and fraction.
    pub fn threshold_count(&self) -> usize {
        self.threshold_count
    }

    /// Clears the window and the accumulated word.
    pub fn reset(&mut self) {
        self.window.reset();
        self.state = WordState::default();
    }
}

//! Runs a streaming recognizer in a dedicated thread.
//!
//! Frames arrive over a bounded channel and are processed strictly in
//! arrival order by a single consumer, so the sliding window sees the
//! stream exactly as the detector produced it.

use crate::error::HandspellError;
use crate::landmark::types::LandmarkFrame;
use crate::session::recognizer::{FrameRecognizer, Recognition};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Trait for reporting per-frame recognition errors.
pub trait ErrorReporter: Send + Sync {
    /// Reports an error from a running session.
    fn report(&self, session: &str, error: &HandspellError);
}

/// Simple error reporter that logs to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrReporter;

impl ErrorReporter for StderrReporter {
    fn report(&self, session: &str, error: &HandspellError) {
        eprintln!("[{}] {}", session, error);
    }
}

/// Drives a recognizer from a frame channel in its own thread.
pub struct SessionRunner {
    handle: Option<JoinHandle<()>>,
    session_name: &'static str,
}

impl SessionRunner {
    /// Spawns a recognizer loop.
    ///
    /// Each received frame is processed and its recognition forwarded. A
    /// frame that fails (dimension mismatch, inference failure) is reported
    /// and dropped; the session continues with the next frame. The loop
    /// ends when the frame channel closes or the output side hangs up.
    pub fn spawn(
        mut recognizer: Box<dyn FrameRecognizer>,
        frame_rx: Receiver<LandmarkFrame>,
        out_tx: Sender<Recognition>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        let session_name = recognizer.name();

        let handle = thread::spawn(move || {
            while let Ok(frame) = frame_rx.recv() {
                match recognizer.process_frame(&frame) {
                    Ok(recognition) => {
                        if out_tx.send(recognition).is_err() {
                            // Output channel closed, shutdown
                            break;
                        }
                    }
                    Err(error) => {
                        reporter.report(session_name, &error);
                    }
                }
            }
        });

        Self {
            handle: Some(handle),
            session_name,
        }
    }

    /// Waits for the session thread to complete.
    pub fn join(mut self) -> Result<(), String> {
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| format!("Session '{}' thread panicked", self.session_name))
        } else {
            Ok(())
        }
    }
}

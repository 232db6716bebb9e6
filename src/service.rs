//! Multi-session registry with per-session mutual exclusion.
//!
//! A single session is synchronous and single-owner; when the core is
//! exposed to callers that may deliver frames from more than one logical
//! thread, each session sits behind its own mutex so steps on one session
//! serialize while distinct sessions proceed independently.

use crate::error::{HandspellError, Result};
use crate::landmark::types::LandmarkFrame;
use crate::session::recognizer::{FrameRecognizer, Recognition};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type SharedRecognizer = Arc<Mutex<Box<dyn FrameRecognizer>>>;

/// Registry of named streaming sessions.
#[derive(Default)]
pub struct RecognitionService {
    sessions: Mutex<HashMap<String, SharedRecognizer>>,
}

impl RecognitionService {
    /// Creates an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a recognizer under an id, replacing any previous session
    /// with the same id.
    pub fn register(&self, id: &str, recognizer: Box<dyn FrameRecognizer>) {
        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.insert(id.to_string(), Arc::new(Mutex::new(recognizer)));
        }
    }

    /// Processes one frame on the named session.
    ///
    /// Concurrent calls against the same id serialize on the session mutex;
    /// calls against different ids do not contend.
    pub fn process_frame(&self, id: &str, frame: &LandmarkFrame) -> Result<Recognition> {
        let session = self.lookup(id)?;
        let mut recognizer = session
            .lock()
            .map_err(|_| HandspellError::Other(format!("session {:?} poisoned", id)))?;
        recognizer.process_frame(frame)
    }

    /// Resets the named session's accumulated state.
    pub fn reset(&self, id: &str) -> Result<()> {
        let session = self.lookup(id)?;
        let mut recognizer = session
            .lock()
            .map_err(|_| HandspellError::Other(format!("session {:?} poisoned", id)))?;
        recognizer.reset();
        Ok(())
    }

    /// Removes the named session.
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| HandspellError::Other("session registry poisoned".to_string()))?;
        sessions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| HandspellError::SessionNotFound { id: id.to_string() })
    }

    /// Ids of all registered sessions.
    pub fn ids(&self) -> Vec<String> {
        match self.sessions.lock() {
            Ok(sessions) => sessions.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn lookup(&self, id: &str) -> Result<SharedRecognizer> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| HandspellError::Other("session registry poisoned".to_string()))?;
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| HandspellError::SessionNotFound { id: id.to_string() })
    }
}

//! Client-side mirror of the voice session state machine.
//!
//! The external voice runtime owns the real state; this driver only tracks
//! what the event stream reveals: Inactive → Connecting → Active → Finished,
//! with GeneratingFeedback entered once Finished is reached with a non-empty
//! transcript. Transcript turns are appended in arrival order, final
//! fragments only; no de-duplication or reordering is performed.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Session lifecycle as observed from the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CallStatus {
    Inactive,
    Connecting,
    Active,
    Finished,
    GeneratingFeedback,
}

/// One `{role, content}` turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: String,
    pub content: String,
}

/// Whether a message event carries a final turn or an interim fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptKind {
    Partial,
    Final,
}

/// Events delivered by the voice runtime for the lifetime of one session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    CallStart,
    CallEnd,
    Message {
        role: String,
        content: String,
        kind: TranscriptKind,
    },
    SpeechStart,
    SpeechEnd,
    /// Session start rejected or the runtime failed mid-call. The session is
    /// over either way; the error text is surfaced to the user.
    Error(String),
}

/// Accumulates one session's state. Owned by a single session; listeners are
/// registered at connect time and dropped on teardown, so there is no
/// cross-session sharing to coordinate.
#[derive(Debug)]
pub struct SessionDriver {
    status: CallStatus,
    transcript: Vec<TranscriptTurn>,
    agent_speaking: bool,
    last_error: Option<String>,
}

impl SessionDriver {
    pub fn new() -> Self {
        Self {
            status: CallStatus::Inactive,
            transcript: Vec::new(),
            agent_speaking: false,
            last_error: None,
        }
    }

    /// Marks the session as requested; the runtime has not yet confirmed.
    pub fn connect(&mut self) {
        self.status = CallStatus::Connecting;
    }

    /// Applies one runtime event to the mirror state.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::CallStart => {
                self.status = CallStatus::Active;
            }
            SessionEvent::CallEnd => {
                self.status = CallStatus::Finished;
            }
            SessionEvent::Message {
                role,
                content,
                kind,
            } => {
                // Interim fragments are discarded; only final turns count.
                if kind == TranscriptKind::Final {
                    self.transcript.push(TranscriptTurn { role, content });
                }
            }
            SessionEvent::SpeechStart => {
                self.agent_speaking = true;
            }
            SessionEvent::SpeechEnd => {
                self.agent_speaking = false;
            }
            SessionEvent::Error(message) => {
                warn!("Voice session error: {message}");
                self.last_error = Some(message);
                self.status = CallStatus::Finished;
            }
        }
    }

    /// Transitions Finished → GeneratingFeedback. Refused unless the session
    /// has finished with a non-empty transcript; a call that never produced
    /// a turn gets no report.
    pub fn begin_feedback(&mut self) -> bool {
        if self.status == CallStatus::Finished && !self.transcript.is_empty() {
            self.status = CallStatus::GeneratingFeedback;
            true
        } else {
            false
        }
    }

    pub fn status(&self) -> CallStatus {
        self.status
    }

    pub fn transcript(&self) -> &[TranscriptTurn] {
        &self.transcript
    }

    pub fn agent_speaking(&self) -> bool {
        self.agent_speaking
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for SessionDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_message(role: &str, content: &str) -> SessionEvent {
        SessionEvent::Message {
            role: role.to_string(),
            content: content.to_string(),
            kind: TranscriptKind::Final,
        }
    }

    #[test]
    fn test_lifecycle_inactive_to_finished() {
        let mut driver = SessionDriver::new();
        assert_eq!(driver.status(), CallStatus::Inactive);
        driver.connect();
        assert_eq!(driver.status(), CallStatus::Connecting);
        driver.apply(SessionEvent::CallStart);
        assert_eq!(driver.status(), CallStatus::Active);
        driver.apply(SessionEvent::CallEnd);
        assert_eq!(driver.status(), CallStatus::Finished);
    }

    #[test]
    fn test_partial_fragments_are_discarded() {
        let mut driver = SessionDriver::new();
        driver.apply(SessionEvent::CallStart);
        driver.apply(SessionEvent::Message {
            role: "user".to_string(),
            content: "I thi".to_string(),
            kind: TranscriptKind::Partial,
        });
        driver.apply(final_message("user", "I think the answer is caching"));
        assert_eq!(driver.transcript().len(), 1);
        assert_eq!(driver.transcript()[0].content, "I think the answer is caching");
    }

    #[test]
    fn test_transcript_preserves_arrival_order() {
        let mut driver = SessionDriver::new();
        driver.apply(SessionEvent::CallStart);
        driver.apply(final_message("assistant", "First question"));
        driver.apply(final_message("user", "First answer"));
        driver.apply(final_message("assistant", "Second question"));
        let roles: Vec<&str> = driver.transcript().iter().map(|t| t.role.as_str()).collect();
        assert_eq!(roles, vec!["assistant", "user", "assistant"]);
    }

    #[test]
    fn test_begin_feedback_requires_finished_and_nonempty_transcript() {
        let mut driver = SessionDriver::new();
        driver.apply(SessionEvent::CallStart);
        driver.apply(final_message("user", "hello"));
        // Still active, refused.
        assert!(!driver.begin_feedback());
        driver.apply(SessionEvent::CallEnd);
        assert!(driver.begin_feedback());
        assert_eq!(driver.status(), CallStatus::GeneratingFeedback);
    }

    #[test]
    fn test_begin_feedback_refused_with_empty_transcript() {
        let mut driver = SessionDriver::new();
        driver.apply(SessionEvent::CallStart);
        driver.apply(SessionEvent::CallEnd);
        assert!(!driver.begin_feedback());
        assert_eq!(driver.status(), CallStatus::Finished);
    }

    #[test]
    fn test_error_event_finishes_session() {
        let mut driver = SessionDriver::new();
        driver.connect();
        driver.apply(SessionEvent::Error("malformed workflow".to_string()));
        assert_eq!(driver.status(), CallStatus::Finished);
        assert_eq!(driver.last_error(), Some("malformed workflow"));
    }

    #[test]
    fn test_speech_events_toggle_speaking_flag() {
        let mut driver = SessionDriver::new();
        driver.apply(SessionEvent::CallStart);
        driver.apply(SessionEvent::SpeechStart);
        assert!(driver.agent_speaking());
        driver.apply(SessionEvent::SpeechEnd);
        assert!(!driver.agent_speaking());
    }
}

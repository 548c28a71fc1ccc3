//! Error types for practice-core.

use crate::stage::{WordPracticeMode, WordPracticeStage};
use thiserror::Error;

/// Result type alias using PracticeError.
pub type Result<T> = std::result::Result<T, PracticeError>;

/// Errors that can occur while driving a practice session.
#[derive(Debug, Error)]
pub enum PracticeError {
    /// The dictionary cannot back a session (no words at all).
    #[error("invalid dictionary {dict_id}: {reason}")]
    InvalidDict { dict_id: String, reason: String },

    /// A stage has no eligible words. Recovered internally by skipping
    /// to the next stage; never surfaced through the session API.
    #[error("no eligible words for stage {stage}")]
    EmptyPool { stage: WordPracticeStage },

    /// Mutation attempted on a finalized statistics record.
    #[error("statistics record is sealed")]
    SealedRecord,

    /// A mode maps to an empty or non-terminating stage list. Indicates a
    /// static configuration bug, checked once at startup.
    #[error("stage map misconfigured for mode {mode}: {reason}")]
    StageMapMisconfigured {
        mode: WordPracticeMode,
        reason: String,
    },
}

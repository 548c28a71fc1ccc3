//! Practice modes, stages, and the mode-to-stage map.
//!
//! The stage map is a total match over the closed mode enumeration, so it is
//! immutable for the process lifetime. `validate_stage_map` re-checks the
//! structural invariants once at startup; a failure there is a configuration
//! bug, not a recoverable data issue.

use crate::error::{PracticeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named combination of stages the learner selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordPracticeMode {
    System,
    Free,
    IdentifyOnly,
    DictationOnly,
    ListenOnly,
    Shuffle,
    Review,
}

/// One pedagogical phase within a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordPracticeStage {
    FollowWriteNewWord,
    IdentifyNewWord,
    ListenNewWord,
    DictationNewWord,

    FollowWriteReview,
    IdentifyReview,
    ListenReview,
    DictationReview,

    FollowWriteReviewAll,
    IdentifyReviewAll,
    ListenReviewAll,
    DictationReviewAll,

    Shuffle,
    Complete,
}

/// The kind of exercise a stage presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordPracticeType {
    FollowWrite,
    Spell,
    Identify,
    Listen,
    Dictation,
}

/// Which pool a stage draws its words from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Next batch of unstudied words.
    New,
    /// Words studied in the immediately preceding session.
    Review,
    /// All previously studied words, capped.
    ReviewAll,
    /// A random permutation of everything studied.
    Shuffle,
    /// Terminal marker; draws no pool.
    Complete,
}

impl WordPracticeMode {
    /// Every mode, for exhaustive validation and iteration.
    pub const ALL: [WordPracticeMode; 7] = [
        Self::System,
        Self::Free,
        Self::IdentifyOnly,
        Self::DictationOnly,
        Self::ListenOnly,
        Self::Shuffle,
        Self::Review,
    ];

    /// The ordered stage list for this mode. Always ends in `Complete`.
    pub fn stages(self) -> &'static [WordPracticeStage] {
        use WordPracticeStage::*;
        match self {
            Self::Free => &[FollowWriteNewWord, Complete],
            Self::IdentifyOnly => &[
                IdentifyNewWord,
                IdentifyReview,
                IdentifyReviewAll,
                Complete,
            ],
            Self::DictationOnly => &[
                DictationNewWord,
                DictationReview,
                DictationReviewAll,
                Complete,
            ],
            Self::ListenOnly => &[ListenNewWord, ListenReview, ListenReviewAll, Complete],
            Self::System => &[
                FollowWriteNewWord,
                ListenNewWord,
                DictationNewWord,
                IdentifyReview,
                ListenReview,
                DictationReview,
                IdentifyReviewAll,
                ListenReviewAll,
                DictationReviewAll,
                Complete,
            ],
            Self::Shuffle => &[Shuffle, Complete],
            Self::Review => &[
                IdentifyReview,
                ListenReview,
                DictationReview,
                IdentifyReviewAll,
                ListenReviewAll,
                DictationReviewAll,
                Complete,
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Free => "free",
            Self::IdentifyOnly => "identify_only",
            Self::DictationOnly => "dictation_only",
            Self::ListenOnly => "listen_only",
            Self::Shuffle => "shuffle",
            Self::Review => "review",
        }
    }

    /// Human-readable mode name.
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "Study",
            Self::Free => "Free practice",
            Self::IdentifyOnly => "Self test",
            Self::DictationOnly => "Dictation",
            Self::ListenOnly => "Listening",
            Self::Shuffle => "Shuffled review",
            Self::Review => "Review",
        }
    }
}

impl WordPracticeStage {
    /// Which pool this stage draws from.
    pub fn kind(self) -> StageKind {
        use WordPracticeStage::*;
        match self {
            FollowWriteNewWord | IdentifyNewWord | ListenNewWord | DictationNewWord => {
                StageKind::New
            }
            FollowWriteReview | IdentifyReview | ListenReview | DictationReview => {
                StageKind::Review
            }
            FollowWriteReviewAll | IdentifyReviewAll | ListenReviewAll | DictationReviewAll => {
                StageKind::ReviewAll
            }
            Shuffle => StageKind::Shuffle,
            Complete => StageKind::Complete,
        }
    }

    /// The exercise presented during this stage; `None` for `Complete`.
    pub fn practice_type(self) -> Option<WordPracticeType> {
        use WordPracticeStage::*;
        match self {
            FollowWriteNewWord | FollowWriteReview | FollowWriteReviewAll => {
                Some(WordPracticeType::FollowWrite)
            }
            IdentifyNewWord | IdentifyReview | IdentifyReviewAll => {
                Some(WordPracticeType::Identify)
            }
            ListenNewWord | ListenReview | ListenReviewAll => Some(WordPracticeType::Listen),
            DictationNewWord | DictationReview | DictationReviewAll => {
                Some(WordPracticeType::Dictation)
            }
            Shuffle => Some(WordPracticeType::Spell),
            Complete => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        use WordPracticeStage::*;
        match self {
            FollowWriteNewWord => "follow_write_new_word",
            IdentifyNewWord => "identify_new_word",
            ListenNewWord => "listen_new_word",
            DictationNewWord => "dictation_new_word",
            FollowWriteReview => "follow_write_review",
            IdentifyReview => "identify_review",
            ListenReview => "listen_review",
            DictationReview => "dictation_review",
            FollowWriteReviewAll => "follow_write_review_all",
            IdentifyReviewAll => "identify_review_all",
            ListenReviewAll => "listen_review_all",
            DictationReviewAll => "dictation_review_all",
            Shuffle => "shuffle",
            Complete => "complete",
        }
    }

    /// Human-readable stage name.
    pub fn label(self) -> &'static str {
        use WordPracticeStage::*;
        match self {
            FollowWriteNewWord => "Follow-write new words",
            IdentifyNewWord => "Self-test new words",
            ListenNewWord => "Listen to new words",
            DictationNewWord => "Dictate new words",
            FollowWriteReview => "Follow-write last session",
            IdentifyReview => "Self-test last session",
            ListenReview => "Listen to last session",
            DictationReview => "Dictate last session",
            FollowWriteReviewAll => "Follow-write earlier sessions",
            IdentifyReviewAll => "Self-test earlier sessions",
            ListenReviewAll => "Listen to earlier sessions",
            DictationReviewAll => "Dictate earlier sessions",
            Shuffle => "Shuffled review",
            Complete => "Finished",
        }
    }
}

impl fmt::Display for WordPracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WordPracticeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check the structural invariants of the stage map for every mode.
///
/// Call once at process start; the map is static, so a pass here holds for
/// the process lifetime.
pub fn validate_stage_map() -> Result<()> {
    for mode in WordPracticeMode::ALL {
        let stages = mode.stages();
        if stages.is_empty() {
            return Err(PracticeError::StageMapMisconfigured {
                mode,
                reason: "stage list is empty".into(),
            });
        }
        if stages.last() != Some(&WordPracticeStage::Complete) {
            return Err(PracticeError::StageMapMisconfigured {
                mode,
                reason: "stage list does not end in complete".into(),
            });
        }
        let body = &stages[..stages.len() - 1];
        for (i, stage) in body.iter().enumerate() {
            if *stage == WordPracticeStage::Complete {
                return Err(PracticeError::StageMapMisconfigured {
                    mode,
                    reason: "complete appears before the end".into(),
                });
            }
            if body[..i].contains(stage) {
                return Err(PracticeError::StageMapMisconfigured {
                    mode,
                    reason: format!("stage {stage} repeats"),
                });
            }
        }
    }
    Ok(())
}

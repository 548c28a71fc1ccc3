//! Core practice-session engine for the vocabulary learning application.
//!
//! Provides:
//! - The mode-to-stage map and its startup validation
//! - Task pool construction (new / review / review-all / shuffle)
//! - Per-stage practice tracking with single-pass re-drill
//! - Session sequencing over a dictionary
//! - Session statistics aggregation
//! - Article text tokenization for in-article practice
//!
//! The engine performs no I/O and renders nothing; callers drive it through
//! discrete, serialized calls and persist the results themselves.

pub mod article;
pub mod error;
pub mod pool;
pub mod session;
pub mod stage;
pub mod stats;
pub mod tracker;
pub mod types;

pub use error::{PracticeError, Result};
pub use pool::{build_pools, TaskWords};
pub use session::PracticeSession;
pub use stage::{
    validate_stage_map, StageKind, WordPracticeMode, WordPracticeStage, WordPracticeType,
};
pub use stats::{StatsAggregator, WordCategory};
pub use tracker::PracticeTracker;
pub use types::{
    Article, ArticleWord, ArticleWordKind, Dict, PracticeConfig, Progress, Sentence, Statistics,
    SymbolPosition, Word,
};

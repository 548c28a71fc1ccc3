//! Session sequencing.
//!
//! A [`PracticeSession`] owns everything one practice run needs: the
//! dictionary snapshot, the mode's stage list, the active tracker, and the
//! statistics record. Construction is the Idle→InStage transition; dropping
//! the value abandons the session. The engine performs no I/O — the caller
//! awaits any network or audio work before invoking these methods, and calls
//! must be serialized.

use crate::error::{PracticeError, Result};
use crate::pool;
use crate::stage::{self, StageKind, WordPracticeMode, WordPracticeStage};
use crate::stats::{StatsAggregator, WordCategory};
use crate::tracker::PracticeTracker;
use crate::types::{Dict, PracticeConfig, Progress, Statistics, Word};
use chrono::Utc;
use uuid::Uuid;

/// Whether the session is mid-stage or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    InStage(WordPracticeStage),
    Complete,
}

/// One practice run over a dictionary.
#[derive(Debug)]
pub struct PracticeSession {
    id: Uuid,
    dict: Dict,
    mode: WordPracticeMode,
    config: PracticeConfig,
    state: SessionState,
    stage_index: usize,
    tracker: PracticeTracker,
    stats: StatsAggregator,
    /// Set at the Complete transition, handed out once.
    statistics: Option<Statistics>,
    /// Source words consumed from the unstudied window this session,
    /// including skipped exclusions; advances `dict.last_learn_index`.
    new_consumed: usize,
}

impl PracticeSession {
    /// Start a session: Idle → InStage(first stage of the mode).
    ///
    /// Fails with [`PracticeError::InvalidDict`] when the dictionary has no
    /// words. A dictionary where every stage pool comes up empty (e.g. Review
    /// mode on a dictionary never studied) yields a session that is already
    /// Complete.
    pub fn start(dict: Dict, mode: WordPracticeMode, config: PracticeConfig) -> Result<Self> {
        stage::validate_stage_map()?;
        if dict.words.is_empty() {
            return Err(PracticeError::InvalidDict {
                dict_id: dict.id.clone(),
                reason: "dictionary has no words".into(),
            });
        }
        let mut session = Self {
            id: Uuid::new_v4(),
            dict,
            mode,
            config,
            state: SessionState::Complete,
            stage_index: 0,
            tracker: PracticeTracker::default(),
            stats: StatsAggregator::begin(Utc::now()),
            statistics: None,
            new_consumed: 0,
        };
        session.enter_stage(0);
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> WordPracticeMode {
        self.mode
    }

    /// The active stage; `Complete` once the session has finished.
    pub fn current_stage(&self) -> WordPracticeStage {
        match self.state {
            SessionState::InStage(stage) => stage,
            SessionState::Complete => WordPracticeStage::Complete,
        }
    }

    /// Cursor position within the active stage.
    pub fn progress(&self) -> Progress {
        self.tracker.progress()
    }

    /// The word the learner is currently facing; `None` once complete.
    pub fn current_word(&self) -> Option<&Word> {
        match self.state {
            SessionState::InStage(_) => self.tracker.current_word(),
            SessionState::Complete => None,
        }
    }

    /// Record the learner's outcome for the current word.
    ///
    /// `word_id` must name the current word; a stale identity (e.g. a queued
    /// UI event from a previous word) is ignored. After Complete this is a
    /// no-op.
    pub fn record_answer(&mut self, word_id: &str, correct: bool) {
        let SessionState::InStage(current_stage) = self.state else {
            return;
        };
        let Some(word) = self.tracker.current_word() else {
            return;
        };
        if word.id != word_id {
            return;
        }
        self.tracker.record_answer(correct);
        let category = WordCategory::for_stage_kind(current_stage.kind());
        self.stats
            .on_word_resolved(category, correct)
            .expect("statistics sealed before session complete");
        self.after_step();
    }

    /// Move past the current word without recording an outcome ("show
    /// answer" / skip). After Complete this is a no-op.
    pub fn advance(&mut self) {
        if !matches!(self.state, SessionState::InStage(_)) {
            return;
        }
        self.tracker.advance();
        self.after_step();
    }

    /// Skip `id` for the rest of the session and all future pools.
    pub fn exclude_word(&mut self, id: &str) {
        if !matches!(self.state, SessionState::InStage(_)) {
            return;
        }
        if !self.config.exclude_words.iter().any(|w| w == id) {
            self.config.exclude_words.push(id.to_string());
        }
        self.tracker.exclude_word(id);
        self.after_step();
    }

    /// The finalized record, handed out exactly once after Complete.
    pub fn take_statistics(&mut self) -> Option<Statistics> {
        self.statistics.take()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Complete)
    }

    /// The session's dictionary snapshot. `last_learn_index` and `complete`
    /// are updated exactly once, at the Complete transition.
    pub fn dict(&self) -> &Dict {
        &self.dict
    }

    /// Give the dictionary back to the caller for persistence.
    pub fn into_dict(self) -> Dict {
        self.dict
    }

    /// Find the next stage (starting at `idx`) with a non-empty pool, or
    /// finish the session if only `Complete` remains.
    fn enter_stage(&mut self, mut idx: usize) {
        let stages = self.mode.stages();
        while idx < stages.len() {
            let stage = stages[idx];
            if stage == WordPracticeStage::Complete {
                self.finish();
                return;
            }
            match pool::build_pools(&self.dict, &self.config, stage) {
                Ok(mut pools) => {
                    if stage.kind() == StageKind::New {
                        self.new_consumed = pools.new_consumed;
                    }
                    let words = pools.take_for(stage);
                    self.tracker
                        .begin_stage(words, self.config.exclude_words.clone());
                    self.stage_index = idx;
                    self.state = SessionState::InStage(stage);
                    return;
                }
                // only EmptyPool can come out of build_pools: skip the stage
                Err(_) => {}
            }
            idx += 1;
        }
        self.finish();
    }

    /// Stage bookkeeping after every cursor movement.
    fn after_step(&mut self) {
        if !self.tracker.is_pass_complete() {
            return;
        }
        if self.tracker.begin_redrill() {
            return;
        }
        self.enter_stage(self.stage_index + 1);
    }

    /// InStage → Complete: seal statistics and commit dictionary progress.
    fn finish(&mut self) {
        self.state = SessionState::Complete;
        if self.statistics.is_some() || self.stats.is_sealed() {
            return;
        }
        let record = self
            .stats
            .finalize(Utc::now())
            .expect("statistics sealed before session complete");
        if self.new_consumed > 0 {
            let next = self.dict.last_learn_index + self.new_consumed;
            if next >= self.dict.words.len() {
                // whole dictionary studied: flag it and restart the cycle
                self.dict.complete = true;
                self.dict.last_learn_index = 0;
            } else {
                self.dict.last_learn_index = next;
            }
        }
        self.statistics = Some(record);
    }
}

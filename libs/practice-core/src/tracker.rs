//! Per-stage practice tracking.
//!
//! Holds the cursor over the active pool, the words answered incorrectly,
//! and the identities to skip. One tracker instance is reused across stages;
//! `begin_stage` resets the cursor and clears the wrong-word list.

use crate::types::{Progress, Word};

/// Cursor state for the active stage.
#[derive(Debug, Default)]
pub struct PracticeTracker {
    index: usize,
    words: Vec<Word>,
    wrong_words: Vec<Word>,
    exclude_words: Vec<String>,
    /// Latched once the wrong-word pass has started; guarantees at most one
    /// re-drill per stage.
    redrilled: bool,
}

impl PracticeTracker {
    /// Reset for a new stage with the given pool.
    pub fn begin_stage(&mut self, words: Vec<Word>, exclude_words: Vec<String>) {
        self.index = 0;
        self.words = words;
        self.wrong_words.clear();
        self.exclude_words = exclude_words;
        self.redrilled = false;
        self.skip_excluded();
    }

    /// The word the learner is currently facing.
    pub fn current_word(&self) -> Option<&Word> {
        self.words.get(self.index)
    }

    /// Record the outcome for the current word and move the cursor forward.
    ///
    /// An incorrect word is queued for re-drill; a word already queued is not
    /// duplicated. Past the end of the pool this is a no-op.
    pub fn record_answer(&mut self, correct: bool) {
        let Some(word) = self.words.get(self.index) else {
            return;
        };
        if !correct && !self.wrong_words.iter().any(|w| w.id == word.id) {
            self.wrong_words.push(word.clone());
        }
        self.index += 1;
        self.skip_excluded();
    }

    /// Move the cursor forward without recording an outcome.
    pub fn advance(&mut self) {
        if self.index < self.words.len() {
            self.index += 1;
            self.skip_excluded();
        }
    }

    /// Skip `id` for the rest of the session. If it is the current word the
    /// cursor moves past it.
    pub fn exclude_word(&mut self, id: &str) {
        if !self.exclude_words.iter().any(|w| w == id) {
            self.exclude_words.push(id.to_string());
        }
        self.wrong_words.retain(|w| w.id != id);
        self.skip_excluded();
    }

    /// True when the cursor has passed every word in the current pass.
    pub fn is_pass_complete(&self) -> bool {
        self.index >= self.words.len()
    }

    /// True when the pass is complete and no re-drill remains.
    pub fn is_stage_complete(&self) -> bool {
        self.is_pass_complete() && (self.wrong_words.is_empty() || self.redrilled)
    }

    /// Fold the wrong words back in as one extra pass. Returns false when
    /// there is nothing to re-drill or the re-drill already ran.
    pub fn begin_redrill(&mut self) -> bool {
        if self.redrilled || self.wrong_words.is_empty() || !self.is_pass_complete() {
            return false;
        }
        self.words = std::mem::take(&mut self.wrong_words);
        self.index = 0;
        self.redrilled = true;
        self.skip_excluded();
        true
    }

    pub fn progress(&self) -> Progress {
        Progress {
            index: self.index,
            pool_size: self.words.len(),
            wrong_count: self.wrong_words.len(),
        }
    }

    pub fn pool_size(&self) -> usize {
        self.words.len()
    }

    fn skip_excluded(&mut self) {
        while let Some(word) = self.words.get(self.index) {
            if self.exclude_words.iter().any(|id| *id == word.id) {
                self.index += 1;
            } else {
                break;
            }
        }
    }
}

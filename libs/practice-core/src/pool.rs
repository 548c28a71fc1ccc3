//! Task pool construction.
//!
//! Partitions a dictionary's words into the four task pools. Pools are built
//! fresh each time a stage begins; only the pool matching the requested
//! stage's kind is populated, so no word identity can sit in two pools at
//! once.

use crate::error::{PracticeError, Result};
use crate::stage::{StageKind, WordPracticeStage};
use crate::types::{Dict, PracticeConfig, Word};
use rand::seq::SliceRandom;
use rand::Rng;

/// The four disjoint task pools for one stage.
#[derive(Debug, Clone, Default)]
pub struct TaskWords {
    /// Next batch of unstudied words.
    pub new: Vec<Word>,
    /// Words from the immediately preceding session.
    pub review: Vec<Word>,
    /// Earlier studied words, capped at the configured ceiling.
    pub write: Vec<Word>,
    /// A random permutation of all studied words.
    pub shuffle: Vec<Word>,
    /// Source words consumed from the unstudied window to fill `new`,
    /// counting excluded words skipped over. This is how far
    /// `last_learn_index` moves when the session completes; the pool length
    /// alone undercounts whenever an exclusion was skipped.
    pub new_consumed: usize,
}

impl TaskWords {
    /// Hand over the pool backing `stage`. `Complete` draws no pool.
    pub fn take_for(&mut self, stage: WordPracticeStage) -> Vec<Word> {
        match stage.kind() {
            StageKind::New => std::mem::take(&mut self.new),
            StageKind::Review => std::mem::take(&mut self.review),
            StageKind::ReviewAll => std::mem::take(&mut self.write),
            StageKind::Shuffle => std::mem::take(&mut self.shuffle),
            StageKind::Complete => Vec::new(),
        }
    }
}

/// Build the pools needed by `stage` from `dict`.
///
/// Fails with [`PracticeError::EmptyPool`] when the pool a stage requires
/// ends up with zero words; the sequencer recovers by skipping to the next
/// stage.
pub fn build_pools(dict: &Dict, config: &PracticeConfig, stage: WordPracticeStage) -> Result<TaskWords> {
    build_pools_with(dict, config, stage, &mut rand::thread_rng())
}

/// As [`build_pools`], with a caller-supplied rng for the shuffle pool.
pub fn build_pools_with<R: Rng>(
    dict: &Dict,
    config: &PracticeConfig,
    stage: WordPracticeStage,
    rng: &mut R,
) -> Result<TaskWords> {
    let mut pools = TaskWords::default();
    let populated = match stage.kind() {
        StageKind::New => {
            (pools.new, pools.new_consumed) = new_words(dict, config);
            &pools.new
        }
        StageKind::Review => {
            pools.review = review_words(dict, config);
            &pools.review
        }
        StageKind::ReviewAll => {
            pools.write = review_all_words(dict, config);
            &pools.write
        }
        StageKind::Shuffle => {
            pools.shuffle = shuffle_words(dict, config, rng);
            &pools.shuffle
        }
        StageKind::Complete => return Ok(pools),
    };
    if populated.is_empty() {
        return Err(PracticeError::EmptyPool { stage });
    }
    Ok(pools)
}

fn is_excluded(word: &Word, config: &PracticeConfig) -> bool {
    config.exclude_words.iter().any(|id| *id == word.id)
}

/// The next `per_day_study_number` non-excluded words after
/// `last_learn_index`, plus how many source words that draw consumed (one
/// past the offset of the last word drawn, so skipped exclusions count).
fn new_words(dict: &Dict, config: &PracticeConfig) -> (Vec<Word>, usize) {
    let start = dict.last_learn_index.min(dict.words.len());
    let mut words = Vec::new();
    let mut consumed = 0;
    for (offset, word) in dict.words[start..].iter().enumerate() {
        if words.len() == dict.per_day_study_number {
            break;
        }
        if is_excluded(word, config) {
            continue;
        }
        words.push(word.clone());
        consumed = offset + 1;
    }
    (words, consumed)
}

/// The words studied in the immediately preceding session: the final
/// `per_day_study_number` slice of the learned window.
fn review_words(dict: &Dict, config: &PracticeConfig) -> Vec<Word> {
    let learned = dict.learned_words();
    let start = learned.len().saturating_sub(dict.per_day_study_number);
    learned[start..]
        .iter()
        .filter(|w| !is_excluded(w, config))
        .cloned()
        .collect()
}

/// Everything studied before the previous session, most recent first-served:
/// capped to `review_all_limit` from the end of the window.
fn review_all_words(dict: &Dict, config: &PracticeConfig) -> Vec<Word> {
    let learned = dict.learned_words();
    let window_end = learned.len().saturating_sub(dict.per_day_study_number);
    let eligible: Vec<&Word> = learned[..window_end]
        .iter()
        .filter(|w| !is_excluded(w, config))
        .collect();
    let start = eligible.len().saturating_sub(config.review_all_limit);
    eligible[start..].iter().map(|w| (*w).clone()).collect()
}

/// A full permutation of all non-excluded studied words. One pass, no
/// replacement: every word is drawn once before any repeats.
fn shuffle_words<R: Rng>(dict: &Dict, config: &PracticeConfig, rng: &mut R) -> Vec<Word> {
    let mut words: Vec<Word> = dict
        .learned_words()
        .iter()
        .filter(|w| !is_excluded(w, config))
        .cloned()
        .collect();
    words.shuffle(rng);
    words
}

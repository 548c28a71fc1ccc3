//! Core types for the word practice engine.
//!
//! Struct shapes and wire names follow the dictionary JSON format so the
//! repository layer can round-trip existing dictionary files unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A part-of-speech tagged translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub cn: String,
}

/// An example sentence or phrase with its translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    #[serde(rename = "c", default)]
    pub content: String,
    #[serde(rename = "cn", default)]
    pub translation: String,
}

/// A synonym group for one sense of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub cn: String,
    #[serde(default)]
    pub ws: Vec<String>,
}

/// Words derived from the same root, grouped by part of speech.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedWords {
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub rels: Vec<RelationGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationGroup {
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub words: Vec<SentencePair>,
}

/// One etymology note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etymology {
    #[serde(rename = "t", default)]
    pub title: String,
    #[serde(rename = "d", default)]
    pub desc: String,
}

/// A dictionary entry. Immutable once loaded into a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    #[serde(default)]
    pub id: String,
    /// True for user-created entries.
    #[serde(default)]
    pub custom: bool,
    pub word: String,
    #[serde(default)]
    pub phonetic0: String,
    #[serde(default)]
    pub phonetic1: String,
    #[serde(default)]
    pub trans: Vec<Translation>,
    #[serde(default)]
    pub sentences: Vec<SentencePair>,
    #[serde(default)]
    pub phrases: Vec<SentencePair>,
    #[serde(default)]
    pub synos: Vec<Synonym>,
    #[serde(default)]
    pub rel_words: RelatedWords,
    #[serde(default)]
    pub etymology: Vec<Etymology>,
}

impl Word {
    /// Create a bare entry with only identity and lexical form set.
    pub fn new(id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            ..Default::default()
        }
    }
}

/// Classification of a token inside article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleWordKind {
    Symbol,
    Number,
    Word,
}

impl Default for ArticleWordKind {
    fn default() -> Self {
        Self::Word
    }
}

/// Where a punctuation symbol attaches relative to its host token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    Start,
    End,
    None,
}

impl Default for SymbolPosition {
    fn default() -> Self {
        Self::None
    }
}

/// A word occurrence inside article text, with the positional metadata the
/// renderer needs to reconstruct the original text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleWord {
    #[serde(flatten)]
    pub word: Word,
    /// Whether a space follows this token in the source text.
    pub next_space: bool,
    pub symbol_position: SymbolPosition,
    /// The learner's typed input for this token.
    #[serde(default)]
    pub input: String,
    #[serde(rename = "type")]
    pub kind: ArticleWordKind,
}

/// One sentence of an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub text: String,
    #[serde(default)]
    pub translate: String,
    #[serde(default)]
    pub words: Vec<ArticleWord>,
    #[serde(default)]
    pub audio_position: Vec<i64>,
}

/// An article attached to a dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub title_translate: String,
    pub text: String,
    #[serde(default)]
    pub text_translate: String,
    #[serde(default)]
    pub new_words: Vec<Word>,
    #[serde(default)]
    pub sections: Vec<Vec<Sentence>>,
}

/// One completed practice session. Created at session start, sealed when the
/// session reaches Complete, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Epoch milliseconds on the wire, matching the dictionary JSON format.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_date: DateTime<Utc>,
    /// Elapsed wall time in milliseconds.
    pub spend: i64,
    pub total: u32,
    pub new: u32,
    pub review: u32,
    pub wrong: u32,
}

/// A named word collection plus the learner's progress through it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dict {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub statistics: Vec<Statistics>,
    /// Index of the first word not yet studied.
    #[serde(default)]
    pub last_learn_index: usize,
    /// How many new words a single session introduces.
    #[serde(default = "default_per_day")]
    pub per_day_study_number: usize,
    #[serde(default)]
    pub custom: bool,
    /// Set once every word has been studied; `last_learn_index` resets with it.
    #[serde(default)]
    pub complete: bool,
}

fn default_per_day() -> usize {
    20
}

impl Dict {
    /// The slice of words already studied in previous sessions.
    pub fn learned_words(&self) -> &[Word] {
        let end = self.last_learn_index.min(self.words.len());
        &self.words[..end]
    }
}

/// Per-session configuration supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeConfig {
    /// Word identities to omit from every pool (e.g. the known-words list).
    #[serde(default)]
    pub exclude_words: Vec<String>,
    /// Ceiling on the ReviewAll pool, to bound session length.
    #[serde(default = "default_review_all_limit")]
    pub review_all_limit: usize,
}

fn default_review_all_limit() -> usize {
    200
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            exclude_words: Vec::new(),
            review_all_limit: default_review_all_limit(),
        }
    }
}

/// Snapshot of the learner's position within the active stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub index: usize,
    pub pool_size: usize,
    pub wrong_count: usize,
}

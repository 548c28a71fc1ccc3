//! Session statistics aggregation.

use crate::error::{PracticeError, Result};
use crate::stage::StageKind;
use crate::types::Statistics;
use chrono::{DateTime, Utc};

/// Which session counter a resolved word feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCategory {
    New,
    Review,
}

impl WordCategory {
    /// New-flavored stages count as new study; everything else is review.
    pub fn for_stage_kind(kind: StageKind) -> Self {
        match kind {
            StageKind::New => Self::New,
            _ => Self::Review,
        }
    }
}

/// Accumulates one [`Statistics`] record over a session, then seals it.
#[derive(Debug)]
pub struct StatsAggregator {
    record: Statistics,
    sealed: bool,
}

impl StatsAggregator {
    /// Start a fresh record at `now`.
    pub fn begin(now: DateTime<Utc>) -> Self {
        Self {
            record: Statistics {
                start_date: now,
                spend: 0,
                total: 0,
                new: 0,
                review: 0,
                wrong: 0,
            },
            sealed: false,
        }
    }

    /// Count one resolved word.
    pub fn on_word_resolved(&mut self, category: WordCategory, correct: bool) -> Result<()> {
        if self.sealed {
            return Err(PracticeError::SealedRecord);
        }
        self.record.total += 1;
        match category {
            WordCategory::New => self.record.new += 1,
            WordCategory::Review => self.record.review += 1,
        }
        if !correct {
            self.record.wrong += 1;
        }
        Ok(())
    }

    /// Compute elapsed time, seal the record, and return a snapshot.
    pub fn finalize(&mut self, now: DateTime<Utc>) -> Result<Statistics> {
        if self.sealed {
            return Err(PracticeError::SealedRecord);
        }
        self.record.spend = (now - self.record.start_date).num_milliseconds().max(0);
        self.sealed = true;
        Ok(self.record.clone())
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }
}

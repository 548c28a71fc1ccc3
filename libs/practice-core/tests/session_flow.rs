//! End-to-end session flows across modes.

use practice_core::{
    Dict, PracticeConfig, PracticeSession, Progress, Word, WordPracticeMode, WordPracticeStage,
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn dict(total: usize, learned: usize, per_day: usize) -> Dict {
    Dict {
        id: "d1".into(),
        name: "test dictionary".into(),
        words: (0..total)
            .map(|i| Word::new(format!("w{i}"), format!("word{i}")))
            .collect(),
        last_learn_index: learned,
        per_day_study_number: per_day,
        ..Default::default()
    }
}

/// Answer every remaining word correctly, returning the visited word ids in
/// order.
fn drain_correct(session: &mut PracticeSession) -> Vec<String> {
    let mut seen = Vec::new();
    while let Some(word) = session.current_word().cloned() {
        seen.push(word.id.clone());
        session.record_answer(&word.id, true);
    }
    seen
}

#[test]
fn identify_only_walks_new_then_review_stages() {
    // 5 new words, nothing learned yet: review stages have empty pools
    let mut session = PracticeSession::start(
        dict(5, 0, 5),
        WordPracticeMode::IdentifyOnly,
        PracticeConfig::default(),
    )
    .unwrap();

    assert_eq!(session.current_stage(), WordPracticeStage::IdentifyNewWord);
    for i in 0..5 {
        let word = session.current_word().unwrap().clone();
        assert_eq!(
            session.progress(),
            Progress {
                index: i,
                pool_size: 5,
                wrong_count: 0
            }
        );
        session.record_answer(&word.id, true);
    }
    // empty review pools skipped straight to Complete
    assert!(session.is_complete());
    let stats = session.take_statistics().unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.new, 5);
    assert_eq!(stats.wrong, 0);
}

#[test]
fn identify_only_moves_to_review_when_history_exists() {
    let mut session = PracticeSession::start(
        dict(20, 10, 5),
        WordPracticeMode::IdentifyOnly,
        PracticeConfig::default(),
    )
    .unwrap();

    assert_eq!(session.current_stage(), WordPracticeStage::IdentifyNewWord);
    for _ in 0..5 {
        let word = session.current_word().unwrap().clone();
        session.record_answer(&word.id, true);
    }
    assert_eq!(session.current_stage(), WordPracticeStage::IdentifyReview);
    assert_eq!(session.progress().pool_size, 5);
}

#[test]
fn shuffle_mode_draws_every_learned_word_exactly_once() {
    let mut session = PracticeSession::start(
        dict(12, 10, 5),
        WordPracticeMode::Shuffle,
        PracticeConfig::default(),
    )
    .unwrap();

    assert_eq!(session.current_stage(), WordPracticeStage::Shuffle);
    assert_eq!(session.progress().pool_size, 10);
    let seen = drain_correct(&mut session);
    assert_eq!(seen.len(), 10);
    let unique: HashSet<&String> = seen.iter().collect();
    assert_eq!(unique.len(), 10, "a word repeated before the pass ended");
    assert!(session.is_complete());
}

#[test]
fn system_mode_revisits_the_new_batch_across_stages() {
    let mut session = PracticeSession::start(
        dict(30, 10, 3),
        WordPracticeMode::System,
        PracticeConfig::default(),
    )
    .unwrap();

    let mut stages = Vec::new();
    while !session.is_complete() {
        let stage = session.current_stage();
        if stages.last() != Some(&stage) {
            stages.push(stage);
        }
        let word = session.current_word().unwrap().clone();
        session.record_answer(&word.id, true);
    }

    use WordPracticeStage::*;
    assert_eq!(
        stages,
        vec![
            FollowWriteNewWord,
            ListenNewWord,
            DictationNewWord,
            IdentifyReview,
            ListenReview,
            DictationReview,
            IdentifyReviewAll,
            ListenReviewAll,
            DictationReviewAll,
        ]
    );

    // new batch advanced once, at Complete
    assert_eq!(session.dict().last_learn_index, 13);
    let stats = session.take_statistics().unwrap();
    assert_eq!(stats.new, 9); // 3 words x 3 new stages
    assert!(stats.review > 0);
}

#[test]
fn wrong_word_reappears_once_then_never_again() {
    let mut session = PracticeSession::start(
        dict(5, 0, 5),
        WordPracticeMode::Free,
        PracticeConfig::default(),
    )
    .unwrap();

    let mut appearances = 0;
    while let Some(word) = session.current_word().cloned() {
        if word.id == "w2" {
            appearances += 1;
            // wrong on every appearance; the re-drill still runs only once
            session.record_answer(&word.id, false);
        } else {
            session.record_answer(&word.id, true);
        }
    }
    assert_eq!(appearances, 2);
    assert!(session.is_complete());
}

#[test]
fn exclude_words_never_surface_in_any_mode() {
    let excluded: Vec<String> = vec!["w2".into(), "w7".into()];
    for mode in WordPracticeMode::ALL {
        let config = PracticeConfig {
            exclude_words: excluded.clone(),
            ..Default::default()
        };
        let mut session = PracticeSession::start(dict(20, 10, 5), mode, config).unwrap();
        let seen = drain_correct(&mut session);
        for id in &excluded {
            assert!(!seen.contains(id), "{id} surfaced in mode {mode}");
        }
    }
}

#[test]
fn excluded_words_do_not_drift_the_new_word_cursor() {
    let config = PracticeConfig {
        exclude_words: vec!["w5".into()],
        ..Default::default()
    };

    let mut first =
        PracticeSession::start(dict(10, 4, 3), WordPracticeMode::Free, config.clone()).unwrap();
    let studied = drain_correct(&mut first);
    assert_eq!(studied, ["w4", "w6", "w7"]);
    // the cursor lands one past the last word drawn, not at pool length
    assert_eq!(first.dict().last_learn_index, 8);

    let mut second =
        PracticeSession::start(first.into_dict(), WordPracticeMode::Free, config).unwrap();
    let next_batch = drain_correct(&mut second);
    assert_eq!(next_batch, ["w8", "w9"]);
    for id in &studied {
        assert!(
            !next_batch.contains(id),
            "{id} was re-served as a new word in the next session"
        );
    }
}

#[test]
fn advance_counts_no_statistics() {
    let mut session = PracticeSession::start(
        dict(3, 0, 3),
        WordPracticeMode::Free,
        PracticeConfig::default(),
    )
    .unwrap();
    session.advance();
    session.advance();
    session.advance();
    assert!(session.is_complete());
    let stats = session.take_statistics().unwrap();
    assert_eq!(stats.total, 0);
    assert!(stats.spend >= 0);
}

#[test]
fn statistics_record_is_ready_to_append_to_dict_history() {
    let mut session = PracticeSession::start(
        dict(5, 0, 5),
        WordPracticeMode::Free,
        PracticeConfig::default(),
    )
    .unwrap();
    drain_correct(&mut session);
    let stats = session.take_statistics().unwrap();
    let mut dict = session.into_dict();
    dict.statistics.push(stats);
    assert_eq!(dict.statistics.len(), 1);
    assert_eq!(dict.statistics[0].total, 5);
}

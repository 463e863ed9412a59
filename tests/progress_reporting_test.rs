//! Integration test: progress reporting across games
//!
//! Exercises the shared progress surface: the property-guess session
//! end to end, summary serialization, per-element tallies accumulating
//! across sessions, and the active-game abandon dispatch.

use elementa::catalog::ElementCatalog;
use elementa::games::property::{self, AccuracyTier, PropertyGame, PropertyPhase};
use elementa::games::quiz::{self, QuizDifficulty, QuizGame};
use elementa::games::ActiveGame;
use elementa::progress::{GameType, MemoryProgress, SessionSummary};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn property_session_end_to_end() {
    let catalog = ElementCatalog::builtin();
    let mut rng = seeded_rng();
    let mut game = PropertyGame::new();
    assert!(property::start(&mut game, &catalog, 5, &mut rng));
    let mut sink = MemoryProgress::new();

    let mut last = None;
    for _ in 0..5 {
        let truth = game.current_question().unwrap().true_value;
        let (score, tier) = property::submit_guess(&mut game, truth, &mut sink).unwrap();
        assert_eq!(score, 100);
        assert_eq!(tier, AccuracyTier::Excellent);
        property::tick(&mut game, 6_000);
        last = property::advance(&mut game, &mut sink);
    }

    let summary = last.unwrap();
    assert_eq!(summary.game_type, GameType::PropertyGuess);
    assert!(summary.completed);
    assert_eq!(summary.correct, 5);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.score, 500);
    assert_eq!(summary.best_streak, 5);
    assert!((summary.avg_response_secs - 6.0).abs() < 1e-9);
    assert_eq!(game.phase, PropertyPhase::Completed);
    assert_eq!(sink.sessions.len(), 1);
}

#[test]
fn summary_round_trips_through_serde() {
    let summary = SessionSummary::from_counts(GameType::Lightning, 42_500, 12, 15, 310, 7, true);
    let json = serde_json::to_string(&summary).unwrap();
    let back: SessionSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}

#[test]
fn tallies_accumulate_across_sessions() {
    let catalog = ElementCatalog::builtin();
    let mut sink = MemoryProgress::new();

    for seed in [1u64, 2, 3] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = PropertyGame::new();
        assert!(property::start(&mut game, &catalog, 4, &mut rng));
        while game.phase != PropertyPhase::Completed {
            let truth = game.current_question().unwrap().true_value;
            property::submit_guess(&mut game, truth, &mut sink).unwrap();
            property::advance(&mut game, &mut sink);
        }
    }

    assert_eq!(sink.sessions.len(), 3);
    let total_attempts: u64 = (1..=118).map(|n| sink.tally(n).attempts).sum();
    assert_eq!(total_attempts, 12);
}

#[test]
fn active_game_abandon_dispatches_and_closes() {
    let catalog = ElementCatalog::builtin();
    let mut rng = seeded_rng();
    let mut sink = MemoryProgress::new();

    let mut quiz_game = QuizGame::new(QuizDifficulty::Easy);
    assert!(quiz::start(&mut quiz_game, &catalog, 5, &mut rng));
    let mut active = ActiveGame::Quiz(quiz_game);
    assert_eq!(active.game_type(), GameType::Quiz);

    let summary = active.abandon(&mut sink).unwrap();
    assert_eq!(summary.game_type, GameType::Quiz);
    assert!(!summary.completed);

    // A second abandon is a no-op: the session already closed
    assert!(active.abandon(&mut sink).is_none());
    assert_eq!(sink.sessions.len(), 1);
}

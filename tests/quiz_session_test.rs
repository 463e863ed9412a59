//! Integration test: quiz session flow
//!
//! Covers generation guarantees across difficulties, free navigation
//! with answer revision, scoring with the time bonus, and the
//! per-element answer flush at finish.

use elementa::catalog::ElementCatalog;
use elementa::games::quiz::{self, QuizDifficulty, QuizGame, QuizPhase};
use elementa::progress::{GameType, MemoryProgress};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn started_game(difficulty: QuizDifficulty, count: usize) -> QuizGame {
    let catalog = ElementCatalog::builtin();
    let mut game = QuizGame::new(difficulty);
    let mut rng = seeded_rng();
    assert!(quiz::start(&mut game, &catalog, count, &mut rng));
    game
}

#[test]
fn generated_questions_are_well_formed_across_difficulties() {
    let catalog = ElementCatalog::builtin();
    for difficulty in QuizDifficulty::ALL {
        let mut rng = seeded_rng();
        let questions = quiz::generate_questions(&catalog, 20, difficulty, &mut rng);
        assert!(!questions.is_empty());
        assert!(questions.len() <= 20);
        for q in &questions {
            assert!(difficulty.allowed_kinds().contains(&q.kind));
            // Exactly one option is the answer, and no duplicates
            let hits = q.options.iter().filter(|o| **o == q.answer).count();
            assert_eq!(hits, 1, "{:?}: {:?}", q.kind, q.options);
            let mut options = q.options.clone();
            options.sort();
            options.dedup();
            assert_eq!(options.len(), q.options.len());
        }
    }
}

#[test]
fn answering_all_correct_scores_with_time_bonus() {
    let mut game = started_game(QuizDifficulty::Easy, 5);
    let total = game.questions.len();
    let mut sink = MemoryProgress::new();

    for i in 0..total {
        let correct = game.current_question().unwrap().correct_index().unwrap();
        assert!(quiz::select_answer(&mut game, correct));
        quiz::tick(&mut game, 4_000);
        if i + 1 < total {
            assert!(quiz::next_question(&mut game));
        }
    }
    assert!(game.all_answered());

    let summary = quiz::finish(&mut game, &mut sink).unwrap();
    assert_eq!(game.phase, QuizPhase::Completed);
    assert_eq!(summary.game_type, GameType::Quiz);
    assert!(summary.completed);
    assert_eq!(summary.correct, total as u32);
    assert_eq!(summary.best_streak, total as u32);
    // 4 seconds per answer earns a (10 - 4) * 10 = 60 point bonus
    assert_eq!(summary.score, total as u32 * 10 + 60);
    assert_eq!(sink.sessions.len(), 1);
}

#[test]
fn revising_an_answer_counts_only_the_latest_selection() {
    let mut game = started_game(QuizDifficulty::Mixed, 3);
    assert_eq!(game.questions.len(), 3);

    // Answer the first question wrong, the rest right
    let correct = game.current_question().unwrap().correct_index().unwrap();
    let wrong = (0..game.current_question().unwrap().options.len())
        .find(|i| *i != correct)
        .unwrap();
    quiz::select_answer(&mut game, wrong);
    quiz::next_question(&mut game);
    for _ in 1..3 {
        let correct = game.current_question().unwrap().correct_index().unwrap();
        quiz::select_answer(&mut game, correct);
        quiz::next_question(&mut game);
    }
    assert_eq!(game.correct, 2);
    assert_eq!(game.incorrect, 1);

    // Walk back and fix the first answer
    while quiz::previous_question(&mut game) {}
    assert_eq!(game.cursor, 0);
    let correct = game.current_question().unwrap().correct_index().unwrap();
    quiz::select_answer(&mut game, correct);
    assert_eq!(game.correct, 3);
    assert_eq!(game.incorrect, 0);

    // Revising to the same answer is stable
    quiz::select_answer(&mut game, correct);
    assert_eq!(game.correct, 3);
    assert_eq!(game.incorrect, 0);

    let mut sink = MemoryProgress::new();
    let summary = quiz::finish(&mut game, &mut sink).unwrap();
    assert_eq!(summary.correct, 3);
    assert_eq!(summary.best_streak, 3);
}

#[test]
fn finish_flushes_one_answer_per_question() {
    let mut game = started_game(QuizDifficulty::Easy, 4);
    let total = game.questions.len();
    let numbers: Vec<u32> = game.questions.iter().map(|q| q.atomic_number).collect();

    for i in 0..total {
        let correct = game.current_question().unwrap().correct_index().unwrap();
        quiz::select_answer(&mut game, correct);
        if i + 1 < total {
            quiz::next_question(&mut game);
        }
    }
    let mut sink = MemoryProgress::new();
    quiz::finish(&mut game, &mut sink).unwrap();

    for number in numbers {
        let tally = sink.tally(number);
        assert_eq!(tally.attempts, 1);
        assert_eq!(tally.correct, 1);
    }
}

#[test]
fn abandoned_session_reports_partial_and_skips_bonus() {
    let mut game = started_game(QuizDifficulty::Medium, 5);
    let correct = game.current_question().unwrap().correct_index().unwrap();
    quiz::select_answer(&mut game, correct);
    quiz::tick(&mut game, 1_000);

    let mut sink = MemoryProgress::new();
    let summary = quiz::abandon(&mut game, &mut sink).unwrap();
    assert!(!summary.completed);
    assert_eq!(summary.correct, 1);
    assert_eq!(summary.total, 5);
    // Abandoned sessions never earn the time bonus
    assert_eq!(summary.score, 10);
    assert_eq!(game.phase, QuizPhase::Completed);

    // The session is closed: no further input or time is accepted
    assert!(!quiz::select_answer(&mut game, 0));
    quiz::tick(&mut game, 1_000);
    assert_eq!(game.elapsed_ms, 1_000);
}

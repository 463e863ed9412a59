//! Lightning question generation and the tick-driven session loop.

use super::types::{
    LightningAnswer, LightningGame, LightningKind, LightningPayload, LightningPhase,
    LightningQuestion, COUNTDOWN_SECONDS, DEFAULT_QUESTION_COUNT, FEEDBACK_MS, TIME_LIMIT_MS,
};
use crate::catalog::{ElementCatalog, ElementFamily, ElementRecord};
use crate::progress::{GameType, ProgressSink, SessionSummary};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Generate up to `count` questions. Draws are independent (elements may
/// repeat across the deck); a bounded attempt counter guards catalogs
/// that keep declining (e.g. all group-less elements drawing group
/// questions).
pub fn generate_questions<R: Rng>(
    catalog: &ElementCatalog,
    count: usize,
    rng: &mut R,
) -> Vec<LightningQuestion> {
    let mut questions = Vec::with_capacity(count);
    let max_attempts = count.saturating_mul(20).max(64);
    let mut attempts = 0;
    while questions.len() < count && attempts < max_attempts {
        attempts += 1;
        let element = match catalog.random(rng) {
            Some(e) => e,
            None => break,
        };
        let kind = match LightningKind::ALL.choose(rng) {
            Some(k) => *k,
            None => break,
        };
        if let Some(q) = build_question(element, kind, catalog, rng) {
            questions.push(q);
        }
    }
    questions.shuffle(rng);
    questions
}

/// Build one question, or `None` when the element cannot carry the kind
/// (group claims need a group).
pub fn build_question<R: Rng>(
    element: &ElementRecord,
    kind: LightningKind,
    catalog: &ElementCatalog,
    rng: &mut R,
) -> Option<LightningQuestion> {
    let payload = match kind {
        LightningKind::SymbolTrueFalse => {
            let wrong = other_symbol(catalog, element, rng);
            let (shown, truth) = claim_value(element.symbol.clone(), wrong, rng);
            LightningPayload::TrueFalse {
                statement: format!("{} has the symbol {}", element.name, shown),
                truth,
            }
        }
        LightningKind::IsMetal => LightningPayload::TrueFalse {
            statement: format!("{} is a metal", element.name),
            truth: element.is_metal(),
        },
        LightningKind::IsGas => LightningPayload::TrueFalse {
            statement: format!("{} is a gas at room temperature", element.name),
            truth: element.is_gas(),
        },
        LightningKind::GroupTrueFalse => {
            let group = element.group?;
            let wrong = pick_other_number(1..=18, group, rng);
            let (shown, truth) = claim_value(group, wrong, rng);
            LightningPayload::TrueFalse {
                statement: format!("{} is in group {}", element.name, shown),
                truth,
            }
        }
        LightningKind::PeriodTrueFalse => {
            let wrong = pick_other_number(1..=7, element.period, rng);
            let (shown, truth) = claim_value(element.period, wrong, rng);
            LightningPayload::TrueFalse {
                statement: format!("{} is in period {}", element.name, shown),
                truth,
            }
        }
        LightningKind::FamilyTrueFalse => {
            let wrong = ElementFamily::ALL
                .iter()
                .filter(|f| **f != element.family)
                .map(|f| f.name().to_string())
                .collect::<Vec<_>>()
                .choose(rng)
                .cloned();
            let correct = element.family.name().to_string();
            let (shown, truth) = claim_value(correct, wrong, rng);
            LightningPayload::TrueFalse {
                statement: format!("{} belongs to the {} family", element.name, shown),
                truth,
            }
        }
        LightningKind::SymbolMultipleChoice => {
            let mut options: Vec<String> = catalog
                .all()
                .iter()
                .filter(|e| e.atomic_number != element.atomic_number)
                .map(|e| e.symbol.clone())
                .collect::<Vec<_>>()
                .choose_multiple(rng, 2)
                .cloned()
                .collect();
            options.push(element.symbol.clone());
            options.shuffle(rng);
            LightningPayload::MultipleChoice {
                prompt: format!("Which is the symbol for {}?", element.name),
                options,
                answer: element.symbol.clone(),
            }
        }
    };

    Some(LightningQuestion {
        id: Uuid::new_v4(),
        kind,
        atomic_number: element.atomic_number,
        payload,
    })
}

/// Coin-flip a claim: half the time show the true value, half the time a
/// substituted wrong one. Falls back to a true claim when no distinct
/// wrong value exists.
fn claim_value<T: ToString, R: Rng>(correct: T, wrong: Option<T>, rng: &mut R) -> (String, bool) {
    match wrong {
        Some(w) if rng.gen_bool(0.5) => (w.to_string(), false),
        _ => (correct.to_string(), true),
    }
}

fn other_symbol<R: Rng>(
    catalog: &ElementCatalog,
    element: &ElementRecord,
    rng: &mut R,
) -> Option<String> {
    catalog
        .all()
        .iter()
        .filter(|e| e.symbol != element.symbol)
        .map(|e| e.symbol.clone())
        .collect::<Vec<_>>()
        .choose(rng)
        .cloned()
}

fn pick_other_number<R: Rng>(
    range: std::ops::RangeInclusive<u8>,
    correct: u8,
    rng: &mut R,
) -> Option<u8> {
    range
        .filter(|n| *n != correct)
        .collect::<Vec<_>>()
        .choose(rng)
        .copied()
}

/// Start the session: generate the deck and begin the countdown.
pub fn start<R: Rng>(game: &mut LightningGame, catalog: &ElementCatalog, rng: &mut R) -> bool {
    if game.phase != LightningPhase::Setup {
        return false;
    }
    let questions = generate_questions(catalog, DEFAULT_QUESTION_COUNT, rng);
    if questions.is_empty() {
        return false;
    }
    game.questions = questions;
    game.cursor = 0;
    game.counters = crate::games::Counters::new();
    game.remaining_ms = TIME_LIMIT_MS;
    game.elapsed_ms = 0;
    game.countdown_carry_ms = 0;
    game.phase = LightningPhase::Countdown(COUNTDOWN_SECONDS);
    true
}

/// Advance the session by one timer event. Drives the countdown, the
/// game clock, and the feedback flash; flushes the summary on the
/// transition into Completed. Ticks after completion are no-ops.
pub fn tick<S: ProgressSink>(game: &mut LightningGame, delta_ms: u64, sink: &mut S) {
    match game.phase.clone() {
        LightningPhase::Setup | LightningPhase::Completed => {}
        LightningPhase::Countdown(mut seconds) => {
            game.countdown_carry_ms += delta_ms;
            while game.countdown_carry_ms >= 1_000 && seconds > 0 {
                game.countdown_carry_ms -= 1_000;
                seconds -= 1;
            }
            if seconds == 0 {
                game.phase = LightningPhase::Playing;
                // A tick that overshoots the countdown spends its excess
                // on the game clock
                let leftover = game.countdown_carry_ms;
                game.countdown_carry_ms = 0;
                if leftover > 0 {
                    advance_clock(game, leftover);
                    if game.remaining_ms == 0 {
                        complete(game, sink);
                    }
                }
            } else {
                game.phase = LightningPhase::Countdown(seconds);
            }
        }
        LightningPhase::Playing => {
            advance_clock(game, delta_ms);
            if game.remaining_ms == 0 {
                complete(game, sink);
            }
        }
        LightningPhase::Feedback {
            correct,
            remaining_ms,
        } => {
            advance_clock(game, delta_ms);
            if game.remaining_ms == 0 {
                complete(game, sink);
            } else if remaining_ms > delta_ms {
                game.phase = LightningPhase::Feedback {
                    correct,
                    remaining_ms: remaining_ms - delta_ms,
                };
            } else {
                game.cursor += 1;
                if game.cursor >= game.questions.len() {
                    complete(game, sink);
                } else {
                    game.phase = LightningPhase::Playing;
                }
            }
        }
    }
}

fn advance_clock(game: &mut LightningGame, delta_ms: u64) {
    game.elapsed_ms += delta_ms.min(game.remaining_ms);
    game.remaining_ms = game.remaining_ms.saturating_sub(delta_ms);
}

/// Answer the current question. Awards streak-scaled points, reports the
/// answer to the sink, and enters the feedback flash.
pub fn submit<S: ProgressSink>(
    game: &mut LightningGame,
    answer: LightningAnswer,
    sink: &mut S,
) -> bool {
    if game.phase != LightningPhase::Playing {
        return false;
    }
    let question = match game.questions.get(game.cursor) {
        Some(q) => q,
        None => return false,
    };
    let correct = question.is_correct(&answer);
    let atomic_number = question.atomic_number;
    let base_points = question.base_points();
    game.counters.record(correct, base_points);
    sink.record_answer(atomic_number, correct);
    game.phase = LightningPhase::Feedback {
        correct,
        remaining_ms: FEEDBACK_MS,
    };
    true
}

/// Tear down mid-session, reporting partial progress.
pub fn abandon<S: ProgressSink>(game: &mut LightningGame, sink: &mut S) -> Option<SessionSummary> {
    match game.phase {
        LightningPhase::Completed => None,
        LightningPhase::Setup => {
            game.phase = LightningPhase::Completed;
            None
        }
        _ => {
            let summary = build_summary(game, false);
            sink.record_session(&summary);
            game.phase = LightningPhase::Completed;
            Some(summary)
        }
    }
}

fn complete<S: ProgressSink>(game: &mut LightningGame, sink: &mut S) {
    let summary = build_summary(game, true);
    sink.record_session(&summary);
    game.phase = LightningPhase::Completed;
}

fn build_summary(game: &LightningGame, completed: bool) -> SessionSummary {
    SessionSummary::from_counts(
        GameType::Lightning,
        game.elapsed_ms,
        game.counters.correct,
        game.counters.answered(),
        game.counters.score,
        game.counters.best_streak,
        completed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryProgress;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn playing_game() -> LightningGame {
        let catalog = ElementCatalog::builtin();
        let mut rng = seeded_rng();
        let mut game = LightningGame::new();
        assert!(start(&mut game, &catalog, &mut rng));
        let mut sink = MemoryProgress::new();
        // Burn through the 3-second countdown
        tick(&mut game, 3_000, &mut sink);
        assert_eq!(game.phase, LightningPhase::Playing);
        game
    }

    #[test]
    fn test_generate_full_deck() {
        let catalog = ElementCatalog::builtin();
        let mut rng = seeded_rng();
        let questions = generate_questions(&catalog, 100, &mut rng);
        assert_eq!(questions.len(), 100);
    }

    #[test]
    fn test_generate_multiple_choice_shape() {
        let catalog = ElementCatalog::builtin();
        let mut rng = seeded_rng();
        for q in generate_questions(&catalog, 200, &mut rng) {
            if let LightningPayload::MultipleChoice {
                options, answer, ..
            } = &q.payload
            {
                assert_eq!(options.len(), 3);
                assert_eq!(options.iter().filter(|o| *o == answer).count(), 1);
                let mut sorted = options.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), 3);
            }
        }
    }

    #[test]
    fn test_generate_group_claims_only_for_grouped_elements() {
        let catalog = ElementCatalog::builtin();
        let mut rng = seeded_rng();
        for q in generate_questions(&catalog, 200, &mut rng) {
            if q.kind == LightningKind::GroupTrueFalse {
                let element = catalog.by_number(q.atomic_number).unwrap();
                assert!(element.group.is_some());
            }
        }
    }

    #[test]
    fn test_false_claims_use_substituted_values() {
        let catalog = ElementCatalog::builtin();
        let mut rng = seeded_rng();
        for q in generate_questions(&catalog, 300, &mut rng) {
            if q.kind == LightningKind::SymbolTrueFalse {
                let element = catalog.by_number(q.atomic_number).unwrap();
                if let LightningPayload::TrueFalse { statement, truth } = &q.payload {
                    let shows_true_symbol =
                        statement.ends_with(&format!("symbol {}", element.symbol));
                    assert_eq!(*truth, shows_true_symbol);
                }
            }
        }
    }

    #[test]
    fn test_single_element_catalog_claims_are_true() {
        let builtin = ElementCatalog::builtin();
        let one = ElementCatalog::new(vec![builtin.by_number(26).unwrap().clone()]);
        let iron = one.by_number(26).unwrap();
        let mut rng = seeded_rng();
        // No distinct wrong symbol exists, so the claim falls back to true
        for _ in 0..20 {
            let q = build_question(iron, LightningKind::SymbolTrueFalse, &one, &mut rng).unwrap();
            if let LightningPayload::TrueFalse { truth, .. } = q.payload {
                assert!(truth);
            }
        }
    }

    #[test]
    fn test_countdown_reaches_playing() {
        let catalog = ElementCatalog::builtin();
        let mut rng = seeded_rng();
        let mut sink = MemoryProgress::new();
        let mut game = LightningGame::new();
        start(&mut game, &catalog, &mut rng);
        assert_eq!(game.phase, LightningPhase::Countdown(3));

        tick(&mut game, 1_000, &mut sink);
        assert_eq!(game.phase, LightningPhase::Countdown(2));
        tick(&mut game, 500, &mut sink);
        assert_eq!(game.phase, LightningPhase::Countdown(2));
        tick(&mut game, 500, &mut sink);
        assert_eq!(game.phase, LightningPhase::Countdown(1));
        tick(&mut game, 1_000, &mut sink);
        assert_eq!(game.phase, LightningPhase::Playing);
        // The countdown does not consume the 60-second budget
        assert_eq!(game.remaining_ms, TIME_LIMIT_MS);
    }

    #[test]
    fn test_countdown_overshoot_spills_onto_the_game_clock() {
        let catalog = ElementCatalog::builtin();
        let mut rng = seeded_rng();
        let mut sink = MemoryProgress::new();
        let mut game = LightningGame::new();
        start(&mut game, &catalog, &mut rng);

        // One coarse 3.5 s tick: the 3 s countdown finishes and the
        // remaining 500 ms comes off the game clock
        tick(&mut game, 3_500, &mut sink);
        assert_eq!(game.phase, LightningPhase::Playing);
        assert_eq!(game.remaining_ms, TIME_LIMIT_MS - 500);
        assert_eq!(game.elapsed_ms, 500);
        assert_eq!(game.countdown_carry_ms, 0);
    }

    #[test]
    fn test_submit_correct_answer_scores_and_enters_feedback() {
        let mut game = playing_game();
        let mut sink = MemoryProgress::new();
        let q = game.current_question().unwrap();
        let answer = correct_answer(q);
        let base = q.base_points();
        let atomic_number = q.atomic_number;

        assert!(submit(&mut game, answer, &mut sink));
        assert_eq!(game.counters.correct, 1);
        assert_eq!(game.counters.score, base);
        assert!(matches!(
            game.phase,
            LightningPhase::Feedback { correct: true, .. }
        ));
        assert_eq!(sink.tally(atomic_number).attempts, 1);
    }

    #[test]
    fn test_submit_during_feedback_rejected() {
        let mut game = playing_game();
        let mut sink = MemoryProgress::new();
        let answer = correct_answer(game.current_question().unwrap());
        submit(&mut game, answer, &mut sink);
        assert!(!submit(&mut game, LightningAnswer::Bool(true), &mut sink));
        assert_eq!(game.counters.answered(), 1);
    }

    #[test]
    fn test_feedback_advances_to_next_question() {
        let mut game = playing_game();
        let mut sink = MemoryProgress::new();
        let answer = correct_answer(game.current_question().unwrap());
        submit(&mut game, answer, &mut sink);

        tick(&mut game, FEEDBACK_MS, &mut sink);
        assert_eq!(game.phase, LightningPhase::Playing);
        assert_eq!(game.cursor, 1);
    }

    #[test]
    fn test_timer_expiry_completes_and_flushes() {
        let mut game = playing_game();
        let mut sink = MemoryProgress::new();
        tick(&mut game, TIME_LIMIT_MS, &mut sink);
        assert_eq!(game.phase, LightningPhase::Completed);
        assert_eq!(sink.sessions.len(), 1);
        let summary = &sink.sessions[0];
        assert_eq!(summary.game_type, GameType::Lightning);
        assert!(summary.completed);
        assert!((summary.duration_secs - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_clock_runs_during_feedback() {
        let mut game = playing_game();
        let mut sink = MemoryProgress::new();
        let answer = correct_answer(game.current_question().unwrap());
        submit(&mut game, answer, &mut sink);

        // Expire the whole budget while the feedback flash is up
        tick(&mut game, TIME_LIMIT_MS, &mut sink);
        assert_eq!(game.phase, LightningPhase::Completed);
    }

    #[test]
    fn test_ticks_after_completion_are_noops() {
        let mut game = playing_game();
        let mut sink = MemoryProgress::new();
        tick(&mut game, TIME_LIMIT_MS, &mut sink);
        assert_eq!(sink.sessions.len(), 1);

        tick(&mut game, 5_000, &mut sink);
        tick(&mut game, 5_000, &mut sink);
        assert_eq!(sink.sessions.len(), 1);
        assert_eq!(game.phase, LightningPhase::Completed);
    }

    #[test]
    fn test_abandon_flushes_partial_summary() {
        let mut game = playing_game();
        let mut sink = MemoryProgress::new();
        let answer = correct_answer(game.current_question().unwrap());
        submit(&mut game, answer, &mut sink);

        let summary = abandon(&mut game, &mut sink).unwrap();
        assert!(!summary.completed);
        assert_eq!(summary.total, 1);
        assert_eq!(game.phase, LightningPhase::Completed);
        // A second abandon reports nothing
        assert!(abandon(&mut game, &mut sink).is_none());
        assert_eq!(sink.sessions.len(), 1);
    }

    fn correct_answer(question: &LightningQuestion) -> LightningAnswer {
        match &question.payload {
            LightningPayload::TrueFalse { truth, .. } => LightningAnswer::Bool(*truth),
            LightningPayload::MultipleChoice {
                options, answer, ..
            } => LightningAnswer::Choice(options.iter().position(|o| o == answer).unwrap()),
        }
    }
}

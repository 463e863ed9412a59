//! Property-guess generation, scoring, and session flow.

use super::types::{
    AccuracyQuestion, AccuracyTier, PropertyGame, PropertyKind, PropertyPhase, Tolerances,
};
use crate::catalog::ElementCatalog;
use crate::progress::{GameType, ProgressSink, SessionSummary};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// A guess within 15% counts as correct for progress purposes.
const CORRECT_SCORE_FLOOR: u32 = 60;

/// Relative error of a guess. The denominator clamp guards division by
/// an exact zero; a truth that is merely tiny (hydrogen's density) keeps
/// its real magnitude, so wild guesses against it score badly.
pub fn percent_error(guess: f64, truth: f64) -> f64 {
    (guess - truth).abs() / truth.abs().max(1e-9)
}

/// Step function from percent error to points.
pub fn accuracy_score(error: f64, tolerances: Tolerances) -> u32 {
    if error <= tolerances.excellent {
        100
    } else if error <= tolerances.good {
        80
    } else if error <= tolerances.ok {
        60
    } else if error <= 0.50 {
        40
    } else if error <= 0.75 {
        20
    } else {
        10
    }
}

/// Qualitative band for a percent error.
pub fn accuracy_tier(error: f64, tolerances: Tolerances) -> AccuracyTier {
    if error <= tolerances.excellent {
        AccuracyTier::Excellent
    } else if error <= tolerances.good {
        AccuracyTier::Good
    } else if error <= tolerances.ok {
        AccuracyTier::Ok
    } else if error <= 0.50 {
        AccuracyTier::Fair
    } else {
        AccuracyTier::Poor
    }
}

/// Generate up to `count` prompts over distinct elements, each with a
/// random property kind. Ground truth is resolved here; elements missing
/// the chosen property fall back to the kind's range midpoint.
pub fn generate_questions<R: Rng>(
    catalog: &ElementCatalog,
    count: usize,
    rng: &mut R,
) -> Vec<AccuracyQuestion> {
    catalog
        .all()
        .choose_multiple(rng, count)
        .map(|element| {
            let kind = *PropertyKind::ALL.choose(rng).unwrap_or(&PropertyKind::AtomicMass);
            let true_value = kind.value_of(element).unwrap_or_else(|| kind.fallback());
            AccuracyQuestion {
                id: Uuid::new_v4(),
                atomic_number: element.atomic_number,
                element_name: element.name.clone(),
                kind,
                true_value,
                guess: None,
            }
        })
        .collect()
}

/// Start the session. Returns false when already started or when the
/// catalog yields no questions.
pub fn start<R: Rng>(
    game: &mut PropertyGame,
    catalog: &ElementCatalog,
    count: usize,
    rng: &mut R,
) -> bool {
    if game.phase != PropertyPhase::Setup {
        return false;
    }
    let questions = generate_questions(catalog, count, rng);
    if questions.is_empty() {
        return false;
    }
    game.questions = questions;
    game.cursor = 0;
    game.phase = PropertyPhase::Playing;
    true
}

/// Score the guess for the current question and move to `Reviewing`.
/// Every guess earns its accuracy-band points; the correctness signal
/// uses the ≥60 threshold separately. Out-of-range guesses are clamped
/// to the slider bounds before scoring.
pub fn submit_guess<S: ProgressSink>(
    game: &mut PropertyGame,
    guess: f64,
    sink: &mut S,
) -> Option<(u32, AccuracyTier)> {
    if game.phase != PropertyPhase::Playing {
        return None;
    }
    let (kind, true_value, atomic_number) = {
        let question = game.questions.get(game.cursor)?;
        if question.answered() {
            return None;
        }
        (question.kind, question.true_value, question.atomic_number)
    };

    let clamped = kind.clamp(guess);
    let error = percent_error(clamped, true_value);
    let score = accuracy_score(error, kind.tolerances());
    let tier = accuracy_tier(error, kind.tolerances());
    let correct = score >= CORRECT_SCORE_FLOOR;

    game.questions[game.cursor].guess = Some(clamped);
    game.counters.record_flat(correct, score);
    sink.record_answer(atomic_number, correct);
    game.phase = PropertyPhase::Reviewing { score, tier };
    Some((score, tier))
}

/// Leave the review screen: on to the next question, or finish the
/// session after the last one.
pub fn advance<S: ProgressSink>(game: &mut PropertyGame, sink: &mut S) -> Option<SessionSummary> {
    if !matches!(game.phase, PropertyPhase::Reviewing { .. }) {
        return None;
    }
    game.cursor += 1;
    if game.cursor >= game.questions.len() {
        let summary = build_summary(game, true);
        sink.record_session(&summary);
        game.phase = PropertyPhase::Completed;
        Some(summary)
    } else {
        game.phase = PropertyPhase::Playing;
        None
    }
}

/// Accumulate play time. The review screen counts as session time.
pub fn tick(game: &mut PropertyGame, delta_ms: u64) {
    match game.phase {
        PropertyPhase::Playing | PropertyPhase::Reviewing { .. } => {
            game.elapsed_ms += delta_ms;
        }
        _ => {}
    }
}

/// Tear down mid-session, flushing a partial summary.
pub fn abandon<S: ProgressSink>(game: &mut PropertyGame, sink: &mut S) -> Option<SessionSummary> {
    match game.phase {
        PropertyPhase::Completed => None,
        PropertyPhase::Setup => {
            game.phase = PropertyPhase::Completed;
            None
        }
        PropertyPhase::Playing | PropertyPhase::Reviewing { .. } => {
            let summary = build_summary(game, false);
            sink.record_session(&summary);
            game.phase = PropertyPhase::Completed;
            Some(summary)
        }
    }
}

fn build_summary(game: &PropertyGame, completed: bool) -> SessionSummary {
    SessionSummary::from_counts(
        GameType::PropertyGuess,
        game.elapsed_ms,
        game.counters.correct,
        game.counters.answered(),
        game.counters.score,
        game.counters.best_streak,
        completed,
    )
}

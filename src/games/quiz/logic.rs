//! Quiz question generation and session flow.
//!
//! Generation walks a shuffled copy of the catalog so each element is
//! used at most once per session. If the requested count exceeds the
//! usable pool, fewer questions are returned; callers get at most
//! `count`.

use super::types::{QuizDifficulty, QuizGame, QuizKind, QuizPhase, QuizQuestion};
use crate::catalog::{ElementCatalog, ElementFamily, ElementRecord, MatterState};
use crate::progress::{GameType, ProgressSink, SessionSummary};
use crate::scoring::{time_bonus, QUIZ_POINTS_PER_CORRECT};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Number of distractors alongside the correct answer (state questions
/// carry fewer: there are only three states of matter).
const DISTRACTOR_COUNT: usize = 3;

/// Generate up to `count` questions for the given difficulty.
pub fn generate_questions<R: Rng>(
    catalog: &ElementCatalog,
    count: usize,
    difficulty: QuizDifficulty,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let kinds = difficulty.allowed_kinds();
    let mut pool: Vec<&ElementRecord> = catalog.all().iter().collect();
    pool.shuffle(rng);

    let mut questions = Vec::new();
    for element in pool {
        if questions.len() >= count {
            break;
        }
        let kind = match kinds.choose(rng) {
            Some(k) => *k,
            None => break,
        };
        // A kind can decline an element (no group on lanthanides and
        // actinides); the element is consumed either way.
        if let Some(q) = build_question(element, kind, catalog, rng) {
            questions.push(q);
        }
    }

    questions.shuffle(rng);
    questions
}

/// Build a single question, or `None` when the element cannot carry the
/// requested kind.
pub fn build_question<R: Rng>(
    element: &ElementRecord,
    kind: QuizKind,
    catalog: &ElementCatalog,
    rng: &mut R,
) -> Option<QuizQuestion> {
    let (prompt, answer, distractors) = match kind {
        QuizKind::SymbolFromName => (
            format!("What is the symbol for {}?", element.name),
            element.symbol.clone(),
            element_distractors(catalog, element, rng, |e| e.symbol.clone()),
        ),
        QuizKind::NameFromSymbol => (
            format!("Which element has the symbol {}?", element.symbol),
            element.name.clone(),
            element_distractors(catalog, element, rng, |e| e.name.clone()),
        ),
        QuizKind::FamilyFromName => {
            let candidates: Vec<String> = ElementFamily::ALL
                .iter()
                .filter(|f| **f != element.family)
                .map(|f| f.name().to_string())
                .collect();
            (
                format!("Which family does {} belong to?", element.name),
                element.family.name().to_string(),
                pick_values(candidates, DISTRACTOR_COUNT, rng),
            )
        }
        QuizKind::StateFromName => {
            let candidates: Vec<String> = MatterState::ALL
                .iter()
                .filter(|s| **s != element.state)
                .map(|s| s.name().to_string())
                .collect();
            (
                format!("What is the state of {} at room temperature?", element.name),
                element.state.name().to_string(),
                pick_values(candidates, DISTRACTOR_COUNT, rng),
            )
        }
        QuizKind::PeriodFromName => {
            let candidates: Vec<String> = (1u8..=7)
                .filter(|p| *p != element.period)
                .map(|p| p.to_string())
                .collect();
            (
                format!("Which period is {} in?", element.name),
                element.period.to_string(),
                pick_values(candidates, DISTRACTOR_COUNT, rng),
            )
        }
        QuizKind::GroupFromName => {
            let group = element.group?;
            let candidates: Vec<String> = (1u8..=18)
                .filter(|g| *g != group)
                .map(|g| g.to_string())
                .collect();
            (
                format!("Which group is {} in?", element.name),
                group.to_string(),
                pick_values(candidates, DISTRACTOR_COUNT, rng),
            )
        }
        QuizKind::AtomicNumberFromName => (
            format!("What is the atomic number of {}?", element.name),
            element.atomic_number.to_string(),
            element_distractors(catalog, element, rng, |e| e.atomic_number.to_string()),
        ),
        QuizKind::NameFromAtomicNumber => (
            format!("Which element has atomic number {}?", element.atomic_number),
            element.name.clone(),
            element_distractors(catalog, element, rng, |e| e.name.clone()),
        ),
    };

    let mut options = distractors;
    options.push(answer.clone());
    options.shuffle(rng);

    Some(QuizQuestion {
        id: Uuid::new_v4(),
        kind,
        atomic_number: element.atomic_number,
        prompt,
        options,
        answer,
    })
}

/// Distractor values drawn from other catalog entries.
fn element_distractors<R, F>(
    catalog: &ElementCatalog,
    element: &ElementRecord,
    rng: &mut R,
    value: F,
) -> Vec<String>
where
    R: Rng,
    F: Fn(&ElementRecord) -> String,
{
    let candidates: Vec<String> = catalog
        .all()
        .iter()
        .filter(|e| e.atomic_number != element.atomic_number)
        .map(value)
        .collect();
    pick_values(candidates, DISTRACTOR_COUNT, rng)
}

/// Sample up to `amount` distinct values without replacement.
fn pick_values<R: Rng>(mut candidates: Vec<String>, amount: usize, rng: &mut R) -> Vec<String> {
    candidates.sort();
    candidates.dedup();
    candidates.choose_multiple(rng, amount).cloned().collect()
}

/// Start the session: generate content and move to Playing. Returns
/// false (and stays in Setup) when already started or when the catalog
/// yields no questions at all.
pub fn start<R: Rng>(
    game: &mut QuizGame,
    catalog: &ElementCatalog,
    count: usize,
    rng: &mut R,
) -> bool {
    if game.phase != QuizPhase::Setup {
        return false;
    }
    let questions = generate_questions(catalog, count, game.difficulty, rng);
    if questions.is_empty() {
        return false;
    }
    game.selections = vec![None; questions.len()];
    game.questions = questions;
    game.cursor = 0;
    game.correct = 0;
    game.incorrect = 0;
    game.elapsed_ms = 0;
    game.phase = QuizPhase::Playing;
    true
}

/// Record (or change) the answer for the current question. Changing an
/// earlier answer reverts its counter contribution before the new one is
/// applied, so the counters always reflect the latest selection only.
pub fn select_answer(game: &mut QuizGame, option_index: usize) -> bool {
    if game.phase != QuizPhase::Playing {
        return false;
    }
    let question = match game.questions.get(game.cursor) {
        Some(q) => q,
        None => return false,
    };
    if option_index >= question.options.len() {
        return false;
    }

    if let Some(prev) = game.selections[game.cursor] {
        if question.is_correct(prev) {
            game.correct -= 1;
        } else {
            game.incorrect -= 1;
        }
    }
    if question.is_correct(option_index) {
        game.correct += 1;
    } else {
        game.incorrect += 1;
    }
    game.selections[game.cursor] = Some(option_index);
    true
}

/// Advance to the next question. No-op at the end of the list.
pub fn next_question(game: &mut QuizGame) -> bool {
    if game.phase == QuizPhase::Playing && game.cursor + 1 < game.questions.len() {
        game.cursor += 1;
        true
    } else {
        false
    }
}

/// Step back to the previous question. No-op at the start.
pub fn previous_question(game: &mut QuizGame) -> bool {
    if game.phase == QuizPhase::Playing && game.cursor > 0 {
        game.cursor -= 1;
        true
    } else {
        false
    }
}

/// Accumulate play time. Only the Playing phase is timed.
pub fn tick(game: &mut QuizGame, delta_ms: u64) {
    if game.phase == QuizPhase::Playing {
        game.elapsed_ms += delta_ms;
    }
}

/// Finish the session: flush per-element answers and the summary to the
/// sink and move to Completed. `None` if the session is not in play.
pub fn finish<S: ProgressSink>(game: &mut QuizGame, sink: &mut S) -> Option<SessionSummary> {
    if game.phase != QuizPhase::Playing {
        return None;
    }
    Some(flush(game, sink, true))
}

/// Tear down mid-session, reporting partial progress. Already-completed
/// sessions are untouched.
pub fn abandon<S: ProgressSink>(game: &mut QuizGame, sink: &mut S) -> Option<SessionSummary> {
    match game.phase {
        QuizPhase::Completed => None,
        QuizPhase::Setup => {
            game.phase = QuizPhase::Completed;
            None
        }
        QuizPhase::Playing => Some(flush(game, sink, false)),
    }
}

fn flush<S: ProgressSink>(game: &mut QuizGame, sink: &mut S, completed: bool) -> SessionSummary {
    // Latest selection per question; unanswered questions carry no
    // correctness signal.
    for (question, selection) in game.questions.iter().zip(&game.selections) {
        if let Some(sel) = selection {
            sink.record_answer(question.atomic_number, question.is_correct(*sel));
        }
    }

    let answered = game.answered_count() as u32;
    let avg_response_secs = if answered > 0 {
        game.elapsed_ms as f64 / 1000.0 / answered as f64
    } else {
        0.0
    };
    // Time bonus only for sessions played to the end, and never for a
    // session that answered nothing
    let bonus = if completed && answered > 0 {
        time_bonus(avg_response_secs)
    } else {
        0
    };
    let summary = SessionSummary {
        game_type: GameType::Quiz,
        duration_secs: game.elapsed_ms as f64 / 1000.0,
        correct: game.correct,
        total: game.questions.len() as u32,
        score: game.correct * QUIZ_POINTS_PER_CORRECT + bonus,
        best_streak: best_streak(game),
        avg_response_secs,
        completed,
        finished_at: Utc::now(),
    };
    sink.record_session(&summary);
    game.phase = QuizPhase::Completed;
    summary
}

/// Longest run of correct answers over the final selections, in question
/// order. Unanswered questions break the run.
fn best_streak(game: &QuizGame) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    for (question, selection) in game.questions.iter().zip(&game.selections) {
        match selection {
            Some(sel) if question.is_correct(*sel) => {
                run += 1;
                best = best.max(run);
            }
            _ => run = 0,
        }
    }
    best
}

//! Bingo calling, marking, and win detection.

use super::types::{
    BingoCard, BingoError, BingoGame, BingoPhase, WinPattern, CARD_SIZE,
};
use crate::catalog::ElementCatalog;
use rand::seq::SliceRandom;
use rand::Rng;
use crate::progress::{GameType, ProgressSink, SessionSummary};
use std::collections::BTreeSet;

/// Every pattern currently satisfied by the card's marked state. Each
/// check is evaluated independently (no short-circuiting), so a single
/// mark that finishes several lines reports all of them. Pure: calling
/// it twice on an unchanged card gives the same set.
pub fn satisfied_patterns(card: &BingoCard) -> BTreeSet<WinPattern> {
    let mut patterns = BTreeSet::new();

    for row in 0..CARD_SIZE {
        if (0..CARD_SIZE).all(|col| card.cell(row, col).marked) {
            patterns.insert(WinPattern::Row(row as u8));
        }
    }
    for col in 0..CARD_SIZE {
        if (0..CARD_SIZE).all(|row| card.cell(row, col).marked) {
            patterns.insert(WinPattern::Column(col as u8));
        }
    }
    if (0..CARD_SIZE).all(|i| card.cell(i, i).marked) {
        patterns.insert(WinPattern::DiagonalMain);
    }
    if (0..CARD_SIZE).all(|i| card.cell(i, CARD_SIZE - 1 - i).marked) {
        patterns.insert(WinPattern::DiagonalAnti);
    }
    if card.cells.iter().all(|c| c.marked) {
        patterns.insert(WinPattern::FullCard);
    }

    patterns
}

/// Patterns satisfied now but not yet scored.
pub fn new_patterns(card: &BingoCard, achieved: &BTreeSet<WinPattern>) -> Vec<WinPattern> {
    satisfied_patterns(card)
        .into_iter()
        .filter(|p| !achieved.contains(p))
        .collect()
}

/// Start the session: deal a card and move to Playing. No-op when the
/// session is already under way.
pub fn start<R: Rng>(
    game: &mut BingoGame,
    catalog: &ElementCatalog,
    rng: &mut R,
) -> Result<(), BingoError> {
    if game.phase != BingoPhase::Setup {
        return Ok(());
    }
    let card = BingoCard::new(catalog, rng)?;
    game.card = Some(card);
    game.call_history.clear();
    game.achieved.clear();
    game.score = 0;
    game.elapsed_ms = 0;
    game.phase = BingoPhase::Playing;
    Ok(())
}

/// Announce the next element: a uniform draw from the catalog elements
/// not yet called. A call that misses the card still enters the call
/// history. Returns the called atomic number, or `None` when the catalog
/// is exhausted or the session is not in play.
pub fn call_next<R: Rng>(
    game: &mut BingoGame,
    catalog: &ElementCatalog,
    rng: &mut R,
) -> Option<u32> {
    if game.phase != BingoPhase::Playing {
        return None;
    }
    let card = game.card.as_mut()?;
    let candidates: Vec<u32> = catalog
        .all()
        .iter()
        .map(|e| e.atomic_number)
        .filter(|n| !game.call_history.contains(n))
        .collect();
    let number = *candidates.choose(rng)?;
    game.call_history.push(number);
    if let Some(index) = card.find(number) {
        card.cells[index].called = true;
    }
    Some(number)
}

/// Mark a called cell. Marks on uncalled or off-card elements (or
/// already-marked cells) have no effect. Returns the patterns this mark
/// newly completed; any non-empty result ends the game with `Won`.
pub fn mark(game: &mut BingoGame, atomic_number: u32) -> Vec<WinPattern> {
    if game.phase != BingoPhase::Playing {
        return Vec::new();
    }
    let card = match game.card.as_mut() {
        Some(c) => c,
        None => return Vec::new(),
    };
    let index = match card.find(atomic_number) {
        Some(i) => i,
        None => return Vec::new(),
    };
    if !card.cells[index].called || card.cells[index].marked {
        return Vec::new();
    }
    card.cells[index].marked = true;

    let won = new_patterns(card, &game.achieved);
    if !won.is_empty() {
        game.score += won.iter().map(|p| p.points()).sum::<u32>();
        game.achieved.extend(won.iter().copied());
        game.phase = BingoPhase::Won(won.clone());
    }
    won
}

/// Accumulate play time.
pub fn tick(game: &mut BingoGame, delta_ms: u64) {
    if game.phase == BingoPhase::Playing {
        game.elapsed_ms += delta_ms;
    }
}

/// Acknowledge the win: flush the summary and close the session.
pub fn finish<S: ProgressSink>(game: &mut BingoGame, sink: &mut S) -> Option<SessionSummary> {
    match game.phase {
        BingoPhase::Won(_) => {
            let summary = build_summary(game, true);
            sink.record_session(&summary);
            game.phase = BingoPhase::Completed;
            Some(summary)
        }
        _ => None,
    }
}

/// Tear down mid-session. A won-but-unacknowledged game still counts as
/// completed.
pub fn abandon<S: ProgressSink>(game: &mut BingoGame, sink: &mut S) -> Option<SessionSummary> {
    match game.phase {
        BingoPhase::Completed => None,
        BingoPhase::Setup => {
            game.phase = BingoPhase::Completed;
            None
        }
        BingoPhase::Won(_) => finish(game, sink),
        BingoPhase::Playing => {
            let summary = build_summary(game, false);
            sink.record_session(&summary);
            game.phase = BingoPhase::Completed;
            Some(summary)
        }
    }
}

fn build_summary(game: &BingoGame, completed: bool) -> SessionSummary {
    let marked = game
        .card
        .as_ref()
        .map(|c| c.marked_count() as u32)
        .unwrap_or(0);
    SessionSummary::from_counts(
        GameType::Bingo,
        game.elapsed_ms,
        marked,
        game.call_history.len() as u32,
        game.score,
        0,
        completed,
    )
}

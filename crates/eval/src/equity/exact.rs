// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact equity enumeration.
use log::debug;
use std::time::{Duration, Instant};

use super::{BOARD_SIZE, ExactEquity, HOLE_SIZE, Known, Setup, Tally};
use crate::{Card, Deck, EvalError, Rank, Suit, nck};

/// Computes the hero equity against one opponent enumerating every opponent
/// hand and every board completion.
///
/// The hero must have two cards and the board at most five. The number of
/// trials is `nck(n, 2) * nck(n - 2, 5 - board.len())` where `n` is the number
/// of cards left in the deck, preflop this is more than 2 billion trials.
pub fn exact_equity_vs_one(hero: &[Card], board: &[Card]) -> Result<ExactEquity, EvalError> {
    let Setup { known, deck } = Setup::new(hero, board, 1)?;
    log_start(&known, &deck);

    let now = Instant::now();
    let mut tally = Tally::default();
    deck.for_each(HOLE_SIZE, |hole| {
        enumerate_boards(&known, &deck, hole, &mut tally);
    });

    finish(&known, &deck, tally, now.elapsed())
}

/// Parallel version of [exact_equity_vs_one] that splits the opponent hands
/// across `num_tasks` tasks.
#[cfg(feature = "parallel")]
pub fn par_exact_equity_vs_one(
    hero: &[Card],
    board: &[Card],
    num_tasks: usize,
) -> Result<ExactEquity, EvalError> {
    use super::tally::Counter;

    let Setup { known, deck } = Setup::new(hero, board, 1)?;
    log_start(&known, &deck);

    // Create per task counters to avoid contention.
    let num_tasks = num_tasks.max(1);
    let task_counters = (0..num_tasks)
        .map(|_| Counter::default())
        .collect::<Vec<_>>();

    let now = Instant::now();
    deck.par_for_each(num_tasks, HOLE_SIZE, |task_id, hole| {
        let mut tally = Tally::default();
        enumerate_boards(&known, &deck, hole, &mut tally);
        task_counters[task_id].add(&tally);
    });

    let tally = task_counters.iter().map(Counter::tally).sum::<Tally>();
    finish(&known, &deck, tally, now.elapsed())
}

/// Evaluates every board completion against one opponent hand.
fn enumerate_boards(known: &Known, deck: &Deck, hole: &[Card], tally: &mut Tally) {
    // The opponent cards can't be on the board.
    let mut rest = deck.clone();
    for &card in hole {
        rest.remove(card);
    }

    let end = HOLE_SIZE + known.missing();
    let mut dealt = [Card::new(Rank::Ace, Suit::Spades); HOLE_SIZE + BOARD_SIZE];
    dealt[..HOLE_SIZE].copy_from_slice(hole);

    rest.for_each(known.missing(), |board| {
        dealt[HOLE_SIZE..end].copy_from_slice(board);
        tally.record(known.showdown(1, &dealt[..end]));
    });
}

/// The number of trials of an enumeration.
fn num_trials(known: &Known, deck: &Deck) -> u64 {
    let n = deck.count();
    nck(n, HOLE_SIZE) * nck(n - HOLE_SIZE, known.missing())
}

fn log_start(known: &Known, deck: &Deck) {
    debug!(
        "Enumerating {} opponent hands with {} boards each",
        nck(deck.count(), HOLE_SIZE),
        nck(deck.count() - HOLE_SIZE, known.missing())
    );
}

fn finish(
    known: &Known,
    deck: &Deck,
    tally: Tally,
    elapsed: Duration,
) -> Result<ExactEquity, EvalError> {
    debug_assert_eq!(tally.total(), num_trials(known, deck));

    let report = ExactEquity::new(tally, elapsed)?;
    debug!(
        "Enumerated {} trials in {:.3}s",
        report.total, report.seconds
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;

    fn exact(hero: &str, board: &str) -> ExactEquity {
        exact_equity_vs_one(&parse_cards(hero).unwrap(), &parse_cards(board).unwrap()).unwrap()
    }

    fn check_counts(report: &ExactEquity, known_cards: usize) {
        let n = Deck::SIZE - known_cards;
        let board = known_cards - HOLE_SIZE;
        assert_eq!(
            report.total,
            nck(n, 2) * nck(n - 2, BOARD_SIZE - board),
            "{report:?}"
        );
        assert_eq!(report.wins + report.losses + report.ties, report.total);
        assert_eq!(report.equity, report.wins as f64 / report.total as f64);
    }

    #[test]
    fn river_nuts() {
        // Royal flush on the river can't lose or tie.
        let report = exact("AH KH", "QH JH TH 2C 3D");
        check_counts(&report, 7);
        assert_eq!(report.total, 990);
        assert_eq!(report.wins, 990);
        assert_eq!(report.equity, 1.0);
    }

    #[test]
    fn river_board_plays() {
        let report = exact("2C 3D", "AS KS QS JS TS");
        check_counts(&report, 7);
        assert_eq!(report.ties, 990);
        assert_eq!(report.equity, 0.0);
        assert_eq!(report.split_equity(), 0.5);
    }

    #[test]
    fn turn_enumeration() {
        let report = exact("AH AC", "AS KD 9C 2H");
        check_counts(&report, 6);
        assert_eq!(report.total, 45_540);
        assert!(report.equity > 0.9, "{report:?}");
        assert!(report.losses > 0);
    }

    #[test]
    fn flop_enumeration() {
        let report = exact("AH AC", "AS KD 9C");
        check_counts(&report, 5);
        assert_eq!(report.total, 1_070_190);
        assert!(report.equity > 0.9, "{report:?}");
    }

    #[test]
    fn drawing_hand() {
        // Open ended straight flush draw against a random hand on the turn.
        let report = exact("8H 9H", "TH JH 2C 2D");
        check_counts(&report, 6);
        assert!(report.equity > 0.3 && report.equity < 0.8, "{report:?}");
    }

    // This takes a long time to run, it goes through more than 2 billion trials,
    // run it with `cargo test --release -p equilab-eval -- --ignored pocket_aces`.
    #[test]
    #[ignore]
    fn pocket_aces_preflop() {
        let report = exact("AH AC", "");
        check_counts(&report, 2);
        assert_eq!(report.total, 2_097_572_400);
        assert!(report.equity > 0.80, "{report:?}");
    }

    #[test]
    fn invalid_requests() {
        let cards = parse_cards("AH AC KD 2C 3C 4C 5C 6C").unwrap();

        assert_eq!(
            exact_equity_vs_one(&cards[..3], &[]),
            Err(EvalError::HeroSize(3))
        );
        assert_eq!(
            exact_equity_vs_one(&cards[..2], &cards[2..]),
            Err(EvalError::BoardSize(6))
        );
        assert_eq!(
            exact_equity_vs_one(&cards[..2], &cards[..1]),
            Err(EvalError::DuplicateCard(cards[0]))
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let hero = parse_cards("AH AC").unwrap();
        let board = parse_cards("AS KD 9C 2H").unwrap();

        let seq = exact_equity_vs_one(&hero, &board).unwrap();
        let par = par_exact_equity_vs_one(&hero, &board, 4).unwrap();
        assert_eq!(
            (seq.wins, seq.ties, seq.losses),
            (par.wins, par.ties, par.losses)
        );
    }
}

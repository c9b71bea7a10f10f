// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity calculation.
//!
//! Equity is computed by completing the hand with opponent hole cards and the
//! missing board cards, evaluating the hero hand against the opponents hands,
//! and counting wins, ties, and losses. [exact_equity_vs_one] enumerates all
//! the completions against one opponent, [monte_carlo_equity] samples random
//! completions against one or more opponents.
//!
//! With more than one opponent the hero wins when its hand is stronger than
//! every opponent hand, ties when the strongest opponent hand is as strong as
//! the hero hand, and loses otherwise.
//!
//! The **`parallel`** feature adds [par_exact_equity_vs_one] and
//! [par_monte_carlo_equity] that split the work across tasks, each task
//! counting outcomes on its own counters.
use std::cmp::Ordering;

use crate::{Card, Deck, EvalError, HandValue, Rank, Suit};

mod exact;
mod monte_carlo;
mod tally;

#[cfg(feature = "parallel")]
pub use exact::par_exact_equity_vs_one;
pub use exact::exact_equity_vs_one;
#[cfg(feature = "parallel")]
pub use monte_carlo::par_monte_carlo_equity;
pub use monte_carlo::{DEFAULT_TRIALS, monte_carlo_equity, monte_carlo_equity_with_rng};
pub use tally::{ExactEquity, Fractions, MonteCarloEquity, Tally};

/// The number of cards in a complete board.
pub const BOARD_SIZE: usize = 5;

/// The number of hole cards for each player.
pub const HOLE_SIZE: usize = 2;

/// Equity simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// The number of opponents.
    pub num_opponents: usize,
    /// The number of Monte Carlo trials.
    pub trials: usize,
    /// The number of parallel tasks, only used with the `parallel` feature.
    pub num_tasks: usize,
    /// Seed for a reproducible simulation, a seeded simulation runs on a
    /// single task.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_opponents: 1,
            trials: DEFAULT_TRIALS,
            num_tasks: 1,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Runs a Monte Carlo simulation with this configuration.
    pub fn monte_carlo(&self, hero: &[Card], board: &[Card]) -> Result<MonteCarloEquity, EvalError> {
        use rand::{SeedableRng, rngs::StdRng};

        if let Some(seed) = self.seed {
            let mut rng = StdRng::seed_from_u64(seed);
            return monte_carlo_equity_with_rng(
                &mut rng,
                hero,
                board,
                self.num_opponents,
                self.trials,
            );
        }

        #[cfg(feature = "parallel")]
        if self.num_tasks > 1 {
            return par_monte_carlo_equity(
                hero,
                board,
                self.num_opponents,
                self.trials,
                self.num_tasks,
            );
        }

        monte_carlo_equity(hero, board, self.num_opponents, self.trials)
    }

    /// Runs an exact enumeration against one opponent.
    pub fn exact(&self, hero: &[Card], board: &[Card]) -> Result<ExactEquity, EvalError> {
        #[cfg(feature = "parallel")]
        if self.num_tasks > 1 {
            return par_exact_equity_vs_one(hero, board, self.num_tasks);
        }

        exact_equity_vs_one(hero, board)
    }
}

/// A validated equity request: the known cards and the deck left to deal from.
#[derive(Debug)]
struct Setup {
    known: Known,
    deck: Deck,
}

impl Setup {
    /// Validates the request and removes the known cards from the deck.
    fn new(hero: &[Card], board: &[Card], num_opponents: usize) -> Result<Self, EvalError> {
        let hero: [Card; HOLE_SIZE] = hero
            .try_into()
            .map_err(|_| EvalError::HeroSize(hero.len()))?;

        if board.len() > BOARD_SIZE {
            return Err(EvalError::BoardSize(board.len()));
        }

        if num_opponents == 0 {
            return Err(EvalError::NoOpponents);
        }

        let mut seen = 0u64;
        for card in hero.iter().chain(board) {
            let bit = 1u64 << card.id();
            if seen & bit != 0 {
                return Err(EvalError::DuplicateCard(*card));
            }
            seen |= bit;
        }

        let mut used = hero.to_vec();
        used.extend_from_slice(board);
        let deck = Deck::without(&used);

        let needed = HOLE_SIZE * num_opponents + missing(board);
        if needed > deck.count() {
            return Err(EvalError::NotEnoughCards {
                needed,
                available: deck.count(),
            });
        }

        Ok(Self {
            known: Known {
                hero,
                board: board.to_vec(),
            },
            deck,
        })
    }
}

/// The hero hole cards and the board cards dealt so far.
#[derive(Debug)]
struct Known {
    hero: [Card; HOLE_SIZE],
    board: Vec<Card>,
}

impl Known {
    /// The number of board cards to deal.
    fn missing(&self) -> usize {
        missing(&self.board)
    }

    /// Compares the hero hand with the best opponent hand.
    ///
    /// The dealt cards hold the opponents hole cards followed by the missing
    /// board cards.
    fn showdown(&self, num_opponents: usize, dealt: &[Card]) -> Ordering {
        debug_assert_eq!(dealt.len(), HOLE_SIZE * num_opponents + self.missing());

        let (holes, rest) = dealt.split_at(HOLE_SIZE * num_opponents);

        let mut hand = [Card::new(Rank::Ace, Suit::Spades); HOLE_SIZE + BOARD_SIZE];
        let board_end = HOLE_SIZE + self.board.len();
        hand[HOLE_SIZE..board_end].copy_from_slice(&self.board);
        hand[board_end..].copy_from_slice(rest);

        hand[..HOLE_SIZE].copy_from_slice(&self.hero);
        let hero = HandValue::eval(&hand);

        let best = holes
            .chunks_exact(HOLE_SIZE)
            .map(|hole| {
                hand[..HOLE_SIZE].copy_from_slice(hole);
                HandValue::eval(&hand)
            })
            .max();

        match best {
            Some(best) => hero.cmp(&best),
            None => Ordering::Greater,
        }
    }
}

fn missing(board: &[Card]) -> usize {
    BOARD_SIZE - board.len()
}

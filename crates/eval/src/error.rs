// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation and equity errors.
use thiserror::Error;

use crate::Card;

/// Errors for invalid evaluation or equity requests.
///
/// These are caller errors, the same inputs always produce the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand needs at least 5 cards.
    #[error("a hand needs at least 5 cards, got {0}")]
    TooFewCards(usize),
    /// The same card appears more than once.
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
    /// The hero must have two hole cards.
    #[error("hero needs exactly 2 cards, got {0}")]
    HeroSize(usize),
    /// The board has more than 5 cards.
    #[error("the board can have at most 5 cards, got {0}")]
    BoardSize(usize),
    /// Equity needs at least one opponent.
    #[error("at least one opponent is required")]
    NoOpponents,
    /// No trials to compute equity from.
    #[error("equity needs at least one trial")]
    NoTrials,
    /// The deck can't supply the cards needed by a trial.
    #[error("a trial needs {needed} cards but the deck has {available}")]
    NotEnoughCards {
        /// Cards needed by one trial.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

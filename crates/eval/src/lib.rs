// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equilab Poker hand evaluator and equity calculator.
//!
//! The evaluator ranks 5 or more cards returning the best five cards hand, use
//! [HandValue] to evaluate and compare hands:
//!
//! ```
//! # use equilab_eval::*;
//! let full_house = HandValue::eval(&parse_cards("AH AD AS KC KD").unwrap());
//! let flush = HandValue::eval(&parse_cards("AH KH 9H 6H 3H").unwrap());
//! assert_eq!(full_house.rank(), HandRank::FullHouse);
//! assert!(full_house > flush);
//! ```
//!
//! The [equity] module computes the hero equity exactly against one opponent or
//! with a Monte Carlo simulation against one or more opponents:
//!
//! ```
//! # use equilab_eval::*;
//! let hero = parse_cards("AH AC").unwrap();
//! let board = parse_cards("AS KD 9C 2H").unwrap();
//!
//! let exact = exact_equity_vs_one(&hero, &board).unwrap();
//! assert_eq!(exact.wins + exact.ties + exact.losses, exact.total);
//!
//! let sim = monte_carlo_equity(&hero, &board, 2, 1_000).unwrap();
//! assert_eq!(sim.trials(), 1_000);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub use equity::{
    ExactEquity, MonteCarloEquity, SimConfig, Tally, exact_equity_vs_one, monte_carlo_equity,
};

mod error;
pub use error::EvalError;

pub mod eval;
pub use eval::{HandRank, HandValue, evaluate_hand};

// Reexport cards types.
pub use equilab_cards::{Card, Deck, ParseCardError, Rank, Suit, nck, parse_cards};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator takes 5 or more cards and probes the hand categories from the
//! strongest (straight flush) to the weakest (high card), the first category
//! that matches gives the hand value together with the five cards that make
//! it, ordered main group first and kickers last.
//!
//! Cards are grouped in a fixed size table indexed by rank value, so the
//! evaluation doesn't allocate and its result doesn't depend on the cards
//! order.
//!
//! [HandValue] implements [Ord] comparing the category first and then the
//! rank values of the five cards, suits are ignored.
#[allow(clippy::module_inception)]
pub mod eval;
pub use eval::{HandRank, HandValue, evaluate_hand};

mod table;

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use super::table::{RankTable, highest_run, run_values, top_values};
use crate::{Card, EvalError, Rank, Suit};

/// A poker hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pair.
    HighCard = 0,
    /// A single pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Trips.
    ThreeOfAKind,
    /// Five consecutive values.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Trips and a pair.
    FullHouse,
    /// Quads.
    FourOfAKind,
    /// Five consecutive values of the same suit.
    StraightFlush,
}

impl HandRank {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category strength, 0 for high card up to 8 for a straight flush.
    pub fn strength(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Trips",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Quads",
            HandRank::StraightFlush => "Straight Flush",
        };

        f.write_str(name)
    }
}

/// The value of the best five cards hand out of a set of cards.
///
/// The five cards are ordered with the main group first, as the trips in a full
/// house, followed by the kickers, each group sorted by descending rank. The
/// wheel is the only exception: A-2-3-4-5 is ordered 5-4-3-2-A so that the
/// ace plays as the lowest card.
///
/// Two values compare by category first and then by the rank values of the
/// five cards, suits never take part in the comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    cards: [Card; 5],
}

/// A category probe returns the best five cards for the category if any.
type Probe = fn(&RankTable) -> Option<[Card; 5]>;

/// Probes from the strongest category to the weakest.
const PROBES: [(HandRank, Probe); HandRank::COUNT] = [
    (HandRank::StraightFlush, straight_flush),
    (HandRank::FourOfAKind, four_of_a_kind),
    (HandRank::FullHouse, full_house),
    (HandRank::Flush, flush),
    (HandRank::Straight, straight),
    (HandRank::ThreeOfAKind, three_of_a_kind),
    (HandRank::TwoPair, two_pair),
    (HandRank::OnePair, one_pair),
    (HandRank::HighCard, high_card),
];

impl HandValue {
    /// Evaluates a hand of 5 or more distinct cards.
    ///
    /// Panics if there are fewer than 5 cards or a card is repeated, use
    /// [evaluate_hand] to get an error instead.
    pub fn eval(cards: &[Card]) -> HandValue {
        evaluate_hand(cards).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The five cards that make this hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand rank signature, the rank values of the five cards.
    pub fn ranks(&self) -> [u8; 5] {
        self.cards.map(|c| c.value())
    }

    /// The category strength index.
    pub fn strength(&self) -> u8 {
        self.rank.strength()
    }

    /// Compares category first and rank signature second.
    pub fn compare(&self, other: &HandValue) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.ranks().cmp(&other.ranks()))
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.rank)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

/// Evaluates a hand of 5 or more cards returning the best five cards hand.
///
/// The result depends only on the set of cards, not on their order.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandValue, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::TooFewCards(cards.len()));
    }

    let table = RankTable::try_new(cards).map_err(EvalError::DuplicateCard)?;

    PROBES
        .iter()
        .find_map(|&(rank, probe)| probe(&table).map(|cards| HandValue { rank, cards }))
        .ok_or(EvalError::TooFewCards(cards.len()))
}

/// Takes the first five cards out of an iterator.
fn take5(mut cards: impl Iterator<Item = Card>) -> Option<[Card; 5]> {
    let mut out = [Card::new(Rank::Ace, Suit::Spades); 5];
    for slot in out.iter_mut() {
        *slot = cards.next()?;
    }

    Some(out)
}

/// The cards of a run in a suit, a run value of 1 is the ace.
fn suited_run(high: u8, suit: Suit) -> impl Iterator<Item = Card> {
    run_values(high)
        .filter_map(Rank::from_value)
        .map(move |r| Card::new(r, suit))
}

fn straight_flush(t: &RankTable) -> Option<[Card; 5]> {
    let (high, suit) = Suit::suits()
        .filter(|&s| t.suit_count(s) >= 5)
        .filter_map(|s| highest_run(t.suit_mask(s)).map(|high| (high, s)))
        .max_by_key(|&(high, _)| high)?;

    take5(suited_run(high, suit))
}

fn four_of_a_kind(t: &RankTable) -> Option<[Card; 5]> {
    let quads = t.values_with(4).next()?;
    take5(t.cards_of(quads).chain(t.kickers(&[quads]).take(1)))
}

fn full_house(t: &RankTable) -> Option<[Card; 5]> {
    let trips = t.values_with(3).next()?;
    let pair = t.values_with(2).find(|&v| v != trips)?;
    take5(t.cards_of(trips).take(3).chain(t.cards_of(pair).take(2)))
}

fn flush(t: &RankTable) -> Option<[Card; 5]> {
    let (values, suit) = Suit::suits()
        .filter(|&s| t.suit_count(s) >= 5)
        .filter_map(|s| top_values(t.suit_mask(s)).map(|values| (values, s)))
        .max_by_key(|&(values, _)| values)?;

    take5(
        values
            .into_iter()
            .filter_map(Rank::from_value)
            .map(|r| Card::new(r, suit)),
    )
}

fn straight(t: &RankTable) -> Option<[Card; 5]> {
    let high = highest_run(t.rank_mask())?;

    // One card for each value, the low ace is looked up as an ace.
    take5(run_values(high).filter_map(|v| t.cards_of(if v == 1 { 14 } else { v }).next()))
}

fn three_of_a_kind(t: &RankTable) -> Option<[Card; 5]> {
    let trips = t.values_with(3).next()?;
    take5(t.cards_of(trips).take(3).chain(t.kickers(&[trips]).take(2)))
}

fn two_pair(t: &RankTable) -> Option<[Card; 5]> {
    let mut pairs = t.values_with(2);
    let (high, low) = (pairs.next()?, pairs.next()?);

    take5(
        t.cards_of(high)
            .take(2)
            .chain(t.cards_of(low).take(2))
            .chain(t.kickers(&[high, low]).take(1)),
    )
}

fn one_pair(t: &RankTable) -> Option<[Card; 5]> {
    let pair = t.values_with(2).next()?;
    take5(t.cards_of(pair).take(2).chain(t.kickers(&[pair]).take(3)))
}

fn high_card(t: &RankTable) -> Option<[Card; 5]> {
    take5(t.kickers(&[]))
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards grouped by rank and by suit.
use crate::{Card, Rank, Suit};

/// Bit for the low ace in a rank mask.
const LOW_ACE: u16 = 1 << 1;

/// Bit for the high ace in a rank mask.
const HIGH_ACE: u16 = 1 << 14;

/// Cards grouped by rank value and by suit.
///
/// For each rank value 2..=14 the table keeps a bitmask of the suits present,
/// for each suit a bitmask of the rank values present (bit `v` is rank `v`).
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RankTable {
    suits_by_rank: [u8; 15],
    ranks_by_suit: [u16; Suit::COUNT],
}

impl RankTable {
    /// Builds the table for a set of cards.
    ///
    /// Returns the first card found twice if the cards are not distinct.
    pub fn try_new(cards: &[Card]) -> Result<Self, Card> {
        let mut table = Self::default();
        for &card in cards {
            let (value, suit) = (card.value() as usize, card.suit().index());
            if table.suits_by_rank[value] & (1 << suit) != 0 {
                return Err(card);
            }

            table.suits_by_rank[value] |= 1 << suit;
            table.ranks_by_suit[suit] |= 1 << value;
        }

        Ok(table)
    }

    /// Number of cards with the given rank value.
    #[inline]
    pub fn count(&self, value: u8) -> u32 {
        self.suits_by_rank[value as usize].count_ones()
    }

    /// Number of cards with the given suit.
    #[inline]
    pub fn suit_count(&self, suit: Suit) -> u32 {
        self.ranks_by_suit[suit.index()].count_ones()
    }

    /// Rank values present with any suit.
    #[inline]
    pub fn rank_mask(&self) -> u16 {
        self.ranks_by_suit.iter().fold(0, |acc, m| acc | m)
    }

    /// Rank values present for a suit.
    #[inline]
    pub fn suit_mask(&self, suit: Suit) -> u16 {
        self.ranks_by_suit[suit.index()]
    }

    /// Rank values from ace down to deuce that have at least `n` cards.
    pub fn values_with(&self, n: u32) -> impl Iterator<Item = u8> + '_ {
        (2..=14u8).rev().filter(move |&v| self.count(v) >= n)
    }

    /// The cards with the given rank value, in suit order.
    pub fn cards_of(&self, value: u8) -> impl Iterator<Item = Card> + '_ {
        let suits = self.suits_by_rank[value as usize];
        Suit::suits()
            .filter(move |s| suits & (1 << s.index()) != 0)
            .filter_map(move |s| Rank::from_value(value).map(|r| Card::new(r, s)))
    }

    /// All cards from the highest rank to the lowest skipping the excluded
    /// rank values.
    pub fn kickers<'a>(&'a self, excluded: &'a [u8]) -> impl Iterator<Item = Card> + 'a {
        (2..=14u8)
            .rev()
            .filter(move |v| !excluded.contains(v))
            .flat_map(move |v| self.cards_of(v))
    }
}

/// Returns the top card value of the highest 5 cards run in a rank mask.
///
/// The ace plays both high and low so a wheel (A-2-3-4-5) returns 5.
pub(crate) fn highest_run(mask: u16) -> Option<u8> {
    let mask = if mask & HIGH_ACE != 0 {
        mask | LOW_ACE
    } else {
        mask
    };

    (5..=14u8).rev().find(|&high| {
        let run: u16 = 0b11111 << (high - 4);
        mask & run == run
    })
}

/// The values of a run from its top card down, a low ace has value 1.
pub(crate) fn run_values(high: u8) -> impl Iterator<Item = u8> {
    (high - 4..=high).rev()
}

/// Picks the top 5 values out of a rank mask.
pub(crate) fn top_values(mask: u16) -> Option<[u8; 5]> {
    let mut out = [0u8; 5];
    let mut values = (2..=14u8).rev().filter(|&v| mask & (1 << v) != 0);
    for slot in out.iter_mut() {
        *slot = values.next()?;
    }

    Some(out)
}

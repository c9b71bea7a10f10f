// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[cfg(feature = "parallel")]
mod parallel;

/// A Poker card.
///
/// Cards are ordered by rank first and suit second, two cards are the same card
/// only if both rank and suit match.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// This card unique id in the range 0..52.
    pub fn id(&self) -> usize {
        self.suit.index() * 13 + (self.rank.value() as usize - 2)
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error returned when parsing a card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank character is not one of `23456789TJQKA`.
    #[error("invalid rank '{0}'")]
    InvalidRank(char),
    /// The suit character is not one of `CDHS`.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
    /// The token doesn't have exactly two characters.
    #[error("invalid card token '{0}', expected rank and suit as in 'AH'")]
    InvalidToken(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Card::new(Rank::try_from(r)?, Suit::try_from(s)?)),
            _ => Err(ParseCardError::InvalidToken(s.to_string())),
        }
    }
}

/// Parses a list of cards.
///
/// Cards can be separated by whitespace or commas or written back to back, so
/// "AH KD", "AH,KD", and "AhKd" all parse to the same two cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let chars = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<Vec<_>>();

    chars
        .chunks(2)
        .map(|token| match token {
            [r, s] => Ok(Card::new(Rank::try_from(*r)?, Suit::try_from(*s)?)),
            _ => Err(ParseCardError::InvalidToken(token.iter().collect())),
        })
        .collect()
}

/// Card rank.
///
/// The discriminant is the rank value used for comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, from 2 to 14.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank for a value in 2..=14, a value of 1 is the low ace.
    pub const fn from_value(value: u8) -> Option<Rank> {
        use Rank::*;
        let rank = match value {
            1 | 14 => Ace,
            2 => Deuce,
            3 => Trey,
            4 => Four,
            5 => Five,
            6 => Six,
            7 => Seven,
            8 => Eight,
            9 => Nine,
            10 => Ten,
            11 => Jack,
            12 => Queen,
            13 => King,
            _ => return None,
        };

        Some(rank)
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(c)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(c)),
        }
    }
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit index in 0..4.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the suit for an index in 0..4.
    pub const fn from_index(idx: usize) -> Option<Suit> {
        match idx {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u64; 8]; 53] {
    let mut t = [[0u64; 8]; 53];
    let mut n = 0;

    while n <= 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u64; 8]; 53] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> u64 {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");
    NCKS[n][k]
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// The largest combination size supported by [Deck::for_each].
    pub const MAX_K: usize = 7;

    /// Creates a deck with all the cards that are not in `used`.
    ///
    /// Cards are excluded by identity, removing the king of hearts leaves the
    /// other three kings in the deck.
    pub fn without(used: &[Card]) -> Self {
        let mut deck = Self::default();
        deck.cards.retain(|c| !used.contains(c));
        deck
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Shuffles the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Calls the `f` closure for each k-cards combination in the deck.
    ///
    /// Combinations are generated in lexicographic order of the deck positions,
    /// for k = 0 the closure is called once with an empty slice.
    ///
    /// Panics if k > 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(k <= Self::MAX_K, "k={k} must be 0 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; Self::MAX_K];
        for (i, p) in pos.iter_mut().enumerate().take(k) {
            *p = i;
        }

        let mut h = [Card::new(Rank::Ace, Suit::Hearts); Self::MAX_K];

        loop {
            for i in 0..k {
                h[i] = self.cards[pos[i]];
            }

            f(&h[0..k]);

            // Find the rightmost position that can move forward.
            let mut i = k;
            while i > 0 && pos[i - 1] == n - k + i - 1 {
                i -= 1;
            }

            if i == 0 {
                break;
            }

            pos[i - 1] += 1;
            for j in i..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }

    /// Calls the `f` closure `num_samples` times with k random cards.
    ///
    /// Each sample shuffles the deck and passes its first k cards, so the cards
    /// in one sample are distinct and come in random order.
    ///
    /// Panics if k is larger than the deck.
    pub fn sample<R, F>(&mut self, rng: &mut R, num_samples: usize, k: usize, mut f: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&[Card]),
    {
        assert!(
            k <= self.cards.len(),
            "k={k} larger than deck size {}",
            self.cards.len()
        );

        for _ in 0..num_samples {
            self.shuffle(rng);
            f(&self.cards[..k]);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn card_ids() {
        let ids = Deck::default()
            .into_iter()
            .map(|c| c.id())
            .collect::<HashSet<_>>();

        // Check uniquness.
        assert_eq!(ids.len(), Deck::SIZE);
        assert!(ids.iter().all(|&id| id < Deck::SIZE));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            assert_eq!(card.to_string().to_lowercase().parse::<Card>(), Ok(card));
        }

        assert_eq!("XH".parse::<Card>(), Err(ParseCardError::InvalidRank('X')));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));
        assert!(matches!(
            "10H".parse::<Card>(),
            Err(ParseCardError::InvalidToken(_))
        ));
        assert!(matches!(
            "A".parse::<Card>(),
            Err(ParseCardError::InvalidToken(_))
        ));
    }

    #[test]
    fn parse_card_lists() {
        let expected = vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
        ];

        assert_eq!(parse_cards("AH KD").unwrap(), expected);
        assert_eq!(parse_cards("AH,KD").unwrap(), expected);
        assert_eq!(parse_cards("AhKd").unwrap(), expected);
        assert_eq!(parse_cards("").unwrap(), vec![]);
        assert!(parse_cards("AhK").is_err());
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(Rank::value).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());

        for rank in Rank::ranks() {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }

        assert_eq!(Rank::from_value(1), Some(Rank::Ace));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn suit_indices() {
        for (idx, suit) in Suit::suits().enumerate() {
            assert_eq!(suit.index(), idx);
            assert_eq!(Suit::from_index(idx), Some(suit));
        }

        assert_eq!(Suit::from_index(Suit::COUNT), None);
    }

    #[test]
    fn test_nck() {
        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 47, 1081, 16215, 178365, 1533939, 10737573, 62891499]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(47, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));

        assert_eq!(nck(0, 0), 1);
        assert_eq!(nck(2, 3), 0);
    }

    #[test]
    fn deck_without() {
        let kh = Card::new(Rank::King, Suit::Hearts);
        let deck = Deck::without(&[kh]);
        assert_eq!(deck.count(), Deck::SIZE - 1);
        assert!(!deck.contains(kh));

        // Only the king of hearts is removed.
        let kings = deck.cards().iter().filter(|c| c.rank() == Rank::King);
        assert_eq!(kings.count(), 3);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            assert_ne!(cards[0], cards[1]);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_small_k() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(0, |cards| {
            assert!(cards.is_empty());
            count += 1;
        });
        assert_eq!(count, 1);

        count = 0;
        deck.for_each(1, |_| count += 1);
        assert_eq!(count, Deck::SIZE);

        // k larger than the deck.
        let mut deck = Deck::default();
        deck.cards.truncate(3);
        count = 0;
        deck.for_each(4, |_| count += 1);
        assert_eq!(count, 0);

        deck.for_each(3, |_| count += 1);
        assert_eq!(count, 1);
    }

    // This takes a while to run in debug mode as it goes through 100M hands.
    #[test]
    #[ignore]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 99_884_400);
    }

    #[test]
    fn deck_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::without(&[Card::new(Rank::Ace, Suit::Spades)]);

        let mut count = 0;
        deck.sample(&mut rng, 100, 9, |cards| {
            assert_eq!(cards.len(), 9);

            let unique = cards.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 9);
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Spades)));

            count += 1;
        });

        assert_eq!(count, 100);
        assert_eq!(deck.count(), Deck::SIZE - 1);
    }

    #[test]
    fn deck_shuffle() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::default();
        deck.shuffle(&mut rng);

        assert_eq!(deck.count(), Deck::SIZE);
        assert_ne!(deck.cards(), Deck::default().cards());

        let mut cards = deck.cards().to_vec();
        cards.sort();
        let mut sorted = Deck::default().cards().to_vec();
        sorted.sort();
        assert_eq!(cards, sorted);
    }
}

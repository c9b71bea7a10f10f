// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity reports formatting.
use equilab_eval::{Card, ExactEquity, HandValue, MonteCarloEquity};

/// Formats a list of cards, a dash for no cards.
pub fn cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }

    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats an evaluated hand.
pub fn hand(value: &HandValue) -> String {
    value.to_string()
}

/// Formats an exact enumeration result.
pub fn exact(hero: &[Card], board: &[Card], r: &ExactEquity) -> String {
    format!(
        "{} vs 1 opponent (exact), board {}\n\
         Equity:  {:.4}\n\
         Wins:    {}\n\
         Losses:  {}\n\
         Ties:    {}\n\
         Total:   {}\n\
         Time:    {:.2} seconds\n",
        cards(hero),
        cards(board),
        r.equity,
        r.wins,
        r.losses,
        r.ties,
        r.total,
        r.seconds
    )
}

/// Formats a Monte Carlo simulation result.
pub fn monte_carlo(
    hero: &[Card],
    board: &[Card],
    num_opponents: usize,
    r: &MonteCarloEquity,
) -> String {
    format!(
        "{} vs {num_opponents} opponent(s), board {}\n\
         Win:     {:.2}%\n\
         Tie:     {:.2}%\n\
         Loss:    {:.2}%\n\
         Trials:  {}\n\
         Time:    {:.2} seconds\n",
        cards(hero),
        cards(board),
        r.win * 100.0,
        r.tie * 100.0,
        r.loss * 100.0,
        r.trials(),
        r.seconds
    )
}

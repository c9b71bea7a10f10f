// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity estimation.
use log::debug;
use rand::Rng;
use std::time::Instant;

use super::{HOLE_SIZE, MonteCarloEquity, Setup, Tally};
use crate::{Card, EvalError};

/// Default number of trials, trades speed for accuracy.
pub const DEFAULT_TRIALS: usize = 7_500;

/// Estimates the hero equity against `num_opponents` random hands.
///
/// Each trial shuffles the deck left after removing the hero and board cards,
/// deals two cards to each opponent and then the missing board cards, and
/// compares the hero hand with the best opponent hand. Fails if the deck can't
/// supply the cards for a trial or if `trials` is zero.
pub fn monte_carlo_equity(
    hero: &[Card],
    board: &[Card],
    num_opponents: usize,
    trials: usize,
) -> Result<MonteCarloEquity, EvalError> {
    monte_carlo_equity_with_rng(&mut rand::rng(), hero, board, num_opponents, trials)
}

/// Same as [monte_carlo_equity] with a given random generator.
pub fn monte_carlo_equity_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    hero: &[Card],
    board: &[Card],
    num_opponents: usize,
    trials: usize,
) -> Result<MonteCarloEquity, EvalError> {
    let Setup { known, mut deck } = Setup::new(hero, board, num_opponents)?;
    if trials == 0 {
        return Err(EvalError::NoTrials);
    }

    let sample_size = HOLE_SIZE * num_opponents + known.missing();
    debug!("Sampling {trials} trials of {sample_size} cards against {num_opponents} opponents");

    let now = Instant::now();
    let mut tally = Tally::default();
    deck.sample(rng, trials, sample_size, |dealt| {
        tally.record(known.showdown(num_opponents, dealt));
    });

    let report = MonteCarloEquity::new(tally, now.elapsed())?;
    debug!("Sampled {} trials in {:.3}s", report.trials(), report.seconds);

    Ok(report)
}

/// Parallel version of [monte_carlo_equity] that splits the trials across
/// `num_tasks` tasks.
#[cfg(feature = "parallel")]
pub fn par_monte_carlo_equity(
    hero: &[Card],
    board: &[Card],
    num_opponents: usize,
    trials: usize,
    num_tasks: usize,
) -> Result<MonteCarloEquity, EvalError> {
    use super::tally::Counter;

    let Setup { known, deck } = Setup::new(hero, board, num_opponents)?;
    if trials == 0 {
        return Err(EvalError::NoTrials);
    }

    let sample_size = HOLE_SIZE * num_opponents + known.missing();
    debug!(
        "Sampling {trials} trials of {sample_size} cards against {num_opponents} opponents \
         with {num_tasks} tasks"
    );

    // Create per task counters to avoid contention.
    let num_tasks = num_tasks.max(1);
    let task_counters = (0..num_tasks)
        .map(|_| Counter::default())
        .collect::<Vec<_>>();

    let now = Instant::now();
    deck.par_sample(num_tasks, trials, sample_size, |task_id, dealt| {
        task_counters[task_id].record(known.showdown(num_opponents, dealt));
    });

    let tally = task_counters.iter().map(Counter::tally).sum::<Tally>();
    let report = MonteCarloEquity::new(tally, now.elapsed())?;
    debug!("Sampled {} trials in {:.3}s", report.trials(), report.seconds);

    Ok(report)
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outcome counters and equity reports.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, iter::Sum, ops::AddAssign, time::Duration};

use crate::EvalError;

/// Win, tie, and loss counters for the hero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Trials won by the hero.
    pub wins: u64,
    /// Trials tied by the hero.
    pub ties: u64,
    /// Trials lost by the hero.
    pub losses: u64,
}

impl Tally {
    /// Records the outcome of a trial, the result of comparing the hero hand
    /// with the best opponent hand.
    #[inline]
    pub fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }

    /// The number of trials recorded.
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Adds the counters of another tally.
    pub fn merge(&mut self, other: &Tally) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
    }

    /// The win, tie, and loss fractions.
    ///
    /// Fails if no trials have been recorded.
    pub fn fractions(&self) -> Result<Fractions, EvalError> {
        let total = self.total();
        if total == 0 {
            return Err(EvalError::NoTrials);
        }

        let total = total as f64;
        Ok(Fractions {
            win: self.wins as f64 / total,
            tie: self.ties as f64 / total,
            loss: self.losses as f64 / total,
        })
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Self {
        iter.fold(Tally::default(), |mut acc, t| {
            acc += t;
            acc
        })
    }
}

/// Win, tie, and loss fractions that sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fractions {
    /// Fraction of trials won.
    pub win: f64,
    /// Fraction of trials tied.
    pub tie: f64,
    /// Fraction of trials lost.
    pub loss: f64,
}

impl Fractions {
    /// Equity counting a tie as half a win.
    pub fn split_equity(&self) -> f64 {
        self.win + self.tie / 2.0
    }
}

/// Result of an exact enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExactEquity {
    /// Fraction of trials won.
    pub equity: f64,
    /// Trials won.
    pub wins: u64,
    /// Trials lost.
    pub losses: u64,
    /// Trials tied.
    pub ties: u64,
    /// Number of trials, opponent hands times board completions.
    pub total: u64,
    /// Enumeration wall time in seconds.
    pub seconds: f64,
}

impl ExactEquity {
    /// Creates the report from the enumeration counters.
    pub fn new(tally: Tally, elapsed: Duration) -> Result<Self, EvalError> {
        let fractions = tally.fractions()?;
        Ok(Self {
            equity: fractions.win,
            wins: tally.wins,
            losses: tally.losses,
            ties: tally.ties,
            total: tally.total(),
            seconds: elapsed.as_secs_f64(),
        })
    }

    /// Fraction of trials tied.
    pub fn tie(&self) -> f64 {
        self.ties as f64 / self.total as f64
    }

    /// Fraction of trials lost.
    pub fn loss(&self) -> f64 {
        self.losses as f64 / self.total as f64
    }

    /// Equity counting a tie as half a win.
    pub fn split_equity(&self) -> f64 {
        self.equity + self.tie() / 2.0
    }
}

/// Result of a Monte Carlo simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloEquity {
    /// Fraction of trials won.
    pub win: f64,
    /// Fraction of trials tied.
    pub tie: f64,
    /// Fraction of trials lost.
    pub loss: f64,
    /// The outcome counters.
    pub tally: Tally,
    /// Simulation wall time in seconds.
    pub seconds: f64,
}

impl MonteCarloEquity {
    /// Creates the report from the simulation counters.
    pub fn new(tally: Tally, elapsed: Duration) -> Result<Self, EvalError> {
        let Fractions { win, tie, loss } = tally.fractions()?;
        Ok(Self {
            win,
            tie,
            loss,
            tally,
            seconds: elapsed.as_secs_f64(),
        })
    }

    /// The number of trials.
    pub fn trials(&self) -> u64 {
        self.tally.total()
    }

    /// Equity counting a tie as half a win.
    pub fn split_equity(&self) -> f64 {
        self.win + self.tie / 2.0
    }
}

#[cfg(feature = "parallel")]
pub(crate) use counter::Counter;

#[cfg(feature = "parallel")]
mod counter {
    use std::{
        cmp::Ordering,
        sync::atomic::{self, AtomicU64},
    };

    use super::Tally;

    /// Per task counters shared with the task thread.
    #[derive(Default)]
    pub(crate) struct Counter {
        wins: AtomicU64,
        ties: AtomicU64,
        losses: AtomicU64,
    }

    impl Counter {
        pub fn record(&self, outcome: Ordering) {
            let counter = match outcome {
                Ordering::Greater => &self.wins,
                Ordering::Equal => &self.ties,
                Ordering::Less => &self.losses,
            };

            counter.fetch_add(1, atomic::Ordering::Relaxed);
        }

        pub fn add(&self, tally: &Tally) {
            self.wins.fetch_add(tally.wins, atomic::Ordering::Relaxed);
            self.ties.fetch_add(tally.ties, atomic::Ordering::Relaxed);
            self.losses.fetch_add(tally.losses, atomic::Ordering::Relaxed);
        }

        pub fn tally(&self) -> Tally {
            Tally {
                wins: self.wins.load(atomic::Ordering::Relaxed),
                ties: self.ties.load(atomic::Ordering::Relaxed),
                losses: self.losses.load(atomic::Ordering::Relaxed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_outcomes() {
        let mut tally = Tally::default();
        tally.record(Ordering::Greater);
        tally.record(Ordering::Greater);
        tally.record(Ordering::Equal);
        tally.record(Ordering::Less);

        assert_eq!(
            tally,
            Tally {
                wins: 2,
                ties: 1,
                losses: 1
            }
        );
        assert_eq!(tally.total(), 4);

        let f = tally.fractions().unwrap();
        assert_eq!(f.win, 0.5);
        assert_eq!(f.tie, 0.25);
        assert_eq!(f.loss, 0.25);
        assert_eq!(f.split_equity(), 0.625);
    }

    #[test]
    fn no_trials() {
        let tally = Tally::default();
        assert_eq!(tally.fractions(), Err(EvalError::NoTrials));
        assert_eq!(
            ExactEquity::new(tally, Duration::ZERO),
            Err(EvalError::NoTrials)
        );
        assert_eq!(
            MonteCarloEquity::new(tally, Duration::ZERO),
            Err(EvalError::NoTrials)
        );
    }

    #[test]
    fn merge_tallies() {
        let parts = [
            Tally {
                wins: 1,
                ties: 2,
                losses: 3,
            },
            Tally {
                wins: 10,
                ties: 20,
                losses: 30,
            },
        ];

        let total = parts.into_iter().sum::<Tally>();
        assert_eq!(total.wins, 11);
        assert_eq!(total.ties, 22);
        assert_eq!(total.losses, 33);
        assert_eq!(total.total(), 66);
    }

    #[test]
    fn exact_report() {
        let tally = Tally {
            wins: 6,
            ties: 2,
            losses: 2,
        };

        let report = ExactEquity::new(tally, Duration::from_millis(1500)).unwrap();
        assert_eq!(report.equity, 0.6);
        assert_eq!(report.total, 10);
        assert_eq!(report.wins + report.ties + report.losses, report.total);
        assert_eq!(report.seconds, 1.5);
        assert_eq!(report.tie(), 0.2);
        assert_eq!(report.loss(), 0.2);
        assert!((report.split_equity() - 0.7).abs() < 1e-12);
    }
}

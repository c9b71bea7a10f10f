// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use rand::prelude::*;
use std::thread;

use super::{Card, Deck, Rank, Suit, nck};

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
fn nth_ksubset(mut n: u64, k: usize) -> [usize; 7] {
    assert!(k <= 7);

    let mut out = [0; 7];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// Calls the given closure for count k-subsets starting from the nth ksubset.
fn for_each_ksubset<F>(n: usize, k: usize, nth: u64, count: u64, mut f: F)
where
    F: FnMut(&[usize]),
{
    if count == 0 {
        return;
    }

    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];

    let ks = nth_ksubset(nth, k);
    for i in 0..k {
        c[i + 1] = ks[i];
    }

    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Splits `total` items into `num_tasks` chunks whose sizes sum to `total`.
fn task_share(total: u64, num_tasks: usize, task_id: usize) -> u64 {
    let num_tasks = num_tasks as u64;
    let task_id = task_id as u64;
    total / num_tasks + u64::from(task_id < total % num_tasks)
}

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards combination.
    ///
    /// The clousure takes an usize that is the task identifier (0..num_task)
    /// and a slice of cards of length k, every combination is visited exactly
    /// once across all tasks.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let num_hands = nck(n, k);

        thread::scope(|s| {
            let mut start = 0;
            for task_id in 0..num_tasks {
                let count = task_share(num_hands, num_tasks, task_id);
                let nth = start;
                start += count;

                let f = &f;
                s.spawn(move || {
                    let mut h = vec![Card::new(Rank::Ace, Suit::Diamonds); k];
                    for_each_ksubset(n, k, nth, count, |p| {
                        for (idx, &pos) in p.iter().enumerate() {
                            h[idx] = self.cards[pos];
                        }

                        f(task_id, &h);
                    });
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `num_samples` samples of size k in total.
    ///
    /// Samples are split across tasks so that the tasks together produce
    /// exactly `num_samples` samples, each task draws from its own random
    /// generator.
    pub fn par_sample<F>(&self, num_tasks: usize, num_samples: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!(k <= self.cards.len(), "k={k} larger than deck");
        assert!(num_tasks > 0);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let samples = task_share(num_samples as u64, num_tasks, task_id);
                let f = &f;
                s.spawn(move || {
                    let mut cards = self.cards.clone();
                    let mut rng = SmallRng::from_os_rng();

                    for _ in 0..samples {
                        cards.shuffle(&mut rng);
                        f(task_id, &cards[..k]);
                    }
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_task_share() {
        let shares = (0..4).map(|t| task_share(10, 4, t)).collect::<Vec<_>>();
        assert_eq!(shares, vec![3, 3, 2, 2]);
        assert_eq!(shares.iter().sum::<u64>(), 10);

        let shares = (0..3).map(|t| task_share(2, 3, t)).collect::<Vec<_>>();
        assert_eq!(shares, vec![1, 1, 0]);
    }

    #[test]
    fn par_for_each_counts() {
        let deck = Deck::default();

        for k in [1, 2, 3] {
            let counter = AtomicU64::new(0);
            deck.par_for_each(3, k, |task_id, hand| {
                assert!(task_id < 3);
                assert_eq!(hand.len(), k);
                counter.fetch_add(1, Ordering::Relaxed);
            });

            assert_eq!(counter.load(Ordering::Relaxed), nck(Deck::SIZE, k));
        }
    }

    #[test]
    fn par_sample_counts() {
        let deck = Deck::without(&[Card::new(Rank::Ace, Suit::Hearts)]);
        let counter = AtomicU64::new(0);

        deck.par_sample(4, 1_001, 7, |_, hand| {
            assert_eq!(hand.len(), 7);
            assert!(!hand.contains(&Card::new(Rank::Ace, Suit::Hearts)));
            counter.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(counter.load(Ordering::Relaxed), 1_001);
    }

    // This takes a while to run in debug mode as it goes through 200M subsets.
    #[test]
    #[ignore]
    fn test_nth_ksubset() {
        let mut counter = 0;
        let count = nck(52, 7);
        for_each_ksubset(52, 7, 0, count, |s| {
            let ks = nth_ksubset(counter, 7);
            s.iter().zip(ks).for_each(|(&l, r)| assert_eq!(l, r));
            counter += 1;
        });

        assert_eq!(count, counter);

        // Start from half way.
        counter = 0;
        let nth = nck(52, 7) / 2;
        for_each_ksubset(52, 7, nth, nth, |s| {
            let ks = nth_ksubset(nth + counter, 7);
            s.iter().zip(ks).for_each(|(&l, r)| assert_eq!(l, r));
            counter += 1;
        });

        assert_eq!(nth, counter);
    }
}

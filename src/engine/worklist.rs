// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pending D-class representatives, bucketed by rank.
//!
//! Candidates are processed largest rank first. Within a rank, the regular
//! queue is drained before the non-regular queue, and each queue is taken
//! as a whole into a [`Batch`] whose candidates become D-classes one at a
//! time, last in first out.

use std::collections::BTreeMap;

/// A candidate representative, with the index of the D-class it covers from below.
pub type Candidate<E> = (E, usize);

/// Result of a single step of the engine.
///
/// Steps can return:
/// - `Continue`: one work item done, more may remain
/// - `Finished`: nothing left to do, every D-class is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Continue,
    Finished,
}

#[derive(Debug)]
pub struct RankQueues<E> {
    pub regular: Vec<Candidate<E>>,
    pub non_regular: Vec<Candidate<E>>,
}

impl<E> Default for RankQueues<E> {
    fn default() -> Self {
        Self {
            regular: Vec::new(),
            non_regular: Vec::new(),
        }
    }
}

impl<E> RankQueues<E> {
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.non_regular.is_empty()
    }
}

/// The candidates of one queue of one rank, taken for processing.
#[derive(Debug)]
pub struct Batch<E> {
    pub rank: usize,
    pub regular: bool,
    pub reps: Vec<Candidate<E>>,
}

#[derive(Debug)]
pub struct Worklist<E> {
    ranks: BTreeMap<usize, RankQueues<E>>,
}

impl<E> Default for Worklist<E> {
    fn default() -> Self {
        Self {
            ranks: BTreeMap::new(),
        }
    }
}

impl<E> Worklist<E> {
    pub fn push(&mut self, rank: usize, regular: bool, candidate: Candidate<E>) {
        let queues = self.ranks.entry(rank).or_default();
        if regular {
            queues.regular.push(candidate);
        } else {
            queues.non_regular.push(candidate);
        }
    }

    /// Take the next queue to process: the largest rank, regular before non-regular.
    pub fn take_batch(&mut self) -> Option<Batch<E>> {
        loop {
            let (&rank, queues) = self.ranks.iter_mut().next_back()?;
            if !queues.regular.is_empty() {
                return Some(Batch {
                    rank,
                    regular: true,
                    reps: std::mem::take(&mut queues.regular),
                });
            }
            if !queues.non_regular.is_empty() {
                return Some(Batch {
                    rank,
                    regular: false,
                    reps: std::mem::take(&mut queues.non_regular),
                });
            }
            self.ranks.remove(&rank);
        }
    }

    /// Forget `rank` once both of its queues are drained.
    pub fn finish_batch(&mut self, rank: usize) {
        if self.ranks.get(&rank).is_some_and(RankQueues::is_empty) {
            self.ranks.remove(&rank);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.values().all(RankQueues::is_empty)
    }

    /// Number of candidates waiting.
    pub fn len(&self) -> usize {
        self.ranks
            .values()
            .map(|q| q.regular.len() + q.non_regular.len())
            .sum()
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the engine
//! as D-classes are discovered and group-index lookups are made.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    RegularDClasses,
    NonRegularDClasses,
    /// Products of coset representatives and generators leaving their D-class.
    CoveringReps,
    /// Candidate representatives found to lie in an existing D-class.
    AbsorbedReps,
    GroupIndexHits,
    GroupIndexMisses,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, n: u64) {
        self.stats[counter as usize] += n;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter().map(|counter| (counter, self.get(counter)))
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (counter, value) in self.iter() {
            let name: &'static str = counter.into();
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = Statistics::new();
        stats.increment(Counters::CoveringReps);
        stats.add(Counters::CoveringReps, 4);
        stats.increment(Counters::GroupIndexHits);
        assert_eq!(stats.get(Counters::CoveringReps), 5);
        assert_eq!(stats.get(Counters::GroupIndexHits), 1);
        assert_eq!(stats.get(Counters::RegularDClasses), 0);
        assert_eq!(stats.iter().count(), Counters::COUNT);
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment(Counters::NonRegularDClasses);
        let text = stats.to_string();
        assert!(text.contains("non_regular_d_classes: 1"));
        assert!(text.contains("regular_d_classes: 0"));
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runtime configuration of the engine.
//!
//! The element kind is fixed at compile time by the type parameter of
//! [`Konieczny`](crate::engine::Konieczny); the settings here only tune how
//! a run proceeds, never its result.

/// Which coset representatives generate the covering representatives of a D-class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoveringSide {
    /// Use the side whose orbit is smaller.
    #[default]
    Auto,
    /// Right-multiply the left representatives by each generator.
    Left,
    /// Left-multiply the right representatives by each generator.
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KoniecznyConfig {
    pub covering_side: CoveringSide,
    /// Work items processed between checks of a deadline or stop predicate.
    pub check_interval: usize,
}

impl Default for KoniecznyConfig {
    fn default() -> Self {
        Self {
            covering_side: CoveringSide::Auto,
            check_interval: 1,
        }
    }
}

impl KoniecznyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_covering_side(mut self, side: CoveringSide) -> Self {
        self.covering_side = side;
        self
    }

    /// Values below 1 are treated as 1.
    pub fn with_check_interval(mut self, interval: usize) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    /// Pick the left representatives given the two orbit sizes.
    pub(crate) fn use_left_reps(&self, lambda_len: usize, rho_len: usize) -> bool {
        match self.covering_side {
            CoveringSide::Auto => lambda_len < rho_len,
            CoveringSide::Left => true,
            CoveringSide::Right => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = KoniecznyConfig::new()
            .with_covering_side(CoveringSide::Right)
            .with_check_interval(0);
        assert_eq!(config.covering_side, CoveringSide::Right);
        assert_eq!(config.check_interval, 1);
        assert!(!config.use_left_reps(1, 100));
    }

    #[test]
    fn test_auto_picks_smaller_orbit() {
        let config = KoniecznyConfig::default();
        assert!(config.use_left_reps(10, 20));
        assert!(!config.use_left_reps(20, 10));
        assert!(!config.use_left_reps(10, 10));
    }
}

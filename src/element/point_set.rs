// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PointSet type for representing sets of points as bitsets.
//!
//! A PointSet is a compact representation of a subset of `0..64` using a
//! bitset, where bit i represents the presence of point i. It is the value
//! type of the Lambda and Rho orbits for transformations and partial
//! permutations, and the row type of boolean matrices.
//!
//! # Examples
//!
//! ```
//! use konieczny::element::PointSet;
//!
//! let mut set = PointSet::empty();
//! set.insert(0);
//! set.insert(2);
//! set.insert(5);
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(format!("{}", set), "{0,2,5}");
//!
//! let points: Vec<usize> = set.iter().collect();
//! assert_eq!(points, vec![0, 2, 5]);
//! ```

use std::fmt;

/// Number of points a PointSet can hold, and the largest degree accepted
/// for transformations and partial permutations. Boolean matrices have a
/// smaller limit, see [`MAX_SEMIGROUP_DIM`](crate::element::MAX_SEMIGROUP_DIM).
pub const MAX_POINTS: usize = 64;

/// A set of points represented as a bitset.
///
/// Bit i (counting from LSB) is set if point i is in the set.
/// This provides O(1) insert, remove, and contains operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointSet(u64);

impl PointSet {
    /// Create an empty point set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create the set `{0, 1, ..., n-1}`.
    ///
    /// # Panics
    ///
    /// Panics if `n > MAX_POINTS`.
    pub fn full(n: usize) -> Self {
        assert!(n <= MAX_POINTS, "PointSet out of range: {}", n);
        if n == MAX_POINTS {
            Self(u64::MAX)
        } else {
            Self((1u64 << n) - 1)
        }
    }

    /// Create a point set from a slice of points.
    pub fn from_points(points: &[usize]) -> Self {
        let mut set = Self::empty();
        for &point in points {
            set.insert(point);
        }
        set
    }

    /// Create a point set from a raw bit value.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Check if the set contains a specific point.
    pub fn contains(self, point: usize) -> bool {
        point < MAX_POINTS && (self.0 >> point) & 1 != 0
    }

    /// Insert a point into the set.
    pub fn insert(&mut self, point: usize) {
        debug_assert!(point < MAX_POINTS);
        self.0 |= 1 << point;
    }

    /// Remove a point from the set.
    pub fn remove(&mut self, point: usize) {
        debug_assert!(point < MAX_POINTS);
        self.0 &= !(1 << point);
    }

    /// Get the number of points in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// True if every point of `self` is in `other`.
    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate over all points in the set.
    ///
    /// Points are yielded in ascending order (0, 1, 2, ...).
    pub fn iter(self) -> impl Iterator<Item = usize> {
        PointSetIter { bits: self.0 }
    }
}

/// Iterator over points in a PointSet.
struct PointSetIter {
    bits: u64,
}

impl Iterator for PointSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let point = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(point)
    }
}

impl fmt::Display for PointSet {
    /// Format a point set as "{0,2,5}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, point) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, "}}")
    }
}

impl From<&[usize]> for PointSet {
    fn from(points: &[usize]) -> Self {
        Self::from_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = PointSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
        assert_eq!(format!("{}", set), "{}");
    }

    #[test]
    fn test_full_set() {
        assert_eq!(PointSet::full(5).len(), 5);
        assert_eq!(PointSet::full(0), PointSet::empty());
        assert_eq!(PointSet::full(64).len(), 64);
        assert!(PointSet::full(64).contains(63));
    }

    #[test]
    fn test_insert_remove() {
        let mut set = PointSet::empty();
        set.insert(3);
        set.insert(63);
        assert!(set.contains(3));
        assert!(set.contains(63));
        assert!(!set.contains(4));
        assert!(!set.contains(100));

        set.remove(3);
        assert!(!set.contains(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_operations() {
        let a = PointSet::from_points(&[0, 1, 2]);
        let b = PointSet::from_points(&[1, 2, 3]);
        assert_eq!(a.union(b), PointSet::from_points(&[0, 1, 2, 3]));
        assert_eq!(a.intersection(b), PointSet::from_points(&[1, 2]));
        assert!(a.intersection(b).is_subset(a));
        assert!(!a.is_subset(b));
    }

    #[test]
    fn test_iteration_order() {
        let set = PointSet::from_points(&[9, 1, 40, 0]);
        let points: Vec<usize> = set.iter().collect();
        assert_eq!(points, vec![0, 1, 9, 40]);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Square matrices over the boolean semiring `({0, 1}, or, and)`.
//!
//! Row `i` is stored as a `u64` whose bit `j` is the entry `(i, j)`, so the
//! dimension is at most 64. The rank of a matrix is the size of its row
//! space, which can reach `2^dim`, so semigroups are only computed for
//! dimensions up to [`MAX_SEMIGROUP_DIM`].

use crate::element::{Element, MAX_POINTS};
use crate::errors::{KoniecznyError, Result};
use std::collections::HashSet;
use std::fmt;
use std::ops::Mul;

/// Largest dimension accepted as a semigroup generator.
pub const MAX_SEMIGROUP_DIM: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BooleanMat(Vec<u64>);

impl BooleanMat {
    /// Create a matrix from its rows, checking no bit lies outside the dimension.
    pub fn new(rows: Vec<u64>) -> Result<Self> {
        let dim = rows.len();
        if dim > MAX_POINTS {
            return Err(KoniecznyError::DegreeTooLarge {
                degree: dim,
                max: MAX_POINTS,
            });
        }
        let mask = row_mask(dim);
        if let Some(row) = rows.iter().position(|&bits| bits & !mask != 0) {
            return Err(KoniecznyError::RowOutOfRange { row, dim });
        }
        Ok(Self(rows))
    }

    /// Create a matrix from rows of 0/1 entries.
    pub fn from_entries(entries: &[&[u8]]) -> Result<Self> {
        let dim = entries.len();
        let mut rows = Vec::with_capacity(dim);
        for (row, values) in entries.iter().enumerate() {
            if values.len() != dim || values.iter().any(|&v| v > 1) {
                return Err(KoniecznyError::RowOutOfRange { row, dim });
            }
            rows.push(
                values
                    .iter()
                    .enumerate()
                    .filter(|&(_, &v)| v == 1)
                    .fold(0u64, |bits, (j, _)| bits | (1 << j)),
            );
        }
        Self::new(rows)
    }

    pub fn rows(&self) -> &[u64] {
        &self.0
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        (self.0[i] >> j) & 1 != 0
    }

    pub fn transpose(&self) -> Self {
        let mut out = self.clone();
        transpose_into(&mut out.0, &self.0);
        out
    }

    /// Number of vectors in the row space, the zero vector included.
    pub fn row_space_size(&self) -> usize {
        span_size(&self.0)
    }
}

/// Bits `0..dim`.
pub(crate) fn row_mask(dim: usize) -> u64 {
    if dim >= 64 {
        u64::MAX
    } else {
        (1u64 << dim) - 1
    }
}

/// `out` becomes the transpose of the square matrix `rows`.
pub(crate) fn transpose_into(out: &mut Vec<u64>, rows: &[u64]) {
    out.clear();
    out.resize(rows.len(), 0);
    for (i, &row) in rows.iter().enumerate() {
        let mut bits = row;
        while bits != 0 {
            let j = bits.trailing_zeros() as usize;
            out[j] |= 1 << i;
            bits &= bits - 1;
        }
    }
}

/// The OR of the rows of `y` selected by the bits of `v`.
pub(crate) fn combine_rows(v: u64, y: &[u64]) -> u64 {
    let mut bits = v;
    let mut out = 0;
    while bits != 0 {
        out |= y[bits.trailing_zeros() as usize];
        bits &= bits - 1;
    }
    out
}

/// Number of distinct unions of subsets of `rows`.
pub(crate) fn span_size(rows: &[u64]) -> usize {
    let mut span: HashSet<u64> = HashSet::from([0]);
    let mut fresh = Vec::new();
    for &row in rows {
        fresh.clear();
        fresh.extend(span.iter().map(|&v| v | row).filter(|v| !span.contains(v)));
        span.extend(fresh.iter().copied());
    }
    span.len()
}

impl Element for BooleanMat {
    fn degree(&self) -> usize {
        self.0.len()
    }

    fn identity(degree: usize) -> Self {
        Self((0..degree).map(|i| 1u64 << i).collect())
    }

    fn redefine(&mut self, x: &Self, y: &Self) {
        debug_assert_eq!(x.degree(), y.degree());
        self.0.clear();
        self.0.extend(x.0.iter().map(|&row| combine_rows(row, &y.0)));
    }
}

impl Mul for &BooleanMat {
    type Output = BooleanMat;

    fn mul(self, rhs: Self) -> BooleanMat {
        BooleanMat::product(self, rhs)
    }
}

impl fmt::Display for BooleanMat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = self.0.len();
        write!(f, "[")?;
        for i in 0..dim {
            if i > 0 {
                write!(f, ",")?;
            }
            for j in 0..dim {
                write!(f, "{}", u8::from(self.get(i, j)))?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(entries: &[&[u8]]) -> BooleanMat {
        BooleanMat::from_entries(entries).unwrap()
    }

    #[test]
    fn test_product() {
        let x = mat(&[&[1, 1], &[0, 0]]);
        let y = mat(&[&[0, 1], &[1, 0]]);
        assert_eq!(&x * &y, mat(&[&[1, 1], &[0, 0]]));
        assert_eq!(&y * &x, mat(&[&[0, 0], &[1, 1]]));
    }

    #[test]
    fn test_identity_and_transpose() {
        let x = mat(&[&[1, 1, 0], &[0, 0, 1], &[0, 0, 0]]);
        let id = BooleanMat::identity(3);
        assert_eq!(&x * &id, x);
        assert_eq!(&id * &x, x);
        assert_eq!(x.transpose(), mat(&[&[1, 0, 0], &[1, 0, 0], &[0, 1, 0]]));
        assert_eq!(x.transpose().transpose(), x);
    }

    #[test]
    fn test_row_space_size() {
        assert_eq!(BooleanMat::identity(3).row_space_size(), 8);
        assert_eq!(mat(&[&[1, 1], &[1, 0]]).row_space_size(), 3);
        assert_eq!(mat(&[&[0, 0], &[0, 0]]).row_space_size(), 1);
    }

    #[test]
    fn test_rejects_bad_rows() {
        assert_eq!(
            BooleanMat::new(vec![0b1, 0b100]).unwrap_err(),
            KoniecznyError::RowOutOfRange { row: 1, dim: 2 }
        );
        assert!(BooleanMat::from_entries(&[&[1, 0], &[1]]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(mat(&[&[1, 0], &[1, 1]]).to_string(), "[10,11]");
    }
}

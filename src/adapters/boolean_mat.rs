// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Boolean matrices: Lambda is the row space, Rho the column space.
//!
//! A space is stored as its unique basis: the nonzero vectors of the space
//! that are not the union of the vectors strictly below them, sorted.

use crate::adapters::KoniecznyAdapter;
use crate::element::boolean_mat::{
    combine_rows, row_mask, span_size, transpose_into, MAX_SEMIGROUP_DIM,
};
use crate::element::BooleanMat;
use crate::errors::{KoniecznyError, Result};
use crate::orbit::{Action, Side};

/// Reduce a spanning list of rows to the basis of its span.
pub(crate) fn reduce_basis(rows: &mut Vec<u64>, scratch: &mut Vec<u64>) {
    rows.retain(|&r| r != 0);
    rows.sort_unstable();
    rows.dedup();
    scratch.clear();
    scratch.extend_from_slice(rows);
    rows.retain(|&r| {
        let below = scratch
            .iter()
            .filter(|&&s| s != r && s & !r == 0)
            .fold(0, |acc, &s| acc | s);
        below != r
    });
}

fn basis_of(rows: &[u64]) -> Vec<u64> {
    let mut basis = rows.to_vec();
    reduce_basis(&mut basis, &mut Vec::new());
    basis
}

fn transposed(rows: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(rows.len());
    transpose_into(&mut out, rows);
    out
}

/// Right action on row-space bases.
#[derive(Debug, Default, Clone)]
pub struct RowSpaceAction {
    scratch: Vec<u64>,
}

impl Action<BooleanMat, Vec<u64>> for RowSpaceAction {
    const SIDE: Side = Side::Right;

    fn act(&mut self, res: &mut Vec<u64>, pt: &Vec<u64>, x: &BooleanMat) {
        res.clear();
        res.extend(pt.iter().map(|&v| combine_rows(v, x.rows())));
        reduce_basis(res, &mut self.scratch);
    }
}

/// Left action on column-space bases, through the transpose.
#[derive(Debug, Default, Clone)]
pub struct ColumnSpaceAction {
    transpose: Vec<u64>,
    scratch: Vec<u64>,
}

impl Action<BooleanMat, Vec<u64>> for ColumnSpaceAction {
    const SIDE: Side = Side::Left;

    fn act(&mut self, res: &mut Vec<u64>, pt: &Vec<u64>, x: &BooleanMat) {
        transpose_into(&mut self.transpose, x.rows());
        res.clear();
        res.extend(pt.iter().map(|&v| combine_rows(v, &self.transpose)));
        reduce_basis(res, &mut self.scratch);
    }
}

impl KoniecznyAdapter for BooleanMat {
    type Lambda = Vec<u64>;
    type Rho = Vec<u64>;
    type LambdaAction = RowSpaceAction;
    type RhoAction = ColumnSpaceAction;

    fn lambda(x: &Self) -> Vec<u64> {
        basis_of(x.rows())
    }

    fn rho(x: &Self) -> Vec<u64> {
        basis_of(&transposed(x.rows()))
    }

    fn rank(x: &Self) -> usize {
        span_size(&Self::lambda(x))
    }

    /// Clifford-Miller: with `x` having column space `rho` and `y` having
    /// row space `lambda`, the H-class is a group iff `y * x` is R-related
    /// to `y` and L-related to `x`.
    fn is_group_index(rho: &Vec<u64>, lambda: &Vec<u64>) -> bool {
        let dim = rho
            .iter()
            .chain(lambda)
            .map(|&v| 64 - v.leading_zeros() as usize)
            .max()
            .unwrap_or(0)
            .max(rho.len())
            .max(lambda.len());
        let mut y = lambda.clone();
        y.resize(dim, 0);
        let mut columns = rho.clone();
        columns.resize(dim, 0);
        let x = transposed(&columns);
        let yx: Vec<u64> = y.iter().map(|&row| combine_rows(row, &x)).collect();
        basis_of(&yx) == basis_of(&x) && basis_of(&transposed(&yx)) == basis_of(&transposed(&y))
    }

    /// Row spaces are enumerated to compute ranks, so the dimension is
    /// capped well below the 64 the representation holds.
    fn validate(x: &Self) -> Result<()> {
        let dim = x.rows().len();
        if dim > MAX_SEMIGROUP_DIM {
            return Err(KoniecznyError::DegreeTooLarge {
                degree: dim,
                max: MAX_SEMIGROUP_DIM,
            });
        }
        Ok(())
    }

    /// Units of the boolean matrix monoid are the permutation matrices.
    fn is_unit(x: &Self) -> bool {
        let rows = x.rows();
        rows.iter().all(|r| r.count_ones() == 1)
            && rows.iter().fold(0, |acc, &r| acc | r) == row_mask(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn mat(entries: &[&[u8]]) -> BooleanMat {
        BooleanMat::from_entries(entries).unwrap()
    }

    #[test]
    fn test_reduce_basis() {
        let mut rows = vec![0b011, 0b001, 0b010, 0b000, 0b001];
        reduce_basis(&mut rows, &mut Vec::new());
        assert_eq!(rows, vec![0b001, 0b010]);

        let mut rows = vec![0b110, 0b011];
        reduce_basis(&mut rows, &mut Vec::new());
        assert_eq!(rows, vec![0b011, 0b110]);
    }

    #[test]
    fn test_lambda_rho_rank() {
        let x = mat(&[&[1, 1, 0], &[1, 0, 0], &[1, 1, 0]]);
        assert_eq!(BooleanMat::lambda(&x), vec![0b001, 0b011]);
        // Columns: (1,1,1), (1,0,1), (0,0,0).
        assert_eq!(BooleanMat::rho(&x), vec![0b101, 0b111]);
        assert_eq!(BooleanMat::rank(&x), 3);
        assert_eq!(BooleanMat::rank(&BooleanMat::identity(4)), 16);
    }

    #[test]
    fn test_actions_agree_with_products() {
        let elements = [
            mat(&[&[1, 1, 0], &[1, 0, 0], &[1, 1, 0]]),
            mat(&[&[0, 1, 0], &[0, 0, 1], &[1, 0, 0]]),
            mat(&[&[1, 0, 0], &[1, 1, 0], &[0, 0, 0]]),
            mat(&[&[0, 0, 1], &[0, 1, 1], &[1, 0, 0]]),
        ];
        let mut rows = RowSpaceAction::default();
        let mut columns = ColumnSpaceAction::default();
        let mut pt = Vec::new();
        for x in &elements {
            for y in &elements {
                let xy = BooleanMat::product(x, y);
                rows.act(&mut pt, &BooleanMat::lambda(x), y);
                assert_eq!(pt, BooleanMat::lambda(&xy));
                columns.act(&mut pt, &BooleanMat::rho(y), x);
                assert_eq!(pt, BooleanMat::rho(&xy));
            }
        }
    }

    #[test]
    fn test_is_group_index() {
        let idempotent = mat(&[&[1, 0], &[0, 0]]);
        assert!(BooleanMat::is_group_index(
            &BooleanMat::rho(&idempotent),
            &BooleanMat::lambda(&idempotent)
        ));
        let nilpotent = mat(&[&[0, 1], &[0, 0]]);
        assert!(!BooleanMat::is_group_index(
            &BooleanMat::rho(&nilpotent),
            &BooleanMat::lambda(&nilpotent)
        ));
        let id = BooleanMat::identity(3);
        assert!(BooleanMat::is_group_index(
            &BooleanMat::rho(&id),
            &BooleanMat::lambda(&id)
        ));
    }

    #[test]
    fn test_validate_caps_dimension() {
        let fits = BooleanMat::identity(MAX_SEMIGROUP_DIM);
        assert_eq!(BooleanMat::validate(&fits), Ok(()));
        let too_big = BooleanMat::identity(MAX_SEMIGROUP_DIM + 1);
        assert_eq!(
            BooleanMat::validate(&too_big),
            Err(KoniecznyError::DegreeTooLarge {
                degree: MAX_SEMIGROUP_DIM + 1,
                max: MAX_SEMIGROUP_DIM
            })
        );
    }

    #[test]
    fn test_units() {
        assert!(BooleanMat::is_unit(&mat(&[&[0, 1], &[1, 0]])));
        assert!(!BooleanMat::is_unit(&mat(&[&[1, 1], &[1, 0]])));
        assert!(!BooleanMat::is_unit(&mat(&[&[1, 0], &[1, 0]])));
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{bmat, brute_force, check_against_brute_force, init_tracing};
use konieczny::element::MAX_SEMIGROUP_DIM;
use konieczny::{BooleanMat, Element, Konieczny, KoniecznyError};

/// Generators of the monoid of all 2x2 boolean matrices.
fn b2() -> Vec<BooleanMat> {
    vec![
        bmat(&[&[0, 1], &[1, 0]]),
        bmat(&[&[1, 0], &[0, 0]]),
        bmat(&[&[1, 1], &[0, 1]]),
        bmat(&[&[1, 0], &[1, 1]]),
    ]
}

#[test]
fn test_all_2x2_matrices() {
    init_tracing();
    let gens = b2();
    assert_eq!(brute_force(&gens).len(), 16);
    let mut s = Konieczny::new(gens).unwrap();
    assert!(!s.adjoined_identity());
    assert_eq!(s.size().unwrap(), 16);
    check_against_brute_force(&b2());
}

#[test]
fn test_non_regular_classes() {
    // x is not regular: its idempotent power x^2 lies strictly below it.
    let x = bmat(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 1]]);
    let mut s = Konieczny::new(vec![x.clone()]).unwrap();
    assert!(s.adjoined_identity());
    assert!(s.contains(&x).unwrap());
    assert!(!s.contains(&BooleanMat::identity(3)).unwrap());
    check_against_brute_force(&[x]);
}

#[test]
fn test_brute_force_comparisons() {
    let cases = vec![
        vec![
            bmat(&[&[0, 1, 0], &[0, 0, 1], &[1, 0, 0]]),
            bmat(&[&[1, 1, 0], &[0, 0, 0], &[0, 0, 1]]),
        ],
        vec![
            bmat(&[&[1, 0, 1], &[0, 1, 0], &[0, 0, 0]]),
            bmat(&[&[0, 0, 1], &[1, 0, 0], &[0, 1, 1]]),
        ],
        vec![bmat(&[&[0, 1, 1], &[1, 0, 1], &[1, 1, 0]])],
    ];
    for gens in &cases {
        check_against_brute_force(gens);
    }
}

#[test]
fn test_dimension_above_limit_is_rejected() {
    let mut rows: Vec<u64> = (0..=MAX_SEMIGROUP_DIM).map(|i| 1 << i).collect();
    rows[0] = 0b11;
    let x = BooleanMat::new(rows).unwrap();
    assert_eq!(
        Konieczny::new(vec![x]).err(),
        Some(KoniecznyError::DegreeTooLarge {
            degree: MAX_SEMIGROUP_DIM + 1,
            max: MAX_SEMIGROUP_DIM
        })
    );

    // At the limit, a single generator is still quick.
    let mut rows: Vec<u64> = (0..MAX_SEMIGROUP_DIM).map(|i| 1 << i).collect();
    rows[0] = 0b11;
    let mut s = Konieczny::new(vec![BooleanMat::new(rows).unwrap()]).unwrap();
    assert_eq!(s.size().unwrap(), 1);
}
